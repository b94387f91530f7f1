use tracing::debug;

use crate::algorithms::quadratic::{bubble_sort, find_pairs_with_sum, has_duplicates};
use crate::config::BigoConfig;
use crate::demo::formatter::OutputFormatter;
use crate::demo::report::DemoReport;
use crate::demo::timing::{time_call, TimingRecord};
use crate::demo::{dataset, Demonstration};
use crate::Result;

/// O(n²) 平方时间演示：冒泡排序、重复检测、两数之和枚举
pub struct QuadraticDemo;

impl Demonstration for QuadraticDemo {
    fn name(&self) -> &'static str {
        "quadratic"
    }

    fn description(&self) -> &'static str {
        "O(n^2) bubble sort, duplicate detection and pair-sum search"
    }

    fn run(&self, config: &BigoConfig) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), "O(n^2)");

        println!("{}", OutputFormatter::format_heading("Quadratic time - O(n^2)"));

        // 示例 1: 冒泡排序
        let unsorted = [64, 34, 25, 12, 22, 11, 90];
        println!(
            "{}",
            OutputFormatter::format_result("Original list", &format!("{:?}", unsorted))
        );
        let sorted = bubble_sort(&unsorted);
        println!(
            "{}",
            OutputFormatter::format_result("Sorted list", &format!("{:?}", sorted))
        );

        // 示例 2: 重复检测
        let with_duplicates = [1, 2, 3, 4, 2, 5];
        let without_duplicates = [1, 2, 3, 4, 5];
        println!(
            "{}",
            OutputFormatter::format_result(
                &format!("{:?} has duplicates", with_duplicates),
                &has_duplicates(&with_duplicates).to_string()
            )
        );
        println!(
            "{}",
            OutputFormatter::format_result(
                &format!("{:?} has duplicates", without_duplicates),
                &has_duplicates(&without_duplicates).to_string()
            )
        );

        // 示例 3: 两数之和枚举
        let values = [1, 2, 3, 4, 5, 6];
        let target = 7;
        let pairs = find_pairs_with_sum(&values, target);
        println!(
            "{}",
            OutputFormatter::format_result(
                &format!("Pairs in {:?} that sum to {}", values, target),
                &format!("{:?}", pairs)
            )
        );

        // 对冒泡排序计时，逆序输入是最坏情况
        println!();
        println!("Bubble sort time for different input sizes (reversed input):");
        for &size in &config.demos.quadratic_sizes {
            let data = dataset::descending(size);

            let (sorted, duration) = time_call(|| bubble_sort(&data));
            debug!(size, sorted_len = sorted.len(), "quadratic sort sample");

            let record = TimingRecord::new(size, duration);
            println!(
                "{}",
                OutputFormatter::format_scaling_row(
                    size,
                    duration,
                    "time/n²",
                    record.per_n_squared()
                )
            );
            report.record(size, duration);
        }

        println!();
        let observation =
            "Doubling the input size roughly quadruples the running time (2^2 = 4)";
        println!("{}", OutputFormatter::format_observation(observation));
        report.observe(observation);
        println!();

        Ok(report)
    }
}
