use tracing::debug;

use crate::algorithms::linear::{find_maximum, linear_search, sum_elements};
use crate::config::BigoConfig;
use crate::demo::formatter::OutputFormatter;
use crate::demo::report::DemoReport;
use crate::demo::timing::{time_call, TimingRecord};
use crate::demo::{dataset, Demonstration};
use crate::Result;

/// O(n) 线性时间演示：线性查找、求和、求最大值
pub struct LinearDemo;

impl Demonstration for LinearDemo {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn description(&self) -> &'static str {
        "O(n) linear search, summation and maximum finding"
    }

    fn run(&self, config: &BigoConfig) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), "O(n)");

        println!("{}", OutputFormatter::format_heading("Linear time - O(n)"));

        let items = [64, 34, 25, 12, 22, 11, 90];

        // 示例 1: 线性查找
        let target = 22;
        match linear_search(&items, &target) {
            Some(index) => println!(
                "{}",
                OutputFormatter::format_result(
                    &format!("Value {} found at index", target),
                    &index.to_string()
                )
            ),
            None => println!(
                "{}",
                OutputFormatter::format_nil(&format!("Value {} found at index", target))
            ),
        }

        // 示例 2: 求和
        let sum: i64 = sum_elements(&items);
        println!(
            "{}",
            OutputFormatter::format_result("Sum of elements", &sum.to_string())
        );

        // 示例 3: 求最大值
        match find_maximum(&items) {
            Some(maximum) => println!(
                "{}",
                OutputFormatter::format_result("Maximum element", &maximum.to_string())
            ),
            None => println!("{}", OutputFormatter::format_nil("Maximum element")),
        }

        // 对求和计时，观察线性增长
        println!();
        println!("Summation time for different input sizes:");
        for &size in &config.demos.linear_sizes {
            let data = dataset::shuffled(size, config.demos.seed);

            let (sum, duration) = time_call(|| sum_elements(&data));
            debug!(size, sum, "linear summation sample");

            let record = TimingRecord::new(size, duration);
            println!(
                "{}",
                OutputFormatter::format_scaling_row(size, duration, "time/n", record.per_element())
            );
            report.record(size, duration);
        }

        println!();
        let observation = "Doubling the input size roughly doubles the running time";
        println!("{}", OutputFormatter::format_observation(observation));
        report.observe(observation);
        println!();

        Ok(report)
    }
}
