use std::collections::HashMap;
use tracing::debug;

use crate::algorithms::constant::{direct_access, map_lookup};
use crate::config::BigoConfig;
use crate::demo::formatter::OutputFormatter;
use crate::demo::report::DemoReport;
use crate::demo::timing::time_call;
use crate::demo::{dataset, Demonstration};
use crate::Result;

/// O(1) 常数时间演示：按索引访问与按键查找
pub struct ConstantDemo;

impl Demonstration for ConstantDemo {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn description(&self) -> &'static str {
        "O(1) indexed access and hash map lookup"
    }

    fn run(&self, config: &BigoConfig) -> Result<DemoReport> {
        let mut report = DemoReport::new(self.name(), "O(1)");

        println!("{}", OutputFormatter::format_heading("Constant time - O(1)"));

        // 示例 1: 按索引直接访问
        let items = [10, 20, 30, 40, 50];
        let element = direct_access(&items, 2)?;
        println!(
            "{}",
            OutputFormatter::format_result("Element at index 2", &element.to_string())
        );

        // 示例 2: 按键查找
        let mut map = HashMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("c", 3);

        match map_lookup(&map, &"b") {
            Some(value) => println!(
                "{}",
                OutputFormatter::format_result("Value for key 'b'", &value.to_string())
            ),
            None => println!("{}", OutputFormatter::format_nil("Value for key 'b'")),
        }

        // 不同规模下访问中间元素，观察时间是否恒定
        println!();
        println!("Access time for different input sizes:");
        for &size in &config.demos.constant_sizes {
            let data = dataset::ascending(size);

            let (element, duration) = time_call(|| direct_access(&data, size / 2));
            let element = *element?;
            debug!(size, element, "constant access sample");

            report.record(size, duration);
            println!("{}", OutputFormatter::format_timing_row(size, duration));
        }

        println!();
        let observation = "Access time stays flat no matter how large the input grows";
        println!("{}", OutputFormatter::format_observation(observation));
        report.observe(observation);
        println!();

        Ok(report)
    }
}
