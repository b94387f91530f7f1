use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::demo::timing::TimingRecord;

/// 用于JSON导出的单个演示报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoReport {
    /// 演示名称
    pub demo: String,
    /// 复杂度类别，如 "O(1)"
    pub complexity: String,
    /// 各输入规模的计时样本
    pub samples: Vec<TimingRecord>,
    /// 演示结束时打印的观察结论
    pub observations: Vec<String>,
}

impl DemoReport {
    pub fn new(demo: &str, complexity: &str) -> Self {
        Self {
            demo: demo.to_string(),
            complexity: complexity.to_string(),
            samples: Vec::new(),
            observations: Vec::new(),
        }
    }

    /// 记录一个计时样本
    pub fn record(&mut self, size: usize, duration: Duration) {
        self.samples.push(TimingRecord::new(size, duration));
    }

    /// 记录一条观察结论
    pub fn observe(&mut self, text: impl Into<String>) {
        self.observations.push(text.into());
    }
}

/// 一次完整运行的汇总报告
///
/// 可以导出为JSON字符串，供外部工具绘图或比较不同机器上的结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// 生成报告的 bigo 版本
    pub version: String,
    pub reports: Vec<DemoReport>,
}

impl SuiteReport {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            reports: Vec::new(),
        }
    }

    pub fn push(&mut self, report: DemoReport) {
        self.reports.push(report);
    }

    /// 导出为JSON格式
    pub fn export_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 保存报告到文件
    pub fn save_to_file(&self, path: &Path) -> crate::Result<()> {
        let json = self.export_to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report_accumulates() {
        let mut report = DemoReport::new("linear", "O(n)");
        report.record(1000, Duration::from_micros(10));
        report.record(2000, Duration::from_micros(21));
        report.observe("time roughly doubles with input size");

        assert_eq!(report.samples.len(), 2);
        assert_eq!(report.samples[1].size, 2000);
        assert_eq!(report.observations.len(), 1);
    }

    #[test]
    fn test_suite_export_to_json() {
        let mut suite = SuiteReport::new();
        let mut report = DemoReport::new("quadratic", "O(n^2)");
        report.record(100, Duration::from_millis(1));
        suite.push(report);

        let json = suite.export_to_json().unwrap();
        assert!(json.contains("\"demo\": \"quadratic\""));
        assert!(json.contains("\"complexity\": \"O(n^2)\""));
        assert!(json.contains("\"size\": 100"));
    }

    #[test]
    fn test_suite_save_to_file() {
        use tempfile::NamedTempFile;

        let mut suite = SuiteReport::new();
        suite.push(DemoReport::new("constant", "O(1)"));

        let temp_file = NamedTempFile::new().unwrap();
        suite.save_to_file(temp_file.path()).unwrap();

        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(written.contains("\"demo\": \"constant\""));
    }
}
