use colored::*;
use std::time::Duration;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_heading(title: &str) -> String {
        format!("=== {} ===", title.cyan().bold())
    }

    pub fn format_result(label: &str, value: &str) -> String {
        format!("{}: {}", label, value.green())
    }

    pub fn format_nil(label: &str) -> String {
        format!("{}: {}", label, "(nil)".red())
    }

    /// 固定规模的计时行
    pub fn format_timing_row(size: usize, duration: Duration) -> String {
        format!(
            "  size {:>9}: {}",
            size.to_string().blue(),
            format!("{:?}", duration).cyan()
        )
    }

    /// 带归一化耗时的计时行，`unit` 如 "time/n" 或 "time/n²"
    pub fn format_scaling_row(size: usize, duration: Duration, unit: &str, normalized: f64) -> String {
        format!(
            "  size {:>9}: {:>12} | {} = {}",
            size.to_string().blue(),
            format!("{:?}", duration).cyan(),
            unit,
            format!("{:.12}s", normalized).yellow()
        )
    }

    pub fn format_observation(text: &str) -> String {
        format!("💡 {}", text.yellow())
    }

    pub fn format_error(err: &str) -> String {
        format!("(error) {}", err.red())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_heading() {
        let result = OutputFormatter::format_heading("Linear time - O(n)");
        // 注意：测试时不检查颜色代码，只检查内容
        assert!(result.contains("Linear time - O(n)"));
        assert!(result.starts_with("==="));
    }

    #[test]
    fn test_format_result_and_nil() {
        let result = OutputFormatter::format_result("Maximum", "90");
        assert!(result.contains("Maximum"));
        assert!(result.contains("90"));

        let nil = OutputFormatter::format_nil("Maximum");
        assert!(nil.contains("nil"));
    }

    #[test]
    fn test_format_timing_rows() {
        let row = OutputFormatter::format_timing_row(1000, Duration::from_micros(12));
        assert!(row.contains("1000"));
        assert!(row.contains("12"));

        let scaled =
            OutputFormatter::format_scaling_row(2000, Duration::from_micros(24), "time/n", 1.2e-8);
        assert!(scaled.contains("2000"));
        assert!(scaled.contains("time/n"));
    }

    #[test]
    fn test_format_observation() {
        let obs = OutputFormatter::format_observation("time stays flat");
        assert!(obs.contains("time stays flat"));
    }
}
