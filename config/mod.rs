use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// bigo 演示配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigoConfig {
    /// 演示输入规模配置
    pub demos: DemoConfig,

    /// 输出配置
    pub output: OutputConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 演示输入规模配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// O(1) 演示使用的输入规模
    #[serde(default = "default_constant_sizes")]
    pub constant_sizes: Vec<usize>,

    /// O(n) 演示使用的输入规模
    #[serde(default = "default_linear_sizes")]
    pub linear_sizes: Vec<usize>,

    /// O(n²) 演示使用的输入规模
    #[serde(default = "default_quadratic_sizes")]
    pub quadratic_sizes: Vec<usize>,

    /// 随机输入数据的种子，保证结果可复现
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否使用彩色输出
    #[serde(default = "default_colored")]
    pub colored: bool,

    /// 运行结束后将汇总报告写入该JSON文件（可选）
    pub json_file: Option<PathBuf>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_constant_sizes() -> Vec<usize> {
    vec![100, 10_000, 1_000_000]
}

fn default_linear_sizes() -> Vec<usize> {
    vec![1_000, 2_000, 4_000, 8_000]
}

fn default_quadratic_sizes() -> Vec<usize> {
    vec![100, 200, 400]
}

fn default_seed() -> u64 {
    42
}

fn default_colored() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for BigoConfig {
    fn default() -> Self {
        Self {
            demos: DemoConfig {
                constant_sizes: default_constant_sizes(),
                linear_sizes: default_linear_sizes(),
                quadratic_sizes: default_quadratic_sizes(),
                seed: default_seed(),
            },
            output: OutputConfig {
                colored: default_colored(),
                json_file: None,
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl BigoConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（BIGO__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use bigo::config::BigoConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = BigoConfig::from_file("bigo.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::with_name(path).required(false))
            // 3. 加载环境变量（BIGO__ 前缀，双下划线分隔嵌套）
            .add_source(config::Environment::with_prefix("BIGO").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 各规模列表非空且严格递增
    /// - 日志级别与日志输出
    pub fn validate(&self) -> Result<(), String> {
        Self::validate_sizes("demos.constant_sizes", &self.demos.constant_sizes)?;
        Self::validate_sizes("demos.linear_sizes", &self.demos.linear_sizes)?;
        Self::validate_sizes("demos.quadratic_sizes", &self.demos.quadratic_sizes)?;

        // 验证日志级别
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        // 验证日志输出
        match self.logging.output.as_str() {
            "stdout" | "file" => {}
            _ => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    self.logging.output
                ))
            }
        }

        if self.logging.output == "file" && self.logging.log_file.is_none() {
            return Err("Log output is 'file' but log_file path is not specified".to_string());
        }

        Ok(())
    }

    fn validate_sizes(name: &str, sizes: &[usize]) -> Result<(), String> {
        if sizes.is_empty() {
            return Err(format!("{} must not be empty", name));
        }
        if sizes[0] == 0 {
            return Err(format!("{} must contain sizes greater than 0", name));
        }
        if sizes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(format!("{} must be strictly increasing", name));
        }
        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 Bigo Configuration:");
        println!("   Constant sizes:  {:?}", self.demos.constant_sizes);
        println!("   Linear sizes:    {:?}", self.demos.linear_sizes);
        println!("   Quadratic sizes: {:?}", self.demos.quadratic_sizes);
        println!("   Seed:            {}", self.demos.seed);
        println!();
        println!(
            "   Colored output:  {}",
            if self.output.colored { "enabled" } else { "disabled" }
        );
        if let Some(ref json_file) = self.output.json_file {
            println!("   JSON report:     {}", json_file.display());
        }
        println!();
        println!("   Log Level:       {}", self.logging.level);
        println!("   Log Output:      {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:        {}", log_file.display());
        }
        println!();
    }
}
