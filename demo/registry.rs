use std::collections::HashMap;
use tracing::info;

use crate::config::BigoConfig;
use crate::demo::report::{DemoReport, SuiteReport};
use crate::Result;

use super::{constant::ConstantDemo, linear::LinearDemo, quadratic::QuadraticDemo, DemoType};

/// 演示注册表，管理所有可用的复杂度演示
pub struct DemoRegistry {
    demos: HashMap<String, DemoType>,
    // 注册顺序，run_all 按此顺序执行
    order: Vec<String>,
}

impl DemoRegistry {
    /// 创建新的注册表并注册全部演示
    pub fn new() -> Self {
        let mut registry = Self {
            demos: HashMap::new(),
            order: Vec::new(),
        };

        // 按复杂度从低到高注册
        registry.register(DemoType::Constant(ConstantDemo));
        registry.register(DemoType::Linear(LinearDemo));
        registry.register(DemoType::Quadratic(QuadraticDemo));

        registry
    }

    /// 注册一个演示
    pub fn register(&mut self, demo: DemoType) {
        let name = demo.name().to_lowercase();
        self.order.push(name.clone());
        self.demos.insert(name, demo);
    }

    /// 执行指定名称的演示
    pub fn execute(&self, demo_name: &str, config: &BigoConfig) -> Result<DemoReport> {
        let name = demo_name.to_lowercase();
        match self.demos.get(&name) {
            Some(demo) => {
                info!("Running demonstration '{}': {}", demo.name(), demo.description());
                demo.run(config)
            }
            None => Err(format!("unknown demonstration '{}'", demo_name).into()),
        }
    }

    /// 按注册顺序执行全部演示，汇总为一份报告
    pub fn run_all(&self, config: &BigoConfig) -> Result<SuiteReport> {
        let mut suite = SuiteReport::new();
        for name in &self.order {
            suite.push(self.execute(name, config)?);
        }
        Ok(suite)
    }

    /// 获取所有注册的演示名称
    pub fn demo_names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    /// 检查演示是否存在
    pub fn has_demo(&self, demo_name: &str) -> bool {
        self.demos.contains_key(&demo_name.to_lowercase())
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> BigoConfig {
        let mut config = BigoConfig::default();
        config.demos.constant_sizes = vec![10, 100];
        config.demos.linear_sizes = vec![100, 200];
        config.demos.quadratic_sizes = vec![20, 40];
        config
    }

    #[test]
    fn test_registry_basic() {
        let registry = DemoRegistry::new();

        assert!(registry.has_demo("constant"));
        assert!(registry.has_demo("Linear")); // 大小写不敏感
        assert!(registry.has_demo("QUADRATIC"));

        assert!(!registry.has_demo("unknown"));
    }

    #[test]
    fn test_registry_order() {
        let registry = DemoRegistry::new();
        assert_eq!(registry.demo_names(), vec!["constant", "linear", "quadratic"]);
    }

    #[test]
    fn test_registry_execute() {
        let registry = DemoRegistry::new();
        let config = small_config();

        let report = registry.execute("linear", &config).unwrap();
        assert_eq!(report.demo, "linear");

        let err = registry.execute("unknown", &config).unwrap_err();
        assert!(err.to_string().contains("unknown demonstration"));
    }

    #[test]
    fn test_registry_run_all() {
        let registry = DemoRegistry::new();
        let config = small_config();

        let suite = registry.run_all(&config).unwrap();
        assert_eq!(suite.reports.len(), 3);
        assert_eq!(suite.reports[0].demo, "constant");
        assert_eq!(suite.reports[1].demo, "linear");
        assert_eq!(suite.reports[2].demo, "quadratic");
    }
}
