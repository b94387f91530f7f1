pub mod constant;
pub mod dataset;
pub mod formatter;
pub mod linear;
pub mod quadratic;
pub mod registry;
pub mod report;
pub mod timing;

use crate::config::BigoConfig;
use crate::Result;

use constant::ConstantDemo;
use linear::LinearDemo;
use quadratic::QuadraticDemo;

// 重新导出常用的类型
pub use formatter::OutputFormatter;
pub use registry::DemoRegistry;
pub use report::{DemoReport, SuiteReport};
pub use timing::{time_call, TimingRecord};

/// 一个可运行的复杂度演示：执行示例、计时并返回报告
pub trait Demonstration {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn run(&self, config: &BigoConfig) -> Result<DemoReport>;
}

pub enum DemoType {
    Constant(ConstantDemo),
    Linear(LinearDemo),
    Quadratic(QuadraticDemo),
}

impl DemoType {
    fn name(&self) -> &'static str {
        match self {
            DemoType::Constant(demo) => demo.name(),
            DemoType::Linear(demo) => demo.name(),
            DemoType::Quadratic(demo) => demo.name(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            DemoType::Constant(demo) => demo.description(),
            DemoType::Linear(demo) => demo.description(),
            DemoType::Quadratic(demo) => demo.description(),
        }
    }

    fn run(&self, config: &BigoConfig) -> Result<DemoReport> {
        match self {
            DemoType::Constant(demo) => demo.run(config),
            DemoType::Linear(demo) => demo.run(config),
            DemoType::Quadratic(demo) => demo.run(config),
        }
    }
}
