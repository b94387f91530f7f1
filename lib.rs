pub mod algorithms;
pub mod config;
pub mod demo;

use std::error::Error;

// 重新导出主要的公共接口
pub use algorithms::{
    bubble_sort, direct_access, find_maximum, find_pairs_with_sum, has_duplicates, linear_search,
    map_lookup, sum_elements, AccessError,
};

// 重新导出常用类型，便于二进制文件使用
pub use config::BigoConfig;
pub use demo::{DemoRegistry, DemoReport, Demonstration, OutputFormatter, SuiteReport};

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;
