use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// 对一次函数调用计时，返回结果与耗时
///
/// 计时只用于演示输出，不属于功能契约的一部分。
pub fn time_call<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

/// 单次计时样本：输入规模与实测耗时
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRecord {
    pub size: usize,
    pub duration: Duration,
}

impl TimingRecord {
    pub fn new(size: usize, duration: Duration) -> Self {
        Self { size, duration }
    }

    /// 平均到每个元素的耗时（秒）
    pub fn per_element(&self) -> f64 {
        self.duration.as_secs_f64() / self.size as f64
    }

    /// 按 n² 归一化的耗时（秒）
    pub fn per_n_squared(&self) -> f64 {
        self.duration.as_secs_f64() / (self.size as f64 * self.size as f64)
    }
}
