//! # 算法复杂度教学模块
//!
//! 按时间复杂度分类的纯函数集合：
//!
//! - `constant` – O(1) 常数时间操作（按索引访问、哈希表查找）
//! - `linear` – O(n) 线性时间操作（线性查找、求和、求最大值）
//! - `quadratic` – O(n²) 平方时间操作（冒泡排序、重复检测、两数之和枚举）
//!
//! 所有函数都是无状态的，不依赖共享数据，输入不会被修改
//! （除非文档明确说明返回新的副本）。

pub mod constant;
pub mod linear;
pub mod quadratic;

// 重新导出主要的公共接口
pub use constant::{direct_access, map_lookup, AccessError};
pub use linear::{find_maximum, linear_search, sum_elements};
pub use quadratic::{bubble_sort, find_pairs_with_sum, has_duplicates};
