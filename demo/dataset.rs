use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 生成升序序列 `[0, len)`
pub fn ascending(len: usize) -> Vec<i64> {
    (0..len as i64).collect()
}

/// 生成降序序列 `(len, 0]` - 冒泡排序的最坏情况输入
pub fn descending(len: usize) -> Vec<i64> {
    (0..len as i64).rev().collect()
}

/// 生成固定种子的随机序列
///
/// 相同的 `seed` 产生完全相同的数据，保证演示和基准测试可复现。
pub fn shuffled(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        assert_eq!(ascending(5), vec![0, 1, 2, 3, 4]);
        assert!(ascending(0).is_empty());
    }

    #[test]
    fn test_descending() {
        assert_eq!(descending(5), vec![4, 3, 2, 1, 0]);
        assert!(descending(0).is_empty());
    }

    #[test]
    fn test_shuffled_deterministic() {
        // 同一种子产生相同数据
        let a = shuffled(100, 42);
        let b = shuffled(100, 42);
        assert_eq!(a, b);

        // 不同种子产生不同数据
        let c = shuffled(100, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffled_range() {
        let data = shuffled(1000, 7);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&v| (0..1_000_000).contains(&v)));
    }
}
