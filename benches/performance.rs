//! 算法复杂度基准测试
//!
//! 对三类复杂度的代表性操作在不同输入规模下做基准测试，
//! 用于观察 O(1)/O(n)/O(n²) 的增长差异。

use criterion::{criterion_group, criterion_main, Criterion};

use bigo::{
    bubble_sort, direct_access, find_maximum, find_pairs_with_sum, has_duplicates, linear_search,
    map_lookup, sum_elements,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

const CONSTANT_SIZE: usize = 1_000_000;
const LINEAR_SIZES: &[usize] = &[1_000, 4_000, 16_000];
const QUADRATIC_SIZES: &[usize] = &[64, 256, 1_024];
const SEED: u64 = 42;

/// 生成测试数据
fn generate_test_data(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}

/// 常数时间操作基准测试
fn bench_constant(c: &mut Criterion) {
    let data = generate_test_data(CONSTANT_SIZE, SEED);

    let mut map = HashMap::new();
    for (i, &value) in data.iter().enumerate() {
        map.insert(i as i64, value);
    }
    let key = (CONSTANT_SIZE / 2) as i64;

    c.bench_function("direct_access", |b| {
        b.iter(|| direct_access(&data, CONSTANT_SIZE / 2))
    });

    c.bench_function("map_lookup", |b| b.iter(|| map_lookup(&map, &key)));
}

/// 线性时间操作基准测试
fn bench_linear(c: &mut Criterion) {
    for &size in LINEAR_SIZES {
        let data = generate_test_data(size, SEED);

        // 查找不存在的值，覆盖最坏情况（扫描全部元素）
        c.bench_function(&format!("linear_search/{}", size), |b| {
            b.iter(|| linear_search(&data, &-1))
        });

        c.bench_function(&format!("sum_elements/{}", size), |b| {
            b.iter(|| sum_elements(&data))
        });

        c.bench_function(&format!("find_maximum/{}", size), |b| {
            b.iter(|| find_maximum(&data))
        });
    }
}

/// 平方时间操作基准测试
fn bench_quadratic(c: &mut Criterion) {
    for &size in QUADRATIC_SIZES {
        // 逆序输入是冒泡排序的最坏情况
        let reversed: Vec<i64> = (0..size as i64).rev().collect();
        c.bench_function(&format!("bubble_sort/{}", size), |b| {
            b.iter(|| bubble_sort(&reversed))
        });

        // 全不重复的输入让重复检测穷尽所有下标对
        let distinct: Vec<i64> = (0..size as i64).collect();
        c.bench_function(&format!("has_duplicates/{}", size), |b| {
            b.iter(|| has_duplicates(&distinct))
        });

        let data = generate_test_data(size, SEED);
        c.bench_function(&format!("find_pairs_with_sum/{}", size), |b| {
            b.iter(|| find_pairs_with_sum(&data, 1_000_000))
        });
    }
}

criterion_group!(benches, bench_constant, bench_linear, bench_quadratic);
criterion_main!(benches);
