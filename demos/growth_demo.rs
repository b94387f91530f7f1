use std::time::{Duration, Instant};

use bigo::{bubble_sort, direct_access, sum_elements};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 算法复杂度增长演示 ===\n");

    // 1. 常数时间：访问耗时与规模无关
    println!("1. 常数时间 O(1)：按索引访问中间元素...");
    for size in [100_usize, 10_000, 1_000_000] {
        let data: Vec<i64> = (0..size as i64).collect();

        let start = Instant::now();
        let element = direct_access(&data, size / 2)?;
        let elapsed = start.elapsed();

        println!(
            "   规模 {:>9}: 中间元素 = {:>7}, 耗时 {:?}",
            size, element, elapsed
        );
    }

    // 2. 线性时间：规模翻倍，耗时大致翻倍
    println!("\n2. 线性时间 O(n)：求和...");
    let mut previous: Option<Duration> = None;
    for size in [200_000_usize, 400_000, 800_000, 1_600_000] {
        let data: Vec<i64> = (0..size as i64).collect();

        let start = Instant::now();
        let sum = sum_elements(&data);
        let elapsed = start.elapsed();

        match previous {
            Some(prev) if prev.as_nanos() > 0 => println!(
                "   规模 {:>9}: 和 = {:>16}, 耗时 {:>10?}, 是上一行的 {:.2} 倍",
                size,
                sum,
                elapsed,
                elapsed.as_secs_f64() / prev.as_secs_f64()
            ),
            _ => println!("   规模 {:>9}: 和 = {:>16}, 耗时 {:>10?}", size, sum, elapsed),
        }
        previous = Some(elapsed);
    }

    // 3. 平方时间：规模翻倍，耗时大致变为 4 倍
    println!("\n3. 平方时间 O(n²)：冒泡排序（逆序输入，最坏情况）...");
    let mut previous: Option<Duration> = None;
    for size in [100_usize, 200, 400, 800] {
        let data: Vec<i64> = (0..size as i64).rev().collect();

        let start = Instant::now();
        let sorted = bubble_sort(&data);
        let elapsed = start.elapsed();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let normalized = elapsed.as_secs_f64() / (size as f64 * size as f64);
        match previous {
            Some(prev) if prev.as_nanos() > 0 => println!(
                "   规模 {:>9}: 耗时 {:>10?}, 耗时/n² = {:.12}, 是上一行的 {:.2} 倍",
                size,
                elapsed,
                normalized,
                elapsed.as_secs_f64() / prev.as_secs_f64()
            ),
            _ => println!(
                "   规模 {:>9}: 耗时 {:>10?}, 耗时/n² = {:.12}",
                size, elapsed, normalized
            ),
        }
        previous = Some(elapsed);
    }

    // 4. 结论
    println!("\n=== 演示完成 ===");
    println!("\n观察:");
    println!("• O(1): 耗时与输入规模无关");
    println!("• O(n): 规模翻倍时耗时大致翻倍");
    println!("• O(n²): 规模翻倍时耗时大致变为 4 倍 (2² = 4)");
    println!("• 耗时/n² 在各规模下大致保持恒定，印证了平方增长");

    Ok(())
}
