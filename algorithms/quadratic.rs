use std::ops::Add;

/// 冒泡排序 - O(n²)
///
/// 返回升序排列的新向量，输入本身不会被修改。
/// 算法对不断缩短的未排序后缀做多趟扫描：第 i 趟（从 0 计）只检查
/// 下标区间 `[0, n-i-1)`，相邻元素仅在严格大于时交换，
/// 因此相等元素不会交换，排序是稳定的。总比较次数为 n(n-1)/2。
///
/// # 示例
/// ```
/// use bigo::algorithms::quadratic::bubble_sort;
///
/// let items = [64, 34, 25, 12, 22, 11, 90];
/// assert_eq!(bubble_sort(&items), vec![11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn bubble_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    let n = sorted.len();

    for i in 0..n {
        // 每趟结束后，最大的元素已沉到未排序后缀的末尾
        for j in 0..n - i - 1 {
            if sorted[j] > sorted[j + 1] {
                sorted.swap(j, j + 1);
            }
        }
    }

    sorted
}

/// 检测切片中是否存在重复元素 - O(n²)
///
/// 对所有满足 `i < j` 的下标对逐一比较，找到第一对相等元素时
/// 立即返回 `true`；只有穷尽所有下标对后才返回 `false`。
pub fn has_duplicates<T: PartialEq>(items: &[T]) -> bool {
    let n = items.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if items[i] == items[j] {
                return true;
            }
        }
    }
    false
}

/// 枚举所有和为目标值的元素对 - O(n²)
///
/// 返回所有满足 `i < j` 且 `items[i] + items[j] == target` 的值对
/// `(items[i], items[j])`，按发现顺序排列（外层下标升序，
/// 同一外层内按内层下标升序）。不同下标产生的等值对不会去重。
///
/// # 示例
/// ```
/// use bigo::algorithms::quadratic::find_pairs_with_sum;
///
/// let items = [1, 2, 3, 4, 5, 6];
/// assert_eq!(find_pairs_with_sum(&items, 7), vec![(1, 6), (2, 5), (3, 4)]);
/// ```
pub fn find_pairs_with_sum<T>(items: &[T], target: T) -> Vec<(T, T)>
where
    T: Copy + Add<Output = T> + PartialEq,
{
    let mut pairs = Vec::new();
    let n = items.len();

    for i in 0..n {
        for j in (i + 1)..n {
            if items[i] + items[j] == target {
                pairs.push((items[i], items[j]));
            }
        }
    }

    pairs
}
