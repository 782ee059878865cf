#![allow(dead_code)]

use orx_concurrent_collections::ConcurrentGrowableArray;
use std::time::Duration;

pub fn elem(thread_idx: usize, j: usize) -> String {
    (thread_idx * 1_000_000 + j).to_string()
}

pub fn destruct_elem(value: &str) -> (usize, usize) {
    let x: usize = value.parse().unwrap();
    let thread_idx = x / 1_000_000;
    let j = x - 1_000_000 * thread_idx;
    (thread_idx, j)
}

pub fn sleep(do_sleep: bool, i: usize) {
    if do_sleep {
        let modulus = i % 3;
        let milliseconds = match modulus {
            0 => 0,
            1 => 10 + (i % 11) * 4,
            _ => 20 - (i % 5) * 3,
        } as u64;
        let duration = Duration::from_millis(milliseconds);
        std::thread::sleep(duration);
    }
}

/// Appends `num_items_to_add` elements of the given thread, occasionally sleeping.
pub fn grower(array: &ConcurrentGrowableArray<String>, thread_idx: usize, num_items_to_add: usize) {
    for j in 0..num_items_to_add {
        array.append(elem(thread_idx, j));
        if j % 95 == 0 {
            sleep(true, j);
        }
    }
}

pub fn select<const N: usize>(distribution: &[usize; N], index: usize) -> usize {
    let sum: usize = distribution.iter().sum();
    let m = index % sum;
    let mut partial_sum = 0;
    for (i, x) in distribution.iter().enumerate() {
        partial_sum += x;
        if m < partial_sum {
            return i;
        }
    }
    distribution.len() - 1
}

/// Capacity is the initial capacity multiplied by a power of two.
pub fn is_doubling_of(capacity: usize, initial_capacity: usize) -> bool {
    capacity % initial_capacity == 0 && (capacity / initial_capacity).is_power_of_two()
}
