//! Integration tests for the search algorithms and their probe counts.

use algokit::searching::{binary_search, exponential_search, interpolation_search, linear_search};

#[test]
fn test_linear_search_on_unsorted_input() {
    let data = vec![7, 3, 9, 3, 1];
    let outcome = linear_search(&data, &9);
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.iterations, 3);

    let missing = linear_search(&data, &42);
    assert_eq!(missing.index, None);
    assert_eq!(missing.iterations, data.len());
}

#[test]
fn test_linear_search_returns_first_occurrence() {
    let data = vec![5, 3, 5];
    assert_eq!(linear_search(&data, &5).index, Some(0));
}

#[test]
fn test_binary_search_finds_and_misses() {
    let data: Vec<i64> = vec![1, 2, 3, 4, 5];
    assert_eq!(binary_search(&data, &3).index, Some(2));
    assert_eq!(binary_search(&data, &6).index, None);
    assert_eq!(binary_search(&data, &0).index, None);
    assert_eq!(binary_search::<i64>(&[], &1).index, None);
}

#[test]
fn test_binary_search_probe_budget() {
    let data: Vec<i64> = (0..1024).collect();
    let outcome = binary_search(&data, &1023);
    assert_eq!(outcome.index, Some(1023));
    assert!(outcome.iterations <= 11, "took {}", outcome.iterations);
}

#[test]
fn test_exponential_search_budget() {
    let data: Vec<i64> = (0..1024).collect();
    let outcome = exponential_search(&data, &1000);
    assert_eq!(outcome.index, Some(1000));
    assert!(outcome.iterations < 50, "took {}", outcome.iterations);
}

#[test]
fn test_exponential_search_first_element() {
    let data = vec![2, 4, 6];
    let outcome = exponential_search(&data, &2);
    assert_eq!(outcome.index, Some(0));
    assert_eq!(outcome.iterations, 1);
}

#[test]
fn test_exponential_search_missing_value() {
    let data: Vec<i64> = (0..64).map(|i| i * 2).collect();
    assert_eq!(exponential_search(&data, &63).index, None);
    assert_eq!(exponential_search::<i64>(&[], &1).index, None);
}

#[test]
fn test_interpolation_search_uniform_data() {
    let data: Vec<i64> = (0..100).step_by(2).collect();
    let outcome = interpolation_search(&data, &50);
    assert_eq!(outcome.index, Some(25));
    assert!(outcome.iterations <= 4, "took {}", outcome.iterations);
}

#[test]
fn test_interpolation_search_missing_values() {
    let data: Vec<i64> = (0..100).step_by(2).collect();
    assert_eq!(interpolation_search(&data, &51).index, None);
    // Out of the value range: the guard rejects it without probing.
    let outside = interpolation_search(&data, &500);
    assert_eq!(outside.index, None);
    assert_eq!(outside.iterations, 0);
}

#[test]
fn test_interpolation_search_duplicate_bounds_fall_back_to_midpoint() {
    let data = vec![5i64, 5, 5, 5];
    let outcome = interpolation_search(&data, &5);
    assert_eq!(outcome.index, Some(1));
    assert_eq!(outcome.iterations, 1);
}
