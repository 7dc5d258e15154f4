use std::collections::HashSet;

use crate::multicomb::{Level, MultiComb, MultiCombError, Row, par_rows, par_rows_limited};

fn collect_rows(n: usize, ks: &[usize]) -> Vec<Row> {
    MultiComb::new(n, ks).into_iter().flatten().collect()
}

#[test]
fn test_five_choose_two_then_one() {
    let driver = MultiComb::new(5, &[2, 1]);
    assert!(driver.is_ok());
    if let Ok(mut driver) = driver {
        let mut rows = Vec::new();
        rows.extend(driver.current());
        let mut calls = 0;
        while !driver.is_ended() {
            calls += 1;
            rows.extend(driver.advance());
        }

        assert_eq!(calls, 30);
        assert_eq!(rows.len(), 30);
        assert_eq!(driver.current(), None);

        let distinct: HashSet<&Row> = rows.iter().collect();
        assert_eq!(distinct.len(), 30);

        for row in &rows {
            if let [first, second] = row.as_slice() {
                assert_eq!(first.len(), 2);
                assert_eq!(second.len(), 1);
                assert!(second.iter().all(|value| !first.contains(value)));
            } else {
                assert_eq!(row.len(), 2, "unexpected row shape {:?}", row);
            }
        }
    }
}

#[test]
fn test_odometer_order() {
    let rows = collect_rows(4, &[1, 1]);
    let expected: Vec<Row> = vec![
        vec![vec![0], vec![1]],
        vec![vec![0], vec![2]],
        vec![vec![0], vec![3]],
        vec![vec![1], vec![0]],
        vec![vec![1], vec![2]],
        vec![vec![1], vec![3]],
        vec![vec![2], vec![0]],
        vec![vec![2], vec![1]],
        vec![vec![2], vec![3]],
        vec![vec![3], vec![0]],
        vec![vec![3], vec![1]],
        vec![vec![3], vec![2]],
    ];
    assert_eq!(rows, expected);
}

#[test]
fn test_rows_follow_lexicographic_order_within_levels() {
    let rows: Vec<Row> = collect_rows(5, &[2, 1]).into_iter().take(8).collect();
    let expected: Vec<Row> = vec![
        vec![vec![0, 1], vec![2]],
        vec![vec![0, 1], vec![3]],
        vec![vec![0, 1], vec![4]],
        vec![vec![0, 2], vec![1]],
        vec![vec![0, 2], vec![3]],
        vec![vec![0, 2], vec![4]],
        vec![vec![0, 3], vec![1]],
        vec![vec![0, 3], vec![2]],
    ];
    assert_eq!(rows, expected);

    let last = collect_rows(5, &[2, 1]).pop();
    assert_eq!(last, Some(vec![vec![3, 4], vec![2]]));
}

#[test]
fn test_inner_level_of_two_restarts_on_remainder() {
    let rows: Vec<Row> = collect_rows(5, &[1, 2]).into_iter().take(7).collect();
    let expected: Vec<Row> = vec![
        vec![vec![0], vec![1, 2]],
        vec![vec![0], vec![1, 3]],
        vec![vec![0], vec![1, 4]],
        vec![vec![0], vec![2, 3]],
        vec![vec![0], vec![2, 4]],
        vec![vec![0], vec![3, 4]],
        vec![vec![1], vec![0, 2]],
    ];
    assert_eq!(rows, expected);
}

#[test]
fn test_three_levels_partition_counts() {
    // 6! / (2! 2! 2!) = 90
    let rows = collect_rows(6, &[2, 2, 2]);
    assert_eq!(rows.len(), 90);
    for row in &rows {
        let mut all: Vec<usize> = row.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_first_row_takes_leading_elements() {
    let driver = MultiComb::new(7, &[3, 2]);
    assert!(driver.is_ok());
    if let Ok(driver) = driver {
        assert_eq!(driver.current(), Some(vec![vec![0, 1, 2], vec![3, 4]]));
        assert_eq!(driver.levels().len(), 2);
        assert_eq!(driver.ks(), &[3, 2]);
    }
}

#[test]
fn test_insufficient_universe_is_rejected() {
    assert_eq!(
        MultiComb::new(4, &[2, 3]).map(|driver| driver.ks().to_vec()),
        Err(MultiCombError::InsufficientUniverse {
            level: 1,
            k: 3,
            remaining: 2,
        })
    );
    assert!(matches!(
        MultiComb::new(1, &[2]),
        Err(MultiCombError::InsufficientUniverse { level: 0, .. })
    ));
}

#[test]
fn test_unsorted_universe_is_rejected() {
    assert!(matches!(
        MultiComb::with_universe(vec![3, 1, 2], &[1]),
        Err(MultiCombError::UnsortedUniverse(_))
    ));
}

#[test]
fn test_custom_universe_maps_through_lut() {
    let rows: Vec<Row> = MultiComb::with_universe(vec![10, 20, 30], &[1, 1])
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows.first(), Some(&vec![vec![10], vec![20]]));
    assert_eq!(rows.last(), Some(&vec![vec![30], vec![20]]));
}

#[test]
fn test_empty_and_zero_sizes() {
    assert_eq!(collect_rows(3, &[]), vec![Vec::<Vec<usize>>::new()]);
    assert_eq!(collect_rows(2, &[0]), vec![vec![Vec::<usize>::new()]]);
    assert_eq!(collect_rows(2, &[2]), vec![vec![vec![0, 1]]]);
}

#[test]
fn test_advance_after_end_stays_ended() {
    let driver = MultiComb::new(2, &[2]);
    assert!(driver.is_ok());
    if let Ok(mut driver) = driver {
        assert_eq!(driver.advance(), None);
        assert!(driver.is_ended());
        assert_eq!(driver.advance(), None);
        assert_eq!(driver.current(), None);
    }
}

#[test]
fn test_level_selected_and_unused() {
    let level = Level::new(2, vec![3, 5, 8, 9]);
    assert!(level.is_ok());
    if let Ok(mut level) = level {
        assert_eq!(level.selected(), vec![3, 5]);
        assert_eq!(level.unused(), vec![8, 9]);
        assert!(level.advance());
        assert_eq!(level.selected(), vec![3, 8]);
        assert_eq!(level.unused(), vec![5, 9]);
        assert_eq!((level.n(), level.k()), (4, 2));
        assert_eq!(level.lut(), &[3, 5, 8, 9]);
    }
    assert_eq!(
        Level::new(3, vec![1, 2]),
        Err(MultiCombError::LutTooShort { k: 3, available: 2 })
    );
}

#[test]
fn test_parallel_rows_match_sequential() {
    let cases: Vec<(usize, Vec<usize>)> = vec![
        (5, vec![2, 1]),
        (6, vec![2, 2, 2]),
        (7, vec![3, 1]),
        (4, vec![]),
        (5, vec![0, 2]),
    ];
    for (n, ks) in &cases {
        assert_eq!(
            par_rows(*n, ks),
            Ok(collect_rows(*n, ks)),
            "n={}, ks={:?}",
            n,
            ks
        );
    }
}

#[test]
fn test_parallel_rows_reject_bad_sizes() {
    assert!(matches!(
        par_rows(3, &[2, 2]),
        Err(MultiCombError::InsufficientUniverse { .. })
    ));
}

#[test]
fn test_parallel_rows_limited_is_prefix() {
    let all = collect_rows(7, &[2, 2]);
    for limit in [0, 1, 5, 31, all.len(), all.len() + 10] {
        let limited = par_rows_limited(7, &[2, 2], limit);
        let expected: Vec<Row> = all.iter().take(limit).cloned().collect();
        assert_eq!(limited, Ok(expected), "limit={}", limit);
    }
}
