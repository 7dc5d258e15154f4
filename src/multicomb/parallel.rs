use log::{debug, info};
use rayon::prelude::*;

use crate::combination::Combinations;
use crate::multicomb::driver::{MultiComb, Row};
use crate::multicomb::errors::MultiCombError;

/// Collects every row of `MultiComb::new(n, ks)`, fanning out over the
/// level-0 combinations. The result is in the same order as the sequential
/// driver produces it.
///
/// # Errors
///
/// Returns the same errors as [`MultiComb::new`].
pub fn par_rows(n: usize, ks: &[usize]) -> Result<Vec<Row>, MultiCombError> {
    par_rows_limited(n, ks, usize::MAX)
}

/// The first `limit` rows of [`par_rows`]. Level-0 selections are expanded one
/// batch (one per worker thread) at a time, so work stops shortly after
/// `limit` rows exist.
///
/// # Errors
///
/// Returns the same errors as [`MultiComb::new`].
pub fn par_rows_limited(
    n: usize,
    ks: &[usize],
    limit: usize,
) -> Result<Vec<Row>, MultiCombError> {
    let driver = MultiComb::new(n, ks)?;
    let Some((&outer_k, inner_ks)) = ks.split_first() else {
        return Ok(driver.into_iter().take(limit).collect());
    };

    let batch_size = rayon::current_num_threads().max(1);
    info!(
        "Collecting multi-combinations in parallel, {} outer selections per batch",
        batch_size
    );

    let mut outer = Combinations::new(n, outer_k)?;
    let mut rows: Vec<Row> = Vec::new();
    while rows.len() < limit {
        let batch: Vec<Vec<usize>> = outer.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        let blocks = batch
            .into_par_iter()
            .map(|selected| -> Result<Vec<Row>, MultiCombError> {
                let rest = complement(n, &selected);
                let inner = MultiComb::with_universe(rest, inner_ks)?;
                Ok(inner
                    .into_iter()
                    .map(|inner_row| {
                        let mut row = Vec::with_capacity(inner_row.len() + 1);
                        row.push(selected.clone());
                        row.extend(inner_row);
                        row
                    })
                    .collect())
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.extend(blocks.into_iter().flatten());
    }

    rows.truncate(limit);
    debug!("Collected {} rows", rows.len());
    Ok(rows)
}

/// `0..n` without the (sorted) `selected` elements.
fn complement(n: usize, selected: &[usize]) -> Vec<usize> {
    let mut picked = selected.iter().peekable();
    (0..n)
        .filter(|value| picked.next_if_eq(&value).is_none())
        .collect()
}
