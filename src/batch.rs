//! Parallel fan-out over independent alignment pairs.
//!
//! One alignment call is single-threaded and owns its matrices, so
//! disjoint pairs can run concurrently without coordination.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Apply `op` to every query/subject index pair, in parallel.
///
/// Results come back in `(query, subject)` row-major order regardless of
/// scheduling. With `progress` set, a bar tracks completed pairs on
/// stderr.
pub fn map_pairs<T, F>(n_queries: usize, n_subjects: usize, progress: bool, op: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    let total = n_queries * n_subjects;
    let bar = if progress && total > 1 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} pairs ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let results: Vec<T> = (0..total)
        .into_par_iter()
        .map(|k| {
            let result = op(k / n_subjects, k % n_subjects);
            if let Some(bar) = &bar {
                bar.inc(1);
            }
            result
        })
        .collect();

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }
    results
}
