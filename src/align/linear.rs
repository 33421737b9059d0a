//! Linear gap-penalty recurrences.
//!
//! Every cell `(i, j)` reads its three neighbours and records the winning
//! branch in the traceback matrix. Ties break diagonal first, then up,
//! then left.

use crate::scoring::{Scorer, GAP};

use super::matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};

/// Fill for the global (Needleman-Wunsch) linear recurrence.
///
/// `boundary` prices gap steps on the boundary row/column and along the
/// final row/column; pass the plain scorer there unless terminal gaps are
/// repriced.
pub(crate) fn fill_global(
    a: &[u8],
    b: &[u8],
    scorer: &dyn Scorer,
    boundary: &dyn Scorer,
) -> (ScoreMatrix, TracebackMatrix) {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut scores = ScoreMatrix::new(rows, cols);
    let mut traceback = TracebackMatrix::new(rows, cols);

    for j in 1..cols {
        let cost = boundary.score(GAP, b[j - 1]);
        scores.set(0, j, scores.get(0, j - 1) + cost);
        traceback.set(0, j, TracebackDir::Left);
    }
    for i in 1..rows {
        let cost = boundary.score(a[i - 1], GAP);
        scores.set(i, 0, scores.get(i - 1, 0) + cost);
        traceback.set(i, 0, TracebackDir::Up);
    }

    for i in 1..rows {
        for j in 1..cols {
            // Gap steps along the final row/column trail the shorter
            // sequence and take the boundary pricing.
            let up_scorer = if j == cols - 1 { boundary } else { scorer };
            let left_scorer = if i == rows - 1 { boundary } else { scorer };

            let diag = scores.get(i - 1, j - 1) + scorer.score(a[i - 1], b[j - 1]);
            let up = scores.get(i - 1, j) + up_scorer.score(a[i - 1], GAP);
            let left = scores.get(i, j - 1) + left_scorer.score(GAP, b[j - 1]);

            let (best, dir) = if diag >= up && diag >= left {
                (diag, TracebackDir::Diag)
            } else if up >= left {
                (up, TracebackDir::Up)
            } else {
                (left, TracebackDir::Left)
            };
            scores.set(i, j, best);
            traceback.set(i, j, dir);
        }
    }

    (scores, traceback)
}

/// Fill for the local (Smith-Waterman) linear recurrence.
///
/// Boundary row and column stay at zero; cells never go negative. Returns
/// the matrices and the maximum cell `(score, i, j)`; the strict `>`
/// comparison keeps the first maximum in row-major order.
pub(crate) fn fill_local(
    a: &[u8],
    b: &[u8],
    scorer: &dyn Scorer,
) -> (ScoreMatrix, TracebackMatrix, (i32, usize, usize)) {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut scores = ScoreMatrix::new(rows, cols);
    let mut traceback = TracebackMatrix::new(rows, cols);
    let mut best = (0, 0, 0);

    for i in 1..rows {
        for j in 1..cols {
            let diag = scores.get(i - 1, j - 1) + scorer.score(a[i - 1], b[j - 1]);
            let up = scores.get(i - 1, j) + scorer.score(a[i - 1], GAP);
            let left = scores.get(i, j - 1) + scorer.score(GAP, b[j - 1]);

            let (mut score, mut dir) = if diag >= up && diag >= left {
                (diag, TracebackDir::Diag)
            } else if up >= left {
                (up, TracebackDir::Up)
            } else {
                (left, TracebackDir::Left)
            };
            if score <= 0 {
                score = 0;
                dir = TracebackDir::Stop;
            }
            scores.set(i, j, score);
            traceback.set(i, j, dir);

            if score > best.0 {
                best = (score, i, j);
            }
        }
    }

    (scores, traceback, best)
}
