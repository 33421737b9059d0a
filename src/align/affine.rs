//! Affine gap-penalty recurrences (Gotoh three-matrix formulation).
//!
//! Besides the main score matrix, two auxiliary matrices carry the best
//! score ending in a gap: `down` for a gap in the first sequence (an Up
//! step) and `right` for a gap in the second (a Left step). Opening a gap
//! costs `open`, continuing one costs `extend`.

use crate::scoring::Scorer;

use super::matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};

pub(crate) struct AffineFill {
    pub scores: ScoreMatrix,
    pub down: ScoreMatrix,
    pub right: ScoreMatrix,
    pub traceback: TracebackMatrix,
    /// Maximum cell `(score, i, j)`; meaningful for the local fill only.
    pub best: (i32, usize, usize),
}

/// Global affine fill.
///
/// The boundary chains and the gap branches along the final row/column use
/// the terminal prices `(t_open, t_extend)`; interior gaps use
/// `(open, extend)`. Callers pass the same pair twice when end gaps are not
/// repriced.
pub(crate) fn fill_global(
    a: &[u8],
    b: &[u8],
    subst: &dyn Scorer,
    open: i32,
    extend: i32,
    t_open: i32,
    t_extend: i32,
) -> AffineFill {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut scores = ScoreMatrix::new(rows, cols);
    let mut down = ScoreMatrix::filled_neg_inf(rows, cols);
    let mut right = ScoreMatrix::filled_neg_inf(rows, cols);
    let mut traceback = TracebackMatrix::new(rows, cols);

    for i in 1..rows {
        let cost = t_open + (i as i32 - 1) * t_extend;
        scores.set(i, 0, cost);
        down.set(i, 0, cost);
        traceback.set(i, 0, TracebackDir::Up);
    }
    for j in 1..cols {
        let cost = t_open + (j as i32 - 1) * t_extend;
        scores.set(0, j, cost);
        right.set(0, j, cost);
        traceback.set(0, j, TracebackDir::Left);
    }

    for i in 1..rows {
        for j in 1..cols {
            let (d_open, d_extend) = if j == cols - 1 {
                (t_open, t_extend)
            } else {
                (open, extend)
            };
            let (r_open, r_extend) = if i == rows - 1 {
                (t_open, t_extend)
            } else {
                (open, extend)
            };

            let d = (down.get(i - 1, j) + d_extend).max(scores.get(i - 1, j) + d_open);
            let r = (right.get(i, j - 1) + r_extend).max(scores.get(i, j - 1) + r_open);
            down.set(i, j, d);
            right.set(i, j, r);

            let diag = scores.get(i - 1, j - 1) + subst.score(a[i - 1], b[j - 1]);
            let (best, dir) = if diag >= d && diag >= r {
                (diag, TracebackDir::Diag)
            } else if d >= r {
                (d, TracebackDir::Up)
            } else {
                (r, TracebackDir::Left)
            };
            scores.set(i, j, best);
            traceback.set(i, j, dir);
        }
    }

    AffineFill {
        scores,
        down,
        right,
        traceback,
        best: (0, a.len(), b.len()),
    }
}

/// Local affine fill.
///
/// The main matrix floors at zero with a Stop direction when no candidate
/// is positive. The gap chains off the boundary are priced with the plain
/// open/extend costs; local alignments have no terminal-gap concept.
pub(crate) fn fill_local(
    a: &[u8],
    b: &[u8],
    subst: &dyn Scorer,
    open: i32,
    extend: i32,
) -> AffineFill {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut scores = ScoreMatrix::new(rows, cols);
    let mut down = ScoreMatrix::filled_neg_inf(rows, cols);
    let mut right = ScoreMatrix::filled_neg_inf(rows, cols);
    let mut traceback = TracebackMatrix::new(rows, cols);
    let mut best = (0, 0, 0);

    for i in 1..rows {
        down.set(i, 0, open + (i as i32 - 1) * extend);
    }
    for j in 1..cols {
        right.set(0, j, open + (j as i32 - 1) * extend);
    }

    for i in 1..rows {
        for j in 1..cols {
            let d = (down.get(i - 1, j) + extend).max(scores.get(i - 1, j) + open);
            let r = (right.get(i, j - 1) + extend).max(scores.get(i, j - 1) + open);
            down.set(i, j, d);
            right.set(i, j, r);

            let diag = scores.get(i - 1, j - 1) + subst.score(a[i - 1], b[j - 1]);
            let (mut score, mut dir) = if diag >= d && diag >= r {
                (diag, TracebackDir::Diag)
            } else if d >= r {
                (d, TracebackDir::Up)
            } else {
                (r, TracebackDir::Left)
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

    AffineFill {
        scores,
        down,
        right,
        traceback,
        best,
    }
}
