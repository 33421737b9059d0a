//! Alignment reconstruction from the traceback matrix.
//!
//! The walk is an explicit loop writing reversed buffers; stack depth does
//! not grow with sequence length.

use crate::scoring::GAP;

use super::matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};

/// Two gapped strings reconstructed by a traceback walk.
pub(crate) struct GappedPair {
    pub seq1: String,
    pub seq2: String,
}

/// Local traceback output: gapped strings, their diagonal-only projections,
/// and the 0-based cell where the walk stopped.
pub(crate) struct LocalWalk {
    pub seq1: String,
    pub seq2: String,
    pub ungapped_seq1: String,
    pub ungapped_seq2: String,
    pub stop: (usize, usize),
}

fn into_string(mut bytes: Vec<u8>) -> String {
    bytes.reverse();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Walk a global alignment back from `(|a|, |b|)` to the origin.
///
/// On the boundary the direction is forced (Left along row 0, Up along
/// column 0) so the walk stays in bounds whatever the cell says.
pub(crate) fn global(traceback: &TracebackMatrix, a: &[u8], b: &[u8]) -> GappedPair {
    let mut i = a.len();
    let mut j = b.len();
    let mut seq1 = Vec::with_capacity(i + j);
    let mut seq2 = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let dir = if i == 0 {
            TracebackDir::Left
        } else if j == 0 {
            TracebackDir::Up
        } else {
            traceback.get(i, j)
        };
        match dir {
            TracebackDir::Diag => {
                seq1.push(a[i - 1]);
                seq2.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            TracebackDir::Up => {
                seq1.push(a[i - 1]);
                seq2.push(GAP);
                i -= 1;
            }
            TracebackDir::Left => {
                seq1.push(GAP);
                seq2.push(b[j - 1]);
                j -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    GappedPair {
        seq1: into_string(seq1),
        seq2: into_string(seq2),
    }
}

/// Walk a local alignment back from the maximum cell.
///
/// Stops at the origin, at a Stop cell, or on the first zero score.
/// Characters emitted on diagonal steps also land in the ungapped buffers.
pub(crate) fn local(
    traceback: &TracebackMatrix,
    scores: &ScoreMatrix,
    a: &[u8],
    b: &[u8],
    start: (usize, usize),
) -> LocalWalk {
    let (mut i, mut j) = start;
    let mut seq1 = Vec::new();
    let mut seq2 = Vec::new();
    let mut ungapped1 = Vec::new();
    let mut ungapped2 = Vec::new();

    while (i > 0 || j > 0) && scores.get(i, j) != 0 {
        match traceback.get(i, j) {
            TracebackDir::Diag => {
                seq1.push(a[i - 1]);
                seq2.push(b[j - 1]);
                ungapped1.push(a[i - 1]);
                ungapped2.push(b[j - 1]);
                i -= 1;
                j -= 1;
            }
            TracebackDir::Up => {
                seq1.push(a[i - 1]);
                seq2.push(GAP);
                i -= 1;
            }
            TracebackDir::Left => {
                seq1.push(GAP);
                seq2.push(b[j - 1]);
                j -= 1;
            }
            TracebackDir::Stop => break,
        }
    }

    LocalWalk {
        seq1: into_string(seq1),
        seq2: into_string(seq2),
        ungapped_seq1: into_string(ungapped1),
        ungapped_seq2: into_string(ungapped2),
        stop: (i, j),
    }
}
