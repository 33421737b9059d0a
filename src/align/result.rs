//! Result surfaces for global and local alignments.

use super::matrix::{ScoreMatrix, TracebackMatrix};

/// Result of a pairwise alignment.
///
/// Carries the optimal score, the two gapped strings, and the filled
/// matrices for inspection. The auxiliary gap matrices are present for
/// affine alignments only.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub(crate) score: i32,
    pub(crate) seq1: String,
    pub(crate) seq2: String,
    pub(crate) dp: ScoreMatrix,
    pub(crate) traceback: TracebackMatrix,
    pub(crate) down: Option<ScoreMatrix>,
    pub(crate) right: Option<ScoreMatrix>,
}

impl Alignment {
    /// Optimal alignment score.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// First sequence with gap characters inserted.
    pub fn seq1(&self) -> &str {
        &self.seq1
    }

    /// Second sequence with gap characters inserted.
    pub fn seq2(&self) -> &str {
        &self.seq2
    }

    /// The filled score matrix.
    pub fn dp_matrix(&self) -> &ScoreMatrix {
        &self.dp
    }

    /// The direction matrix the traceback followed.
    pub fn dp_traceback(&self) -> &TracebackMatrix {
        &self.traceback
    }

    /// Best-score-ending-in-a-gap-in-seq1 matrix (affine only).
    pub fn dp_down_matrix(&self) -> Option<&ScoreMatrix> {
        self.down.as_ref()
    }

    /// Best-score-ending-in-a-gap-in-seq2 matrix (affine only).
    pub fn dp_right_matrix(&self) -> Option<&ScoreMatrix> {
        self.right.as_ref()
    }
}

/// Result of a local (Smith-Waterman) alignment.
///
/// A zero score means the optimal local alignment is empty; every string
/// accessor then returns "".
pub struct LocalAlignment {
    pub(crate) alignment: Alignment,
    pub(crate) ungapped_seq1: String,
    pub(crate) ungapped_seq2: String,
    pub(crate) seq1_region: (usize, usize),
    pub(crate) seq2_region: (usize, usize),
}

impl LocalAlignment {
    pub fn score(&self) -> i32 {
        self.alignment.score
    }

    /// Aligned slice of the first sequence, gapped.
    pub fn seq1(&self) -> &str {
        &self.alignment.seq1
    }

    /// Aligned slice of the second sequence, gapped.
    pub fn seq2(&self) -> &str {
        &self.alignment.seq2
    }

    /// Characters of `seq1` taken from diagonal steps only.
    pub fn ungapped_seq1(&self) -> &str {
        &self.ungapped_seq1
    }

    /// Characters of `seq2` taken from diagonal steps only.
    pub fn ungapped_seq2(&self) -> &str {
        &self.ungapped_seq2
    }

    /// 1-based inclusive region of the first input covered by the
    /// alignment; `(0, 0)` for the empty alignment.
    pub fn seq1_region(&self) -> (usize, usize) {
        self.seq1_region
    }

    /// 1-based inclusive region of the second input.
    pub fn seq2_region(&self) -> (usize, usize) {
        self.seq2_region
    }

    pub fn dp_matrix(&self) -> &ScoreMatrix {
        &self.alignment.dp
    }

    pub fn dp_traceback(&self) -> &TracebackMatrix {
        &self.alignment.traceback
    }

    pub fn dp_down_matrix(&self) -> Option<&ScoreMatrix> {
        self.alignment.down.as_ref()
    }

    pub fn dp_right_matrix(&self) -> Option<&ScoreMatrix> {
        self.alignment.right.as_ref()
    }
}
