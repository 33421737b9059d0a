//! Pairwise alignment engines and entry points.
//!
//! Four recurrences share two kernels: linear and affine gap penalties,
//! each in a global (Needleman-Wunsch) and a local (Smith-Waterman) mode.
//! Entry points pair a kernel with a scoring provider: BLOSUM62 for amino
//! acids, a reward/penalty bundle for nucleotides.
//!
//! # Terminal gaps
//!
//! When `terminal_gap` is set, global drivers reprice end gaps by
//! substituting a wrapped scorer around the boundary fills: the boundary
//! row and column (leading gaps), Up gap steps in the final column and
//! Left gap steps in the final row (trailing gaps). The interior is filled
//! exactly once and never repriced. Local alignments ignore the terminal
//! fields entirely.

mod affine;
mod linear;
pub mod matrix;
mod result;
mod traceback;

pub use matrix::{ScoreMatrix, TracebackDir, TracebackMatrix};
pub use result::{Alignment, LocalAlignment};

use crate::error::AlignmentError;
use crate::scoring::{
    blosum62, MatrixScorer, NucleotideScorer, Scorer, ScoringParams, TerminalGapScorer,
};

fn global_linear(a: &[u8], b: &[u8], scorer: &dyn Scorer, params: &ScoringParams) -> Alignment {
    let (scores, traceback) = match params.terminal_gap {
        Some(terminal) => {
            let wrapped = TerminalGapScorer::new(scorer, terminal);
            linear::fill_global(a, b, scorer, &wrapped)
        }
        None => linear::fill_global(a, b, scorer, scorer),
    };
    let walk = traceback::global(&traceback, a, b);
    Alignment {
        score: scores.get(a.len(), b.len()),
        seq1: walk.seq1,
        seq2: walk.seq2,
        dp: scores,
        traceback,
        down: None,
        right: None,
    }
}

fn global_affine(a: &[u8], b: &[u8], subst: &dyn Scorer, params: &ScoringParams) -> Alignment {
    let fill = affine::fill_global(
        a,
        b,
        subst,
        params.gap,
        params.gap_extend,
        params.terminal_open(),
        params.terminal_extend(),
    );
    let walk = traceback::global(&fill.traceback, a, b);
    Alignment {
        score: fill.scores.get(a.len(), b.len()),
        seq1: walk.seq1,
        seq2: walk.seq2,
        dp: fill.scores,
        traceback: fill.traceback,
        down: Some(fill.down),
        right: Some(fill.right),
    }
}

fn assemble_local(
    a: &[u8],
    b: &[u8],
    scores: ScoreMatrix,
    traceback_matrix: TracebackMatrix,
    best: (i32, usize, usize),
    down: Option<ScoreMatrix>,
    right: Option<ScoreMatrix>,
) -> LocalAlignment {
    let (score, end_i, end_j) = best;
    let walk = traceback::local(&traceback_matrix, &scores, a, b, (end_i, end_j));
    let (seq1_region, seq2_region) = if score > 0 {
        ((walk.stop.0 + 1, end_i), (walk.stop.1 + 1, end_j))
    } else {
        ((0, 0), (0, 0))
    };
    LocalAlignment {
        alignment: Alignment {
            score,
            seq1: walk.seq1,
            seq2: walk.seq2,
            dp: scores,
            traceback: traceback_matrix,
            down,
            right,
        },
        ungapped_seq1: walk.ungapped_seq1,
        ungapped_seq2: walk.ungapped_seq2,
        seq1_region,
        seq2_region,
    }
}

fn local_linear(a: &[u8], b: &[u8], scorer: &dyn Scorer) -> LocalAlignment {
    let (scores, traceback_matrix, best) = linear::fill_local(a, b, scorer);
    assemble_local(a, b, scores, traceback_matrix, best, None, None)
}

fn local_affine(a: &[u8], b: &[u8], subst: &dyn Scorer, params: &ScoringParams) -> LocalAlignment {
    let fill = affine::fill_local(a, b, subst, params.gap, params.gap_extend);
    assemble_local(
        a,
        b,
        fill.scores,
        fill.traceback,
        fill.best,
        Some(fill.down),
        Some(fill.right),
    )
}

fn validated_aa(seq: &str) -> Result<&[u8], AlignmentError> {
    blosum62().validate(seq.as_bytes())?;
    Ok(seq.as_bytes())
}

/// Global alignment of two amino acid sequences under BLOSUM62 with the
/// default linear gap cost.
pub fn global_align_aa(a: &str, b: &str) -> Result<Alignment, AlignmentError> {
    let params = ScoringParams::default();
    let (a, b) = (validated_aa(a)?, validated_aa(b)?);
    let scorer = MatrixScorer::new(blosum62(), params.gap);
    Ok(global_linear(a, b, &scorer, &params))
}

/// Global alignment of two nucleotide sequences with linear gap costs.
pub fn global_align_na(
    a: &str,
    b: &str,
    params: &ScoringParams,
) -> Result<Alignment, AlignmentError> {
    let scorer = NucleotideScorer::new(params);
    Ok(global_linear(a.as_bytes(), b.as_bytes(), &scorer, params))
}

/// Global alignment of two amino acid sequences under BLOSUM62 with affine
/// gap costs taken from `params`.
pub fn global_align_aa_affine(
    a: &str,
    b: &str,
    params: &ScoringParams,
) -> Result<Alignment, AlignmentError> {
    let (a, b) = (validated_aa(a)?, validated_aa(b)?);
    let subst = MatrixScorer::new(blosum62(), params.gap);
    Ok(global_affine(a, b, &subst, params))
}

/// Global alignment of two nucleotide sequences with affine gap costs.
pub fn global_align_na_affine(
    a: &str,
    b: &str,
    params: &ScoringParams,
) -> Result<Alignment, AlignmentError> {
    let subst = NucleotideScorer::new(params);
    Ok(global_affine(a.as_bytes(), b.as_bytes(), &subst, params))
}

/// Local alignment of two amino acid sequences under BLOSUM62 with the
/// default linear gap cost.
pub fn local_align_aa(a: &str, b: &str) -> Result<LocalAlignment, AlignmentError> {
    let params = ScoringParams::default();
    let (a, b) = (validated_aa(a)?, validated_aa(b)?);
    let scorer = MatrixScorer::new(blosum62(), params.gap);
    Ok(local_linear(a, b, &scorer))
}

/// Local alignment of two nucleotide sequences with a linear gap cost.
pub fn local_align_na(
    a: &str,
    b: &str,
    params: &ScoringParams,
) -> Result<LocalAlignment, AlignmentError> {
    let scorer = NucleotideScorer::new(params);
    Ok(local_linear(a.as_bytes(), b.as_bytes(), &scorer))
}

/// Local alignment of two amino acid sequences under BLOSUM62 with the
/// default affine gap costs.
pub fn local_align_aa_affine(a: &str, b: &str) -> Result<LocalAlignment, AlignmentError> {
    let params = ScoringParams::default();
    let (a, b) = (validated_aa(a)?, validated_aa(b)?);
    let subst = MatrixScorer::new(blosum62(), params.gap);
    Ok(local_affine(a, b, &subst, &params))
}

/// Local alignment of two nucleotide sequences with the default affine gap
/// costs.
pub fn local_align_na_affine(a: &str, b: &str) -> Result<LocalAlignment, AlignmentError> {
    let params = ScoringParams::default();
    let subst = NucleotideScorer::new(&params);
    Ok(local_affine(a.as_bytes(), b.as_bytes(), &subst, &params))
}
