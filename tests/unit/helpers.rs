//! Assertion helpers shared by the alignment test modules.

use seqalign::scoring::GAP;
use seqalign::{Alignment, LocalAlignment, ScoringParams};

/// Remove gap characters from a gapped string.
pub fn strip_gaps(gapped: &str) -> String {
    gapped.chars().filter(|&c| c != '-').collect()
}

/// Column-wise checks every alignment must satisfy: equal lengths and no
/// column gapped on both sides.
pub fn assert_columns_consistent(seq1: &str, seq2: &str) {
    assert_eq!(
        seq1.len(),
        seq2.len(),
        "gapped strings differ in length: {seq1} vs {seq2}"
    );
    for (x, y) in seq1.chars().zip(seq2.chars()) {
        assert!(
            !(x == '-' && y == '-'),
            "double-gap column in {seq1} / {seq2}"
        );
    }
}

/// A global alignment must reproduce both inputs after stripping gaps.
pub fn assert_global_shape(aln: &Alignment, a: &str, b: &str) {
    assert_columns_consistent(aln.seq1(), aln.seq2());
    assert_eq!(strip_gaps(aln.seq1()), a);
    assert_eq!(strip_gaps(aln.seq2()), b);
}

/// A local alignment reproduces contiguous slices of its inputs.
pub fn assert_local_shape(aln: &LocalAlignment, a: &str, b: &str) {
    assert_columns_consistent(aln.seq1(), aln.seq2());
    assert!(
        a.contains(&strip_gaps(aln.seq1())),
        "{} is not a slice of {a}",
        aln.seq1()
    );
    assert!(
        b.contains(&strip_gaps(aln.seq2())),
        "{} is not a slice of {b}",
        aln.seq2()
    );
}

/// Nucleotide column score under linear gap semantics.
fn na_column_score(x: u8, y: u8, params: &ScoringParams) -> i32 {
    if x.eq_ignore_ascii_case(&y) {
        params.reward
    } else if x == GAP || y == GAP {
        params.gap
    } else {
        params.penalty
    }
}

/// Re-score a linear-gap nucleotide alignment column by column.
/// Valid when no transition score and no terminal repricing is configured.
pub fn rescore_na_linear(seq1: &str, seq2: &str, params: &ScoringParams) -> i32 {
    seq1.bytes()
        .zip(seq2.bytes())
        .map(|(x, y)| na_column_score(x, y, params))
        .sum()
}
