//! Local alignment tests, linear gap penalties.

use seqalign::{local_align_aa, local_align_na, ScoringParams};

use super::helpers::{assert_local_shape, rescore_na_linear};

fn na(reward: i32, penalty: i32, gap: i32) -> ScoringParams {
    ScoringParams {
        reward,
        penalty,
        gap,
        ..ScoringParams::default()
    }
}

#[test]
fn test_shared_core_is_found() {
    let params = na(2, -1, -2);
    let aln = local_align_na("AAAATTTTGGGG", "CCCCTTTTCCCC", &params).unwrap();
    assert_eq!(aln.score(), 8);
    assert_eq!(aln.seq1(), "TTTT");
    assert_eq!(aln.seq2(), "TTTT");
    assert_eq!(aln.ungapped_seq1(), "TTTT");
    assert_eq!(aln.ungapped_seq2(), "TTTT");
    assert_eq!(aln.seq1_region(), (5, 8));
    assert_eq!(aln.seq2_region(), (5, 8));
    assert_local_shape(&aln, "AAAATTTTGGGG", "CCCCTTTTCCCC");
}

#[test]
fn test_aa_local_reference() {
    // Best BLOSUM62 local region of the classic pair, gap -8
    let aln = local_align_aa("HEAGAWGHEE", "PAWHEAE").unwrap();
    assert_eq!(aln.score(), 20);
    assert_eq!(aln.seq1(), "AWGHE");
    assert_eq!(aln.seq2(), "AW-HE");
    assert_eq!(aln.ungapped_seq1(), "AWHE");
    assert_eq!(aln.ungapped_seq2(), "AWHE");
    assert_eq!(aln.seq1_region(), (5, 9));
    assert_eq!(aln.seq2_region(), (2, 5));
}

#[test]
fn test_gapped_local_alignment_rescoring() {
    let params = na(2, -1, -2);
    let aln = local_align_na("TTTTATTTT", "TTTTTTTT", &params).unwrap();
    assert_eq!(aln.score(), 14);
    assert_eq!(aln.seq1(), "TTTTATTTT");
    assert_eq!(aln.seq2(), "TTTT-TTTT");
    assert_eq!(aln.ungapped_seq1(), "TTTTTTTT");
    assert_eq!(aln.ungapped_seq2(), "TTTTTTTT");
    assert_eq!(rescore_na_linear(aln.seq1(), aln.seq2(), &params), 14);
}

#[test]
fn test_no_positive_cell_means_empty_alignment() {
    let params = na(2, -1, -2);
    let aln = local_align_na("AAAA", "TTTT", &params).unwrap();
    assert_eq!(aln.score(), 0);
    assert_eq!(aln.seq1(), "");
    assert_eq!(aln.seq2(), "");
    assert_eq!(aln.ungapped_seq1(), "");
    assert_eq!(aln.seq1_region(), (0, 0));
    assert_eq!(aln.seq2_region(), (0, 0));
}

#[test]
fn test_score_never_negative() {
    let params = na(1, -10, -10);
    for (a, b) in [("A", "T"), ("ACCA", "TGGT"), ("", "ACGT")] {
        let aln = local_align_na(a, b, &params).unwrap();
        assert!(aln.score() >= 0);
    }
}

#[test]
fn test_local_matrix_boundary_is_zero() {
    let params = na(2, -1, -2);
    let aln = local_align_na("ACG", "ACG", &params).unwrap();
    let dp = aln.dp_matrix();
    for i in 0..dp.rows() {
        assert_eq!(dp.get(i, 0), 0);
    }
    for j in 0..dp.cols() {
        assert_eq!(dp.get(0, j), 0);
    }
}

#[test]
fn test_terminal_gap_is_ignored_for_local() {
    let with_terminal = ScoringParams {
        reward: 2,
        penalty: -1,
        gap: -2,
        terminal_gap: Some(0),
        terminal_gap_extend: Some(0),
        ..ScoringParams::default()
    };
    let without = na(2, -1, -2);
    let a = local_align_na("AAAATTTTGGGG", "CCCCTTTTCCCC", &with_terminal).unwrap();
    let b = local_align_na("AAAATTTTGGGG", "CCCCTTTTCCCC", &without).unwrap();
    assert_eq!(a.score(), b.score());
    assert_eq!(a.seq1(), b.seq1());
    assert_eq!(a.seq2(), b.seq2());
}
