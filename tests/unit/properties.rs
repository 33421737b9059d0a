//! Randomized invariant checks over the public operations.

use proptest::prelude::*;

use seqalign::{global_align_na, global_align_na_affine, local_align_na, ScoringParams};

use super::helpers::{rescore_na_linear, strip_gaps};

fn params() -> ScoringParams {
    ScoringParams::default()
}

/// Diagonal-only projection recomputed from the gapped pair.
fn diagonal_projection(seq1: &str, seq2: &str) -> (String, String) {
    let mut u1 = String::new();
    let mut u2 = String::new();
    for (x, y) in seq1.chars().zip(seq2.chars()) {
        if x != '-' && y != '-' {
            u1.push(x);
            u2.push(y);
        }
    }
    (u1, u2)
}

proptest! {
    #[test]
    fn prop_global_strips_back_to_inputs(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let aln = global_align_na(&a, &b, &params()).unwrap();
        prop_assert_eq!(strip_gaps(aln.seq1()), a);
        prop_assert_eq!(strip_gaps(aln.seq2()), b);
    }

    #[test]
    fn prop_global_columns_consistent(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let aln = global_align_na(&a, &b, &params()).unwrap();
        prop_assert_eq!(aln.seq1().len(), aln.seq2().len());
        for (x, y) in aln.seq1().chars().zip(aln.seq2().chars()) {
            prop_assert!(!(x == '-' && y == '-'));
        }
    }

    #[test]
    fn prop_global_score_matches_columns(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let p = params();
        let aln = global_align_na(&a, &b, &p).unwrap();
        prop_assert_eq!(aln.score(), rescore_na_linear(aln.seq1(), aln.seq2(), &p));
    }

    #[test]
    fn prop_global_score_is_symmetric(a in "[ACGT]{0,25}", b in "[ACGT]{0,25}") {
        let p = params();
        let forward = global_align_na(&a, &b, &p).unwrap();
        let backward = global_align_na(&b, &a, &p).unwrap();
        prop_assert_eq!(forward.score(), backward.score());
    }

    #[test]
    fn prop_global_self_alignment_dominates(a in "[ACGT]{0,25}", b in "[ACGT]{0,25}") {
        let p = params();
        let self_score = global_align_na(&a, &a, &p).unwrap().score();
        let cross = global_align_na(&a, &b, &p).unwrap().score();
        prop_assert!(self_score >= cross);
    }

    #[test]
    fn prop_local_score_non_negative(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let aln = local_align_na(&a, &b, &params()).unwrap();
        prop_assert!(aln.score() >= 0);
        prop_assert_eq!(aln.score() == 0, aln.seq1().is_empty() && aln.seq2().is_empty());
    }

    #[test]
    fn prop_local_aligns_slices_of_inputs(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let aln = local_align_na(&a, &b, &params()).unwrap();
        prop_assert!(a.contains(&strip_gaps(aln.seq1())));
        prop_assert!(b.contains(&strip_gaps(aln.seq2())));
    }

    #[test]
    fn prop_local_score_matches_columns(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let p = params();
        let aln = local_align_na(&a, &b, &p).unwrap();
        prop_assert_eq!(aln.score(), rescore_na_linear(aln.seq1(), aln.seq2(), &p));
    }

    #[test]
    fn prop_local_ungapped_is_diagonal_projection(a in "[ACGT]{0,30}", b in "[ACGT]{0,30}") {
        let aln = local_align_na(&a, &b, &params()).unwrap();
        let (u1, u2) = diagonal_projection(aln.seq1(), aln.seq2());
        prop_assert_eq!(aln.ungapped_seq1(), u1);
        prop_assert_eq!(aln.ungapped_seq2(), u2);
    }

    #[test]
    fn prop_affine_global_strips_back(a in "[ACGT]{0,25}", b in "[ACGT]{0,25}") {
        let aln = global_align_na_affine(&a, &b, &params()).unwrap();
        prop_assert_eq!(strip_gaps(aln.seq1()), a);
        prop_assert_eq!(strip_gaps(aln.seq2()), b);
        prop_assert_eq!(aln.seq1().len(), aln.seq2().len());
    }

    #[test]
    fn prop_affine_score_is_symmetric(a in "[ACGT]{0,20}", b in "[ACGT]{0,20}") {
        let p = params();
        let forward = global_align_na_affine(&a, &b, &p).unwrap();
        let backward = global_align_na_affine(&b, &a, &p).unwrap();
        prop_assert_eq!(forward.score(), backward.score());
    }
}
