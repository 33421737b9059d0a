//! Pairwise sequence alignment: Needleman-Wunsch and Smith-Waterman with
//! linear and affine gap penalties, over substitution matrices (BLOSUM62)
//! or nucleotide reward/penalty scoring.

pub mod align;
pub mod batch;
pub mod error;
pub mod input;
pub mod record;
pub mod report;
pub mod run;
pub mod scoring;

pub use align::{
    global_align_aa, global_align_aa_affine, global_align_na, global_align_na_affine,
    local_align_aa, local_align_aa_affine, local_align_na, local_align_na_affine, Alignment,
    LocalAlignment, ScoreMatrix, TracebackDir, TracebackMatrix,
};
pub use error::AlignmentError;
pub use record::Residues;
pub use scoring::{blosum62, ScoringParams, SubstitutionMatrix};
