//! Unit test infrastructure for seqalign
//!
//! Tests are organized by concern:
//! - `scoring` - Substitution matrices and parameter-bundle scoring
//! - `global` - Global (Needleman-Wunsch) alignments, linear gaps
//! - `local` - Local (Smith-Waterman) alignments, linear gaps
//! - `affine` - Affine-gap variants of both modes
//! - `properties` - Randomized invariant checks

pub mod helpers;
pub mod local;
pub mod properties;
