//! Scoring providers for pairwise alignment.
//!
//! A scorer maps a pair of residues (or a residue and the gap sentinel `-`)
//! to an integer substitution score. Two concrete providers exist: a
//! substitution-matrix scorer for amino acids (BLOSUM62 and friends) and a
//! reward/penalty parameter bundle for nucleotides. Gap costs at sequence
//! ends can be repriced by wrapping a scorer in [`TerminalGapScorer`];
//! the recurrences themselves never test for terminal positions.

pub mod matrix;

pub use matrix::{blosum62, SubstitutionMatrix};

/// Gap sentinel. Never present in input sequences; only used when querying
/// a scorer for a gap-involved pair.
pub const GAP: u8 = b'-';

/// Substitution score lookup for a pair of symbols.
pub trait Scorer: Sync {
    fn score(&self, x: u8, y: u8) -> i32;
}

/// Scoring parameters for one alignment call.
///
/// All knobs travel in this record; there is no process-wide scoring state.
/// Penalties are negative by convention (`gap = -8` means each gap costs 8).
/// For linear-gap alignments `gap` is the per-column gap cost; for affine
/// alignments it is the gap-open cost and `gap_extend` the per-extension
/// cost. `terminal_gap`/`terminal_gap_extend` reprice gaps at sequence ends
/// in global alignments; when unset, end gaps cost the same as internal ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    /// Score for a nucleotide match.
    pub reward: i32,
    /// Score for a nucleotide mismatch (transversion when `transition` is set).
    pub penalty: i32,
    /// Score for a purine-purine or pyrimidine-pyrimidine substitution.
    /// `None` scores transitions as ordinary mismatches.
    pub transition: Option<i32>,
    /// Gap cost (linear) or gap-open cost (affine).
    pub gap: i32,
    /// Gap-extension cost (affine only).
    pub gap_extend: i32,
    /// Gap cost at sequence ends, global alignments only.
    pub terminal_gap: Option<i32>,
    /// Gap-extension cost at sequence ends, global affine alignments only.
    pub terminal_gap_extend: Option<i32>,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            reward: 4,
            penalty: -4,
            transition: None,
            gap: -8,
            gap_extend: -2,
            terminal_gap: None,
            terminal_gap_extend: None,
        }
    }
}

impl ScoringParams {
    /// Effective terminal gap-open cost: the terminal override, else `gap`.
    pub fn terminal_open(&self) -> i32 {
        self.terminal_gap.unwrap_or(self.gap)
    }

    /// Effective terminal gap-extension cost.
    pub fn terminal_extend(&self) -> i32 {
        self.terminal_gap_extend.unwrap_or(self.gap_extend)
    }
}

/// Transition partner of a nucleotide: A and G swap, C and T swap.
/// Ambiguity codes have no partner.
fn transition_partner(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'G'),
        b'G' => Some(b'A'),
        b'C' => Some(b'T'),
        b'T' => Some(b'C'),
        _ => None,
    }
}

/// Reward/penalty scorer for nucleotide sequences.
///
/// Lookup priority: reward on identity, gap cost when either side is the
/// sentinel, transition score when configured and applicable, penalty
/// otherwise. Case-insensitive.
#[derive(Debug, Clone, Copy)]
pub struct NucleotideScorer {
    reward: i32,
    penalty: i32,
    transition: Option<i32>,
    gap: i32,
}

impl NucleotideScorer {
    pub fn new(params: &ScoringParams) -> Self {
        Self {
            reward: params.reward,
            penalty: params.penalty,
            transition: params.transition,
            gap: params.gap,
        }
    }
}

impl Scorer for NucleotideScorer {
    fn score(&self, x: u8, y: u8) -> i32 {
        let x = x.to_ascii_uppercase();
        let y = y.to_ascii_uppercase();
        if x == y {
            return self.reward;
        }
        if x == GAP || y == GAP {
            return self.gap;
        }
        if let Some(ts) = self.transition {
            if transition_partner(x) == Some(y) {
                return ts;
            }
        }
        self.penalty
    }
}

/// Substitution-matrix scorer with a flat gap cost.
///
/// Sequences must be validated against the matrix before alignment; see
/// [`SubstitutionMatrix::validate`].
#[derive(Debug, Clone, Copy)]
pub struct MatrixScorer<'a> {
    matrix: &'a SubstitutionMatrix,
    gap: i32,
}

impl<'a> MatrixScorer<'a> {
    pub fn new(matrix: &'a SubstitutionMatrix, gap: i32) -> Self {
        Self { matrix, gap }
    }
}

impl Scorer for MatrixScorer<'_> {
    fn score(&self, x: u8, y: u8) -> i32 {
        if x == GAP || y == GAP {
            return self.gap;
        }
        self.matrix.score_validated(x, y)
    }
}

/// Wrapper that reprices gap-involved pairs with the terminal gap cost.
///
/// The driver substitutes this scorer around boundary fills; residue pairs
/// pass through to the inner scorer unchanged.
pub struct TerminalGapScorer<'a> {
    inner: &'a dyn Scorer,
    terminal_gap: i32,
}

impl<'a> TerminalGapScorer<'a> {
    pub fn new(inner: &'a dyn Scorer, terminal_gap: i32) -> Self {
        Self {
            inner,
            terminal_gap,
        }
    }
}

impl Scorer for TerminalGapScorer<'_> {
    fn score(&self, x: u8, y: u8) -> i32 {
        if x == GAP || y == GAP {
            return self.terminal_gap;
        }
        self.inner.score(x, y)
    }
}
