//! Command-line arguments and FASTA input handling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bio::io::fasta;
use clap::{Args, ValueEnum};

use crate::scoring::ScoringParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MoleculeArg {
    /// Nucleotide sequences, reward/penalty scoring
    Na,
    /// Amino acid sequences, BLOSUM62 scoring
    Aa,
}

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Query FASTA file
    #[arg(short, long)]
    pub query: PathBuf,
    /// Subject FASTA file; every query/subject record pair is aligned
    #[arg(short, long)]
    pub subject: PathBuf,
    #[arg(short, long, value_enum, default_value = "na")]
    pub molecule: MoleculeArg,
    /// Use affine gap penalties (gap opens at --gap, extends at --gap-extend)
    #[arg(long, default_value_t = false)]
    pub affine: bool,
    /// Nucleotide match score
    #[arg(long, default_value_t = 4)]
    pub reward: i32,
    /// Nucleotide mismatch score
    #[arg(long, default_value_t = -4, allow_hyphen_values = true)]
    pub penalty: i32,
    /// Score for transitions (A<->G, C<->T); mismatches score --penalty when unset
    #[arg(long, allow_hyphen_values = true)]
    pub transition: Option<i32>,
    /// Gap cost (linear) or gap-open cost (affine); negative
    #[arg(long, default_value_t = -8, allow_hyphen_values = true)]
    pub gap: i32,
    /// Gap-extension cost for affine alignments; negative
    #[arg(long, default_value_t = -2, allow_hyphen_values = true)]
    pub gap_extend: i32,
    /// Gap cost at sequence ends (global only); defaults to --gap
    #[arg(long, allow_hyphen_values = true)]
    pub terminal_gap: Option<i32>,
    /// Gap-extension cost at sequence ends (global affine only)
    #[arg(long, allow_hyphen_values = true)]
    pub terminal_gap_extend: Option<i32>,
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl AlignArgs {
    pub fn scoring_params(&self) -> ScoringParams {
        ScoringParams {
            reward: self.reward,
            penalty: self.penalty,
            transition: self.transition,
            gap: self.gap,
            gap_extend: self.gap_extend,
            terminal_gap: self.terminal_gap,
            terminal_gap_extend: self.terminal_gap_extend,
        }
    }
}

/// Read all records of a FASTA file.
pub fn read_fasta(path: &Path) -> Result<Vec<fasta::Record>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("failed to open FASTA file {}", path.display()))?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to parse FASTA file {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}
