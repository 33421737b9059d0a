//! CLI orchestration: read FASTA inputs, align every record pair, render.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::align::{
    global_align_aa, global_align_aa_affine, global_align_na, global_align_na_affine,
    local_align_aa, local_align_aa_affine, local_align_na, local_align_na_affine,
};
use crate::batch::map_pairs;
use crate::input::{read_fasta, AlignArgs, MoleculeArg};
use crate::record::residue_string;
use crate::report::{write_pairwise, Molecule, PairwiseEntry};

fn open_output(out: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

struct RenderedPair {
    query_id: String,
    subject_id: String,
    score: i32,
    seq1: String,
    seq2: String,
    q_start: usize,
    s_start: usize,
}

fn molecule(args: &AlignArgs) -> Molecule {
    match args.molecule {
        MoleculeArg::Na => Molecule::Nucleotide,
        MoleculeArg::Aa => Molecule::Protein,
    }
}

fn write_all(args: &AlignArgs, results: Vec<Result<RenderedPair>>) -> Result<()> {
    let mut writer = open_output(args.out.as_ref())?;
    for result in results {
        let pair = result?;
        write_pairwise(
            &mut writer,
            &PairwiseEntry {
                query_id: &pair.query_id,
                subject_id: &pair.subject_id,
                score: pair.score,
                seq1: &pair.seq1,
                seq2: &pair.seq2,
                q_start: pair.q_start,
                s_start: pair.s_start,
                molecule: molecule(args),
            },
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the `global` subcommand.
pub fn run_global(args: AlignArgs) -> Result<()> {
    let queries = read_fasta(&args.query)?;
    let subjects = read_fasta(&args.subject)?;
    let params = args.scoring_params();

    let results = map_pairs(queries.len(), subjects.len(), args.verbose, |qi, si| {
        let q = &queries[qi];
        let s = &subjects[si];
        let qseq = residue_string(q);
        let sseq = residue_string(s);
        let aligned = match (args.molecule, args.affine) {
            (MoleculeArg::Aa, false) => global_align_aa(&qseq, &sseq),
            (MoleculeArg::Aa, true) => global_align_aa_affine(&qseq, &sseq, &params),
            (MoleculeArg::Na, false) => global_align_na(&qseq, &sseq, &params),
            (MoleculeArg::Na, true) => global_align_na_affine(&qseq, &sseq, &params),
        };
        aligned
            .map(|aln| RenderedPair {
                query_id: q.id().to_string(),
                subject_id: s.id().to_string(),
                score: aln.score(),
                seq1: aln.seq1().to_string(),
                seq2: aln.seq2().to_string(),
                q_start: 1,
                s_start: 1,
            })
            .map_err(|e| anyhow!("{} vs {}: {}", q.id(), s.id(), e))
    });

    write_all(&args, results)
}

/// Run the `local` subcommand.
pub fn run_local(args: AlignArgs) -> Result<()> {
    let queries = read_fasta(&args.query)?;
    let subjects = read_fasta(&args.subject)?;
    let params = args.scoring_params();

    let results = map_pairs(queries.len(), subjects.len(), args.verbose, |qi, si| {
        let q = &queries[qi];
        let s = &subjects[si];
        let qseq = residue_string(q);
        let sseq = residue_string(s);
        let aligned = match (args.molecule, args.affine) {
            (MoleculeArg::Aa, false) => local_align_aa(&qseq, &sseq),
            (MoleculeArg::Aa, true) => local_align_aa_affine(&qseq, &sseq),
            (MoleculeArg::Na, false) => local_align_na(&qseq, &sseq, &params),
            (MoleculeArg::Na, true) => local_align_na_affine(&qseq, &sseq),
        };
        aligned
            .map(|aln| RenderedPair {
                query_id: q.id().to_string(),
                subject_id: s.id().to_string(),
                score: aln.score(),
                seq1: aln.seq1().to_string(),
                seq2: aln.seq2().to_string(),
                q_start: aln.seq1_region().0,
                s_start: aln.seq2_region().0,
            })
            .map_err(|e| anyhow!("{} vs {}: {}", q.id(), s.id(), e))
    });

    write_all(&args, results)
}
