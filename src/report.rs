//! Pairwise text rendering of alignments.

use std::io::{self, Write};

use crate::scoring::blosum62;

/// Line length for alignment display.
pub const DEFAULT_LINE_LENGTH: usize = 60;

/// Molecule kind, controls the midline markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Molecule {
    Nucleotide,
    Protein,
}

/// One rendered alignment block.
#[derive(Debug, Clone)]
pub struct PairwiseEntry<'a> {
    pub query_id: &'a str,
    pub subject_id: &'a str,
    pub score: i32,
    pub seq1: &'a str,
    pub seq2: &'a str,
    /// 1-based start of the aligned region in each input.
    pub q_start: usize,
    pub s_start: usize,
    pub molecule: Molecule,
}

fn midline_marker(q: char, s: char, molecule: Molecule) -> char {
    if q == s && q != '-' {
        return match molecule {
            Molecule::Nucleotide => '|',
            Molecule::Protein => q,
        };
    }
    if molecule == Molecule::Protein && q != '-' && s != '-' {
        let positive = blosum62()
            .lookup(q as u8, s as u8)
            .map(|score| score > 0)
            .unwrap_or(false);
        if positive {
            return '+';
        }
    }
    ' '
}

/// Write one alignment as blocked Query/Sbjct lines with a midline.
pub fn write_pairwise<W: Write>(writer: &mut W, entry: &PairwiseEntry) -> io::Result<()> {
    writeln!(writer, "Query= {}", entry.query_id)?;
    writeln!(writer, "Sbjct= {}", entry.subject_id)?;
    writeln!(writer, " Score = {}", entry.score)?;
    writeln!(writer)?;

    if entry.seq1.is_empty() {
        writeln!(writer, " ***** No alignment *****")?;
        writeln!(writer)?;
        return Ok(());
    }

    let q_chars: Vec<char> = entry.seq1.chars().collect();
    let s_chars: Vec<char> = entry.seq2.chars().collect();
    let pos_width = format!("{}", q_chars.len().max(s_chars.len())).len().max(4);

    let mut q_pos = entry.q_start;
    let mut s_pos = entry.s_start;
    let mut offset = 0;

    while offset < q_chars.len() {
        let end = (offset + DEFAULT_LINE_LENGTH).min(q_chars.len());
        let chunk_q: String = q_chars[offset..end].iter().collect();
        let chunk_s: String = s_chars[offset..end].iter().collect();
        let middle: String = q_chars[offset..end]
            .iter()
            .zip(s_chars[offset..end].iter())
            .map(|(&q, &s)| midline_marker(q, s, entry.molecule))
            .collect();

        let q_non_gap = chunk_q.chars().filter(|&c| c != '-').count();
        let s_non_gap = chunk_s.chars().filter(|&c| c != '-').count();
        let q_end_pos = q_pos + q_non_gap.saturating_sub(1);
        let s_end_pos = s_pos + s_non_gap.saturating_sub(1);

        writeln!(
            writer,
            "Query  {:>width$}  {}  {}",
            q_pos,
            chunk_q,
            q_end_pos,
            width = pos_width
        )?;
        writeln!(writer, "       {:>width$}  {}", "", middle, width = pos_width)?;
        writeln!(
            writer,
            "Sbjct  {:>width$}  {}  {}",
            s_pos,
            chunk_s,
            s_end_pos,
            width = pos_width
        )?;
        writeln!(writer)?;

        q_pos = q_end_pos + 1;
        s_pos = s_end_pos + 1;
        offset = end;
    }

    Ok(())
}
