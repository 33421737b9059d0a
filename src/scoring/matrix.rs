//! Substitution matrices parsed from whitespace-tokenized text.
//!
//! The format is one header line listing the alphabet in order, followed by
//! one integer row per symbol. Rows may carry a leading label that must
//! repeat the header symbol. `#` starts a comment; parentheses are treated
//! as whitespace so the parenthesized layout parses identically.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::error::AlignmentError;

/// A square substitution-score table over an ordered alphabet.
#[derive(Debug, Clone)]
pub struct SubstitutionMatrix {
    name: String,
    symbols: Vec<u8>,
    index: FxHashMap<u8, usize>,
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    /// Parse a matrix from its textual form.
    ///
    /// Fails before any alignment can run: inconsistent row lengths,
    /// non-integer entries, duplicate or multi-character symbols, and
    /// missing rows are all reported as [`AlignmentError::MalformedMatrix`].
    pub fn parse(name: &str, text: &str) -> Result<Self, AlignmentError> {
        let mut symbols: Vec<u8> = Vec::new();
        let mut index = FxHashMap::default();
        let mut scores: Vec<i32> = Vec::new();
        let mut row = 0usize;

        for line in text.lines() {
            let line = match line.split_once('#') {
                Some((before, _)) => before,
                None => line,
            };
            let tokens: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
                .filter(|t| !t.is_empty())
                .collect();
            if tokens.is_empty() {
                continue;
            }

            if symbols.is_empty() {
                for tok in &tokens {
                    if tok.len() != 1 || !tok.is_ascii() {
                        return Err(AlignmentError::malformed(
                            name,
                            format!("header symbol '{tok}' is not a single ASCII character"),
                        ));
                    }
                    let sym = tok.as_bytes()[0].to_ascii_uppercase();
                    if index.insert(sym, symbols.len()).is_some() {
                        return Err(AlignmentError::malformed(
                            name,
                            format!("duplicate symbol '{}' in header", sym as char),
                        ));
                    }
                    if sym.is_ascii_alphabetic() {
                        index.insert(sym.to_ascii_lowercase(), symbols.len());
                    }
                    symbols.push(sym);
                }
                scores.reserve(symbols.len() * symbols.len());
                continue;
            }

            if row >= symbols.len() {
                return Err(AlignmentError::malformed(
                    name,
                    format!("more rows than the {}-symbol header allows", symbols.len()),
                ));
            }

            // A row may restate its symbol as the first token.
            let entries = if tokens.len() == symbols.len() + 1 {
                let label = tokens[0];
                if label.len() != 1
                    || label.as_bytes()[0].to_ascii_uppercase() != symbols[row]
                {
                    return Err(AlignmentError::malformed(
                        name,
                        format!(
                            "row {} labelled '{}', expected '{}'",
                            row + 1,
                            label,
                            symbols[row] as char
                        ),
                    ));
                }
                &tokens[1..]
            } else if tokens.len() == symbols.len() {
                &tokens[..]
            } else {
                return Err(AlignmentError::malformed(
                    name,
                    format!(
                        "row {} has {} entries, expected {}",
                        row + 1,
                        tokens.len(),
                        symbols.len()
                    ),
                ));
            };

            for tok in entries {
                let value = tok.parse::<i32>().map_err(|_| {
                    AlignmentError::malformed(
                        name,
                        format!("non-integer score entry '{tok}' in row {}", row + 1),
                    )
                })?;
                scores.push(value);
            }
            row += 1;
        }

        if symbols.is_empty() {
            return Err(AlignmentError::malformed(name, "no header line found"));
        }
        if row != symbols.len() {
            return Err(AlignmentError::malformed(
                name,
                format!("{} rows for a {}-symbol alphabet", row, symbols.len()),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            symbols,
            index,
            scores,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alphabet symbols in header order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Position of a symbol in the alphabet, if present.
    pub fn index_of(&self, symbol: u8) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Score for a symbol pair. Unknown symbols are an error, never a
    /// silent default.
    pub fn lookup(&self, x: u8, y: u8) -> Result<i32, AlignmentError> {
        let i = self.index_of(x).ok_or_else(|| self.unknown(x))?;
        let j = self.index_of(y).ok_or_else(|| self.unknown(y))?;
        Ok(self.scores[i * self.symbols.len() + j])
    }

    /// Check that every residue of a sequence is scorable.
    pub fn validate(&self, seq: &[u8]) -> Result<(), AlignmentError> {
        for &sym in seq {
            if self.index_of(sym).is_none() {
                return Err(self.unknown(sym));
            }
        }
        Ok(())
    }

    /// Score lookup for sequences that already passed [`validate`].
    ///
    /// [`validate`]: Self::validate
    pub(crate) fn score_validated(&self, x: u8, y: u8) -> i32 {
        match (self.index_of(x), self.index_of(y)) {
            (Some(i), Some(j)) => self.scores[i * self.symbols.len() + j],
            _ => unreachable!("residues are validated before the matrix fill"),
        }
    }

    fn unknown(&self, symbol: u8) -> AlignmentError {
        AlignmentError::UnknownSymbol {
            symbol: symbol as char,
            matrix: self.name.clone(),
        }
    }
}

/// The bundled BLOSUM62 matrix (25 symbols, NCBI order), parsed once.
pub fn blosum62() -> &'static SubstitutionMatrix {
    static BLOSUM62: OnceLock<SubstitutionMatrix> = OnceLock::new();
    BLOSUM62.get_or_init(|| {
        SubstitutionMatrix::parse("BLOSUM62", include_str!("blosum62.mat"))
            .expect("bundled BLOSUM62 matrix is well-formed")
    })
}
