//! Merging several symbol library files into one combined library.
//!
//! Files are processed strictly in the order given; a missing or broken
//! input is reported and skipped, never fatal. The combined library keeps
//! every extracted symbol in input-file-then-in-file order, duplicates
//! included.
use super::extract::extract_symbols;
use super::indent::normalize_indent;
use super::HEADER;
use crate::lines::{read_lines, Result};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

/// One symbol ready for the combined output.
pub struct MergedSymbol {
    pub name: String,
    pub lines: Vec<String>,
}

/// All merged symbols in accumulation order. Its `Display` form is the
/// complete output file: header line, every symbol's lines, closing paren.
#[derive(Default)]
pub struct MergedLibrary {
    pub symbols: Vec<MergedSymbol>,
}

impl MergedLibrary {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Display for MergedLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{HEADER}")?;
        for symbol in &self.symbols {
            for line in &symbol.lines {
                writeln!(f, "{line}")?;
            }
        }
        writeln!(f, ")")
    }
}

/// Extract and renormalize every top-level symbol of one input file.
/// Prints one line per symbol naming it and the file it came from.
fn collect_file(path: &str) -> Result<Vec<MergedSymbol>> {
    let lines = read_lines(path)?;
    let extraction = extract_symbols(&lines);
    if let Some(name) = &extraction.unterminated {
        eprintln!("Warning: unterminated symbol {name:?} in {path} was dropped");
    }

    let base = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_owned());

    Ok(extraction
        .symbols
        .into_iter()
        .map(|block| {
            println!("Extracted symbol: {} from {}", block.name, base);
            MergedSymbol {
                name: block.name,
                lines: normalize_indent(&block.lines),
            }
        })
        .collect())
}

/// Merge the given input files, in order, into one library. Missing files
/// and per-file failures are warnings on stderr; the remaining files are
/// still processed.
pub fn merge_files(inputs: &[String]) -> MergedLibrary {
    let mut library = MergedLibrary::default();

    for input in inputs {
        if !Path::new(input).exists() {
            eprintln!("Warning: file not found: {input}");
            continue;
        }
        match collect_file(input) {
            Ok(symbols) => library.symbols.extend(symbols),
            Err(err) => eprintln!("Error processing {input}: {err}"),
        }
    }

    let mut seen = BTreeSet::new();
    for symbol in &library.symbols {
        if !seen.insert(symbol.name.as_str()) {
            eprintln!("Warning: duplicate symbol name {:?}", symbol.name);
        }
    }

    library
}
