//! Line-oriented extraction of top-level symbol definitions.
//!
//! The extractor does not parse the symbol format; it only tracks
//! parenthesis depth per line, so blocks are exactly the runs of lines
//! between a `(symbol "name"` start and the line on which the depth
//! returns to zero.
use super::SymbolBlock;
use nom::{
    bytes::complete::{is_not, tag},
    character::complete::{char, multispace1, space0},
    error::VerboseError,
    sequence::{delimited, preceded, tuple},
    IResult, Parser,
};

/// Result of scanning one file's lines.
pub struct Extraction {
    /// Top-level symbols in file order.
    pub symbols: Vec<SymbolBlock>,
    /// Name of a block still open when the input ended, if any.
    /// Such a block is dropped, not emitted.
    pub unterminated: Option<String>,
}

/// The start of a top-level symbol definition, anchored at the start of a
/// line: optional indentation, `(symbol`, whitespace, then the quoted name.
/// Whatever follows the closing quote is left unconsumed.
fn symbol_start(i: &str) -> IResult<&str, &str, VerboseError<&str>> {
    preceded(
        tuple((space0, tag("(symbol"), multispace1)),
        delimited(char('"'), is_not("\""), char('"')),
    )
    .parse(i)
}

/// Net parenthesis count of a line, `(` minus `)` anywhere in it.
fn net_parens(line: &str) -> i32 {
    line.chars()
        .map(|c| match c {
            '(' => 1,
            ')' => -1,
            _ => 0,
        })
        .sum()
}

/// Scan one file's normalized lines for top-level `(symbol "name" ...)`
/// forms. The library header line and blank lines outside blocks are
/// skipped; any other line outside a block is ignored.
pub fn extract_symbols(lines: &[String]) -> Extraction {
    let mut symbols = Vec::new();
    let mut current: Option<SymbolBlock> = None;
    let mut depth = 0;

    for line in lines {
        if let Some(mut block) = current.take() {
            block.lines.push(line.clone());
            depth += net_parens(line);
            if depth == 0 {
                symbols.push(block);
            } else {
                current = Some(block);
            }
            continue;
        }

        if line.contains("(kicad_symbol_lib") || line.trim().is_empty() {
            continue;
        }
        if let Ok((_, name)) = symbol_start(line) {
            depth = net_parens(line);
            let block = SymbolBlock {
                name: name.to_owned(),
                lines: vec![line.clone()],
            };
            // a start line that is already balanced is a complete block
            if depth == 0 {
                symbols.push(block);
            } else {
                current = Some(block);
            }
        }
    }

    Extraction {
        symbols,
        unterminated: current.map(|block| block.name),
    }
}
