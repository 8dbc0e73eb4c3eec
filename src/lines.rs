use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Column width of a tab stop in KiCad library files.
pub const TABSTOP: usize = 8;

/// Read a whole text file as lines, with line endings stripped and
/// tabs expanded to `TABSTOP`-column stops.
pub fn read_lines(name: &str) -> Result<Vec<String>> {
    let mut f = File::open(name)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(buf.lines().map(|line| expand_tabs(line, TABSTOP)).collect())
}

pub fn write_file<A: Display>(path: &str, content: &A) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(content.to_string().as_bytes())?;
    Ok(())
}

/// Replace each tab with spaces up to the next multiple of `tabstop` columns.
pub fn expand_tabs(line: &str, tabstop: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = tabstop - column % tabstop;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}
