pub mod extract;
pub mod indent;
pub mod merge;

/// Opening form of a KiCad symbol library file. Input files carry their own
/// header; the merged output always uses this one.
pub const HEADER: &str = "(kicad_symbol_lib (version 20211014) (generator kicad_symbol_editor)";

/// One top-level symbol definition cut out of a library file, as a
/// contiguous run of lines delimited by balanced parentheses.
#[derive(Debug, PartialEq, Clone)]
pub struct SymbolBlock {
    pub name: String,
    pub lines: Vec<String>,
}
