//! Renormalization of a symbol block's indentation to 2 spaces per
//! nesting level. The original unit is inferred from the block itself, so
//! 4-space or 8-space (expanded tab) input all comes out the same.

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// The indentation unit of a block: the extra indentation of the first
/// non-blank line deeper than the opening line. Defaults to 2 when the
/// block has no deeper line.
fn infer_unit(lines: &[String], base_indent: usize) -> usize {
    lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .find_map(|line| {
            let indent = leading_whitespace(line);
            (indent > base_indent).then(|| indent - base_indent)
        })
        .unwrap_or(2)
}

/// Rewrite each line's leading whitespace so nesting level N gets `2*N + 2`
/// spaces, never less than 2. Blank lines come out empty. Line count and
/// line bodies are preserved.
pub fn normalize_indent(lines: &[String]) -> Vec<String> {
    let Some(first) = lines.first() else {
        return Vec::new();
    };
    let base_indent = leading_whitespace(first) as i32;
    let unit = infer_unit(lines, base_indent as usize) as i32;

    lines
        .iter()
        .map(|line| {
            let body = line.trim();
            if body.is_empty() {
                return String::new();
            }
            let relative = leading_whitespace(line) as i32 - base_indent;
            let level = relative.div_euclid(unit);
            let width = (2 + level * 2).max(2) as usize;
            format!("{}{}", " ".repeat(width), body)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_block_yields_nothing() {
        assert_eq!(normalize_indent(&[]), Vec::<String>::new());
    }

    #[test]
    fn three_line_block_gets_canonical_indents() {
        let block = lines(&["(symbol \"C\"", "  (property \"a\" \"b\")", ")"]);
        let out = normalize_indent(&block);
        assert_eq!(
            out,
            lines(&["  (symbol \"C\"", "    (property \"a\" \"b\")", "  )"])
        );
    }

    #[test]
    fn wide_units_collapse_to_two_spaces_per_level() {
        let block = lines(&[
            "(symbol \"R\"",
            "        (pin \"1\"",
            "                (name \"~\")",
            "        )",
            ")",
        ]);
        let out = normalize_indent(&block);
        assert_eq!(
            out,
            lines(&[
                "  (symbol \"R\"",
                "    (pin \"1\"",
                "      (name \"~\")",
                "    )",
                "  )",
            ])
        );
    }

    #[test]
    fn normalizing_twice_is_a_fixed_point() {
        let block = lines(&[
            "    (symbol \"R\"",
            "        (pin \"1\")",
            "    )",
        ]);
        let once = normalize_indent(&block);
        let twice = normalize_indent(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn blank_lines_lose_their_indentation() {
        let block = lines(&["(symbol \"R\"", "    ", "  (pin \"1\")", ")"]);
        let out = normalize_indent(&block);
        assert_eq!(out[1], "");
        assert_eq!(out.len(), block.len());
    }

    #[test]
    fn flat_block_defaults_the_unit() {
        let block = lines(&["(symbol \"X\"", ")"]);
        let out = normalize_indent(&block);
        assert_eq!(out, lines(&["  (symbol \"X\"", "  )"]));
    }

    #[test]
    fn lines_shallower_than_the_opening_still_get_two_spaces() {
        let block = lines(&["    (symbol \"R\"", "      (pin \"1\")", ")"]);
        let out = normalize_indent(&block);
        assert_eq!(out[2], "  )");
    }
}
