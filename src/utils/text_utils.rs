/// Strips a leading UTF-8 byte order mark.
pub fn skip_utf8_bom(line: &str) -> &str {
    // UTF-8 BOM is 0xEF 0xBB 0xBF which appears as \u{FEFF} in UTF-8
    line.strip_prefix('\u{FEFF}').unwrap_or(line)
}

/// Removes the trailing `\n` or `\r\n` of a line read with `read_line`.
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_utf8_bom() {
        assert_eq!(skip_utf8_bom("\u{FEFF}日 NA"), "日 NA");
        assert_eq!(skip_utf8_bom("日 NA"), "日 NA");
    }

    #[test]
    fn test_strip_line_ending() {
        let cases = [
            ("a b\n", "a b"),
            ("a b\r\n", "a b"),
            ("a b", "a b"),
            ("a b \n", "a b "),
        ];
        for (line, expected) in cases {
            assert_eq!(strip_line_ending(line), expected, "strip_line_ending({:?})", line);
        }
    }
}
