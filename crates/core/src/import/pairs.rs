//! Line pairing stage of the bulk-import parser.

/// Split raw pasted text into (title line, description line) pairs.
///
/// Lines are trimmed and empty lines dropped before pairing, so blank lines
/// between entries are harmless. A trailing unpaired line cannot form a
/// complete entry and is dropped with an informational log; earlier pairs
/// are never misaligned by it.
pub fn pair_lines(input: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        if let Some(last) = lines.last() {
            tracing::info!(line = *last, "dropping trailing unpaired line");
        }
    }

    lines
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_order() {
        let pairs = pair_lines("a\nb\nc\nd");
        assert_eq!(
            pairs,
            vec![("a".to_string(), "b".to_string()), ("c".to_string(), "d".to_string())]
        );
    }

    #[test]
    fn test_blank_lines_dropped_before_pairing() {
        let pairs = pair_lines("a\n\n  \nb\n\nc\nd\n");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("a".to_string(), "b".to_string()));
    }

    #[test]
    fn test_odd_count_drops_only_last_line() {
        let pairs = pair_lines("a\nb\nc");
        assert_eq!(pairs, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_single_line_yields_nothing() {
        assert!(pair_lines("https://test-no-desc.com").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(pair_lines("").is_empty());
        assert!(pair_lines("\n\n   \n").is_empty());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let pairs = pair_lines("  a  \n\tb\t");
        assert_eq!(pairs, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_repairing_rejoined_output_is_idempotent() {
        let input = "Title - https://a.com\nFirst description\nOther - https://b.com\nSecond description";
        let pairs = pair_lines(input);
        let rejoined: Vec<String> = pairs
            .iter()
            .flat_map(|(a, b)| [a.clone(), b.clone()])
            .collect();
        assert_eq!(pair_lines(&rejoined.join("\n")), pairs);
    }
}
