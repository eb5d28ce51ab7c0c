//! Tag line lookup.

/// Indices of the lines whose leading characters equal `tag`.
///
/// Comparison is exact and case-sensitive with no trimming. Returns an empty
/// vector when nothing matches.
pub fn locate<S: AsRef<str>>(lines: &[S], tag: &str) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_ref().starts_with(tag))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_returns_every_match_in_order() {
        let lines = vec!["R01 header", "R10 first", "R11 other", "R10 second", "xR10"];
        assert_eq!(locate(&lines, "R10"), vec![1, 3]);
    }

    #[test]
    fn test_locate_no_match_is_empty() {
        let lines = vec!["R01", "R11"];
        assert!(locate(&lines, "R10").is_empty());
        assert!(locate::<&str>(&[], "R10").is_empty());
    }

    #[test]
    fn test_locate_is_case_sensitive_and_untrimmed() {
        let lines = vec!["r10 lower", " R10 indented", "R10"];
        assert_eq!(locate(&lines, "R10"), vec![2]);
    }

    #[test]
    fn test_locate_shorter_line_never_matches() {
        let lines = vec!["R1", "R10"];
        assert_eq!(locate(&lines, "R10"), vec![1]);
    }

    #[test]
    fn test_locate_tag_length_is_not_fixed() {
        let lines = vec!["R1000", "R1099", "R10"];
        assert_eq!(locate(&lines, "R1000"), vec![0]);
        assert_eq!(locate(&lines, "R"), vec![0, 1, 2]);
    }

    #[test]
    fn test_locate_non_ascii_lines() {
        let lines = vec![String::from("R10 Débito"), String::from("Ção")];
        assert_eq!(locate(&lines, "R10"), vec![0]);
        assert_eq!(locate(&lines, "Ç"), vec![1]);
    }
}
