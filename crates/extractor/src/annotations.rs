use crate::text::truncate_chars;
use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum annotations kept per kind per file
pub const MAX_ANNOTATIONS: usize = 10;

/// Maximum characters kept from one annotation
pub const MAX_ANNOTATION_CHARS: usize = 100;

static TODO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:#|//|/\*)\s*TODO[:\s]*(.+?)(?:\*/|\n|$)").expect("valid todo pattern")
});

static BLOCKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:#|//|/\*)\s*(?:FIXME|HACK|BUG|XXX)[:\s]*(.+?)(?:\*/|\n|$)")
        .expect("valid blocker pattern")
});

/// `TODO` comments introduced by `#`, `//` or `/*`
pub fn scan_todos(content: &str) -> Vec<String> {
    scan(&TODO, content)
}

/// `FIXME`, `HACK`, `BUG` and `XXX` comments
pub fn scan_blockers(content: &str) -> Vec<String> {
    scan(&BLOCKER, content)
}

fn scan(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|text| truncate_chars(text.as_str().trim(), MAX_ANNOTATION_CHARS))
        .take(MAX_ANNOTATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn finds_todos_across_comment_styles() {
        let code = "# TODO: handle errors\nx = 1  // todo refactor later\n/* TODO: tidy */\n";
        assert_eq!(
            scan_todos(code),
            vec!["handle errors", "refactor later", "tidy"]
        );
    }

    #[test]
    fn blockers_cover_every_marker() {
        let code = "# FIXME: leaks\n// HACK workaround\n# bug: off by one\n/* XXX: remove */\n# TODO: not a blocker\n";
        assert_eq!(
            scan_blockers(code),
            vec!["leaks", "workaround", "off by one", "remove"]
        );
    }

    #[test]
    fn marker_without_comment_prefix_is_ignored() {
        assert!(scan_todos("TODO: plain text\nlet todo = 1;\n").is_empty());
    }

    #[test]
    fn long_annotations_are_truncated() {
        let code = format!("# TODO: {}\n", "a".repeat(300));
        let todos = scan_todos(&code);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].chars().count(), MAX_ANNOTATION_CHARS);
    }

    #[test]
    fn keeps_first_ten_in_order() {
        let code: String = (0..15).map(|i| format!("# TODO: item {i}\n")).collect();
        let todos = scan_todos(&code);
        assert_eq!(todos.len(), MAX_ANNOTATIONS);
        assert_eq!(todos[0], "item 0");
        assert_eq!(todos[9], "item 9");
    }

    proptest! {
        #[test]
        fn annotations_respect_limits(lines in proptest::collection::vec("[a-zA-Z #/:*]{0,160}", 0..30)) {
            let content = lines.join("\n");
            for found in [scan_todos(&content), scan_blockers(&content)] {
                prop_assert!(found.len() <= MAX_ANNOTATIONS);
                for text in &found {
                    prop_assert!(text.chars().count() <= MAX_ANNOTATION_CHARS);
                }
            }
        }
    }
}
