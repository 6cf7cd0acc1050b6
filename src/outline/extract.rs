//! Marker extraction from raw text
//!
//! Lines are scanned independently: every `TODO` on a line first, then every
//! `TK`. Offsets are measured in characters, with one extra character per
//! `\n` terminator.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::{MarkerItem, MarkerKind};

/// Maximum number of words following a `TODO` used for its snippet
pub const TODO_SNIPPET_WORDS: usize = 10;

/// Maximum number of words preceding a `TK` used for its snippet
pub const TK_SNIPPET_WORDS: usize = 3;

fn todo_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\bTODO\b").expect("valid TODO pattern"))
}

fn tk_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\bTK\b").expect("valid TK pattern"))
}

/// Extract markers from text that may be unavailable.
///
/// A missing text is treated as an empty document.
pub fn extract_markers_from(text: Option<&str>) -> Vec<MarkerItem> {
    text.map(extract_markers).unwrap_or_default()
}

/// Extract every `TODO` and `TK` marker from `text`, in document order.
///
/// Pure and deterministic: identical input yields an identical list.
///
/// Word boundaries follow the `regex` crate's Unicode `\b`, which counts
/// `_` as a word character: `_TODO` and `TODO_x` are not markers.
pub fn extract_markers(text: &str) -> Vec<MarkerItem> {
    let mut items = Vec::new();
    let mut seen: HashSet<(usize, usize, MarkerKind)> = HashSet::new();
    let mut line_start = 0usize;

    for (line_idx, line) in text.split('\n').enumerate() {
        if !line.is_empty() {
            for (kind, pattern) in [
                (MarkerKind::Todo, todo_pattern()),
                (MarkerKind::Tk, tk_pattern()),
            ] {
                // Char column carried forward from the previous match
                let (mut scanned, mut column) = (0usize, 0usize);
                for m in pattern.find_iter(line) {
                    column += line[scanned..m.start()].chars().count();
                    scanned = m.start();
                    if !seen.insert((line_idx, column, kind)) {
                        continue;
                    }

                    let snippet = match kind {
                        MarkerKind::Todo => words_after(&line[m.end()..]),
                        MarkerKind::Tk => words_before(&line[..m.start()]),
                    };

                    items.push(MarkerItem {
                        kind,
                        snippet,
                        line: line_idx,
                        column,
                        offset: line_start + column,
                    });
                }
            }
        }

        line_start += line.chars().count() + 1;
    }

    items
}

/// First [`TODO_SNIPPET_WORDS`] whitespace-separated words, single-spaced
fn words_after(rest: &str) -> String {
    rest.split_whitespace()
        .take(TODO_SNIPPET_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Last [`TK_SNIPPET_WORDS`] whitespace-separated words, single-spaced
fn words_before(prefix: &str) -> String {
    let mut words: Vec<&str> = prefix
        .split_whitespace()
        .rev()
        .take(TK_SNIPPET_WORDS)
        .collect();
    words.reverse();
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippets(text: &str) -> Vec<String> {
        extract_markers(text).into_iter().map(|i| i.snippet).collect()
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_markers("").is_empty());
        assert!(extract_markers_from(None).is_empty());
    }

    #[test]
    fn test_whole_word_only() {
        assert!(extract_markers("TODOLIST").is_empty());
        assert!(extract_markers("mytk TKO").is_empty());
        assert_eq!(extract_markers("a TODO b").len(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        for text in ["todo", "Todo", "TODO", "tOdO"] {
            let items = extract_markers(text);
            assert_eq!(items.len(), 1, "{text}");
            assert_eq!(items[0].kind, MarkerKind::Todo);
        }
        assert_eq!(extract_markers("tk").len(), 1);
    }

    #[test]
    fn test_todo_snippet_truncated_to_ten_words() {
        assert_eq!(
            snippets("TODO one two three four five six seven eight nine ten eleven"),
            vec!["one two three four five six seven eight nine ten"]
        );
    }

    #[test]
    fn test_todo_snippet_collapses_whitespace() {
        assert_eq!(snippets("  TODO   fix\tthe   thing  "), vec!["fix the thing"]);
    }

    #[test]
    fn test_tk_snippet_uses_preceding_words() {
        assert_eq!(snippets("alpha beta gamma TK"), vec!["alpha beta gamma"]);
        assert_eq!(snippets("a b c d TK"), vec!["b c d"]);
        assert_eq!(snippets("TK at start"), vec![""]);
    }

    #[test]
    fn test_todo_before_tk_on_same_line() {
        let items = extract_markers("x TK then TODO later");
        let kinds: Vec<_> = items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![MarkerKind::Todo, MarkerKind::Tk]);
        assert_eq!(items[0].snippet, "later");
        assert_eq!(items[1].snippet, "x");
    }

    #[test]
    fn test_multiple_on_one_line_left_to_right() {
        let items = extract_markers("TODO a TODO b");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].column, 0);
        assert_eq!(items[0].snippet, "a TODO b");
        assert_eq!(items[1].column, 7);
        assert_eq!(items[1].snippet, "b");
    }

    #[test]
    fn test_offsets_account_for_newlines() {
        let text = "first\n\nsecond TODO here\nTK";
        let items = extract_markers(text);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].line, 2);
        assert_eq!(items[0].column, 7);
        assert_eq!(items[0].offset, 6 + 1 + 7);

        assert_eq!(items[1].line, 3);
        assert_eq!(items[1].offset, 6 + 1 + 17);
    }

    #[test]
    fn test_offsets_are_character_based() {
        let text = "héllo wörld\nüber TODO x";
        let items = extract_markers(text);
        assert_eq!(items.len(), 1);
        let chars: Vec<char> = text.chars().collect();
        let token: String = chars[items[0].offset..items[0].offset + 4].iter().collect();
        assert_eq!(token, "TODO");
    }

    #[test]
    fn test_columns_on_a_crowded_line() {
        let line = format!("ü {}", "TODO TK ".repeat(300));
        let items = extract_markers(&line);
        assert_eq!(items.len(), 600);

        let (todos, tks) = items.split_at(300);
        for (i, item) in todos.iter().enumerate() {
            assert_eq!(item.kind, MarkerKind::Todo);
            assert_eq!(item.column, 2 + 8 * i);
        }
        for (i, item) in tks.iter().enumerate() {
            assert_eq!(item.kind, MarkerKind::Tk);
            assert_eq!(item.column, 7 + 8 * i);
            assert_eq!(item.offset, item.column);
        }
        assert_eq!(tks[0].snippet, "ü TODO");
        assert_eq!(tks[5].snippet, "TODO TK TODO");
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        assert!(extract_markers("_TODO TODO_x tk_ _tk").is_empty());
        assert_eq!(extract_markers("-TODO- .TK.").len(), 2);
    }

    #[test]
    fn test_adjacent_todo_and_tk_both_emitted() {
        let items = extract_markers("TODO TK");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, MarkerKind::Todo);
        assert_eq!(items[0].snippet, "TK");
        assert_eq!(items[1].kind, MarkerKind::Tk);
        assert_eq!(items[1].snippet, "TODO");
    }

    #[test]
    fn test_carriage_return_is_line_content() {
        let items = extract_markers("a\r\nTODO fix\r\n");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].line, 1);
        assert_eq!(items[0].offset, 3);
        assert_eq!(items[0].snippet, "fix");
    }
}
