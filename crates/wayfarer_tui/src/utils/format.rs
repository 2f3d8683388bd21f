//! Text shaping for the chat transcript: display-width truncation and
//! word wrapping.
//!
//! Widths are terminal columns via `unicode-width`, so CJK and other
//! wide characters count as two columns and don't overflow the viewport.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns `s` occupies in the terminal.
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Shorten `s` to at most `max_width` columns, ending in "…" when shortened.
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1; // ellipsis column
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Word-wrap `s` into lines no wider than `width` columns.
///
/// Breaks at whitespace. A single word wider than `width` gets a line of its
/// own rather than being split mid-word. Whitespace-only input yields no
/// lines; `width` 0 yields no lines.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width = display_width(word);
        let fits = if current.is_empty() {
            word_width <= width
        } else {
            current_width + 1 + word_width <= width
        };

        if fits {
            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                lines.push(word.to_string());
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("京都"), 4);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_ellipsis("hi", 10), "hi");
        assert_eq!(truncate_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_ends_in_ellipsis() {
        assert_eq!(truncate_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_ellipsis("ab", 1), "…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn truncate_respects_wide_chars() {
        // "京都は" is 6 columns; budget 4 leaves room for one wide char + "…"
        assert_eq!(truncate_ellipsis("京都は", 4), "京…");
    }

    #[test]
    fn wrap_breaks_at_words() {
        let lines = wrap_lines("one two three four", 8);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_gives_oversized_word_its_own_line() {
        let lines = wrap_lines("a veryveryverylongword b", 6);
        assert!(lines.contains(&"veryveryverylongword".to_string()));
    }

    #[test]
    fn wrap_handles_wide_chars() {
        let lines = wrap_lines("京都 大阪 東京", 5);
        assert_eq!(lines, vec!["京都", "大阪", "東京"]);
    }

    #[test]
    fn wrap_empty_input() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("abc", 0).is_empty());
    }
}
