//! Greedy word wrap for the OLED body text.

use heapless::Vec;

/// Wrap `text` into lines of at most `max_width` columns.
///
/// Words are separated by single spaces. Each word is counted with one
/// trailing space while packing; a new line starts when the next word
/// would overflow. Trailing whitespace is trimmed per line. A word longer
/// than `max_width` is never split and keeps a line of its own.
///
/// Lines are borrowed sub-slices of `text`. At most `N` lines are
/// produced; anything past that is dropped (the display runs out of rows
/// long before).
pub fn wrap<'a, const N: usize>(text: &'a str, max_width: usize) -> Vec<&'a str, N> {
    let mut lines: Vec<&str, N> = Vec::new();
    let mut start = 0; // byte offset of the current line
    let mut end = 0; // byte offset past the last placed word
    let mut len = 0; // column count, one trailing space per word
    let mut offset = 0; // byte offset of the word being considered

    for word in text.split(' ') {
        let width = word.chars().count();
        if len + width + 1 <= max_width || len == 0 {
            end = offset + word.len();
            len += width + 1;
        } else {
            let _ = lines.push(text[start..end].trim_end());
            start = offset;
            end = offset + word.len();
            len = width + 1;
        }
        offset += word.len() + 1;
    }
    let _ = lines.push(text[start..end].trim_end());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap20(text: &str) -> Vec<&str, 16> {
        wrap::<16>(text, 20)
    }

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap20("Hello");
        assert_eq!(lines.as_slice(), &["Hello"]);
    }

    #[test]
    fn packs_greedily_and_respects_width() {
        let lines = wrap20("the quick brown fox jumps over the lazy dog");
        for line in &lines {
            // One trailing space is counted while packing, so the trimmed
            // line is at most max_width - 1 columns.
            assert!(line.chars().count() <= 20, "line too long: {line:?}");
        }
        assert_eq!(
            lines.as_slice(),
            &["the quick brown fox", "jumps over the lazy", "dog"]
        );
    }

    #[test]
    fn word_sequence_is_preserved() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap20(text);
        let rejoined: std::vec::Vec<&str> =
            lines.iter().flat_map(|l| l.split(' ')).collect();
        let expected: std::vec::Vec<&str> = text.split(' ').collect();
        assert_eq!(rejoined, expected);
    }

    #[test]
    fn exact_fit_does_not_spill() {
        // 19 columns + the counted trailing space == 20.
        let lines = wrap20("aaaaaaaaa bbbbbbbbb");
        assert_eq!(lines.as_slice(), &["aaaaaaaaa bbbbbbbbb"]);
    }

    #[test]
    fn overlong_word_keeps_its_own_line() {
        let lines = wrap20("hi aaaaaaaaaaaaaaaaaaaaaaaaa bye");
        assert_eq!(
            lines.as_slice(),
            &["hi", "aaaaaaaaaaaaaaaaaaaaaaaaa", "bye"]
        );
    }

    #[test]
    fn leading_overlong_word_produces_no_empty_line() {
        let lines = wrap20("aaaaaaaaaaaaaaaaaaaaaaaaa bye");
        assert_eq!(lines.as_slice(), &["aaaaaaaaaaaaaaaaaaaaaaaaa", "bye"]);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        let lines = wrap20("");
        assert_eq!(lines.as_slice(), &[""]);
    }

    #[test]
    fn trailing_space_is_trimmed() {
        let lines = wrap20("hello world ");
        assert_eq!(lines.as_slice(), &["hello world"]);
    }
}
