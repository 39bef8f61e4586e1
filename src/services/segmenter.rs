/// Split document text into line-aligned segments of roughly `max_chars`
/// characters, the grounding unit for one generated question.
///
/// Lines are accumulated into a buffer; when appending the next line would
/// push a non-empty buffer past `max_chars` the buffer is closed and a new
/// one starts with that line. The `'\n'` separator is re-appended after the
/// bound check, so a closed segment holds at most `max_chars + 1` bytes. A
/// single line longer than `max_chars` becomes its own oversized segment,
/// never truncated. Empty input yields no segments; callers must treat that
/// as "no material available" and refuse to start a quiz.
pub fn segment(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if !current.is_empty() && current.len() + line.len() > max_chars {
            segments.push(current);
            current = String::new();
        }
        current.push_str(line);
        current.push('\n');
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(segment("", 1350).is_empty());
    }

    #[test]
    fn short_text_yields_single_segment() {
        let segments = segment("alpha\nbeta", 1350);
        assert_eq!(segments, vec!["alpha\nbeta\n"]);
    }

    #[test]
    fn concatenated_segments_reproduce_the_text() {
        let text = "first line\nsecond line\nthird line\nfourth line";
        let segments = segment(text, 20);

        assert!(segments.len() > 1);
        let rejoined: String = segments.concat();
        // Each source line reappears exactly once, separators re-inserted.
        assert_eq!(rejoined.trim_end_matches('\n'), text);
    }

    #[test]
    fn segments_respect_the_bound() {
        let line = "x".repeat(50);
        let text = vec![line; 40].join("\n");
        let segments = segment(&text, 120);

        // The closing newline lands after the bound check.
        assert!(segments.iter().all(|s| s.len() <= 121));
        assert!(segments.len() > 1);
    }

    #[test]
    fn boundaries_fall_on_line_boundaries() {
        let text = "aaaa\nbbbb\ncccc\ndddd";
        let segments = segment(text, 10);

        assert!(segments.iter().all(|s| s.ends_with('\n')));
    }

    #[test]
    fn oversized_line_gets_its_own_segment() {
        let long_line = "y".repeat(500);
        let text = format!("short\n{long_line}\ntail");
        let segments = segment(&text, 100);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], format!("{long_line}\n"));
    }

    #[test]
    fn oversized_first_line_is_not_preceded_by_empty_segment() {
        let long_line = "z".repeat(300);
        let segments = segment(&long_line, 100);

        assert_eq!(segments, vec![format!("{long_line}\n")]);
    }
}
