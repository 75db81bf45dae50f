use dioxus::prelude::*;

/// Piece of body text, either plain or emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

/// Splits `**bold**` markers out of literal prose. An unmatched trailing
/// marker is dropped and the remainder stays plain.
pub fn split_emphasis(text: &str) -> Vec<Span<'_>> {
    let parts: Vec<&str> = text.split("**").collect();
    let balanced = parts.len() % 2 == 1;
    let last = parts.len().saturating_sub(1);

    parts
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(idx, part)| {
            let emphasized = idx % 2 == 1 && (balanced || idx < last);
            if emphasized {
                Span::Strong(part)
            } else {
                Span::Plain(part)
            }
        })
        .collect()
}

#[component]
pub fn RichText(text: String) -> Element {
    let spans: Vec<(bool, String)> = split_emphasis(&text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(s) => (false, s.to_string()),
            Span::Strong(s) => (true, s.to_string()),
        })
        .collect();

    rsx! {
        for (idx, (emphasized, piece)) in spans.into_iter().enumerate() {
            if emphasized {
                strong { key: "{idx}", "{piece}" }
            } else {
                span { key: "{idx}", "{piece}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_markers_become_strong_spans() {
        let spans = split_emphasis("**Pediatricians (70%)** and **OBGYNs (68%)** lead.");
        assert_eq!(
            spans,
            vec![
                Span::Strong("Pediatricians (70%)"),
                Span::Plain(" and "),
                Span::Strong("OBGYNs (68%)"),
                Span::Plain(" lead."),
            ]
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(split_emphasis("No markers"), vec![Span::Plain("No markers")]);
        assert!(split_emphasis("").is_empty());
    }

    #[test]
    fn unmatched_marker_keeps_text_plain() {
        let spans = split_emphasis("Rates **rise");
        assert_eq!(spans, vec![Span::Plain("Rates "), Span::Plain("rise")]);
    }
}
