use serde::Serialize;

/// Highlight applied to part of a call sign. The host maps these to
/// concrete colours through [`crate::config::theme::HighlightStyles`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    /// Characters that differ from the query.
    Remove,
    /// Characters the candidate has but the query lacks.
    Add,
    /// The whole call sign equals the query.
    Match,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub style: Option<StyleTag>,
}

/// A call sign broken into plain and highlighted spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnnotatedText {
    spans: Vec<Span>,
}

impl AnnotatedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single span covering `text` in the match style.
    pub fn full_match(text: &str) -> Self {
        let mut annotated = Self::new();
        annotated.push(text, Some(StyleTag::Match));
        annotated
    }

    /// Appends a span. Empty text is dropped; a span with the same style as
    /// the previous one is merged into it.
    pub fn push(&mut self, text: &str, style: Option<StyleTag>) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.spans.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text with all styling removed.
    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
