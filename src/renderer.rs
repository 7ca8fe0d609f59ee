use crossterm::style::{Color, Stylize};
use log::info;
use palette::Srgb;

use crate::config::theme::HighlightStyles;
use crate::fuzzy_match::{ScoredCandidate, StyleTag};

/// Turns ranked candidates into terminal lines, either with highlight
/// background colours or in a bracketed form for plain output.
pub struct Renderer {
    styles: HighlightStyles,
    plain: bool,
}

impl Renderer {
    pub fn new(styles: HighlightStyles, plain: bool) -> Self {
        Self { styles, plain }
    }

    pub fn render_candidate(&self, candidate: &ScoredCandidate) -> String {
        let mut line = String::new();
        for span in candidate.annotated.spans() {
            match span.style {
                None => line.push_str(&span.text),
                Some(tag) if self.plain => {
                    let (open, close) = match tag {
                        StyleTag::Remove => ("[", "]"),
                        StyleTag::Add => ("(", ")"),
                        StyleTag::Match => ("*", "*"),
                    };
                    line.push_str(&format!("{}{}{}", open, span.text, close));
                }
                Some(tag) => {
                    let color = Self::to_color(self.styles.color_for(tag));
                    line.push_str(&format!("{}", span.text.as_str().on(color)));
                }
            }
        }
        line
    }

    /// A titled block of candidates, one per line; `-` when there are none.
    pub fn render_pane(&self, title: &str, candidates: &[ScoredCandidate]) -> String {
        let mut out = format!("== {} ==\n", title);
        if candidates.is_empty() {
            out.push_str("-\n");
        }
        for candidate in candidates {
            out.push_str(&self.render_candidate(candidate));
            out.push('\n');
        }
        out
    }

    fn to_color(rgb: Srgb<u8>) -> Color {
        Color::Rgb {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
        }
    }
}

pub fn init() {
    info!("renderer module loaded");
}
