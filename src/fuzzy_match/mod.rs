use log::{debug, info};
use serde::Serialize;

pub mod annotation;
pub mod opcodes;

pub use annotation::{AnnotatedText, Span, StyleTag};
use opcodes::{OpTag, Opcode};

/// One candidate call sign scored against the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    /// Lower is a closer match; 0 for an exact match.
    pub diff_score: usize,
    pub annotated: AnnotatedText,
    pub raw_call: String,
}

/// Scores every candidate against `query`, highlights the differing
/// characters and returns the candidates best match first.
///
/// An empty query yields nothing, and empty candidates are skipped.
/// Candidates with equal scores keep their input order.
pub fn rank<I, S>(query: &str, candidates: I) -> Vec<ScoredCandidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .filter(|c| !c.as_ref().is_empty())
        .map(|c| score(query, c.as_ref()))
        .collect();

    // sort_by_key is stable
    scored.sort_by_key(|c| c.diff_score);
    debug!("Ranked {} candidates for '{}'", scored.len(), query);
    scored
}

/// Scores a single non-empty candidate against a non-empty query.
pub fn score(query: &str, call: &str) -> ScoredCandidate {
    let chars: Vec<char> = call.chars().collect();
    let len = chars.len();
    let slice = |op: &Opcode| chars[op.source.clone()].iter().collect::<String>();

    let mut annotated = AnnotatedText::new();
    let mut diff_score = 0;

    for op in opcodes::opcodes(call, query) {
        match op.tag {
            OpTag::Equal => annotated.push(&slice(&op), None),
            OpTag::Replace => {
                annotated.push(&slice(&op), Some(StyleTag::Remove));
                diff_score += op.width() * (len + 1 - op.source.end);
            }
            OpTag::Insert | OpTag::Delete => {
                annotated.push(&slice(&op), Some(StyleTag::Add));
                diff_score += op.width() * (len - op.source.end);
            }
        }
    }

    if call == query {
        annotated = AnnotatedText::full_match(call);
    }

    ScoredCandidate {
        diff_score,
        annotated,
        raw_call: call.to_string(),
    }
}

pub fn init() {
    info!("fuzzy_match module loaded");
}
