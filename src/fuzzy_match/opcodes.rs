//! Levenshtein edit operations between two strings, grouped into opcodes.
//!
//! An opcode list describes how to turn a `source` string into a `target`
//! string as a sequence of `Equal`, `Replace`, `Insert` and `Delete` spans.
//! The spans tile both strings in order: the `source` range of each opcode
//! starts where the previous one ended, and the same holds for `target`.
//! All indices count characters, not bytes.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Replace,
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    /// Span of the source string (`i1..i2`). Empty for `Insert`.
    pub source: Range<usize>,
    /// Span of the target string (`j1..j2`). Empty for `Delete`.
    pub target: Range<usize>,
}

impl Opcode {
    /// Length of the longer of the two spans.
    pub fn width(&self) -> usize {
        self.source.len().max(self.target.len())
    }
}

/// Number of single-character edits needed to turn `source` into `target`.
pub fn distance(source: &str, target: &str) -> usize {
    opcodes(source, target)
        .iter()
        .filter(|op| op.tag != OpTag::Equal)
        .map(Opcode::width)
        .sum()
}

/// Computes the opcodes that transform `source` into `target`.
pub fn opcodes(source: &str, target: &str) -> Vec<Opcode> {
    let src: Vec<char> = source.chars().collect();
    let dst: Vec<char> = target.chars().collect();

    let prefix = src
        .iter()
        .zip(dst.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let suffix = src[prefix..]
        .iter()
        .rev()
        .zip(dst[prefix..].iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    let src_mid = &src[prefix..src.len() - suffix];
    let dst_mid = &dst[prefix..dst.len() - suffix];

    let mut steps = Vec::with_capacity(src.len().max(dst.len()));
    steps.extend(std::iter::repeat(OpTag::Equal).take(prefix));
    steps.extend(align(src_mid, dst_mid));
    steps.extend(std::iter::repeat(OpTag::Equal).take(suffix));

    group(&steps)
}

/// Single-character alignment of two strings that share no common affix
/// worth stripping. Ties are broken from the end: deletion first, then
/// insertion, then the diagonal.
fn align(src: &[char], dst: &[char]) -> Vec<OpTag> {
    let rows = src.len() + 1;
    let cols = dst.len() + 1;
    let mut cost = vec![0usize; rows * cols];
    let at = |i: usize, j: usize| i * cols + j;

    for i in 0..rows {
        cost[at(i, 0)] = i;
    }
    for j in 0..cols {
        cost[at(0, j)] = j;
    }
    for i in 1..rows {
        for j in 1..cols {
            let substitution = if src[i - 1] == dst[j - 1] { 0 } else { 1 };
            cost[at(i, j)] = (cost[at(i - 1, j)] + 1)
                .min(cost[at(i, j - 1)] + 1)
                .min(cost[at(i - 1, j - 1)] + substitution);
        }
    }

    let mut steps = Vec::with_capacity(rows.max(cols));
    let (mut i, mut j) = (src.len(), dst.len());
    while i > 0 || j > 0 {
        let here = cost[at(i, j)];
        if i > 0 && here == cost[at(i - 1, j)] + 1 {
            steps.push(OpTag::Delete);
            i -= 1;
        } else if j > 0 && here == cost[at(i, j - 1)] + 1 {
            steps.push(OpTag::Insert);
            j -= 1;
        } else {
            i -= 1;
            j -= 1;
            steps.push(if src[i] == dst[j] { OpTag::Equal } else { OpTag::Replace });
        }
    }
    steps.reverse();
    steps
}

/// Merges runs of identical steps into opcodes with source/target ranges.
fn group(steps: &[OpTag]) -> Vec<Opcode> {
    let mut ops: Vec<Opcode> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);

    for &tag in steps {
        let (di, dj) = match tag {
            OpTag::Equal | OpTag::Replace => (1, 1),
            OpTag::Insert => (0, 1),
            OpTag::Delete => (1, 0),
        };
        match ops.last_mut() {
            Some(last) if last.tag == tag => {
                last.source.end += di;
                last.target.end += dj;
            }
            _ => ops.push(Opcode {
                tag,
                source: i..i + di,
                target: j..j + dj,
            }),
        }
        i += di;
        j += dj;
    }
    ops
}
