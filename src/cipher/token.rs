// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tokens and their line layout.

use super::{markers, Format};

/// One unit of the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A note symbol from the active scale (one digit of a pair)
    Note(&'a str),
    /// Space in the source text
    Space,
    /// Newline in the source text
    Newline,
    /// Character with no note pair
    Unknown,
}

impl<'a> Token<'a> {
    /// Spelling of this token in the given format
    pub fn symbol(self, format: Format) -> &'a str {
        match self {
            Token::Note(symbol) => symbol,
            Token::Space => format.space_marker(),
            Token::Newline => format.newline_marker(),
            Token::Unknown => markers::UNKNOWN,
        }
    }

    pub fn is_marker(self) -> bool {
        !matches!(self, Token::Note(_))
    }
}

/// Lay tokens out as lines.
///
/// Tokens on a line are joined by single spaces. A newline token closes
/// the current line (empty or not); whatever is left at the end becomes
/// the final line.
pub fn render_lines(tokens: &[Token<'_>], format: Format) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in tokens {
        if *token == Token::Newline {
            lines.push(current.join(" "));
            current.clear();
        } else {
            current.push(token.symbol(format));
        }
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    lines
}
