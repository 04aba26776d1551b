// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Token stream to text conversion for the explicit format.
//!
//! Decoding never fails. Unknown symbols, pairs broken by a marker and
//! values outside the letter range each become a single `?` and the
//! cursor keeps going. A lone digit at the end of a line becomes `?` and
//! ends that line.

use tracing::debug;

use super::markers::{self, UNKNOWN_CHAR};
use crate::music::{Radix, Scale};

/// Decode a whole stream, line by line
pub(crate) fn decode_stream(scale: &Scale, stream: &str) -> String {
    split_lines(stream)
        .into_iter()
        .map(|line| decode_line(scale, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Characters that end a line, besides `\r\n` which counts as one break
fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line break. A trailing break does not start an empty line.
fn split_lines(stream: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = stream.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&stream[start..i]);
        start = i + ch.len_utf8();
        if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < stream.len() {
        lines.push(&stream[start..]);
    }
    lines
}

/// Decode the whitespace-separated tokens of one line
pub(crate) fn decode_line(scale: &Scale, line: &str) -> String {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut out = String::with_capacity(tokens.len() / 2 + 1);
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        match token {
            markers::SPACE => out.push(' '),
            markers::NEWLINE => out.push('\n'),
            markers::UNKNOWN => out.push(UNKNOWN_CHAR),
            _ => {
                let Some(&next) = tokens.get(i + 1) else {
                    debug!(token, "unpaired note at end of line");
                    out.push(UNKNOWN_CHAR);
                    break;
                };

                if markers::is_marker(next) {
                    // Resync: the marker is handled on the next pass
                    debug!(token, marker = next, "note pair broken by marker");
                    out.push(UNKNOWN_CHAR);
                } else {
                    out.push(decode_pair(scale, token, next));
                    i += 1;
                }
            }
        }
        i += 1;
    }

    out
}

fn decode_pair(scale: &Scale, high: &str, low: &str) -> char {
    let (Some(high_digit), Some(low_digit)) = (scale.digit_of(high), scale.digit_of(low)) else {
        debug!(high, low, scale = scale.name(), "symbol not in scale");
        return UNKNOWN_CHAR;
    };

    let value = high_digit * scale.radix().value() + low_digit;
    match scale.radix() {
        Radix::Base12 => char::from_u32(value).unwrap_or(UNKNOWN_CHAR),
        Radix::Base8 if value < 26 => char::from(b'A' + value as u8),
        Radix::Base8 => {
            debug!(high, low, value, "letter index out of range");
            UNKNOWN_CHAR
        }
    }
}
