// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Text to token conversion.
//!
//! Base-12 scales encode every character's code point, spaces and
//! newlines included. Base-8 scales encode letters only (A=0..Z=25) and
//! give spaces, newlines and everything else their own marker token.

use tracing::debug;

use super::Token;
use crate::music::{Radix, Scale};

/// Convert text to tokens under `scale`
pub(crate) fn tokenize<'s>(scale: &'s Scale, text: &str) -> Vec<Token<'s>> {
    let mut tokens = Vec::with_capacity(text.len() * 2);

    match scale.radix() {
        Radix::Base12 => {
            for ch in text.chars() {
                push_pair(scale, ch as u32, &mut tokens);
            }
        }
        Radix::Base8 => {
            for ch in text.chars() {
                push_letter(scale, ch, &mut tokens);
            }
        }
    }

    tokens
}

fn push_letter<'s>(scale: &'s Scale, ch: char, tokens: &mut Vec<Token<'s>>) {
    match ch {
        ' ' => tokens.push(Token::Space),
        '\n' => tokens.push(Token::Newline),
        _ if ch.is_alphabetic() => match letter_index(ch) {
            Some(idx) => push_pair(scale, idx, tokens),
            None => {
                debug!(?ch, "letter outside A-Z");
                tokens.push(Token::Unknown);
            }
        },
        _ => {
            debug!(?ch, "no note pair for character");
            tokens.push(Token::Unknown);
        }
    }
}

/// Push the high and low digits of `value` as two note tokens
fn push_pair<'s>(scale: &'s Scale, value: u32, tokens: &mut Vec<Token<'s>>) {
    let base = scale.radix().value();
    // Values past two digits wrap: only the low two digits are kept
    tokens.push(Token::Note(scale.symbol((value / base) % base)));
    tokens.push(Token::Note(scale.symbol(value % base)));
}

/// Uppercase letter index, A=0..Z=25
fn letter_index(ch: char) -> Option<u32> {
    let mut upper = ch.to_uppercase();
    let first = upper.next()?;
    if upper.next().is_some() {
        return None;
    }
    (first as u32)
        .checked_sub('A' as u32)
        .filter(|idx| *idx < 26)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::ScalePreset;

    fn symbols<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens
            .iter()
            .map(|t| t.symbol(crate::cipher::Format::Explicit))
            .collect()
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('h'), Some(7));
        assert_eq!(letter_index('é'), None);
        // Uppercases to two characters
        assert_eq!(letter_index('ß'), None);
        // Dotless i uppercases to ASCII I
        assert_eq!(letter_index('ı'), Some(8));
    }

    #[test]
    fn test_base8_hi() {
        let scale = Scale::preset(ScalePreset::OctatonicHalfWhole);
        let tokens = tokenize(&scale, "HI");
        assert_eq!(symbols(&tokens), vec!["E", "D", "F", "E"]);
    }

    #[test]
    fn test_base8_case_insensitive() {
        let scale = Scale::preset(ScalePreset::BebopMixolydian);
        assert_eq!(tokenize(&scale, "melody"), tokenize(&scale, "MELODY"));
    }

    #[test]
    fn test_base8_markers() {
        let scale = Scale::preset(ScalePreset::LocrianPlus2);
        let tokens = tokenize(&scale, "A B\n1!");
        assert_eq!(
            tokens,
            vec![
                Token::Note("E"),
                Token::Note("E"),
                Token::Space,
                Token::Note("E"),
                Token::Note("F"),
                Token::Newline,
                Token::Unknown,
                Token::Unknown,
            ]
        );
    }

    #[test]
    fn test_base8_last_letter() {
        // Z = 25 = 3 * 8 + 1
        let scale = Scale::preset(ScalePreset::LocrianPlus2);
        assert_eq!(symbols(&tokenize(&scale, "z")), vec!["G", "F"]);
    }

    #[test]
    fn test_base8_non_ascii_letter() {
        let scale = Scale::preset(ScalePreset::DorianFlat2);
        assert_eq!(tokenize(&scale, "é"), vec![Token::Unknown]);
    }

    #[test]
    fn test_base12_code_point() {
        // 'A' = 65 = 5 * 12 + 5
        let scale = Scale::preset(ScalePreset::Duochroma);
        assert_eq!(symbols(&tokenize(&scale, "A")), vec!["F", "F"]);
    }

    #[test]
    fn test_base12_encodes_whitespace_as_pairs() {
        let scale = Scale::preset(ScalePreset::Duochroma);
        // ' ' = 32 = 2 * 12 + 8, '\n' = 10 = 0 * 12 + 10
        assert_eq!(symbols(&tokenize(&scale, " ")), vec!["D", "G#"]);
        assert_eq!(symbols(&tokenize(&scale, "\n")), vec!["C", "A#"]);
        assert!(tokenize(&scale, "a b\n").iter().all(|t| !t.is_marker()));
    }

    #[test]
    fn test_unknown_marker_logged_at_debug() {
        use std::io::{self, Write};
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct SharedBuf(Arc<Mutex<Vec<u8>>>);

        impl Write for SharedBuf {
            fn write(&mut self, data: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(data);
                Ok(data.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let scale = Scale::preset(ScalePreset::DorianFlat2);
        let tokens = tracing::subscriber::with_default(subscriber, || tokenize(&scale, "7é"));
        assert_eq!(tokens, vec![Token::Unknown, Token::Unknown]);

        let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("DEBUG"), "{}", logged);
        assert!(logged.contains("no note pair for character"), "{}", logged);
        assert!(logged.contains("letter outside A-Z"), "{}", logged);
    }

    #[test]
    fn test_base12_high_digit_wraps() {
        let scale = Scale::preset(ScalePreset::Duochroma);
        // 'é' = 233; 233 / 12 = 19, 19 % 12 = 7; 233 % 12 = 5
        assert_eq!(symbols(&tokenize(&scale, "é")), vec!["G", "F"]);
    }
}
