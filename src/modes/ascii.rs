/// ASCII mode: one character per codeword, value = character code + 1
use super::{FNC1, Mode, PAD};
use crate::debug::debug_enabled;
use crate::error::{DmtxError, Result};

/// Text recovered from ASCII-mode data codewords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiText {
    pub content: String,
    /// FNC1 was present
    pub gs1: bool,
    /// Codeword-0 values that were skipped
    pub null_codewords: usize,
}

pub struct AsciiEncoder;

impl AsciiEncoder {
    /// Map each character to its codeword. Characters above 127 need a
    /// compaction mode and are rejected.
    pub fn encode(payload: &str) -> Result<Vec<u8>> {
        payload
            .chars()
            .enumerate()
            .map(|(position, character)| {
                if character.is_ascii() {
                    Ok(character as u8 + 1)
                } else {
                    Err(DmtxError::UnsupportedCharacter {
                        character,
                        position,
                    })
                }
            })
            .collect()
    }

    /// GS1 element strings are detected by a leading `(`. This is a heuristic,
    /// not an application identifier parser.
    pub fn is_gs1(payload: &str) -> bool {
        payload.starts_with('(')
    }
}

pub struct AsciiDecoder;

impl AsciiDecoder {
    pub fn decode(data: &[u8]) -> Result<AsciiText> {
        let mut text = AsciiText::default();

        for (position, &codeword) in data.iter().enumerate() {
            match codeword {
                PAD => break,
                FNC1 => text.gs1 = true,
                0 => {
                    text.null_codewords += 1;
                    if debug_enabled() {
                        eprintln!("ASCII: skipping codeword 0 at data position {}", position);
                    }
                }
                1..=128 => text.content.push((codeword - 1) as char),
                _ => {
                    if debug_enabled() {
                        eprintln!(
                            "ASCII: codeword {} at {} ({:?}) is not supported",
                            codeword,
                            position,
                            Mode::latched_by(codeword)
                        );
                    }
                    return Err(DmtxError::UnsupportedMode { codeword, position });
                }
            }
        }

        Ok(text)
    }
}
