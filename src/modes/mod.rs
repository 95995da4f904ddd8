//! Data Matrix codeword modes
//!
//! Only ASCII mode is implemented. The other ECC200 compaction modes are
//! listed so a latch codeword can be recognised and reported; decoding them
//! is left to future mode decoders.

pub mod ascii;

/// Pad codeword; ends the data in ASCII mode
pub const PAD: u8 = 129;
/// Function 1 codeword; marks a GS1 payload
pub const FNC1: u8 = 232;

/// ECC200 encodation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ascii,
    C40,
    Text,
    X12,
    Edifact,
    Base256,
}

impl Mode {
    /// Mode entered by a latch codeword in ASCII mode
    pub fn latched_by(codeword: u8) -> Option<Mode> {
        match codeword {
            230 => Some(Mode::C40),
            231 => Some(Mode::Base256),
            238 => Some(Mode::X12),
            239 => Some(Mode::Text),
            240 => Some(Mode::Edifact),
            _ => None,
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, Mode::Ascii)
    }
}
