//! Environment-driven defaults, each read once per process.

use crate::ecc::reed_solomon::CorrectionMode;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_correction_mode(value: &str) -> Option<CorrectionMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "algebraic" | "bm" => Some(CorrectionMode::Algebraic),
        "bitflip" | "bit-flip" => Some(CorrectionMode::BitFlipSearch),
        _ => None,
    }
}

static DARK_THRESHOLD: OnceLock<u8> = OnceLock::new();

/// Luma values strictly below this are dark modules.
pub fn dark_threshold() -> u8 {
    *DARK_THRESHOLD.get_or_init(|| parse_env_u8("DMTX_THRESHOLD", 128))
}

static MODULE_PX: OnceLock<usize> = OnceLock::new();

/// Pixels per module edge when rendering or sampling images.
pub fn module_px() -> usize {
    *MODULE_PX.get_or_init(|| parse_env_usize("DMTX_MODULE_PX", 1).clamp(1, 64))
}

static QUIET_ZONE: OnceLock<usize> = OnceLock::new();

/// Light border, in modules, around rendered symbols.
pub fn quiet_zone() -> usize {
    *QUIET_ZONE.get_or_init(|| parse_env_usize("DMTX_QUIET_ZONE", 0).clamp(0, 64))
}

static CORRECTION_MODE: OnceLock<CorrectionMode> = OnceLock::new();

/// Correction mode used by `Decoder::new()`.
pub fn correction_mode() -> CorrectionMode {
    *CORRECTION_MODE.get_or_init(|| {
        std::env::var("DMTX_RS_MODE")
            .ok()
            .and_then(|v| parse_correction_mode(&v))
            .unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_correction_mode() {
        assert_eq!(parse_correction_mode("bitflip"), Some(CorrectionMode::BitFlipSearch));
        assert_eq!(parse_correction_mode(" Algebraic "), Some(CorrectionMode::Algebraic));
        assert_eq!(parse_correction_mode("euclid"), None);
    }

    #[test]
    fn test_unset_variables_fall_back() {
        assert_eq!(parse_env_u8("DMTX_TEST_UNSET_U8", 128), 128);
        assert_eq!(parse_env_usize("DMTX_TEST_UNSET_USIZE", 3), 3);
    }
}
