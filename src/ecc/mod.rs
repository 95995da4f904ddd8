//! Error correction over GF(256)
//!
//! - Field arithmetic with the Data Matrix primitive polynomial 0x12D
//! - Systematic Reed-Solomon encoding and syndrome-based correction

/// GF(256) field operations
pub mod gf256;
/// Reed-Solomon encoder and decoder
pub mod reed_solomon;

pub use gf256::Gf256;
pub use reed_solomon::{CorrectionMode, ReedSolomonDecoder, ReedSolomonEncoder};
