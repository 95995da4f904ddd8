/// GF(256) arithmetic for Data Matrix ECC200
/// Primitive polynomial x^8 + x^5 + x^3 + x^2 + 1 (0x12D), generator alpha = 2
use crate::error::{DmtxError, Result};

const PRIMITIVE_POLY: u16 = 0x12D;

struct Tables {
    /// alpha^i, mirrored over 255..510 so log sums index without a modulo
    exp: [u8; 512],
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    Tables { exp, log }
}

static TABLES: Tables = build_tables();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^i for any i (reduced mod 255)
    pub fn exp(i: usize) -> u8 {
        TABLES.exp[i % 255]
    }

    /// Discrete log of a non-zero element. `log(0)` is meaningless and returns 0.
    pub fn log(a: u8) -> u8 {
        TABLES.log[a as usize]
    }

    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        TABLES.exp[log_a + log_b]
    }

    pub fn div(a: u8, b: u8) -> Result<u8> {
        if b == 0 {
            return Err(DmtxError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let log_a = TABLES.log[a as usize] as usize;
        let log_b = TABLES.log[b as usize] as usize;
        Ok(TABLES.exp[log_a + 255 - log_b])
    }

    pub fn inv(a: u8) -> Result<u8> {
        Self::div(1, a)
    }

    /// `a^n`. `pow(a, 0)` is 1 for every `a`, zero included (empty product),
    /// which is what polynomial evaluation expects for the constant term.
    pub fn pow(a: u8, n: usize) -> u8 {
        if n == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let log_a = TABLES.log[a as usize] as usize;
        TABLES.exp[(log_a * (n % 255)) % 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(1), 2);
        assert_eq!(Gf256::exp(7), 128);
        // 0x100 ^ 0x12D
        assert_eq!(Gf256::exp(8), 0x2D);
        assert_eq!(Gf256::exp(255), 1);
        for a in 1..=255u8 {
            assert_eq!(Gf256::exp(Gf256::log(a) as usize), a);
        }
        for i in 0..512 {
            assert_eq!(TABLES.exp[i], TABLES.exp[i % 255]);
        }
    }

    #[test]
    fn test_mul_by_zero() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::mul(a, 0), 0);
            assert_eq!(Gf256::mul(0, a), 0);
        }
    }

    #[test]
    fn test_div_by_zero_fails() {
        for a in 0..=255u8 {
            assert_eq!(Gf256::div(a, 0), Err(DmtxError::DivisionByZero));
        }
        assert_eq!(Gf256::inv(0), Err(DmtxError::DivisionByZero));
    }

    #[test]
    fn test_div_inverts_mul() {
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                assert_eq!(Gf256::div(Gf256::mul(a, b), b), Ok(a));
            }
        }
        assert_eq!(Gf256::div(0, 5), Ok(0));
        assert_eq!(Gf256::div(7, 7), Ok(1));
    }

    #[test]
    fn test_pow() {
        for a in 1..=255u8 {
            assert_eq!(Gf256::pow(a, 0), 1);
            assert_eq!(Gf256::pow(a, 1), a);
            assert_eq!(Gf256::pow(a, 255), 1);
        }
        assert_eq!(Gf256::pow(0, 0), 1);
        assert_eq!(Gf256::pow(0, 3), 0);
        assert_eq!(Gf256::pow(2, 260), Gf256::pow(2, 5));
        assert_eq!(Gf256::pow(3, 3), Gf256::mul(3, Gf256::mul(3, 3)));
    }

    #[test]
    fn test_mul_is_commutative_and_distributive() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(11) {
                assert_eq!(Gf256::mul(a, b), Gf256::mul(b, a));
                let c = a.wrapping_add(b);
                assert_eq!(
                    Gf256::mul(a, b ^ c),
                    Gf256::mul(a, b) ^ Gf256::mul(a, c)
                );
            }
        }
    }
}
