//! Reed-Solomon properties over many message lengths and EC sizes

use rust_dmtx::DmtxError;
use rust_dmtx::ecc::{CorrectionMode, Gf256, ReedSolomonDecoder, ReedSolomonEncoder};

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn byte(&mut self) -> u8 {
        self.next() as u8
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

fn distinct_positions(rng: &mut Lcg, count: usize, len: usize) -> Vec<usize> {
    let mut positions = Vec::new();
    while positions.len() < count {
        let p = rng.below(len);
        if !positions.contains(&p) {
            positions.push(p);
        }
    }
    positions
}

#[test]
fn test_scenario_known_codewords() {
    let encoded = ReedSolomonEncoder::new(5).encode(&[142, 164, 186]);
    assert_eq!(&encoded[3..], &[114, 25, 5, 88, 102]);
    assert_eq!(ReedSolomonDecoder::new(5).correct(&encoded), Ok(vec![142, 164, 186]));

    let mut damaged = encoded.clone();
    damaged[0] ^= 1;
    assert_eq!(ReedSolomonDecoder::new(5).correct(&damaged), Ok(vec![142, 164, 186]));
}

#[test]
fn test_round_trip_without_errors() {
    let mut rng = Lcg(1);
    for _ in 0..200 {
        let nsym = 1 + rng.below(40);
        let len = rng.below(120);
        let data: Vec<u8> = (0..len).map(|_| rng.byte()).collect();
        let encoded = ReedSolomonEncoder::new(nsym).encode(&data);
        assert_eq!(encoded.len(), len + nsym);
        assert_eq!(&encoded[..len], &data[..]);
        assert_eq!(ReedSolomonDecoder::new(nsym).correct(&encoded), Ok(data));
    }
}

#[test]
fn test_single_bit_errors_within_capacity() {
    let mut rng = Lcg(2);
    for _ in 0..300 {
        let nsym = 2 + rng.below(40);
        let len = 1 + rng.below(150);
        let data: Vec<u8> = (0..len).map(|_| rng.byte()).collect();
        let mut encoded = ReedSolomonEncoder::new(nsym).encode(&data);

        let count = rng.below(nsym / 2 + 1);
        for pos in distinct_positions(&mut rng, count, encoded.len()) {
            encoded[pos] ^= 1 << rng.below(8);
        }

        let decoder = ReedSolomonDecoder::new(nsym);
        assert_eq!(decoder.correct(&encoded), Ok(data), "nsym={} errors={}", nsym, count);
    }
}

#[test]
fn test_byte_errors_within_capacity() {
    let mut rng = Lcg(3);
    for _ in 0..300 {
        let nsym = 2 + rng.below(60);
        let len = rng.below(180);
        let data: Vec<u8> = (0..len).map(|_| rng.byte()).collect();
        let mut encoded = ReedSolomonEncoder::new(nsym).encode(&data);

        let count = nsym / 2;
        for pos in distinct_positions(&mut rng, count, encoded.len()) {
            encoded[pos] ^= 1 + rng.below(255) as u8;
        }

        let mut working = encoded.clone();
        let decoder = ReedSolomonDecoder::new(nsym);
        assert_eq!(decoder.decode(&mut working), Ok(count));
        assert_eq!(&working[..len], &data[..]);
    }
}

#[test]
fn test_beyond_capacity_never_returns_original() {
    let mut rng = Lcg(4);
    for _ in 0..200 {
        let nsym = 2 + rng.below(30);
        let len = 1 + rng.below(100);
        let data: Vec<u8> = (0..len).map(|_| rng.byte()).collect();
        let mut encoded = ReedSolomonEncoder::new(nsym).encode(&data);

        let count = (nsym / 2 + 1 + rng.below(4)).min(encoded.len());
        for pos in distinct_positions(&mut rng, count, encoded.len()) {
            encoded[pos] ^= 1 + rng.below(255) as u8;
        }

        match ReedSolomonDecoder::new(nsym).correct(&encoded) {
            Ok(decoded) => assert_ne!(decoded, data),
            Err(err) => assert!(matches!(err, DmtxError::UncorrectableError { .. })),
        }
    }
}

#[test]
fn test_bit_flip_mode_contract() {
    let mut rng = Lcg(5);
    let decoder = ReedSolomonDecoder::with_mode(10, CorrectionMode::BitFlipSearch);
    for _ in 0..50 {
        let data: Vec<u8> = (0..20).map(|_| rng.byte()).collect();
        let mut encoded = ReedSolomonEncoder::new(10).encode(&data);
        let pos = rng.below(encoded.len());
        encoded[pos] ^= 1 << rng.below(8);
        assert_eq!(decoder.correct(&encoded), Ok(data));
    }
}

#[test]
fn test_field_identities() {
    for a in 0..=255u8 {
        assert_eq!(Gf256::mul(a, 0), 0);
        assert_eq!(Gf256::div(a, 0), Err(DmtxError::DivisionByZero));
        if a != 0 {
            assert_eq!(Gf256::pow(a, 0), 1);
            assert_eq!(Gf256::mul(a, Gf256::inv(a).unwrap()), 1);
        }
    }
}
