/// Reed-Solomon coding for Data Matrix ECC200
/// Generator roots are alpha^1 .. alpha^nsym; codeword index 0 is the
/// highest-degree coefficient.
use super::gf256::Gf256;
use crate::debug::debug_enabled;
use crate::error::{DmtxError, Result};

/// How `ReedSolomonDecoder` repairs a message with non-zero syndromes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMode {
    /// Berlekamp-Massey, Chien search and Forney: up to nsym/2 codeword errors
    #[default]
    Algebraic,
    /// Reduced capability: tries every single-bit flip and keeps the first
    /// that clears the syndromes. Only repairs one flipped bit per message.
    BitFlipSearch,
}

/// Build g(x) = (x - alpha^1)(x - alpha^2)...(x - alpha^nsym), highest degree first
pub fn generator_polynomial(num_ecc: usize) -> Vec<u8> {
    let mut poly = vec![1u8];
    for i in 1..=num_ecc {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coeff) in poly.iter().enumerate() {
            next[j] ^= coeff;
            next[j + 1] ^= Gf256::mul(coeff, root);
        }
        poly = next;
    }
    poly
}

/// Systematic Reed-Solomon encoder
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self {
            generator: generator_polynomial(num_ecc_codewords),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len() - 1
    }

    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    /// Remainder of data * x^nsym divided by the generator
    pub fn ecc(&self, data: &[u8]) -> Vec<u8> {
        let num_ecc = self.num_ecc_codewords();
        let mut work = Vec::with_capacity(data.len() + num_ecc);
        work.extend_from_slice(data);
        work.resize(data.len() + num_ecc, 0);

        for i in 0..data.len() {
            let coeff = work[i];
            if coeff == 0 {
                continue;
            }
            // generator is monic, so the leading term cancels
            for (j, &g) in self.generator.iter().enumerate().skip(1) {
                work[i + j] ^= Gf256::mul(g, coeff);
            }
        }

        work.split_off(data.len())
    }

    /// Data codewords followed by their error correction codewords
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut message = data.to_vec();
        message.extend(self.ecc(data));
        message
    }
}

/// Reed-Solomon decoder for Data Matrix codeword streams
pub struct ReedSolomonDecoder {
    num_ecc_codewords: usize,
    mode: CorrectionMode,
}

impl ReedSolomonDecoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        Self::with_mode(num_ecc_codewords, CorrectionMode::Algebraic)
    }

    pub fn with_mode(num_ecc_codewords: usize, mode: CorrectionMode) -> Self {
        Self {
            num_ecc_codewords,
            mode,
        }
    }

    pub fn mode(&self) -> CorrectionMode {
        self.mode
    }

    /// Correct `received` in place. Returns how many codewords were changed.
    ///
    /// On failure `received` is left as it was passed in.
    pub fn decode(&self, received: &mut [u8]) -> Result<usize> {
        if received.len() < self.num_ecc_codewords {
            return Err(DmtxError::uncorrectable(
                "message shorter than its error correction region",
            ));
        }

        let syndrome = self.calculate_syndrome(received);
        if syndrome.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let corrected = match self.mode {
            CorrectionMode::Algebraic => self.correct_algebraic(received, &syndrome)?,
            CorrectionMode::BitFlipSearch => self.correct_bit_flip(received)?,
        };

        if debug_enabled() {
            eprintln!(
                "RS: corrected {} codeword(s) in a {}-codeword message ({:?})",
                corrected,
                received.len(),
                self.mode
            );
        }

        Ok(corrected)
    }

    /// Correct a copy of `received` and return its data prefix
    pub fn correct(&self, received: &[u8]) -> Result<Vec<u8>> {
        let mut message = received.to_vec();
        self.decode(&mut message)?;
        message.truncate(message.len() - self.num_ecc_codewords);
        Ok(message)
    }

    /// S_i = r(alpha^i) for i = 1..=nsym
    pub fn calculate_syndrome(&self, received: &[u8]) -> Vec<u8> {
        (1..=self.num_ecc_codewords)
            .map(|i| {
                let x = Gf256::exp(i);
                received
                    .iter()
                    .fold(0u8, |acc, &coeff| Gf256::mul(acc, x) ^ coeff)
            })
            .collect()
    }

    fn correct_algebraic(&self, received: &mut [u8], syndrome: &[u8]) -> Result<usize> {
        let n = received.len();

        // Find error locator polynomial using Berlekamp-Massey
        let sigma = find_error_locator(syndrome)?;
        let num_errors = sigma.len() - 1;
        if num_errors == 0 {
            return Err(DmtxError::uncorrectable("constant error locator"));
        }
        if num_errors > self.num_ecc_codewords / 2 {
            return Err(DmtxError::uncorrectable("too many errors"));
        }

        // Find error positions (Chien search)
        let positions = find_error_positions(&sigma, n)?;

        // Find error values (Forney algorithm)
        let values = find_error_values(&sigma, syndrome, &positions, n)?;

        for (&pos, &value) in positions.iter().zip(&values) {
            received[pos] ^= value;
        }

        if self.calculate_syndrome(received).iter().any(|&s| s != 0) {
            for (&pos, &value) in positions.iter().zip(&values) {
                received[pos] ^= value;
            }
            return Err(DmtxError::uncorrectable("syndromes non-zero after correction"));
        }

        Ok(positions.len())
    }

    fn correct_bit_flip(&self, received: &mut [u8]) -> Result<usize> {
        for pos in 0..received.len() {
            let original = received[pos];
            for bit in 0..8 {
                received[pos] = original ^ (1 << bit);
                if self.calculate_syndrome(received).iter().all(|&s| s == 0) {
                    return Ok(1);
                }
            }
            received[pos] = original;
        }
        Err(DmtxError::uncorrectable("no single-bit flip clears the syndromes"))
    }
}

/// Evaluate a lowest-degree-first polynomial at `x`
fn eval_ascending(poly: &[u8], x: u8) -> u8 {
    poly.iter()
        .rev()
        .fold(0u8, |acc, &coeff| Gf256::mul(acc, x) ^ coeff)
}

/// X_k^-1 for the codeword at `pos`: alpha^-(n-1-pos)
fn locator_inverse(n: usize, pos: usize) -> u8 {
    Gf256::exp(255 - (n - 1 - pos) % 255)
}

/// Berlekamp-Massey. Returns sigma(x) = prod(1 + X_k x), lowest degree first.
fn find_error_locator(syndrome: &[u8]) -> Result<Vec<u8>> {
    let mut sigma = vec![1u8];
    let mut prev = vec![1u8];
    let mut prev_delta = 1u8;
    let mut l = 0usize;
    let mut m = 1usize;

    for i in 0..syndrome.len() {
        let mut delta = syndrome[i];
        for j in 1..=l {
            if j < sigma.len() && j <= i {
                delta ^= Gf256::mul(sigma[j], syndrome[i - j]);
            }
        }

        if delta == 0 {
            m += 1;
            continue;
        }

        let scale = Gf256::div(delta, prev_delta)?;
        let snapshot = (2 * l <= i).then(|| sigma.clone());

        if sigma.len() < prev.len() + m {
            sigma.resize(prev.len() + m, 0);
        }
        // sigma = sigma - scale * x^m * prev
        for (j, &b) in prev.iter().enumerate() {
            sigma[j + m] ^= Gf256::mul(scale, b);
        }

        match snapshot {
            Some(old) => {
                prev = old;
                prev_delta = delta;
                l = i + 1 - l;
                m = 1;
            }
            None => m += 1,
        }
    }

    while sigma.len() > 1 && sigma.last() == Some(&0) {
        sigma.pop();
    }
    if sigma.len() - 1 != l {
        return Err(DmtxError::uncorrectable("error locator degree mismatch"));
    }
    Ok(sigma)
}

fn find_error_positions(sigma: &[u8], n: usize) -> Result<Vec<usize>> {
    // Positions whose locator aliases (n > 255) show up more than once and
    // fail the count check below.
    let positions: Vec<usize> = (0..n)
        .filter(|&pos| eval_ascending(sigma, locator_inverse(n, pos)) == 0)
        .collect();

    if positions.len() != sigma.len() - 1 {
        return Err(DmtxError::uncorrectable(
            "error locator roots do not match its degree",
        ));
    }
    Ok(positions)
}

fn find_error_values(
    sigma: &[u8],
    syndrome: &[u8],
    positions: &[usize],
    n: usize,
) -> Result<Vec<u8>> {
    // omega = syndrome * sigma mod x^nsym
    let mut omega = vec![0u8; syndrome.len()];
    for (i, slot) in omega.iter_mut().enumerate() {
        for j in 0..=i.min(sigma.len() - 1) {
            *slot ^= Gf256::mul(sigma[j], syndrome[i - j]);
        }
    }

    let mut values = Vec::with_capacity(positions.len());
    for &pos in positions {
        let x_inv = locator_inverse(n, pos);
        let omega_val = eval_ascending(&omega, x_inv);

        // formal derivative keeps the odd terms only
        let mut sigma_prime = 0u8;
        for (i, &coeff) in sigma.iter().enumerate().skip(1).step_by(2) {
            sigma_prime ^= Gf256::mul(coeff, Gf256::pow(x_inv, i - 1));
        }
        if sigma_prime == 0 {
            return Err(DmtxError::uncorrectable("sigma derivative is zero"));
        }

        // first consecutive root is alpha^1, so no X_k factor
        values.push(Gf256::div(omega_val, sigma_prime)?);
    }
    Ok(values)
}
