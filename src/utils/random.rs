use rand::{CryptoRng, RngCore};
use rug::{
    integer::{IsPrime, Order},
    Integer,
};

pub fn random_bytes<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

pub fn random_bit<R: RngCore + CryptoRng>(rng: &mut R) -> bool {
    rng.next_u32() & 1 == 1
}

pub fn random_bits<R: RngCore + CryptoRng>(rng: &mut R, n: u32) -> Integer {
    let len = ((n + 7) / 8) as usize;
    let buf = random_bytes(rng, len);
    let mut r = Integer::from_digits(&buf, Order::MsfBe);
    r.keep_bits_mut(n);
    r
}

/// Draws a probable prime of exactly `n` bits. `reps` is the number of
/// Miller-Rabin repetitions handed to GMP (check NIST-FIPS 186-4, Table C.1).
pub fn random_prime<R: RngCore + CryptoRng>(rng: &mut R, n: u32, reps: u32) -> Integer {
    loop {
        let mut candidate = random_bits(rng, n);
        // force the top bit (exact length) and the low bit (odd)
        candidate.set_bit(n - 1, true);
        candidate.set_bit(0, true);
        if candidate.is_probably_prime(reps) != IsPrime::No {
            return candidate;
        }
    }
}

/// Draws `r` with `1 < r < modulus` and `gcd(r, modulus) == 1`, suitable as a
/// blinding factor.
pub fn random_coprime<R: RngCore + CryptoRng>(rng: &mut R, modulus: &Integer) -> Integer {
    loop {
        let r = random_bits(rng, modulus.significant_bits()) % modulus;
        if r > 1 && Integer::from(r.gcd_ref(modulus)) == 1 {
            return r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn random_bits_respects_length() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..16 {
            let r = random_bits(&mut rng, 128);
            assert!(r.significant_bits() <= 128);
        }
    }

    #[test]
    fn random_prime_is_prime_with_exact_length() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = random_prime(&mut rng, 256, 19);
        assert_eq!(p.significant_bits(), 256);
        assert_ne!(p.is_probably_prime(30), IsPrime::No);
        assert!(p.is_odd());
    }

    #[test]
    fn random_coprime_is_invertible() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = random_prime(&mut rng, 128, 19);
        let q = random_prime(&mut rng, 128, 19);
        let n = p * q;
        let r = random_coprime(&mut rng, &n);
        assert!(r < n);
        assert!(r.invert_ref(&n).is_some());
    }
}
