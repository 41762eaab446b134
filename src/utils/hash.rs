// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use digest::Digest;
use rug::{integer::Order, Integer};

/// Hex-encoded digest of `data`, as committed into a coin and recomputed by
/// merchants on every challenge.
pub fn hash_hex<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// Interprets the digest of `data` as a big-endian integer, the message
/// representative signed under RSA (full-domain-hash style).
pub fn hash_to_integer<D: Digest>(data: &[u8]) -> Integer {
    Integer::from_digits(D::digest(data).as_slice(), Order::MsfBe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;

    #[test]
    fn hash_hex_is_deterministic() {
        let a = hash_hex::<Sha256>(b"coin");
        let b = hash_hex::<Sha256>(b"coin");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, hash_hex::<Sha256>(b"coin2"));
    }

    #[test]
    fn hash_to_integer_matches_digest_bytes() {
        let i = hash_to_integer::<Sha256>(b"coin");
        assert!(i.significant_bits() <= 256);
        let digest = Sha256::digest(b"coin");
        assert_eq!(i, Integer::from_digits(&digest[..], Order::MsfBe));
    }
}
