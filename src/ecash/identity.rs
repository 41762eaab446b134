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

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::utils::random::random_bytes;

/// Marker prefix of the identity plaintext hidden in every left/right pair.
pub const IDENT_STR: &str = "IDENT";

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Per-index identity halves. At each index the left half is a fresh random
/// mask and the right half is the mask XORed with `"IDENT:<owner>"`, so
/// either half alone is uniformly random while `left XOR right` recovers the
/// marker-prefixed identity.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IdentityShares {
    pub(crate) left: Vec<Vec<u8>>,
    pub(crate) right: Vec<Vec<u8>>,
}

impl IdentityShares {
    /// Builds `ris_length` independent pairs; a fresh mask is drawn per index
    /// so exposing one index reveals nothing about the others.
    pub fn build<R: RngCore + CryptoRng>(
        owner: &str,
        ris_length: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if owner.is_empty() {
            return Err(Error::InvalidArgument(
                "owner identity must not be empty".into(),
            ));
        }

        let plaintext = format!("{IDENT_STR}:{owner}").into_bytes();
        let mut left: Vec<Vec<u8>> = Vec::with_capacity(ris_length);
        let mut right: Vec<Vec<u8>> = Vec::with_capacity(ris_length);

        for _ in 0..ris_length {
            let mask = random_bytes(rng, plaintext.len());
            let masked: Vec<u8> = mask
                .iter()
                .zip(plaintext.iter())
                .map(|(m, p)| m ^ p)
                .collect();
            left.push(mask);
            right.push(masked);
        }

        Ok(Self { left, right })
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The half at `index`, or `None` past the committed length.
    pub fn fragment(&self, side: Side, index: usize) -> Option<&[u8]> {
        match side {
            Side::Left => self.left.get(index).map(Vec::as_slice),
            Side::Right => self.right.get(index).map(Vec::as_slice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn halves_xor_to_marked_identity() {
        let mut rng = StdRng::seed_from_u64(21);
        let shares = IdentityShares::build("alice", 10, &mut rng).unwrap();

        for i in 0..shares.len() {
            let xored: Vec<u8> = shares
                .fragment(Side::Left, i)
                .unwrap()
                .iter()
                .zip(shares.fragment(Side::Right, i).unwrap())
                .map(|(l, r)| l ^ r)
                .collect();
            assert_eq!(xored, b"IDENT:alice");
        }
    }

    #[test]
    fn masks_are_independent_per_index() {
        let mut rng = StdRng::seed_from_u64(22);
        let shares = IdentityShares::build("alice", 10, &mut rng).unwrap();

        // 11-byte masks colliding across indexes would be a broken rng
        for i in 1..shares.len() {
            assert_ne!(shares.fragment(Side::Left, 0), shares.fragment(Side::Left, i));
        }
    }

    #[test]
    fn out_of_range_index_yields_none() {
        let mut rng = StdRng::seed_from_u64(24);
        let shares = IdentityShares::build("alice", 10, &mut rng).unwrap();
        assert!(shares.fragment(Side::Left, 9).is_some());
        assert!(shares.fragment(Side::Left, 10).is_none());
        assert!(shares.fragment(Side::Right, 10).is_none());
    }

    #[test]
    fn empty_owner_is_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        let err = IdentityShares::build("", 10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
