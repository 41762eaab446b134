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

use serde::{Deserialize, Serialize};

use super::identity::IdentityShares;
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::utils::hash::hash_hex;

/// The coin's committed left/right hash arrays. Merchants re-derive these
/// hashes from revealed fragments, so commitment must be deterministic.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IdentityCommitment {
    pub(crate) left_hashes: Vec<String>,
    pub(crate) right_hashes: Vec<String>,
}

impl IdentityCommitment {
    pub fn commit<CS: RsaCiphersuite>(shares: &IdentityShares) -> Self {
        let left_hashes = shares
            .left
            .iter()
            .map(|fragment| hash_hex::<CS::HashAlg>(fragment))
            .collect();
        let right_hashes = shares
            .right
            .iter()
            .map(|fragment| hash_hex::<CS::HashAlg>(fragment))
            .collect();

        Self {
            left_hashes,
            right_hashes,
        }
    }

    pub fn left_hashes(&self) -> &[String] {
        &self.left_hashes
    }

    pub fn right_hashes(&self) -> &[String] {
        &self.right_hashes
    }

    pub fn len(&self) -> usize {
        self.left_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_hashes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecash::identity::Side;
    use crate::rsa::ciphersuites::Rsa1024Sha256;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn commitment_matches_fragment_hashes() {
        let mut rng = StdRng::seed_from_u64(31);
        let shares = IdentityShares::build("alice", 10, &mut rng).unwrap();
        let commitment = IdentityCommitment::commit::<Rsa1024Sha256>(&shares);

        assert_eq!(commitment.len(), shares.len());
        for i in 0..shares.len() {
            assert_eq!(
                commitment.left_hashes()[i],
                hash_hex::<sha2::Sha256>(shares.fragment(Side::Left, i).unwrap())
            );
            assert_eq!(
                commitment.right_hashes()[i],
                hash_hex::<sha2::Sha256>(shares.fragment(Side::Right, i).unwrap())
            );
        }
    }

    #[test]
    fn commitment_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(32);
        let shares = IdentityShares::build("bob", 10, &mut rng).unwrap();
        let a = IdentityCommitment::commit::<Rsa1024Sha256>(&shares);
        let b = IdentityCommitment::commit::<Rsa1024Sha256>(&shares);
        assert_eq!(a, b);
    }
}
