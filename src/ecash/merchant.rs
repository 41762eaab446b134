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

use super::coin::{parse_coin_string, Coin};
use super::identity::Side;
use crate::errors::Error;
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::utils::hash::hash_hex;
use crate::utils::random::random_bit;

/// One merchant's acceptance record for one coin: the hex-encoded fragments
/// the coin holder revealed, and which side was challenged at each index.
/// The side sequence is explicit because the detector compares sides, not
/// fragment bytes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RevealedIdentity {
    pub(crate) guid: String,
    pub(crate) shares: Vec<String>,
    pub(crate) sides: Vec<Side>,
}

impl RevealedIdentity {
    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn shares(&self) -> &[String] {
        &self.shares
    }

    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}

/// Merchant-side acceptance of a coin.
///
/// The bank signature is verified before any hash work. Then, for every
/// index, an unbiased coin flip picks the left or right half, the revealed
/// fragment is re-hashed and compared against the committed hash. Any
/// mismatch aborts the whole acceptance; no partial RIS is returned.
pub fn accept_coin<CS: RsaCiphersuite, R: RngCore + CryptoRng>(
    coin: &Coin<CS>,
    rng: &mut R,
) -> Result<RevealedIdentity, Error> {
    let signature = coin.signature().ok_or(Error::MissingSignature)?;

    let canonical = coin.to_canonical_string();
    if !signature.verify::<CS>(canonical.as_bytes(), coin.public_key()) {
        return Err(Error::SignatureInvalid);
    }

    let parsed = parse_coin_string(&canonical)?;

    let mut shares: Vec<String> = Vec::with_capacity(parsed.left_hashes.len());
    let mut sides: Vec<Side> = Vec::with_capacity(parsed.left_hashes.len());

    for i in 0..parsed.left_hashes.len() {
        let side = if random_bit(rng) { Side::Left } else { Side::Right };
        let fragment = coin.fragment(side, i).ok_or_else(|| {
            Error::InvalidArgument(format!("coin holds no identity fragment at index {i}"))
        })?;
        let digest = hash_hex::<CS::HashAlg>(fragment);

        let committed = match side {
            Side::Left => &parsed.left_hashes[i],
            Side::Right => &parsed.right_hashes[i],
        };
        if digest != *committed {
            return Err(Error::HashMismatch(i));
        }

        shares.push(hex::encode(fragment));
        sides.push(side);
    }

    Ok(RevealedIdentity {
        guid: parsed.guid,
        shares,
        sides,
    })
}
