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
use rug::Integer;
use serde::{Deserialize, Serialize};

use super::signature::Signature;
use crate::errors::Error;
use crate::keys::rsa_key::{RSAPublicKey, RSASecretKey};
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::utils::hash::hash_to_integer;
use crate::utils::random::random_coprime;

/// The blinded message representative together with the blinding factor.
/// Only `blinded` travels to the signer; `factor` stays with the requester.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BlindedMessage {
    pub(crate) blinded: Integer,
    pub(crate) factor: Integer,
}

impl BlindedMessage {
    /// Blinds the full-domain hash of `msg`: `blinded = H(msg) * r^e mod N`
    /// for a fresh `r` coprime to `N`.
    pub fn blind<CS: RsaCiphersuite, R: RngCore + CryptoRng>(
        msg: &[u8],
        pk: &RSAPublicKey,
        rng: &mut R,
    ) -> Self {
        let m = hash_to_integer::<CS::HashAlg>(msg) % pk.modulus();
        let r = random_coprime(rng, pk.modulus());

        let r_e = Integer::from(r.pow_mod_ref(pk.exponent(), pk.modulus()).unwrap());
        let blinded = (m * r_e) % pk.modulus();

        Self { blinded, factor: r }
    }

    pub fn blinded(&self) -> &Integer {
        &self.blinded
    }

    pub fn factor(&self) -> &Integer {
        &self.factor
    }
}

/// The signer's signature over a blinded value. The signer never sees the
/// plaintext message representative.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BlindSignature {
    pub(crate) value: Integer,
}

impl BlindSignature {
    /// `s' = blinded^d mod N`. The input is an opaque number to the signer.
    pub fn blind_sign(sk: &RSASecretKey, pk: &RSAPublicKey, blinded: &Integer) -> Self {
        let value = Integer::from(blinded.pow_mod_ref(&sk.d, pk.modulus()).unwrap());
        Self { value }
    }

    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Removes the blinding factor: `s = s' * r^-1 mod N`, yielding a
    /// signature valid over the plaintext message.
    pub fn unblind(&self, factor: &Integer, N: &Integer) -> Result<Signature, Error> {
        let r_inv = factor
            .invert_ref(N)
            .ok_or_else(|| Error::InvalidArgument("blinding factor is not invertible".into()))?;
        let value = (self.value.clone() * Integer::from(r_inv)) % N;
        Ok(Signature { value })
    }
}
