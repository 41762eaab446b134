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

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::keys::rsa_key::RSAPublicKey;
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::utils::hash::hash_to_integer;

/// An unblinded RSA signature over a plaintext message, verifiable by anyone
/// holding the signer's `(N, e)`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Signature {
    pub(crate) value: Integer,
}

impl Signature {
    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Checks `value^e == H(msg) mod N`.
    pub fn verify<CS: RsaCiphersuite>(&self, msg: &[u8], pk: &RSAPublicKey) -> bool {
        let m = hash_to_integer::<CS::HashAlg>(msg) % pk.modulus();

        let lhs = Integer::from(
            self.value
                .pow_mod_ref(pk.exponent(), pk.modulus())
                .unwrap(),
        );

        lhs == m
    }
}
