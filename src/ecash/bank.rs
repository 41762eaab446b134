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

use crate::errors::Error;
use crate::keys::pair::KeyPair;
use crate::keys::rsa_key::RSAPublicKey;
use crate::rsa::blind::BlindSignature;
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::schemes::algorithms::RSABlind;

/// The issuing bank: a long-lived keypair behind a signing operation that
/// only ever sees blinded numbers.
pub struct Bank<CS: RsaCiphersuite> {
    keypair: KeyPair<RSABlind<CS>>,
}

impl<CS: RsaCiphersuite> Bank<CS> {
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        Ok(Self {
            keypair: KeyPair::generate(rng)?,
        })
    }

    pub fn from_keypair(keypair: KeyPair<RSABlind<CS>>) -> Self {
        Self { keypair }
    }

    pub fn public_key(&self) -> &RSAPublicKey {
        self.keypair.public_key()
    }

    /// Signs a blinded coin on behalf of the bank. The bank cannot link the
    /// value it signs here to the coin a merchant later deposits.
    pub fn sign_coin(&self, blinded: &Integer) -> BlindSignature {
        BlindSignature::blind_sign(
            self.keypair.private_key(),
            self.keypair.public_key(),
            blinded,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecash::coin::Coin;
    use crate::rsa::ciphersuites::Rsa1024Sha256;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn bank_signature_verifies_after_unblinding() {
        let mut rng = StdRng::seed_from_u64(51);
        let bank = Bank::<Rsa1024Sha256>::new(&mut rng).unwrap();

        let mut coin = Coin::<Rsa1024Sha256>::mint("alice", 20, bank.public_key(), &mut rng).unwrap();
        coin.attach_signature(bank.sign_coin(coin.blinded()));
        coin.unblind().unwrap();

        assert!(coin
            .signature()
            .unwrap()
            .verify::<Rsa1024Sha256>(coin.to_canonical_string().as_bytes(), bank.public_key()));
    }
}
