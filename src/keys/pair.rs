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

use crate::errors::Error;
use crate::keys::rsa_key::{RSAPublicKey, RSASecretKey};
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::schemes::algorithms::{RSABlind, Scheme};
use crate::utils::random::random_prime;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KeyPair<S: Scheme> {
    pub(crate) public: S::PubKey,
    pub(crate) private: S::PrivKey,
}

impl<S> KeyPair<S>
where
    S: Scheme,
{
    pub fn public_key(&self) -> &S::PubKey {
        &self.public
    }

    pub fn private_key(&self) -> &S::PrivKey {
        &self.private
    }

    /// Returns the couple `(sk, pk)`.
    pub fn into_parts(self) -> (S::PrivKey, S::PubKey) {
        (self.private, self.public)
    }

    pub fn write_keypair_to_file(&self, file: Option<String>) {
        let file = file.unwrap_or_else(|| String::from("keypair.json"));
        let current_path = std::env::current_dir().unwrap();
        let file_to_write = current_path.join(file);

        if std::fs::write(
            &file_to_write,
            serde_json::to_string_pretty(&self).expect("failed to serialize key pair"),
        )
        .is_err()
        {
            panic!("failed to write key pair to file: {file_to_write:?}");
        }
    }
}

impl<CS: RsaCiphersuite> KeyPair<RSABlind<CS>> {
    /// Generates a fresh RSA keypair for the suite's modulus length.
    ///
    /// `p` and `q` are drawn until the modulus has exactly
    /// `CS::MODULUS_BITS` bits and the fixed public exponent is invertible
    /// modulo `phi(N)`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, Error> {
        let half = CS::MODULUS_BITS / 2;
        let e = Integer::from(CS::PUBLIC_EXP);

        for _ in 0..CS::KEYGEN_RETRIES {
            let p = random_prime(rng, half, CS::QSEC);
            let q = random_prime(rng, half, CS::QSEC);
            if p == q {
                continue;
            }

            let N = Integer::from(&p * &q);
            if N.significant_bits() != CS::MODULUS_BITS {
                continue;
            }

            let phi_N = (p.clone() - Integer::from(1)) * (q.clone() - Integer::from(1));
            match e.invert_ref(&phi_N) {
                Some(inv) => {
                    let d = Integer::from(inv);
                    return Ok(Self {
                        public: RSAPublicKey::new(N, e),
                        private: RSASecretKey::new(p, q, d),
                    });
                }
                // gcd(e, phi) != 1, retry with fresh primes
                None => continue,
            }
        }

        Err(Error::KeyGenError(format!(
            "no valid modulus of {} bits after {} attempts",
            CS::MODULUS_BITS,
            CS::KEYGEN_RETRIES
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::ciphersuites::Rsa1024Sha256;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn keypair_rsa1024_sha256() {
        let mut rng = StdRng::seed_from_u64(7);
        let keypair = KeyPair::<RSABlind<Rsa1024Sha256>>::generate(&mut rng).unwrap();

        let pk = keypair.public_key();
        assert_eq!(pk.modulus().significant_bits(), 1024);
        assert_eq!(*pk.exponent(), Integer::from(65537u32));

        // e * d == 1 mod phi(N)
        let sk = keypair.private_key();
        let phi = (sk.p.clone() - Integer::from(1)) * (sk.q.clone() - Integer::from(1));
        let ed = (Integer::from(pk.exponent() * &sk.d)) % &phi;
        assert_eq!(ed, Integer::from(1));
    }
}
