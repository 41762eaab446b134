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

use crate::schemes::algorithms::Ciphersuite;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;

pub trait RsaCiphersuite: Eq + 'static + Ciphersuite + Serialize + DeserializeOwned {
    const MODULUS_BITS: u32; // NOTE: length of N (i.e. the RSA modulus p*q); p and q are MODULUS_BITS/2 each
    const PUBLIC_EXP: u32; // NOTE: fixed public exponent e, F4 = 65537
    const QSEC: u32; // NOTE: Miller-Rabin repetitions for primality testing of p and q. (Check NIST-FIPS 186-4, Table C.1)
    const KEYGEN_RETRIES: u32; // NOTE: bound on (p, q) draws before keygen gives up
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rsa1024Sha256 {}

impl RsaCiphersuite for Rsa1024Sha256 {
    const MODULUS_BITS: u32 = 1024;
    const PUBLIC_EXP: u32 = 65537;
    const QSEC: u32 = 19; // NOTE: Miller-Rabin repetitions for primality testing of p and q. (Check NIST-FIPS 186-4, Table C.1)
    const KEYGEN_RETRIES: u32 = 128;
}

impl Ciphersuite for Rsa1024Sha256 {
    type HashAlg = Sha256;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rsa2048Sha256 {}

impl RsaCiphersuite for Rsa2048Sha256 {
    const MODULUS_BITS: u32 = 2048;
    const PUBLIC_EXP: u32 = 65537;
    const QSEC: u32 = 27; // NOTE: Miller-Rabin repetitions for primality testing of p and q. (Check NIST-FIPS 186-4, Table C.1)
    const KEYGEN_RETRIES: u32 = 128;
}

impl Ciphersuite for Rsa2048Sha256 {
    type HashAlg = Sha256;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rsa2048Sha3 {}

impl RsaCiphersuite for Rsa2048Sha3 {
    const MODULUS_BITS: u32 = 2048;
    const PUBLIC_EXP: u32 = 65537;
    const QSEC: u32 = 27; // NOTE: Miller-Rabin repetitions for primality testing of p and q. (Check NIST-FIPS 186-4, Table C.1)
    const KEYGEN_RETRIES: u32 = 128;
}

impl Ciphersuite for Rsa2048Sha3 {
    type HashAlg = Sha3_256;
}
