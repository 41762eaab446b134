use rug::{integer::Order, Integer};
use serde::{Deserialize, Serialize};

use super::key::{PrivateKey, PublicKey};

#[derive(Clone, PartialEq, PartialOrd, Eq, Hash, Debug, Ord, Serialize, Deserialize)]
pub struct RSAPublicKey {
    pub(crate) N: Integer,
    pub(crate) e: Integer,
}

impl RSAPublicKey {
    pub fn new(N: Integer, e: Integer) -> Self {
        Self { N, e }
    }

    pub fn modulus(&self) -> &Integer {
        &self.N
    }

    pub fn exponent(&self) -> &Integer {
        &self.e
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RSASecretKey {
    pub(crate) p: Integer,
    pub(crate) q: Integer,
    pub(crate) d: Integer,
}

impl RSASecretKey {
    pub fn new(p: Integer, q: Integer, d: Integer) -> Self {
        Self { p, q, d }
    }
}

impl PublicKey for RSAPublicKey {
    type Output = Vec<u8>;

    fn to_bytes(&self) -> Self::Output {
        let mut bytes = self.N.to_digits::<u8>(Order::MsfBe);
        bytes.extend_from_slice(&self.e.to_digits::<u8>(Order::MsfBe));
        bytes
    }

    fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl PrivateKey for RSASecretKey {
    type Output = Vec<u8>;

    fn to_bytes(&self) -> Self::Output {
        self.d.to_digits::<u8>(Order::MsfBe)
    }

    fn encode(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_encodes_modulus_then_exponent() {
        let pk = RSAPublicKey::new(Integer::from(0xabcdu32), Integer::from(0x11u32));
        assert_eq!(pk.to_bytes(), vec![0xab, 0xcd, 0x11]);
        assert_eq!(pk.encode(), "abcd11");
    }
}
