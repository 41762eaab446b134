use core::marker::PhantomData;
use digest::Digest;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::keys::{
    key::{PrivateKey, PublicKey},
    rsa_key::{RSAPublicKey, RSASecretKey},
};
use crate::rsa::ciphersuites::{Rsa1024Sha256, Rsa2048Sha256, Rsa2048Sha3, RsaCiphersuite};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RSABlind<CS: RsaCiphersuite>(PhantomData<CS>);

pub type RSA_BLIND_1024_SHA256 = RSABlind<Rsa1024Sha256>;
pub type RSA_BLIND_2048_SHA256 = RSABlind<Rsa2048Sha256>;
pub type RSA_BLIND_2048_SHA3 = RSABlind<Rsa2048Sha3>;

pub trait Ciphersuite: Eq + 'static {
    type HashAlg: Digest;
}

pub trait Scheme: Eq + 'static + Sized + Serialize + DeserializeOwned {
    type Ciphersuite: Ciphersuite;
    type PrivKey: PrivateKey;
    type PubKey: PublicKey;
}

impl<CS: RsaCiphersuite> Scheme for RSABlind<CS> {
    type Ciphersuite = CS;
    type PrivKey = RSASecretKey;
    type PubKey = RSAPublicKey;
}
