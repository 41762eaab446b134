pub mod key;
pub mod pair;
pub mod rsa_key;
