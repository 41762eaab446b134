use core::fmt::Debug;
use serde::{de::DeserializeOwned, Serialize};

pub trait PublicKey:
    Clone + PartialEq + Eq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Output;
    fn to_bytes(&self) -> Self::Output;
    fn encode(&self) -> String;
}

pub trait PrivateKey:
    Clone + PartialEq + Eq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Output;
    fn to_bytes(&self) -> Self::Output;
    fn encode(&self) -> String;
}
