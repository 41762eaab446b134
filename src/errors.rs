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

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Error during keypair generation")]
    KeyGenError(String),
    #[error("Invalid bank identity tag: {0}")]
    InvalidIdentity(String),
    #[error("Coin signature is invalid")]
    SignatureInvalid,
    #[error("Coin has not been signed by the bank")]
    MissingSignature,
    #[error("Hash mismatch for revealed identity at index {0}")]
    HashMismatch(usize),
    #[error("Malformed revealed identity string: {0}")]
    MalformedRis(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Error during deserialization: {0}")]
    DeserializationError(String),
}
