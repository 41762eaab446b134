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

use serde::{Deserialize, Serialize};

use super::identity::IDENT_STR;
use super::merchant::RevealedIdentity;
use crate::errors::Error;

/// The bank's conclusion over two acceptance records for the same coin.
/// Both are domain results the caller must act on, not errors.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The coin holder spent the coin twice; the reconstructed identity is
    /// attached.
    DoubleSpent(String),
    /// No index with differing sides decoded to an identity: one merchant
    /// replayed a RIS instead of challenging independently.
    MerchantCheated,
}

/// Compares two revealed identity strings for the coin `guid`. At every index
/// where the merchants challenged different sides, the XOR of the two
/// fragments is checked for the `IDENT_STR:` marker; the first hit exposes
/// the double-spender. One such index is cryptographically sufficient.
pub fn determine_cheater(
    guid: &str,
    ris1: &RevealedIdentity,
    ris2: &RevealedIdentity,
) -> Result<Outcome, Error> {
    if ris1.guid() != guid || ris2.guid() != guid {
        return Err(Error::MalformedRis(format!(
            "revealed identities do not both refer to coin {guid}"
        )));
    }
    if ris1.len() != ris2.len() {
        return Err(Error::MalformedRis(format!(
            "length mismatch: {} vs {}",
            ris1.len(),
            ris2.len()
        )));
    }
    // deserialized records can carry fewer sides than shares
    if ris1.sides().len() != ris1.len() || ris2.sides().len() != ris2.len() {
        return Err(Error::MalformedRis(
            "side sequence length does not match share count".into(),
        ));
    }

    for i in 0..ris1.len() {
        if ris1.sides()[i] == ris2.sides()[i] {
            continue;
        }

        let a = hex::decode(&ris1.shares()[i])
            .map_err(|e| Error::MalformedRis(format!("bad hex at index {i}: {e}")))?;
        let b = hex::decode(&ris2.shares()[i])
            .map_err(|e| Error::MalformedRis(format!("bad hex at index {i}: {e}")))?;
        if a.len() != b.len() {
            return Err(Error::MalformedRis(format!(
                "fragment length mismatch at index {i}"
            )));
        }

        let xored: Vec<u8> = a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect();
        if let Ok(decoded) = String::from_utf8(xored) {
            if let Some(rest) = decoded.strip_prefix(IDENT_STR) {
                if let Some(owner) = rest.strip_prefix(':') {
                    return Ok(Outcome::DoubleSpent(owner.to_string()));
                }
            }
        }
    }

    Ok(Outcome::MerchantCheated)
}
