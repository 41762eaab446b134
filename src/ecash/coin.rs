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

use core::marker::PhantomData;
use rand::{CryptoRng, RngCore};
use rug::Integer;
use serde::{Deserialize, Serialize};

use super::commitment::IdentityCommitment;
use super::identity::{IdentityShares, Side};
use crate::errors::Error;
use crate::keys::rsa_key::RSAPublicKey;
use crate::rsa::blind::{BlindSignature, BlindedMessage};
use crate::rsa::ciphersuites::RsaCiphersuite;
use crate::rsa::signature::Signature;
use crate::utils::random::random_bytes;

/// Tag identifying the issuing bank inside the canonical coin string.
pub const BANK_STR: &str = "ELECTRONIC_PIGGYBANK";

/// Number of left/right identity pairs committed into every coin.
pub const COIN_RIS_LENGTH: usize = 10;

/// A coin as held by its owner. The commitments and the bank signature are
/// public; the identity fragments and the blinding factor never leave the
/// owner except one half per index, on a merchant's challenge.
///
/// Lifecycle: minting covers CREATED and BLINDED, [`Coin::attach_signature`]
/// moves to SIGNED and [`Coin::unblind`] to UNBLINDED. Acceptance does not
/// mutate the coin, which is exactly why a coin can be shown to two merchants.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Coin<CS: RsaCiphersuite> {
    pub(crate) owner: String,
    pub(crate) amount: u64,
    pub(crate) guid: String,
    pub(crate) pk: RSAPublicKey,
    pub(crate) commitment: IdentityCommitment,
    pub(crate) shares: IdentityShares,
    pub(crate) blinded: Integer,
    pub(crate) factor: Integer,
    pub(crate) blind_signature: Option<BlindSignature>,
    pub(crate) signature: Option<Signature>,
    _suite: PhantomData<CS>,
}

impl<CS: RsaCiphersuite> Coin<CS> {
    /// Builds a coin for `owner` worth `amount`, committing fresh identity
    /// shares, and blinds its canonical string under the bank's public key.
    pub fn mint<R: RngCore + CryptoRng>(
        owner: &str,
        amount: u64,
        bank_pk: &RSAPublicKey,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if amount == 0 {
            return Err(Error::InvalidArgument("amount must be positive".into()));
        }

        let shares = IdentityShares::build(owner, COIN_RIS_LENGTH, rng)?;
        let commitment = IdentityCommitment::commit::<CS>(&shares);
        let guid = hex::encode(random_bytes(rng, 16));

        let canonical = canonical_string(amount, &guid, &commitment);
        let blinding = BlindedMessage::blind::<CS, R>(canonical.as_bytes(), bank_pk, rng);

        Ok(Self {
            owner: owner.to_string(),
            amount,
            guid,
            pk: bank_pk.clone(),
            commitment,
            shares,
            blinded: blinding.blinded,
            factor: blinding.factor,
            blind_signature: None,
            signature: None,
            _suite: PhantomData,
        })
    }

    /// The string the bank signs (through the blinding) and merchants verify:
    /// `BANK_STR-amount-guid-leftHashes-rightHashes`. The owner is not part
    /// of it.
    pub fn to_canonical_string(&self) -> String {
        canonical_string(self.amount, &self.guid, &self.commitment)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn public_key(&self) -> &RSAPublicKey {
        &self.pk
    }

    pub fn commitment(&self) -> &IdentityCommitment {
        &self.commitment
    }

    /// The opaque number submitted to the bank for signing.
    pub fn blinded(&self) -> &Integer {
        &self.blinded
    }

    pub fn attach_signature(&mut self, signature: BlindSignature) {
        self.blind_signature = Some(signature);
    }

    /// Removes the blinding factor from the bank's signature, producing a
    /// signature over the plaintext canonical string.
    pub fn unblind(&mut self) -> Result<(), Error> {
        let blind_signature = self
            .blind_signature
            .as_ref()
            .ok_or(Error::MissingSignature)?;
        self.signature = Some(blind_signature.unblind(&self.factor, self.pk.modulus())?);
        Ok(())
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Answers a merchant's challenge for one identity half. `None` when
    /// `index` is past the committed length.
    pub fn fragment(&self, side: Side, index: usize) -> Option<&[u8]> {
        self.shares.fragment(side, index)
    }
}

fn canonical_string(amount: u64, guid: &str, commitment: &IdentityCommitment) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        BANK_STR,
        amount,
        guid,
        commitment.left_hashes.join(","),
        commitment.right_hashes.join(",")
    )
}

/// The public fields recovered from a canonical coin string.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ParsedCoin {
    pub amount: u64,
    pub guid: String,
    pub left_hashes: Vec<String>,
    pub right_hashes: Vec<String>,
}

/// Strict parser for the canonical coin format. The bank tag is checked
/// before anything else.
pub fn parse_coin_string(s: &str) -> Result<ParsedCoin, Error> {
    let fields: Vec<&str> = s.split('-').collect();
    if fields.len() != 5 {
        return Err(Error::DeserializationError(format!(
            "expected 5 coin fields, got {}",
            fields.len()
        )));
    }

    if fields[0] != BANK_STR {
        return Err(Error::InvalidIdentity(fields[0].to_string()));
    }

    let amount: u64 = fields[1]
        .parse()
        .map_err(|_| Error::DeserializationError(format!("invalid amount: {}", fields[1])))?;

    let left_hashes: Vec<String> = fields[3].split(',').map(|h| h.to_string()).collect();
    let right_hashes: Vec<String> = fields[4].split(',').map(|h| h.to_string()).collect();
    if left_hashes.len() != COIN_RIS_LENGTH || right_hashes.len() != COIN_RIS_LENGTH {
        return Err(Error::DeserializationError(format!(
            "expected {} committed hashes per side, got {}/{}",
            COIN_RIS_LENGTH,
            left_hashes.len(),
            right_hashes.len()
        )));
    }

    Ok(ParsedCoin {
        amount,
        guid: fields[2].to_string(),
        left_hashes,
        right_hashes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::pair::KeyPair;
    use crate::rsa::ciphersuites::Rsa1024Sha256;
    use crate::schemes::algorithms::RSABlind;
    use rand::{rngs::StdRng, SeedableRng};

    fn test_coin(seed: u64) -> (Coin<Rsa1024Sha256>, KeyPair<RSABlind<Rsa1024Sha256>>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let keypair = KeyPair::<RSABlind<Rsa1024Sha256>>::generate(&mut rng).unwrap();
        let coin = Coin::mint("alice", 20, keypair.public_key(), &mut rng).unwrap();
        (coin, keypair)
    }

    #[test]
    fn canonical_string_round_trips() {
        let (coin, _) = test_coin(41);
        let parsed = parse_coin_string(&coin.to_canonical_string()).unwrap();

        assert_eq!(parsed.amount, 20);
        assert_eq!(parsed.guid, coin.guid());
        assert_eq!(parsed.left_hashes, coin.commitment().left_hashes());
        assert_eq!(parsed.right_hashes, coin.commitment().right_hashes());
    }

    #[test]
    fn commitments_have_ris_length() {
        let (coin, _) = test_coin(42);
        assert_eq!(coin.commitment().len(), COIN_RIS_LENGTH);
        assert_eq!(coin.commitment().right_hashes().len(), COIN_RIS_LENGTH);
    }

    #[test]
    fn wrong_bank_tag_is_rejected() {
        let (coin, _) = test_coin(43);
        let tampered = coin
            .to_canonical_string()
            .replace(BANK_STR, "SOME_OTHER_BANK");
        let err = parse_coin_string(&tampered).unwrap_err();
        assert_eq!(err, Error::InvalidIdentity("SOME_OTHER_BANK".to_string()));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let err = parse_coin_string("ELECTRONIC_PIGGYBANK-20-deadbeef").unwrap_err();
        assert!(matches!(err, Error::DeserializationError(_)));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut rng = StdRng::seed_from_u64(44);
        let keypair = KeyPair::<RSABlind<Rsa1024Sha256>>::generate(&mut rng).unwrap();
        let err = Coin::<Rsa1024Sha256>::mint("alice", 0, keypair.public_key(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn fragment_past_ris_length_is_none() {
        let (coin, _) = test_coin(47);
        assert!(coin.fragment(Side::Left, COIN_RIS_LENGTH - 1).is_some());
        assert!(coin.fragment(Side::Left, COIN_RIS_LENGTH).is_none());
        assert!(coin.fragment(Side::Right, COIN_RIS_LENGTH).is_none());
    }

    #[test]
    fn unblind_without_signature_fails() {
        let (mut coin, _) = test_coin(45);
        assert_eq!(coin.unblind().unwrap_err(), Error::MissingSignature);
    }

    #[test]
    fn signed_and_unblinded_coin_verifies() {
        let (mut coin, keypair) = test_coin(46);
        let blind_signature = crate::rsa::blind::BlindSignature::blind_sign(
            keypair.private_key(),
            keypair.public_key(),
            coin.blinded(),
        );
        coin.attach_signature(blind_signature);
        coin.unblind().unwrap();

        let signature = coin.signature().unwrap();
        assert!(signature
            .verify::<Rsa1024Sha256>(coin.to_canonical_string().as_bytes(), coin.public_key()));
    }
}
