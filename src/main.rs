use std::time::Instant;

use blindcash::ecash::bank::Bank;
use blindcash::ecash::coin::Coin;
use blindcash::ecash::detect::{determine_cheater, Outcome};
use blindcash::ecash::merchant::accept_coin;
use blindcash::errors::Error;
use blindcash::rsa::ciphersuites::Rsa2048Sha256;

fn main() -> Result<(), Error> {
    let mut rng = rand::thread_rng();

    let keygen_start_time = Instant::now();
    let bank = Bank::<Rsa2048Sha256>::new(&mut rng)?;
    println!("Bank keypair generated in {:.2?}", keygen_start_time.elapsed());

    let mut coin = Coin::<Rsa2048Sha256>::mint("alice", 20, bank.public_key(), &mut rng)?;
    println!("Minted coin {} worth {}", coin.guid(), coin.amount());

    coin.attach_signature(bank.sign_coin(coin.blinded()));
    coin.unblind()?;
    println!("Coin signed blindly and unblinded");

    // the same coin shown to two independent merchants
    let ris1 = accept_coin(&coin, &mut rng)?;
    let ris2 = accept_coin(&coin, &mut rng)?;

    match determine_cheater(coin.guid(), &ris1, &ris2)? {
        Outcome::DoubleSpent(owner) => {
            println!("Double-spender detected! Coin {} was double-spent by {}", coin.guid(), owner)
        }
        Outcome::MerchantCheated => println!("Merchant cheated for coin {}!", coin.guid()),
    }

    // same RIS reported twice: the merchant, not the spender, is cheating
    match determine_cheater(coin.guid(), &ris1, &ris1)? {
        Outcome::DoubleSpent(owner) => {
            println!("Double-spender detected! Coin {} was double-spent by {}", coin.guid(), owner)
        }
        Outcome::MerchantCheated => println!("Merchant cheated for coin {}!", coin.guid()),
    }

    Ok(())
}
