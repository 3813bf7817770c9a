use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

pub const WALLET_CODE_LEN: usize = 32;

/// New wallet identifier. It acts as a bearer credential, so it comes from the
/// OS random source.
pub fn generate_wallet_code() -> String {
    generate_wallet_code_with(&mut OsRng)
}

pub fn generate_wallet_code_with<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(WALLET_CODE_LEN)
        .map(char::from)
        .collect()
}
