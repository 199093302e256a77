//! Random token generation from the OS entropy source.

use crate::constants;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Generate a URL-safe token from `TOKEN_BYTES` bytes of OS entropy.
///
/// 16 raw bytes encode to 22 characters without padding.
pub fn generate_token() -> Zeroizing<String> {
    let mut raw = [0u8; constants::TOKEN_BYTES];
    OsRng.fill_bytes(&mut raw);
    let token = Zeroizing::new(encode_token(&raw));
    raw.zeroize();
    token
}

fn encode_token(raw: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}
