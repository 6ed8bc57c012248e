//! Webhook signature verification.
//!
//! The platform signs every callback delivery with a base64-encoded
//! HMAC-SHA256 of the raw body bytes, keyed by the channel secret.

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Request header carrying the signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Checks `signature` against the digest of `body` under `secret`.
/// The comparison runs inside `verify_slice`, which is constant-time.
pub fn verify_signature(secret: &str, signature: &str, body: &[u8]) -> bool {
    let Ok(provided) = B64.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&provided).is_ok()
}
