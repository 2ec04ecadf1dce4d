use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Signature, Verifier, VerifyingKey};

/// Checks a Discord interaction signature.
///
/// The signed message is `timestamp` immediately followed by the raw body bytes.
/// Anything that cannot be decoded counts as a failed verification.
pub fn verify(signature_hex: &str, timestamp: &str, body: &[u8], public_key_hex: &str) -> bool {
    let Ok(signature_bytes) = hex::decode(signature_hex) else {
        return false;
    };

    let Some(verifying_key) = decode_public_key(public_key_hex) else {
        return false;
    };

    let Ok(signature_bytes) = <[u8; SIGNATURE_LENGTH]>::try_from(signature_bytes.as_slice()) else {
        return false;
    };
    let signature = Signature::from_bytes(&signature_bytes);

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    verifying_key.verify(&message, &signature).is_ok()
}

pub fn is_valid_public_key(public_key_hex: &str) -> bool {
    decode_public_key(public_key_hex).is_some()
}

fn decode_public_key(public_key_hex: &str) -> Option<VerifyingKey> {
    let public_key_bytes = hex::decode(public_key_hex).ok()?;
    let public_key_bytes = <[u8; PUBLIC_KEY_LENGTH]>::try_from(public_key_bytes.as_slice()).ok()?;
    VerifyingKey::from_bytes(&public_key_bytes).ok()
}
