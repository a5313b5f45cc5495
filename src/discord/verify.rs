//! Ed25519 verification of inbound interaction requests
//!
//! Discord signs `timestamp || body` with the application's key and sends the
//! signature hex-encoded in `X-Signature-Ed25519`.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::error::SignatureError;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

#[derive(Debug, Clone)]
pub struct InteractionVerifier {
    key: VerifyingKey,
}

impl InteractionVerifier {
    pub fn new(public_key: &[u8; 32]) -> Result<Self, SignatureError> {
        let key = VerifyingKey::from_bytes(public_key)
            .map_err(|e| SignatureError::Malformed(e.to_string()))?;
        Ok(Self { key })
    }

    pub fn verify(
        &self,
        signature_hex: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let raw = hex::decode(signature_hex.trim())
            .map_err(|e| SignatureError::Malformed(e.to_string()))?;
        let bytes: [u8; 64] = raw
            .try_into()
            .map_err(|_| SignatureError::Malformed("signature must be 64 bytes".to_string()))?;
        let signature = Signature::from_bytes(&bytes);

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| SignatureError::Mismatch)
    }
}
