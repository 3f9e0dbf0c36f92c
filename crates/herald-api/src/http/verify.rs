//! Ed25519 request signature verification.
//!
//! Discord signs every interaction POST with the application's key pair.
//! The signed message is the `X-Signature-Timestamp` header concatenated
//! with the raw request body; requests that fail verification must be
//! rejected with 401 or Discord disables the endpoint.

use anyhow::Context;
use ed25519_dalek::{Signature, VerifyingKey};

/// Verifies interaction request signatures against the application's
/// public key.
#[derive(Clone)]
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from the hex-encoded public key shown in the
    /// Discord developer portal.
    pub fn from_hex(public_key: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(public_key).context("public key is not valid hex")?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| anyhow::anyhow!("public key must be 32 bytes"))?;
        let key = VerifyingKey::from_bytes(&bytes).context("public key is not a valid point")?;
        Ok(Self { key })
    }

    /// Check a request signature. Any malformed input counts as invalid.
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        let Ok(sig_bytes) = hex::decode(signature_hex) else {
            return false;
        };
        let Ok(signature) = Signature::from_slice(&sig_bytes) else {
            return false;
        };

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key.verify_strict(&message, &signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::rngs::OsRng;

    fn keypair() -> (SigningKey, SignatureVerifier) {
        let signing = SigningKey::generate(&mut OsRng);
        let verifier = SignatureVerifier::from_hex(&hex::encode(signing.verifying_key().as_bytes()))
            .unwrap();
        (signing, verifier)
    }

    #[test]
    fn test_valid_signature_passes() {
        let (signing, verifier) = keypair();
        let timestamp = "1756400000";
        let body = br#"{"type":1}"#;

        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        let signature = hex::encode(signing.sign(&message).to_bytes());

        assert!(verifier.verify(timestamp, body, &signature));
    }

    #[test]
    fn test_tampered_body_fails() {
        let (signing, verifier) = keypair();
        let timestamp = "1756400000";

        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(br#"{"type":1}"#);
        let signature = hex::encode(signing.sign(&message).to_bytes());

        assert!(!verifier.verify(timestamp, br#"{"type":2}"#, &signature));
        assert!(!verifier.verify("1756400001", br#"{"type":1}"#, &signature));
    }

    #[test]
    fn test_malformed_signature_fails_closed() {
        let (_, verifier) = keypair();
        assert!(!verifier.verify("ts", b"body", "zz-not-hex"));
        assert!(!verifier.verify("ts", b"body", "abcd"));
    }

    #[test]
    fn test_bad_public_key_is_rejected() {
        assert!(SignatureVerifier::from_hex("not hex").is_err());
        assert!(SignatureVerifier::from_hex("abcd").is_err());
    }
}
