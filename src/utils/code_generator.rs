//! Short code generation.
//!
//! Codes are 8 characters of URL-safe base64 (`[A-Za-z0-9_-]`), encoded from
//! 6 random bytes. Every character carries exactly 6 bits of entropy, so the
//! alphabet is used without bias and the code space is 64^8 ≈ 2.8 × 10^14.
//!
//! With `n` stored records the chance that a fresh draw collides is
//! `n / 64^8`; even at ten million records that is below 4 × 10^-8 per draw.
//! Collisions are still rechecked by the registry before a code is accepted.

use std::collections::VecDeque;
use std::sync::Mutex;

use base64::Engine as _;

/// Number of random bytes per code. 6 bytes encode to exactly 8 characters.
const CODE_LENGTH_BYTES: usize = 6;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Source of candidate short codes.
///
/// The registry draws from this until it finds a code that is not taken.
/// Tests substitute a scripted generator to force collisions.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Cryptographically secure random code generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Replays a fixed sequence of codes, then falls back to random ones.
///
/// Lets callers pin the codes a registry hands out, including repeating a
/// code to force a collision.
#[derive(Debug, Default)]
pub struct SequenceCodeGenerator {
    queue: Mutex<VecDeque<String>>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            queue: Mutex::new(codes.into_iter().collect()),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let next = self
            .queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();

        next.unwrap_or_else(generate_code)
    }
}

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_sequence_generator_replays_then_falls_back() {
        let generator =
            SequenceCodeGenerator::new(["first000".to_string(), "first000".to_string()]);

        assert_eq!(generator.generate(), "first000");
        assert_eq!(generator.generate(), "first000");

        let fallback = generator.generate();
        assert_eq!(fallback.len(), CODE_LENGTH);
    }

    #[test]
    fn test_random_generator_uses_generate_code_shape() {
        let code = RandomCodeGenerator.generate();
        assert_eq!(code.len(), CODE_LENGTH);
    }
}
