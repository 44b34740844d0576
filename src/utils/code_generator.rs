//! Short code generation utilities.
//!
//! Provides cryptographically secure random code candidates and a shape
//! check for incoming codes.

use std::sync::LazyLock;

use regex::Regex;

/// Length of a short code in characters.
pub const CODE_LENGTH: usize = 7;

/// Random bytes drawn per candidate. Four bytes hex-encode to eight
/// characters, one more than a code keeps.
const CODE_RANDOM_BYTES: usize = 4;

/// Shape of every code the generator can emit.
static CODE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{7}$").unwrap());

/// Source of short code candidates.
///
/// The allocator draws candidates one at a time and offers each to the
/// store, so candidate production is independent of uniqueness: a generator
/// may repeat itself and the allocation loop still behaves correctly.
/// Injecting the generator lets tests force collisions deterministically.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces the next code candidate.
    fn next_candidate(&self) -> String;
}

/// Default generator backed by the operating system entropy source.
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    /// Draws random bytes, hex-encodes them, and keeps the first
    /// [`CODE_LENGTH`] characters.
    ///
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn next_candidate(&self) -> String {
        let mut buffer = [0u8; CODE_RANDOM_BYTES];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let mut code = hex::encode(buffer);
        code.truncate(CODE_LENGTH);
        code
    }
}

/// Returns true if `code` could have been produced by the generator.
///
/// Anything else can be rejected without consulting the store.
pub fn is_well_formed_code(code: &str) -> bool {
    CODE_SHAPE.is_match(code)
}
