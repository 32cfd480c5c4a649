//! Alias validation and generation.
//!
//! The same rules apply to custom aliases at creation time and to new
//! aliases at rename time.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Longest alias accepted, in characters.
pub const ALIAS_MAX_LENGTH: usize = 50;

/// Length of aliases produced by [`generate_alias`].
pub const GENERATED_ALIAS_LENGTH: usize = 10;

static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

const ALIAS_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns whether `alias` may be used as a short alias.
///
/// # Rules
///
/// - Length: 1-50 characters
/// - Allowed characters: ASCII letters, digits, `_` and `-`
///
/// # Examples
///
/// ```
/// use short::utils::alias::is_valid;
///
/// assert!(is_valid("220uFicCJj"));
/// assert!(is_valid("my-link_2024"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("has space"));
/// ```
pub fn is_valid(alias: &str) -> bool {
    !alias.is_empty() && alias.len() <= ALIAS_MAX_LENGTH && ALIAS_REGEX.is_match(alias)
}

/// Generates a random alphanumeric alias.
///
/// Generated aliases always satisfy [`is_valid`].
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_ALIAS_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ALIAS_CHARSET.len());
            ALIAS_CHARSET[idx] as char
        })
        .collect()
}
