//! Case- and accent-insensitive text comparison.
//!
//! Every brand/keyword match in the engine goes through [`normalize`]; callers
//! never compare raw strings. Menu data mixes accents freely ("Jäger",
//! "JAGER", "jugo de piña", "PINA"), so comparisons fold both case and
//! diacritics.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for comparison: NFD decomposition, drop combining marks,
/// uppercase.
///
/// Total function — the empty string maps to the empty string, and no input
/// can fail.
///
/// # Example
///
/// ```
/// use comanda_engine::text::normalize;
///
/// assert_eq!(normalize("Jägermeister"), "JAGERMEISTER");
/// assert_eq!(normalize("jugo de piña"), "JUGO DE PINA");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}

/// Whether `haystack` contains `needle` after normalizing both sides.
#[must_use]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
