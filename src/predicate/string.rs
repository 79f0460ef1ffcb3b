//! String predicates
//!
//! Lengths are counted in UTF-16 code units, the unit browsers use for a text
//! input's length. Characters outside the Basic Multilingual Plane, such as most
//! emoji, count as two. No predicate here trims its input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::combinators::Predicate;

// WHATWG "valid e-mail address" production. A top-level domain is not required.
const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

// Pinned by `test_email_pattern_compiles`.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

impl Predicate<String> for NotEmpty {
    #[inline]
    fn check(&self, value: &String) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// A single space is a present value.
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(not_empty().check(" "));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks string length (in UTF-16 code units) is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    #[inline]
    fn holds(&self, value: &str) -> bool {
        let len = value.encode_utf16().count();
        len >= self.min && len <= self.max
    }
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.holds(value)
    }
}

impl Predicate<String> for LenBetween {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.holds(value)
    }
}

/// Create a predicate that checks if string length is at least min.
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(!len_min(2).check("J"));
/// assert!(len_min(2).check("Jo"));
/// // One emoji is two UTF-16 code units
/// assert!(len_min(2).check("\u{1F600}"));
/// ```
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Predicate that checks a string has the shape of an email address.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IsEmail;

impl Predicate<str> for IsEmail {
    #[inline]
    fn check(&self, value: &str) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

impl Predicate<String> for IsEmail {
    #[inline]
    fn check(&self, value: &String) -> bool {
        EMAIL_REGEX.is_match(value)
    }
}

/// Create a predicate that checks if a string is an email address.
///
/// ```rust
/// use contact_form::predicate::*;
///
/// assert!(is_email().check("a@b.com"));
/// assert!(!is_email().check("not-an-email"));
/// ```
pub fn is_email() -> IsEmail {
    IsEmail
}
