//! ZAID / SZAX identifier parsing and NTY (nuclide-type) classification.
//!
//! Grounded on `acefile.cpp::isZAIDX`/`isSZAX`/`getClassRegexStr` from the original
//! source: a ZAID is `ZA.IIC`, a SZAX is `SSSZZZAAA.IICC`, and the class suffix after
//! the numeric library id selects one of seven NTY kinds.

use crate::error::{AceError, Result};

/// Nuclide-type tag encoded in an identifier's class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nty {
    ContinuousNeutron,
    DiscreteNeutron,
    MultigroupNeutron,
    Dosimetry,
    Thermal,
    Photoatomic,
    Photonuclear,
}

impl Nty {
    /// The two class-suffix spellings recognized for this NTY, short form first.
    fn class_suffixes(self) -> (&'static str, &'static str) {
        match self {
            Nty::ContinuousNeutron => ("c", "nc"),
            Nty::DiscreteNeutron => ("d", "nd"),
            Nty::MultigroupNeutron => ("m", "nm"),
            Nty::Dosimetry => ("y", "ny"),
            Nty::Thermal => ("t", "nt"),
            Nty::Photoatomic => ("p", "pp"),
            Nty::Photonuclear => ("u", "pu"),
        }
    }

    /// Inverse of [`Nty::class_suffixes`]: classify a bare class string.
    fn from_class(class: &str) -> Option<Nty> {
        for nty in [
            Nty::ContinuousNeutron,
            Nty::DiscreteNeutron,
            Nty::MultigroupNeutron,
            Nty::Dosimetry,
            Nty::Thermal,
            Nty::Photoatomic,
            Nty::Photonuclear,
        ] {
            let (short, long) = nty.class_suffixes();
            if class == short || class == long {
                return Some(nty);
            }
        }
        None
    }
}

/// `true` iff `s` is a ZAID: exactly one `.`, pre-dot part 1-7 digits, last
/// character of the whole string is not a digit. Matches `acefile.cpp::isZAIDX`
/// exactly (condition 1/2/3 there); deliberately does not further constrain the
/// post-dot library-id/class split, which is left to [`class_of`]/[`Nty::from_class`]
/// at the `nty_of` stage. Note this overlaps with [`is_szax`] on some inputs (the
/// original's own `ZAID_PATTERN` comment calls this out) — callers needing a single
/// classification for such strings should prefer [`is_zaidx`] (matching the
/// original's `seek()`, which tries the ZAID field match first).
pub fn is_zaidx(s: &str) -> bool {
    let Some((pre, _post)) = split_one_dot(s) else {
        return false;
    };
    if pre.is_empty() || pre.len() > 7 || !pre.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    !matches!(s.bytes().last(), Some(b) if b.is_ascii_digit())
}

/// `true` iff `s` is a SZAX: exactly one `.`, pre-dot part >= 4 digits, the suffix
/// after the dot starts with 1-3 digits and ends with exactly two non-digit letters.
pub fn is_szax(s: &str) -> bool {
    let Some((pre, post)) = split_one_dot(s) else {
        return false;
    };
    if pre.len() < 4 || !pre.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if post.len() < 3 {
        return false;
    }
    let letters = &post[post.len() - 2..];
    let digits = &post[..post.len() - 2];
    !digits.is_empty()
        && digits.len() <= 3
        && digits.bytes().all(|b| b.is_ascii_digit())
        && letters.bytes().all(|b| b.is_ascii_alphabetic())
}

fn split_one_dot(s: &str) -> Option<(&str, &str)> {
    let mut parts = s.splitn(2, '.');
    let pre = parts.next()?;
    let post = parts.next()?;
    if post.contains('.') {
        return None;
    }
    Some((pre, post))
}

/// Extract the class suffix (the non-digit tail after the library id).
pub fn class_of(s: &str) -> Result<&str> {
    let (_pre, post) = split_one_dot(s).ok_or_else(|| AceError::InvalidIdentifier(s.to_string()))?;
    let cut = post
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .ok_or_else(|| AceError::InvalidIdentifier(s.to_string()))?;
    Ok(&post[cut..])
}

/// Classify an identifier's NTY from its class suffix. Requires the identifier be
/// a valid ZAID or SZAX to begin with.
pub fn nty_of(s: &str) -> Result<Nty> {
    if !is_zaidx(s) && !is_szax(s) {
        return Err(AceError::InvalidIdentifier(s.to_string()));
    }
    let class = class_of(s)?;
    Nty::from_class(class).ok_or_else(|| AceError::UnknownClass(class.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s1_zaid_parsing() {
        assert!(is_zaidx("1001.80c"));
        assert!(!is_szax("1001.80c"));
        assert_eq!(class_of("1001.80c").unwrap(), "c");
        assert_eq!(nty_of("1001.80c").unwrap(), Nty::ContinuousNeutron);
    }

    #[test]
    fn s2_szax_parsing() {
        // Note: `is_zaidx` is also true here (`acefile.cpp::isZAIDX`'s own checks
        // — 1-7 digit pre-dot, non-digit final character — are satisfied by this
        // string too; the original's `ZAID_PATTERN` regex comment calls this
        // overlap out explicitly). `nty_of` still classifies correctly because
        // `class_of` extracts "nc" regardless of which predicate matched.
        assert!(is_szax("1027058.710nc"));
        assert_eq!(class_of("1027058.710nc").unwrap(), "nc");
        assert_eq!(nty_of("1027058.710nc").unwrap(), Nty::ContinuousNeutron);
    }

    #[test]
    fn rejects_two_dots() {
        assert!(!is_zaidx("1001.80.c"));
        assert!(!is_szax("1001.80.c"));
    }

    #[test]
    fn rejects_non_digit_prefix() {
        assert!(!is_zaidx("x1001.80c"));
    }

    #[test]
    fn rejects_three_letter_suffix() {
        // Syntactically still a ZAID by `acefile.cpp::isZAIDX`'s own rules (it
        // never constrains suffix length), but "ccc" is not a recognized class,
        // so overall identifier classification correctly rejects it.
        assert!(is_zaidx("1001.80ccc"));
        let err = nty_of("1001.80ccc").unwrap_err();
        assert!(matches!(err, AceError::UnknownClass(_)));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_zaidx(""));
        assert!(!is_szax(""));
    }

    #[test]
    fn unknown_class_errors() {
        let err = nty_of("1001.80z").unwrap_err();
        assert!(matches!(err, AceError::UnknownClass(_)));
    }
}
