//! Whitespace-token cursor over a file's remaining content, and the typed readers
//! used throughout header/NXS/JXS/XSS decoding.
//!
//! Grounded on spec §4.4/§9: ACE writes integers in scientific notation
//! (`3.100000000000E+01`), so every integer read goes through [`parse_f64_then_truncate`]
//! rather than a direct integer parse.

use crate::error::{AceError, Result};

/// A 1-based position into a [`XssArray`], matching the Fortran indexing used
/// throughout the ACE format and its JXS offset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AceIndex(pub usize);

impl AceIndex {
    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

/// Parse a numeric token as `f64`, then truncate to an integer. Using a direct
/// integer parse on a token like `3.1E+01` would silently yield `3`.
pub fn parse_f64_then_truncate(tok: &str) -> Option<i64> {
    fast_float::parse::<f64, _>(tok).ok().map(|v| v as i64)
}

pub fn parse_f64(tok: &str) -> Option<f64> {
    fast_float::parse::<f64, _>(tok).ok()
}

/// The decoded XSS payload: a flat sequence of `f64` values, indexed 1-based per
/// the ACE convention. Integer-valued slots are read back out via
/// [`XssArray::slice_i64`]/[`XssArray::get_i64`].
#[derive(Debug, Clone)]
pub struct XssArray {
    values: Vec<f64>,
}

impl XssArray {
    pub fn new(values: Vec<f64>) -> Self {
        XssArray { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a single `f64` at 1-based position `pos`.
    pub fn get(&self, pos: usize) -> Result<f64> {
        self.values.get(pos.wrapping_sub(1)).copied().ok_or(AceError::OutOfXssRange {
            pos,
            len: self.values.len(),
        })
    }

    /// Read a single integer (via float-then-truncate) at 1-based position `pos`.
    pub fn get_i64(&self, pos: usize) -> Result<i64> {
        self.get(pos).map(|v| v as i64)
    }

    /// Read `n` consecutive `f64` values starting at 1-based position `pos`.
    pub fn slice(&self, pos: usize, n: usize) -> Result<Vec<f64>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let start = pos.wrapping_sub(1);
        let end = start
            .checked_add(n)
            .filter(|&end| end <= self.values.len())
            .ok_or(AceError::OutOfXssRange { pos: pos + n - 1, len: self.values.len() })?;
        Ok(self.values[start..end].to_vec())
    }

    /// Read `n` consecutive integers (via float-then-truncate) starting at 1-based
    /// position `pos`.
    pub fn slice_i64(&self, pos: usize, n: usize) -> Result<Vec<i64>> {
        Ok(self.slice(pos, n)?.into_iter().map(|v| v as i64).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_scientific_notation_integers() {
        assert_eq!(parse_f64_then_truncate("3.100000000000E+01"), Some(31));
    }

    #[test]
    fn slice_soundness() {
        let xss = XssArray::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(xss.slice(1, 4).unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(xss.slice(2, 4).is_err());
        assert!(xss.slice(5, 1).is_err());
    }

    #[test]
    fn out_of_range_get() {
        let xss = XssArray::new(vec![1.0]);
        assert!(xss.get(0).is_err());
        assert!(xss.get(2).is_err());
        assert!(xss.get(1).is_ok());
    }
}
