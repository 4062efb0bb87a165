//! `NXS`/`JXS`: the two fixed-length integer index arrays read verbatim from every
//! ACE header, 16 and 32 entries respectively (spec §3/§6).
//!
//! Grounded on the teacher's `arrays/nxs.rs`/`arrays/jxs.rs`, generalized from
//! mmap'd binary reads to the ASCII token reads in [`crate::header`]. Slot meaning
//! differs by NTY (continuous-energy neutron vs. dosimetry vs. photoatomic); this
//! module stores the arrays verbatim and 1-based, and leaves semantic slot naming to
//! each decoder (the [`crate::blocks::block_types::BlockType`] table for the
//! continuous-energy neutron case).

use crate::error::{AceError, Result};

/// The 16-entry `NXS` array, 1-based as written in the file.
#[derive(Debug, Clone)]
pub struct NxsArray(Vec<i64>);

impl NxsArray {
    pub fn from_raw(values: Vec<i64>) -> Self {
        NxsArray(values)
    }

    pub fn raw(&self) -> &[i64] {
        &self.0
    }

    /// Read slot `n` (1-based). Returns 0 for an unused/reserved slot within bounds.
    pub fn get(&self, n: usize) -> Result<i64> {
        self.0
            .get(n - 1)
            .copied()
            .ok_or(AceError::OutOfXssRange { pos: n, len: self.0.len() })
    }
}

/// The 32-entry `JXS` array, 1-based as written in the file. Each entry is either 0
/// (block absent) or a 1-based offset into the XSS payload where the named block
/// begins.
#[derive(Debug, Clone)]
pub struct JxsArray(Vec<i64>);

impl JxsArray {
    pub fn from_raw(values: Vec<i64>) -> Self {
        JxsArray(values)
    }

    pub fn raw(&self) -> &[i64] {
        &self.0
    }

    pub fn get(&self, n: usize) -> Result<i64> {
        self.0
            .get(n - 1)
            .copied()
            .ok_or(AceError::OutOfXssRange { pos: n, len: self.0.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nxs_jxs_length_invariant() {
        let nxs = NxsArray::from_raw(vec![0; 16]);
        let jxs = JxsArray::from_raw(vec![0; 32]);
        assert_eq!(nxs.raw().len(), 16);
        assert_eq!(jxs.raw().len(), 32);
    }

    #[test]
    fn slot_access_is_one_based() {
        let jxs = JxsArray::from_raw((1..=32).collect());
        assert_eq!(jxs.get(1).unwrap(), 1);
        assert_eq!(jxs.get(32).unwrap(), 32);
        assert!(jxs.get(33).is_err());
    }
}
