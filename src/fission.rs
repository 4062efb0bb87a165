//! Fission-neutron-yield (`NU`/`DNU`) and delayed-neutron-precursor (`BDD`) data.
//!
//! Grounded on `neutrontransportfile.cpp::readXss` (the `NU`/`DNU`/`BDD` branches)
//! and the teacher's `blocks/nu.rs`/`blocks/dnu.rs`/`blocks/bdd.rs`. The three
//! Open Question decisions recorded in `DESIGN.md` are implemented here:
//! a negative `LNU` tag never additionally consumes a trailing `DNU` block
//! (delayed data is always read from `JXS(24)` independent of `JXS(2)`'s sign),
//! and an `NPCR > 0` table with no `DNU` block present yields an empty
//! `precursors` list plus a logged warning rather than an error.

use crate::error::{AceError, Result};
use crate::interpolation::{InterpolationRegion, InterpolationScheme, InterpolationTable};
use crate::tokens::XssArray;

/// The `NU`-block fission-neutron-yield representation for one polynomial or
/// tabulated sub-block (prompt, total, or a component of a combined record).
#[derive(Debug, Clone)]
pub enum FissionNeutronData {
    /// `LNU == 1`: yield is a polynomial in incident energy, `nu(E) = sum(c_i * E^i)`.
    Polynomial { coefficients: Vec<f64> },
    /// `LNU == 2`: yield is tabulated, interpolated per spec §4.9's ENDF regions.
    Tabulated(InterpolationTable),
}

impl FissionNeutronData {
    pub fn evaluate(&self, energy: f64) -> Option<f64> {
        match self {
            FissionNeutronData::Polynomial { coefficients } => {
                let mut acc = 0.0;
                let mut pow = 1.0;
                for c in coefficients {
                    acc += c * pow;
                    pow *= energy;
                }
                Some(acc)
            }
            FissionNeutronData::Tabulated(table) => table.evaluate(energy),
        }
    }
}

/// One delayed-neutron precursor group: decay constant plus a tabulated
/// emission-probability function of incident energy.
#[derive(Debug, Clone)]
pub struct PrecursorData {
    pub decay_constant: f64,
    pub probability: InterpolationTable,
}

/// Read a single `LNU`-tagged fission-neutron-yield sub-block starting at
/// absolute 1-based XSS position `pos`. Returns the decoded data and the
/// position immediately following it.
fn read_nu_subblock(xss: &XssArray, pos: usize) -> Result<(FissionNeutronData, usize)> {
    let lnu = xss.get_i64(pos)?;
    match lnu {
        1 => {
            let n = xss.get_i64(pos + 1)? as usize;
            let coefficients = xss.slice(pos + 2, n)?;
            Ok((FissionNeutronData::Polynomial { coefficients }, pos + 2 + n))
        }
        2 => {
            let (table, next) = read_interpolation_table(xss, pos + 1)?;
            Ok((FissionNeutronData::Tabulated(table), next))
        }
        other => Err(AceError::InvalidLNU(other)),
    }
}

/// Read an ENDF-style `NR`-region interpolation table (`NBT`/`INT` pairs
/// followed by an `NE`-length `(x, y)` sequence) starting at absolute 1-based
/// position `pos`. Returns the table and the position immediately following it.
fn read_interpolation_table(xss: &XssArray, pos: usize) -> Result<(InterpolationTable, usize)> {
    let nr = xss.get_i64(pos)? as usize;
    let mut cursor = pos + 1;
    let nbt = xss.slice_i64(cursor, nr)?;
    cursor += nr;
    let int_tags = xss.slice_i64(cursor, nr)?;
    cursor += nr;

    let ne = xss.get_i64(cursor)? as usize;
    cursor += 1;
    let x = xss.slice(cursor, ne)?;
    cursor += ne;
    let y = xss.slice(cursor, ne)?;
    cursor += ne;

    let regions = if nr == 0 {
        vec![InterpolationRegion { data: x.into_iter().zip(y).collect(), scheme: InterpolationScheme::LinLin }]
    } else {
        let mut regions = Vec::with_capacity(nr);
        let mut start = 0usize;
        for (boundary, int_tag) in nbt.into_iter().zip(int_tags) {
            let end = (boundary as usize).min(ne);
            let data = x[start..end].iter().copied().zip(y[start..end].iter().copied()).collect();
            regions.push(InterpolationRegion { data, scheme: InterpolationScheme::from(int_tag) });
            start = if end > 0 { end - 1 } else { 0 };
        }
        regions
    };
    Ok((InterpolationTable { regions }, cursor))
}

/// Decode a nuclide's `NU` block (`JXS(2)`). When the flag token (`KNU`) read
/// at the block origin is negative, a combined prompt/total record follows:
/// the prompt sub-block starts fresh, one position past the flag
/// (`nu_block+1`), with its own `LNU` tag; the total sub-block starts at the
/// fixed offset `nu_block+1+|KNU|`, independent of where the prompt sub-block
/// actually ends (spec §4.9: "prompt table at `JXS(2)+1`, total table at
/// `JXS(2)+1+|flag|`"). Per the recorded Open Question decision, this never
/// reads a trailing `DNU` block regardless of sign — delayed data comes only
/// from `JXS(24)`.
pub fn decode_nu(xss: &XssArray, nu_block: usize) -> Result<(Option<FissionNeutronData>, Option<FissionNeutronData>)> {
    let first_tag = xss.get_i64(nu_block)?;
    if first_tag < 0 {
        let (prompt, _) = read_nu_subblock(xss, nu_block + 1)?;
        let total_origin = nu_block + 1 + first_tag.unsigned_abs() as usize;
        let (total, _) = read_nu_subblock(xss, total_origin)?;
        Ok((Some(prompt), Some(total)))
    } else {
        let (only, _) = read_nu_subblock(xss, nu_block)?;
        Ok((Some(only), None))
    }
}

/// Decode the delayed-neutron data: the `DNU` yield table (`JXS(24)`) and the
/// `BDD` precursor-group table (`JXS(25)`, `NXS(8)` groups). `npcr` is
/// `NXS(8)`; when positive but no `DNU` origin is available (`dnu_block` is
/// `None`), this returns an empty precursor list and logs a warning rather
/// than failing — see the recorded Open Question decision.
pub fn decode_delayed(
    xss: &XssArray,
    dnu_block: Option<usize>,
    bdd_block: Option<usize>,
    npcr: i64,
) -> Result<(Option<FissionNeutronData>, Vec<PrecursorData>)> {
    let delayed_yield = match dnu_block {
        Some(origin) => {
            let (data, _) = read_nu_subblock(xss, origin)?;
            Some(data)
        }
        None => None,
    };

    if npcr <= 0 {
        return Ok((delayed_yield, Vec::new()));
    }

    let Some(bdd_origin) = bdd_block else {
        log::warn!("NPCR={npcr} but no BDD block is present; returning no precursor groups");
        return Ok((delayed_yield, Vec::new()));
    };

    let mut precursors = Vec::with_capacity(npcr as usize);
    let mut pos = bdd_origin;
    for _ in 0..npcr {
        let decay_constant = xss.get(pos)?;
        let (table, next) = read_interpolation_table(xss, pos + 1)?;
        precursors.push(PrecursorData { decay_constant, probability: table });
        pos = next;
    }
    Ok((delayed_yield, precursors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_yield_evaluates() {
        use approx::assert_abs_diff_eq;

        let xss = XssArray::new(vec![1.0, 3.0, 2.0, 0.1, 0.01]);
        let (data, next) = read_nu_subblock(&xss, 1).unwrap();
        assert_eq!(next, 6);
        let v = data.evaluate(10.0).unwrap();
        assert_abs_diff_eq!(v, 2.0 + 0.1 * 10.0 + 0.01 * 100.0, epsilon = 1e-12);
    }

    #[test]
    fn tabulated_yield_with_implicit_region() {
        // LNU=2, NR=0, NE=2, x=[1,10], y=[2,3]
        let xss = XssArray::new(vec![2.0, 0.0, 2.0, 1.0, 10.0, 2.0, 3.0]);
        let (data, _) = read_nu_subblock(&xss, 1).unwrap();
        let v = data.evaluate(1.0).unwrap();
        assert_eq!(v, 2.0);
    }

    #[test]
    fn invalid_lnu_errors() {
        let xss = XssArray::new(vec![3.0, 0.0]);
        let err = read_nu_subblock(&xss, 1).unwrap_err();
        assert!(matches!(err, AceError::InvalidLNU(3)));
    }

    #[test]
    fn npcr_without_bdd_yields_empty_with_warning() {
        let xss = XssArray::new(vec![0.0]);
        let (delayed, precursors) = decode_delayed(&xss, None, None, 2).unwrap();
        assert!(delayed.is_none());
        assert!(precursors.is_empty());
    }

    #[test]
    fn decodes_one_precursor_group() {
        // decay_constant=0.5, NR=0, NE=2, x=[1,10], y=[0.1,0.2]
        let xss = XssArray::new(vec![0.5, 0.0, 2.0, 1.0, 10.0, 0.1, 0.2]);
        let (_, precursors) = decode_delayed(&xss, None, Some(1), 1).unwrap();
        assert_eq!(precursors.len(), 1);
        assert_eq!(precursors[0].decay_constant, 0.5);
        assert_eq!(precursors[0].probability.evaluate(1.0), Some(0.1));
    }

    #[test]
    fn negative_lnu_tag_reads_prompt_fresh_and_total_at_fixed_offset() {
        use approx::assert_abs_diff_eq;

        // KNU = -3: prompt sub-block occupies exactly 3 words (LNU=1, n=1, one
        // coefficient), starting at nu_block+1=2; total sub-block therefore
        // starts at nu_block+1+3=5, independent of where the prompt sub-block's
        // own parse would otherwise have ended.
        // pos: 1        2     3     4     5     6     7
        let xss = XssArray::new(vec![-3.0, 1.0, 1.0, 5.0, 1.0, 1.0, 9.0]);
        let (prompt, total) = decode_nu(&xss, 1).unwrap();
        assert_abs_diff_eq!(prompt.unwrap().evaluate(0.0).unwrap(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(total.unwrap().evaluate(0.0).unwrap(), 9.0, epsilon = 1e-12);
    }
}
