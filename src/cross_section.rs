//! Cross-section table: `(E, sigma)` pairs plus reaction metadata, log-log lookup,
//! and the golden-file `dump` contract.
//!
//! Grounded on `CrossSection.cpp` (`getValue`, `dump`) and the teacher's
//! `api/cross_section.rs` `Deref`-newtype style, narrowed to the single log-log
//! interpolation scheme spec §4.7 mandates (the teacher's `InterpolationTable` is a
//! different, multi-scheme structure reused instead for NU/DNU/BDD/precursor
//! tables — see [`crate::interpolation`]).

use std::io::Write;

use crate::angular_distribution::AngularDistribution;
use crate::error::{AceError, Result};
use crate::reaction::Reaction;

/// A single reaction's cross section, with the metadata needed to reconstruct it
/// from the ACE block layout: multiplicity, Q-value, position within the master
/// energy grid, and angular-distribution linkage.
#[derive(Debug, Clone)]
pub struct CrossSection {
    pub energy_points: Vec<f64>,
    pub xs_values: Vec<f64>,
    pub reaction: Reaction,
    pub release_n: i32,
    pub q_value: f64,
    pub energy_offset: i64,
    pub angular_flag: i32,
    pub angular_dists: Vec<AngularDistribution>,
}

impl CrossSection {
    /// Construct a cross section, validating that `energy_points` is strictly
    /// ascending (spec §8 property 3).
    pub fn new(
        energy_points: Vec<f64>,
        xs_values: Vec<f64>,
        reaction: Reaction,
        release_n: i32,
        q_value: f64,
        energy_offset: i64,
        angular_flag: i32,
    ) -> Result<Self> {
        if !energy_points.windows(2).all(|w| w[0] < w[1]) {
            return Err(AceError::NonMonotonicEnergy);
        }
        Ok(CrossSection {
            energy_points,
            xs_values,
            reaction,
            release_n,
            q_value,
            energy_offset,
            angular_flag,
            angular_dists: Vec::new(),
        })
    }

    /// Log-log interpolated cross section at `energy`. Empty tables return 0 (a
    /// well-defined answer for reactions that never occur in this nuclide).
    pub fn at(&self, energy: f64) -> Result<f64> {
        if self.energy_points.is_empty() {
            return Ok(0.0);
        }
        let first = self.energy_points[0];
        let last = *self.energy_points.last().unwrap();
        if energy < first || energy >= last {
            return Err(AceError::EnergyOutOfRange { e: energy, min: first, max: last });
        }
        let i = match self.energy_points.binary_search_by(|probe| probe.partial_cmp(&energy).unwrap()) {
            Ok(idx) => {
                // an exact node hit: the node itself is the right endpoint of its
                // interval unless it's the very first point.
                if idx == 0 {
                    1
                } else {
                    idx
                }
            }
            Err(idx) => idx,
        };
        let e0 = self.energy_points[i - 1];
        let e1 = self.energy_points[i];
        let y0 = self.xs_values[i - 1];
        let y1 = self.xs_values[i];
        if energy == e0 {
            return Ok(y0);
        }
        let w = (energy - e0) / (e1 - e0);
        Ok(y0.powf(1.0 - w) * y1.powf(w))
    }

    /// Emit the textual dump contract: `#!`-prefixed metadata lines, a `#` column
    /// header, then scientific-notation two-column records (7/8 significant
    /// digits, 14/16 field widths), matching `CrossSection::dump` byte-for-byte in
    /// layout.
    pub fn dump(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "#! MT={}", self.reaction.mt_number())?;
        writeln!(writer, "#! Q={:.7e}", self.q_value)?;
        writeln!(writer, "#! offset={}", self.energy_offset)?;
        writeln!(writer, "#! angular_dist_flag={}", self.angular_flag)?;
        writeln!(writer, "# {}", self.reaction.label())?;
        writeln!(writer, "# {:>13}{:>16}", "Energy", "Value")?;
        for (e, v) in self.energy_points.iter().zip(self.xs_values.iter()) {
            writeln!(writer, "{:>14.7e}{:>16.8e}", e, v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CrossSection {
        CrossSection::new(vec![1.0, 10.0], vec![2.0, 8.0], Reaction::Mt(1), 0, 0.0, 0, 0).unwrap()
    }

    #[test]
    fn rejects_non_ascending_energy() {
        let err = CrossSection::new(vec![2.0, 1.0], vec![1.0, 1.0], Reaction::Mt(1), 0, 0.0, 0, 0).unwrap_err();
        assert!(matches!(err, AceError::NonMonotonicEnergy));
    }

    #[test]
    fn s4_log_log_interpolation() {
        use approx::assert_abs_diff_eq;

        let xs = sample();
        let e = 3.1622776601683795_f64; // geometric mean of 1.0 and 10.0
        let v = xs.at(e).unwrap();
        assert_abs_diff_eq!(v, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn interpolation_idempotent_at_nodes() {
        let xs = sample();
        assert_eq!(xs.at(1.0).unwrap(), 2.0);
    }

    #[test]
    fn s5_out_of_range() {
        let xs = sample();
        let err = xs.at(10.0).unwrap_err();
        match err {
            AceError::EnergyOutOfRange { e, min, max } => {
                assert_eq!(e, 10.0);
                assert_eq!(min, 1.0);
                assert_eq!(max, 10.0);
            }
            _ => panic!("expected EnergyOutOfRange"),
        }
        assert!(xs.at(0.5).is_err());
    }

    #[test]
    fn empty_table_returns_zero() {
        let xs = CrossSection::new(vec![], vec![], Reaction::Mt(1), 0, 0.0, 0, 0).unwrap();
        assert_eq!(xs.at(5.0).unwrap(), 0.0);
    }

    #[test]
    fn dump_has_expected_prefixes() {
        let xs = sample();
        let mut buf = Vec::new();
        xs.dump(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("#! MT=1\n"));
        assert!(text.contains("# Energy"));
    }
}
