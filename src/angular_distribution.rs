//! Angular-distribution decoding: tabulated `(mu, pdf, cdf)` triples per incident
//! energy for a single reaction's `AND` sub-table.
//!
//! Grounded on `CrossSection.cpp::ReadAngularTable` and the teacher's `blocks/and.rs`,
//! narrowed per spec §4.8 to the tabulated case only — equiprobable-32-bin data and
//! Monte-Carlo sampling are out of scope; their offsets are recorded but not
//! decoded (spec §9).

use crate::tokens::XssArray;

/// One incident-energy sub-table. An isotropic entry (`LOCB == 0`) carries an
/// empty `angular_points`/`pdf`/`cdf`; an equiprobable-bin entry (`LOCB > 0`) is
/// likewise recorded with empty sequences (not decoded by this core).
#[derive(Debug, Clone)]
pub struct AngularDistribution {
    pub energy: f64,
    pub interpolation: i32,
    pub angular_points: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

impl AngularDistribution {
    fn isotropic(energy: f64) -> Self {
        AngularDistribution { energy, interpolation: 0, angular_points: Vec::new(), pdf: Vec::new(), cdf: Vec::new() }
    }

    fn opaque_equiprobable(energy: f64) -> Self {
        AngularDistribution { energy, interpolation: 0, angular_points: Vec::new(), pdf: Vec::new(), cdf: Vec::new() }
    }
}

/// Decode the full per-reaction angular-distribution table located at absolute
/// 1-based position `and_block + locb - 1` within `xss`.
pub fn decode(xss: &XssArray, and_block: usize, locb: i64) -> crate::error::Result<Vec<AngularDistribution>> {
    let origin = (and_block as i64 + locb - 1) as usize;
    let ne = xss.get_i64(origin)? as usize;
    let energies = xss.slice(origin + 1, ne)?;
    let locations = xss.slice_i64(origin + 1 + ne, ne)?;

    let mut out = Vec::with_capacity(ne);
    for (energy, location) in energies.into_iter().zip(locations) {
        if location == 0 {
            out.push(AngularDistribution::isotropic(energy));
        } else if location > 0 {
            out.push(AngularDistribution::opaque_equiprobable(energy));
        } else {
            let sub_origin = (and_block as i64 + location.unsigned_abs() as i64 - 1) as usize;
            let interpolation = xss.get_i64(sub_origin)? as i32;
            let num_points = xss.get_i64(sub_origin + 1)? as usize;
            let angular_points = xss.slice(sub_origin + 2, num_points)?;
            let pdf = xss.slice(sub_origin + 2 + num_points, num_points)?;
            let cdf = xss.slice(sub_origin + 2 + 2 * num_points, num_points)?;
            out.push(AngularDistribution { energy, interpolation, angular_points, pdf, cdf });
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_isotropic_and_tabulated_entries() {
        // AND block origin at xss position 1 (1-based). Layout:
        // [NE=2, e1, e2, loc1=0 (isotropic), loc2=<negative offset to subtable>,
        //  <subtable: interp, npoints, angular_points..., pdf..., cdf...>]
        // The top-level record occupies positions 1-5 (NE + 2 energies + 2
        // locations), so the subtable that immediately follows starts at
        // position 6 — loc2 must be `-6` (sub_origin = and_block + |loc| - 1).
        let mut values = vec![
            2.0, // NE
            1.0, 2.0, // energies
            0.0, -6.0, // locations: isotropic, tabulated at relative offset 6
        ];
        values.extend([2.0, 2.0, -1.0, 1.0, 0.0, 1.0, 0.2, 1.0]); // interp=2, npoints=2, mu, pdf, cdf
        let xss = XssArray::new(values);
        let dists = decode(&xss, 1, 1).unwrap();
        assert_eq!(dists.len(), 2);
        assert!(dists[0].angular_points.is_empty());
        assert_eq!(dists[1].angular_points, vec![-1.0, 1.0]);
        assert_eq!(dists[1].pdf, vec![0.0, 1.0]);
        assert_eq!(dists[1].cdf, vec![0.2, 1.0]);
    }
}
