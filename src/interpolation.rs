//! The generic ENDF-style interpolation table used by fission-neutron-yield
//! (`NU`/`DNU`) and precursor (`BDD`) data: `NR` interpolation regions, each with
//! its own scheme, over an `(x, y)` sequence.
//!
//! Grounded on the teacher's `ace/interpolation/interpolation_table.rs`
//! (`InterpolationScheme`, `InterpolationRegion`, `InterpolationTable::process`,
//! `interpolate`) — this is a distinct, more general structure than
//! [`crate::cross_section::CrossSection`], which is always log-log per spec §4.7.

/// ENDF interpolation-law tag, carried verbatim from the `INT` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationScheme {
    Histogram,
    LinLin,
    LinLog,
    LogLin,
    LogLog,
    /// Recognized but not evaluated by this core (charged-particle Gamow tables).
    Gamow,
}

impl From<i64> for InterpolationScheme {
    fn from(value: i64) -> Self {
        match value {
            1 => InterpolationScheme::Histogram,
            2 => InterpolationScheme::LinLin,
            3 => InterpolationScheme::LinLog,
            4 => InterpolationScheme::LogLin,
            5 => InterpolationScheme::LogLog,
            _ => InterpolationScheme::Gamow,
        }
    }
}

/// A `(NBT, INT)` interpolation region: `data` runs up to and including `nbt`
/// (1-based within the owning table), interpolated according to `scheme`.
#[derive(Debug, Clone)]
pub struct InterpolationRegion {
    pub data: Vec<(f64, f64)>,
    pub scheme: InterpolationScheme,
}

/// A full `NR`-region tabulated function, or a single implicit lin-lin region when
/// `NR == 0`.
#[derive(Debug, Clone, Default)]
pub struct InterpolationTable {
    pub regions: Vec<InterpolationRegion>,
}

impl InterpolationTable {
    pub fn single_region(x: Vec<f64>, y: Vec<f64>, scheme: InterpolationScheme) -> Self {
        let data = x.into_iter().zip(y).collect();
        InterpolationTable { regions: vec![InterpolationRegion { data, scheme }] }
    }

    pub fn evaluate(&self, x_val: f64) -> Option<f64> {
        for region in &self.regions {
            if region.data.len() < 2 {
                continue;
            }
            let in_range = x_val >= region.data[0].0 && x_val <= region.data.last().unwrap().0;
            if !in_range {
                continue;
            }
            let idx = region
                .data
                .windows(2)
                .position(|w| x_val >= w[0].0 && x_val <= w[1].0)?;
            let (x0, y0) = region.data[idx];
            let (x1, y1) = region.data[idx + 1];
            return Some(interpolate_pair(region.scheme, x0, y0, x1, y1, x_val));
        }
        None
    }
}

fn interpolate_pair(scheme: InterpolationScheme, x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    match scheme {
        InterpolationScheme::Histogram => y0,
        InterpolationScheme::LinLin => y0 + (y1 - y0) * (x - x0) / (x1 - x0),
        InterpolationScheme::LinLog => y0 + (y1 - y0) * (x.ln() - x0.ln()) / (x1.ln() - x0.ln()),
        InterpolationScheme::LogLin => y0 * (((x - x0) * (y1 / y0).ln()) / (x1 - x0)).exp(),
        InterpolationScheme::LogLog => {
            y0 * (((x / x0).ln() * (y1 / y0).ln()) / (x1 / x0).ln()).exp()
        }
        InterpolationScheme::Gamow => y0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lin_lin_interpolates() {
        let t = InterpolationTable::single_region(vec![0.0, 10.0], vec![0.0, 100.0], InterpolationScheme::LinLin);
        assert_eq!(t.evaluate(5.0), Some(50.0));
    }

    #[test]
    fn histogram_holds_left_value() {
        let t = InterpolationTable::single_region(vec![0.0, 10.0], vec![5.0, 100.0], InterpolationScheme::Histogram);
        assert_eq!(t.evaluate(3.0), Some(5.0));
    }

    #[test]
    fn out_of_range_is_none() {
        let t = InterpolationTable::single_region(vec![0.0, 10.0], vec![0.0, 100.0], InterpolationScheme::LinLin);
        assert_eq!(t.evaluate(20.0), None);
    }
}
