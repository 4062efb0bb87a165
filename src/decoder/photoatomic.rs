//! Continuous-energy photoatomic decoder: ESZG (log-stored) / JINC / JCOH / JFLO /
//! LHNM / per-shell data / Compton profiles (spec §4.12).
//!
//! Grounded on `photoatomicfile.cpp::readXss`. The ESZG block stores natural logs
//! of the four interaction cross sections; this decoder exponentiates them and
//! clamps small-magnitude pair-production entries to zero, exactly as the original
//! does, then synthesizes a total by elementwise sum (there is no stored "total" xs
//! in the ACE photoatomic format itself — MCNP-family codes always recompute it).

use crate::arrays::{JxsArray, NxsArray};
use crate::cross_section::CrossSection;
use crate::error::Result;
use crate::reaction::Reaction;
use crate::tokens::XssArray;

/// Pair-production entries below this magnitude are clamped to zero rather than
/// exponentiated (`photoatomicfile.cpp`'s `SMALL` constant).
const PAIR_PRODUCTION_CLAMP: f64 = 1e-30;

const MT_TOTAL_PHOTON_INTERACTION: i32 = 501;
const MT_PHOTON_COHERENT: i32 = 502;
const MT_PHOTON_INCOHERENT: i32 = 504;
const MT_PAIR_PRODUCTION_TOTAL: i32 = 516;
const MT_PHOTOELECTRIC_ABSORPTION: i32 = 522;
const MT_TOTAL_HEATING_NUMBER: i32 = 301;

const NUM_FF_INCOHERENT: usize = 21;
const NUM_FF_COHERENT: usize = 55;

/// One shell's tabulated Compton-profile sub-table: momentum of the recoil
/// electron against pdf/cdf, tagged with the shell's `JJ` identifier.
#[derive(Debug, Clone)]
pub struct ComptonProfile {
    pub jj: i32,
    pub momentum: Vec<f64>,
    pub pdf: Vec<f64>,
    pub cdf: Vec<f64>,
}

/// A fully decoded continuous-energy photoatomic table.
#[derive(Debug, Clone)]
pub struct PhotoatomicFile {
    pub id: String,
    pub awr: f64,
    pub temperature_mev: f64,
    pub nxs: NxsArray,
    pub jxs: JxsArray,
    pub reactions: Vec<CrossSection>,
    /// Incoherent scattering-function abscissa grid, 21 fixed points (`JINC`).
    pub incoherent_recoil_momentums: Vec<f64>,
    /// Coherent integrated form-factor abscissa grid, 55 fixed points (`JCOH`).
    pub coherent_integrated_recoil_momentums: Vec<f64>,
    /// Coherent form-factor abscissa grid, 55 fixed points (`JCOH` + 55).
    pub coherent_recoil_momentums: Vec<f64>,
    pub fluorescence_edge_energies: Vec<f64>,
    pub fluorescence_relative_probabilities: Vec<f64>,
    pub fluorescence_yields: Vec<f64>,
    pub fluorescence_energies: Vec<f64>,
    pub electrons_per_shell: Vec<i64>,
    pub binding_energy_per_shell: Vec<f64>,
    pub interaction_probability_per_shell: Vec<f64>,
    pub compton_profile_locations: Vec<i64>,
    pub compton_profiles: Vec<ComptonProfile>,
}

impl PhotoatomicFile {
    pub fn reactions(&self) -> impl Iterator<Item = &CrossSection> {
        self.reactions.iter()
    }

    pub fn reaction(&self, mt: i32) -> Option<&CrossSection> {
        self.reactions.iter().find(|r| r.reaction.mt_number() == mt)
    }
}

pub fn decode(
    xss: &XssArray,
    nxs: NxsArray,
    jxs: JxsArray,
    id: String,
    awr: f64,
    temperature_mev: f64,
) -> Result<PhotoatomicFile> {
    let nes = nxs.get(3)? as usize;
    let nflo = nxs.get(4)? as usize;
    let nsh = nxs.get(5)? as usize;

    let eszg_origin = jxs.get(1)? as usize;
    let energy_points: Vec<f64> = xss.slice(eszg_origin, nes)?.into_iter().map(f64::exp).collect();
    let incoherent: Vec<f64> = xss.slice(eszg_origin + nes, nes)?.into_iter().map(f64::exp).collect();
    let coherent: Vec<f64> = xss.slice(eszg_origin + 2 * nes, nes)?.into_iter().map(f64::exp).collect();
    let photoelectric: Vec<f64> = xss.slice(eszg_origin + 3 * nes, nes)?.into_iter().map(f64::exp).collect();
    let pair_production: Vec<f64> = xss
        .slice(eszg_origin + 4 * nes, nes)?
        .into_iter()
        .map(|v| if v.abs() < PAIR_PRODUCTION_CLAMP { 0.0 } else { v.exp() })
        .collect();

    let total: Vec<f64> = (0..nes)
        .map(|i| incoherent[i] + coherent[i] + photoelectric[i] + pair_production[i])
        .collect();

    let mut reactions = Vec::with_capacity(5);
    reactions.push(CrossSection::new(
        energy_points.clone(),
        total,
        Reaction::Mt(MT_TOTAL_PHOTON_INTERACTION),
        0,
        0.0,
        0,
        0,
    )?);
    reactions.push(CrossSection::new(
        energy_points.clone(),
        incoherent,
        Reaction::Mt(MT_PHOTON_INCOHERENT),
        0,
        0.0,
        0,
        0,
    )?);
    reactions.push(CrossSection::new(
        energy_points.clone(),
        coherent,
        Reaction::Mt(MT_PHOTON_COHERENT),
        0,
        0.0,
        0,
        0,
    )?);
    reactions.push(CrossSection::new(
        energy_points.clone(),
        photoelectric,
        Reaction::Mt(MT_PHOTOELECTRIC_ABSORPTION),
        0,
        0.0,
        0,
        0,
    )?);
    reactions.push(CrossSection::new(
        energy_points.clone(),
        pair_production,
        Reaction::Mt(MT_PAIR_PRODUCTION_TOTAL),
        0,
        0.0,
        0,
        0,
    )?);

    let jinc_origin = jxs.get(2)? as usize;
    let incoherent_recoil_momentums = xss.slice(jinc_origin, NUM_FF_INCOHERENT)?;

    let jcoh_origin = jxs.get(3)? as usize;
    let coherent_integrated_recoil_momentums = xss.slice(jcoh_origin, NUM_FF_COHERENT)?;
    let coherent_recoil_momentums = xss.slice(jcoh_origin + NUM_FF_COHERENT, NUM_FF_COHERENT)?;

    let jflo_origin = jxs.get(4)? as usize;
    let (
        fluorescence_edge_energies,
        fluorescence_relative_probabilities,
        fluorescence_yields,
        fluorescence_energies,
    ) = if nflo > 0 {
        (
            xss.slice(jflo_origin, nflo)?,
            xss.slice(jflo_origin + nflo, nflo)?,
            xss.slice(jflo_origin + 2 * nflo, nflo)?,
            xss.slice(jflo_origin + 3 * nflo, nflo)?,
        )
    } else {
        (Vec::new(), Vec::new(), Vec::new(), Vec::new())
    };

    let lhnm_origin = jxs.get(5)? as usize;
    reactions.push(CrossSection::new(
        energy_points,
        xss.slice(lhnm_origin, nes)?,
        Reaction::Mt(MT_TOTAL_HEATING_NUMBER),
        0,
        0.0,
        0,
        0,
    )?);

    let lneps_origin = jxs.get(6)? as usize;
    let electrons_per_shell = xss.slice_i64(lneps_origin, nsh)?;

    let (binding_energy_per_shell, interaction_probability_per_shell) = if nsh >= 1 {
        let lbeps_origin = jxs.get(7)? as usize;
        let lpips_origin = jxs.get(8)? as usize;
        (xss.slice(lbeps_origin, nsh)?, xss.slice(lpips_origin, nsh)?)
    } else {
        (Vec::new(), Vec::new())
    };

    let lswd_origin = jxs.get(9)? as usize;
    let compton_profile_locations = xss.slice_i64(lswd_origin, nsh)?;

    let swd_origin = jxs.get(10)? as usize;
    let mut compton_profiles = Vec::with_capacity(nsh);
    for &location in &compton_profile_locations {
        let sub_origin = (swd_origin as i64 + location - 1) as usize;
        let jj = xss.get_i64(sub_origin)? as i32;
        let ne = xss.get_i64(sub_origin + 1)? as usize;
        let momentum = xss.slice(sub_origin + 2, ne)?;
        let pdf = xss.slice(sub_origin + 2 + ne, ne)?;
        let cdf = xss.slice(sub_origin + 2 + 2 * ne, ne)?;
        compton_profiles.push(ComptonProfile { jj, momentum, pdf, cdf });
    }

    Ok(PhotoatomicFile {
        id,
        awr,
        temperature_mev,
        nxs,
        jxs,
        reactions,
        incoherent_recoil_momentums,
        coherent_integrated_recoil_momentums,
        coherent_recoil_momentums,
        fluorescence_edge_energies,
        fluorescence_relative_probabilities,
        fluorescence_yields,
        fluorescence_energies,
        electrons_per_shell,
        binding_energy_per_shell,
        interaction_probability_per_shell,
        compton_profile_locations,
        compton_profiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nxs_jxs() -> (NxsArray, JxsArray) {
        let mut nxs = vec![0i64; 16];
        nxs[2] = 2; // NES
        nxs[3] = 0; // NFLO
        nxs[4] = 1; // NSH
        let mut jxs = vec![0i64; 32];
        jxs[0] = 1; // ESZG (5 * NES = 10 values, positions 1..10)
        jxs[1] = 11; // JINC
        jxs[2] = 11 + 21; // JCOH
        jxs[3] = 0; // JFLO unused (NFLO=0)
        jxs[4] = 11 + 21 + 110; // LHNM
        jxs[5] = jxs[4] + 2; // LNEPS
        jxs[6] = jxs[5] + 1; // LBEPS
        jxs[7] = jxs[6] + 1; // LPIPS
        jxs[8] = jxs[7] + 1; // LSWD
        jxs[9] = jxs[8] + 1; // SWD
        (NxsArray::from_raw(nxs), JxsArray::from_raw(jxs))
    }

    #[test]
    fn decodes_esz_g_and_shell_data() {
        let (nxs, jxs) = sample_nxs_jxs();
        let mut values = vec![0.0; 10];
        let energies = [1.0_f64, 2.0];
        let incoherent = [0.1_f64, 0.2];
        let coherent = [0.01_f64, 0.02];
        let photoelectric = [10.0_f64, 20.0];
        // first pair-production log value has magnitude below the clamp threshold
        let pair_log = [1e-40_f64, 0.5_f64.ln()];
        for (i, e) in energies.iter().enumerate() {
            values[i] = e.ln();
        }
        for (i, v) in incoherent.iter().enumerate() {
            values[2 + i] = v.ln();
        }
        for (i, v) in coherent.iter().enumerate() {
            values[4 + i] = v.ln();
        }
        for (i, v) in photoelectric.iter().enumerate() {
            values[6 + i] = v.ln();
        }
        values[8] = pair_log[0];
        values[9] = pair_log[1];
        // JINC block (21 values) at position 11
        values.extend(vec![0.0; NUM_FF_INCOHERENT]);
        // JCOH block (110 values) at position 32
        values.extend(vec![0.0; NUM_FF_COHERENT * 2]);
        // LHNM block (2 values)
        values.extend([5.0, 6.0]);
        // LNEPS (1 value, NSH=1)
        values.push(2.0);
        // LBEPS (1 value)
        values.push(0.5);
        // LPIPS (1 value)
        values.push(0.9);
        // LSWD (1 value): location = 1 (relative offset into SWD)
        values.push(1.0);
        // SWD sub-table at swd_origin + 1 - 1 = swd_origin: jj, ne, momentum, pdf, cdf
        values.push(1.0); // jj
        values.push(2.0); // ne
        values.extend([0.1, 0.2]); // momentum
        values.extend([0.3, 0.4]); // pdf
        values.extend([0.5, 0.6]); // cdf

        let xss = XssArray::new(values);
        let file = decode(&xss, nxs, jxs, "1001.04p".to_string(), 0.999, 0.0).unwrap();

        use approx::assert_abs_diff_eq;
        let total = file.reaction(MT_TOTAL_PHOTON_INTERACTION).unwrap();
        assert_abs_diff_eq!(total.xs_values[0], 0.1 + 0.01 + 10.0 + 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(total.xs_values[1], 0.2 + 0.02 + 20.0 + 0.5, epsilon = 1e-9);

        let incoherent_xs = file.reaction(MT_PHOTON_INCOHERENT).unwrap();
        assert_abs_diff_eq!(incoherent_xs.xs_values[0], 0.1, epsilon = 1e-9);

        let pair_xs = file.reaction(MT_PAIR_PRODUCTION_TOTAL).unwrap();
        assert_eq!(pair_xs.xs_values[0], 0.0);

        assert_eq!(file.electrons_per_shell, vec![2]);
        assert_eq!(file.binding_energy_per_shell, vec![0.5]);
        assert_eq!(file.compton_profiles.len(), 1);
        assert_eq!(file.compton_profiles[0].jj, 1);
        assert_eq!(file.compton_profiles[0].momentum, vec![0.1, 0.2]);
    }
}
