//! Continuous-energy neutron transport decoder: the full ESZ/NU/MTR/LQR/TYR/
//! LSIG/SIG/LAND/AND block walk (spec §4.10).
//!
//! Grounded on `neutrontransportfile.cpp::readXss` and the teacher's
//! `blocks/{esz,mtr,lsig,sig,land}.rs`, generalized from mmap'd `Arrays`
//! slices to [`XssArray`] reads positioned via [`JxsArray`]/[`NxsArray`]
//! slots (spec §6's continuous-energy-neutron table).

use crate::angular_distribution;
use crate::arrays::{JxsArray, NxsArray};
use crate::blocks::BlockType;
use crate::cross_section::CrossSection;
use crate::error::Result;
use crate::fission::{self, FissionNeutronData, PrecursorData};
use crate::reaction::{self, Reaction};
use crate::tokens::XssArray;

/// A fully decoded continuous-energy neutron transport table.
#[derive(Debug, Clone)]
pub struct TransportFile {
    pub id: String,
    pub awr: f64,
    pub temperature_mev: f64,
    pub nxs: NxsArray,
    pub jxs: JxsArray,
    pub energy_grid: Vec<f64>,
    pub disappearance_xs: Vec<f64>,
    pub heating_numbers: Vec<f64>,
    pub reactions: Vec<CrossSection>,
    pub fission: Option<FissionNeutronData>,
    pub fission_prompt: Option<FissionNeutronData>,
    pub fission_delayed: Option<FissionNeutronData>,
    pub precursors: Vec<PrecursorData>,
}

impl TransportFile {
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
) -> Result<TransportFile> {
    let nes = nxs.get(3)? as usize;
    let ntr = nxs.get(4)? as usize;

    log::debug!("decoding {} block ({nes} energy points)", BlockType::ESZ);
    let esz_origin = jxs.get(1)? as usize;
    let energy_grid = xss.slice(esz_origin, nes)?;
    let total_xs = xss.slice(esz_origin + nes, nes)?;
    let disappearance_xs = xss.slice(esz_origin + 2 * nes, nes)?;
    let elastic_xs = xss.slice(esz_origin + 3 * nes, nes)?;
    let heating_numbers = xss.slice(esz_origin + 4 * nes, nes)?;

    let mut reactions = Vec::with_capacity(ntr + 1);
    reactions.push(CrossSection::new(energy_grid.clone(), total_xs, Reaction::Mt(1), 0, 0.0, 0, 0)?);
    let elastic_index = reactions.len();
    reactions.push(CrossSection::new(energy_grid.clone(), elastic_xs, Reaction::Mt(2), 1, 0.0, 0, 1)?);

    log::debug!("decoding {} block ({ntr} reactions)", BlockType::NU);
    let nu_origin = jxs.get(2)?;
    let (fission, fission_prompt) = if nu_origin != 0 {
        let (a, b) = fission::decode_nu(xss, nu_origin as usize)?;
        if b.is_some() {
            // KNU < 0: a is prompt, b is total.
            (b, a)
        } else {
            (a, None)
        }
    } else {
        (None, None)
    };
    let dnu_origin = jxs.get(24)?;
    let bdd_origin = jxs.get(25)?;
    let npcr = nxs.get(8)?;
    let (fission_delayed, precursors) = fission::decode_delayed(
        xss,
        (dnu_origin != 0).then_some(dnu_origin as usize),
        (bdd_origin != 0).then_some(bdd_origin as usize),
        npcr,
    )?;

    let mut mt_numbers = Vec::with_capacity(ntr);
    if ntr > 0 {
        log::debug!("decoding {} block", BlockType::MTR);
        let mtr_origin = jxs.get(3)? as usize;
        mt_numbers = xss.slice_i64(mtr_origin, ntr)?;

        log::debug!("decoding {} block", BlockType::LQR);
        let lqr_origin = jxs.get(4)? as usize;
        let q_values = xss.slice(lqr_origin, ntr)?;

        log::debug!("decoding {} block", BlockType::TYR);
        let tyr_origin = jxs.get(5)? as usize;
        let release_vals = xss.slice_i64(tyr_origin, ntr)?;

        log::debug!("decoding {} block", BlockType::LSIG);
        let lsig_origin = jxs.get(6)? as usize;
        let sig_offsets = xss.slice_i64(lsig_origin, ntr)?;

        log::debug!("decoding {} block", BlockType::SIG);
        let sig_origin = jxs.get(7)? as usize;
        for i in 0..ntr {
            let mt = mt_numbers[i] as i32;
            let q_value = q_values[i];
            let release_n = release_vals[i].unsigned_abs() as i32;
            let pos = sig_origin + sig_offsets[i] as usize - 1;
            let ie = xss.get_i64(pos)? as usize;
            let ne = xss.get_i64(pos + 1)? as usize;
            let xs_values = xss.slice(pos + 2, ne)?;
            debug_assert!(ie - 1 + ne <= energy_grid.len(), "SIG block reaction MT{mt} overruns the master energy grid");
            let energies = energy_grid[ie - 1..ie - 1 + ne].to_vec();
            reactions.push(CrossSection::new(
                energies,
                xs_values,
                reaction::from_mt(mt),
                release_n,
                q_value,
                ie as i64,
                0,
            )?);
        }

        log::debug!("decoding {} block", BlockType::LAND);
        let nr = nxs.get(5)? as usize;
        let land_origin = jxs.get(8)? as usize;
        let land = xss.slice_i64(land_origin, nr + 1)?;
        reactions[elastic_index].angular_flag = land[0] as i32;

        log::debug!("decoding {} block", BlockType::AND);
        let and_origin = jxs.get(9)?;
        if and_origin != 0 && land[0] > 0 {
            reactions[elastic_index].angular_dists =
                angular_distribution::decode(xss, and_origin as usize, land[0])?;
        }
        for (i, loc) in land.iter().enumerate().skip(1) {
            let mt = mt_numbers[i - 1] as i32;
            let Some(cs) = reactions.iter_mut().find(|r| r.reaction.mt_number() == mt) else {
                continue;
            };
            cs.angular_flag = *loc as i32;
            if and_origin != 0 && *loc > 0 {
                cs.angular_dists = angular_distribution::decode(xss, and_origin as usize, *loc)?;
            }
        }
    }

    // LDLW/DLW offsets are read but not decoded (spec §4.10 step 10, §9).
    let _ldlw_offset = jxs.get(10)?;
    let _dlw_offset = jxs.get(11)?;

    Ok(TransportFile {
        id,
        awr,
        temperature_mev,
        nxs,
        jxs,
        energy_grid,
        disappearance_xs,
        heating_numbers,
        reactions,
        fission,
        fission_prompt,
        fission_delayed,
        precursors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nxs_jxs() -> (NxsArray, JxsArray) {
        let mut nxs = vec![0i64; 16];
        nxs[2] = 3; // NES
        nxs[3] = 1; // NTR
        nxs[4] = 1; // NR (angular reactions, elastic + 1 other => land len 2)
        let mut jxs = vec![0i64; 32];
        jxs[0] = 1; // ESZ origin
        jxs[2] = 16; // MTR
        jxs[3] = 17; // LQR
        jxs[4] = 18; // TYR
        jxs[5] = 19; // LSIG
        jxs[6] = 20; // SIG
        jxs[7] = 25; // LAND
        jxs[8] = 27; // AND
        (NxsArray::from_raw(nxs), JxsArray::from_raw(jxs))
    }

    #[test]
    fn decodes_total_elastic_and_one_reaction() {
        let (nxs, jxs) = sample_nxs_jxs();
        let mut values = vec![0.0; 15]; // ESZ: 5 * NES(3) = 15
        values[0..3].copy_from_slice(&[1.0, 2.0, 3.0]); // energy
        values[3..6].copy_from_slice(&[100.0, 150.0, 200.0]); // total
        values[6..9].copy_from_slice(&[0.1, 0.15, 0.2]); // disappearance
        values[9..12].copy_from_slice(&[5.0, 6.0, 7.0]); // elastic
        values[12..15].copy_from_slice(&[2.0, 4.0, 6.0]); // heating
        values.push(18.0); // MTR: fission
        values.push(0.0); // LQR: q=0
        values.push(1.0); // TYR: release=1
        values.push(1.0); // LSIG: offset=1 (relative to SIG origin)
        // SIG block at position 20: IE, NE, xs...
        values.push(1.0); // IE
        values.push(3.0); // NE
        values.extend([17.0, 38.0, 100.0]); // xs values
        // LAND block (2 entries: elastic, fission) at position 25
        values.push(1.0); // elastic location -> per-reaction AND header at relative offset 1
        values.push(0.0); // fission location -> isotropic
        // Elastic's own AND header at and_origin(27) + 1 - 1 = 27: NE=1, one
        // incident energy, one signed sub-location pointing to the tabulated
        // sub-table (spec §4.8).
        values.push(1.0); // NE
        values.push(2.0); // incident energy
        values.push(-4.0); // location: sub-table at and_origin(27) + 4 - 1 = 30
        values.push(2.0); // interpolation
        values.push(2.0); // npoints
        values.extend([-1.0, 1.0]); // angular points
        values.extend([0.5, 0.5]); // pdf
        values.extend([0.0, 1.0]); // cdf

        let xss = XssArray::new(values);
        let file = decode(&xss, nxs, jxs, "1001.80c".to_string(), 0.999, 2.53e-8).unwrap();
        assert!(file.reaction(1).is_some());
        assert!(file.reaction(2).is_some());
        let fission_xs = file.reaction(18).unwrap();
        assert_eq!(fission_xs.energy_points, vec![1.0, 2.0, 3.0]);
        assert_eq!(fission_xs.xs_values, vec![17.0, 38.0, 100.0]);
        let elastic = file.reaction(2).unwrap();
        assert_eq!(elastic.angular_flag, 1);
        assert_eq!(elastic.angular_dists.len(), 1);
        assert_eq!(elastic.angular_dists[0].angular_points, vec![-1.0, 1.0]);
    }
}
