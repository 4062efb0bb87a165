//! Neutron dosimetry decoder: MTR/LSIG/SIG only, no fission, no angular data
//! (spec §4.11).
//!
//! Grounded on `neutrondosimetryfile.cpp::readXss`: `N_release_list` and
//! `Qval_list` are always-zero placeholders ("dosimetry library has no
//! neutron production"), and a non-zero `NR` interpolation-region count in the
//! per-reaction SIG sub-block is accepted with a warning rather than
//! rejected — lin-lin is applied regardless (Open Question decision #2 in
//! `DESIGN.md`).

use crate::arrays::{JxsArray, NxsArray};
use crate::cross_section::CrossSection;
use crate::error::Result;
use crate::reaction::{self, Reaction};
use crate::tokens::XssArray;

#[derive(Debug, Clone)]
pub struct DosimetryFile {
    pub id: String,
    pub awr: f64,
    pub temperature_mev: f64,
    pub nxs: NxsArray,
    pub jxs: JxsArray,
    pub reactions: Vec<CrossSection>,
}

impl DosimetryFile {
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
) -> Result<DosimetryFile> {
    let ntr = nxs.get(4)? as usize;
    let mut reactions = Vec::with_capacity(ntr);

    if ntr > 0 {
        let mtr_origin = jxs.get(3)? as usize;
        let mt_numbers = xss.slice_i64(mtr_origin, ntr)?;

        let lsig_origin = jxs.get(6)? as usize;
        let sig_offsets = xss.slice_i64(lsig_origin, ntr)?;

        let sig_origin = jxs.get(7)? as usize;
        for i in 0..ntr {
            let mt = mt_numbers[i] as i32;
            let pos = sig_origin + sig_offsets[i] as usize - 1;
            let nr = xss.get_i64(pos)? as usize;
            let mut cursor = pos + 1;
            if nr != 0 {
                log::warn!(
                    "dosimetry reaction MT{mt}: only lin-lin interpolation is implemented, but NR={nr}; proceeding with lin-lin"
                );
                // skip the NBT/INT region-boundary arrays; only lin-lin is applied downstream.
                cursor += 2 * nr;
            }
            let ne = xss.get_i64(cursor)? as usize;
            cursor += 1;
            let energies = xss.slice(cursor, ne)?;
            cursor += ne;
            let xs_values = xss.slice(cursor, ne)?;
            reactions.push(CrossSection::new(energies, xs_values, reaction::from_mt(mt), 0, 0.0, 0, 0)?);
        }
    }

    Ok(DosimetryFile { id, awr, temperature_mev, nxs, jxs, reactions })
}
