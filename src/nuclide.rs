//! The common read-only surface over a decoded ACE table, regardless of which NTY
//! produced it.
//!
//! The original source expresses this as a class hierarchy rooted at `AceFile`,
//! with `NeutronTransportFile`/`NeutronDosimetryFile`/`PhotoatomicAceFile` as
//! subclasses sharing the base's `dump`/NXS/JXS/reaction accessors. Rust has no
//! inheritance; a closed sum type over the three decoders plus a thin accessor
//! layer is the idiomatic equivalent (spec §3 "Nuclide (file dispatcher output)").

use crate::arrays::{JxsArray, NxsArray};
use crate::cross_section::CrossSection;
use crate::decoder::dosimetry::DosimetryFile;
use crate::decoder::photoatomic::PhotoatomicFile;
use crate::decoder::transport::TransportFile;
use crate::fission::{FissionNeutronData, PrecursorData};

/// A decoded ACE table, tagged by which per-NTY decoder produced it.
#[derive(Debug, Clone)]
pub enum NuclideFile {
    Transport(TransportFile),
    Dosimetry(DosimetryFile),
    Photoatomic(PhotoatomicFile),
}

impl NuclideFile {
    pub fn id(&self) -> &str {
        match self {
            NuclideFile::Transport(f) => &f.id,
            NuclideFile::Dosimetry(f) => &f.id,
            NuclideFile::Photoatomic(f) => &f.id,
        }
    }

    pub fn awr(&self) -> f64 {
        match self {
            NuclideFile::Transport(f) => f.awr,
            NuclideFile::Dosimetry(f) => f.awr,
            NuclideFile::Photoatomic(f) => f.awr,
        }
    }

    pub fn temperature_mev(&self) -> f64 {
        match self {
            NuclideFile::Transport(f) => f.temperature_mev,
            NuclideFile::Dosimetry(f) => f.temperature_mev,
            NuclideFile::Photoatomic(f) => f.temperature_mev,
        }
    }

    pub fn nxs(&self) -> &NxsArray {
        match self {
            NuclideFile::Transport(f) => &f.nxs,
            NuclideFile::Dosimetry(f) => &f.nxs,
            NuclideFile::Photoatomic(f) => &f.nxs,
        }
    }

    pub fn jxs(&self) -> &JxsArray {
        match self {
            NuclideFile::Transport(f) => &f.jxs,
            NuclideFile::Dosimetry(f) => &f.jxs,
            NuclideFile::Photoatomic(f) => &f.jxs,
        }
    }

    pub fn reactions(&self) -> impl Iterator<Item = &CrossSection> {
        match self {
            NuclideFile::Transport(f) => f.reactions.iter(),
            NuclideFile::Dosimetry(f) => f.reactions.iter(),
            NuclideFile::Photoatomic(f) => f.reactions.iter(),
        }
    }

    pub fn reaction(&self, mt: i32) -> Option<&CrossSection> {
        self.reactions().find(|r| r.reaction.mt_number() == mt)
    }

    /// Total fission-neutron yield, if this is a transport file with a fission
    /// channel. `None` for dosimetry/photoatomic tables and for fissionable
    /// transport files that store only prompt/delayed yields separately.
    pub fn fission(&self) -> Option<&FissionNeutronData> {
        match self {
            NuclideFile::Transport(f) => f.fission.as_ref(),
            _ => None,
        }
    }

    pub fn fission_prompt(&self) -> Option<&FissionNeutronData> {
        match self {
            NuclideFile::Transport(f) => f.fission_prompt.as_ref(),
            _ => None,
        }
    }

    pub fn fission_delayed(&self) -> Option<&FissionNeutronData> {
        match self {
            NuclideFile::Transport(f) => f.fission_delayed.as_ref(),
            _ => None,
        }
    }

    pub fn precursors(&self) -> &[PrecursorData] {
        match self {
            NuclideFile::Transport(f) => &f.precursors,
            _ => &[],
        }
    }

    /// Downcast to the transport decoder's concrete output, for callers that need
    /// transport-only fields (energy grid, heating numbers) not exposed generically.
    pub fn as_transport(&self) -> Option<&TransportFile> {
        match self {
            NuclideFile::Transport(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_dosimetry(&self) -> Option<&DosimetryFile> {
        match self {
            NuclideFile::Dosimetry(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_photoatomic(&self) -> Option<&PhotoatomicFile> {
        match self {
            NuclideFile::Photoatomic(f) => Some(f),
            _ => None,
        }
    }
}
