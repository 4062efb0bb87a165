#![allow(non_snake_case, clippy::upper_case_acronyms)]

mod angular_distribution;
mod arrays;
mod blocks;
mod cross_section;
mod decoder;
mod dispatcher;
mod error;
mod fission;
mod header;
mod identifier;
mod interpolation;
mod nuclide;
mod pool;
mod reaction;
mod seeker;
mod source;
mod tokens;
mod xsdir;

pub use angular_distribution::AngularDistribution;
pub use arrays::{JxsArray, NxsArray};
pub use cross_section::CrossSection;
pub use decoder::dosimetry::DosimetryFile;
pub use decoder::photoatomic::{ComptonProfile, PhotoatomicFile};
pub use decoder::transport::TransportFile;
pub use dispatcher::open;
pub use error::{AceError, Result};
pub use fission::{FissionNeutronData, PrecursorData};
pub use header::AceHeader;
pub use identifier::{is_szax, is_zaidx, Nty};
pub use interpolation::{InterpolationRegion, InterpolationScheme, InterpolationTable};
pub use nuclide::NuclideFile;
pub use pool::NuclidePool;
pub use reaction::Reaction;
pub use xsdir::{XsDir, XsInfo};
