//! Enum of the continuous-energy-neutron ACE block names, used for diagnostic
//! logging during the transport block walk (spec §4.10).
//!
//! Grounded on the teacher's `blocks/block_types.rs`, unchanged in shape — the
//! names and their order are a property of the ACE format itself, not of any
//! particular decoder implementation.

use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum BlockType {
    ESZ,
    NU,
    MTR,
    LQR,
    TYR,
    LSIG,
    SIG,
    LAND,
    AND,
    LDLW,
    DLW,
    GPD,
    MTRP,
    LSIGP,
    SIGP,
    LANDP,
    ANDP,
    LDLWP,
    DLWP,
    YP,
    FIS,
    END,
    LUND,
    DNU,
    BDD,
    DNEDL,
    DNED,
    PTYPE,
    NTRO,
    NEXT,
}
