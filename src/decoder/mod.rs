//! Per-NTY decoders: continuous-energy neutron transport, neutron dosimetry,
//! and continuous-energy photoatomic (spec §4.10-§4.12).

pub mod dosimetry;
pub mod photoatomic;
pub mod transport;
