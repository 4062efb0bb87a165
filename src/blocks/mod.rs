//! Continuous-energy-neutron block-name catalog, used by
//! [`crate::decoder::transport`] for diagnostic logging during the block walk.

pub mod block_types;

pub use block_types::BlockType;
