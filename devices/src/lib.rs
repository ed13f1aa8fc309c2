pub mod dingoo_a320;
pub mod gcw_zero;
pub mod registry;

pub use dingoo_a320::PROFILE as DINGOO_A320;
pub use gcw_zero::PROFILE as GCW_ZERO;
