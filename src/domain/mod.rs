//! Domain modules, one vertical slice per backend resource.

pub mod crypto;
pub mod currency;
pub mod stock;
pub mod topic;
