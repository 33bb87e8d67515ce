//! # types
//!
//! `types` is the module containing all the useful public structs of the crate

pub mod abs_time;
pub mod errors;
pub mod frame;
pub mod log;
pub mod record;
