//! Command implementations for the poptap CLI

pub mod serve;
pub mod status;
pub mod tap;
