//! Series utilities

pub mod postprocess;
