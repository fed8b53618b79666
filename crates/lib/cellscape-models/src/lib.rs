#![forbid(unsafe_code)]

pub mod dist;
pub mod geometry;
pub mod placement;
pub mod scenario;
pub mod sites;
