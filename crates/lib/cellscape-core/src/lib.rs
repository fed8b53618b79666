#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod ids;
pub mod position;
