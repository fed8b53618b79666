pub mod hexagon;
pub mod sector;
pub mod wraparound;
