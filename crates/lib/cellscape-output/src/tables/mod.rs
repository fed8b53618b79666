pub mod mobiles;
pub mod shifts;
pub mod sites;
