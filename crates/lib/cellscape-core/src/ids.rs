use std::fmt;
use std::fmt::Debug;

use serde::Deserialize;

/// Index of a site in the order the site layout produced it.
#[derive(Deserialize, Default, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct SiteId(u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(f: u64) -> Self {
        Self(f)
    }
}

impl From<usize> for SiteId {
    fn from(f: usize) -> Self {
        Self(f as u64)
    }
}

impl SiteId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// Index of a mobile in the placement result.
#[derive(Deserialize, Default, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct MobileId(u64);

impl fmt::Display for MobileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for MobileId {
    fn from(f: usize) -> Self {
        Self(f as u64)
    }
}

impl MobileId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
