use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use cellscape_core::error::ScenarioError;

/// Every deployment type from the ITU-R M.2135 evaluation guidelines.
#[derive(Deserialize, Debug, Hash, Copy, Clone, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum DeploymentType {
    IndoorHotspot,
    UrbanMicro,
    UrbanMacro,
    SuburbanMacro,
    RuralMacro,
}

impl DeploymentType {
    pub const ALL: [DeploymentType; 5] = [
        DeploymentType::IndoorHotspot,
        DeploymentType::UrbanMicro,
        DeploymentType::UrbanMacro,
        DeploymentType::SuburbanMacro,
        DeploymentType::RuralMacro,
    ];

    pub fn params(&self) -> &'static DeploymentParams {
        match self {
            DeploymentType::IndoorHotspot => &INDOOR_HOTSPOT,
            DeploymentType::UrbanMicro => &URBAN_MICRO,
            DeploymentType::UrbanMacro => &URBAN_MACRO,
            DeploymentType::SuburbanMacro => &SUBURBAN_MACRO,
            DeploymentType::RuralMacro => &RURAL_MACRO,
        }
    }

    pub fn is_indoor(&self) -> bool {
        matches!(self, DeploymentType::IndoorHotspot)
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            DeploymentType::IndoorHotspot => "InH",
            DeploymentType::UrbanMicro => "UMi",
            DeploymentType::UrbanMacro => "UMa",
            DeploymentType::SuburbanMacro => "SMa",
            DeploymentType::RuralMacro => "RMa",
        }
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for DeploymentType {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inh" | "indoor_hotspot" | "indoorhotspot" => Ok(DeploymentType::IndoorHotspot),
            "umi" | "urban_micro" | "urbanmicro" => Ok(DeploymentType::UrbanMicro),
            "uma" | "urban_macro" | "urbanmacro" => Ok(DeploymentType::UrbanMacro),
            "sma" | "suburban_macro" | "suburbanmacro" => Ok(DeploymentType::SuburbanMacro),
            "rma" | "rural_macro" | "ruralmacro" => Ok(DeploymentType::RuralMacro),
            _ => Err(ScenarioError::UnknownDeployment(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeploymentType {
    type Error = ScenarioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DeploymentType::from_str(&value)
    }
}

/// Constants of one deployment type. Downtilt is absent indoors, where the
/// guidelines do not define one.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentParams {
    pub inter_site_distance: f64,
    pub bs_height: f64,
    pub downtilt_deg: Option<f64>,
    pub bs_total_tx_power_dbm: f64,
    pub prb_count: u32,
    pub ms_total_tx_power_dbm: f64,
    pub center_freq_hz: f64,
    pub ms_speed_kmh: f64,
    /// Minimum x-y distance between a mobile and any site (M.2135 Table 8-2).
    pub min_distance: f64,
}

impl DeploymentParams {
    /// Base station power per physical resource block of 180 kHz.
    pub fn bs_per_prb_tx_power_dbm(&self) -> f64 {
        self.bs_total_tx_power_dbm - 10.0 * f64::from(self.prb_count).log10()
    }

    pub fn downtilt_rad(&self) -> Option<f64> {
        self.downtilt_deg.map(f64::to_radians)
    }
}

// 21 dBm over 20 MHz, i.e. 100 PRBs.
static INDOOR_HOTSPOT: DeploymentParams = DeploymentParams {
    inter_site_distance: 60.0,
    bs_height: 6.0,
    downtilt_deg: None,
    bs_total_tx_power_dbm: 21.0,
    prb_count: 100,
    ms_total_tx_power_dbm: 21.0,
    center_freq_hz: 3.4e9,
    ms_speed_kmh: 3.0,
    min_distance: 3.0,
};

static URBAN_MICRO: DeploymentParams = DeploymentParams {
    inter_site_distance: 200.0,
    bs_height: 10.0,
    downtilt_deg: Some(12.0),
    bs_total_tx_power_dbm: 41.0,
    prb_count: 50,
    ms_total_tx_power_dbm: 24.0,
    center_freq_hz: 2.5e9,
    ms_speed_kmh: 3.0,
    min_distance: 10.0,
};

static URBAN_MACRO: DeploymentParams = DeploymentParams {
    inter_site_distance: 500.0,
    bs_height: 25.0,
    downtilt_deg: Some(12.0),
    bs_total_tx_power_dbm: 46.0,
    prb_count: 50,
    ms_total_tx_power_dbm: 24.0,
    center_freq_hz: 2.0e9,
    ms_speed_kmh: 30.0,
    min_distance: 25.0,
};

// Indoor users of SMa should move at 3 km/h; all mobiles get the outdoor speed here.
static SUBURBAN_MACRO: DeploymentParams = DeploymentParams {
    inter_site_distance: 1299.0,
    bs_height: 35.0,
    downtilt_deg: Some(6.0),
    bs_total_tx_power_dbm: 46.0,
    prb_count: 50,
    ms_total_tx_power_dbm: 24.0,
    center_freq_hz: 2.0e9,
    ms_speed_kmh: 90.0,
    min_distance: 35.0,
};

static RURAL_MACRO: DeploymentParams = DeploymentParams {
    inter_site_distance: 1732.0,
    bs_height: 35.0,
    downtilt_deg: Some(6.0),
    bs_total_tx_power_dbm: 46.0,
    prb_count: 50,
    ms_total_tx_power_dbm: 24.0,
    center_freq_hz: 800e6,
    ms_speed_kmh: 120.0,
    min_distance: 35.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_case_insensitive() {
        assert_eq!(
            DeploymentType::from_str("UMa").unwrap(),
            DeploymentType::UrbanMacro
        );
        assert_eq!(
            DeploymentType::from_str("inh").unwrap(),
            DeploymentType::IndoorHotspot
        );
        assert_eq!(
            DeploymentType::from_str("rural_macro").unwrap(),
            DeploymentType::RuralMacro
        );
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        let err = DeploymentType::from_str("Dense").unwrap_err();
        assert_eq!(err, ScenarioError::UnknownDeployment("Dense".to_string()));
    }

    #[test]
    fn test_per_prb_power() {
        let params = DeploymentType::UrbanMacro.params();
        assert!((params.bs_per_prb_tx_power_dbm() - 29.0103).abs() < 1e-4);
        let params = DeploymentType::IndoorHotspot.params();
        assert!((params.bs_per_prb_tx_power_dbm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_min_distance_table() {
        let expected = [3.0, 10.0, 25.0, 35.0, 35.0];
        for (deployment, min_distance) in DeploymentType::ALL.iter().zip(expected) {
            assert_eq!(deployment.params().min_distance, min_distance);
        }
    }

    #[test]
    fn test_sector_radius_exceeds_min_distance() {
        for deployment in DeploymentType::ALL {
            let params = deployment.params();
            assert!(params.min_distance < params.inter_site_distance / 3.0);
        }
    }

    #[test]
    fn test_only_indoor_lacks_downtilt() {
        for deployment in DeploymentType::ALL {
            assert_eq!(
                deployment.params().downtilt_deg.is_none(),
                deployment.is_indoor()
            );
        }
    }
}
