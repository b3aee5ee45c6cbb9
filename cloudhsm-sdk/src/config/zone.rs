//! Known Sakura Cloud zones.

use std::str::FromStr;

use super::ConfigError;

/// Zones the CloudHSM API is served from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Ishikari zone 1b.
    #[default]
    Is1b,
    /// Tokyo zone 1a.
    Tk1a,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Is1b => "is1b",
            Zone::Tk1a => "tk1a",
        }
    }

    /// Root URL of the API in this zone, with the trailing slash relative
    /// endpoint paths are joined onto.
    pub fn api_root_url(&self) -> &'static str {
        match self {
            Zone::Is1b => "https://secure.sakura.ad.jp/cloud/zone/is1b/api/cloud/1.1/",
            Zone::Tk1a => "https://secure.sakura.ad.jp/cloud/zone/tk1a/api/cloud/1.1/",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is1b" => Ok(Zone::Is1b),
            "tk1a" => Ok(Zone::Tk1a),
            other => Err(ConfigError::UnsupportedZone(other.to_owned())),
        }
    }
}
