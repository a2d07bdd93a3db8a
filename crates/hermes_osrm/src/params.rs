use crate::client::OsrmError;

pub const DEFAULT_OSRM_HOST: &str = "0.0.0.0";
pub const DEFAULT_OSRM_PORT: u16 = 5000;
pub const DEFAULT_OSRM_PROFILE: &str = "car";

const OSRM_HOST_ENV_VAR: &str = "OSRM_HOST";
const OSRM_PORT_ENV_VAR: &str = "OSRM_PORT";
const OSRM_PROFILE_ENV_VAR: &str = "OSRM_PROFILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsrmClientParams {
    pub host: String,
    /// `None` leaves the port out of the URL.
    pub port: Option<u16>,
    pub profile: String,
}

impl Default for OsrmClientParams {
    fn default() -> Self {
        Self {
            host: DEFAULT_OSRM_HOST.to_owned(),
            port: Some(DEFAULT_OSRM_PORT),
            profile: DEFAULT_OSRM_PROFILE.to_owned(),
        }
    }
}

impl OsrmClientParams {
    /// Reads `OSRM_HOST`, `OSRM_PORT` and `OSRM_PROFILE`, falling back to the
    /// defaults for unset variables. An empty `OSRM_PORT` removes the port.
    pub fn from_env() -> Result<Self, OsrmError> {
        let defaults = Self::default();

        let port = match std::env::var(OSRM_PORT_ENV_VAR) {
            Ok(port) => parse_port(&port)?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: std::env::var(OSRM_HOST_ENV_VAR).unwrap_or(defaults.host),
            port,
            profile: std::env::var(OSRM_PROFILE_ENV_VAR).unwrap_or(defaults.profile),
        })
    }

    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("http://{}:{}", self.host, port),
            None => format!("http://{}", self.host),
        }
    }
}

fn parse_port(value: &str) -> Result<Option<u16>, OsrmError> {
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse()
        .map(Some)
        .map_err(|source| OsrmError::InvalidPort {
            value: value.to_owned(),
            source,
        })
}
