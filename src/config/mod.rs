use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::{anyhow, Result};

use livability_core::prelude::{is_valid_coordinate, Coordinate, ViewState};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "livability.toml";

const ENV_NAME_API_URL: &str = "LIVABILITY_API_URL";
const ENV_NAME_GOOGLE_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug)]
pub struct Config {
    pub backend: Backend,
    pub geocoding: Geocoding,
    pub map: Map,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let cfg = Self::try_from(raw_config)?;
        Ok(cfg.with_overrides(
            env::var(ENV_NAME_API_URL).ok(),
            env::var(ENV_NAME_GOOGLE_API_KEY).ok(),
        ))
    }

    #[must_use]
    pub fn with_overrides(mut self, api_url: Option<String>, google_api_key: Option<String>) -> Self {
        if let Some(api_url) = api_url.filter(|url| !url.trim().is_empty()) {
            self.backend.api_url = api_url;
        }
        if let Some(api_key) = google_api_key.filter(|key| !key.trim().is_empty()) {
            self.geocoding.gateway = Some(GeocodingGateway::Google { api_key });
        }
        self
    }
}

#[derive(Debug)]
pub struct Backend {
    pub api_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

#[derive(Debug, Clone)]
pub enum GeocodingGateway {
    Google { api_key: String },
}

#[derive(Debug)]
pub struct Map {
    pub default_center: Coordinate,
    pub default_zoom: f64,
    pub search_zoom: f64,
}

impl Map {
    pub fn initial_view_state(&self) -> ViewState {
        ViewState::new(self.default_center, self.default_zoom)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            backend,
            geocoding,
            gateway,
            map,
        } = from;

        let raw::Backend {
            api_url,
            request_timeout,
        } = backend.unwrap_or_default();
        if api_url.trim().is_empty() {
            return Err(anyhow!("No backend API URL defined"));
        }
        let backend = Backend {
            api_url,
            request_timeout,
        };

        let geo_gateway = match geocoding.and_then(|g| g.gateway) {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::Google => {
                        let raw::Google { api_key } = gateway.google.ok_or_else(|| {
                            anyhow!("Missing 'google' gateway configuration")
                        })?;
                        log::info!("Use Google geocoding gateway");
                        GeocodingGateway::Google { api_key }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
        };

        let raw::Map {
            default_lat,
            default_lng,
            default_zoom,
            search_zoom,
        } = map.unwrap_or_default();
        let default_center = Coordinate {
            lat: default_lat,
            lng: default_lng,
        };
        if !is_valid_coordinate(default_center) {
            return Err(anyhow!("Invalid default map center {default_center:?}"));
        }
        let map = Map {
            default_center,
            default_zoom,
            search_zoom,
        };

        Ok(Self {
            backend,
            geocoding,
            map,
        })
    }
}
