use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "livability", version, about = "Livability reports for places in India")]
pub struct Args {
    /// Configuration file (default: livability.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the livability API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the place at the given position as if the map was clicked there
    Click {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Search a place by its name and report it
    Search {
        query: String,
    },
    /// Report the prediction and the alternatives of a city
    City {
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_click() {
        let args = Args::try_parse_from(["livability", "click", "--lat", "17.4", "--lng", "78.5"])
            .unwrap();
        assert!(args.config.is_none());
        assert!(matches!(args.command, Command::Click { lat, lng } if lat == 17.4 && lng == 78.5));
    }

    #[test]
    fn parse_search_with_options() {
        let args = Args::try_parse_from([
            "livability",
            "--config",
            "custom.toml",
            "--api-url",
            "http://localhost:5000/api",
            "search",
            "Navi Mumbai",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:5000/api"));
        assert!(matches!(args.command, Command::Search { query } if query == "Navi Mumbai"));
    }

    #[test]
    fn city_name_is_required() {
        assert!(Args::try_parse_from(["livability", "city"]).is_err());
    }
}
