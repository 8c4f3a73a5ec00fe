use anyhow::Result;
use clap::Parser;

use livability_core::prelude::{Coordinate, PageController, Regions};
use livability_gateways::{GoogleGeocoder, HttpLivabilityGateway};

mod cli;
mod config;
mod terminal;

use self::{
    cli::{Args, Command},
    config::{Config, GeocodingGateway},
    terminal::{Geocoder, LoggingMap, Panel},
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(api_url) = args.api_url {
        cfg.backend.api_url = api_url;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cfg, args.command))
}

async fn run(cfg: Config, command: Command) -> Result<()> {
    let Config {
        backend,
        geocoding,
        map,
    } = cfg;

    log::info!("Use livability API at {}", backend.api_url);
    let gateway = HttpLivabilityGateway::new(backend.api_url, backend.request_timeout)?;
    let geocoder = match geocoding.gateway {
        Some(GeocodingGateway::Google { api_key }) => {
            Some(GoogleGeocoder::new(api_key, backend.request_timeout)?)
        }
        None => {
            log::warn!("No geocoding gateway configured");
            None
        }
    };

    let panels = [
        Panel::new("Livability"),
        Panel::new("Nearby facilities"),
        Panel::new("Map popup"),
        Panel::new("Prediction"),
        Panel::new("Alternatives"),
    ];
    let [summary, facilities, popup, prediction, alternatives] = &panels;
    let regions = Regions {
        summary,
        facilities,
        popup,
        prediction: Some(prediction),
        alternatives: Some(alternatives),
    };
    let controller = PageController::new(
        gateway,
        Geocoder(geocoder),
        LoggingMap,
        regions,
        map.initial_view_state(),
    )
    .with_search_zoom(map.search_zoom);

    match command {
        Command::Click { lat, lng } => {
            controller.on_map_click(Coordinate { lat, lng }).await;
        }
        Command::Search { query } => {
            controller.on_place_selected(&query).await;
        }
        Command::City { name } => {
            controller.report_city(name.trim()).await;
        }
    }

    for panel in &panels {
        if let Some(content) = panel.content() {
            println!("## {}\n{content}\n", panel.title());
        }
    }
    Ok(())
}
