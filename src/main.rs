use anyhow::{anyhow, Result};
use geocrab::error::Error::InvalidCoordinateArg;
use geocrab::{Config, GeoPoint, Resolver, SharedConfig};
use is_terminal::IsTerminal;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_init();

    let mut args = std::env::args();
    let program_name = args.next().unwrap_or("geocrab".to_string());
    let (Some(config_file), Some(latitude), Some(longitude)) =
        (args.next(), args.next(), args.next())
    else {
        return Err(anyhow!("usage: {program_name} /path/to/config.json <latitude> <longitude>"));
    };

    let config = config_init(&config_file)?;
    let query = GeoPoint::try_new(parse_coordinate(&latitude)?, parse_coordinate(&longitude)?)?;

    let resolver = Resolver::new(config);
    let records = resolver.resolve(query);
    for record in resolver.records_for(&records) {
        tracing::debug!("{record:?}");
    }

    let output = if std::io::stdout().is_terminal() {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{output}");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geocrab=info".into()),
        )
        .init();
}

fn config_init(config_file: &str) -> Result<SharedConfig> {
    let config = Config::try_from_file(config_file)?;
    tracing::info!("loaded {} hosts from {config_file}", config.hosts.len());
    Ok(Arc::new(config))
}

fn parse_coordinate(arg: &str) -> Result<f64> {
    arg.trim()
        .parse()
        .map_err(|_| InvalidCoordinateArg(arg.to_string()).into())
}
