use std::process::ExitCode;

use clap::Parser;
use tracing::{Instrument, debug, info, span};
use tracing_subscriber::EnvFilter;
use weather_lookup::{
    Lookup, OpenWeatherClient, WeatherConfig,
    terminal::{self, TerminalDisplay, TerminalErrors},
};

/// Look up the current weather for a city.
#[derive(Parser, Debug)]
#[command(name = "weather-lookup", version)]
struct Cli {
    /// City name, e.g. `New York`; starts an interactive prompt when omitted
    city: Vec<String>,

    /// Weather endpoint, overrides WEATHER_BASE_URL
    #[arg(long)]
    base_url: Option<String>,
}

/// Initializes tracing, reads the configuration and either runs a single lookup
/// for the city given on the command line or keeps prompting for cities until
/// the user enters `exit`.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = WeatherConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = OpenWeatherClient::new(config);

    let mut display = TerminalDisplay::stdout();
    let mut errors = TerminalErrors::stderr();

    if !cli.city.is_empty() {
        let city = cli.city.join(" ");
        let result = Lookup::new(&client, &mut display, &mut errors)
            .run(&city)
            .instrument(span!(tracing::Level::INFO, "lookup"))
            .await;
        return Ok(if result.is_ok() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    info!("Enter a city name to look up its weather. Send `exit` to stop");

    // each lookup finishes before the next line is read
    let mut buffer = String::new();
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout();
    while let Some(input) = terminal::read_city(&mut stdin, &mut stdout, &mut buffer)? {
        // failures are already shown in the error region
        if let Err(e) = Lookup::new(&client, &mut display, &mut errors)
            .run(input)
            .instrument(span!(tracing::Level::INFO, "lookup"))
            .await
        {
            debug!("Lookup ended with {:?} error: {}", e.kind(), e);
        }
    }

    Ok(ExitCode::SUCCESS)
}
