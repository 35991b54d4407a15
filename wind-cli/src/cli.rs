use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use tracing::debug;
use wind_core::{Clock, Config, Coordinate, FixedClock, SystemClock, WindProvider};

use crate::output::report_lines;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wind", version, about = "Current wind speed and direction from NASA POWER")]
pub struct Cli {
    /// Defaults to `show` with the configured location.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default location and endpoint interactively.
    Configure,

    /// Show the wind for the current UTC hour.
    Show {
        /// Latitude in degrees; overrides the configured location.
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude in degrees; overrides the configured location.
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// RFC 3339 instant to use instead of the system clock.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Show { lat: None, lon: None, at: None }) {
            Command::Configure => configure(config)?,
            Command::Show { lat, lon, at } => {
                let (coordinate, clock) = resolve(&config, lat, lon, at);
                let provider = config.provider();

                for line in show(provider.as_ref(), coordinate, clock.as_ref()).await? {
                    println!("{line}");
                }
            }
        }

        Ok(())
    }
}

/// Flags win over the configured location; `--at` pins the clock.
fn resolve(
    config: &Config,
    lat: Option<f64>,
    lon: Option<f64>,
    at: Option<DateTime<Utc>>,
) -> (Coordinate, Box<dyn Clock>) {
    let coordinate = Coordinate::new(
        lat.unwrap_or(config.location.latitude),
        lon.unwrap_or(config.location.longitude),
    );
    let clock: Box<dyn Clock> = match at {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock),
    };

    (coordinate, clock)
}

async fn show(
    provider: &dyn WindProvider,
    coordinate: Coordinate,
    clock: &dyn Clock,
) -> anyhow::Result<Vec<String>> {
    let outcome = provider
        .fetch_wind(coordinate, clock)
        .await
        .context("Could not reach the wind data service")?;

    debug!(?outcome, "fetch finished");
    Ok(report_lines(&outcome))
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.location.latitude)
        .with_error_message("Please type a number, e.g. 33.64")
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.location.longitude)
        .with_error_message("Please type a number, e.g. -84.43")
        .prompt()?;

    let endpoint = Text::new("Endpoint:").with_default(&config.endpoint).prompt()?;

    config.location = Coordinate::new(latitude, longitude);
    config.endpoint = endpoint;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };
    use wind_core::NasaPowerProvider;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 14, 47, 33).unwrap()
    }

    /// Local stand-in for NASA POWER answering a single request with `body`.
    async fn stub_provider(status: &'static str, body: &'static str) -> NasaPowerProvider {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        NasaPowerProvider::with_client(http, format!("http://{addr}/api/application/windrose/point"))
    }

    #[test]
    fn bare_invocation_uses_default_point() {
        let (coordinate, _) = resolve(&Config::default(), None, None, None);
        assert_eq!(coordinate, Coordinate::new(33.64, -84.43));
    }

    #[test]
    fn configured_location_is_used_without_flags() {
        let cfg = Config { location: Coordinate::new(52.37, 4.89), ..Config::default() };

        let (coordinate, _) = resolve(&cfg, None, None, None);
        assert_eq!(coordinate, Coordinate::new(52.37, 4.89));
    }

    #[test]
    fn lat_flag_overrides_only_latitude() {
        let cfg = Config { location: Coordinate::new(52.37, 4.89), ..Config::default() };

        let (coordinate, _) = resolve(&cfg, Some(-33.87), None, None);
        assert_eq!(coordinate, Coordinate::new(-33.87, 4.89));
    }

    #[test]
    fn lon_flag_overrides_only_longitude() {
        let cfg = Config { location: Coordinate::new(52.37, 4.89), ..Config::default() };

        let (coordinate, _) = resolve(&cfg, None, Some(151.21), None);
        assert_eq!(coordinate, Coordinate::new(52.37, 151.21));
    }

    #[test]
    fn at_flag_pins_the_clock() {
        let (_, clock) = resolve(&Config::default(), None, None, Some(instant()));
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn without_at_flag_the_system_clock_is_used() {
        let before = Utc::now();
        let (_, clock) = resolve(&Config::default(), None, None, None);
        let now = clock.now();

        assert!(now >= before && now <= Utc::now());
    }

    #[tokio::test]
    async fn show_prints_reading_for_default_point() {
        let provider = stub_provider(
            "200 OK",
            r#"{"WS10M": {"20240115:14": 3.2}, "WD10M": {"20240115:14": 180.0}}"#,
        )
        .await;
        let (coordinate, clock) = resolve(&Config::default(), None, None, Some(instant()));

        let lines = show(&provider, coordinate, clock.as_ref()).await.unwrap();
        assert_eq!(lines, vec!["Current Wind Speed: 3.2 m/s", "Current Wind Direction: 180.0°"]);
    }

    #[tokio::test]
    async fn show_reports_missing_hour() {
        let provider = stub_provider(
            "200 OK",
            r#"{"WS10M": {"20240115:13": 3.2}, "WD10M": {"20240115:14": 180.0}}"#,
        )
        .await;

        let lines = show(&provider, Coordinate::DEFAULT, &FixedClock::new(instant())).await.unwrap();
        assert_eq!(lines, vec!["Could not fetch wind data."]);
    }

    #[tokio::test]
    async fn show_reports_http_failure() {
        let provider = stub_provider("500 Internal Server Error", "{}").await;

        let lines = show(&provider, Coordinate::DEFAULT, &FixedClock::new(instant())).await.unwrap();
        assert_eq!(lines, vec!["Error fetching wind data! (HTTP 500)", "Could not fetch wind data."]);
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["wind"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_accepts_negative_coordinates_and_instant() {
        let cli = Cli::try_parse_from([
            "wind",
            "show",
            "--lat",
            "-33.87",
            "--lon",
            "-84.43",
            "--at",
            "2024-01-15T14:47:33Z",
        ])
        .unwrap();

        let Some(Command::Show { lat, lon, at }) = cli.command else {
            panic!("expected show command");
        };
        assert_eq!(lat, Some(-33.87));
        assert_eq!(lon, Some(-84.43));
        assert_eq!(at, Some(instant()));
    }
}
