use crate::{
    Config, WindError, WindOutcome,
    clock::Clock,
    model::Coordinate,
    provider::nasa_power::NasaPowerProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod nasa_power;

#[async_trait]
pub trait WindProvider: Send + Sync + Debug {
    /// Fetch the wind for the hour that `clock` currently falls in.
    ///
    /// HTTP failures come back as [`WindOutcome::RemoteUnavailable`]; only
    /// transport faults and undecodable bodies are `Err`.
    async fn fetch_wind(
        &self,
        coordinate: Coordinate,
        clock: &dyn Clock,
    ) -> Result<WindOutcome, WindError>;
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Box<dyn WindProvider> {
    Box::new(NasaPowerProvider::with_endpoint(config.endpoint.as_str()))
}
