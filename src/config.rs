/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{CallDirection, ConfigError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub pickups: Vec<PickupConfig>,
    #[serde(default)]
    pub boardings: Vec<BoardingConfig>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub n_elevators: usize,
    pub n_floors: u32,
    pub n_steps: u64,
    pub tick_time: u64,
}

/// Hall call issued at `tick`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PickupConfig {
    pub tick: u64,
    pub floor: i32,
    pub direction: CallDirection,
}

/// Passenger boarding `elevator` at `floor` and pressing `destination`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BoardingConfig {
    pub tick: u64,
    pub elevator: usize,
    pub floor: i32,
    pub destination: i32,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
