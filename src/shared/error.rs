/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("elevator {id} does not exist (fleet has {n_elevators} elevators)")]
    InvalidIndex { id: usize, n_elevators: usize },

    #[error("a fleet needs at least one elevator")]
    EmptyFleet,

    #[error("a building needs at least one floor")]
    NoFloors,

    #[error("{requested} elevators requested, at most {max} are supported")]
    TooManyElevators { requested: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}
