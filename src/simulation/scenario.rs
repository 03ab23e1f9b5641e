use crate::config::{BoardingConfig, Config, PickupConfig};
use crate::simulation::Command;

/// Timed script of hall calls and boardings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pickups: Vec<PickupConfig>,
    boardings: Vec<BoardingConfig>,
}

impl Scenario {
    pub fn new(pickups: Vec<PickupConfig>, boardings: Vec<BoardingConfig>) -> Scenario {
        Scenario { pickups, boardings }
    }

    pub fn from_config(config: &Config) -> Scenario {
        Scenario::new(config.pickups.clone(), config.boardings.clone())
    }

    /// Commands due at `tick`. Pickups come before boardings, each in file order.
    pub fn commands_for(&self, tick: u64) -> Vec<Command> {
        let pickups = self
            .pickups
            .iter()
            .filter(|pickup| pickup.tick == tick)
            .map(|pickup| Command::Pickup {
                floor: pickup.floor,
                direction: pickup.direction,
            });

        let boardings = self
            .boardings
            .iter()
            .filter(|boarding| boarding.tick == tick)
            .map(|boarding| Command::Update {
                elevator: boarding.elevator,
                current_floor: boarding.floor,
                destination_floor: boarding.destination,
            });

        pickups.chain(boardings).collect()
    }
}
