use crate::shared::{Direction, Status};
use log::{debug, trace};
use std::collections::BTreeSet;

/**
 * One elevator car.
 *
 * The car moves at most one floor per call to `step`. Its direction is only
 * ever changed by `step`, which derives it from the remaining destinations;
 * adding or removing destinations leaves the direction alone until the next tick.
 *
 * # Fields
 * - `id`:              Fleet index, fixed at construction.
 * - `current_floor`:   Floor the car is at. Starts at 1.
 * - `direction`:       Travel state used by the next tick.
 * - `destinations`:    Floors still to visit. A set, so repeated inserts are inert.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    id: usize,
    current_floor: i32,
    direction: Direction,
    destinations: BTreeSet<i32>,
}

impl Elevator {
    pub fn new(id: usize) -> Elevator {
        Elevator {
            id,
            current_floor: 1,
            direction: Direction::Idle,
            destinations: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn destinations(&self) -> &BTreeSet<i32> {
        &self.destinations
    }

    pub fn top_destination(&self) -> Option<i32> {
        self.destinations.last().copied()
    }

    pub fn bottom_destination(&self) -> Option<i32> {
        self.destinations.first().copied()
    }

    pub fn status(&self) -> Status {
        Status {
            id: self.id,
            current_floor: self.current_floor,
            direction: self.direction,
            destinations: self.destinations.clone(),
        }
    }

    // No bounds check, floor limits belong to whoever feeds the fleet.
    pub fn add_destination(&mut self, floor: i32) {
        self.destinations.insert(floor);
    }

    pub fn remove_destination(&mut self, floor: i32) {
        self.destinations.remove(&floor);
    }

    /// Advance one tick: move, serve the floor arrived at, then pick the next
    /// direction from what is left.
    pub fn step(&mut self) {
        self.current_floor += self.direction.to_delta();

        if self.destinations.remove(&self.current_floor) {
            trace!("elevator {} arrived at floor {}", self.id, self.current_floor);
        }

        let next_direction = self.choose_direction();
        if next_direction != self.direction {
            debug!(
                "elevator {} at floor {}: {} -> {}",
                self.id, self.current_floor, self.direction, next_direction
            );
            self.direction = next_direction;
        }
    }

    fn choose_direction(&self) -> Direction {
        let above = self.has_destinations_in_direction(Direction::Up);
        let below = self.has_destinations_in_direction(Direction::Down);

        // Continue while there are stops ahead, otherwise turn around
        match self.direction {
            Direction::Up if above => Direction::Up,
            Direction::Up if below => Direction::Down,
            Direction::Down if below => Direction::Down,
            Direction::Down if above => Direction::Up,
            Direction::Idle if above => Direction::Up,
            Direction::Idle if below => Direction::Down,
            _ => Direction::Idle,
        }
    }

    fn has_destinations_in_direction(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self
                .top_destination()
                .map_or(false, |top| top > self.current_floor),
            Direction::Down => self
                .bottom_destination()
                .map_or(false, |bottom| bottom < self.current_floor),
            Direction::Idle => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn test_place(
        id: usize,
        floor: i32,
        direction: Direction,
        destinations: &[i32],
    ) -> Elevator {
        Elevator {
            id,
            current_floor: floor,
            direction,
            destinations: destinations.iter().copied().collect(),
        }
    }
}
