/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, trace, warn};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::cost::cost;
use crate::elevator::Elevator;
use crate::shared::{CallDirection, DispatchError, Status};

/// Largest fleet a single dispatcher will manage.
pub const MAX_ELEVATORS: usize = 16;

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Owns the fleet and decides which car answers each hall call.
 *
 * # Fields
 * - `elevators`:   The fleet, in id order. Sized once, never resized.
 * - `n_floors`:    Building height. Informational, floors are not checked against it.
 */
#[derive(Debug, Clone)]
pub struct Dispatcher {
    elevators: Vec<Elevator>,
    n_floors: u32,
}

impl Dispatcher {
    pub fn new(n_elevators: usize, n_floors: u32) -> Result<Dispatcher, DispatchError> {
        if n_elevators == 0 {
            return Err(DispatchError::EmptyFleet);
        }
        if n_elevators > MAX_ELEVATORS {
            return Err(DispatchError::TooManyElevators {
                requested: n_elevators,
                max: MAX_ELEVATORS,
            });
        }
        if n_floors == 0 {
            return Err(DispatchError::NoFloors);
        }

        debug!("creating fleet of {} elevators for {} floors", n_elevators, n_floors);
        Ok(Dispatcher {
            elevators: (0..n_elevators).map(Elevator::new).collect(),
            n_floors,
        })
    }

    pub fn n_elevators(&self) -> usize {
        self.elevators.len()
    }

    pub fn n_floors(&self) -> u32 {
        self.n_floors
    }

    pub fn elevator(&self, id: usize) -> Result<&Elevator, DispatchError> {
        self.elevators.get(id).ok_or(DispatchError::InvalidIndex {
            id,
            n_elevators: self.elevators.len(),
        })
    }

    /// Assign a hall call to the cheapest car and queue the call floor on it.
    /// Returns the id of the car that got it.
    pub fn pickup(&mut self, floor: i32, direction: CallDirection) -> usize {
        let id = self.select_elevator(floor, direction);
        self.elevators[id].add_destination(floor);
        id
    }

    /// Index of the car with the lowest cost for this call. Ties go to the
    /// lowest index.
    pub fn select_elevator(&self, floor: i32, direction: CallDirection) -> usize {
        let mut best_id = 0;
        let mut best_cost = i64::MAX;

        for elevator in self.elevators.iter() {
            let candidate = cost(elevator, floor, direction);
            trace!(
                "pickup {} {}: elevator {} costs {}",
                floor,
                direction,
                elevator.id(),
                candidate
            );
            if candidate < best_cost {
                best_id = elevator.id();
                best_cost = candidate;
            }
        }

        info!(
            "pickup at floor {} going {} assigned to elevator {} (cost {})",
            floor, direction, best_id, best_cost
        );
        best_id
    }

    /// A passenger boarded `id` at `current_floor` and asked for
    /// `destination_floor`.
    pub fn update(
        &mut self,
        id: usize,
        current_floor: i32,
        destination_floor: i32,
    ) -> Result<(), DispatchError> {
        let n_elevators = self.elevators.len();
        let Some(elevator) = self.elevators.get_mut(id) else {
            warn!("update for unknown elevator {} ignored", id);
            return Err(DispatchError::InvalidIndex { id, n_elevators });
        };

        elevator.add_destination(destination_floor);
        elevator.remove_destination(current_floor);
        Ok(())
    }

    pub fn status(&self) -> Vec<Status> {
        self.elevators.iter().map(Elevator::status).collect()
    }

    pub fn step(&mut self) {
        for elevator in self.elevators.iter_mut() {
            elevator.step();
        }
    }

    #[cfg(test)]
    pub(crate) fn test_set_elevator(&mut self, elevator: Elevator) {
        let id = elevator.id();
        self.elevators[id] = elevator;
    }
}
