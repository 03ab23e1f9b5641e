/*
 * Unit tests for dispatcher module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_dispatcher_init
 *  - test_dispatcher_rejects_bad_fleet
 *  - test_cost_idle
 *  - test_cost_same_direction_ahead
 *  - test_cost_same_direction_passed
 *  - test_cost_opposite_direction
 *  - test_cost_descending_same_direction
 *  - test_cost_moving_without_destinations
 *  - test_dispatcher_pickup_below_descending_car
 *  - test_dispatcher_pickup_tie_break
 *  - test_dispatcher_pickup_prefers_cheapest
 *  - test_dispatcher_update
 *  - test_dispatcher_update_invalid_index
 *  - test_dispatcher_step_all
 *  - test_dispatcher_status_snapshot_isolation
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod dispatcher_tests {
    use crate::dispatcher::{cost, Dispatcher, MAX_ELEVATORS};
    use crate::elevator::Elevator;
    use crate::shared::CallDirection;
    use crate::shared::Direction::{Down, Idle, Up};
    use crate::shared::DispatchError;
    use std::collections::BTreeSet;

    fn setup_dispatcher() -> Dispatcher {
        Dispatcher::new(3, 20).unwrap()
    }

    #[test]
    fn test_dispatcher_init() {
        // Arrange
        let dispatcher = setup_dispatcher();

        // Act
        let status = dispatcher.status();

        // Assert
        assert_eq!(dispatcher.n_elevators(), 3);
        assert_eq!(dispatcher.n_floors(), 20);
        assert_eq!(status.len(), 3);
        for (index, elevator) in status.iter().enumerate() {
            assert_eq!(elevator.id, index);
            assert_eq!(elevator.current_floor, 1);
            assert_eq!(elevator.direction, Idle);
            assert!(elevator.destinations.is_empty());
        }
    }

    #[test]
    fn test_dispatcher_rejects_bad_fleet() {
        // Act
        let empty = Dispatcher::new(0, 10);
        let too_many = Dispatcher::new(MAX_ELEVATORS + 1, 10);
        let no_floors = Dispatcher::new(2, 0);
        let largest = Dispatcher::new(MAX_ELEVATORS, 10);

        // Assert
        assert_eq!(empty.unwrap_err(), DispatchError::EmptyFleet);
        assert_eq!(
            too_many.unwrap_err(),
            DispatchError::TooManyElevators {
                requested: MAX_ELEVATORS + 1,
                max: MAX_ELEVATORS
            }
        );
        assert_eq!(no_floors.unwrap_err(), DispatchError::NoFloors);
        assert_eq!(largest.unwrap().n_elevators(), MAX_ELEVATORS);
    }

    #[test]
    fn test_cost_idle() {
        // Purpose: An idle car costs plain distance, whichever way the call points

        // Arrange
        let at_ground = Elevator::new(0);
        let high_up = Elevator::test_place(1, 9, Idle, &[]);

        // Assert
        assert_eq!(cost(&at_ground, 5, CallDirection::Up), 4);
        assert_eq!(cost(&at_ground, 5, CallDirection::Down), 4);
        assert_eq!(cost(&high_up, 5, CallDirection::Up), 4);
        assert_eq!(cost(&high_up, 9, CallDirection::Down), 0);
    }

    #[test]
    fn test_cost_same_direction_ahead() {
        // Arrange
        let elevator = Elevator::test_place(0, 3, Up, &[10]);

        // Assert
        assert_eq!(cost(&elevator, 6, CallDirection::Up), 3);
        assert_eq!(cost(&elevator, 3, CallDirection::Up), 0);
    }

    #[test]
    fn test_cost_same_direction_passed() {
        // Purpose: The car runs to its top stop and comes back down

        // Arrange
        let elevator = Elevator::test_place(0, 8, Up, &[10]);

        // Assert
        assert_eq!(cost(&elevator, 4, CallDirection::Up), 8);
    }

    #[test]
    fn test_cost_opposite_direction() {
        // Arrange
        let descending = Elevator::test_place(0, 9, Down, &[3]);
        let ascending = Elevator::test_place(1, 3, Up, &[8]);

        // Assert
        // 2 * (9 - 3) - (9 - 6)
        assert_eq!(cost(&descending, 6, CallDirection::Up), 9);
        // 2 * (9 - 3) - (9 - 1), the call lies below the bottom stop
        assert_eq!(cost(&descending, 1, CallDirection::Up), 4);
        // Up to 8, then back down to 5
        assert_eq!(cost(&ascending, 5, CallDirection::Down), 8);
    }

    #[test]
    fn test_cost_descending_same_direction() {
        // Purpose: A descending car below a downward call costs plain distance

        // Arrange
        let low = Elevator::test_place(0, 4, Down, &[2]);
        let lower = Elevator::test_place(1, 2, Down, &[1]);
        let high = Elevator::test_place(2, 9, Down, &[3]);

        // Assert
        assert_eq!(cost(&low, 7, CallDirection::Down), 3);
        assert_eq!(cost(&lower, 5, CallDirection::Down), 3);
        // 2 * (3 - 6) - (9 - 6)
        assert_eq!(cost(&high, 6, CallDirection::Down), -9);
    }

    #[test]
    fn test_dispatcher_pickup_below_descending_car() {
        // Purpose: A descending car beats a nearer idle car when its round trip is shorter

        // Arrange
        let mut dispatcher = Dispatcher::new(2, 20).unwrap();
        dispatcher.test_set_elevator(Elevator::test_place(0, 6, Idle, &[]));
        dispatcher.test_set_elevator(Elevator::test_place(1, 9, Down, &[3]));

        // Act
        let id = dispatcher.pickup(1, CallDirection::Up);

        // Assert
        assert_eq!(cost(dispatcher.elevator(0).unwrap(), 1, CallDirection::Up), 5);
        assert_eq!(id, 1);
        assert_eq!(dispatcher.elevator(1).unwrap().destinations(), &BTreeSet::from([1, 3]));
    }

    #[test]
    fn test_cost_moving_without_destinations() {
        // Purpose: A moving car with no stops left has no extremum, cost falls back to distance

        // Arrange
        let elevator = Elevator::test_place(0, 6, Up, &[]);
        let behind = Elevator::test_place(1, 6, Up, &[2]);

        // Assert
        assert_eq!(cost(&elevator, 2, CallDirection::Up), 4);
        assert_eq!(cost(&behind, 2, CallDirection::Down), 4);
    }

    #[test]
    fn test_dispatcher_pickup_tie_break() {
        // Purpose: All-idle fleet at floor 1, the first car wins the tie

        // Arrange
        let mut dispatcher = setup_dispatcher();

        // Act
        let id = dispatcher.pickup(5, CallDirection::Up);

        // Assert
        assert_eq!(id, 0);
        assert_eq!(cost(dispatcher.elevator(0).unwrap(), 5, CallDirection::Up), 4);
        assert_eq!(dispatcher.status()[0].destinations, BTreeSet::from([5]));
        assert!(dispatcher.status()[1].destinations.is_empty());
        assert!(dispatcher.status()[2].destinations.is_empty());
        assert_eq!(dispatcher.status()[0].direction, Idle);
    }

    #[test]
    fn test_dispatcher_pickup_prefers_cheapest() {
        // Arrange
        let mut dispatcher = setup_dispatcher();
        dispatcher.test_set_elevator(Elevator::test_place(0, 8, Up, &[10]));
        dispatcher.test_set_elevator(Elevator::test_place(1, 5, Up, &[10]));

        // Act
        let passed_call = dispatcher.select_elevator(4, CallDirection::Up);
        let ahead_call = dispatcher.pickup(6, CallDirection::Up);

        // Assert
        // Elevator 2 is idle at floor 1: cost 3 beats 8 (elevator 0) and 11 (elevator 1)
        assert_eq!(passed_call, 2);
        assert_eq!(ahead_call, 1);
        assert_eq!(
            dispatcher.elevator(1).unwrap().destinations(),
            &BTreeSet::from([6, 10])
        );
    }

    #[test]
    fn test_dispatcher_update() {
        // Purpose: Boarding replaces the pickup stop with the passenger's destination

        // Arrange
        let mut dispatcher = setup_dispatcher();
        dispatcher.pickup(5, CallDirection::Up);

        // Act
        let result = dispatcher.update(0, 5, 12);

        // Assert
        assert_eq!(result, Ok(()));
        assert_eq!(dispatcher.status()[0].destinations, BTreeSet::from([12]));
    }

    #[test]
    fn test_dispatcher_update_invalid_index() {
        // Arrange
        let mut dispatcher = setup_dispatcher();

        // Act
        let result = dispatcher.update(3, 1, 7);

        // Assert
        assert_eq!(
            result,
            Err(DispatchError::InvalidIndex { id: 3, n_elevators: 3 })
        );
        assert!(dispatcher.elevator(3).is_err());
        assert!(dispatcher
            .status()
            .iter()
            .all(|elevator| elevator.destinations.is_empty()));
    }

    #[test]
    fn test_dispatcher_step_all() {
        // Arrange
        let mut dispatcher = setup_dispatcher();
        dispatcher.update(0, 1, 3).unwrap();
        dispatcher.test_set_elevator(Elevator::test_place(2, 6, Down, &[4]));

        // Act
        dispatcher.step();
        dispatcher.step();
        let status = dispatcher.status();

        // Assert
        assert_eq!(status[0].current_floor, 2);
        assert_eq!(status[0].direction, Up);
        assert_eq!(status[1].current_floor, 1);
        assert_eq!(status[1].direction, Idle);
        assert_eq!(status[2].current_floor, 4);
        assert_eq!(status[2].direction, Idle);
        assert!(status[2].destinations.is_empty());
    }

    #[test]
    fn test_dispatcher_status_snapshot_isolation() {
        // Purpose: Mutating a status snapshot never reaches the live fleet

        // Arrange
        let mut dispatcher = setup_dispatcher();
        dispatcher.pickup(7, CallDirection::Down);
        let original = dispatcher.status();

        // Act
        let mut snapshot = dispatcher.status();
        snapshot[0].destinations.insert(2);
        snapshot[0].destinations.remove(&7);
        snapshot[1].current_floor = 15;

        // Assert
        assert_ne!(snapshot, original);
        assert_eq!(dispatcher.status(), original);
    }
}
