use crate::elevator::Elevator;
use crate::shared::{CallDirection, Direction};

/// Estimated number of floors `elevator` travels before it can serve a
/// `direction` call at `floor`. Lower is better, and the value can be negative
/// for a car descending toward a call below it.
///
/// - Idle car: plain distance.
/// - Same direction, car at or below the call: `floor − car`.
/// - Same direction, car above the call: `2 × (top − floor) − (car − floor)`.
/// - Descending car, upward call: `2 × (car − bottom) − (car − floor)`.
/// - Ascending car, downward call: run up to the top stop, then back down to
///   the call.
///
/// A moving car with no stops left has no extremum and costs plain distance.
pub fn cost(elevator: &Elevator, floor: i32, direction: CallDirection) -> i64 {
    let car_floor = i64::from(elevator.current_floor());
    let floor = i64::from(floor);
    let top = elevator.top_destination().map(i64::from);
    let bottom = elevator.bottom_destination().map(i64::from);

    let same_direction = Direction::from(direction) == elevator.direction();

    match elevator.direction() {
        Direction::Idle => (car_floor - floor).abs(),
        _ if same_direction && car_floor <= floor => floor - car_floor,
        _ if same_direction => top.map_or((car_floor - floor).abs(), |top| {
            2 * (top - floor) - (car_floor - floor)
        }),
        Direction::Down => bottom.map_or((car_floor - floor).abs(), |bottom| {
            2 * (car_floor - bottom) - (car_floor - floor)
        }),
        Direction::Up => top.map_or((car_floor - floor).abs(), |top| {
            let turn = top.max(car_floor);
            (turn - car_floor) + (turn - floor).abs()
        }),
    }
}
