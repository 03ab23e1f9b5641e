/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, error, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Dispatcher;
use crate::shared::{CallDirection, DispatchError, Status};

/***************************************/
/*               Enums                 */
/***************************************/

/// Operations a driver can ask the simulator to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Pickup {
        floor: i32,
        direction: CallDirection,
    },
    Update {
        elevator: usize,
        current_floor: i32,
        destination_floor: i32,
    },
    Step,
    Status,
}

enum Event {
    CommandReceived(Command),
    Disconnected,
    Terminate,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Runs a `Dispatcher` on its own thread.
 *
 * Commands are handled strictly one at a time, so a status report can never
 * observe a fleet half way through a step or a pickup.
 *
 * # Fields
 * - `dispatcher`:      The fleet being simulated.
 * - `command_rx`:      Receives commands from the driver.
 * - `status_tx`:       Sends a snapshot for every `Command::Status`.
 * - `assignment_tx`:   Sends `(elevator, floor)` for every pickup.
 * - `error_tx`:        Sends rejected updates.
 * - `terminate_rx`:    Stops the loop.
 */
pub struct Simulator {
    dispatcher: Dispatcher,

    // Driver channels
    command_rx: cbc::Receiver<Command>,
    status_tx: cbc::Sender<Vec<Status>>,
    assignment_tx: cbc::Sender<(usize, i32)>,
    error_tx: cbc::Sender<DispatchError>,
    terminate_rx: cbc::Receiver<()>,

    tick: u64,
}

impl Simulator {
    pub fn new(
        dispatcher: Dispatcher,
        command_rx: cbc::Receiver<Command>,
        status_tx: cbc::Sender<Vec<Status>>,
        assignment_tx: cbc::Sender<(usize, i32)>,
        error_tx: cbc::Sender<DispatchError>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Simulator {
        Simulator {
            dispatcher,
            command_rx,
            status_tx,
            assignment_tx,
            error_tx,
            terminate_rx,
            tick: 0,
        }
    }

    /// Handle commands until terminated or until every command sender is
    /// dropped. Hands the fleet back for inspection.
    pub fn run(mut self) -> Dispatcher {
        info!(
            "simulator started with {} elevators",
            self.dispatcher.n_elevators()
        );

        loop {
            match self.wait_for_event() {
                Event::CommandReceived(command) => self.handle_command(command),
                Event::Disconnected => {
                    info!("command channel closed after {} ticks", self.tick);
                    break;
                }
                Event::Terminate => {
                    info!("simulator terminated after {} ticks", self.tick);
                    break;
                }
            }
        }

        self.dispatcher
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Pickup { floor, direction } => {
                let elevator = self.dispatcher.pickup(floor, direction);
                if self.assignment_tx.send((elevator, floor)).is_err() {
                    debug!("nobody is listening for assignments");
                }
            }

            Command::Update {
                elevator,
                current_floor,
                destination_floor,
            } => {
                if let Err(e) = self
                    .dispatcher
                    .update(elevator, current_floor, destination_floor)
                {
                    if self.error_tx.send(e).is_err() {
                        debug!("nobody is listening for errors");
                    }
                }
            }

            Command::Step => {
                self.dispatcher.step();
                self.tick += 1;
            }

            Command::Status => {
                if let Err(e) = self.status_tx.send(self.dispatcher.status()) {
                    error!("Failed to send status from simulator: {:?}", e);
                }
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.command_rx) -> command => {
                match command {
                    Ok(command) => Event::CommandReceived(command),
                    Err(_) => Event::Disconnected,
                }
            },

            recv(self.terminate_rx) -> _ => Event::Terminate,
        }
    }
}
