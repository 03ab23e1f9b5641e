/* 3rd party libraries */
use clap::{Arg, Command as Cli};
use crossbeam_channel as cbc;
use log::{info, warn};
use std::path::Path;
use std::thread::{sleep, Builder};
use std::time::Duration;

/* Custom libraries */
use elevator_dispatch::config;
use elevator_dispatch::shared::{DispatchError, Status};
use elevator_dispatch::simulation::{Command, Scenario, Simulator};
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::Dispatcher;

/* Main */
fn main() {
    env_logger::init();

    let matches = Cli::new("elevator-dispatch")
        .about("Simulates a bank of elevators one tick at a time")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("steps")
                .short('s')
                .long("steps")
                .takes_value(true)
                .help("Number of ticks to simulate"),
        )
        .arg(
            Arg::new("elevators")
                .short('e')
                .long("elevators")
                .takes_value(true)
                .help("Number of elevators in the fleet"),
        )
        .arg(
            Arg::new("floors")
                .short('f')
                .long("floors")
                .takes_value(true)
                .help("Number of floors in the building"),
        )
        .get_matches();

    // Load the configuration, command line flags win over the file
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(Path::new(config_path)));
    if let Some(steps) = matches.value_of("steps") {
        config.simulation.n_steps = unwrap_or_exit!(steps.parse::<u64>());
    }
    if let Some(elevators) = matches.value_of("elevators") {
        config.simulation.n_elevators = unwrap_or_exit!(elevators.parse::<usize>());
    }
    if let Some(floors) = matches.value_of("floors") {
        config.simulation.n_floors = unwrap_or_exit!(floors.parse::<u32>());
    }

    let dispatcher = unwrap_or_exit!(Dispatcher::new(
        config.simulation.n_elevators,
        config.simulation.n_floors
    ));
    let scenario = Scenario::from_config(&config);

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (status_tx, status_rx) = cbc::unbounded::<Vec<Status>>();
    let (assignment_tx, assignment_rx) = cbc::unbounded::<(usize, i32)>();
    let (error_tx, error_rx) = cbc::unbounded::<DispatchError>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the simulator
    let simulator = Simulator::new(
        dispatcher,
        command_rx,
        status_tx,
        assignment_tx,
        error_tx,
        terminate_rx,
    );
    let simulator_thread = Builder::new().name("simulator".into());
    let simulator_handle = unwrap_or_exit!(simulator_thread.spawn(move || simulator.run()));

    let tick_time = Duration::from_millis(config.simulation.tick_time);
    for tick in 0..config.simulation.n_steps {
        for command in scenario.commands_for(tick) {
            unwrap_or_exit!(command_tx.send(command));
        }
        unwrap_or_exit!(command_tx.send(Command::Step));
        unwrap_or_exit!(command_tx.send(Command::Status));

        let status = unwrap_or_exit!(status_rx.recv());
        for (elevator, floor) in assignment_rx.try_iter() {
            info!("tick {}: floor {} assigned to elevator {}", tick, floor, elevator);
        }
        for e in error_rx.try_iter() {
            warn!("tick {}: {}", tick, e);
        }
        println!("{}", unwrap_or_exit!(serde_json::to_string(&status)));

        sleep(tick_time);
    }

    // Cleanup
    unwrap_or_exit!(terminate_tx.send(()));
    match simulator_handle.join() {
        Ok(dispatcher) => info!(
            "simulation finished, {} elevators still have stops queued",
            dispatcher
                .status()
                .iter()
                .filter(|elevator| !elevator.destinations.is_empty())
                .count()
        ),
        Err(_) => warn!("simulator thread panicked"),
    }
}
