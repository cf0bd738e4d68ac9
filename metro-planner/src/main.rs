use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use metro_planner::cache::{CacheConfig, CacheKeyMode, UnknownCacheKeyMode};
use metro_planner::domain::{Passenger, SearchMode};
use metro_planner::fare::FareConfig;
use metro_planner::network::{MetroNetwork, NetworkDefinition, NetworkError, reference_network};
use metro_planner::planner::{
    AlternativeRoutes, PlannerConfig, PlannerError, RouteChangeRequest, RoutePlanner,
};

/// Path to a network definition JSON file. Unset uses the reference network.
const NETWORK_ENV: &str = "METRO_NETWORK";

/// Cache key mode: `pair` or `pair-and-mode`.
const CACHE_KEY_ENV: &str = "METRO_CACHE_KEY";

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    CacheKey(#[from] UnknownCacheKeyMode),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let network = load_network()?;
    let cache_config = cache_config()?;
    info!(
        stations = network.station_count(),
        edges = network.edge_count(),
        cache_key = ?cache_config.key_mode,
        "Metro network loaded"
    );

    let planner = RoutePlanner::with_config(
        network,
        PlannerConfig::default(),
        &cache_config,
        FareConfig::default(),
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.session(&planner)?;
    Ok(())
}

fn load_network() -> Result<MetroNetwork, AppError> {
    match std::env::var(NETWORK_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading network definition");
            Ok(NetworkDefinition::load(&path)?.build()?)
        }
        Err(_) => Ok(reference_network()),
    }
}

fn cache_config() -> Result<CacheConfig, AppError> {
    let mut config = CacheConfig::default();
    if let Ok(mode) = std::env::var(CACHE_KEY_ENV) {
        config.key_mode = mode.parse()?;
        if config.key_mode == CacheKeyMode::OrderedPair {
            warn!("Route cache keyed without search mode; route modes may collide");
        }
    }
    Ok(config)
}

/// Interactive session over any line-oriented input and output.
struct Console<R, W> {
    input: R,
    output: W,
}

/// The trip selected at the start of a session.
struct Trip {
    start: String,
    end: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn session(&mut self, planner: &RoutePlanner) -> io::Result<()> {
        let Some(mut passenger) = self.read_passenger()? else {
            return Ok(());
        };

        writeln!(self.output, "\nAvailable Stations:")?;
        for (i, name) in planner.station_names().iter().enumerate() {
            writeln!(self.output, "{:2}. {name}", i + 1)?;
        }

        let Some(trip) = self.read_trip(planner)? else {
            return Ok(());
        };

        loop {
            let Some(choice) = self.prompt(
                "\nChoose an option:\n\
                 1. Display Route Details\n\
                 2. Find Alternative Routes\n\
                 3. Find Minimal Transfer Path\n\
                 4. Change Route\n\
                 5. Exit",
            )?
            else {
                return Ok(());
            };

            let result = match choice.as_str() {
                "1" => self.show_route(planner, &trip),
                "2" => self.show_alternatives(planner, &trip, &passenger),
                "3" => self.show_minimal_transfer(planner, &trip, &mut passenger),
                "4" => match self.change_route(planner, &trip, &mut passenger) {
                    Ok(true) => Ok(()),
                    Ok(false) => return Ok(()),
                    Err(e) => Err(e),
                },
                "5" => {
                    writeln!(self.output, "Thank you for using Metro Route Optimization!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(ConsoleError::Io(e)) => return Err(e),
                Err(ConsoleError::Planner(e)) => {
                    writeln!(self.output, "An error occurred: {e}")?;
                    writeln!(self.output, "Please try again.")?;
                }
            }
        }
    }

    fn read_passenger(&mut self) -> io::Result<Option<Passenger>> {
        loop {
            let Some(name) = self.prompt("Enter name of passenger:")? else {
                return Ok(None);
            };
            let Some(age) = self.prompt("Enter age:")? else {
                return Ok(None);
            };
            let Some(phone) = self.prompt("Enter phone number (10 digits):")? else {
                return Ok(None);
            };
            let Some(student) = self.prompt("Are you a student? (yes/no):")? else {
                return Ok(None);
            };

            let Ok(age) = age.parse::<u32>() else {
                writeln!(self.output, "Error: age must be a whole number")?;
                writeln!(self.output, "Please try again.\n")?;
                continue;
            };

            match Passenger::builder(name, age, phone)
                .student(student.eq_ignore_ascii_case("yes"))
                .build()
            {
                Ok(passenger) => return Ok(Some(passenger)),
                Err(e) => {
                    writeln!(self.output, "Error: {e}")?;
                    writeln!(self.output, "Please try again.\n")?;
                }
            }
        }
    }

    /// Read a valid station name, upper-cased. `None` at end of input.
    fn read_station(&mut self, planner: &RoutePlanner, message: &str) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.prompt(message)? else {
                return Ok(None);
            };
            let name = name.to_uppercase();
            if planner.is_valid_station(&name) {
                return Ok(Some(name));
            }
            writeln!(self.output, "Invalid station name. Please try again.")?;
        }
    }

    fn read_trip(&mut self, planner: &RoutePlanner) -> io::Result<Option<Trip>> {
        loop {
            let Some(start) = self.read_station(planner, "\nEnter start station name:")? else {
                return Ok(None);
            };
            let Some(end) = self.read_station(planner, "Enter end station name:")? else {
                return Ok(None);
            };
            if start == end {
                writeln!(
                    self.output,
                    "Start and end stations cannot be the same. Please try again."
                )?;
                continue;
            }
            return Ok(Some(Trip { start, end }));
        }
    }

    fn show_route(&mut self, planner: &RoutePlanner, trip: &Trip) -> Result<(), ConsoleError> {
        match planner.route_details(&trip.start, &trip.end, SearchMode::TimeOptimized)? {
            Some(route) => writeln!(self.output, "{route}")?,
            None => writeln!(self.output, "No path found.")?,
        }
        Ok(())
    }

    fn show_alternatives(
        &mut self,
        planner: &RoutePlanner,
        trip: &Trip,
        passenger: &Passenger,
    ) -> Result<(), ConsoleError> {
        let routes =
            planner.find_alternative_routes_for(&trip.start, &trip.end, passenger.rider_class())?;

        let Some(shortest) = routes.shortest() else {
            writeln!(
                self.output,
                "No route found between {} and {}",
                trip.start, trip.end
            )?;
            return Ok(());
        };

        writeln!(self.output, "\nShortest Route:\n{shortest}\n")?;
        writeln!(self.output, "Alternative Routes:")?;
        if let AlternativeRoutes::NoAlternatives { .. } = routes {
            writeln!(
                self.output,
                "No alternative routes found within acceptable distance."
            )?;
        }
        for route in routes.alternatives() {
            writeln!(self.output, "{route}\n")?;
        }
        Ok(())
    }

    fn show_minimal_transfer(
        &mut self,
        planner: &RoutePlanner,
        trip: &Trip,
        passenger: &mut Passenger,
    ) -> Result<(), ConsoleError> {
        match planner.find_minimal_transfer_path(passenger, &trip.start, &trip.end)? {
            Some(transfer) => {
                writeln!(self.output, "{}", transfer.route)?;
                writeln!(self.output, "Price: {}", transfer.quick_estimate)?;
                writeln!(self.output, "{}", transfer.bill)?;
            }
            None => writeln!(self.output, "No path found.")?,
        }
        Ok(())
    }

    /// Returns `Ok(false)` if input ran out.
    fn change_route(
        &mut self,
        planner: &RoutePlanner,
        trip: &Trip,
        passenger: &mut Passenger,
    ) -> Result<bool, ConsoleError> {
        let Some(midpoint) = self.prompt("Enter station that you want to get off at:")? else {
            return Ok(false);
        };
        let midpoint = midpoint.to_uppercase();
        if !planner.is_valid_station(&midpoint) {
            writeln!(self.output, "Invalid station name.")?;
            return Ok(true);
        }
        if !planner.is_on_path(&trip.start, &midpoint, &trip.end)? {
            writeln!(self.output, "Station {midpoint} does not lie on your path")?;
            return Ok(true);
        }

        let Some(new_destination) = self.prompt("Enter new destination station:")? else {
            return Ok(false);
        };
        let new_destination = new_destination.to_uppercase();
        if !planner.is_valid_station(&new_destination) {
            writeln!(self.output, "Invalid station name.")?;
            return Ok(true);
        }

        let change = planner.change_route(
            passenger,
            &RouteChangeRequest {
                origin: &trip.start,
                destination: &trip.end,
                midpoint: &midpoint,
                new_destination: &new_destination,
            },
        )?;

        match &change.onward {
            Some(onward) => {
                writeln!(self.output, "{}", onward.route)?;
                writeln!(self.output, "Price: {}", onward.quick_estimate)?;
            }
            None => writeln!(self.output, "No path found.")?,
        }
        writeln!(self.output, "{}", change.bill)?;
        Ok(true)
    }
}

/// Failure of a single menu action. Planner errors are reported and the
/// menu continues; i/o errors end the session.
#[derive(Debug, thiserror::Error)]
enum ConsoleError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
