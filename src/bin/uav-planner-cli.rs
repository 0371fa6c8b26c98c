use uav_planner::config::{get_config, set_config, Config};
use uav_planner::error::Result;
use uav_planner::geometry::sort_clockwise;
use uav_planner::planner_query::{PlanParameters, PlannerClient, DEFAULT_URL};
use uav_planner::session::PlanningSession;
use uav_planner::utils::json::{
    load_from_file, save_to_file, save_to_file_pretty,
};
use uav_planner::waypoint::{LatLng, Waypoint};

use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use std::time::Duration;

#[derive(Parser)]
struct ArgParser {
    #[command(subcommand)]
    command: Command,
    #[command(flatten)]
    config: Config,
}

#[derive(Clone, Args)]
struct SerializedOutput {
    /// File name to save result
    #[arg(short, long)]
    output: String,
    /// Pretty print result
    #[arg(short, long)]
    pretty: bool,
}

impl SerializedOutput {
    fn write_to_file<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize,
    {
        if self.pretty {
            save_to_file_pretty(data, &self.output)
        } else {
            save_to_file(data, &self.output)
        }
    }
}

#[derive(Clone, Args)]
struct ServiceArgs {
    /// Base URL of the planning service
    #[arg(short, long, default_value = DEFAULT_URL)]
    url: String,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl ServiceArgs {
    fn client(&self) -> Result<PlannerClient> {
        PlannerClient::new(&self.url, self.timeout.map(Duration::from_secs))
    }
}

#[derive(Clone, Subcommand)]
enum Command {
    /// Order waypoints clockwise around their centroid
    Sort {
        /// Waypoint list (JSON array of {id, position: {lat, lng}})
        #[arg(short, long)]
        input: String,
        #[command(flatten)]
        output: SerializedOutput,
    },
    /// Plan a flight path through the waypoints
    Plan {
        /// Waypoint list (JSON array of {id, position: {lat, lng}})
        #[arg(short, long)]
        input: String,
        /// Maximal flight time in minutes (max 40)
        #[arg(short, long)]
        time: f64,
        /// Flight velocity in km/h (max 70)
        #[arg(short = 's', long)]
        velocity: f64,
        #[command(flatten)]
        service: ServiceArgs,
        #[command(flatten)]
        output: SerializedOutput,
    },
    /// Detect the area covered by the waypoints
    DetectArea {
        /// Waypoint list (JSON array of {id, position: {lat, lng}})
        #[arg(short, long)]
        input: String,
        #[command(flatten)]
        service: ServiceArgs,
        #[command(flatten)]
        output: SerializedOutput,
    },
}

#[derive(Serialize)]
struct SessionOutput<'a> {
    waypoints: &'a [Waypoint],
    path: &'a [LatLng],
    area: &'a [LatLng],
}

impl<'a> From<&'a PlanningSession> for SessionOutput<'a> {
    fn from(session: &'a PlanningSession) -> Self {
        SessionOutput {
            waypoints: session.markers(),
            path: session.path(),
            area: session.area(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(get_config().log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = ArgParser::parse();
    set_config(args.config.clone())?;
    init_logging();

    match args.command {
        Command::Sort { input, output } => {
            let waypoints: Vec<Waypoint> = load_from_file(input)?;
            let sorted = sort_clockwise(&waypoints);
            info!("sorted {} waypoints", sorted.len());
            output.write_to_file(&sorted)?;
        }
        Command::Plan {
            input,
            time,
            velocity,
            service,
            output,
        } => {
            let params = PlanParameters::new(time, velocity)?;
            let client = service.client()?;
            let mut session =
                PlanningSession::with_markers(load_from_file(input)?);
            session.plan_path(&client, params).await?;
            output.write_to_file(&SessionOutput::from(&session))?;
        }
        Command::DetectArea {
            input,
            service,
            output,
        } => {
            let client = service.client()?;
            let mut session =
                PlanningSession::with_markers(load_from_file(input)?);
            session.detect_area(&client).await?;
            output.write_to_file(&SessionOutput::from(&session))?;
        }
    };

    Ok(())
}
