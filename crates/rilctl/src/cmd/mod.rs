use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;
use crate::schema::RadioState;

pub mod echo;
pub mod send;
pub mod state;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the loop-back check against the server.
    Echo(EchoArgs),
    /// Query or change the simulated radio state.
    State(StateArgs),
    /// Send a single control message and print the response.
    Send(SendArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Echo(args) => echo::run(args, format),
        Command::State(args) => state::run(args, format),
        Command::Send(args) => send::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Server host.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Control-channel port. The simulator listens on 54312; forward it
    /// from a device with e.g. `adb forward tcp:11111 tcp:54312`.
    #[arg(long, default_value_t = 54312)]
    pub port: u16,
}

#[derive(Args, Debug)]
pub struct EchoArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Correlation token for the request.
    #[arg(long, default_value_t = 1234567890123)]
    pub token: u64,
    /// Radio-state value to loop back.
    #[arg(long, default_value_t = 1)]
    pub state: u32,
}

#[derive(Args, Debug)]
pub struct StateArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    #[command(subcommand)]
    pub action: StateAction,
}

#[derive(Subcommand, Debug)]
pub enum StateAction {
    /// Fetch the current radio state.
    Get(StateGetArgs),
    /// Move the simulator to a new radio state.
    Set(StateSetArgs),
}

#[derive(Args, Debug)]
pub struct StateGetArgs {
    /// Correlation token for the request.
    #[arg(long, default_value_t = 4)]
    pub token: u64,
}

#[derive(Args, Debug)]
pub struct StateSetArgs {
    /// Target radio state.
    pub state: RadioState,
    /// Correlation token for the request.
    #[arg(long, default_value_t = 5)]
    pub token: u64,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
    /// Command id to send.
    #[arg(long, short = 'c')]
    pub command: u32,
    /// Correlation token; defaults to a time-derived value.
    #[arg(long)]
    pub token: Option<u64>,
    /// JSON payload (validated before sending).
    #[arg(long, conflicts_with_all = ["data", "file"])]
    pub json: Option<String>,
    /// Raw string payload.
    #[arg(long, conflicts_with_all = ["json", "file"])]
    pub data: Option<String>,
    /// Read payload bytes from a file.
    #[arg(long, conflicts_with_all = ["json", "data"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build information.
    #[arg(long)]
    pub extended: bool,
}
