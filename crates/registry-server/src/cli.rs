use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "registry-server")]
#[command(about = "User registry HTTP service")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations and exit
    Migrate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Server,
    Migrate,
}

pub fn parse_args() -> RunMode {
    run_mode(Cli::parse())
}

fn run_mode(cli: Cli) -> RunMode {
    match cli.command {
        None => RunMode::Server,
        Some(Command::Migrate) => RunMode::Migrate,
    }
}
