//! Constrained Random CLI
//!
//! Prints generated identifiers, nicknames or passwords, one per line.

use clap::{Args, Parser, Subcommand, ValueEnum};
use constrained_random::{
    ConstraintPasswordGenerator, FileConfig, GeneratorError, PasswordPolicy,
    PhoneticNicknameGenerator, Strategy, StructuredIdGenerator,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "constrained-random", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of strings to print.
    #[arg(short = 'n', long)]
    count: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Grouped identifiers such as A1B2-3C4D-E5F6-7G8H.
    Id,
    /// Pronounceable 8-letter nicknames.
    Nick,
    /// Passwords with exact letter, digit and special counts.
    Pass(PassArgs),
}

#[derive(Debug, Args)]
struct PassArgs {
    #[arg(long)]
    letters: Option<usize>,
    #[arg(long)]
    digits: Option<usize>,
    #[arg(long)]
    specials: Option<usize>,
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Placement,
    Shuffle,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Placement => Strategy::Placement,
            StrategyArg::Shuffle => Strategy::Shuffle,
        }
    }
}

fn main() {
    // Logs go to stderr so stdout carries only generated strings
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let count = cli.count.unwrap_or(config.output.count);
    debug!("constrained-random v{}", constrained_random::VERSION);

    match cli.command {
        Command::Id => {
            let mut generator = StructuredIdGenerator::new();
            emit(count, || generator.generate())?;
        }
        Command::Nick => {
            let mut generator = PhoneticNicknameGenerator::new()?;
            emit(count, || generator.generate())?;
        }
        Command::Pass(args) => {
            let policy = override_policy(config.password, &args);
            let mut generator = ConstraintPasswordGenerator::new(policy)?;
            emit(count, || generator.generate())?;
        }
    }
    Ok(())
}

fn override_policy(base: PasswordPolicy, args: &PassArgs) -> PasswordPolicy {
    PasswordPolicy {
        letters: args.letters.unwrap_or(base.letters),
        digits: args.digits.unwrap_or(base.digits),
        specials: args.specials.unwrap_or(base.specials),
        strategy: args.strategy.map(Strategy::from).unwrap_or(base.strategy),
    }
}

fn emit(
    count: u32,
    mut generate: impl FnMut() -> Result<String, GeneratorError>,
) -> Result<(), GeneratorError> {
    for _ in 0..count {
        println!("{}", generate()?);
    }
    Ok(())
}
