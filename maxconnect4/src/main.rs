use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use connect4::{load_board, PlayerRole};
use maxconnect4::{
    error_messages, run_one_move, BoardReport, FixedColumn, MoveOutcome, MovePicker, RandomPicker,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info", global = true)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Command {
    /// Load a board, play one move on it and save the result
    OneMove {
        /// Path to the board to play on
        input: PathBuf,

        /// Where to save the board after the move
        output: PathBuf,

        /// Play this column (0 to 6) instead of picking one at random
        #[arg(short, long, allow_negative_numbers = true)]
        column: Option<i8>,

        /// Who makes the next move
        #[arg(short, long, value_enum, default_value_t = FirstTurn::Computer)]
        first: FirstTurn,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print a board along with its scores
    Show {
        /// Path to the board
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstTurn {
    Computer,
    Human,
}

impl From<FirstTurn> for PlayerRole {
    fn from(first: FirstTurn) -> PlayerRole {
        match first {
            FirstTurn::Computer => PlayerRole::Computer,
            FirstTurn::Human => PlayerRole::Human,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let result = match args.command {
        Command::OneMove {
            input,
            output,
            column,
            first,
            seed,
        } => {
            let mut picker: Box<dyn MovePicker> = match column {
                Some(column) => Box::new(FixedColumn(column)),
                None => {
                    // Get a random seed
                    let seed = seed.unwrap_or_else(rand::random);
                    info!(seed);
                    Box::new(RandomPicker::new(StdRng::seed_from_u64(seed)))
                }
            };
            one_move(input, output, first.into(), picker.as_mut())
        }
        Command::Show { input, json } => show(input, json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            for message in error_messages(&*err) {
                error!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn one_move(
    input: PathBuf,
    output: PathBuf,
    first_turn: PlayerRole,
    picker: &mut dyn MovePicker,
) -> anyhow::Result<()> {
    let (board, outcome) = run_one_move(&input, &output, first_turn, picker)?;
    match outcome {
        MoveOutcome::Played { column, piece } => {
            println!("Player {} played column {}", piece, column);
        }
        MoveOutcome::BoardFull => {
            println!("The board is full, game over");
        }
    }
    println!("{}", board);
    println!("{}", BoardReport::new(&board));
    Ok(())
}

fn show(input: PathBuf, json: bool) -> anyhow::Result<()> {
    let board = load_board(&input)
        .with_context(|| format!("Could not load the board from '{}'", input.display()))?;
    let report = BoardReport::new(&board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", board);
        println!("{}", report);
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
