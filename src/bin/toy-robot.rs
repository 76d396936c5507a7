// Line-driven shell for the toy robot.
//
// Reads one command per line from a file (or stdin) and prints the outcome
// of each. RUST_LOG controls diagnostic output.
use clap::Parser;
use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use toy_robot::command::EXAMPLES;
use toy_robot::core::DEFAULT_HISTORY_LIMIT;
use toy_robot::SimulationBuilder;

#[derive(Parser, Debug)]
#[command(version, about = "Drive a toy robot around a grid")]
struct Args {
    /// File of commands, one per line. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Grid width
    #[arg(long, default_value_t = 4)]
    width: i64,

    /// Grid height
    #[arg(long, default_value_t = 6)]
    height: i64,

    /// Number of recent transitions to keep in memory
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    history_limit: usize,

    /// Print each outcome as a JSON object
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut sim = SimulationBuilder::new()
        .grid(args.width, args.height)
        .history_limit(args.history_limit)
        .build()?;
    info!(
        "Started on a {}x{} grid at {}",
        args.width,
        args.height,
        sim.report()
    );

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => {
            eprintln!("Options: {}", EXAMPLES.join(" | "));
            Box::new(BufReader::new(io::stdin()))
        }
    };

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = sim.run_line(&line);
        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            println!("{}\n", outcome.render());
        }
    }

    debug!("History holds {} transitions", sim.history().len());
    Ok(())
}
