//! Sortbench CLI: reads selectors from stdin and reports to stdout.

use clap::Parser;
use log::LevelFilter;
use sortbench::core::BUFFER_LEN;
use sortbench::harness::{Harness, HarnessConfig};
use std::io::{self, BufWriter};

#[derive(Parser)]
#[command(
    name = "sortbench",
    version,
    about = "Time textbook sorting algorithms on a random integer buffer",
    after_help = "Selectors: 0 print, 1 bubble, 2 insertion, 3 selection, 4 quick, \
                  5 merge, 6 radix, 7 heap; anything else quits."
)]
struct Cli {
    /// Number of elements in the buffer
    #[arg(long, default_value_t = BUFFER_LEN)]
    len: usize,

    /// Seed the generator for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the buffer after every sort
    #[arg(long)]
    print_sorted: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() -> sortbench::Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = HarnessConfig {
        len: cli.len,
        seed: cli.seed,
        print_sorted: cli.print_sorted,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut harness = Harness::new(config, stdin.lock(), BufWriter::new(stdout.lock()))?;
    harness.run()?;
    Ok(())
}
