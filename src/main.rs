use std::io::{self, BufRead, Write};

use clap::Parser;
use pagesim::common::config::DEFAULT_FRAME_COUNT;
use pagesim::report::{render_comparison, render_stats, render_trace};
use pagesim::{compare_policies, simulate, Error, Latencies, PolicyKind, Result, SimulationConfig};

#[derive(Debug, Parser, PartialEq)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long, help = "Reference string, one page per character (prompted if absent)")]
    reference: Option<String>,
    #[clap(short, long, help = "Number of frames (prompted if absent)")]
    frames: Option<usize>,
    #[clap(
        short,
        long,
        help = "Replacement policy: FIFO, LRU, SC or MAT (prompted if absent)",
        value_name = "POLICY"
    )]
    policy: Option<String>,
    #[clap(
        short,
        long,
        value_delimiter = ',',
        help = "Per-access latency in ms, comma separated (uniform 1ms if absent)"
    )]
    latencies: Option<Vec<u64>>,
    #[clap(long, help = "Run every policy and print a summary table")]
    compare: bool,
}

/// Print `msg`, read one line, and normalise it the way the prompts expect.
fn ask(input: &mut impl BufRead, msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput(format!("no answer to {:?}", msg.trim())));
    }
    Ok(line.trim().to_uppercase())
}

fn parse_reference(raw: &str) -> Vec<char> {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn run(args: Args) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let reference = match args.reference {
        Some(raw) => parse_reference(&raw),
        None => parse_reference(&ask(&mut input, "Reference string: ")?),
    };

    let frame_count = match args.frames {
        Some(n) => n,
        None => {
            let raw = ask(&mut input, &format!("Frame count [{}]: ", DEFAULT_FRAME_COUNT))?;
            if raw.is_empty() {
                DEFAULT_FRAME_COUNT
            } else {
                raw.parse::<usize>()
                    .map_err(|e| Error::InvalidInput(format!("frame count {:?}: {}", raw, e)))?
            }
        }
    };

    let latencies = args.latencies.map_or(Latencies::Uniform, Latencies::Explicit);

    if args.compare {
        let reports = compare_policies(&reference, frame_count, &latencies)?;
        println!("{}", render_comparison(&reports));
        return Ok(());
    }

    let policy = match args.policy {
        Some(tag) => PolicyKind::from_tag(&tag),
        None => PolicyKind::from_tag(&ask(&mut input, "Policy (FIFO/LRU/SC/MAT): ")?),
    };

    let config = SimulationConfig::new(reference, frame_count, policy).with_latencies(latencies);
    let report = simulate(&config)?;

    println!();
    println!("{}", render_trace(&report));
    println!();
    println!("{}", render_stats(&report.stats));
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
