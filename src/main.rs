//! pagesim command-line front-end.
//!
//! Three modes:
//! 1. **run:** simulate one policy and print the step table (or JSON).
//! 2. **compare:** run several policies over the same references side by side.
//! 3. **step:** walk a trace interactively from stdin (next, back, end, rewind).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use pagesim::report::{format_step, render_comparison, render_table};
use pagesim::{
    check_references, compare, load_references, parse_references, PageId, Policy, Result,
    SimConfig, Trace, DEFAULT_CAPACITY, DEFAULT_MAX_REFERENCES, DEFAULT_POLICY,
};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    version,
    about = "Page replacement simulator (FIFO, LRU, Optimal)",
    long_about = "Simulate page replacement over a fixed pool of frames and print each step.\n\nReference strings are integers separated by commas, semicolons or whitespace.\n\nExamples:\n  pagesim run --refs \"1,2,3,4,1,2,5,1,2,3,4,5\" -f 3 -p fifo\n  pagesim compare --refs \"7 0 1 2 0 3 0 4\" -f 3\n  pagesim step --refs-file refs.txt -p optimal"
)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate one policy and print every step.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Eviction policy: FIFO, LRU or Optimal.
        #[arg(short, long, default_value_t = DEFAULT_POLICY)]
        policy: Policy,

        /// Print the trace and metrics as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run several policies on the same references and compare metrics.
    Compare {
        #[command(flatten)]
        input: InputArgs,

        /// Policies to compare (default: all).
        #[arg(short, long, value_delimiter = ',')]
        policies: Vec<Policy>,
    },

    /// Step through a trace interactively.
    Step {
        #[command(flatten)]
        input: InputArgs,

        /// Eviction policy: FIFO, LRU or Optimal.
        #[arg(short, long, default_value_t = DEFAULT_POLICY)]
        policy: Policy,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Reference string, e.g. "1,2,3,4".
    #[arg(short, long, conflicts_with = "refs_file", required_unless_present = "refs_file")]
    refs: Option<String>,

    /// File containing the reference string.
    #[arg(long)]
    refs_file: Option<PathBuf>,

    /// Number of frames.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    frames: usize,

    /// Longest reference string accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_REFERENCES)]
    max_refs: usize,
}

impl InputArgs {
    fn references(&self) -> Result<Vec<PageId>> {
        let refs = match (&self.refs, &self.refs_file) {
            (_, Some(path)) => load_references(path)?,
            (Some(text), None) => parse_references(text)?,
            (None, None) => Vec::new(),
        };
        check_references(&refs, self.max_refs)?;
        Ok(refs)
    }

    fn config(&self, policy: Policy) -> SimConfig {
        SimConfig::new(self.frames, policy).with_max_references(self.max_refs)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            input,
            policy,
            json,
        } => cmd_run(&input, policy, json),
        Commands::Compare { input, policies } => cmd_compare(&input, policies),
        Commands::Step { input, policy } => cmd_step(&input, policy),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so table/JSON output on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_run(input: &InputArgs, policy: Policy, json: bool) -> Result<()> {
    let refs = input.references()?;
    let trace = input.config(policy).run(&refs)?;
    debug!(checksum = %format!("{:08x}", trace.checksum()), "trace ready");

    if json {
        print_json(&trace)
    } else {
        println!();
        print!("{}", render_table(&trace));
        Ok(())
    }
}

fn print_json(trace: &Trace) -> Result<()> {
    let doc = serde_json::json!({
        "trace": trace,
        "metrics": trace.metrics(),
        "checksum": format!("{:08x}", trace.checksum()),
    });
    let text = serde_json::to_string_pretty(&doc).map_err(io::Error::from)?;
    println!("{}", text);
    Ok(())
}

fn cmd_compare(input: &InputArgs, policies: Vec<Policy>) -> Result<()> {
    let policies = if policies.is_empty() {
        Policy::ALL.to_vec()
    } else {
        policies
    };

    let refs = input.references()?;
    let traces = compare(&refs, input.frames, &policies)?;

    println!("References: {} | Frames: {}", refs.len(), input.frames);
    print!("{}", render_comparison(&traces));
    Ok(())
}

fn cmd_step(input: &InputArgs, policy: Policy) -> Result<()> {
    let refs = input.references()?;
    let trace = input.config(policy).run(&refs)?;
    let mut cursor = trace.cursor();

    println!("Algorithm: {} | Frames: {}", trace.policy(), trace.capacity());
    println!("Commands: [n]ext, [b]ack, [e]nd, [r]ewind, [q]uit");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if let Some(step) = cursor.current() {
            let metrics = cursor.metrics();
            println!("{}", format_step(cursor.index(), step));
            println!("  Hits: {} | Misses: {}", metrics.hits, metrics.misses);
        }

        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match line.trim() {
            "n" | "" => {
                if !cursor.step_forward() {
                    println!("  (last step)");
                }
            }
            "b" => {
                if !cursor.step_back() {
                    println!("  (first step)");
                }
            }
            "e" => cursor.run_to_end(),
            "r" => cursor.rewind(),
            "q" => break,
            other => println!("  unknown command: {}", other),
        }
    }

    Ok(())
}
