mod config;
mod input;
mod output;

use clap::Parser;
use lewisclass_core::constants::DEFAULT_NUM_CLASSES;
use lewisclass_core::{PartitionOptions, ScoringFields, run_partition};
use log::{debug, info};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Winners printed per class unless --print-all is given.
const DEFAULT_NUM_WINNERS: usize = 3;

/// Score fields on a sheet line: total, then shots before the first miss.
const DEFAULT_SCORING_FIELDS: ScoringFields = ScoringFields::Count(2);

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "lewisclass", version, about = "Score winners of multiple classes in an event (Lewis Class rules)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Divide a score sheet into classes and print the winners of each
    Score(ScoreArgs),
    /// Create a default config file at ~/.config/lewisclass/config.toml
    Init,
}

#[derive(Parser)]
struct ScoreArgs {
    /// Score sheet, one entry per line (reads stdin when omitted)
    file: Option<PathBuf>,

    /// The number of classes to divide the participants into
    #[arg(short = 'c', long)]
    num_classes: Option<usize>,

    /// The number of winners to print in each class
    #[arg(short = 'w', long)]
    num_winners: Option<usize>,

    /// Leading space-separated fields that form the score, or "all"
    #[arg(short = 'f', long, value_parser = config::parse_scoring_fields)]
    scoring_fields: Option<ScoringFields>,

    /// Print the entirety of each class, not just the winners
    #[arg(short = 'a', long)]
    print_all: bool,

    /// Output JSON instead of a class listing
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/lewisclass/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log breakpoint decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => run_score(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default number of classes, winners, etc.");
        }
    }
}

/// Effective options for one `score` run.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    num_classes: usize,
    scoring_fields: ScoringFields,
    /// `None` prints every member of each class.
    num_winners: Option<usize>,
}

/// Merge CLI args over the config file over built-in defaults.
fn resolve_settings(args: &ScoreArgs, cfg: &config::LewisClassConfig) -> Result<Settings, String> {
    let num_classes = args.num_classes.or(cfg.num_classes).unwrap_or(DEFAULT_NUM_CLASSES);
    let scoring_fields = match (args.scoring_fields, &cfg.scoring_fields) {
        (Some(sf), _) => sf,
        (None, Some(setting)) => setting.resolve().map_err(|e| format!("invalid scoring_fields: {e}"))?,
        (None, None) => DEFAULT_SCORING_FIELDS,
    };
    let print_all = args.print_all || cfg.print_all.unwrap_or(false);
    let num_winners = if print_all {
        None
    } else {
        Some(args.num_winners.or(cfg.num_winners).unwrap_or(DEFAULT_NUM_WINNERS))
    };

    Ok(Settings {
        num_classes,
        scoring_fields,
        num_winners,
    })
}

fn run_score(args: ScoreArgs) {
    init_logging(args.verbose);

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    let Settings {
        num_classes,
        scoring_fields,
        num_winners,
    } = resolve_settings(&args, &cfg).unwrap_or_else(|e| bail(format!("{e} (in {})", config_path.display())));

    let records = match args.file {
        Some(ref path) => {
            let file = std::fs::File::open(path)
                .unwrap_or_else(|e| bail(format!("Failed to open score sheet {}: {e}", path.display())));
            input::read_records(io::BufReader::new(file), scoring_fields)
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail("No scores provided. Pass a score sheet path or pipe scores via stdin.");
            }
            input::read_records(stdin.lock(), scoring_fields)
        }
    }
    .unwrap_or_else(|e| bail(e));

    info!("read {} entries", records.len());
    debug!("num_classes={num_classes} scoring_fields={scoring_fields:?} winners={num_winners:?}");

    let result = run_partition(records, &PartitionOptions { num_classes, scoring_fields })
        .unwrap_or_else(|e| bail(e));

    if args.json {
        output::print_json(&result.classes, num_winners);
    } else {
        output::print_text(&result.classes, num_winners);
    }
}
