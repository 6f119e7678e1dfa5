use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use fileorder_comparers::{validate_separator, Comparer, OrderConfig, QuickOpenRanker, SortKey};
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "fileorder")]
#[command(about = "Sort file names, paths and quick-open candidates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file (default: ./.fileorder.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort newline-separated items
    Sort(SortArgs),

    /// Compare two items and print -1, 0 or 1
    Compare(CompareArgs),

    /// Fuzzy-rank items against a query, best first
    Rank(RankArgs),
}

#[derive(Args, Clone, Default)]
struct OrderArgs {
    /// Comparator: names, extensions, paths, prefix or anything
    #[arg(long, value_parser = parse_sort_key)]
    by: Option<SortKey>,

    /// Query for the prefix and anything comparators
    #[arg(long)]
    query: Option<String>,

    /// Case-sensitive names and paths
    #[arg(long, overrides_with = "no_case_sensitive")]
    case_sensitive: bool,

    /// Case-insensitive names and paths, even if the config says otherwise
    #[arg(long, overrides_with = "case_sensitive")]
    no_case_sensitive: bool,

    /// Path separator (default: config value, then the platform separator)
    #[arg(long, value_parser = parse_separator)]
    separator: Option<char>,
}

#[derive(Args)]
struct SortArgs {
    #[command(flatten)]
    order: OrderArgs,

    /// Reverse the sorted output
    #[arg(long, overrides_with = "no_reverse")]
    reverse: bool,

    /// Keep ascending order, even if the config says reverse
    #[arg(long, overrides_with = "reverse")]
    no_reverse: bool,

    /// Print {"by": ..., "items": [...]} instead of plain lines
    #[arg(long)]
    json: bool,

    /// Input file, one item per line ("-" or omitted: stdin)
    input: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    a: String,
    b: String,

    #[command(flatten)]
    order: OrderArgs,
}

#[derive(Args)]
struct RankArgs {
    /// Fuzzy query
    #[arg(long)]
    query: String,

    /// Maximum number of results (default: config limit)
    #[arg(long)]
    limit: Option<usize>,

    /// Print ranked items with index and score as JSON
    #[arg(long)]
    json: bool,

    /// Input file, one item per line ("-" or omitted: stdin)
    input: Option<PathBuf>,
}

#[derive(Serialize)]
struct SortOutput<'a> {
    by: SortKey,
    items: &'a [String],
}

/// Comparator choice after merging config and flags
struct Resolved {
    comparer: Comparer,
    by: SortKey,
    case_sensitive: bool,
    query: Option<String>,
}

impl Resolved {
    fn new(config: &OrderConfig, args: OrderArgs) -> Self {
        let separator = args.separator.unwrap_or_else(|| config.separator_char());
        Self {
            comparer: Comparer::default().with_separator(separator),
            by: args.by.unwrap_or(config.by),
            case_sensitive: flag_or(
                args.case_sensitive,
                args.no_case_sensitive,
                config.case_sensitive,
            ),
            query: args.query,
        }
    }
}

/// `--flag` / `--no-flag` pair falling back to the config value
fn flag_or(on: bool, off: bool, config: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => config,
    }
}

fn parse_sort_key(raw: &str) -> std::result::Result<SortKey, String> {
    raw.parse().map_err(|err: fileorder_comparers::ComparerError| err.to_string())
}

fn parse_separator(raw: &str) -> std::result::Result<char, String> {
    validate_separator(raw).map_err(|err| err.to_string())
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Sort(args) => args.json,
        Commands::Rank(args) => args.json,
        Commands::Compare(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Sort(args) => run_sort(args, &config)?,
        Commands::Compare(args) => run_compare(args, &config)?,
        Commands::Rank(args) => run_rank(args, &config)?,
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<OrderConfig> {
    if let Some(path) = explicit {
        return OrderConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }

    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    let config = OrderConfig::discover(&cwd)
        .with_context(|| format!("Failed to load {}", cwd.join(OrderConfig::FILE_NAME).display()))?;
    Ok(config.unwrap_or_default())
}

fn read_items(input: Option<&Path>) -> Result<Vec<String>> {
    let text = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn run_sort(args: SortArgs, config: &OrderConfig) -> Result<()> {
    let mut items = read_items(args.input.as_deref())?;
    let resolved = Resolved::new(config, args.order);

    resolved
        .comparer
        .sort(
            &mut items,
            resolved.by,
            resolved.case_sensitive,
            resolved.query.as_deref(),
        )
        .context("Sort failed")?;
    if flag_or(args.reverse, args.no_reverse, config.reverse) {
        items.reverse();
    }

    if args.json {
        let output = SortOutput {
            by: resolved.by,
            items: &items,
        };
        return print_stdout(&serde_json::to_string(&output)?);
    }

    if items.is_empty() {
        return Ok(());
    }
    print_stdout(&items.join("\n"))
}

fn run_compare(args: CompareArgs, config: &OrderConfig) -> Result<()> {
    let resolved = Resolved::new(config, args.order);
    let ordering = resolved
        .comparer
        .compare_by(
            resolved.by,
            &args.a,
            &args.b,
            resolved.case_sensitive,
            resolved.query.as_deref(),
        )
        .context("Compare failed")?;

    log::debug!("{:?} vs {:?} by {}: {ordering:?}", args.a, args.b, resolved.by);
    print_stdout(&(ordering as i8).to_string())
}

fn run_rank(args: RankArgs, config: &OrderConfig) -> Result<()> {
    let items = read_items(args.input.as_deref())?;
    let limit = args.limit.unwrap_or(config.limit);

    let mut ranker = QuickOpenRanker::with_comparer(Comparer::from_config(config));
    let ranked = ranker.rank(&args.query, &items, limit);

    if args.json {
        return print_stdout(&serde_json::to_string(&ranked)?);
    }

    if ranked.is_empty() {
        log::info!("No items match {:?}", args.query);
        return Ok(());
    }
    let lines: Vec<&str> = ranked.iter().map(|r| r.item.as_str()).collect();
    print_stdout(&lines.join("\n"))
}
