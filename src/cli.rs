//! Command-line interface for smellcheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::detect::{Engine, Thresholds};
use crate::parser;
use crate::report::{self, FileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SMELLS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["smellcheck.yaml", ".smellcheck.yaml"];

/// Starter configuration written by `smellcheck init`.
const DEFAULT_CONFIG: &str = "\
# smellcheck configuration
#
# All thresholds are optional; an entity is flagged only when its
# metric strictly exceeds the threshold.

# max_lines: 30      # docstring-adjusted lines per function
# max_methods: 10    # directly-declared methods per class
# max_params: 5      # positional parameters, receiver excluded
# max_depth: 3       # control-nesting depth per function

# excluded_paths:
#   - \"**/migrations/**\"
";

/// Structural code smell detector for Python source files.
///
/// Smellcheck parses Python sources and flags four structural smells:
/// over-long functions, over-large classes, functions with too many
/// parameters, and deeply nested control flow.
#[derive(Parser)]
#[command(name = "smellcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Python file or directory for code smells
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Create a starter smellcheck configuration file
    Init(InitArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (a .py file or a directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Override the long-function threshold
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Override the large-class threshold
    #[arg(long)]
    pub max_methods: Option<usize>,

    /// Override the parameter-count threshold
    #[arg(long)]
    pub max_params: Option<usize>,

    /// Override the nesting-depth threshold
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "smellcheck.yaml")]
    pub output: PathBuf,
}

/// Discover a config file in the current directory, if any.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Load the configuration: an explicit path, or an auto-discovered
/// file, or defaults when neither exists. A config file that exists
/// but fails to parse is an error either way; only absence is
/// optional.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(),
    };
    match path {
        Some(p) => Config::parse_file(&p),
        None => Ok(Config::default()),
    }
}

/// Collect Python files under a directory, skipping hidden directories,
/// caches, and virtualenvs.
fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if e.file_type().is_dir()
                && (name.starts_with('.')
                    || name == "__pycache__"
                    || name == "venv"
                    || name == "site-packages")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext == "py" && !config.is_path_excluded(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Resolve thresholds: CLI flag > config file > default.
fn resolve_thresholds(args: &AnalyzeArgs, config: &Config) -> Thresholds {
    let mut thresholds = config.thresholds();
    if let Some(v) = args.max_lines {
        thresholds.max_lines = v;
    }
    if let Some(v) = args.max_methods {
        thresholds.max_methods = v;
    }
    if let Some(v) = args.max_params {
        thresholds.max_params = v;
    }
    if let Some(v) = args.max_depth {
        thresholds.max_depth = v;
    }
    thresholds
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    // Only recognized Python source files are accepted, same contract
    // the desktop front-ends enforce before invoking an analyzer.
    let files = if metadata.is_dir() {
        collect_files(&args.path, &config)?
    } else {
        let ext = args.path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "py" {
            eprintln!("Error: not a Python (.py) file: {}", args.path.display());
            return Ok(EXIT_ERROR);
        }
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no Python files to analyze");
        return Ok(EXIT_SUCCESS);
    }

    let engine = Engine::new(resolve_thresholds(args, &config));

    let mut reports = Vec::new();
    let mut load_failures = 0usize;

    for file in &files {
        match parser::parse_file(file) {
            Ok(unit) => reports.push(FileReport {
                path: file.display().to_string(),
                result: engine.analyze(&unit),
            }),
            Err(e) => {
                eprintln!("Error: {}: {}", file.display(), e);
                load_failures += 1;
            }
        }
    }

    match args.format.as_str() {
        "json" => report::write_json(&reports)?,
        _ => report::write_pretty(&reports),
    }

    if load_failures > 0 {
        return Ok(EXIT_ERROR);
    }
    if reports.iter().any(|r| !r.result.is_clean()) {
        return Ok(EXIT_SMELLS);
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&args.output, DEFAULT_CONFIG)?;

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune thresholds", args.output.display());
    println!("  2. Run: smellcheck analyze <path>");

    Ok(EXIT_SUCCESS)
}
