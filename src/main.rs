use clap::{Parser, ValueEnum};
use coursepatch::fs_utils::{DiscoverOptions, discover_data_files, read_file_contents};
use coursepatch::{PatchConfig, Result, find_records, patch_file};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LONG_HELP: &str = r#"
Passes (always in this order):
  1. Remove malformed `benefitsHtml: `<div style=""...`` fragments
  2. Restore the separator comma between consecutive course records
  3. Insert the category benefits template into each known course record

Examples:
  # Patch a data file in place
  coursepatch data/courses.ts
  # Patch every course data file under a project root
  coursepatch --scan ~/sites/homepage
  # Scan with a custom pattern, skipping backups
  coursepatch --scan . --glob '**/*.courses.ts' -x 'backup/**'
  # Cleanup only, no benefits insertion
  coursepatch data/courses.ts --fix-only
  # Check what would change (nothing is written)
  coursepatch data/courses.ts --dry-run
  # List course records in the file
  coursepatch data/courses.ts --list=detailed
  # Output as JSON for scripting
  coursepatch data/courses.ts --list=json
  # Keep the original, write the patched buffer elsewhere
  coursepatch data/courses.ts -o fixed.ts
"#;

/// Course catalog data file repair.
#[derive(Parser, Debug)]
#[command(
    name = "coursepatch",
    version,
    about = "Repair generated course catalog data files.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Course data files to patch
    #[arg(value_name = "FILES", required_unless_present = "scan")]
    files: Vec<PathBuf>,

    /// Scan a project directory for course data files instead of naming them
    #[arg(
        long,
        short,
        value_name = "DIR",
        env = "COURSEPATCH_ROOT",
        conflicts_with = "files"
    )]
    scan: Option<PathBuf>,

    /// Glob pattern(s) a discovered data file must match (repeatable)
    #[arg(long, value_name = "GLOB", default_value = "**/courses.ts", action = clap::ArgAction::Append)]
    glob: Vec<String>,

    /// Exclude glob patterns (repeatable). Patterns are relative to the scan root
    #[arg(short = 'x', long = "exclude", value_name = "GLOB", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Disable compliance with .gitignore files while scanning
    #[arg(long)]
    no_gitignore: bool,

    /// Run only the cleanup passes; skip benefits insertion
    #[arg(long)]
    fix_only: bool,

    /// Apply the passes in memory and report counts without writing
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// List course records (optionally with format: plain, detailed, json)
    #[arg(long, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain", conflicts_with = "dry_run")]
    list: Option<ListFormat>,

    /// Write the patched buffer here instead of overwriting in place (single input only)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// Simple list of course codes
    Plain,
    /// Detailed information about each record
    Detailed,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize, Deserialize)]
struct RecordInfo {
    file: String,
    course_code: String,
    start: usize,
    end: usize,
    has_benefits: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, 2) => LogLevel::Debug,
        (false, _) => LogLevel::Trace,
    };

    let files = match resolve_input_files(&cli, log_level) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if files.is_empty() {
        eprintln!("Error: no course data files to process");
        std::process::exit(1);
    }

    if cli.output.is_some() && files.len() != 1 {
        eprintln!("[ERROR] --output requires exactly one input file, found {}", files.len());
        std::process::exit(2);
    }

    let mut config = PatchConfig::default();
    config.insert_benefits = !cli.fix_only;

    let result = if cli.dry_run {
        dry_run(&files, &config, log_level)
    } else if let Some(list_format) = cli.list {
        list_records(&files, list_format, log_level)
    } else {
        patch_files(&files, &config, cli.output.clone(), log_level)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Either the explicitly named files, or the discovery result for --scan.
fn resolve_input_files(cli: &Cli, log_level: LogLevel) -> Result<Vec<PathBuf>> {
    let Some(root) = &cli.scan else {
        return Ok(cli.files.clone());
    };

    log(
        log_level,
        LogLevel::Info,
        &format!("Scanning {} for course data files...", root.display()),
    );

    let opts = DiscoverOptions {
        root: root.clone(),
        include: build_glob_set(&cli.glob),
        exclude: if cli.exclude.is_empty() {
            None
        } else {
            Some(build_glob_set(&cli.exclude))
        },
        use_gitignore: !cli.no_gitignore,
    };

    let found = discover_data_files(&opts)?;
    log(
        log_level,
        LogLevel::Info,
        &format!("Found {} data file(s)", found.len()),
    );
    Ok(found)
}

fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        match Glob::new(pat) {
            Ok(g) => {
                builder.add(g);
            }
            Err(e) => {
                eprintln!("[ERROR] Invalid glob pattern '{pat}': {e}");
                std::process::exit(2);
            }
        }
    }
    match builder.build() {
        Ok(set) => set,
        Err(e) => {
            eprintln!("[ERROR] Failed to build glob set: {e}");
            std::process::exit(2);
        }
    }
}

fn patch_files(
    files: &[PathBuf],
    config: &PatchConfig,
    output: Option<PathBuf>,
    log_level: LogLevel,
) -> Result<()> {
    for file in files {
        log(
            log_level,
            LogLevel::Debug,
            &format!("Patching {}", file.display()),
        );

        let outcome = patch_file(file, config)?;
        let target = output.clone().unwrap_or_else(|| file.clone());

        log(
            log_level,
            LogLevel::Info,
            &format!("Writing output to {}", target.display()),
        );
        std::fs::write(&target, &outcome.content)?;

        log(
            log_level,
            LogLevel::Info,
            &format!(
                "{}: {} fragment(s) removed, {} separator(s) restored, {} template(s) inserted",
                file.display(),
                outcome.malformed_removed,
                outcome.separators_added,
                outcome.benefits_inserted.len()
            ),
        );
    }

    log(log_level, LogLevel::Info, "Processing complete!");
    Ok(())
}

fn dry_run(files: &[PathBuf], config: &PatchConfig, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        "Performing dry run - nothing will be written...",
    );

    let mut changed_count = 0;
    for file in files {
        let outcome = patch_file(file, config)?;
        let changed = outcome.malformed_removed > 0
            || outcome.separators_added > 0
            || !outcome.benefits_inserted.is_empty();
        if changed {
            changed_count += 1;
            println!(
                "✓ {}: {} fragment(s), {} separator(s), {} template(s): {}",
                file.display(),
                outcome.malformed_removed,
                outcome.separators_added,
                outcome.benefits_inserted.len(),
                outcome.benefits_inserted.join(", ")
            );
        } else {
            println!("  {}: already clean", file.display());
        }
    }

    println!(
        "\nSummary: {} of {} file(s) would be rewritten",
        changed_count,
        files.len()
    );

    Ok(())
}

fn list_records(files: &[PathBuf], format: ListFormat, log_level: LogLevel) -> Result<()> {
    log(log_level, LogLevel::Debug, "Listing course records...");

    match format {
        ListFormat::Plain => {
            for file in files {
                let buffer = read_file_contents(file)?;
                for record in find_records(&buffer)? {
                    println!("{}", record.course_code);
                }
            }
        }
        ListFormat::Detailed => {
            for file in files {
                let buffer = read_file_contents(file)?;
                for record in find_records(&buffer)? {
                    println!("Record: {}", record.course_code);
                    println!("  File: {}", file.display());
                    println!("  Position: {}..{}", record.start, record.end);
                    println!(
                        "  Benefits: {}",
                        if record.has_benefits { "present" } else { "missing" }
                    );
                    match coursepatch::category_for(&record.course_code) {
                        Some(category) => println!("  Category: {}", category.label()),
                        None => println!("  Category: (not in catalog)"),
                    }
                    println!();
                }
            }
        }
        ListFormat::Json => {
            let mut infos = Vec::new();
            for file in files {
                let buffer = read_file_contents(file)?;
                for record in find_records(&buffer)? {
                    infos.push(RecordInfo {
                        file: file.display().to_string(),
                        category: coursepatch::category_for(&record.course_code)
                            .map(|c| c.label().to_string()),
                        course_code: record.course_code,
                        start: record.start,
                        end: record.end,
                        has_benefits: record.has_benefits,
                    });
                }
            }

            let json = serde_json::to_string_pretty(&infos)?;
            println!("{json}");
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn log(current_level: LogLevel, message_level: LogLevel, message: &str) {
    if message_level >= current_level {
        eprintln!(
            "[{}] {}",
            match message_level {
                LogLevel::Trace => "TRACE",
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            },
            message
        );
    }
}
