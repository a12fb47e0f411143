//! mkdocx CLI - Word fidelity fixture generator
//!
//! Writes the full-coverage and stress-test `.docx` fixtures and inspects
//! written packages.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use mkdocx::compose::{DEFAULT_OUTPUT_DIR, MAX_PARAGRAPHS, MAX_SECTIONS};
use mkdocx::{FixtureOptions, HeadingLevel, PackageReport, Preset};
use std::path::{Path, PathBuf};
use tracing::{warn, Level};

/// Deterministic Word (.docx) fixtures for rendering fidelity tests
#[derive(Parser)]
#[command(
    name = "mkdocx",
    author = "iyulab",
    version,
    about = "Generate Word fidelity test fixtures",
    long_about = "mkdocx - Deterministic Word (.docx) fixture generator.\n\n\
                  Without a subcommand, writes both fixtures to assets/test-docs/."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one fixture
    #[command(visible_alias = "gen")]
    Generate {
        /// Fixture to write
        preset: PresetArg,

        /// Output file path (default: assets/test-docs/<fixture>.docx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of sections (stress test only)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_SECTIONS as i64))]
        sections: Option<u32>,

        /// Body paragraphs per section (stress test only)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PARAGRAPHS as i64))]
        paragraphs: Option<u32>,
    },

    /// Write both fixtures into a directory
    All {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        dir: PathBuf,
    },

    /// Report the structure of a written package
    Inspect {
        /// Input file path
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Fixture preset
#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Every feature once
    FullCoverage,
    /// Long document repeating every feature
    StressTest,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::FullCoverage => Preset::FullCoverage,
            PresetArg::StressTest => Preset::StressTest,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => {
            for preset in Preset::ALL {
                write_fixture(&preset.options(), &preset.default_path())?;
            }
        }

        Some(Commands::Generate {
            preset,
            output,
            sections,
            paragraphs,
        }) => {
            let preset = Preset::from(preset);
            let mut options = preset.options();

            if preset == Preset::FullCoverage && (sections.is_some() || paragraphs.is_some()) {
                warn!("--sections and --paragraphs only affect the stress test");
            }
            if let Some(n) = sections {
                options = options.with_sections(n);
            }
            if let Some(n) = paragraphs {
                options = options.with_paragraphs(n);
            }

            let path = output.unwrap_or_else(|| preset.default_path());
            write_fixture(&options, &path)?;
        }

        Some(Commands::All { dir }) => {
            for preset in Preset::ALL {
                write_fixture(&preset.options(), &dir.join(preset.file_name()))?;
            }
        }

        Some(Commands::Inspect { input, json }) => {
            let pb = create_spinner("Inspecting package...");
            let report = mkdocx::inspect_file(&input)?;
            pb.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&input, &report);
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }

        Some(Commands::Version) => {
            print_version();
        }
    }

    Ok(())
}

/// Write one fixture and print its path on stdout.
fn write_fixture(options: &FixtureOptions, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner(&format!("Writing {}...", options.preset.name()));
    let written = mkdocx::generate(options, path);
    pb.finish_and_clear();

    println!("{}", written?.display());
    Ok(())
}

fn print_report(input: &Path, report: &PackageReport) {
    println!("{}", "Package Report".cyan().bold());
    println!("{}", "─".repeat(40));
    println!(
        "{}: {}",
        "File".bold(),
        input.file_name().unwrap_or_default().to_string_lossy()
    );
    println!("{}: {}", "Parts".bold(), report.parts.len());
    println!("{}: {}", "Paragraphs".bold(), report.paragraphs);
    println!(
        "{}: H1 {} / H2 {} / H3 {}",
        "Headings".bold(),
        report.heading_count(HeadingLevel::H1),
        report.heading_count(HeadingLevel::H2),
        report.heading_count(HeadingLevel::H3)
    );
    for (num_id, count) in &report.list_items {
        println!("{}: numId {} x {}", "List items".bold(), num_id, count);
    }
    println!("{}: {}", "Page breaks".bold(), report.page_breaks);
    for table in &report.tables {
        println!("{}: {} x {}", "Table".bold(), table.rows, table.columns);
    }
    for image in &report.images {
        println!(
            "{}: {} ({}) {} x {} EMU",
            "Image".bold(),
            image.name,
            image.rel_id,
            image.width,
            image.height
        );
    }
    println!("{}: {}", "Max formatted runs".bold(), report.max_formatted_runs);

    println!();
    if report.is_clean() {
        println!("{} No issues found", "✓".green().bold());
    } else {
        println!("{} {} issue(s)", "!".yellow().bold(), report.issues.len());
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }
}

fn print_version() {
    println!("{} {}", "mkdocx".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Deterministic Word (.docx) fixture generator");
    println!();
    println!("Fixtures: full-coverage, stress-test");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
