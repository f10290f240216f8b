//! pdfindex CLI - build HTML and Org-mode indexes of PDF directories

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfindex::visitor::{FileReport, ScanVisitor};
use pdfindex::{build_index, IndexFormat, IndexOptions, LopdfBackend};

#[derive(Parser)]
#[command(name = "pdfindex")]
#[command(version)]
#[command(about = "Build HTML and Org-mode indexes of PDF directories", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Directories to scan, one index section each
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,

    /// Index title
    #[arg(short, long, default_value = pdfindex::options::DEFAULT_TITLE)]
    title: String,

    /// HTML output file
    #[arg(long, value_name = "FILE", default_value = "index.html")]
    html: PathBuf,

    /// Org-mode output file
    #[arg(long, value_name = "FILE", default_value = "index.org")]
    org: PathBuf,

    /// Also write a JSON index
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Only print written files and the summary
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show the first-page preview used in scan output
    Preview {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Info { ref input }) => cmd_info(input),
        Some(Commands::Preview { ref input }) => cmd_preview(input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if cli.dirs.is_empty() {
                println!("{}", "Usage: pdfindex <DIR>...".yellow());
                println!("       pdfindex --help for more information");
                Ok(())
            } else {
                cmd_build(&cli)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Prints one line per scanned file and written output.
struct ConsoleVisitor {
    spinner: ProgressBar,
    quiet: bool,
}

impl ConsoleVisitor {
    fn new(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        Ok(Self { spinner, quiet })
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ScanVisitor for ConsoleVisitor {
    fn visit_directory(&mut self, dir: &Path, file_count: usize) {
        self.spinner
            .set_message(format!("Scanning {} ({} files)", dir.display(), file_count));
    }

    fn visit_file(&mut self, report: &FileReport) {
        self.spinner.tick();
        if self.quiet {
            return;
        }
        let marker = if report.is_linked() {
            "*".green()
        } else {
            "!".red()
        };
        self.spinner.suspend(|| {
            println!("{} file({}): {}", marker, report.path.display(), report.preview);
        });
    }

    fn visit_output(&mut self, _format: IndexFormat, path: &Path) {
        self.spinner.suspend(|| {
            println!("{}{}", "Write file: ".green(), path.display());
        });
    }
}

fn cmd_build(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = IndexOptions::new()
        .with_title(cli.title.as_str())
        .with_directories(cli.dirs.iter())
        .with_output(IndexFormat::Html, &cli.html)
        .with_output(IndexFormat::Org, &cli.org);
    if let Some(ref json) = cli.json {
        options = options.with_output(IndexFormat::Json, json);
    }

    let mut visitor = ConsoleVisitor::new(cli.quiet)?;
    let result = build_index(LopdfBackend::new(), &options, &mut visitor);
    visitor.finish();
    let summary = result?;

    println!(
        "\n{} {} files in {} directories, {} linked, {} skipped",
        "Done!".green().bold(),
        summary.files,
        summary.directories,
        summary.linked,
        summary.skipped
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = pdfindex::read_metadata(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), metadata.pdf_version);
    println!("{}: {}", "Pages".bold(), metadata.page_count);
    for (label, value) in metadata.fields() {
        println!("{}: {}", label.bold(), value);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }

    Ok(())
}

fn cmd_preview(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let preview = pdfindex::read_preview(input)?;
    println!("{}", preview);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfindex".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF directory index builder");
    println!();
    println!("License: MIT");
}
