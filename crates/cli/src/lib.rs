use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use synth_extractor::{DetailLevel, FileAnalyzer};
use synth_project::{HistoryConfig, ProjectAnalyzer, ProjectConfig};

mod flags;
mod render;
mod summary;

use flags::{DetailFlag, FormatFlag};
pub use render::OutputFormat;
pub use summary::Summary;

fn print_stdout(text: &str) -> Result<()> {
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
#[command(name = "contextsynth")]
#[command(about = "Instant context summaries for files, folders and projects", long_about = None)]
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

    /// How much per-element detail to include
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        env = "CONTEXTSYNTH_DETAIL",
        default_value_t = DetailFlag::Standard
    )]
    detail: DetailFlag,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single file
    File(FileArgs),

    /// Summarize the files directly inside a folder
    Folder(FolderArgs),

    /// Summarize a whole project tree
    Project(ProjectArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatFlag::Markdown)]
    format: FormatFlag,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct FileArgs {
    /// Path to the file
    path: PathBuf,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args)]
struct FolderArgs {
    /// Path to the folder
    path: PathBuf,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Args)]
struct ProjectArgs {
    /// Path to the project root
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Skip the version-history query
    #[arg(long)]
    no_history: bool,

    /// Upper bound on the version-history query
    #[arg(long, default_value_t = 5)]
    history_timeout_secs: u64,

    #[command(flatten)]
    out: OutputArgs,
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::File(args) => matches!(args.out.format, FormatFlag::Json),
        Commands::Folder(args) => matches!(args.out.format, FormatFlag::Json),
        Commands::Project(args) => matches!(args.out.format, FormatFlag::Json),
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || json_output {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let detail = cli.detail.as_domain();
    match cli.command {
        Commands::File(args) => run_file(args, detail)?,
        Commands::Folder(args) => run_folder(args, detail)?,
        Commands::Project(args) => run_project(args, detail)?,
    }

    Ok(())
}

fn run_file(args: FileArgs, detail: DetailLevel) -> Result<()> {
    if !args.path.exists() {
        bail!("File not found: {}", args.path.display());
    }

    let summary = FileAnalyzer::new(detail).analyze(&args.path);
    emit(summary.into(), &args.out)
}

fn run_folder(args: FolderArgs, detail: DetailLevel) -> Result<()> {
    if !args.path.exists() {
        bail!("Folder not found: {}", args.path.display());
    }

    let summary = FileAnalyzer::new(detail).summarize_folder(&args.path);
    emit(summary.into(), &args.out)
}

fn run_project(args: ProjectArgs, detail: DetailLevel) -> Result<()> {
    if !args.path.exists() {
        bail!("Project not found: {}", args.path.display());
    }

    let config = ProjectConfig::default()
        .with_detail(detail)
        .with_history(HistoryConfig {
            enabled: !args.no_history,
            timeout: Duration::from_secs(args.history_timeout_secs),
            ..HistoryConfig::default()
        });
    let analyzer = ProjectAnalyzer::new(config).context("Invalid project settings")?;

    let summary = analyzer.analyze(&args.path);
    emit(summary.into(), &args.out)
}

fn emit(summary: Summary, out: &OutputArgs) -> Result<()> {
    let rendered = summary.render(out.format.as_domain())?;

    match &out.output {
        Some(path) => {
            write_output(path, &rendered)?;
            print_stdout(&format!("Summary saved to {}", path.display()))
        }
        None => print_stdout(&rendered),
    }
}

fn write_output(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))?;
    log::debug!("Wrote summary to {}", path.display());
    Ok(())
}
