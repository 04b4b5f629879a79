use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use oraclesql::mode::{Mode, OutputFormat};

/// oraclesql - Oracle SQL and PL/SQL syntax highlighter.
#[derive(Parser, Debug)]
#[command(name = "oraclesql", version, about)]
struct Cli {
    /// Files or directories to highlight. Use "-" to read from stdin.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format: terminal, tokens.
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Glob patterns to exclude.
    #[arg(long)]
    exclude: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only).
    #[arg(short, long)]
    quiet: bool,

    /// Force color output.
    #[arg(long)]
    force_color: bool,

    /// Disable color output.
    #[arg(long)]
    no_color: bool,

    /// Number of threads for parallel processing (0 = all cores).
    #[arg(short = 't', long, default_value_t = 0)]
    threads: usize,

    /// Disable multi-threaded processing.
    #[arg(long)]
    single_process: bool,

    /// Path to config file (oraclesql.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let is_stdin = cli.files.len() == 1 && cli.files[0].to_string_lossy() == "-";

    let base_mode = match oraclesql::load_config(&cli.files, cli.config.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    let mode = Mode {
        format: cli.format.unwrap_or(base_mode.format),
        exclude: if cli.exclude.is_empty() {
            base_mode.exclude
        } else {
            cli.exclude
        },
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_color: cli.no_color,
        force_color: cli.force_color,
        threads: cli.threads,
        single_process: cli.single_process,
        tables: base_mode.tables,
    };

    let tables = mode.build_tables();
    let mut stdout = StandardStream::stdout(color_choice(&mode));

    if is_stdin {
        let source = match read_stdin() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(2);
            }
        };

        if let Err(e) = oraclesql::render_string(&source, &mode, &tables, &mut stdout) {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    } else {
        let report = oraclesql::run(&cli.files, &mode, &tables, &mut stdout);

        if !mode.quiet {
            print_verbose_results(&report, &mode);
            eprintln!("{}", report.summary());
        }

        report.print_errors();

        if report.has_errors() {
            std::process::exit(2);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "oraclesql=debug"
    } else {
        "oraclesql=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn color_choice(mode: &Mode) -> ColorChoice {
    if mode.force_color {
        ColorChoice::Always
    } else if mode.color() && io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("reading stdin")?;
    Ok(source)
}

fn print_verbose_results(report: &oraclesql::report::Report, mode: &Mode) {
    if !mode.verbose {
        return;
    }
    for result in &report.results {
        match result.status {
            oraclesql::report::FileStatus::Highlighted => {
                eprintln!("highlighted {} ({} tokens)", result.path.display(), result.tokens);
            }
            oraclesql::report::FileStatus::Error => {
                eprintln!(
                    "error: {}: {}",
                    result.path.display(),
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }
}
