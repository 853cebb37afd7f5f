// SPDX-License-Identifier: PMPL-1.0-or-later
//! wcag-audit CLI - automated WCAG accessibility audits of HTML documents

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wcag_audit::config::{self, Config, DEFAULT_CONFIG_FILE};
use wcag_audit::report::{render, render_many, OutputFormat};
use wcag_audit::rules::format_levels;
use wcag_audit::{scanner, Auditor, WcagLevel};

/// Automated first-pass WCAG accessibility audits
#[derive(Parser)]
#[command(name = "wcag-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a single HTML file ("-" reads stdin)
    Audit {
        /// File to audit
        file: PathBuf,

        /// WCAG conformance level (config default if omitted)
        #[arg(long, ignore_case = true)]
        level: Option<WcagLevelArg>,

        /// Output format (config default if omitted)
        #[arg(long, ignore_case = true)]
        format: Option<FormatArg>,

        /// Source identifier recorded in the report, e.g. the URL the markup came from
        #[arg(long)]
        source: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Audit every HTML file under a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,

        /// WCAG conformance level (config default if omitted)
        #[arg(long, ignore_case = true)]
        level: Option<WcagLevelArg>,

        /// Output format (config default if omitted)
        #[arg(long, ignore_case = true)]
        format: Option<FormatArg>,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// List the rules and the levels they apply to
    Rules,

    /// Write a default configuration file
    InitConfig {
        /// Where to write the config
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

/// WCAG conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum WcagLevelArg {
    /// Level A - minimum
    A,
    /// Level AA - standard
    Aa,
    /// Level AAA - enhanced
    Aaa,
}

impl From<WcagLevelArg> for WcagLevel {
    fn from(arg: WcagLevelArg) -> Self {
        match arg {
            WcagLevelArg::A => WcagLevel::A,
            WcagLevelArg::Aa => WcagLevel::AA,
            WcagLevelArg::Aaa => WcagLevel::AAA,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text
    #[value(alias = "txt")]
    Text,
    /// HTML document, ready for PDF conversion
    #[value(alias = "pdf")]
    Html,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wcag_audit=debug")
    } else {
        EnvFilter::new("wcag_audit=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { file, level, format, source, output, config, verbose } => {
            init_logging(verbose);
            let config = config::load_config(&config)?;
            let auditor = Auditor::new(&config);
            let level = level.map(WcagLevel::from).unwrap_or(config.audit.level);
            let format = resolve_format(format, &config);

            let report = if file.as_os_str() == "-" {
                scanner::scan_reader(std::io::stdin().lock(), source.as_deref(), &auditor, level)?
            } else {
                let mut report = scanner::scan_file(&file, &auditor, level)?;
                if source.is_some() {
                    report.source = source;
                }
                report
            };

            write_output(&render(&report, format)?, output.as_deref())?;

            if report.has_high_severity() {
                std::process::exit(1);
            }
        }

        Commands::Scan { dir, level, format, output, config, verbose } => {
            init_logging(verbose);
            let config = config::load_config(&config)?;
            let auditor = Auditor::new(&config);
            let level = level.map(WcagLevel::from).unwrap_or(config.audit.level);
            let format = resolve_format(format, &config);

            let reports = scanner::scan_directory(&dir, &auditor, level)?;
            write_output(&render_many(&reports, format)?, output.as_deref())?;

            if reports.iter().any(|r| r.has_high_severity()) {
                std::process::exit(1);
            }
        }

        Commands::Rules => {
            for rule in Auditor::default().rules() {
                println!(
                    "{:<18} {:<11} {}",
                    rule.id(),
                    format_levels(rule.levels()),
                    rule.description()
                );
                if rule.finding_ids() != [rule.id()] {
                    println!("{:<18} reports: {}", "", rule.finding_ids().join(", "));
                }
            }
        }

        Commands::InitConfig { path } => {
            config::write_default_config(&path)?;
            eprintln!("Config written to {}", path.display());
        }
    }

    Ok(())
}

fn resolve_format(arg: Option<FormatArg>, config: &Config) -> OutputFormat {
    arg.map(OutputFormat::from).unwrap_or(config.report.format)
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
