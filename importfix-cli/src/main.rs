mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{CommandFactory, Parser};
use config::ConfigMerger;
use importfix_core::adapters::{FsWritePort, ProcessAnalyzer};
use importfix_core::run_check;
use importfix_core::settings::CheckSettings;
use importfix_render::{render_commands, render_text};
use importfix_types::ToolInfo;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "importfix",
    version,
    about = "Runs a Python import analyzer for one build target and prints buildozer fixes."
)]
struct Cli {
    /// File the analyzer's JSON output is written to.
    output: Utf8PathBuf,

    /// Build target label, as invoked.
    label: String,

    /// Package path of the target.
    package: Utf8PathBuf,

    /// Arguments forwarded verbatim to the analyzer: everything after PACKAGE.
    #[arg(last = true)]
    analyzer_args: Vec<String>,

    /// Analyzer executable (default: from importfix.toml, else "fawltydeps").
    #[arg(long, env = "IMPORTFIX_ANALYZER")]
    analyzer: Option<String>,

    /// Config file (default: ./importfix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Label suffix of synthetic test wrapper targets.
    #[arg(long)]
    test_wrapper_suffix: Option<String>,

    /// Also write a JSON report to this path.
    #[arg(long)]
    report: Option<Utf8PathBuf>,

    /// What to print on stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Diagnostics with the commands inline.
    Text,
    /// Remediation commands only, one per line.
    Commands,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    // stdout carries the remediation contract; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(isolate_analyzer_args(std::env::args_os()));
    cmd_check(cli)
}

/// Moves the positionals behind a `--` separator so nothing after PACKAGE is read as an importfix
/// option, even when it looks like one (`--version`, `--config x`, ...).
///
/// Options before the positionals keep their meaning. A `--` given before all positionals are
/// seen is dropped; one given after PACKAGE is forwarded to the analyzer like any other argument.
fn isolate_analyzer_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let cmd = Cli::command();
    let value_options: Vec<String> = cmd
        .get_arguments()
        .filter(|a| a.get_action().takes_values())
        .filter_map(|a| a.get_long().map(|long| format!("--{long}")))
        .collect();
    let positional_count = cmd.get_positionals().filter(|a| !a.is_last_set()).count();

    let mut args = args.into_iter();
    let mut options: Vec<OsString> = args.next().into_iter().collect();
    let mut positionals: Vec<OsString> = Vec::new();
    let mut separator_seen = false;

    while positionals.len() < positional_count {
        let Some(arg) = args.next() else { break };
        if separator_seen {
            positionals.push(arg);
            continue;
        }
        let flag = arg.to_str().filter(|a| a.starts_with('-') && a.len() > 1);
        let takes_value = flag.is_some_and(|f| value_options.iter().any(|o| o == f));
        if arg == "--" {
            separator_seen = true;
        } else if flag.is_some() {
            options.push(arg);
            if takes_value {
                options.extend(args.next());
            }
        } else {
            positionals.push(arg);
        }
    }

    options.push(OsString::from("--"));
    options.extend(positionals);
    options.extend(args);
    options
}

fn cmd_check(cli: Cli) -> anyhow::Result<u8> {
    let file_config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8Path::new(".")).context("load importfix.toml")?,
    };
    let merged = ConfigMerger::new(file_config)
        .merge_check_args(cli.analyzer.as_deref(), cli.test_wrapper_suffix.as_deref());

    debug!(
        "merged config: analyzer={}, test_wrapper_suffix={}, edit_tool={}, reproduce_config={}",
        merged.analyzer, merged.test_wrapper_suffix, merged.edit_tool, merged.reproduce_config
    );

    let settings = CheckSettings {
        output_path: cli.output,
        label: cli.label,
        package_path: cli.package,
        analyzer_args: cli.analyzer_args,
        test_wrapper_suffix: merged.test_wrapper_suffix,
        edit_tool: merged.edit_tool,
        reproduce_config: merged.reproduce_config,
        report_path: cli.report,
    };

    let analyzer = ProcessAnalyzer::new(merged.analyzer);
    let outcome = run_check(&settings, &analyzer, &FsWritePort, tool_info())?;

    let text = match cli.format {
        OutputFormat::Text => render_text(&outcome.interpretation),
        OutputFormat::Commands => render_commands(&outcome.interpretation),
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("write stdout")?;
    stdout.flush().context("flush stdout")?;

    Ok(u8::try_from(outcome.exit_code).unwrap_or(1))
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "importfix".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
