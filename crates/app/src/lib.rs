//! Campus command-line composition root
//!
//! Wires configuration, snapshot decoding and label resolution into the
//! `chat-labels` binary.

use anyhow::{anyhow, Context};
use clap::Parser;
use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use campus_common::{Config, LogFormat, OutputFormat};
use campus_conversations::{decode_snapshot, label_conversations, ConversationLabel};

/// Resolve conversation display names from a backend snapshot
#[derive(Debug, Parser)]
#[command(name = "chat-labels", version, about)]
pub struct Cli {
    /// Viewer to resolve names for (falls back to CAMPUS_VIEWER_ID)
    #[arg(long)]
    pub viewer: Option<String>,

    /// Output format: text or json (falls back to CAMPUS_OUTPUT_FORMAT)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Snapshot file; reads stdin when omitted or "-"
    pub snapshot: Option<PathBuf>,
}

/// Install the global tracing subscriber on stderr
#[mutants::skip] // Global side effect, cannot be observed in tests
pub fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.rust_log)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus=info"));

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .pretty()
            .init(),
    }
}

/// Read the snapshot from a file, or from `stdin` for `None` / `-`
pub fn read_snapshot<R: Read>(path: Option<&Path>, stdin: R) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read snapshot {}", p.display())),
        _ => std::io::read_to_string(stdin).context("Failed to read snapshot from stdin"),
    }
}

/// Viewer and output format for one invocation, flags before configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub viewer: String,
    pub format: OutputFormat,
}

impl Options {
    pub fn resolve(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let viewer = cli
            .viewer
            .as_deref()
            .or(config.viewer_id.as_deref())
            .ok_or_else(|| anyhow!("No viewer given: pass --viewer or set CAMPUS_VIEWER_ID"))?;

        // CAMPUS_OUTPUT_FORMAT is only consulted without an explicit --format
        let format = match cli.format {
            Some(format) => format,
            None => config.output_format()?,
        };

        Ok(Options {
            viewer: viewer.to_string(),
            format,
        })
    }
}

/// Escape control characters so a field stays on one tab-separated line
fn text_field(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Render labels in the requested format
///
/// Text output is one `<id>\t<name>` line per conversation, with control
/// characters in either field escaped (`\n`, `\t`, `\u{..}`).
pub fn render(labels: &[ConversationLabel], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for label in labels {
                out.push_str(&text_field(&label.id));
                out.push('\t');
                out.push_str(&text_field(&label.display_name));
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut out =
                serde_json::to_string_pretty(labels).context("Failed to encode labels")?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn label_snapshot(options: &Options, snapshot: &str) -> anyhow::Result<String> {
    let conversations = decode_snapshot(snapshot).context("Failed to decode snapshot")?;
    debug!(viewer = %options.viewer, format = %options.format, "Resolving conversation labels");

    let labels = label_conversations(&conversations, &options.viewer);
    info!(count = labels.len(), "Resolved conversation labels");

    render(&labels, options.format)
}

/// Decode `snapshot`, resolve labels for the configured viewer and render them
pub fn run(cli: &Cli, config: &Config, snapshot: &str) -> anyhow::Result<String> {
    let options = Options::resolve(cli, config)?;
    label_snapshot(&options, snapshot)
}

/// Resolve options, then read the snapshot named by `cli` (or `stdin`) and
/// label it. Option errors surface before any input is read.
pub fn execute<R: Read>(cli: &Cli, config: &Config, stdin: R) -> anyhow::Result<String> {
    let options = Options::resolve(cli, config)?;
    let snapshot = read_snapshot(cli.snapshot.as_deref(), stdin)?;
    label_snapshot(&options, &snapshot)
}
