use clap::{Args, Parser, Subcommand};
use multiclip_core::{RecordId, Style};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "multiclip", version)]
#[command(about = "Pick clipboard history into one block, or replay a block item by item")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select history entries and print them as one formatted block.
    Pick(PickArgs),
    /// Paste each item of the clipboard into the focused app, one by one.
    Send(SendArgs),
    /// Print the full content of one history entry (used by the picker preview).
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Clipboard history database (defaults to Alfred's).
    #[arg(long = "db", value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Number of recent entries offered (overrides MP_LIMIT).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Output style; asks interactively when omitted.
    #[arg(long = "format", value_name = "STYLE")]
    pub style: Option<Style>,

    /// Also place the result on the clipboard.
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Marker applied to each item: dash|numbered|bullet|comma|plain.
    #[arg(long = "format", value_name = "STYLE")]
    pub style: Style,

    /// Seconds to wait after each item.
    #[arg(long, value_name = "SECS", value_parser = parse_delay, default_value = "0.25")]
    pub delay: Duration,

    /// Print the items that would be sent and exit.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    pub id: RecordId,
}

fn parse_delay(value: &str) -> Result<Duration, String> {
    let seconds = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid delay `{value}`: {err}"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("delay must be a non-negative number of seconds, got `{value}`"));
    }
    Duration::try_from_secs_f64(seconds)
        .map_err(|err| format!("delay `{value}` is out of range: {err}"))
}
