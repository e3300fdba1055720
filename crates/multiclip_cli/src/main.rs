//! `multiclip` command-line entry point.
//!
//! # Responsibility
//! - Wire the concrete fzf, clipboard and osascript adapters into core flows.
//! - Map flow results to stdout/stderr output and process exit codes.

mod automation;
mod cli;
mod clipboard;
mod fzf;

use anyhow::Context;
use automation::OsaScriptAutomation;
use clap::Parser;
use cli::{Cli, Command, PickArgs, PreviewArgs, SendArgs, StoreArgs};
use clipboard::ArboardClipboard;
use fzf::{FzfSelector, FzfStyleChooser};
use log::{error, info, warn};
use multiclip_core::{
    default_log_dir, default_log_level, init_logging, read_items, send_clipboard,
    ClipboardPort, DeliveryOptions, DeliveryOutcome, FixedStyle, PickerConfig, PickerService,
    SqliteRecordSource,
};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    let code = match cli.command {
        Command::Pick(args) => run_pick(args),
        Command::Send(args) => run_send(args),
        Command::Preview(args) => run_preview(args),
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn setup_logging(cli: &Cli) {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn picker_config(store: &StoreArgs, limit: Option<u32>) -> PickerConfig {
    let mut config = PickerConfig::from_env();
    if let Some(db_path) = &store.db_path {
        config = config.with_db_path(db_path);
    }
    if let Some(limit) = limit {
        config = config.with_limit(limit);
    }
    config
}

fn run_pick(args: PickArgs) -> i32 {
    if let Err(err) = which::which("fzf") {
        eprintln!("fzf not found in PATH ({err}); install it, e.g. `brew install fzf`");
        return 1;
    }

    let config = picker_config(&args.store, args.limit);
    let picker = PickerService::new(SqliteRecordSource::new(config.db_path.clone()), &config);
    let mut selector = FzfSelector::new(std::env::current_exe().ok(), args.store.db_path.clone());

    let picked = match args.style {
        Some(style) => picker.pick(&mut selector, &mut FixedStyle(style)),
        None => picker.pick(&mut selector, &mut FzfStyleChooser),
    };
    let result = match picked {
        Ok(result) => result,
        Err(err) => {
            if err.is_cancellation() {
                info!("event=pick_run module=cli status=cancelled");
            } else {
                error!("event=pick_run module=cli status=error error={err}");
            }
            eprintln!("{err}");
            return err.exit_code();
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout
        .write_all(result.text.as_bytes())
        .and_then(|()| stdout.flush())
    {
        eprintln!("cannot write result: {err}");
        return 1;
    }

    if args.copy {
        if let Err(err) = copy_to_clipboard(&result.text) {
            eprintln!("{err:#}");
            return 1;
        }
        eprintln!(
            "\u{2713} Copied {} item(s) as {}",
            result.item_count,
            result.style.label()
        );
    } else {
        eprintln!(
            "\u{2713} Formatted {} item(s) as {}",
            result.item_count,
            result.style.label()
        );
    }
    0
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = ArboardClipboard::new().context("cannot open clipboard")?;
    clipboard
        .write_text(text)
        .context("cannot copy result to clipboard")?;
    Ok(())
}

fn run_send(args: SendArgs) -> i32 {
    let mut clipboard = match ArboardClipboard::new() {
        Ok(clipboard) => clipboard,
        Err(err) => {
            eprintln!("Error reading clipboard: {err}");
            return 1;
        }
    };

    if args.dry_run {
        return match read_items(&mut clipboard, args.style) {
            Ok(items) => {
                println!("{}", items.join("\n\n"));
                0
            }
            Err(err) => {
                eprintln!("{err}");
                err.exit_code()
            }
        };
    }

    let mut automation = OsaScriptAutomation;
    let options = DeliveryOptions::with_delay(args.delay);
    match send_clipboard(&mut clipboard, &mut automation, args.style, options) {
        Ok(report) => {
            match report.outcome {
                DeliveryOutcome::Completed => {
                    eprintln!("\u{2713} Sent {} of {} item(s)", report.delivered, report.total);
                }
                DeliveryOutcome::Aborted { observed_focus } => {
                    warn!(
                        "event=send_run module=cli status=aborted focus={observed_focus} delivered={}",
                        report.delivered
                    );
                    eprintln!(
                        "Focus changed to {observed_focus}; aborted after {} item(s).",
                        report.delivered
                    );
                }
            }
            0
        }
        Err(err) => {
            if !err.is_cancellation() {
                error!("event=send_run module=cli status=error error={err}");
            }
            eprintln!("{err}");
            err.exit_code()
        }
    }
}

fn run_preview(args: PreviewArgs) -> i32 {
    let config = picker_config(&args.store, None);
    let picker = PickerService::new(SqliteRecordSource::new(config.db_path.clone()), &config);
    match picker.preview(args.id) {
        Ok(Some(text)) => {
            println!("{text}");
            0
        }
        Ok(None) => {
            eprintln!("Record {} not found", args.id);
            1
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
