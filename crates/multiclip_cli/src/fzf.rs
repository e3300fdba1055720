//! `fzf`-backed selector and style chooser.
//!
//! A non-zero `fzf` exit (Esc, Ctrl-C, no match) is treated as "no
//! selection"; only a failure to run `fzf` at all is an error.

use log::{info, warn};
use multiclip_core::{
    CandidateLabel, CandidateSelector, RecordId, SelectorError, Style, StyleChooser,
};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const FZF_BIN: &str = "fzf";

/// Multi-select over candidate labels with a live preview pane.
pub struct FzfSelector {
    preview_command: Option<String>,
}

impl FzfSelector {
    /// `preview_exe` is re-invoked as `<exe> preview <id>` by fzf.
    pub fn new(preview_exe: Option<PathBuf>, db_path: Option<PathBuf>) -> Self {
        let preview_command = preview_exe.map(|exe| {
            let mut command = format!("{} preview", shell_quote(&exe.display().to_string()));
            if let Some(db) = db_path {
                command.push_str(&format!(" --db {}", shell_quote(&db.display().to_string())));
            }
            command.push_str(" {1}");
            command
        });
        Self { preview_command }
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "--multi".to_string(),
            "--read0".to_string(),
            "--print0".to_string(),
            "--with-nth=2..".to_string(),
            "--delimiter=\t".to_string(),
            "--header=TAB=select  Ctrl-A=all  Ctrl-D=none  Enter=confirm".to_string(),
            "--bind=ctrl-a:select-all,ctrl-d:deselect-all".to_string(),
            "--reverse".to_string(),
            "--height=100%".to_string(),
        ];
        if let Some(preview) = &self.preview_command {
            args.push("--preview".to_string());
            args.push(preview.clone());
            args.push("--preview-window=right:50%:wrap".to_string());
        }
        args
    }
}

impl CandidateSelector for FzfSelector {
    fn select(
        &mut self,
        candidates: &[CandidateLabel],
    ) -> Result<Option<Vec<RecordId>>, SelectorError> {
        let Some(output) = run_fzf(&self.args(), &candidate_input(candidates))? else {
            return Ok(None);
        };

        let ids = parse_selected_ids(&output);
        info!(
            "event=fzf_select module=cli status=ok offered={} selected={}",
            candidates.len(),
            ids.len()
        );
        Ok((!ids.is_empty()).then_some(ids))
    }
}

/// Single-choice style menu.
#[derive(Debug, Default)]
pub struct FzfStyleChooser;

impl StyleChooser for FzfStyleChooser {
    fn choose(&mut self, styles: &[Style]) -> Result<Option<Style>, SelectorError> {
        let menu = styles
            .iter()
            .map(|style| style.label())
            .collect::<Vec<_>>()
            .join("\n");
        let args = [
            "--header=Select format:",
            "--height=10",
            "--reverse",
            "--no-multi",
        ]
        .map(str::to_string);

        let Some(output) = run_fzf(&args, menu.as_bytes())? else {
            return Ok(None);
        };
        let choice = String::from_utf8_lossy(&output);
        let choice = choice.trim();
        if choice.is_empty() {
            return Ok(None);
        }
        Ok(Some(Style::from_label_or_plain(choice)))
    }
}

/// Runs fzf with `input` on stdin; `None` when the user cancelled.
fn run_fzf(args: &[String], input: &[u8]) -> Result<Option<Vec<u8>>, SelectorError> {
    let mut child = Command::new(FZF_BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|err| SelectorError::new(format!("cannot start {FZF_BIN}: {err}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        // fzf may exit before reading everything; a broken pipe is not fatal.
        if let Err(err) = stdin.write_all(input) {
            warn!("event=fzf_input module=cli status=error error={err}");
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|err| SelectorError::new(format!("{FZF_BIN} did not finish: {err}")))?;
    if !output.status.success() {
        info!(
            "event=fzf_exit module=cli status=cancelled code={:?}",
            output.status.code()
        );
        return Ok(None);
    }
    Ok(Some(output.stdout))
}

fn candidate_input(candidates: &[CandidateLabel]) -> Vec<u8> {
    let mut input = Vec::new();
    for label in candidates {
        input.extend_from_slice(format!("{}\t{label}", label.id).as_bytes());
        input.push(0);
    }
    input
}

fn parse_selected_ids(output: &[u8]) -> Vec<RecordId> {
    output
        .split(|byte| *byte == 0)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let entry = String::from_utf8_lossy(entry);
            entry.split('\t').next()?.trim().parse().ok()
        })
        .collect()
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
