use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context, Result};

const PICKER_BIN: &str = "fzf";

/// Runs the fuzzy picker over `items` and returns the chosen value.
///
/// With `--print-query` the picker emits the typed query on the first line
/// and the selection on the second. On exit status 1 (no match) the typed
/// query alone is the answer, which is how new values enter the pool.
pub fn select(items: Vec<String>, prompt: &str) -> Result<String> {
    let prompt_text = format!("{prompt} ({} options) > ", items.len());
    let mut child = Command::new(PICKER_BIN)
        .args([
            "--height",
            "20%",
            "--min-height",
            "1",
            "--print-query",
            "--no-margin",
            "--no-padding",
            "--prompt",
        ])
        .arg(&prompt_text)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("could not launch {PICKER_BIN}"))?;

    let mut stdin = child.stdin.take().context("picker stdin not captured")?;
    // The picker filters while reading; writing everything up front can fill
    // the pipe and deadlock against our own read. Dropping the handle closes
    // the pipe and signals end of input.
    let feeder = thread::spawn(move || {
        for item in items {
            if writeln!(stdin, "{item}").is_err() {
                break;
            }
        }
    });
    let output = child
        .wait_with_output()
        .with_context(|| format!("could not read {PICKER_BIN} output"))?;
    let _ = feeder.join();

    resolve_choice(output.status.code(), &String::from_utf8_lossy(&output.stdout))
}

fn resolve_choice(code: Option<i32>, stdout: &str) -> Result<String> {
    match code {
        Some(0) => {
            let lines: Vec<&str> = stdout.split('\n').collect();
            if lines.len() >= 2 {
                let selection = lines[1].trim();
                if selection.is_empty() {
                    Ok(lines[0].trim().to_string())
                } else {
                    Ok(selection.to_string())
                }
            } else {
                Ok(stdout.trim().to_string())
            }
        }
        Some(1) => {
            // No match: the first output line still carries the typed query.
            let query = stdout.split('\n').next().unwrap_or("");
            if query.is_empty() {
                anyhow::bail!("{PICKER_BIN} exited with status 1 and no query")
            }
            Ok(query.to_string())
        }
        Some(status) => anyhow::bail!("{PICKER_BIN} exited with status {status}"),
        None => anyhow::bail!("{PICKER_BIN} terminated by a signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_exit_prefers_selection_line() {
        assert_eq!(resolve_choice(Some(0), "quer\npicked\n").unwrap(), "picked");
    }

    #[test]
    fn clean_exit_falls_back_to_query_when_selection_empty() {
        assert_eq!(resolve_choice(Some(0), "typed\n\n").unwrap(), "typed");
    }

    #[test]
    fn clean_exit_with_both_empty_resolves_empty() {
        assert_eq!(resolve_choice(Some(0), "\n\n").unwrap(), "");
    }

    #[test]
    fn single_line_output_is_trimmed_whole() {
        assert_eq!(resolve_choice(Some(0), " lone ").unwrap(), "lone");
    }

    #[test]
    fn no_match_exit_returns_typed_query() {
        assert_eq!(resolve_choice(Some(1), "freeform\n").unwrap(), "freeform");
    }

    #[test]
    fn no_match_exit_without_query_is_error() {
        assert!(resolve_choice(Some(1), "\n").is_err());
        assert!(resolve_choice(Some(1), "").is_err());
    }

    #[test]
    fn other_exits_are_errors() {
        assert!(resolve_choice(Some(2), "").is_err());
        assert!(resolve_choice(Some(130), "").is_err());
        assert!(resolve_choice(None, "").is_err());
    }
}
