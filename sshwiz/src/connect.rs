use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

const SSH_BIN: &str = "ssh";

/// Joins the selected parts into the `key@account@host[@jump]` target.
/// Components pass through verbatim; the ssh client rejects malformed input.
pub fn compose_target(key: &str, account: &str, host: &str, jump: &str) -> String {
    let mut target = format!("{key}@{account}@{host}");
    if !jump.is_empty() {
        target.push('@');
        target.push_str(jump);
    }
    target
}

/// Shows the composed target and asks for a go-ahead. Only a lone `y`
/// (any case) proceeds.
pub fn confirm(target: &str) -> Result<bool> {
    print!("\nConnect using: {target}\nProceed? [y/N] ");
    io::stdout().flush().context("could not flush stdout")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("could not read confirmation")?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Hands the terminal to ssh until the remote session ends.
pub fn launch(target: &str) -> Result<()> {
    let status = Command::new(SSH_BIN)
        .arg(target)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("could not launch {SSH_BIN}"))?;
    if !status.success() {
        anyhow::bail!("{SSH_BIN} failed: {status}");
    }
    Ok(())
}
