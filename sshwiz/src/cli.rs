use anyhow::{Context, Result};
use clap::Parser;

use crate::domain::StoredData;
use crate::{candidates, connect, picker, store};

#[derive(Parser, Debug)]
#[command(name = "sshwiz", version, about = "SSH connection wizard (sshwiz)")]
pub struct Cli {}

/// Walks the four selection stages, remembers the answers, and hands off
/// to ssh after confirmation.
pub fn run(_cli: Cli) -> Result<()> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let mut stored = match store::load(&home) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("warning: starting without history: {err:#}");
            StoredData::default()
        }
    };
    let pool = candidates::gather(&home, &stored);

    // The current user is always offered as a key and never written back.
    let key = picker::select(pool.keys, "key").context("selecting key")?;
    if key != pool.current_user {
        store::add_or_update(&mut stored.keys, &key);
    }
    let account = picker::select(pool.accounts, "account").context("selecting account")?;
    store::add_or_update(&mut stored.accounts, &account);
    let host = picker::select(pool.hosts, "host").context("selecting host")?;
    store::add_or_update(&mut stored.hosts, &host);
    // An empty jump means a direct connection; nothing to remember then.
    let jump = picker::select(pool.jumps, "jump").context("selecting jump host")?;
    if !jump.is_empty() {
        store::add_or_update(&mut stored.jumps, &jump);
    }

    if let Err(err) = store::save(&home, &stored) {
        eprintln!("warning: could not save history: {err:#}");
    }

    let target = connect::compose_target(&key, &account, &host, &jump);
    if connect::confirm(&target)? {
        connect::launch(&target)
    } else {
        println!("Connection cancelled");
        Ok(())
    }
}
