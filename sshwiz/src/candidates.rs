use std::fs;
use std::path::Path;

use crate::domain::{StoredData, StoredEntry};

/// Selectable values for each stage, ordered as they will be offered.
#[derive(Debug, Default)]
pub struct Candidates {
    pub current_user: String,
    pub keys: Vec<String>,
    pub accounts: Vec<String>,
    pub hosts: Vec<String>,
    pub jumps: Vec<String>,
}

/// Collects candidates from the ssh client config and from history, with the
/// local username always offered first. An unreadable config is skipped.
pub fn gather(home: &Path, stored: &StoredData) -> Candidates {
    let mut pool = Candidates {
        current_user: whoami::username(),
        ..Candidates::default()
    };
    pool.keys.push(pool.current_user.clone());

    if let Ok(text) = fs::read_to_string(home.join(".ssh").join("config")) {
        scan_client_config(&text, &mut pool);
    }

    pool.keys.extend(remembered(&stored.keys));
    pool.accounts.extend(remembered(&stored.accounts));
    pool.hosts.extend(remembered(&stored.hosts));
    pool.jumps.extend(remembered(&stored.jumps));
    pool
}

fn remembered(entries: &[StoredEntry]) -> impl Iterator<Item = String> + '_ {
    entries.iter().map(|e| e.value.clone())
}

/// Pulls host, user, and jump names out of an ssh client config. `Host`
/// patterns containing `*` are filters, not connectable names, and are
/// left out.
fn scan_client_config(text: &str, pool: &mut Candidates) {
    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Host ") {
            pool.hosts.extend(
                rest.split_whitespace()
                    .filter(|name| !name.contains('*'))
                    .map(str::to_string),
            );
        } else if let Some(rest) = line.strip_prefix("User ") {
            pool.accounts.push(rest.to_string());
        } else if let Some(rest) = line.strip_prefix("ProxyJump ") {
            pool.jumps.push(rest.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::add_or_update;
    use tempfile::TempDir;

    #[test]
    fn scan_picks_up_three_directives() {
        let mut pool = Candidates::default();
        scan_client_config(
            "Host foo bar\nHost *wild*\nUser svc1\nProxyJump jmp1\n",
            &mut pool,
        );
        assert_eq!(pool.hosts, ["foo", "bar"]);
        assert_eq!(pool.accounts, ["svc1"]);
        assert_eq!(pool.jumps, ["jmp1"]);
    }

    #[test]
    fn scan_skips_wildcard_tokens_but_keeps_plain_ones() {
        let mut pool = Candidates::default();
        scan_client_config("Host web-* db-1\n", &mut pool);
        assert_eq!(pool.hosts, ["db-1"]);
    }

    #[test]
    fn scan_ignores_unknown_lines_but_trims_leading_space() {
        let mut pool = Candidates::default();
        scan_client_config(
            "  Host padded\nHostName real.example\n# User nope\nPort 22\n",
            &mut pool,
        );
        assert_eq!(pool.hosts, ["padded"]);
        assert!(pool.accounts.is_empty());
        assert!(pool.jumps.is_empty());
    }

    #[test]
    fn gather_orders_user_config_then_history() {
        let home = TempDir::new().unwrap();
        let ssh_dir = home.path().join(".ssh");
        std::fs::create_dir_all(&ssh_dir).unwrap();
        std::fs::write(ssh_dir.join("config"), "Host cfg-host\n").unwrap();
        let mut stored = StoredData::default();
        add_or_update(&mut stored.keys, "old-key");
        add_or_update(&mut stored.hosts, "old-host");

        let pool = gather(home.path(), &stored);
        assert_eq!(pool.keys[0], pool.current_user);
        assert_eq!(&pool.keys[1..], ["old-key"]);
        assert_eq!(pool.hosts, ["cfg-host", "old-host"]);
    }

    #[test]
    fn gather_keeps_duplicates_across_sources() {
        let home = TempDir::new().unwrap();
        let ssh_dir = home.path().join(".ssh");
        std::fs::create_dir_all(&ssh_dir).unwrap();
        std::fs::write(ssh_dir.join("config"), "Host repeat\n").unwrap();
        let mut stored = StoredData::default();
        add_or_update(&mut stored.hosts, "repeat");

        let pool = gather(home.path(), &stored);
        assert_eq!(pool.hosts, ["repeat", "repeat"]);
    }

    #[test]
    fn gather_without_client_config_still_offers_user_and_history() {
        let home = TempDir::new().unwrap();
        let mut stored = StoredData::default();
        add_or_update(&mut stored.accounts, "svc1");

        let pool = gather(home.path(), &stored);
        assert_eq!(pool.keys, [pool.current_user.clone()]);
        assert_eq!(pool.accounts, ["svc1"]);
        assert!(pool.hosts.is_empty());
    }
}
