use std::path::PathBuf;

use crate::cli::Cli;

/// Resolved options for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub store_path: PathBuf,
    pub audit: bool,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let source = shellexpand_path(&cli.src);
        let destination = cli
            .output
            .filter(|o| !o.is_empty())
            .map(|o| shellexpand_path(&o))
            .unwrap_or_else(|| source.clone());
        let store_path = cli
            .config
            .filter(|c| !c.is_empty())
            .map(|c| shellexpand_path(&c))
            .unwrap_or_else(default_store_path);
        Self {
            source,
            destination,
            store_path,
            audit: cli.audit,
        }
    }
}

pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".qifcat.json")
}

pub fn shellexpand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(path)
}
