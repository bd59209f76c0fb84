//! Configuration discovery and effective settings resolution.
//!
//! pretty-lint reads `pretty-lint.toml|yaml|yml` from the working directory
//! (or closest ancestor, stopping at a `.git` directory) and merges it with
//! CLI flags to produce an `Effective` config.
//! Defaults:
//! - `color`, `hyperlinks`: `auto` (follow terminal detection)
//! - `cwdHint`: true
//! - `rulesMeta`: none
//! - `docs.lookup`: true, `docs.plugins`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::terminal::Capabilities;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

const CONFIG_FILES: [&str; 3] = ["pretty-lint.toml", "pretty-lint.yaml", "pretty-lint.yml"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Tri-state switch for detected terminal features.
pub enum Toggle {
    #[default]
    Auto,
    Always,
    Never,
}

impl Toggle {
    /// Resolve against what detection found.
    pub fn apply(self, detected: bool) -> bool {
        match self {
            Toggle::Auto => detected,
            Toggle::Always => true,
            Toggle::Never => false,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Documentation lookup section under `[docs]`.
pub struct DocsCfg {
    /// Disable the built-in URL table entirely.
    pub lookup: Option<bool>,
    /// Extra plugin URL templates: plugin name -> URL containing `{rule}`.
    #[serde(default)]
    pub plugins: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Root configuration loaded from `pretty-lint.toml|yaml`.
pub struct PrettyLintConfig {
    pub color: Option<Toggle>,
    pub hyperlinks: Option<Toggle>,
    pub cwd_hint: Option<bool>,
    /// Rules metadata JSON, relative to the config file's directory.
    pub rules_meta: Option<String>,
    #[serde(default)]
    pub docs: Option<DocsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub cwd: PathBuf,
    pub color: Toggle,
    pub hyperlinks: Toggle,
    pub cwd_hint: bool,
    pub rules_meta: Option<PathBuf>,
    pub docs_lookup: bool,
    pub doc_plugins: HashMap<String, String>,
}

impl Effective {
    /// Apply configured overrides on top of detected capabilities.
    pub fn capabilities(&self, detected: Capabilities) -> Capabilities {
        Capabilities {
            interactive: detected.interactive,
            color: self.color.apply(detected.color),
            hyperlinks: self.hyperlinks.apply(detected.hyperlinks),
            suppress_cwd_hint: detected.suppress_cwd_hint || !self.cwd_hint,
        }
    }
}

/// Walk upward from `start` to find the directory holding the config.
///
/// Stops when a `pretty-lint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PrettyLintConfig` from `root` if a config file is present.
pub fn load_config(root: &Path) -> Result<Option<PrettyLintConfig>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<PrettyLintConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<PrettyLintConfig>(&s).map_err(|e| e.to_string())
        };
        return match parsed {
            Ok(cfg) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(Some(cfg))
            }
            Err(message) => Err(Error::Config { path, message }),
        };
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_cwd: Option<&str>,
    cli_color: Option<Toggle>,
    cli_hyperlinks: Option<Toggle>,
    cli_no_cwd_hint: bool,
    cli_rules_meta: Option<&str>,
) -> Result<Effective> {
    let current = std::env::current_dir().map_err(|source| Error::Io {
        path: PathBuf::from("."),
        source,
    })?;
    let cwd = match cli_cwd {
        Some(dir) => absolutize(&current, Path::new(dir)),
        None => current,
    };
    let root = detect_config_root(&cwd);
    let cfg = load_config(&root)?.unwrap_or_default();

    let color = cli_color.or(cfg.color).unwrap_or_default();
    let hyperlinks = cli_hyperlinks.or(cfg.hyperlinks).unwrap_or_default();
    let cwd_hint = if cli_no_cwd_hint {
        false
    } else {
        cfg.cwd_hint.unwrap_or(true)
    };

    // CLI paths are taken as given; config paths are relative to the config root
    let rules_meta = cli_rules_meta
        .map(PathBuf::from)
        .or_else(|| cfg.rules_meta.as_ref().map(|p| root.join(p)));

    let docs = cfg.docs.unwrap_or_default();

    Ok(Effective {
        cwd,
        color,
        hyperlinks,
        cwd_hint,
        rules_meta,
        docs_lookup: docs.lookup.unwrap_or(true),
        doc_plugins: docs.plugins,
    })
}

/// Join `dir` onto `base` and fold `.`/`..` lexically. Absolute `dir` wins.
pub fn absolutize(base: &Path, dir: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in base.join(dir).components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
