//! Terminal capabilities and escape sequences.
//!
//! Capabilities are read once into a plain value so rendering stays a pure
//! function of its inputs; tests build them directly or via `from_env`.

use std::io::IsTerminal;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What the output stream can do.
pub struct Capabilities {
    /// Output goes to an interactive terminal.
    pub interactive: bool,
    pub color: bool,
    /// OSC 8 hyperlinks are rendered as clickable links.
    pub hyperlinks: bool,
    /// Skip the working-directory hint (set under CI).
    pub suppress_cwd_hint: bool,
}

impl Capabilities {
    /// No color, no links, no hints.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Inspect stdout and the process environment.
    pub fn detect() -> Self {
        Self::from_env(std::io::stdout().is_terminal(), |key| std::env::var(key).ok())
    }

    pub fn from_env<F>(is_tty: bool, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ci = env("CI").is_some_and(|v| !v.is_empty());
        Self {
            interactive: is_tty,
            color: color_support(is_tty, &env),
            hyperlinks: hyperlink_support(is_tty, &env),
            suppress_cwd_hint: ci,
        }
    }

    pub fn show_cwd_hint(&self) -> bool {
        self.interactive && !self.suppress_cwd_hint
    }
}

fn color_support<F: Fn(&str) -> Option<String>>(is_tty: bool, env: &F) -> bool {
    if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if let Some(force) = env("FORCE_COLOR") {
        return force != "0" && force != "false";
    }
    is_tty && env("TERM").as_deref() != Some("dumb")
}

fn hyperlink_support<F: Fn(&str) -> Option<String>>(is_tty: bool, env: &F) -> bool {
    if let Some(force) = env("FORCE_HYPERLINK") {
        return !(!force.is_empty() && force.trim().parse::<i64>() == Ok(0));
    }
    if !is_tty {
        return false;
    }
    if env("CI").is_some() || env("TEAMCITY_VERSION").is_some() {
        return false;
    }
    if env("WT_SESSION").is_some() || env("DOMTERM").is_some() || env("KONSOLE_VERSION").is_some() {
        return true;
    }
    if let Some(program) = env("TERM_PROGRAM") {
        let (major, minor, _) = parse_version(&env("TERM_PROGRAM_VERSION").unwrap_or_default());
        match program.as_str() {
            "iTerm.app" => return if major == 3 { minor >= 1 } else { major > 3 },
            "WezTerm" => return major >= 20200620,
            "vscode" => return major > 1 || (major == 1 && minor >= 72),
            "ghostty" => return true,
            _ => {}
        }
    }
    if let Some(vte) = env("VTE_VERSION") {
        // 0.50.0 shipped a broken implementation
        if vte == "0.50.0" {
            return false;
        }
        let (major, minor, _) = parse_version(&vte);
        return major > 0 || minor >= 50;
    }
    false
}

/// `"3.4.19"` -> `(3, 4, 19)`; missing or non-numeric parts are 0.
fn parse_version(s: &str) -> (u64, u64, u64) {
    let mut parts = s
        .split(['.', '-'])
        .map(|p| p.trim().parse::<u64>().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// iTerm proprietary escape announcing the working directory, which makes
/// relative paths in the output clickable.
pub fn set_cwd(cwd: &Path) -> String {
    format!("\x1b]50;CurrentDir={}\x07", cwd.display())
}

/// OSC 8 hyperlink wrapping `text`.
pub fn link(text: &str, url: &str) -> String {
    format!("\x1b]8;;{}\x07{}\x1b]8;;\x07", url, text)
}
