//! CLI argument parsing via `clap`.

use crate::config::Toggle;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pretty-lint",
    version,
    about = "Pretty terminal reports for linter JSON results",
    long_about = "pretty-lint: render linter JSON results as a grouped, column-aligned terminal report.\n\nWarnings are folded into a per-rule summary; errors are listed per file with clickable rule documentation links where the terminal supports them.\n\nConfiguration precedence: CLI > pretty-lint.toml > defaults.",
    after_help = "Examples:\n  eslint -f json src | pretty-lint\n  pretty-lint report.json --rules-meta rules-meta.json\n  pretty-lint report.json --color never --hyperlinks never"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Lint results JSON file; '-' or omitted reads stdin")]
    pub input: Option<String>,
    #[arg(long, help = "Rules metadata JSON (ruleId -> {docs: {url}})")]
    pub rules_meta: Option<String>,
    #[arg(long, value_enum, help = "Colorize output (default: auto)")]
    pub color: Option<Toggle>,
    #[arg(long, value_enum, help = "Link rule ids to their docs (default: auto)")]
    pub hyperlinks: Option<Toggle>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not announce the working directory to the terminal")]
    pub no_cwd_hint: bool,
    #[arg(long, help = "Directory paths are shown relative to (default: current dir)")]
    pub cwd: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "pretty-lint",
            "report.json",
            "--rules-meta",
            "meta.json",
            "--color",
            "never",
            "--hyperlinks",
            "always",
            "--no-cwd-hint",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.input.as_deref(), Some("report.json"));
        assert_eq!(cli.rules_meta.as_deref(), Some("meta.json"));
        assert_eq!(cli.color, Some(Toggle::Never));
        assert_eq!(cli.hyperlinks, Some(Toggle::Always));
        assert!(cli.no_cwd_hint);
        assert!(cli.verbose);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pretty-lint"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.color.is_none());
        assert!(!cli.no_cwd_hint);
    }
}
