//! pretty-lint binary entry point.
//! Reads a lint report, renders it, and exits non-zero when it has errors.

use clap::Parser;
use pretty_lint::cli::Cli;
use pretty_lint::docs::{BuiltinRuleDocs, DocsResolver, NoRuleDocs, RuleDocsLookup};
use pretty_lint::error::Result;
use pretty_lint::terminal::Capabilities;
use pretty_lint::{aggregate, config, input, output};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            let color = stderr_color(std::io::stderr().is_terminal(), |key| {
                std::env::var(key).ok()
            });
            eprintln!("{} {}", output::error_prefix(color), e);
            ExitCode::from(2)
        }
    }
}

/// Diagnostics on stderr follow the same color rules as the report.
fn stderr_color<F: Fn(&str) -> Option<String>>(is_tty: bool, env: F) -> bool {
    Capabilities::from_env(is_tty, env).color
}

fn run(cli: Cli) -> Result<ExitCode> {
    let eff = config::resolve_effective(
        cli.cwd.as_deref(),
        cli.color,
        cli.hyperlinks,
        cli.no_cwd_hint,
        cli.rules_meta.as_deref(),
    )?;

    let (results, bundled_meta) = input::read_report(cli.input.as_deref())?;
    // A standalone metadata file replaces whatever the report carried
    let rules_meta = match eff.rules_meta.as_deref() {
        Some(path) => Some(input::read_rules_meta(path)?),
        None => bundled_meta,
    };
    tracing::debug!(
        files = results.len(),
        rules_meta = rules_meta.as_ref().map_or(0, |m| m.len()),
        "report loaded"
    );

    let caps = eff.capabilities(Capabilities::detect());
    let builtin = BuiltinRuleDocs::new().with_plugins(eff.doc_plugins.clone());
    let lookup: &dyn RuleDocsLookup = if eff.docs_lookup {
        &builtin
    } else {
        &NoRuleDocs
    };
    let docs = DocsResolver::new(rules_meta.as_ref(), lookup);

    let agg = aggregate::aggregate(&results, &eff.cwd, caps.color);
    let report = output::compose_report(&agg, &caps, &eff.cwd, &docs);
    output::print_report(&report);

    if agg.error_count > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
