//! Rule documentation URL resolution.
//!
//! Rule metadata shipped with the report wins; otherwise a `RuleDocsLookup`
//! is asked. Any failure on either path means "no URL", never an error.

use crate::models::RulesMeta;
use serde::Deserialize;
use std::collections::HashMap;

const CORE_RULE_URL: &str = "https://eslint.org/docs/latest/rules/{rule}";

const KNOWN_PLUGINS: &[(&str, &str)] = &[
    ("@typescript-eslint", "https://typescript-eslint.io/rules/{rule}"),
    (
        "react",
        "https://github.com/jsx-eslint/eslint-plugin-react/blob/master/docs/rules/{rule}.md",
    ),
    (
        "jsx-a11y",
        "https://github.com/jsx-eslint/eslint-plugin-jsx-a11y/blob/main/docs/rules/{rule}.md",
    ),
    (
        "import",
        "https://github.com/import-js/eslint-plugin-import/blob/main/docs/rules/{rule}.md",
    ),
    (
        "unicorn",
        "https://github.com/sindresorhus/eslint-plugin-unicorn/blob/main/docs/rules/{rule}.md",
    ),
    (
        "jest",
        "https://github.com/jest-community/eslint-plugin-jest/blob/main/docs/rules/{rule}.md",
    ),
    (
        "n",
        "https://github.com/eslint-community/eslint-plugin-n/blob/master/docs/rules/{rule}.md",
    ),
    (
        "promise",
        "https://github.com/eslint-community/eslint-plugin-promise/blob/main/docs/rules/{rule}.md",
    ),
    ("vue", "https://eslint.vuejs.org/rules/{rule}.html"),
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleDocs {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocsError {
    #[error("rule id is empty")]
    EmptyRuleId,
    #[error("no documentation source for plugin '{0}'")]
    UnknownPlugin(String),
    #[error("rule documentation lookup is disabled")]
    Disabled,
}

/// External documentation lookup by rule id.
pub trait RuleDocsLookup {
    fn lookup(&self, rule_id: &str) -> Result<RuleDocs, DocsError>;
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRuleDocs;

impl RuleDocsLookup for NoRuleDocs {
    fn lookup(&self, _rule_id: &str) -> Result<RuleDocs, DocsError> {
        Err(DocsError::Disabled)
    }
}

/// URL templates for core rules and well-known plugins.
///
/// Core rules (no `/`) use the core template. Plugin rules are split on
/// the last `/`, so `@scope/plugin/rule` resolves through `@scope/plugin`.
/// Templates substitute `{rule}` with the bare rule name.
#[derive(Debug, Clone)]
pub struct BuiltinRuleDocs {
    core: String,
    plugins: HashMap<String, String>,
}

impl Default for BuiltinRuleDocs {
    fn default() -> Self {
        Self {
            core: CORE_RULE_URL.to_string(),
            plugins: KNOWN_PLUGINS
                .iter()
                .map(|(name, tpl)| (name.to_string(), tpl.to_string()))
                .collect(),
        }
    }
}

impl BuiltinRuleDocs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace plugin templates (config `[docs.plugins]`).
    pub fn with_plugins<I>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.plugins.extend(plugins);
        self
    }
}

impl RuleDocsLookup for BuiltinRuleDocs {
    fn lookup(&self, rule_id: &str) -> Result<RuleDocs, DocsError> {
        if rule_id.is_empty() {
            return Err(DocsError::EmptyRuleId);
        }
        let url = match rule_id.rsplit_once('/') {
            None => self.core.replace("{rule}", rule_id),
            Some((plugin, rule)) => self
                .plugins
                .get(plugin)
                .ok_or_else(|| DocsError::UnknownPlugin(plugin.to_string()))?
                .replace("{rule}", rule),
        };
        Ok(RuleDocs { url })
    }
}

/// `rules_meta[rule_id].docs.url` if present and well-formed.
fn meta_url<'a>(rule_id: &str, rules_meta: Option<&'a RulesMeta>) -> Option<&'a str> {
    rules_meta?
        .get(rule_id)?
        .get("docs")?
        .get("url")?
        .as_str()
}

/// Documentation URL for a rule: metadata first, then the lookup.
pub fn resolve_doc_url(
    rule_id: &str,
    rules_meta: Option<&RulesMeta>,
    lookup: &dyn RuleDocsLookup,
) -> Option<String> {
    if let Some(url) = meta_url(rule_id, rules_meta) {
        return Some(url.to_string());
    }
    match lookup.lookup(rule_id) {
        Ok(docs) => Some(docs.url),
        Err(e) => {
            tracing::debug!(rule_id, error = %e, "no documentation url");
            None
        }
    }
}

/// Rules metadata bundled with a lookup, handed to the renderer.
#[derive(Clone, Copy)]
pub struct DocsResolver<'a> {
    pub rules_meta: Option<&'a RulesMeta>,
    pub lookup: &'a dyn RuleDocsLookup,
}

impl<'a> DocsResolver<'a> {
    pub fn new(rules_meta: Option<&'a RulesMeta>, lookup: &'a dyn RuleDocsLookup) -> Self {
        Self { rules_meta, lookup }
    }

    pub fn resolve(&self, rule_id: &str) -> Option<String> {
        resolve_doc_url(rule_id, self.rules_meta, self.lookup)
    }
}

impl Default for DocsResolver<'_> {
    fn default() -> Self {
        Self {
            rules_meta: None,
            lookup: &NoRuleDocs,
        }
    }
}
