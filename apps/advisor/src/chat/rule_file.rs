//! JSON rule files that replace the built-in catalog at startup.

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

use crate::chat::catalog::Catalog;
use crate::chat::classifier::{MatchMode, Rule};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    greeting: Option<String>,
    quick_replies: Option<Vec<String>>,
    rules: Vec<RuleEntry>,
    fallbacks: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    name: String,
    #[serde(default)]
    mode: MatchMode,
    triggers: Vec<String>,
    response: String,
}

/// Reads and validates a rule file. Greeting and quick replies default to the
/// built-in ones when the file leaves them out.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file '{}'", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("Invalid rule file '{}'", path.display()))
}

pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let file: RuleFile = serde_json::from_str(raw).context("Rule file is not valid JSON")?;
    let builtin = Catalog::builtin()?;

    if let Some(greeting) = &file.greeting {
        ensure!(!greeting.trim().is_empty(), "greeting is empty");
    }
    if let Some(quick_replies) = &file.quick_replies {
        if let Some(i) = quick_replies.iter().position(|q| q.trim().is_empty()) {
            bail!("quick reply #{i} is empty");
        }
    }

    let rules = file
        .rules
        .into_iter()
        .map(|entry| Rule::new(entry.name, entry.mode, entry.triggers, entry.response))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog {
        greeting: file.greeting.unwrap_or(builtin.greeting),
        quick_replies: file.quick_replies.unwrap_or(builtin.quick_replies),
        rules,
        fallbacks: file.fallbacks,
    })
}
