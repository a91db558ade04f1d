#![allow(dead_code)]

//! Classifier — maps a free-text question to exactly one canned answer.
//!
//! Rules form a declarative table scanned in declaration order. The first rule
//! whose triggers appear in the lowercased query wins; later rules are never
//! evaluated. When no rule matches, the injected `FallbackSelector` picks an
//! entry from the fallback pool.
//!
//! Matching uses `str::to_lowercase`, which is locale-independent. Turkish
//! dotted capital `İ` lowercases to `i̇` (i + U+0307), so a query typed as
//! "MATEMATİK" will not hit a "matematik" trigger. Known limitation.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chat::selector::FallbackSelector;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("rule '{0}' has no triggers")]
    NoTriggers(String),

    #[error("rule '{0}' has an empty trigger")]
    EmptyTrigger(String),

    #[error("rule '{0}' has an empty response")]
    EmptyResponse(String),

    #[error("fallback pool is empty")]
    EmptyFallbackPool,

    #[error("fallback entry #{0} is empty")]
    EmptyFallback(usize),
}

// ────────────────────────────────────────────────────────────────────────────
// Rules
// ────────────────────────────────────────────────────────────────────────────

/// How a rule combines its triggers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// At least one trigger must be present.
    #[default]
    Any,
    /// Every trigger must be present.
    All,
}

/// Produces a response from the normalized query.
pub type ResponseFn = dyn Fn(&str) -> String + Send + Sync;

#[derive(Clone)]
pub enum Response {
    Static(Cow<'static, str>),
    Generated(Arc<ResponseFn>),
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Response::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    mode: MatchMode,
    triggers: Vec<String>,
    response: Response,
}

impl Rule {
    /// Builds a rule with a fixed response. Triggers are lowercased and
    /// de-duplicated, keeping their first occurrence.
    pub fn new<I>(
        name: impl Into<String>,
        mode: MatchMode,
        triggers: I,
        response: impl Into<Cow<'static, str>>,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let name = name.into();
        let response = response.into();
        if response.is_empty() {
            return Err(RuleError::EmptyResponse(name));
        }
        Self::build(name, mode, triggers, Response::Static(response))
    }

    pub fn any<I>(
        name: impl Into<String>,
        triggers: I,
        response: impl Into<Cow<'static, str>>,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(name, MatchMode::Any, triggers, response)
    }

    pub fn all<I>(
        name: impl Into<String>,
        triggers: I,
        response: impl Into<Cow<'static, str>>,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(name, MatchMode::All, triggers, response)
    }

    /// Builds a rule whose response is computed from the normalized query.
    /// An empty generated response sends the query down the fallback path.
    pub fn generated<I, F>(
        name: impl Into<String>,
        mode: MatchMode,
        triggers: I,
        strategy: F,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::build(name.into(), mode, triggers, Response::Generated(Arc::new(strategy)))
    }

    fn build<I>(name: String, mode: MatchMode, triggers: I, response: Response) -> Result<Self, RuleError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for trigger in triggers {
            let trigger: String = trigger.into();
            let trigger = normalize(&trigger);
            if trigger.is_empty() {
                return Err(RuleError::EmptyTrigger(name));
            }
            if !normalized.contains(&trigger) {
                normalized.push(trigger);
            }
        }
        if normalized.is_empty() {
            return Err(RuleError::NoTriggers(name));
        }

        Ok(Rule {
            name,
            mode,
            triggers: normalized,
            response,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Tests an already-normalized query against this rule's triggers.
    pub fn matches(&self, normalized: &str) -> bool {
        match self.mode {
            MatchMode::Any => self.triggers.iter().any(|t| normalized.contains(t.as_str())),
            MatchMode::All => self.triggers.iter().all(|t| normalized.contains(t.as_str())),
        }
    }

    fn respond<'a>(&'a self, normalized: &str) -> Cow<'a, str> {
        match &self.response {
            Response::Static(text) => Cow::Borrowed(text.as_ref()),
            Response::Generated(strategy) => Cow::Owned(strategy(normalized)),
        }
    }
}

/// Simple lowercasing, no trimming. The caller's original text is untouched.
pub fn normalize(query: &str) -> String {
    query.to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Classification results
// ────────────────────────────────────────────────────────────────────────────

/// Where a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource<'a> {
    Rule { name: &'a str, index: usize },
    Fallback { index: usize },
}

impl<'a> MatchSource<'a> {
    pub fn rule_name(&self) -> Option<&'a str> {
        match *self {
            MatchSource::Rule { name, .. } => Some(name),
            MatchSource::Fallback { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub response: Cow<'a, str>,
    pub source: MatchSource<'a>,
}

/// A rule that can never fire because earlier rules match every query it could.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedRule {
    pub index: usize,
    pub name: String,
    pub shadowed_by: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Classifier
// ────────────────────────────────────────────────────────────────────────────

/// Immutable rule table plus fallback pool. Safe to share across threads.
pub struct Classifier {
    rules: Vec<Rule>,
    fallbacks: Vec<String>,
    selector: Arc<dyn FallbackSelector>,
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("rules", &self.rules.len())
            .field("fallbacks", &self.fallbacks.len())
            .finish()
    }
}

impl Classifier {
    pub fn new(
        rules: Vec<Rule>,
        fallbacks: Vec<String>,
        selector: Arc<dyn FallbackSelector>,
    ) -> Result<Self, RuleError> {
        if fallbacks.is_empty() {
            return Err(RuleError::EmptyFallbackPool);
        }
        if let Some(index) = fallbacks.iter().position(|f| f.is_empty()) {
            return Err(RuleError::EmptyFallback(index));
        }

        Ok(Classifier {
            rules,
            fallbacks,
            selector,
        })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Returns the response for `query`. Total: never fails, never empty.
    pub fn classify(&self, query: &str) -> Cow<'_, str> {
        self.classify_with_decision(query).response
    }

    /// Same as `classify`, but also reports which rule (or fallback entry) answered.
    pub fn classify_with_decision(&self, query: &str) -> Classification<'_> {
        let normalized = normalize(query);

        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.matches(&normalized) {
                continue;
            }
            let response = rule.respond(&normalized);
            if response.is_empty() {
                debug!(rule = rule.name(), "generated response was empty, using fallback");
                break;
            }
            debug!(rule = rule.name(), index, "query matched rule");
            return Classification {
                response,
                source: MatchSource::Rule {
                    name: rule.name(),
                    index,
                },
            };
        }

        let index = self.selector.select(self.fallbacks.len()) % self.fallbacks.len();
        debug!(index, "no rule matched, using fallback");
        Classification {
            response: Cow::Borrowed(self.fallbacks[index].as_str()),
            source: MatchSource::Fallback { index },
        }
    }

    /// Lists rules that earlier rules fully cover.
    ///
    /// A trigger is covered when some earlier rule matches the trigger text
    /// itself: any query containing the trigger then also satisfies that rule.
    /// An `Any` rule is shadowed when all of its triggers are covered, an
    /// `All` rule when any one of them is.
    pub fn shadowed_rules(&self) -> Vec<ShadowedRule> {
        let mut shadowed = Vec::new();

        for (index, rule) in self.rules.iter().enumerate() {
            let earlier = &self.rules[..index];
            let coverers: Vec<Option<&Rule>> = rule
                .triggers
                .iter()
                .map(|trigger| earlier.iter().find(|e| e.matches(trigger)))
                .collect();

            let is_shadowed = match rule.mode {
                MatchMode::Any => coverers.iter().all(Option::is_some),
                MatchMode::All => coverers.iter().any(Option::is_some),
            };
            if !is_shadowed {
                continue;
            }

            let mut shadowed_by: Vec<String> = Vec::new();
            for coverer in coverers.into_iter().flatten() {
                if !shadowed_by.iter().any(|n| n == coverer.name()) {
                    shadowed_by.push(coverer.name().to_string());
                }
            }
            shadowed.push(ShadowedRule {
                index,
                name: rule.name.clone(),
                shadowed_by,
            });
        }

        shadowed
    }
}
