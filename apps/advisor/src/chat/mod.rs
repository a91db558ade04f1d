// Advisory chat: keyword classifier, canned catalog and per-session logs.
// The classifier is pure; conversation state lives in `conversation`.

pub mod catalog;
pub mod classifier;
pub mod conversation;
pub mod handlers;
pub mod rule_file;
pub mod selector;

use std::sync::Arc;

use tracing::{info, warn};

use crate::chat::catalog::Catalog;
use crate::chat::classifier::{Classifier, RuleError};
use crate::chat::conversation::{ChatMessage, Conversation, Sender};
use crate::chat::selector::FallbackSelector;

/// The chat widget's server side: classifier plus the greeting and quick
/// replies shown before the first question.
#[derive(Debug)]
pub struct Advisor {
    pub classifier: Classifier,
    pub greeting: String,
    pub quick_replies: Vec<String>,
}

impl Advisor {
    /// Builds the classifier and warns about rules that can never fire.
    pub fn from_catalog(
        catalog: Catalog,
        selector: Arc<dyn FallbackSelector>,
    ) -> Result<Self, RuleError> {
        let classifier = Classifier::new(catalog.rules, catalog.fallbacks, selector)?;

        for shadowed in classifier.shadowed_rules() {
            warn!(
                rule = %shadowed.name,
                index = shadowed.index,
                shadowed_by = ?shadowed.shadowed_by,
                "Chat rule can never match; earlier rules cover all of its triggers"
            );
        }
        info!(
            rules = classifier.rules().len(),
            fallbacks = classifier.fallbacks().len(),
            "Chat classifier ready"
        );

        Ok(Advisor {
            classifier,
            greeting: catalog.greeting,
            quick_replies: catalog.quick_replies,
        })
    }

    /// Records `text` and the classifier's answer in `conversation`, in that order.
    pub fn reply(&self, conversation: &mut Conversation, text: &str) -> (ChatMessage, ChatMessage) {
        let question = conversation.push(Sender::User, text.to_string(), None);

        let decision = self.classifier.classify_with_decision(text);
        let rule = decision.source.rule_name().map(str::to_string);
        let answer = conversation.push(Sender::Bot, decision.response.into_owned(), rule);

        (question, answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::Rule;
    use crate::chat::selector::SeededSelector;

    fn advisor() -> Advisor {
        let catalog = Catalog {
            greeting: "Merhaba!".to_string(),
            quick_replies: vec!["Selam?".to_string()],
            rules: vec![Rule::any("greeting", ["selam"], "Selam, hoş geldiniz.").unwrap()],
            fallbacks: vec!["Anlayamadım.".to_string()],
        };
        Advisor::from_catalog(catalog, Arc::new(SeededSelector::new(3))).unwrap()
    }

    #[test]
    fn test_reply_appends_question_then_answer() {
        let advisor = advisor();
        let mut conversation = Conversation::new(&advisor.greeting);

        let (question, answer) = advisor.reply(&mut conversation, "SELAM");
        assert_eq!(question.sender, Sender::User);
        assert_eq!(question.text, "SELAM");
        assert_eq!(answer.sender, Sender::Bot);
        assert_eq!(answer.text, "Selam, hoş geldiniz.");
        assert_eq!(answer.rule.as_deref(), Some("greeting"));
        assert_eq!(conversation.messages().len(), 3);
    }

    #[test]
    fn test_reply_fallback_has_no_rule() {
        let advisor = advisor();
        let mut conversation = Conversation::new(&advisor.greeting);
        let (_, answer) = advisor.reply(&mut conversation, "???");
        assert_eq!(answer.text, "Anlayamadım.");
        assert!(answer.rule.is_none());
    }

    #[test]
    fn test_from_catalog_rejects_empty_pool() {
        let catalog = Catalog {
            greeting: "g".to_string(),
            quick_replies: vec![],
            rules: vec![],
            fallbacks: vec![],
        };
        let err = Advisor::from_catalog(catalog, Arc::new(SeededSelector::new(0))).unwrap_err();
        assert_eq!(err, RuleError::EmptyFallbackPool);
    }

    #[test]
    fn test_builtin_catalog_builds() {
        let advisor =
            Advisor::from_catalog(Catalog::builtin().unwrap(), Arc::new(SeededSelector::new(0)))
                .unwrap();
        assert_eq!(advisor.quick_replies.len(), 5);
    }
}
