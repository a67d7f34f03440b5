//! Rule-based keyword classifier

use async_trait::async_trait;
use regex::Regex;

use crate::{classifier::Classifier, GuardError, Result, Verdict};

/// Keyword classifier
///
/// Trips on blocked phrases or regex patterns. Runs locally with no remote
/// calls, which makes it a cheap pre-filter in front of model-backed guards
/// and a deterministic stand-in for them in tests.
pub struct KeywordClassifier {
    /// Classifier name reported in verdicts and blocks
    name: String,
    /// Blocked patterns (regex)
    patterns: Vec<Regex>,
    /// Blocked exact phrases
    blocked_phrases: Vec<String>,
    /// Case sensitive matching
    case_sensitive: bool,
}

impl KeywordClassifier {
    /// Create a new keyword classifier with blocked words/phrases
    pub fn new(name: impl Into<String>, blocked: Vec<String>) -> Self {
        Self {
            name: name.into(),
            patterns: Vec::new(),
            blocked_phrases: blocked,
            case_sensitive: false,
        }
    }

    /// Add a regex pattern to block
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| GuardError::config(format!("Invalid regex: {}", e)))?;
        self.patterns.push(regex);
        Ok(self)
    }

    /// Set case sensitivity
    pub fn case_sensitive(mut self, enabled: bool) -> Self {
        self.case_sensitive = enabled;
        self
    }

    /// Check text against the rules
    fn check_text(&self, text: &str) -> Option<String> {
        let text_to_check = if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };

        // Check blocked phrases
        for phrase in &self.blocked_phrases {
            let phrase_to_check = if self.case_sensitive {
                phrase.clone()
            } else {
                phrase.to_lowercase()
            };

            if text_to_check.contains(&phrase_to_check) {
                return Some(format!("Contains blocked phrase: {}", phrase));
            }
        }

        // Check regex patterns
        for pattern in &self.patterns {
            if pattern.is_match(text) {
                return Some(format!("Matches blocked pattern: {}", pattern.as_str()));
            }
        }

        None
    }
}

#[async_trait]
impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    async fn classify(&self, subject: &str) -> Result<Verdict> {
        match self.check_text(subject) {
            Some(reason) => Ok(Verdict::trip(reason)),
            None => Ok(Verdict::pass("no blocked content found")),
        }
    }
}
