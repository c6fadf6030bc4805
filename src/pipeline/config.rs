//! Generator configuration.
//!
//! Every field has a default, so a partial JSON document only overrides what
//! it names:
//!
//! ```json
//! {
//!   "max_distractors": 4,
//!   "blank_marker": "_____",
//!   "strict_distractors": true
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{QuizError, Result};

/// Ten underscores, one run per blanked word
pub const DEFAULT_BLANK_MARKER: &str = "__________";

/// Tunable parameters for question generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sentences with fewer tokens are not turned into questions
    pub min_sentence_tokens: usize,
    /// Only answers whose shortest word is longer than this are sampled
    pub min_answer_len: usize,
    /// Upper bound on distractors per answer
    pub max_distractors: usize,
    /// Placeholder substituted once per blanked word
    pub blank_marker: String,
    /// Minimum draw budget while sampling a test; large candidate pools
    /// raise it in proportion to `n * ln(n)`
    pub max_sampling_attempts: usize,
    /// Propagate a missing broader category instead of returning no distractors
    pub strict_distractors: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_sentence_tokens: 4,
            min_answer_len: 3,
            max_distractors: 8,
            blank_marker: DEFAULT_BLANK_MARKER.to_string(),
            max_sampling_attempts: 10_000,
            strict_distractors: false,
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            QuizError::InvalidConfig(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn with_max_distractors(mut self, max_distractors: usize) -> Self {
        self.max_distractors = max_distractors;
        self
    }

    pub fn with_blank_marker(mut self, marker: impl Into<String>) -> Self {
        self.blank_marker = marker.into();
        self
    }

    pub fn with_max_sampling_attempts(mut self, attempts: usize) -> Self {
        self.max_sampling_attempts = attempts;
        self
    }

    pub fn with_strict_distractors(mut self, strict: bool) -> Self {
        self.strict_distractors = strict;
        self
    }

    /// Reject settings that would make generation meaningless
    pub fn validate(&self) -> Result<()> {
        if self.blank_marker.is_empty() {
            return Err(QuizError::InvalidConfig(
                "blank_marker must not be empty".into(),
            ));
        }
        if self.min_sentence_tokens == 0 {
            return Err(QuizError::InvalidConfig(
                "min_sentence_tokens must be at least 1".into(),
            ));
        }
        if self.max_sampling_attempts == 0 {
            return Err(QuizError::InvalidConfig(
                "max_sampling_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
