use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use quiz_core::model::{AnswerOption, Category, OptionSet, Question};
use quiz_core::ShuffleSeed;

use crate::defaults::{DEFAULT_TITLE, builtin_questions};
use crate::error::ConfigLoadError;

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_shuffle() -> bool {
    true
}

fn default_option_keys() -> Vec<String> {
    AnswerOption::ALL
        .iter()
        .map(|option| option.key().to_string())
        .collect()
}

/// Quiz configuration as read from a TOML file.
///
/// ```toml
/// title = "Money Roles!"
/// shuffle = true
/// seed = 42
/// options = ["me", "partner", "neither", "both", "not_applicable"]
///
/// [[questions]]
/// text = "Who pays the monthly bills?"
/// category = "day_to_day"
/// ```
///
/// TOML integers are signed 64-bit, so a `seed` written in the file must lie in
/// `0..=i64::MAX`. Larger seeds can still be passed with `--seed` or `QUIZ_SEED`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "default_option_keys")]
    pub options: Vec<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QuizConfig {
    /// Built-in quiz: all five options and the bundled question pool.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: default_title(),
            shuffle: true,
            seed: None,
            options: default_option_keys(),
            questions: builtin_questions(),
        }
    }

    /// Read a config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Io` if the file cannot be read and
    /// `ConfigLoadError::Parse` if it is not valid TOML for this schema.
    pub fn load_from(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            questions = config.questions.len(),
            "loaded quiz config"
        );
        Ok(config)
    }

    /// Load `path` when given, otherwise fall back to the built-in quiz.
    ///
    /// # Errors
    ///
    /// Propagates [`QuizConfig::load_from`] errors.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, ConfigLoadError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                tracing::debug!("no quiz config given, using built-in questions");
                Ok(Self::builtin())
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigLoadError::Parse` on malformed input.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    ///
    /// Returns `ConfigLoadError::Serialize` if the config cannot be written as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigLoadError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parsed, validated option set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Invalid` for unknown, duplicated or missing options.
    pub fn option_set(&self) -> Result<OptionSet, ConfigLoadError> {
        Ok(OptionSet::from_keys(&self.options)?)
    }

    #[must_use]
    pub fn shuffle_seed(&self) -> ShuffleSeed {
        ShuffleSeed::from_option(self.seed)
    }

    /// Full startup check: option set plus a non-empty pool with text on every question.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.option_set()?;
        Question::validate_pool(&self.questions)?;
        Ok(())
    }

    /// Number of questions per category, in first-appearance order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let mut order: Vec<Category> = Vec::new();
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for question in &self.questions {
            let category = question.category();
            if !order.contains(category) {
                order.push(category.clone());
            }
            *counts.entry(category.key().to_string()).or_default() += 1;
        }
        order
            .into_iter()
            .map(|category| {
                let count = counts.get(category.key()).copied().unwrap_or(0);
                (category, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::ConfigError;
    use quiz_core::time::fixed_clock;

    #[test]
    fn parses_full_file() {
        let config = QuizConfig::from_toml_str(
            r#"
            title = "Roles"
            shuffle = false
            seed = 9
            options = ["me", "partner", "neither", "both"]

            [[questions]]
            text = "Who pays rent?"
            category = "day_to_day"

            [[questions]]
            text = "Who plans retirement?"
            category = "long-term"
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Roles");
        assert!(!config.shuffle);
        assert_eq!(config.shuffle_seed(), ShuffleSeed::Fixed(9));
        assert_eq!(config.option_set().unwrap().len(), 4);
        assert_eq!(config.questions[1].category(), &Category::LongTerm);
        config.validate().unwrap();
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = QuizConfig::from_toml_str("").unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert!(config.shuffle);
        assert_eq!(config.shuffle_seed(), ShuffleSeed::Entropy);
        assert_eq!(config.option_set().unwrap(), OptionSet::default());
        assert!(config.questions.is_empty());
    }

    #[test]
    fn empty_pool_fails_validation() {
        let config = QuizConfig::from_toml_str("").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(ConfigError::EmptyPool)));
    }

    #[test]
    fn unknown_option_fails_validation() {
        let config = QuizConfig::from_toml_str(r#"options = ["me", "dog"]"#).unwrap();
        let err = config.option_set().unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Invalid(ConfigError::UnknownOption(ref key)) if key == "dog"
        ));
    }

    #[test]
    fn question_text_is_trimmed_on_load() {
        let config = QuizConfig::from_toml_str(
            r#"
            [[questions]]
            text = "  Who pays?  "
            category = "day_to_day"
            "#,
        )
        .unwrap();
        assert_eq!(config.questions[0].text(), "Who pays?");

        let svc = crate::SurveyService::from_config(&config, fixed_clock())
            .unwrap()
            .with_shuffle(false);
        let session = svc.start_session().unwrap();
        assert_eq!(session.current_question().unwrap().text(), "Who pays?");
    }

    #[test]
    fn blank_question_text_is_rejected_on_load() {
        let err = QuizConfig::from_toml_str(
            r#"
            [[questions]]
            text = "Who saves?"
            category = "long_term"

            [[questions]]
            text = "   "
            category = "day_to_day"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
        assert!(err.to_string().contains("has no text"), "{err}");
    }

    #[test]
    fn empty_pool_is_reported_at_start_not_load() {
        let mut config = QuizConfig::builtin();
        config.questions.clear();
        let svc = crate::SurveyService::from_config(&config, fixed_clock()).unwrap();
        let err = svc.start_session().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn seed_must_fit_a_toml_integer() {
        let config = QuizConfig::from_toml_str(&format!("seed = {}", i64::MAX)).unwrap();
        assert_eq!(config.shuffle_seed(), ShuffleSeed::Fixed(i64::MAX as u64));

        let err = QuizConfig::from_toml_str("seed = -1").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn builtin_round_trips_through_toml() {
        let config = QuizConfig::builtin();
        let text = config.to_toml_string().unwrap();
        let parsed = QuizConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn counts_questions_per_category() {
        let counts = QuizConfig::builtin().category_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0, Category::DayToDay);
        assert_eq!(counts[0].1, 6);
        assert_eq!(counts[1].1, 6);
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = QuizConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }

    #[test]
    fn load_from_reads_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(
            &path,
            "[[questions]]\ntext = \"Who budgets?\"\ncategory = \"Giving\"\n",
        )
        .unwrap();

        let config = QuizConfig::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(config.questions.len(), 1);
        assert_eq!(
            config.questions[0].category(),
            &Category::Other("Giving".to_string())
        );
    }
}
