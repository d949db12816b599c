use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

//
// ─── ANSWER OPTION ────────────────────────────────────────────────────────────
//

/// Closed set of answers a player can give to "who does this in your household?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOption {
    /// The player takes this role.
    Me,
    /// The player's partner takes this role.
    Partner,
    /// Nobody takes this role.
    Neither,
    /// The role is shared.
    Both,
    /// The question does not apply to the household.
    NotApplicable,
}

impl AnswerOption {
    /// Every option, in display order.
    pub const ALL: [AnswerOption; 5] = [
        AnswerOption::Me,
        AnswerOption::Partner,
        AnswerOption::Neither,
        AnswerOption::Both,
        AnswerOption::NotApplicable,
    ];

    /// Stable key used in configuration files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AnswerOption::Me => "me",
            AnswerOption::Partner => "partner",
            AnswerOption::Neither => "neither",
            AnswerOption::Both => "both",
            AnswerOption::NotApplicable => "not_applicable",
        }
    }

    /// Label shown on the answer button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AnswerOption::Me => "Me",
            AnswerOption::Partner => "My partner",
            AnswerOption::Neither => "Neither of us",
            AnswerOption::Both => "Both of us",
            AnswerOption::NotApplicable => "Not applicable",
        }
    }
}

impl FromStr for AnswerOption {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        AnswerOption::ALL
            .into_iter()
            .find(|option| option.key() == normalized)
            .ok_or_else(|| ConfigError::UnknownOption(value.to_string()))
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── OPTION SET ───────────────────────────────────────────────────────────────
//

/// Ordered, duplicate-free set of options offered for every question.
///
/// Fixed for the lifetime of a session. The order is the order buttons and
/// chart legends are rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet(Vec<AnswerOption>);

impl OptionSet {
    /// Build a validated option set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyOptions` if no options are given.
    /// Returns `ConfigError::DuplicateOption` if an option appears twice.
    pub fn new(options: impl IntoIterator<Item = AnswerOption>) -> Result<Self, ConfigError> {
        let mut collected: Vec<AnswerOption> = Vec::new();
        for option in options {
            if collected.contains(&option) {
                return Err(ConfigError::DuplicateOption(option));
            }
            collected.push(option);
        }
        if collected.is_empty() {
            return Err(ConfigError::EmptyOptions);
        }
        Ok(Self(collected))
    }

    /// Parse option keys such as `"me"` or `"not_applicable"`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownOption` for unrecognised keys, plus the
    /// errors of [`OptionSet::new`].
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self, ConfigError> {
        let parsed = keys
            .iter()
            .map(|key| key.as_ref().parse::<AnswerOption>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    #[must_use]
    pub fn contains(&self, option: AnswerOption) -> bool {
        self.0.contains(&option)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[AnswerOption] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = AnswerOption> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for OptionSet {
    /// All five options, including "Not applicable".
    fn default() -> Self {
        Self(AnswerOption::ALL.to_vec())
    }
}
