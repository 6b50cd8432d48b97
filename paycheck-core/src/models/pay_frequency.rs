use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned by the strict [`FromStr`] impl for an unknown frequency token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pay frequency '{0}'")]
pub struct ParseFrequencyError(pub String);

/// How often a paycheck is issued during the year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    #[default]
    Annual,
    Monthly,
    Biweekly,
    Weekly,
}

impl PayFrequency {
    pub fn all() -> &'static [PayFrequency] {
        &[
            PayFrequency::Annual,
            PayFrequency::Monthly,
            PayFrequency::Biweekly,
            PayFrequency::Weekly,
        ]
    }

    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::Monthly => 12,
            Self::Biweekly => 26,
            Self::Weekly => 52,
        }
    }

    /// Form token, as submitted by the frequency select.
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
        }
    }

    /// Capitalized token, used in the net pay summary line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Monthly => "Monthly",
            Self::Biweekly => "Biweekly",
            Self::Weekly => "Weekly",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "annual" => Some(Self::Annual),
            "monthly" => Some(Self::Monthly),
            "biweekly" => Some(Self::Biweekly),
            "weekly" => Some(Self::Weekly),
            _ => None,
        }
    }

    /// Lenient lookup used by the calculator form.
    ///
    /// Anything that is not a known token (including an empty selection)
    /// is treated as a single annual period.
    pub fn from_token(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|| {
            tracing::debug!(token, "unrecognized pay frequency, using annual");
            Self::Annual
        })
    }
}

impl FromStr for PayFrequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseFrequencyError(s.to_string()))
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn periods_per_year_match_frequency() {
        let periods: Vec<u32> = PayFrequency::all()
            .iter()
            .map(PayFrequency::periods_per_year)
            .collect();

        assert_eq!(periods, vec![1, 12, 26, 52]);
    }

    #[test]
    fn parse_accepts_every_token() {
        for frequency in PayFrequency::all() {
            assert_eq!(PayFrequency::parse(frequency.as_token()), Some(*frequency));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(PayFrequency::parse("Monthly"), None);
    }

    #[test]
    fn from_token_falls_back_to_annual() {
        assert_eq!(PayFrequency::from_token(""), PayFrequency::Annual);
        assert_eq!(PayFrequency::from_token("fortnightly"), PayFrequency::Annual);
        assert_eq!(PayFrequency::from_token("weekly"), PayFrequency::Weekly);
    }

    #[test]
    fn from_str_reports_unknown_token() {
        let err = "daily".parse::<PayFrequency>().unwrap_err();

        assert_eq!(err, ParseFrequencyError("daily".to_string()));
        assert_eq!(err.to_string(), "unknown pay frequency 'daily'");
    }

    #[test]
    fn label_is_capitalized_token() {
        assert_eq!(PayFrequency::Biweekly.label(), "Biweekly");
        assert_eq!(PayFrequency::Monthly.to_string(), "Monthly");
    }
}
