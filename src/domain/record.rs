//! Record and decision models
//!
//! A [`Record`] is one post from the archive. A [`Decision`] is the judge's
//! verdict on one record, carrying the public URL used in the result sink.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix the archive uses for retweets
const RETWEET_PREFIX: &str = "RT @";

/// One post from the archive
///
/// Identity is `id`, but uniqueness is not enforced: duplicate ids are
/// carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Post identifier as it appears in the archive
    pub id: String,

    /// Full post text
    pub text: String,
}

impl Record {
    /// Create a new record
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Whether this post is a retweet of someone else's post
    pub fn is_retweet(&self) -> bool {
        self.text.starts_with(RETWEET_PREFIX)
    }
}

/// Verdict returned by the judge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Keep the post
    Keep,
    /// Flag the post for deletion
    Delete,
}

impl Verdict {
    /// Whether this verdict flags the record
    pub fn should_flag(self) -> bool {
        matches!(self, Verdict::Delete)
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("DELETE") {
            Ok(Verdict::Delete)
        } else if trimmed.eq_ignore_ascii_case("KEEP") {
            Ok(Verdict::Keep)
        } else {
            Err(format!(
                "Invalid decision value '{s}'. Must be 'KEEP' or 'DELETE'"
            ))
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Keep => write!(f, "KEEP"),
            Verdict::Delete => write!(f, "DELETE"),
        }
    }
}

/// The judge's decision on one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// ID of the evaluated record
    pub record_id: String,

    /// Public URL of the post
    pub reference_url: String,

    /// Whether the record should be flagged for deletion
    pub should_flag: bool,

    /// Short explanation from the judge, if it gave one
    pub reason: Option<String>,
}

impl Decision {
    /// Create a decision for `record` from a verdict
    pub fn from_verdict(record: &Record, reference_url: String, verdict: Verdict) -> Self {
        Self {
            record_id: record.id.clone(),
            reference_url,
            should_flag: verdict.should_flag(),
            reason: None,
        }
    }

    /// Attach the judge's explanation
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if !reason.trim().is_empty() {
            self.reason = Some(reason);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("DELETE", Verdict::Delete ; "upper delete")]
    #[test_case("delete", Verdict::Delete ; "lower delete")]
    #[test_case(" Keep ", Verdict::Keep ; "padded mixed keep")]
    #[test_case("KEEP", Verdict::Keep ; "upper keep")]
    fn test_verdict_parse(input: &str, expected: Verdict) {
        assert_eq!(input.parse::<Verdict>().unwrap(), expected);
    }

    #[test]
    fn test_verdict_parse_rejects_unknown() {
        let err = "MAYBE".parse::<Verdict>().unwrap_err();
        assert!(err.contains("MAYBE"));
        assert!("".parse::<Verdict>().is_err());
    }

    #[test]
    fn test_decision_from_verdict() {
        let record = Record::new("123", "hello");
        let decision = Decision::from_verdict(
            &record,
            "https://x.com/user/status/123".to_string(),
            Verdict::Delete,
        )
        .with_reason("unprofessional");

        assert_eq!(decision.record_id, "123");
        assert!(decision.should_flag);
        assert_eq!(decision.reason.as_deref(), Some("unprofessional"));
    }

    #[test]
    fn test_blank_reason_is_dropped() {
        let record = Record::new("1", "x");
        let decision = Decision::from_verdict(&record, String::new(), Verdict::Keep).with_reason("  ");
        assert!(decision.reason.is_none());
        assert!(!decision.should_flag);
    }

    #[test]
    fn test_is_retweet() {
        assert!(Record::new("1", "RT @someone: hi").is_retweet());
        assert!(!Record::new("2", "Not a RT @someone").is_retweet());
    }
}
