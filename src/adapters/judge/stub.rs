//! Deterministic judge for tests

use super::traits::Judge;
use crate::config::AccountConfig;
use crate::domain::{Decision, JudgeError, Record, Verdict};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Judge with preconfigured answers
///
/// Flags every id in `flagged`, fails on `fail_on`, keeps everything else.
/// Every evaluated id is recorded in call order.
#[derive(Debug, Default)]
pub struct StaticJudge {
    account: AccountConfig,
    flagged: HashSet<String>,
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticJudge {
    /// Create a judge that keeps every record
    pub fn new(account: AccountConfig) -> Self {
        Self {
            account,
            ..Self::default()
        }
    }

    /// Flag the given ids
    pub fn flagging<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flagged.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Fail when asked to evaluate `id`
    pub fn failing_on(mut self, id: impl Into<String>) -> Self {
        self.fail_on = Some(id.into());
        self
    }

    /// Ids evaluated so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Judge for StaticJudge {
    async fn evaluate(&self, record: &Record) -> Result<Decision, JudgeError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(record.id.clone());
        }

        if self.fail_on.as_deref() == Some(record.id.as_str()) {
            return Err(JudgeError::Rejected(format!(
                "configured to fail on record {}",
                record.id
            )));
        }

        let verdict = if self.flagged.contains(&record.id) {
            Verdict::Delete
        } else {
            Verdict::Keep
        };

        Ok(Decision::from_verdict(
            record,
            self.account.status_url(&record.id),
            verdict,
        ))
    }

    fn name(&self) -> &str {
        "static"
    }
}
