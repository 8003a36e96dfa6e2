//! Report types
//!
//! A report is one participant's submitted answers for one run of a standup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Who submitted a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMember {
    pub id: String,
    pub username: String,
    pub realname: String,
    #[serde(default)]
    pub profile_img: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// A question/answer pair inside a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportAnswer {
    pub id: u64,
    pub question: String,
    pub question_id: u64,
    pub color: String,
    pub answer: String,
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    #[serde(default)]
    pub html_formatted: bool,
}

/// A submitted standup report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: u64,
    pub standup_id: u64,
    #[serde(default)]
    pub slack_ts: Option<String>,
    /// Unix seconds; used as the pagination cursor
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub member: Option<ReportMember>,
    #[serde(default)]
    pub questions: Vec<ReportAnswer>,
}

impl Report {
    /// Answer text for a question id, if the report contains it.
    pub fn answer_for(&self, question_id: u64) -> Option<&str> {
        self.questions.iter().find(|q| q.question_id == question_id).map(|q| q.answer.as_str())
    }
}

/// Answer body sent when creating a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerText {
    pub text: String,
}

/// Payload for `POST /reports`
///
/// Encodes as `{"standup_id": n, "answers": {"<question id>": {"text": "..."}}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportCreate {
    pub standup_id: u64,
    pub answers: BTreeMap<String, AnswerText>,
}

impl ReportCreate {
    pub fn new(standup_id: u64) -> Self {
        Self { standup_id, answers: BTreeMap::new() }
    }

    /// Add (or replace) the answer for one question.
    pub fn answer(mut self, question_id: u64, text: impl Into<String>) -> Self {
        self.answers.insert(question_id.to_string(), AnswerText { text: text.into() });
        self
    }
}

/// Filters for `GET /reports`
///
/// Only the filters that are set end up in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportQuery {
    pub standup_id: Option<u64>,
    pub limit: Option<u32>,
    pub user_id: Option<String>,
    /// Only reports strictly after this unix timestamp
    pub after: Option<i64>,
    /// Only reports before this unix timestamp
    pub before: Option<i64>,
    pub question_ids: Vec<u64>,
    pub html: Option<bool>,
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standup_id(mut self, standup_id: u64) -> Self {
        self.standup_id = Some(standup_id);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn after(mut self, timestamp: i64) -> Self {
        self.after = Some(timestamp);
        self
    }

    pub fn before(mut self, timestamp: i64) -> Self {
        self.before = Some(timestamp);
        self
    }

    pub fn question_ids(mut self, ids: Vec<u64>) -> Self {
        self.question_ids = ids;
        self
    }

    pub fn html(mut self, html: bool) -> Self {
        self.html = Some(html);
        self
    }

    /// Sparse query pairs in a stable order. `question_ids` repeats its key.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(standup_id) = self.standup_id {
            pairs.push(("standup_id", standup_id.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(user_id) = &self.user_id {
            pairs.push(("user_id", user_id.clone()));
        }
        if let Some(after) = self.after {
            pairs.push(("after", after.to_string()));
        }
        if let Some(before) = self.before {
            pairs.push(("before", before.to_string()));
        }
        for id in &self.question_ids {
            pairs.push(("question_ids", id.to_string()));
        }
        if let Some(html) = self.html {
            pairs.push(("html", html.to_string()));
        }
        pairs
    }
}
