//! Standup types
//!
//! A standup is a recurring prompt sent to a set of users on a schedule.
//! `Standup` is what the server returns; `StandupCreate`, `StandupUpdate`,
//! `StandupDuplicate` and `StandupStart` are write-only payloads.

use serde::{Deserialize, Serialize};

use super::team::User;

fn default_true() -> bool {
    true
}

fn default_answer_type() -> String {
    "text".to_string()
}

/// A standup configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Standup {
    pub id: u64,
    pub name: String,
    pub channel: String,
    /// Time of day, `HH:MM:SS`
    pub time: String,
    pub timezone: String,
    /// Three-letter weekday names (`Mon` .. `Sun`)
    pub days: Vec<String>,
    #[serde(default)]
    pub questions: Vec<StandupQuestion>,
    #[serde(default)]
    pub users: Vec<User>,
    /// Minutes to wait for answers; `-1` means no wait time
    #[serde(default)]
    pub wait_time: Option<i64>,
    #[serde(default)]
    pub personalised: bool,
    #[serde(default)]
    pub sync_channel_members: bool,
}

impl Standup {
    /// True when a user with this exact id participates.
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.users.iter().any(|user| user.id == user_id)
    }
}

/// A question configured on a standup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandupQuestion {
    pub id: u64,
    pub color: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default = "default_answer_type")]
    pub answer_type: String,
    #[serde(default)]
    pub answer_choices: Vec<String>,
    #[serde(rename = "hasAnswers", default = "default_true")]
    pub has_answers: bool,
    #[serde(default)]
    pub is_random: bool,
    #[serde(default)]
    pub random_texts: Vec<String>,
    #[serde(default)]
    pub prefilled_by: Option<u64>,
    #[serde(default)]
    pub text_id: Option<u64>,
    #[serde(default)]
    pub preconditions: Vec<serde_json::Value>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Question definition used when creating or editing a standup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionSpec {
    /// Question text shown to participants
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answer_choices: Vec<String>,
}

impl QuestionSpec {
    pub fn text(question: impl Into<String>) -> Self {
        Self { question: question.into(), answer_type: None, answer_choices: Vec::new() }
    }
}

/// Full standup definition, used for create (POST) and replace (PUT)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandupCreate {
    pub name: String,
    pub channel: String,
    /// Time of day, `HH:MM:SS`
    pub time: String,
    pub timezone: String,
    pub days: Vec<String>,
    /// Numeric participant ids as accepted by the create endpoint
    pub users: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<i64>,
    #[serde(default)]
    pub personalised: bool,
    #[serde(default)]
    pub sync_channel_members: bool,
}

/// Partial standup update (PATCH)
///
/// Fields left as `None` are omitted from the payload so the server keeps
/// its current value. `wait_time` is tri-state: `None` leaves it untouched,
/// `Some(None)` clears it (sends `null`), `Some(Some(n))` sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandupUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub wait_time: Option<Option<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalised: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_channel_members: Option<bool>,
}

impl StandupUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn days(mut self, days: Vec<String>) -> Self {
        self.days = Some(days);
        self
    }

    pub fn wait_time(mut self, minutes: i64) -> Self {
        self.wait_time = Some(Some(minutes));
        self
    }

    /// Send an explicit `null` wait time.
    pub fn clear_wait_time(mut self) -> Self {
        self.wait_time = Some(None);
        self
    }

    pub fn questions(mut self, questions: Vec<QuestionSpec>) -> Self {
        self.questions = Some(questions);
        self
    }

    pub fn users(mut self, users: Vec<u64>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn personalised(mut self, enabled: bool) -> Self {
        self.personalised = Some(enabled);
        self
    }

    pub fn sync_channel_members(mut self, enabled: bool) -> Self {
        self.sync_channel_members = Some(enabled);
        self
    }
}

/// Payload for `POST /standups/{id}/duplicate`
///
/// Only `name` is required; every other field overrides the copied value
/// when present and is omitted otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandupDuplicate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuestionSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_channel_members: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalised: Option<bool>,
}

impl StandupDuplicate {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

/// Payload for `POST /standups/{id}/start`
///
/// With both lists empty the standup starts for every participant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandupStart {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
}
