//! Shared test helpers for `geekbot-core` integration tests.
//!
//! Provides an in-memory `StandupApi` that records every call, plus small
//! fixture builders.

pub mod fake_api;

use geekbot_domain::{Report, Standup, Team, User};

pub fn user(id: &str, email: Option<&str>) -> User {
    User {
        id: id.to_string(),
        username: id.to_lowercase(),
        realname: format!("User {id}"),
        profile_img: None,
        role: Some("member".to_string()),
        email: email.map(str::to_string),
        deleted: false,
    }
}

pub fn standup(id: u64, name: &str, users: Vec<User>) -> Standup {
    Standup {
        id,
        name: name.to_string(),
        channel: "#general".to_string(),
        time: "10:00:00".to_string(),
        timezone: "user_local".to_string(),
        days: vec!["Mon".to_string(), "Tue".to_string()],
        questions: Vec::new(),
        users,
        wait_time: Some(30),
        personalised: false,
        sync_channel_members: false,
    }
}

pub fn team(users: Vec<User>) -> Team {
    Team { id: 1, name: "Test Team".to_string(), users }
}

/// A page of `len` reports with timestamps `base + 1 ..= base + len`.
pub fn report_page(standup_id: u64, base: i64, len: usize) -> Vec<Report> {
    (1..=len as i64)
        .map(|offset| Report {
            id: (base + offset) as u64,
            standup_id,
            slack_ts: None,
            timestamp: Some(base + offset),
            channel: Some("#general".to_string()),
            member: None,
            questions: Vec::new(),
        })
        .collect()
}
