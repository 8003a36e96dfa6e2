//! Domain types and models
//!
//! Wire-level shapes for the standup, report and team endpoints. Read models
//! (`Standup`, `Report`, `Team`) are decoded from responses; the `*Create`,
//! `*Update`, `*Duplicate` and `*Start` payloads are only ever encoded.

pub mod report;
pub mod standup;
pub mod team;

pub use report::{AnswerText, Report, ReportAnswer, ReportCreate, ReportMember, ReportQuery};
pub use standup::{
    QuestionSpec, Standup, StandupCreate, StandupDuplicate, StandupQuestion, StandupStart,
    StandupUpdate,
};
pub use team::{Team, User};
