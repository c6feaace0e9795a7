//! Skill matching, scoring pipeline and session state

pub mod matcher;
pub mod pipeline;
pub mod session;
