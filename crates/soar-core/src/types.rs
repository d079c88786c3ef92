//! Shared identifier types
//!
//! The platform addresses every record by a numeric id; aliases keep task
//! signatures readable.

/// Incident/case record id
pub type CaseId = u64;

/// Task record id (tasks belong to cases)
pub type TaskId = u64;

/// Automation rule / action id
pub type RuleId = u64;
