//! Web UI pages, one per route

pub mod blackouts;
pub mod dashboard;
pub mod groups;
pub mod login;
pub mod logs;
pub mod schedules;
pub mod vms;
