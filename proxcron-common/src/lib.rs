//! Common types shared between the proxcron backend API and the web UI

pub mod auth;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guest type as reported by Proxmox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmType {
    Qemu, // full virtual machine
    Lxc,  // container
}

impl VmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VmType::Qemu => "qemu",
            VmType::Lxc => "lxc",
        }
    }
}

/// A VM or container known to the scheduler, synced from the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmInfo {
    pub id: i64,
    pub vmid: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub vm_type: VmType,
    pub node: String,
    pub status: Option<String>,
    pub maxmem: Option<u64>,
    pub maxdisk: Option<u64>,
    pub uptime: Option<u64>,
    pub last_synced: DateTime<Utc>,
}

/// Power action applied to a VM or to every member of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmAction {
    Start,
    Stop,
    Restart,
    Shutdown,
    Reset,
}

impl VmAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            VmAction::Start => "start",
            VmAction::Stop => "stop",
            VmAction::Restart => "restart",
            VmAction::Shutdown => "shutdown",
            VmAction::Reset => "reset",
        }
    }
}

impl fmt::Display for VmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown VM action '{0}', expected one of: start, stop, restart, shutdown, reset")]
pub struct ParseVmActionError(String);

impl FromStr for VmAction {
    type Err = ParseVmActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(VmAction::Start),
            "stop" => Ok(VmAction::Stop),
            "restart" => Ok(VmAction::Restart),
            "shutdown" => Ok(VmAction::Shutdown),
            "reset" => Ok(VmAction::Reset),
            other => Err(ParseVmActionError(other.to_string())),
        }
    }
}

/// What a schedule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleTarget {
    Vm,
    Group,
}

/// A cron-driven power schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub target_type: ScheduleTarget,
    pub target_id: i64,
    pub action: VmAction,
    pub cron_expression: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_run: Option<DateTime<Utc>>,
    pub next_run: Option<DateTime<Utc>>,
}

/// Payload for creating a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub name: String,
    pub target_type: ScheduleTarget,
    pub target_id: i64,
    pub action: VmAction,
    pub cron_expression: String,
    pub enabled: bool,
}

/// Response of the schedule enable/disable toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub message: String,
    pub enabled: bool,
}

/// A named collection of VMs scheduled together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub member_count: u32,
}

/// A recurring window during which scheduled actions are suppressed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutWindow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Wall-clock times in `HH:MM:SS` form; a window may cross midnight
    pub start_time: String,
    pub end_time: String,
    /// JSON array of weekday numbers, 0 = Monday .. 6 = Sunday.
    /// Absent means the window applies every day.
    pub days_of_week: Option<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

impl BlackoutWindow {
    /// Decode `days_of_week` into weekday numbers. `Ok(None)` means the
    /// window is not restricted to particular days.
    pub fn weekdays(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        match &self.days_of_week {
            Some(raw) => serde_json::from_str(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Payload for creating a blackout window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlackoutWindowCreate {
    pub name: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub days_of_week: Option<String>,
    pub enabled: bool,
}

/// One scheduler execution attempt against a VM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionLog {
    pub id: i64,
    pub schedule_id: Option<i64>,
    pub vm_id: Option<i64>,
    pub vmid: Option<u32>,
    pub vm_name: Option<String>,
    pub action: String,
    /// 'success', 'failed' or 'skipped'
    pub status: String,
    pub executed_at: DateTime<Utc>,
    pub duration_seconds: Option<i64>,
    pub error_message: Option<String>,
    pub upid: Option<String>,
    pub skipped_reason: Option<String>,
}

/// Manual power-action request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: VmAction,
}

/// Outcome of a manual power action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub upid: Option<String>,
    pub vmid: u32,
}

/// Aggregate counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_vms: u32,
    pub running_vms: u32,
    pub stopped_vms: u32,
    pub total_schedules: u32,
    pub active_schedules: u32,
    pub total_groups: u32,
    pub recent_executions: u32,
    pub failed_executions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_action_serde_lowercase() {
        assert_eq!(serde_json::to_string(&VmAction::Shutdown).unwrap(), "\"shutdown\"");
        let action: VmAction = serde_json::from_str("\"restart\"").unwrap();
        assert_eq!(action, VmAction::Restart);
    }

    #[test]
    fn test_vm_action_from_str() {
        assert_eq!("start".parse::<VmAction>().unwrap(), VmAction::Start);
        assert_eq!("reset".parse::<VmAction>().unwrap(), VmAction::Reset);

        let err = "hibernate".parse::<VmAction>().unwrap_err();
        assert!(err.to_string().contains("hibernate"));
    }

    #[test]
    fn test_vm_type_field_rename() {
        let json = r#"{
            "id": 1,
            "vmid": 100,
            "name": "web-01",
            "type": "lxc",
            "node": "pve1",
            "status": "running",
            "maxmem": null,
            "maxdisk": null,
            "uptime": 3600,
            "last_synced": "2025-06-01T12:00:00Z"
        }"#;

        let vm: VmInfo = serde_json::from_str(json).unwrap();
        assert_eq!(vm.vm_type, VmType::Lxc);
        assert_eq!(vm.vmid, 100);
    }

    #[test]
    fn test_blackout_weekdays() {
        let window = BlackoutWindow {
            id: 1,
            name: "Backups".to_string(),
            description: None,
            start_time: "22:00:00".to_string(),
            end_time: "04:00:00".to_string(),
            days_of_week: Some("[0,1,2,3,4]".to_string()),
            enabled: true,
            created_at: Utc::now(),
        };

        assert_eq!(window.weekdays().unwrap(), Some(vec![0, 1, 2, 3, 4]));

        let every_day = BlackoutWindow {
            days_of_week: None,
            ..window
        };
        assert_eq!(every_day.weekdays().unwrap(), None);
    }

    #[test]
    fn test_schedule_create_wire_format() {
        let payload = ScheduleCreate {
            name: "morning start".to_string(),
            target_type: ScheduleTarget::Vm,
            target_id: 100,
            action: VmAction::Start,
            cron_expression: "0 8 * * 1-5".to_string(),
            enabled: true,
        };

        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["target_type"], "vm");
        assert_eq!(json["action"], "start");
        assert_eq!(json["cron_expression"], "0 8 * * 1-5");
    }

    #[test]
    fn test_schedule_round_trip() {
        let json = r#"{
            "id": 7,
            "name": "nightly stop",
            "target_type": "group",
            "target_id": 2,
            "action": "shutdown",
            "cron_expression": "0 22 * * *",
            "enabled": true,
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-01T12:00:00Z",
            "last_run": null,
            "next_run": "2025-06-01T22:00:00Z"
        }"#;

        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.target_type, ScheduleTarget::Group);
        assert_eq!(schedule.action, VmAction::Shutdown);
        assert!(schedule.next_run.is_some());
    }
}
