//! API client for the proxcron backend

use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use proxcron_common::auth::{Token, UserLogin};
use proxcron_common::{
    ActionRequest, ActionResponse, BlackoutWindow, BlackoutWindowCreate, DashboardStats,
    ExecutionLog, Group, Schedule, ScheduleCreate, ToggleResponse, VmAction, VmInfo,
};

const API_BASE: &str = "/api";

/// Local storage key holding the session token. Presence of the key is
/// what the navigation guard treats as "logged in".
const TOKEN_KEY: &str = "auth_token";

/// API client for backend communication
pub struct ApiClient;

impl ApiClient {
    /// Get session token from local storage
    fn get_token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    /// Store session token in local storage
    pub fn set_token(token: String) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    /// Clear session token
    pub fn clear_token() {
        LocalStorage::delete(TOKEN_KEY);
    }

    /// Whether a session token is present. The token content is not
    /// inspected; an expired token surfaces as a 401 on the next request.
    pub fn has_token() -> bool {
        Self::get_token().is_some()
    }

    /// Make authenticated GET request
    pub async fn get<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, String> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::get(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    }

    /// Make authenticated POST request
    pub async fn post<B: Serialize, T: for<'de> Deserialize<'de>>(
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::post(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .json(body)
            .map_err(|e| format!("JSON serialize error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    }

    /// Make authenticated POST request without a body
    pub async fn post_empty<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, String> {
        #[derive(Serialize)]
        struct Empty {}

        Self::post(path, &Empty {}).await
    }

    /// Make authenticated DELETE request, discarding the response body
    pub async fn delete(path: &str) -> Result<(), String> {
        let url = format!("{}{}", API_BASE, path);

        let mut request = Request::delete(&url);

        if let Some(token) = Self::get_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        Ok(())
    }

    /// Login, returning the issued token
    pub async fn login(username: &str, password: &str) -> Result<Token, String> {
        let body = UserLogin {
            username: username.to_string(),
            password: password.to_string(),
        };
        Self::post("/auth/login", &body).await
    }

    /// List synced VMs and containers
    pub async fn list_vms() -> Result<Vec<VmInfo>, String> {
        Self::get("/vms").await
    }

    /// Fetch a single VM by its Proxmox VMID
    pub async fn get_vm(vmid: u32) -> Result<VmInfo, String> {
        Self::get(&format!("/vms/{}", vmid)).await
    }

    /// Run a manual power action against a VM
    pub async fn vm_action(vmid: u32, action: VmAction) -> Result<ActionResponse, String> {
        let body = ActionRequest { action };
        Self::post(&format!("/actions/vm/{}", vmid), &body).await
    }

    /// List schedules
    pub async fn list_schedules() -> Result<Vec<Schedule>, String> {
        Self::get("/schedules").await
    }

    /// Create a schedule
    pub async fn create_schedule(payload: &ScheduleCreate) -> Result<Schedule, String> {
        Self::post("/schedules", payload).await
    }

    /// Flip a schedule between enabled and disabled
    pub async fn toggle_schedule(id: i64) -> Result<ToggleResponse, String> {
        Self::post_empty(&format!("/schedules/{}/toggle", id)).await
    }

    /// Delete a schedule
    pub async fn delete_schedule(id: i64) -> Result<(), String> {
        Self::delete(&format!("/schedules/{}", id)).await
    }

    /// List VM groups
    pub async fn list_groups() -> Result<Vec<Group>, String> {
        Self::get("/groups").await
    }

    /// List blackout windows
    pub async fn list_blackouts() -> Result<Vec<BlackoutWindow>, String> {
        Self::get("/blackouts").await
    }

    /// Create a blackout window
    pub async fn create_blackout(payload: &BlackoutWindowCreate) -> Result<BlackoutWindow, String> {
        Self::post("/blackouts", payload).await
    }

    /// Delete a blackout window
    pub async fn delete_blackout(id: i64) -> Result<(), String> {
        Self::delete(&format!("/blackouts/{}", id)).await
    }

    /// Fetch recent execution logs, newest first
    pub async fn list_logs(limit: u32) -> Result<Vec<ExecutionLog>, String> {
        Self::get(&format!("/logs?limit={}", limit)).await
    }

    /// Fetch dashboard counters
    pub async fn stats() -> Result<DashboardStats, String> {
        Self::get("/stats").await
    }
}
