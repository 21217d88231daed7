//! Status badge component
//!
//! Used both for VM power state ("running", "stopped") and for execution
//! log outcomes ("success", "failed", "skipped").

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: String,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let class = match props.status.to_lowercase().as_str() {
        "running" | "success" | "enabled" => "status-badge status-ok",
        "stopped" | "paused" => "status-badge status-idle",
        "failed" | "error" => "status-badge status-error",
        "skipped" => "status-badge status-warn",
        _ => "status-badge status-unknown",
    };

    html! {
        <span class={class}>{&props.status}</span>
    }
}
