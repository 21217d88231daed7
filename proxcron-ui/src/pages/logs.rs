//! Execution log page

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use proxcron_common::ExecutionLog;

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading, StatusBadge};

const PAGE_SIZE: u32 = 100;

#[function_component(LogList)]
pub fn log_list() -> Html {
    let logs = use_state(Vec::<ExecutionLog>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let logs = logs.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::list_logs(PAGE_SIZE).await {
                    Ok(list) => logs.set(list),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });

            || ()
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="logs-page">
            <Header title="Execution Logs" />

            <div class="page-content">
                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                {if logs.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No executions recorded yet"}</p>
                        </div>
                    }
                } else {
                    logs.iter().map(|log| html! {
                        <LogRow log={log.clone()} />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LogRowProps {
    log: ExecutionLog,
}

#[function_component(LogRow)]
fn log_row(props: &LogRowProps) -> Html {
    let log = &props.log;

    let subject = match (&log.vm_name, log.vmid) {
        (Some(name), Some(vmid)) => format!("{} ({})", name, vmid),
        (Some(name), None) => name.clone(),
        (None, Some(vmid)) => format!("VM {}", vmid),
        (None, None) => "unknown VM".to_string(),
    };

    html! {
        <Card>
            <div class="log-row">
                <div class="log-summary">
                    <span class="log-subject">{subject}</span>
                    <span class="log-action">{&log.action}</span>
                    <StatusBadge status={log.status.clone()} />
                </div>

                <div class="log-details">
                    <div class="detail-item">
                        <span class="label">{"Executed:"}</span>
                        <span class="value">
                            {log.executed_at.format("%Y-%m-%d %H:%M:%S").to_string()}
                        </span>
                    </div>
                    {if let Some(duration) = log.duration_seconds {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Duration:"}</span>
                                <span class="value">{format!("{}s", duration)}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                    {if let Some(ref reason) = log.skipped_reason {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Skipped:"}</span>
                                <span class="value">{reason}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                    {if let Some(ref message) = log.error_message {
                        html! { <div class="error-message">{message}</div> }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </Card>
    }
}
