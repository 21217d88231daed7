//! VM list page with manual power actions and per-VM detail

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use proxcron_common::{VmAction, VmInfo};

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading, StatusBadge};

#[function_component(VMList)]
pub fn vm_list() -> Html {
    let vms = use_state(Vec::<VmInfo>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    // Bumped after every action so the list refetches
    let refresh = use_state(|| 0u32);

    {
        let vms = vms.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                match ApiClient::list_vms().await {
                    Ok(list) => vms.set(list),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_action = {
        let refresh = refresh.clone();
        let error = error.clone();
        Callback::from(move |(vmid, action): (u32, VmAction)| {
            let refresh = refresh.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::vm_action(vmid, action).await {
                    Ok(_) => refresh.set(*refresh + 1),
                    Err(e) => error.set(Some(format!("{} failed: {}", action, e))),
                }
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="vms-page">
            <Header title="Virtual Machines" />

            <div class="page-content">
                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                {if vms.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No VMs synced yet"}</p>
                        </div>
                    }
                } else {
                    vms.iter().map(|vm| html! {
                        <VMRow vm={vm.clone()} on_action={on_action.clone()} />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}

/// Render an uptime in seconds as a short human-readable string
fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[derive(Properties, PartialEq)]
struct VMRowProps {
    vm: VmInfo,
    on_action: Callback<(u32, VmAction)>,
}

#[function_component(VMRow)]
fn vm_row(props: &VMRowProps) -> Html {
    let vm = &props.vm;
    let running = vm.status.as_deref() == Some("running");

    let expanded = use_state(|| false);
    // Fetched lazily the first time the row is expanded
    let detail = use_state(|| None::<VmInfo>);

    let toggle_detail = {
        let expanded = expanded.clone();
        let detail = detail.clone();
        let vmid = vm.vmid;
        Callback::from(move |_| {
            let open = !*expanded;
            expanded.set(open);

            if open && detail.is_none() {
                let detail = detail.clone();
                spawn_local(async move {
                    if let Ok(vm) = ApiClient::get_vm(vmid).await {
                        detail.set(Some(vm));
                    }
                });
            }
        })
    };

    let action_button = |action: VmAction, label: &'static str| {
        let on_action = props.on_action.clone();
        let vmid = vm.vmid;
        let onclick = Callback::from(move |_| on_action.emit((vmid, action)));
        html! { <button class="button small" {onclick}>{label}</button> }
    };

    html! {
        <Card>
            <div class="vm-row">
                <div class="vm-summary clickable" onclick={toggle_detail}>
                    <h3 class="vm-name">{&vm.name}</h3>
                    <StatusBadge status={vm.status.clone().unwrap_or_else(|| "unknown".to_string())} />
                </div>

                <div class="vm-details">
                    <div class="detail-item">
                        <span class="label">{"VMID:"}</span>
                        <span class="value">{vm.vmid}</span>
                    </div>
                    <div class="detail-item">
                        <span class="label">{"Type:"}</span>
                        <span class="value">{vm.vm_type.as_str()}</span>
                    </div>
                    <div class="detail-item">
                        <span class="label">{"Node:"}</span>
                        <span class="value">{&vm.node}</span>
                    </div>
                    {if let Some(maxmem) = vm.maxmem {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Memory:"}</span>
                                <span class="value">{format!("{} MiB", maxmem / (1024 * 1024))}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                {if *expanded {
                    match (*detail).as_ref() {
                        Some(full) => html! {
                            <div class="vm-detail-panel">
                                {if let Some(uptime) = full.uptime {
                                    html! {
                                        <div class="detail-item">
                                            <span class="label">{"Uptime:"}</span>
                                            <span class="value">{format_uptime(uptime)}</span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                                {if let Some(maxdisk) = full.maxdisk {
                                    html! {
                                        <div class="detail-item">
                                            <span class="label">{"Disk:"}</span>
                                            <span class="value">
                                                {format!("{} GiB", maxdisk / (1024 * 1024 * 1024))}
                                            </span>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }}
                                <div class="detail-item">
                                    <span class="label">{"Last synced:"}</span>
                                    <span class="value">
                                        {full.last_synced.format("%Y-%m-%d %H:%M").to_string()}
                                    </span>
                                </div>
                            </div>
                        },
                        None => html! { <Loading /> },
                    }
                } else {
                    html! {}
                }}

                <div class="vm-actions">
                    {if running {
                        html! {
                            <>
                                {action_button(VmAction::Shutdown, "Shutdown")}
                                {action_button(VmAction::Restart, "Restart")}
                                {action_button(VmAction::Stop, "Stop")}
                            </>
                        }
                    } else {
                        action_button(VmAction::Start, "Start")
                    }}
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_minutes_only() {
        assert_eq!(format_uptime(0), "0m");
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(61), "1m");
    }

    #[test]
    fn test_format_uptime_hours() {
        assert_eq!(format_uptime(3_661), "1h 1m");
    }

    #[test]
    fn test_format_uptime_days() {
        // 2 days, 3 hours, 4 minutes
        assert_eq!(format_uptime(2 * 86_400 + 3 * 3_600 + 4 * 60), "2d 3h 4m");
    }
}
