//! Schedule list page with a creation form

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use proxcron_common::{Schedule, ScheduleCreate, ScheduleTarget, VmAction};

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading, StatusBadge};

#[function_component(ScheduleList)]
pub fn schedule_list() -> Html {
    let schedules = use_state(Vec::<Schedule>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);
    let show_form = use_state(|| false);

    {
        let schedules = schedules.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                match ApiClient::list_schedules().await {
                    Ok(list) => schedules.set(list),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_toggle = {
        let refresh = refresh.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let refresh = refresh.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::toggle_schedule(id).await {
                    Ok(_) => refresh.set(*refresh + 1),
                    Err(e) => error.set(Some(format!("Toggle failed: {}", e))),
                }
            });
        })
    };

    let on_delete = {
        let refresh = refresh.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let refresh = refresh.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::delete_schedule(id).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(e) => error.set(Some(format!("Delete failed: {}", e))),
                }
            });
        })
    };

    let toggle_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(!*show_form))
    };

    let on_created = {
        let refresh = refresh.clone();
        let show_form = show_form.clone();
        Callback::from(move |_: ()| {
            show_form.set(false);
            refresh.set(*refresh + 1);
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="schedules-page">
            <Header title="Schedules">
                <button class="button" onclick={toggle_form}>
                    {if *show_form { "Cancel" } else { "New schedule" }}
                </button>
            </Header>

            <div class="page-content">
                {if *show_form {
                    html! { <ScheduleForm on_created={on_created} /> }
                } else {
                    html! {}
                }}

                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                {if schedules.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No schedules configured"}</p>
                        </div>
                    }
                } else {
                    schedules.iter().map(|schedule| html! {
                        <ScheduleRow
                            schedule={schedule.clone()}
                            on_toggle={on_toggle.clone()}
                            on_delete={on_delete.clone()}
                        />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}

/// Validate form fields and assemble the creation payload.
/// Cron syntax is only checked for presence; the backend rejects
/// expressions croniter cannot parse.
fn build_schedule(
    name: &str,
    target_type: &str,
    target_id: &str,
    action: &str,
    cron: &str,
) -> Result<ScheduleCreate, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let target_type = match target_type {
        "vm" => ScheduleTarget::Vm,
        "group" => ScheduleTarget::Group,
        other => return Err(format!("Unknown target type '{}'", other)),
    };

    let target_id: i64 = target_id
        .trim()
        .parse()
        .map_err(|_| format!("Invalid target ID '{}'", target_id.trim()))?;

    let action: VmAction = action.parse().map_err(|e| format!("{}", e))?;

    let cron = cron.trim();
    if cron.is_empty() {
        return Err("Cron expression is required".to_string());
    }

    Ok(ScheduleCreate {
        name: name.to_string(),
        target_type,
        target_id,
        action,
        cron_expression: cron.to_string(),
        enabled: true,
    })
}

#[derive(Properties, PartialEq)]
struct ScheduleFormProps {
    on_created: Callback<()>,
}

#[function_component(ScheduleForm)]
fn schedule_form(props: &ScheduleFormProps) -> Html {
    let name = use_state(String::new);
    let target_type = use_state(|| "vm".to_string());
    let target_id = use_state(String::new);
    let action = use_state(|| "start".to_string());
    let cron = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let select_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.set(select.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let target_type = target_type.clone();
        let target_id = target_id.clone();
        let action = action.clone();
        let cron = cron.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match build_schedule(&name, &target_type, &target_id, &action, &cron) {
                Ok(payload) => payload,
                Err(msg) => {
                    error.set(Some(msg));
                    return;
                }
            };

            let error = error.clone();
            let saving = saving.clone();
            let on_created = on_created.clone();

            saving.set(true);

            spawn_local(async move {
                match ApiClient::create_schedule(&payload).await {
                    Ok(_) => on_created.emit(()),
                    Err(e) => {
                        error.set(Some(format!("Create failed: {}", e)));
                        saving.set(false);
                    }
                }
            });
        })
    };

    html! {
        <Card title="New schedule">
            <form class="create-form" onsubmit={on_submit}>
                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Name"
                        value={(*name).clone()}
                        onchange={text_input(name.clone())}
                        disabled={*saving}
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <select onchange={select_input(target_type.clone())} disabled={*saving}>
                            <option value="vm" selected={*target_type == "vm"}>{"VM"}</option>
                            <option value="group" selected={*target_type == "group"}>{"Group"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <input
                            type="number"
                            placeholder="Target ID"
                            value={(*target_id).clone()}
                            onchange={text_input(target_id.clone())}
                            disabled={*saving}
                        />
                    </div>

                    <div class="form-group">
                        <select onchange={select_input(action.clone())} disabled={*saving}>
                            <option value="start" selected={*action == "start"}>{"Start"}</option>
                            <option value="stop" selected={*action == "stop"}>{"Stop"}</option>
                            <option value="restart" selected={*action == "restart"}>{"Restart"}</option>
                            <option value="shutdown" selected={*action == "shutdown"}>{"Shutdown"}</option>
                            <option value="reset" selected={*action == "reset"}>{"Reset"}</option>
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Cron expression, e.g. 0 8 * * 1-5"
                        value={(*cron).clone()}
                        onchange={text_input(cron.clone())}
                        disabled={*saving}
                    />
                </div>

                <button type="submit" disabled={*saving} class="button primary">
                    {if *saving { "Saving..." } else { "Create" }}
                </button>
            </form>
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct ScheduleRowProps {
    schedule: Schedule,
    on_toggle: Callback<i64>,
    on_delete: Callback<i64>,
}

#[function_component(ScheduleRow)]
fn schedule_row(props: &ScheduleRowProps) -> Html {
    let schedule = &props.schedule;

    let target = match schedule.target_type {
        ScheduleTarget::Vm => format!("VM #{}", schedule.target_id),
        ScheduleTarget::Group => format!("group #{}", schedule.target_id),
    };

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = schedule.id;
        Callback::from(move |_| on_toggle.emit(id))
    };

    let delete = {
        let on_delete = props.on_delete.clone();
        let id = schedule.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <Card>
            <div class="schedule-row">
                <div class="schedule-summary">
                    <h3 class="schedule-name">{&schedule.name}</h3>
                    <StatusBadge status={if schedule.enabled { "enabled".to_string() } else { "paused".to_string() }} />
                </div>

                <div class="schedule-details">
                    <div class="detail-item">
                        <span class="label">{"Action:"}</span>
                        <span class="value">{format!("{} {}", schedule.action, target)}</span>
                    </div>
                    <div class="detail-item">
                        <span class="label">{"Cron:"}</span>
                        <span class="value"><code>{&schedule.cron_expression}</code></span>
                    </div>
                    {if let Some(next_run) = schedule.next_run {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Next run:"}</span>
                                <span class="value">{next_run.format("%Y-%m-%d %H:%M").to_string()}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                    {if let Some(last_run) = schedule.last_run {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Last run:"}</span>
                                <span class="value">{last_run.format("%Y-%m-%d %H:%M").to_string()}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="schedule-actions">
                    <button class="button small" onclick={toggle}>
                        {if schedule.enabled { "Disable" } else { "Enable" }}
                    </button>
                    <button class="button small danger" onclick={delete}>{"Delete"}</button>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_schedule_valid() {
        let payload = build_schedule("nightly stop", "group", "3", "shutdown", "0 22 * * *").unwrap();
        assert_eq!(payload.target_type, ScheduleTarget::Group);
        assert_eq!(payload.target_id, 3);
        assert_eq!(payload.action, VmAction::Shutdown);
        assert!(payload.enabled);
    }

    #[test]
    fn test_build_schedule_trims_whitespace() {
        let payload = build_schedule("  am start  ", "vm", " 100 ", "start", " 0 8 * * * ").unwrap();
        assert_eq!(payload.name, "am start");
        assert_eq!(payload.target_id, 100);
        assert_eq!(payload.cron_expression, "0 8 * * *");
    }

    #[test]
    fn test_build_schedule_rejects_empty_name() {
        assert!(build_schedule("  ", "vm", "100", "start", "0 8 * * *").is_err());
    }

    #[test]
    fn test_build_schedule_rejects_bad_target_id() {
        let err = build_schedule("s", "vm", "abc", "start", "0 8 * * *").unwrap_err();
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_build_schedule_rejects_unknown_action() {
        let err = build_schedule("s", "vm", "100", "hibernate", "0 8 * * *").unwrap_err();
        assert!(err.contains("hibernate"));
    }

    #[test]
    fn test_build_schedule_rejects_empty_cron() {
        assert!(build_schedule("s", "vm", "100", "start", "   ").is_err());
    }
}
