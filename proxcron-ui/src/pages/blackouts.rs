//! Blackout window list page with a creation form

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use proxcron_common::{BlackoutWindow, BlackoutWindowCreate};

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading, StatusBadge};

// Backend convention: 0 = Monday .. 6 = Sunday
const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[function_component(BlackoutList)]
pub fn blackout_list() -> Html {
    let blackouts = use_state(Vec::<BlackoutWindow>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let refresh = use_state(|| 0u32);
    let show_form = use_state(|| false);

    {
        let blackouts = blackouts.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                match ApiClient::list_blackouts().await {
                    Ok(list) => blackouts.set(list),
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });

            || ()
        });
    }

    let on_delete = {
        let refresh = refresh.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let refresh = refresh.clone();
            let error = error.clone();
            spawn_local(async move {
                match ApiClient::delete_blackout(id).await {
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
        <div class="blackouts-page">
            <Header title="Blackout Windows">
                <button class="button" onclick={toggle_form}>
                    {if *show_form { "Cancel" } else { "New window" }}
                </button>
            </Header>

            <div class="page-content">
                {if *show_form {
                    html! { <BlackoutForm on_created={on_created} /> }
                } else {
                    html! {}
                }}

                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                {if blackouts.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No blackout windows configured"}</p>
                        </div>
                    }
                } else {
                    blackouts.iter().map(|window| html! {
                        <BlackoutRow window={window.clone()} on_delete={on_delete.clone()} />
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}

/// Parse a comma-separated weekday list ("0,2,4"). Empty input means the
/// window is not restricted to particular days.
fn parse_days(input: &str) -> Result<Option<Vec<u8>>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut days = Vec::new();
    for part in trimmed.split(',') {
        let day: u8 = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid day '{}'", part.trim()))?;
        if day > 6 {
            return Err(format!("Day {} out of range, use 0 (Mon) to 6 (Sun)", day));
        }
        days.push(day);
    }

    Ok(Some(days))
}

/// Validate form fields and assemble the creation payload. Day numbers
/// travel as a JSON array string, matching the backend storage format.
fn build_blackout(
    name: &str,
    start_time: &str,
    end_time: &str,
    days: &str,
) -> Result<BlackoutWindowCreate, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    let start_time = start_time.trim();
    let end_time = end_time.trim();
    if start_time.is_empty() || end_time.is_empty() {
        return Err("Start and end times are required".to_string());
    }

    let days_of_week = match parse_days(days)? {
        Some(days) => Some(serde_json::to_string(&days).map_err(|e| e.to_string())?),
        None => None,
    };

    Ok(BlackoutWindowCreate {
        name: name.to_string(),
        description: None,
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        days_of_week,
        enabled: true,
    })
}

#[derive(Properties, PartialEq)]
struct BlackoutFormProps {
    on_created: Callback<()>,
}

#[function_component(BlackoutForm)]
fn blackout_form(props: &BlackoutFormProps) -> Html {
    let name = use_state(String::new);
    let start_time = use_state(String::new);
    let end_time = use_state(String::new);
    let days = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let days = days.clone();
        let error = error.clone();
        let saving = saving.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match build_blackout(&name, &start_time, &end_time, &days) {
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
                match ApiClient::create_blackout(&payload).await {
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
        <Card title="New blackout window">
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
                        <input
                            type="text"
                            placeholder="Start, e.g. 22:00:00"
                            value={(*start_time).clone()}
                            onchange={text_input(start_time.clone())}
                            disabled={*saving}
                        />
                    </div>

                    <div class="form-group">
                        <input
                            type="text"
                            placeholder="End, e.g. 04:00:00"
                            value={(*end_time).clone()}
                            onchange={text_input(end_time.clone())}
                            disabled={*saving}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <input
                        type="text"
                        placeholder="Days 0-6 (Mon-Sun), comma separated; blank for every day"
                        value={(*days).clone()}
                        onchange={text_input(days.clone())}
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

/// Render the restricted-days list, or "Every day" when unrestricted.
/// Malformed day lists are shown verbatim rather than hidden.
fn format_days(window: &BlackoutWindow) -> String {
    match window.weekdays() {
        Ok(Some(days)) => days
            .iter()
            .filter_map(|d| DAY_NAMES.get(*d as usize))
            .copied()
            .collect::<Vec<_>>()
            .join(", "),
        Ok(None) => "Every day".to_string(),
        Err(_) => window.days_of_week.clone().unwrap_or_default(),
    }
}

#[derive(Properties, PartialEq)]
struct BlackoutRowProps {
    window: BlackoutWindow,
    on_delete: Callback<i64>,
}

#[function_component(BlackoutRow)]
fn blackout_row(props: &BlackoutRowProps) -> Html {
    let window = &props.window;

    let delete = {
        let on_delete = props.on_delete.clone();
        let id = window.id;
        Callback::from(move |_| on_delete.emit(id))
    };

    html! {
        <Card>
            <div class="blackout-row">
                <div class="blackout-summary">
                    <h3 class="blackout-name">{&window.name}</h3>
                    <StatusBadge status={if window.enabled { "enabled".to_string() } else { "paused".to_string() }} />
                </div>

                <div class="blackout-details">
                    <div class="detail-item">
                        <span class="label">{"Window:"}</span>
                        <span class="value">
                            {format!("{} - {}", window.start_time, window.end_time)}
                        </span>
                    </div>
                    <div class="detail-item">
                        <span class="label">{"Days:"}</span>
                        <span class="value">{format_days(window)}</span>
                    </div>
                    {if let Some(ref description) = window.description {
                        html! {
                            <div class="detail-item">
                                <span class="label">{"Notes:"}</span>
                                <span class="value">{description}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="blackout-actions">
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
    fn test_parse_days_empty_means_every_day() {
        assert_eq!(parse_days("").unwrap(), None);
        assert_eq!(parse_days("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_days_list() {
        assert_eq!(parse_days("0,2,4").unwrap(), Some(vec![0, 2, 4]));
        assert_eq!(parse_days(" 5 , 6 ").unwrap(), Some(vec![5, 6]));
    }

    #[test]
    fn test_parse_days_rejects_out_of_range() {
        assert!(parse_days("7").is_err());
    }

    #[test]
    fn test_parse_days_rejects_garbage() {
        let err = parse_days("0,mon").unwrap_err();
        assert!(err.contains("mon"));
    }

    #[test]
    fn test_build_blackout_encodes_days_as_json() {
        let payload = build_blackout("Backups", "22:00:00", "04:00:00", "0,1,2,3,4").unwrap();
        assert_eq!(payload.days_of_week.as_deref(), Some("[0,1,2,3,4]"));
        assert!(payload.enabled);
    }

    #[test]
    fn test_build_blackout_without_days() {
        let payload = build_blackout("Always", "00:00:00", "06:00:00", "").unwrap();
        assert_eq!(payload.days_of_week, None);
    }

    #[test]
    fn test_build_blackout_requires_times() {
        assert!(build_blackout("w", "", "04:00:00", "").is_err());
        assert!(build_blackout("w", "22:00:00", " ", "").is_err());
    }
}
