//! Dashboard page with cluster-wide scheduler counters

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use proxcron_common::DashboardStats;

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading};

const REFRESH_MS: u32 = 30_000;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let loading = use_state(|| true);

    {
        let stats = stats.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            let load = {
                let stats = stats.clone();
                let loading = loading.clone();
                move || {
                    let stats = stats.clone();
                    let loading = loading.clone();
                    spawn_local(async move {
                        if let Ok(s) = ApiClient::stats().await {
                            stats.set(Some(s));
                        }
                        loading.set(false);
                    });
                }
            };

            load();
            let refresh = Interval::new(REFRESH_MS, load);

            move || drop(refresh)
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="dashboard-page">
            <Header title="Dashboard" />

            <div class="page-content">
                {match (*stats).as_ref() {
                    Some(s) => html! {
                        <div class="stat-grid">
                            <StatTile label="Total VMs" value={s.total_vms} />
                            <StatTile label="Running" value={s.running_vms} />
                            <StatTile label="Stopped" value={s.stopped_vms} />
                            <StatTile label="Schedules" value={s.total_schedules} />
                            <StatTile label="Active schedules" value={s.active_schedules} />
                            <StatTile label="Groups" value={s.total_groups} />
                            <StatTile label="Runs (24h)" value={s.recent_executions} />
                            <StatTile label="Failed (24h)" value={s.failed_executions} />
                        </div>
                    },
                    None => html! {
                        <div class="empty-state">
                            <p>{"Statistics are unavailable"}</p>
                        </div>
                    },
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatTileProps {
    label: &'static str,
    value: u32,
}

#[function_component(StatTile)]
fn stat_tile(props: &StatTileProps) -> Html {
    html! {
        <Card>
            <div class="stat-tile">
                <span class="stat-value">{props.value}</span>
                <span class="stat-label">{props.label}</span>
            </div>
        </Card>
    }
}
