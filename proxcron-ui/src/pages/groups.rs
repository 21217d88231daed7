//! VM group list page

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use proxcron_common::Group;

use crate::api::ApiClient;
use crate::components::{Card, Header, Loading};

#[function_component(GroupList)]
pub fn group_list() -> Html {
    let groups = use_state(Vec::<Group>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let groups = groups.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match ApiClient::list_groups().await {
                    Ok(list) => groups.set(list),
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
        <div class="groups-page">
            <Header title="Groups" />

            <div class="page-content">
                {if let Some(err) = (*error).as_ref() {
                    html! { <div class="error-message">{err}</div> }
                } else {
                    html! {}
                }}

                {if groups.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"No groups defined"}</p>
                        </div>
                    }
                } else {
                    groups.iter().map(|group| html! {
                        <Card>
                            <div class="group-row">
                                <div class="group-summary">
                                    <h3 class="group-name">{&group.name}</h3>
                                    <span class="member-count">
                                        {format!("{} members", group.member_count)}
                                    </span>
                                </div>
                                {if let Some(ref description) = group.description {
                                    html! { <p class="group-description">{description}</p> }
                                } else {
                                    html! {}
                                }}
                            </div>
                        </Card>
                    }).collect::<Html>()
                }}
            </div>
        </div>
    }
}
