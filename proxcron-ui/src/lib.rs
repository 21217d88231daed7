//! Proxcron web UI
//!
//! Browser frontend for the Proxmox cronjob scheduler, built with Yew.
//! Lets operators manage power schedules, VM groups, blackout windows
//! and execution history for a Proxmox cluster.

mod api;
mod components;
mod pages;
mod router;

use yew::prelude::*;
use yew_router::prelude::*;

use api::ApiClient;
use router::{switch, Route};

/// Main application component
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <TopNav />
                <main class="main-content">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Top navigation bar, shown only for logged-in users
#[function_component(TopNav)]
fn top_nav() -> Html {
    let navigator = use_navigator().unwrap();
    let route = use_route::<Route>();

    // No chrome on the login screen or for anonymous visitors
    if !ApiClient::has_token() || route == Some(Route::Login) {
        return html! {};
    }

    let links = [
        Route::Dashboard,
        Route::VMs,
        Route::Schedules,
        Route::Groups,
        Route::Blackouts,
        Route::Logs,
    ];

    let logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            ApiClient::clear_token();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-brand">
                <h2>{"Proxcron"}</h2>
            </div>
            <div class="nav-links">
                { for links.iter().map(|target| {
                    let classes = if route.as_ref() == Some(target) {
                        "nav-link active"
                    } else {
                        "nav-link"
                    };
                    html! {
                        <Link<Route> to={target.clone()} classes={classes}>
                            {target.title()}
                        </Link<Route>>
                    }
                }) }
            </div>
            <div class="nav-actions">
                <button class="nav-logout" onclick={logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
