//! Page header component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    /// Right-aligned slot for page-level actions (create buttons etc.)
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="page-header">
            <h1 class="header-title">{&props.title}</h1>
            <div class="header-actions">
                {props.children.clone()}
            </div>
        </header>
    }
}
