//! Card container component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class="card">
            {if let Some(ref title) = props.title {
                html! { <div class="card-title">{title}</div> }
            } else {
                html! {}
            }}
            <div class="card-body">
                {props.children.clone()}
            </div>
        </div>
    }
}
