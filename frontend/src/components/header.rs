use super::super::{Model, Msg};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(link: &Scope<Model>) -> Html {
    html! {
        <header class="app-header">
            <h1>{"Brain Tumor MRI Classifier"}</h1>
            <p class="subtitle">{"Upload an MRI scan to get class probabilities and a Grad-CAM overlay"}</p>
            <button
                id="about-btn"
                class="about-btn"
                onclick={link.callback(|_| Msg::ShowAbout(true))}
            >
                {"About the model"}
            </button>
        </header>
    }
}
