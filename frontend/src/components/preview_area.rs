use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(preview) = model.session.preview() else {
        return html! {};
    };

    let link = ctx.link();
    let affordances = model.session.affordances();
    let name = model
        .session
        .selection()
        .map(|selection| selection.name().to_string())
        .unwrap_or_else(|| "Selected image".to_string());

    html! {
        <div id="preview-container">
            <img id="preview-image" src={preview.to_string()} alt={name.clone()} />
            <p class="preview-name" title={name.clone()}>{ short_name(&name) }</p>
            <div class="button-container">
                <button
                    id="remove-btn"
                    class="remove-btn"
                    title="Remove this image"
                    onclick={link.callback(|_| Msg::RemoveFile)}
                >
                    {"Remove"}
                </button>
                <button
                    id="analyze-btn"
                    class="analyze-btn"
                    onclick={debounce::<MouseEvent, _>(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Analyze)
                    })}
                    disabled={!affordances.submit_enabled}
                >
                    { render_analyze_button_content(affordances.analyzing) }
                </button>
            </div>
        </div>
    }
}

fn render_analyze_button_content(analyzing: bool) -> Html {
    if analyzing {
        html! { <><span class="btn-spinner"></span>{" Analyzing..."}</> }
    } else {
        html! { <span class="btn-text">{"Analyze"}</span> }
    }
}

fn short_name(name: &str) -> String {
    if name.chars().count() > 20 {
        format!("{}...", name.chars().take(17).collect::<String>())
    } else {
        name.to_string()
    }
}
