use super::super::Model;
use super::probability_bar::ProbabilityBar;
use shared::{Condition, present};
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = model.session.result() else {
        return html! {
            <section id="placeholder" class="results-placeholder">
                <p>{"Results will appear here after analysis."}</p>
            </section>
        };
    };

    let shown = present(result, &model.config);
    let run = model.session.run();

    html! {
        <section id="results-container" class="results-container">
            { render_condition(shown.condition) }
            <p id="condition-description" class="condition-description">{ shown.description }</p>

            <div class="detailed-results">
                <h3>{"Probability Distribution"}</h3>
                <div class="result-bars">
                    { for shown.bars.into_iter().map(|plan| {
                        let key = plan.class.key().to_string();
                        html! { <ProbabilityBar {key} {plan} {run} /> }
                    }) }
                </div>
            </div>

            {
                if let Some(uri) = shown.explanation_uri {
                    html! {
                        <div id="gradcam-section" class="gradcam-section">
                            <h3>{"Grad-CAM Visualization"}</h3>
                            <img class="gradcam-image" src={uri} alt="Grad-CAM Visualization" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn render_condition(condition: Condition) -> Html {
    html! {
        <div
            id="condition-result"
            class={classes!("condition-result", condition.css_class())}
            title={condition.summary()}
        >
            <span>{ condition.heading() }</span>
            <span class="condition-badge">{ condition.badge() }</span>
        </div>
    }
}
