use super::super::{Model, Msg};
use yew::html::Scope;
use yew::prelude::*;

pub fn render_about_modal(visible: bool, link: &Scope<Model>) -> Html {
    if !visible {
        return html! {};
    }

    html! {
        <div id="model-info" class="modal-overlay">
            <div class="modal">
                <h2>{"About the model"}</h2>
                <p>
                    {"Predictions come from an Xception network fine-tuned on brain MRI scans. \
                      Each upload is resized to 224x224 and scored against four classes: \
                      healthy, glioma, meningioma and pituitary tumor."}
                </p>
                <p>
                    {"The highlighted overlay is a Grad-CAM map of the regions that drove the \
                      prediction. It is an aid for inspection, not a diagnosis."}
                </p>
                <button
                    id="close-about-btn"
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::ShowAbout(false))}
                >
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
