mod api;
mod components;

use components::about_modal::render_about_modal;
use components::handlers;
use components::header::render_header;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::{AnalysisError, CanonicalResult, PipelineConfig, Session};
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Selection
    FileChosen(GlooFile),
    PreviewReady(u64, Result<String, String>),
    RemoveFile,

    // Analysis
    Analyze,
    AnalysisFinished(u64, Result<CanonicalResult, AnalysisError>),

    // UI states
    SetDragging(bool),
    ShowAbout(bool),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
pub struct Model {
    config: PipelineConfig,
    session: Session<GlooFile>,
    preview_reader: Option<FileReader>,
    is_dragging: bool,
    show_about: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = PipelineConfig::default();
        Self {
            session: Session::new(config.max_upload_bytes),
            config,
            preview_reader: None,
            is_dragging: false,
            show_about: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::PreviewReady(generation, preview) => {
                handlers::handle_preview_ready(self, generation, preview)
            }
            Msg::RemoveFile => handlers::handle_remove_file(self),

            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisFinished(generation, outcome) => {
                handlers::handle_analysis_finished(self, generation, outcome)
            }

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ShowAbout(show) => {
                self.show_about = show;
                true
            }

            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(ctx.link()) }

                <main class="main-content">
                    <section class="upload-panel">
                        { render_upload_section(self, ctx) }
                        { render_preview_area(self, ctx) }
                        { render_error_message(self) }
                    </section>
                    { render_results(self) }
                </main>

                { render_about_modal(self.show_about, ctx.link()) }

                <footer class="app-footer">
                    <p>{"For research and demonstration only. Not a medical device."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
