use super::super::Model;
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<E, F>(duration: u32, callback: F) -> Callback<E>
where
    E: 'static,
    F: Fn() + Clone + 'static,
{
    let pending = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let callback = callback.clone();
        // replacing the handle cancels the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(duration, move || callback()));
    })
}

pub fn first_file(file_list: Option<FileList>) -> Option<GlooFile> {
    file_list.and_then(|files| files.item(0)).map(GlooFile::from)
}

pub fn render_error_message(model: &Model) -> Html {
    if let Some(error_msg) = model.session.error() {
        html! {
            <div class="error-message" role="alert">
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}
