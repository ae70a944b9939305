use gloo_timers::future::TimeoutFuture;
use shared::BarPlan;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProbabilityBarProps {
    pub plan: BarPlan,
    /// Changes whenever a new result is shown so the animation replays.
    pub run: u64,
}

/// One class row: the fill jumps to its width after the stagger delay (CSS
/// transitions it) while the counter ticks up to the same percentage.
#[function_component(ProbabilityBar)]
pub fn probability_bar(props: &ProbabilityBarProps) -> Html {
    let width = use_state(|| 0u32);
    let shown = use_state(|| 0u32);

    {
        let width = width.clone();
        let shown = shown.clone();

        use_effect_with((props.plan.clone(), props.run), move |(plan, _)| {
            width.set(0);
            shown.set(0);

            let cancelled = Rc::new(Cell::new(false));
            let plan = plan.clone();

            spawn_local({
                let cancelled = cancelled.clone();
                async move {
                    TimeoutFuture::new(plan.delay_ms).await;
                    if cancelled.get() {
                        return;
                    }
                    width.set(plan.percent);

                    let counter = plan.counter;
                    for tick in 1..=counter.total_ticks() {
                        TimeoutFuture::new(counter.tick_ms).await;
                        if cancelled.get() {
                            return;
                        }
                        shown.set(counter.value_after_ticks(tick));
                    }
                }
            });

            move || cancelled.set(true)
        });
    }

    let class = props.plan.class;

    html! {
        <div class="result-item">
            <div class="result-label">{ class.title() }</div>
            <div class="result-bar-container">
                <div
                    id={format!("{}-bar", class.key())}
                    class="result-bar"
                    style={format!("width: {}%", *width)}
                ></div>
            </div>
            <div id={format!("{}-percent", class.key())} class="result-value">
                { format!("{}%", *shown) }
            </div>
        </div>
    }
}
