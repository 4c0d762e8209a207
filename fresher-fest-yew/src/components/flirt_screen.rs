use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Icebreaker question generator for getting to know someone
#[function_component(FlirtScreen)]
pub fn flirt_screen() -> Html {
    let generation = use_generation();
    let topic = use_state(String::new);

    let on_topic_input = {
        let topic = topic.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            topic.set(input.value());
        })
    };

    let on_generate = {
        let generation = generation.clone();
        let topic = topic.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let params = GenerationParams::new().with_topic((*topic).clone());
            generation.run.emit((ActivityKind::FlirtQuestion, params));
        })
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--flirt">
            <form class="fest-form" onsubmit={on_generate}>
                <label>{"Topic (Optional)"}
                    <input type="text" value={(*topic).clone()} oninput={on_topic_input}
                        placeholder="e.g., hobbies, dreams, guilty pleasures" />
                </label>
                <button type="submit" class="fest-btn fest-btn--primary" disabled={pending}>
                    {if pending { "Generating..." } else { "Get a Question" }}
                </button>
            </form>

            {match &generation.phase {
                GenerationPhase::Idle => html! {
                    <Notice kind={NoticeKind::Info} title="Break the ice"
                        message="Generate a playful question to ask someone new." />
                },
                GenerationPhase::Pending => html! {
                    <div class="fest-spinner">{"Finding the right words..."}</div>
                },
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Question"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::FlirtQuestion { question }) => html! {
                    <div class="fest-card">
                        <h3>{"Ask away:"}</h3>
                        <p class="fest-card__body">{ question }</p>
                    </div>
                },
                GenerationPhase::Ready(_) => html! {},
            }}
        </div>
    }
}
