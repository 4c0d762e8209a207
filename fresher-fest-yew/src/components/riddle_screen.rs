use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams};
use yew::prelude::*;

/// Riddle generator: one-click generation, monotonic answer reveal.
///
/// Unsuitable riddles are regenerated inside the flow (bounded); the screen
/// only ever sees an appropriate riddle or a retryable failure.
#[function_component(RiddleScreen)]
pub fn riddle_screen() -> Html {
    let generation = use_generation();
    let answer_revealed = use_state(|| false);

    let on_generate = {
        let generation = generation.clone();
        let answer_revealed = answer_revealed.clone();
        Callback::from(move |_: MouseEvent| {
            answer_revealed.set(false);
            generation
                .run
                .emit((ActivityKind::Riddle, GenerationParams::new()));
        })
    };

    let on_reveal = {
        let answer_revealed = answer_revealed.clone();
        Callback::from(move |_: MouseEvent| answer_revealed.set(true))
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--riddle">
            <button class="fest-btn fest-btn--primary" onclick={on_generate} disabled={pending}>
                {if pending { "Generating..." } else { "Generate a Fun Riddle" }}
            </button>

            {match &generation.phase {
                GenerationPhase::Idle => html! {
                    <Notice kind={NoticeKind::Info} title="Ready for a challenge?"
                        message="Click the button above to generate a new riddle!" />
                },
                GenerationPhase::Pending => html! {
                    <div class="fest-spinner">{"Thinking of a good one..."}</div>
                },
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Riddle"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::Riddle { riddle, answer, .. }) => html! {
                    <div class="fest-card">
                        <h3>{"Here's your riddle:"}</h3>
                        <p class="fest-card__body">{ riddle }</p>
                        {if *answer_revealed {
                            html! {
                                <div class="fest-card__answer">
                                    <h4>{"Answer:"}</h4>
                                    <p>{ answer }</p>
                                </div>
                            }
                        } else {
                            html! {
                                <button class="fest-btn" onclick={on_reveal}>
                                    {"Reveal Answer"}
                                </button>
                            }
                        }}
                    </div>
                },
                GenerationPhase::Ready(_) => html! {},
            }}
        </div>
    }
}
