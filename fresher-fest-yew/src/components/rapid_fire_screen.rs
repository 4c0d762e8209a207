use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_countdown, use_generation, GenerationPhase};
use fresher_fest_core::{
    ActivityKind, GeneratedContent, GenerationParams, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT,
    MIN_QUESTION_COUNT, SECS_PER_RAPID_FIRE_QUESTION,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Rapid-fire question round: a batch of quick questions answered out loud
/// against a clock that grants ten seconds per question.
#[function_component(RapidFireScreen)]
pub fn rapid_fire_screen() -> Html {
    let generation = use_generation();
    let topic = use_state(String::new);
    let count = use_state(|| DEFAULT_QUESTION_COUNT);
    let countdown = use_countdown(0);

    // Reload the clock whenever a fresh batch of questions lands.
    {
        let countdown = countdown.clone();
        use_effect_with(generation.phase.clone(), move |phase| {
            if let GenerationPhase::Ready(GeneratedContent::RapidFire { questions }) = phase {
                let seconds = questions.len() as u32 * SECS_PER_RAPID_FIRE_QUESTION;
                countdown.reset.emit(seconds);
            }
            || ()
        });
    }

    let on_topic_input = {
        let topic = topic.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            topic.set(input.value());
        })
    };

    let on_count_input = {
        let count = count.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Ok(value) = input.value().parse::<u8>() {
                count.set(value.clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT));
            }
        })
    };

    let on_generate = {
        let generation = generation.clone();
        let topic = topic.clone();
        let count = count.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let params = GenerationParams::new()
                .with_topic((*topic).clone())
                .with_count(*count);
            generation.run.emit((ActivityKind::RapidFire, params));
        })
    };

    let on_start_clock = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| countdown.start.emit(()))
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--rapid-fire">
            <form class="fest-form" onsubmit={on_generate}>
                <label>{"Topic (Optional)"}
                    <input type="text" value={(*topic).clone()} oninput={on_topic_input}
                        placeholder="e.g., movies, music, sports" />
                </label>
                <label>{"Number of Questions"}
                    <input type="number" value={count.to_string()} oninput={on_count_input}
                        min={MIN_QUESTION_COUNT.to_string()}
                        max={MAX_QUESTION_COUNT.to_string()} />
                </label>
                <button type="submit" class="fest-btn fest-btn--primary" disabled={pending}>
                    {if pending { "Generating..." } else { "Generate Questions" }}
                </button>
            </form>

            {match &generation.phase {
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Questions"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::RapidFire { questions }) => html! {
                    <div class="fest-card">
                        <div class="fest-clock">
                            <span class="fest-clock__time">
                                {format!("{}s", countdown.remaining)}
                            </span>
                            {if !countdown.running && !countdown.finished {
                                html! {
                                    <button class="fest-btn fest-btn--accent" onclick={on_start_clock}>
                                        {"Start the Clock"}
                                    </button>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                        <ol class="fest-question-list">
                            {for questions.iter().map(|question| html! {
                                <li>{ question }</li>
                            })}
                        </ol>
                        {if countdown.finished {
                            html! {
                                <Notice kind={NoticeKind::Info} title="Time's up!"
                                    message="Pens down. How many did you get through?" />
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                },
                _ => html! {},
            }}
        </div>
    }
}
