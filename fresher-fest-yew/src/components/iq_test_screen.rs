use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, Difficulty, GeneratedContent, GenerationParams};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn parse_difficulty(value: &str) -> Difficulty {
    match value {
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Easy,
    }
}

#[function_component(IqTestScreen)]
pub fn iq_test_screen() -> Html {
    let generation = use_generation();
    let topic = use_state(String::new);
    let difficulty = use_state(|| Difficulty::Easy);
    let answer_revealed = use_state(|| false);

    let on_topic_input = {
        let topic = topic.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            topic.set(input.value());
        })
    };

    let on_difficulty_change = {
        let difficulty = difficulty.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            difficulty.set(parse_difficulty(&select.value()));
        })
    };

    let on_generate = {
        let generation = generation.clone();
        let topic = topic.clone();
        let difficulty = difficulty.clone();
        let answer_revealed = answer_revealed.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            answer_revealed.set(false);
            let params = GenerationParams::new()
                .with_topic((*topic).clone())
                .with_difficulty(*difficulty);
            generation.run.emit((ActivityKind::IqTest, params));
        })
    };

    let on_reveal = {
        let answer_revealed = answer_revealed.clone();
        Callback::from(move |_: MouseEvent| answer_revealed.set(true))
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--iq-test">
            <form class="fest-form" onsubmit={on_generate}>
                <label>{"Topic (Optional)"}
                    <input type="text" value={(*topic).clone()} oninput={on_topic_input}
                        placeholder="e.g., logic, patterns, numbers" />
                </label>
                <label>{"Difficulty"}
                    <select onchange={on_difficulty_change}>
                        <option value="easy" selected={*difficulty == Difficulty::Easy}>{"Easy"}</option>
                        <option value="medium" selected={*difficulty == Difficulty::Medium}>{"Medium"}</option>
                        <option value="hard" selected={*difficulty == Difficulty::Hard}>{"Hard"}</option>
                    </select>
                </label>
                <button type="submit" class="fest-btn fest-btn--primary" disabled={pending}>
                    {if pending { "Generating..." } else { "Generate Question" }}
                </button>
            </form>

            {match &generation.phase {
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Question"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::IqQuestion { question, answer, explanation }) => html! {
                    <div class="fest-card">
                        <h3>{"Question"}</h3>
                        <p class="fest-card__body">{ question }</p>
                        {if *answer_revealed {
                            html! {
                                <div class="fest-card__answer">
                                    <h4>{"Answer:"}</h4>
                                    <p>{ answer }</p>
                                    {if let Some(explanation) = explanation {
                                        html! {
                                            <>
                                                <h4>{"Explanation:"}</h4>
                                                <p>{ explanation }</p>
                                            </>
                                        }
                                    } else {
                                        html! {}
                                    }}
                                </div>
                            }
                        } else {
                            html! {
                                <button class="fest-btn" onclick={on_reveal}>{"Show Answer"}</button>
                            }
                        }}
                    </div>
                },
                _ => html! {},
            }}
        </div>
    }
}
