use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams, RevealState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Hints 1-3, then the portrait prompt as the final clue.
const GUESS_STAGES: u8 = 4;

/// Guess-the-name quiz driven by the ordered reveal machine: hints come out
/// one at a time, the portrait prompt last, and a guess locks the round.
#[function_component(GuessTheNameScreen)]
pub fn guess_the_name_screen() -> Html {
    let generation = use_generation();
    let machine = use_state(RevealState::default);
    let guess = use_state(String::new);

    // Arm the machine once content lands; a failed round returns it to Idle
    // so the player can start over.
    {
        let machine = machine.clone();
        use_effect_with(generation.phase.clone(), move |phase| {
            match phase {
                GenerationPhase::Ready(GeneratedContent::GuessTheName { .. }) => {
                    let mut next = (*machine).clone();
                    if next.content_ready(GUESS_STAGES).is_ok() {
                        machine.set(next);
                    }
                }
                GenerationPhase::Failed(_) => {
                    let mut next = (*machine).clone();
                    next.reset();
                    machine.set(next);
                }
                _ => {}
            }
            || ()
        });
    }

    let on_start = {
        let generation = generation.clone();
        let machine = machine.clone();
        let guess = guess.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = RevealState::default();
            if next.begin_generation().is_ok() {
                machine.set(next);
                guess.set(String::new());
                generation
                    .run
                    .emit((ActivityKind::GuessTheName, GenerationParams::new()));
            }
        })
    };

    let on_reveal_hint = {
        let machine = machine.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*machine).clone();
            if next.reveal_next().is_ok() {
                machine.set(next);
            }
        })
    };

    let on_guess_input = {
        let guess = guess.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            guess.set(input.value());
        })
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--guess-the-name">
            {match &generation.phase {
                GenerationPhase::Idle => html! {
                    <>
                        <Notice kind={NoticeKind::Info} title="Who am I?"
                            message="We'll describe a famous person. Reveal hints one by one and guess their name!" />
                        <button class="fest-btn fest-btn--primary" onclick={on_start}>
                            {"Start a Round"}
                        </button>
                    </>
                },
                GenerationPhase::Pending => html! {
                    <div class="fest-spinner">{"Picking someone famous..."}</div>
                },
                GenerationPhase::Failed(notice) => html! {
                    <>
                        <Notice kind={NoticeKind::Error} title="Error Starting Round"
                            message={notice.clone()} />
                        <button class="fest-btn fest-btn--primary" onclick={on_start}>
                            {"Try Again"}
                        </button>
                    </>
                },
                GenerationPhase::Ready(GeneratedContent::GuessTheName {
                    name,
                    description,
                    hints,
                    image_prompt,
                }) => {
                    let revealed = machine.reveal_count();
                    let remaining = machine.remaining_reveals();
                    let answered = matches!(*machine, RevealState::Answered { .. });

                    let on_submit_guess = {
                        let machine = machine.clone();
                        let guess = guess.clone();
                        let name = name.clone();
                        Callback::from(move |event: SubmitEvent| {
                            event.prevent_default();
                            if guess.trim().is_empty() {
                                return;
                            }
                            let mut next = (*machine).clone();
                            if next.answer(&guess, &name).is_ok() {
                                machine.set(next);
                            }
                        })
                    };

                    html! {
                        <div class="fest-card">
                            <h3>{"Who is it?"}</h3>
                            <p class="fest-card__body">{ description }</p>

                            <ol class="fest-hint-list">
                                {for hints.iter().take(usize::from(revealed).min(hints.len()))
                                    .map(|hint| html! { <li>{ hint }</li> })}
                                {if usize::from(revealed) > hints.len() {
                                    html! {
                                        <li class="fest-hint--portrait">
                                            <em>{"Portrait clue: "}</em>{ image_prompt }
                                        </li>
                                    }
                                } else {
                                    html! {}
                                }}
                            </ol>

                            {if !answered && remaining > 0 {
                                html! {
                                    <button class="fest-btn" onclick={on_reveal_hint}>
                                        {format!("Reveal a Hint ({remaining} left)")}
                                    </button>
                                }
                            } else {
                                html! {}
                            }}

                            {match *machine {
                                RevealState::Answered { correct: true } => html! {
                                    <>
                                        <Notice kind={NoticeKind::Success} title="Correct!"
                                            message={format!("It was {name}.")} />
                                        <button class="fest-btn fest-btn--primary" onclick={on_start}>
                                            {"Play Again"}
                                        </button>
                                    </>
                                },
                                RevealState::Answered { correct: false } => html! {
                                    <>
                                        <Notice kind={NoticeKind::Error} title="Not quite!"
                                            message={format!("It was {name}.")} />
                                        <button class="fest-btn fest-btn--primary" onclick={on_start}>
                                            {"Play Again"}
                                        </button>
                                    </>
                                },
                                _ => html! {
                                    <form class="fest-form fest-form--inline" onsubmit={on_submit_guess}>
                                        <input type="text" value={(*guess).clone()}
                                            oninput={on_guess_input}
                                            placeholder="Your guess"
                                            disabled={pending} />
                                        <button type="submit" class="fest-btn fest-btn--primary">
                                            {"Guess"}
                                        </button>
                                    </form>
                                },
                            }}
                        </div>
                    }
                },
                GenerationPhase::Ready(_) => html! {},
            }}
        </div>
    }
}
