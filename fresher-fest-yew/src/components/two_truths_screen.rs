use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Two truths and a lie: pick the statement you think is the lie
#[function_component(TwoTruthsScreen)]
pub fn two_truths_screen() -> Html {
    let generation = use_generation();
    let topic = use_state(String::new);
    let picked = use_state(|| None::<usize>);

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
        let picked = picked.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            picked.set(None);
            let params = GenerationParams::new().with_topic((*topic).clone());
            generation.run.emit((ActivityKind::TwoTruthsAndALie, params));
        })
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--two-truths">
            <form class="fest-form" onsubmit={on_generate}>
                <label>{"Topic (Optional)"}
                    <input type="text" value={(*topic).clone()} oninput={on_topic_input}
                        placeholder="e.g., food, travel, campus life" />
                </label>
                <button type="submit" class="fest-btn fest-btn--primary" disabled={pending}>
                    {if pending { "Generating..." } else { "New Round" }}
                </button>
            </form>

            {match &generation.phase {
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Round"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::TwoTruthsAndALie { statements, lie_index }) => {
                    let lie_index = usize::from(*lie_index);
                    html! {
                        <div class="fest-card">
                            <h3>{"Which one is the lie?"}</h3>
                            <ul class="fest-statement-list">
                                {for statements.iter().enumerate().map(|(idx, statement)| {
                                    let class = match *picked {
                                        // Once picked, color the lie and the guess
                                        Some(_) if idx == lie_index => "fest-statement--lie",
                                        Some(picked_idx) if idx == picked_idx => "fest-statement--picked",
                                        _ => "",
                                    };
                                    let onclick = {
                                        let picked = picked.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            if picked.is_none() {
                                                picked.set(Some(idx));
                                            }
                                        })
                                    };
                                    html! {
                                        <li class={classes!("fest-statement", class)} {onclick}>
                                            { statement }
                                        </li>
                                    }
                                })}
                            </ul>
                            {match *picked {
                                Some(picked_idx) if picked_idx == lie_index => html! {
                                    <Notice kind={NoticeKind::Success} title="You got it!"
                                        message="That was the lie." />
                                },
                                Some(_) => html! {
                                    <Notice kind={NoticeKind::Error} title="Nice try!"
                                        message={format!("The lie was: \"{}\"", statements[lie_index])} />
                                },
                                None => html! {},
                            }}
                        </div>
                    }
                },
                _ => html! {},
            }}
        </div>
    }
}
