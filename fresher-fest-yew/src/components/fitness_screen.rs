use crate::components::{LeaderboardTable, Notice, NoticeKind};
use crate::hooks::use_countdown;
use fresher_fest_core::{Leaderboard, FITNESS_CHALLENGE_SECS, FITNESS_EXERCISES};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum FitnessView {
    Boards,
    Setup,
    Challenge { exercise: &'static str },
}

#[derive(Properties, PartialEq)]
pub struct FitnessScreenProps {
    /// Session-scoped scoreboard, owned by the app shell
    pub leaderboard: Leaderboard,
    /// (exercise, name, reps) submitted when a challenge finishes
    pub on_submit_score: Callback<(String, String, u32)>,
}

/// One-minute rep challenge with per-exercise leaderboards.
///
/// The scoreboard itself lives in the app shell so it survives leaving and
/// re-entering this screen; this component only renders it and reports new
/// scores upward.
#[function_component(FitnessScreen)]
pub fn fitness_screen(props: &FitnessScreenProps) -> Html {
    let view = use_state(|| FitnessView::Boards);
    let selected_board = use_state(|| FITNESS_EXERCISES[0]);
    let player_name = use_state(String::new);
    let reps = use_state(String::new);
    let last_submitter = use_state(|| None::<AttrValue>);
    let countdown = use_countdown(FITNESS_CHALLENGE_SECS);

    let on_name_input = {
        let player_name = player_name.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            player_name.set(input.value());
        })
    };

    let on_reps_input = {
        let reps = reps.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            reps.set(input.value());
        })
    };

    let to_setup = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(FitnessView::Setup))
    };

    let pick_exercise = |exercise: &'static str| {
        let view = view.clone();
        let reps = reps.clone();
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| {
            reps.set(String::new());
            countdown.reset.emit(FITNESS_CHALLENGE_SECS);
            view.set(FitnessView::Challenge { exercise });
        })
    };

    let on_start_clock = {
        let countdown = countdown.clone();
        Callback::from(move |_: MouseEvent| countdown.start.emit(()))
    };

    html! {
        <div class="fest-screen fest-screen--fitness">
            {match *view {
                FitnessView::Boards => {
                    let board = *selected_board;
                    html! {
                        <>
                            <div class="fest-tab-row">
                                {for FITNESS_EXERCISES.iter().map(|&exercise| {
                                    let selected_board = selected_board.clone();
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        selected_board.set(exercise);
                                    });
                                    html! {
                                        <button
                                            class={classes!(
                                                "fest-tab",
                                                (exercise == board).then_some("fest-tab--active"),
                                            )}
                                            {onclick}>
                                            { exercise }
                                        </button>
                                    }
                                })}
                            </div>
                            <LeaderboardTable
                                entries={props.leaderboard.ranked(board).to_vec()}
                                highlight={(*last_submitter).clone()} />
                            <button class="fest-btn fest-btn--primary" onclick={to_setup}>
                                {"Take the Challenge"}
                            </button>
                        </>
                    }
                }
                FitnessView::Setup => html! {
                    <div class="fest-card">
                        <h3>{"One minute. As many reps as you can."}</h3>
                        <label>{"Your Name"}
                            <input type="text" value={(*player_name).clone()}
                                oninput={on_name_input.clone()} placeholder="Who's sweating?" />
                        </label>
                        <div class="fest-btn-row">
                            {for FITNESS_EXERCISES.iter().map(|&exercise| html! {
                                <button class="fest-btn fest-btn--accent"
                                    onclick={pick_exercise(exercise)}
                                    disabled={player_name.trim().is_empty()}>
                                    { exercise }
                                </button>
                            })}
                        </div>
                    </div>
                },
                FitnessView::Challenge { exercise } => {
                    let on_submit = {
                        let view = view.clone();
                        let selected_board = selected_board.clone();
                        let last_submitter = last_submitter.clone();
                        let player_name = player_name.clone();
                        let reps = reps.clone();
                        let on_submit_score = props.on_submit_score.clone();
                        Callback::from(move |event: SubmitEvent| {
                            event.prevent_default();
                            let name = player_name.trim().to_string();
                            if let Ok(score) = reps.trim().parse::<u32>() {
                                on_submit_score.emit((exercise.to_string(), name.clone(), score));
                                last_submitter.set(Some(AttrValue::from(name)));
                                selected_board.set(exercise);
                                view.set(FitnessView::Boards);
                            }
                        })
                    };

                    html! {
                        <div class="fest-card">
                            <h3>{format!("{exercise}: go!")}</h3>
                            <div class="fest-clock">
                                <span class="fest-clock__time">
                                    {format!("{}s", countdown.remaining)}
                                </span>
                                {if !countdown.running && !countdown.finished {
                                    html! {
                                        <button class="fest-btn fest-btn--accent"
                                            onclick={on_start_clock}>
                                            {"Start"}
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }}
                            </div>
                            {if countdown.finished {
                                html! {
                                    <>
                                        <Notice kind={NoticeKind::Success} title="Time!"
                                            message="How many did you manage?" />
                                        <form class="fest-form fest-form--inline" onsubmit={on_submit}>
                                            <input type="number" min="0" value={(*reps).clone()}
                                                oninput={on_reps_input.clone()}
                                                placeholder="Reps" />
                                            <button type="submit" class="fest-btn fest-btn--primary">
                                                {"Submit Score"}
                                            </button>
                                        </form>
                                    </>
                                }
                            } else {
                                html! {}
                            }}
                        </div>
                    }
                }
            }}
        </div>
    }
}
