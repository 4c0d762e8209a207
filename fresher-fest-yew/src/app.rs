use crate::components::{
    ActivityCard, FitnessScreen, FlirtScreen, GuessTheNameScreen, IqTestScreen, RapidFireScreen,
    RiddleScreen, TruthOrDareScreen, TwoTruthsScreen,
};
use fresher_fest_core::{ActivityKind, Leaderboard};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum AppView {
    Home,
    Activity(ActivityKind),
    Fitness,
}

fn description_for(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Riddle => "Brain-bending riddles, all ages welcome.",
        ActivityKind::IqTest => "Logic questions with a difficulty dial.",
        ActivityKind::TruthOrDare => "The classic. Pick your poison.",
        ActivityKind::TwoTruthsAndALie => "Spot the lie among the truths.",
        ActivityKind::GuessTheName => "Hints drop one by one. Who is it?",
        ActivityKind::RapidFire => "Quick questions against the clock.",
        ActivityKind::FlirtQuestion => "Playful icebreakers for new faces.",
    }
}

/// App shell: home grid of activities plus the fitness challenge.
///
/// The leaderboard lives here so scores survive switching screens; it is
/// handed to the fitness screen explicitly and updated through a callback.
#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| AppView::Home);
    let leaderboard = use_state(Leaderboard::new);

    let on_select = {
        let view = view.clone();
        Callback::from(move |kind: ActivityKind| view.set(AppView::Activity(kind)))
    };

    let to_fitness = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AppView::Fitness))
    };

    let to_home = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(AppView::Home))
    };

    let on_submit_score = {
        let leaderboard = leaderboard.clone();
        Callback::from(move |(exercise, name, reps): (String, String, u32)| {
            let mut updated = (*leaderboard).clone();
            updated.submit(&exercise, name, reps);
            leaderboard.set(updated);
        })
    };

    html! {
        <div class="fest-app">
            <header class="fest-header">
                <h1 onclick={to_home.clone()}>{"Fresher Fest"}</h1>
                <p class="fest-header__tagline">{"Party games for orientation week"}</p>
            </header>

            <main class="fest-main">
                {match *view {
                    AppView::Home => html! {
                        <div class="fest-activity-grid">
                            {for ActivityKind::all().iter().map(|&kind| html! {
                                <ActivityCard
                                    {kind}
                                    description={description_for(kind)}
                                    on_select={on_select.clone()} />
                            })}
                            <div class="fest-activity-card fest-activity-card--fitness"
                                onclick={to_fitness}>
                                <h3>{"Fitness Challenge"}</h3>
                                <p>{"One minute of reps. Beat the board."}</p>
                            </div>
                        </div>
                    },
                    AppView::Activity(kind) => html! {
                        <>
                            <button class="fest-btn fest-btn--back" onclick={to_home.clone()}>
                                {"< Back"}
                            </button>
                            <h2>{ kind.display_name() }</h2>
                            {match kind {
                                ActivityKind::Riddle => html! { <RiddleScreen /> },
                                ActivityKind::IqTest => html! { <IqTestScreen /> },
                                ActivityKind::TruthOrDare => html! { <TruthOrDareScreen /> },
                                ActivityKind::TwoTruthsAndALie => html! { <TwoTruthsScreen /> },
                                ActivityKind::GuessTheName => html! { <GuessTheNameScreen /> },
                                ActivityKind::RapidFire => html! { <RapidFireScreen /> },
                                ActivityKind::FlirtQuestion => html! { <FlirtScreen /> },
                            }}
                        </>
                    },
                    AppView::Fitness => html! {
                        <>
                            <button class="fest-btn fest-btn--back" onclick={to_home.clone()}>
                                {"< Back"}
                            </button>
                            <h2>{"Fitness Challenge"}</h2>
                            <FitnessScreen
                                leaderboard={(*leaderboard).clone()}
                                on_submit_score={on_submit_score} />
                        </>
                    },
                }}
            </main>
        </div>
    }
}
