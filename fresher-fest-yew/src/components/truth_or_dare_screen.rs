use crate::components::{Notice, NoticeKind};
use crate::hooks::{use_generation, GenerationPhase};
use fresher_fest_core::{ActivityKind, ChallengeKind, GeneratedContent, GenerationParams};
use yew::prelude::*;

#[function_component(TruthOrDareScreen)]
pub fn truth_or_dare_screen() -> Html {
    let generation = use_generation();
    let last_pick = use_state(|| None::<ChallengeKind>);

    let pick = |challenge: ChallengeKind| {
        let generation = generation.clone();
        let last_pick = last_pick.clone();
        Callback::from(move |_: MouseEvent| {
            last_pick.set(Some(challenge));
            let params = GenerationParams::new().with_challenge(challenge);
            generation.run.emit((ActivityKind::TruthOrDare, params));
        })
    };

    let pending = generation.phase == GenerationPhase::Pending;

    html! {
        <div class="fest-screen fest-screen--truth-or-dare">
            <div class="fest-btn-row">
                <button class="fest-btn fest-btn--primary" onclick={pick(ChallengeKind::Truth)}
                    disabled={pending}>
                    {"Truth"}
                </button>
                <button class="fest-btn fest-btn--accent" onclick={pick(ChallengeKind::Dare)}
                    disabled={pending}>
                    {"Dare"}
                </button>
            </div>

            {match &generation.phase {
                GenerationPhase::Idle => html! {
                    <Notice kind={NoticeKind::Info} title="Truth or Dare?"
                        message="Pick one and let the game begin." />
                },
                GenerationPhase::Pending => html! {
                    <div class="fest-spinner">{"Cooking up a challenge..."}</div>
                },
                GenerationPhase::Failed(notice) => html! {
                    <Notice kind={NoticeKind::Error} title="Error Generating Challenge"
                        message={notice.clone()} />
                },
                GenerationPhase::Ready(GeneratedContent::TruthOrDare { challenge }) => html! {
                    <div class="fest-card">
                        <h3>
                            {match *last_pick {
                                Some(ChallengeKind::Dare) => "Your dare:",
                                _ => "Your truth:",
                            }}
                        </h3>
                        <p class="fest-card__body">{ challenge }</p>
                    </div>
                },
                GenerationPhase::Ready(_) => html! {},
            }}
        </div>
    }
}
