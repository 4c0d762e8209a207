use crate::providers::genai_provider::SharedFlow;
use fresher_fest_core::{ActivityKind, GeneratedContent, GenerationParams};
use fresher_fest_genai::GenAiError;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Where one screen's generation round currently stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationPhase {
    #[default]
    Idle,
    Pending,
    Ready(GeneratedContent),
    /// User-facing notice text; the screen stays retryable
    Failed(String),
}

/// Handle returned by [`use_generation`]
#[derive(Clone, PartialEq)]
pub struct GenerationHandle {
    pub phase: GenerationPhase,
    /// Dispatch a new request; any still-pending one is superseded
    pub run: Callback<(ActivityKind, GenerationParams)>,
    /// Back to idle (play again)
    pub reset: Callback<()>,
}

/// Access the shared generation flow
#[hook]
pub fn use_genai() -> SharedFlow {
    use_context::<SharedFlow>().expect("use_genai must be used within a GenAiProvider")
}

fn notice_for(err: &GenAiError) -> String {
    match err {
        GenAiError::RetryExhausted { .. } => {
            "Couldn't get a suitable result this time. Give it another go!".to_string()
        }
        GenAiError::BackendUnavailable(_) => {
            "The generator is unreachable right now. Please try again.".to_string()
        }
        GenAiError::SchemaMismatch(_) => {
            "Got a garbled answer from the generator. Please try again.".to_string()
        }
        GenAiError::Configuration(reason) => format!("Setup problem: {reason}"),
    }
}

/// One in-flight generation per screen.
///
/// Each dispatch takes a ticket from a monotonically increasing counter; a
/// response whose ticket is no longer current belonged to a superseded
/// request and is discarded on arrival (there is no cancellation
/// primitive to abort the underlying call).
#[hook]
pub fn use_generation() -> GenerationHandle {
    let flow = use_genai();
    let phase = use_state(GenerationPhase::default);
    let ticket_counter = use_mut_ref(|| 0u32);

    let run = {
        let flow = flow.clone();
        let phase = phase.clone();
        let ticket_counter = ticket_counter.clone();

        Callback::from(move |(kind, params): (ActivityKind, GenerationParams)| {
            *ticket_counter.borrow_mut() += 1;
            let ticket = *ticket_counter.borrow();
            phase.set(GenerationPhase::Pending);

            let flow = Rc::clone(&flow.0);
            let phase = phase.clone();
            let ticket_counter = ticket_counter.clone();

            spawn_local(async move {
                let result = match kind {
                    ActivityKind::Riddle => flow.generate_riddle().await,
                    _ => flow.generate(kind, &params).await,
                };

                if *ticket_counter.borrow() != ticket {
                    tracing::debug!(ticket, "discarding superseded generation result");
                    return;
                }

                match result {
                    Ok(content) => phase.set(GenerationPhase::Ready(content)),
                    Err(err) => {
                        tracing::warn!(error = %err, activity = %kind, "generation failed");
                        phase.set(GenerationPhase::Failed(notice_for(&err)));
                    }
                }
            });
        })
    };

    let reset = {
        let phase = phase.clone();
        let ticket_counter = ticket_counter.clone();
        Callback::from(move |_| {
            // Invalidate any pending request so its result is dropped
            *ticket_counter.borrow_mut() += 1;
            phase.set(GenerationPhase::Idle);
        })
    };

    GenerationHandle {
        phase: (*phase).clone(),
        run,
        reset,
    }
}
