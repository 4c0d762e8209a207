use fresher_fest_genai::{Config, GeminiClient, GenerationFlow};
use std::rc::Rc;
use yew::prelude::*;

/// Shared generation flow, provided once at the application root
#[derive(Clone)]
pub struct SharedFlow(pub Rc<GenerationFlow<GeminiClient>>);

impl PartialEq for SharedFlow {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct GenAiProviderProps {
    pub api_key: AttrValue,
    #[prop_or_default]
    pub model: Option<AttrValue>,
    pub children: Children,
}

/// Builds the Gemini-backed [`GenerationFlow`] and exposes it via context
/// to every activity screen.
#[function_component(GenAiProvider)]
pub fn genai_provider(props: &GenAiProviderProps) -> Html {
    let flow = use_memo(
        (props.api_key.clone(), props.model.clone()),
        |(api_key, model)| {
            let mut config = Config::new(api_key.to_string());
            if let Some(model) = model {
                config = config.with_model(model.to_string());
            }
            tracing::info!(model = %config.model, "generation backend configured");
            SharedFlow(Rc::new(GenerationFlow::new(GeminiClient::new(config))))
        },
    );

    html! {
        <ContextProvider<SharedFlow> context={(*flow).clone()}>
            { props.children.clone() }
        </ContextProvider<SharedFlow>>
    }
}
