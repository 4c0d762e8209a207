use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Info => "fest-notice--info",
            Self::Success => "fest-notice--success",
            Self::Error => "fest-notice--error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Transient banner used for recoverable errors and game feedback
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    html! {
        <div class={classes!("fest-notice", props.kind.class())}>
            <strong class="fest-notice__title">{ props.title.clone() }</strong>
            {if let Some(message) = &props.message {
                html! { <p class="fest-notice__message">{ message.clone() }</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
