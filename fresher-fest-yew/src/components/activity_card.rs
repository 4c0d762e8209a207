use fresher_fest_core::ActivityKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub kind: ActivityKind,
    pub description: AttrValue,
    pub on_select: Callback<ActivityKind>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let onclick = {
        let kind = props.kind;
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(kind))
    };

    html! {
        <div class={classes!("fest-activity-card", format!("fest-activity-card--{}", props.kind))} {onclick}>
            <h3>{ props.kind.display_name() }</h3>
            <p>{ props.description.clone() }</p>
        </div>
    }
}
