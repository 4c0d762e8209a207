use fresher_fest_core::ScoreEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub entries: Vec<ScoreEntry>,
    /// Name of the most recent submitter, highlighted in the table
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    if props.entries.is_empty() {
        return html! {
            <p class="fest-leaderboard__empty">{"No scores yet. Be the first!"}</p>
        };
    }

    html! {
        <table class="fest-leaderboard">
            <thead>
                <tr>
                    <th>{"Rank"}</th>
                    <th>{"Name"}</th>
                    <th>{"Score"}</th>
                </tr>
            </thead>
            <tbody>
                {for props.entries.iter().enumerate().map(|(idx, entry)| {
                    let highlighted = props
                        .highlight
                        .as_ref()
                        .is_some_and(|name| name.as_str() == entry.name);
                    html! {
                        <tr class={classes!(highlighted.then_some("fest-leaderboard__row--own"))}>
                            <td>{ idx + 1 }</td>
                            <td>{ &entry.name }</td>
                            <td>{ entry.score }</td>
                        </tr>
                    }
                })}
            </tbody>
        </table>
    }
}
