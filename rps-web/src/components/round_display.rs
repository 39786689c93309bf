use rps_game::Choice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub player: Choice,
    pub computer: Choice,
}

#[function_component(RoundDisplay)]
pub fn round_display(p: &Props) -> Html {
    let side = |id: &'static str, title: &'static str, choice: Choice| {
        html! {
            <div class="choice-display">
                <h3>{ title }</h3>
                <span id={format!("{id}-choice-emoji")} class="choice-emoji">{ choice.glyph() }</span>
                <span id={format!("{id}-choice-name")} class="choice-name">{ choice.label() }</span>
            </div>
        }
    };
    html! {
        <div id="current-choices" class="current-choices fade-in">
            { side("player", "Your Choice", p.player) }
            <div class="vs">{ "VS" }</div>
            { side("computer", "Computer's Choice", p.computer) }
        </div>
    }
}
