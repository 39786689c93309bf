use rps_game::RoundResult;
use yew::prelude::*;

use crate::components::button::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub result: RoundResult,
    #[prop_or_default]
    pub on_play_again: Callback<()>,
}

#[function_component(ResultPanel)]
pub fn result_panel(p: &Props) -> Html {
    let outcome = p.result.outcome;
    let onclick = {
        let cb = p.on_play_again.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section
            id="result-section"
            class={classes!("result-section", "fade-in", outcome.css_class())}
            role="status"
            aria-live="polite"
        >
            <h2 id="result-message" class="result-message">{ outcome.message() }</h2>
            <p id="result-explanation" class="result-explanation">{ p.result.explanation.clone() }</p>
            <Button
                label="Play Again"
                id={AttrValue::from("play-again-btn")}
                class={classes!("btn-primary")}
                {onclick}
            />
        </section>
    }
}
