use rps_game::Choice;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};
use yew::prelude::*;

use crate::input::is_activation_key;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub choice: Choice,
    #[prop_or_default]
    pub selected: bool,
    #[prop_or_default]
    pub disabled: bool,
    /// Receives the button's `data-choice` name.
    #[prop_or_default]
    pub on_choose: Callback<String>,
}

/// `data-choice` of the button an event came from, if any.
fn data_choice_of(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("[data-choice]")
        .ok()??
        .get_attribute("data-choice")
}

fn emit_data_choice(event: &Event, on_choose: &Callback<String>) {
    match data_choice_of(event) {
        Some(name) => on_choose.emit(name),
        None => log::error!("choice button activated without a data-choice attribute"),
    }
}

#[function_component(ChoiceButton)]
pub fn choice_button(p: &Props) -> Html {
    let choice = p.choice;
    let onclick = {
        let on_choose = p.on_choose.clone();
        Callback::from(move |e: MouseEvent| emit_data_choice(&e, &on_choose))
    };
    let onkeydown = {
        let on_choose = p.on_choose.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                emit_data_choice(&e, &on_choose);
            }
        })
    };
    let class = classes!(
        "choice-btn",
        p.selected.then_some("selected"),
        p.selected.then_some("animate-selection")
    );
    html! {
        <button
            {class}
            type="button"
            data-choice={choice.name()}
            aria-label={choice.label()}
            disabled={p.disabled}
            {onclick}
            {onkeydown}
        >
            <span class="choice-emoji" aria-hidden="true">{ choice.glyph() }</span>
            <span class="choice-name">{ choice.label() }</span>
        </button>
    }
}
