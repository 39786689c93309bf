pub mod controller;

pub use controller::{KeyEffect, PlayController};

#[cfg(target_arch = "wasm32")]
pub use view::App;

#[cfg(target_arch = "wasm32")]
mod view {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rps_game::Choice;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::KeyboardEvent;
    use yew::prelude::*;

    use super::{KeyEffect, PlayController};
    use crate::components::button::Button;
    use crate::components::choice_button::ChoiceButton;
    use crate::components::result_panel::ResultPanel;
    use crate::components::round_display::RoundDisplay;
    use crate::components::scoreboard::Scoreboard;
    use crate::dom::{self, Timeout};
    use crate::input::{KEYBOARD_HELP, key_to_command};
    use crate::reveal::{RevealConfig, RevealPlan};

    type Shared<T> = Rc<RefCell<T>>;

    fn schedule_reveal(
        plan: RevealPlan,
        controller: &Shared<PlayController>,
        timeouts: &Shared<Vec<Timeout>>,
        refresh: &UseForceUpdateHandle,
    ) {
        let mut pending = timeouts.borrow_mut();
        pending.clear();
        for step in plan.steps() {
            let ctl = Rc::clone(controller);
            let refresh_step = refresh.clone();
            let scheduled = Timeout::schedule(step.at_ms, move || {
                ctl.borrow_mut().reveal(step.stage);
                if step.stage.shows_result()
                    && let Some(round) = ctl.borrow().round()
                {
                    dom::announce(&format!("{} {}", round.message(), round.explanation));
                }
                refresh_step.force_update();
            });
            match scheduled {
                Ok(timeout) => pending.push(timeout),
                Err(err) => {
                    log::error!("Failed to schedule reveal step: {err:?}");
                    controller.borrow_mut().reveal(step.stage);
                }
            }
        }
    }

    #[function_component(App)]
    pub fn app() -> Html {
        let controller = use_mut_ref(|| {
            PlayController::seeded(
                js_sys::Date::now().to_bits(),
                RevealConfig::load_from_static(),
            )
        });
        let timeouts = use_mut_ref(Vec::<Timeout>::new);
        let refresh = use_force_update();

        let on_choose = {
            let controller = controller.clone();
            let timeouts = timeouts.clone();
            let refresh = refresh.clone();
            Callback::from(move |name: String| {
                let plan = controller.borrow_mut().choose_named(&name);
                if let Some(plan) = plan {
                    schedule_reveal(plan, &controller, &timeouts, &refresh);
                    refresh.force_update();
                }
            })
        };

        let on_play_again = {
            let controller = controller.clone();
            let timeouts = timeouts.clone();
            let refresh = refresh.clone();
            Callback::from(move |()| {
                timeouts.borrow_mut().clear();
                controller.borrow_mut().play_again();
                dom::announce("Choose your next move.");
                refresh.force_update();
            })
        };

        let on_reset = {
            let controller = controller.clone();
            let timeouts = timeouts.clone();
            let refresh = refresh.clone();
            Callback::from(move |_: MouseEvent| {
                timeouts.borrow_mut().clear();
                controller.borrow_mut().reset();
                dom::announce("Scores reset.");
                refresh.force_update();
            })
        };

        {
            let controller = controller.clone();
            let timeouts = timeouts.clone();
            let refresh = refresh.clone();
            use_effect_with((), move |_| {
                log::info!("{KEYBOARD_HELP}");
                let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    let Some(command) = key_to_command(&e.key()) else {
                        return;
                    };
                    let effect = controller.borrow_mut().handle_key(command);
                    match effect {
                        KeyEffect::Started(plan) => {
                            schedule_reveal(plan, &controller, &timeouts, &refresh);
                            refresh.force_update();
                        }
                        KeyEffect::Acknowledged => {
                            timeouts.borrow_mut().clear();
                            refresh.force_update();
                        }
                        KeyEffect::Ignored => {}
                    }
                });
                let doc = dom::document();
                if let Err(err) = doc
                    .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                {
                    log::error!("Failed to install keyboard shortcuts: {err:?}");
                }
                move || {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            });
        }

        {
            let timeouts = timeouts.clone();
            use_effect_with((), move |_| move || timeouts.borrow_mut().clear());
        }

        let ctl = controller.borrow();
        let stage = ctl.stage();
        let selected = ctl.selected();
        let disabled = ctl.buttons_disabled();
        let buttons = Choice::ALL
            .into_iter()
            .map(|choice| {
                html! {
                    <ChoiceButton
                        key={choice.name()}
                        {choice}
                        selected={selected == Some(choice)}
                        {disabled}
                        on_choose={on_choose.clone()}
                    />
                }
            })
            .collect::<Html>();
        let round = ctl.round().cloned();
        let score = ctl.shown_score();
        drop(ctl);

        html! {
            <main class="game-container">
                <h1 class="game-title">{ "Rock Paper Scissors" }</h1>
                <Scoreboard {score} />
                <section class="choices" aria-label="Choose your move">
                    { buttons }
                </section>
                {
                    match round {
                        Some(round) if stage.shows_choices() => html! {
                            <>
                                <RoundDisplay player={round.player_choice} computer={round.computer_choice} />
                                if stage.shows_result() {
                                    <ResultPanel result={round} on_play_again={on_play_again.clone()} />
                                }
                            </>
                        },
                        _ => Html::default(),
                    }
                }
                <Button
                    label="Reset Game"
                    id={AttrValue::from("reset-btn")}
                    class={classes!("btn-secondary")}
                    onclick={on_reset}
                />
                <div id="game-status" class="sr-only" role="status" aria-live="polite"></div>
            </main>
        }
    }
}
