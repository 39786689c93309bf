use rps_game::{Leader, ScoreState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: ScoreState,
}

const fn leader_class(leader: Leader) -> &'static str {
    match leader {
        Leader::Player => "leader-player",
        Leader::Computer => "leader-computer",
        Leader::Even => "leader-even",
    }
}

#[function_component(Scoreboard)]
pub fn scoreboard(p: &Props) -> Html {
    let class = classes!("scoreboard", leader_class(p.score.leader()));
    html! {
        <section {class} aria-label="Scoreboard">
            <div class="score">
                <span class="score-label">{ "You" }</span>
                <span id="player-score" class="score-value">{ p.score.player_score }</span>
            </div>
            <div class="score-divider">{ "vs" }</div>
            <div class="score">
                <span class="score-label">{ "Computer" }</span>
                <span id="computer-score" class="score-value">{ p.score.computer_score }</span>
            </div>
        </section>
    }
}
