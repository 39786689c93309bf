use futures::executor::block_on;
use rps_game::{Choice, RoundResult, ScoreState};
use rps_web::components::result_panel::{self, ResultPanel};
use rps_web::components::round_display::{self, RoundDisplay};
use rps_web::components::scoreboard::{self, Scoreboard};
use yew::{Callback, LocalServerRenderer};

#[test]
fn scoreboard_renders_both_scores() {
    let mut score = ScoreState::new();
    score.player_score = 3;
    score.computer_score = 1;
    let html = block_on(
        LocalServerRenderer::<Scoreboard>::with_props(scoreboard::Props { score }).render(),
    );
    assert!(html.contains("player-score"));
    assert!(html.contains(">3<"));
    assert!(html.contains(">1<"));
    assert!(html.contains("leader-player"));
}

#[test]
fn round_display_shows_both_picks() {
    let props = round_display::Props {
        player: Choice::Rock,
        computer: Choice::Paper,
    };
    let html = block_on(LocalServerRenderer::<RoundDisplay>::with_props(props).render());
    assert!(html.contains("🗿"));
    assert!(html.contains("📄"));
    assert!(html.contains("Your Choice"));
    assert!(html.contains("Computer&#x27;s Choice") || html.contains("Computer's Choice"));
}

#[test]
fn result_panel_renders_banner_and_explanation() {
    let props = result_panel::Props {
        result: RoundResult::resolve(Choice::Scissors, Choice::Paper),
        on_play_again: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultPanel>::with_props(props).render());
    assert!(html.contains("You Win! 🎉"));
    assert!(html.contains("Scissors cuts Paper"));
    assert!(html.contains("result-section"));
    assert!(html.contains("win"));
    assert!(html.contains("play-again-btn"));
}

#[test]
fn tie_result_uses_tie_copy() {
    let props = result_panel::Props {
        result: RoundResult::resolve(Choice::Rock, Choice::Rock),
        on_play_again: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultPanel>::with_props(props).render());
    assert!(html.contains("It&#x27;s a Tie! 🤝") || html.contains("It's a Tie! 🤝"));
    assert!(html.contains("Both players chose the same!"));
}
