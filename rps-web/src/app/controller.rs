use rps_game::{
    Choice, ChoiceSource, GameError, GameSession, RandomChooser, RoundResult, ScoreState,
};

use crate::input::KeyCommand;
use crate::reveal::{RevealConfig, RevealPlan, RevealStage};

/// Page-level model binding a game session to what is currently on screen.
///
/// The session resolves rounds immediately; this type tracks which parts of
/// the resolved round are visible and the score the scoreboard shows, which
/// only catches up when the result is revealed.
#[derive(Debug, Clone)]
pub struct PlayController<C = RandomChooser> {
    session: GameSession<C>,
    reveal: RevealConfig,
    stage: RevealStage,
    shown_score: ScoreState,
}

/// What the page must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEffect {
    /// A round started; schedule its reveal.
    Started(RevealPlan),
    /// The shown round was dismissed.
    Acknowledged,
    Ignored,
}

impl PlayController<RandomChooser> {
    /// Controller over a freshly seeded session.
    #[must_use]
    pub fn seeded(seed: u64, reveal: RevealConfig) -> Self {
        Self::new(GameSession::seeded(seed), reveal)
    }
}

impl<C: ChoiceSource> PlayController<C> {
    #[must_use]
    pub const fn new(session: GameSession<C>, reveal: RevealConfig) -> Self {
        Self {
            session,
            reveal,
            stage: RevealStage::Hidden,
            shown_score: ScoreState::new(),
        }
    }

    /// Play a round; `None` when a round is already in flight.
    pub fn play(&mut self, choice: Choice) -> Option<RevealPlan> {
        self.session.start_round_with(choice)?;
        self.stage = RevealStage::Hidden;
        Some(self.reveal.plan())
    }

    /// Play a round from a `data-choice` attribute value.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidChoice`] when the markup carries an unknown
    /// choice name.
    pub fn play_named(&mut self, name: &str) -> Result<Option<RevealPlan>, GameError> {
        let choice = Choice::parse(name)?;
        Ok(self.play(choice))
    }

    /// Button activation: play the named choice, logging names the markup
    /// should never carry.
    pub fn choose_named(&mut self, name: &str) -> Option<RevealPlan> {
        match self.play_named(name) {
            Ok(plan) => plan,
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }

    /// Apply a scheduled reveal step.
    pub fn reveal(&mut self, stage: RevealStage) {
        if self.session.last_result().is_none() {
            return;
        }
        if stage.shows_result() {
            self.shown_score = self.session.score();
        }
        if stage.shows_result() || !self.stage.shows_result() {
            self.stage = stage;
        }
    }

    /// "Play Again": dismiss the shown round.
    pub fn play_again(&mut self) {
        self.session.acknowledge_round();
        self.stage = RevealStage::Hidden;
    }

    /// "Reset Game": zero the scoreboard and drop any in-flight round.
    pub fn reset(&mut self) -> ScoreState {
        self.shown_score = self.session.reset_game();
        self.stage = RevealStage::Hidden;
        self.shown_score
    }

    /// Global shortcut handling. Letters are ignored while a round is in
    /// flight; Escape only dismisses a fully revealed round.
    pub fn handle_key(&mut self, command: KeyCommand) -> KeyEffect {
        match command {
            KeyCommand::Play(choice) => self
                .play(choice)
                .map_or(KeyEffect::Ignored, KeyEffect::Started),
            KeyCommand::Acknowledge if self.stage.shows_result() => {
                self.play_again();
                KeyEffect::Acknowledged
            }
            KeyCommand::Acknowledge => KeyEffect::Ignored,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> RevealStage {
        self.stage
    }

    /// Score as the scoreboard should render it.
    #[must_use]
    pub const fn shown_score(&self) -> ScoreState {
        self.shown_score
    }

    /// The in-flight round, regardless of how much of it is visible.
    #[must_use]
    pub const fn round(&self) -> Option<&RoundResult> {
        self.session.last_result()
    }

    /// The player's pick, highlighted as soon as a round starts.
    #[must_use]
    pub fn selected(&self) -> Option<Choice> {
        self.round().map(|round| round.player_choice)
    }

    #[must_use]
    pub fn buttons_disabled(&self) -> bool {
        self.session.is_round_in_progress()
    }

    #[must_use]
    pub const fn reveal_config(&self) -> RevealConfig {
        self.reveal
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<C> {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_game::{Outcome, ScriptedChooser};

    fn controller(script: &[Choice]) -> PlayController<ScriptedChooser> {
        PlayController::new(
            GameSession::new(ScriptedChooser::new(script.iter().copied())),
            RevealConfig::default(),
        )
    }

    #[test]
    fn score_catches_up_on_result_reveal() {
        let mut ctl = controller(&[Choice::Scissors]);
        let plan = ctl.play(Choice::Rock).expect("round starts");
        assert_eq!(plan, RevealConfig::default().plan());
        assert_eq!(ctl.selected(), Some(Choice::Rock));
        assert!(ctl.buttons_disabled());
        assert_eq!(ctl.stage(), RevealStage::Hidden);
        assert!(ctl.shown_score().is_zero());

        ctl.reveal(RevealStage::ChoicesShown);
        assert!(ctl.stage().shows_choices());
        assert!(ctl.shown_score().is_zero());

        ctl.reveal(RevealStage::ResultShown);
        assert_eq!(ctl.shown_score().player_score, 1);
        assert_eq!(ctl.round().map(|r| r.outcome), Some(Outcome::Win));
    }

    #[test]
    fn input_during_reveal_is_ignored() {
        let mut ctl = controller(&[Choice::Rock, Choice::Paper]);
        assert!(ctl.play(Choice::Paper).is_some());
        assert!(ctl.play(Choice::Scissors).is_none());
        assert_eq!(
            ctl.handle_key(KeyCommand::Play(Choice::Rock)),
            KeyEffect::Ignored
        );
        assert_eq!(ctl.handle_key(KeyCommand::Acknowledge), KeyEffect::Ignored);
        assert_eq!(ctl.selected(), Some(Choice::Paper));
    }

    #[test]
    fn escape_dismisses_revealed_round() {
        let mut ctl = controller(&[Choice::Rock]);
        ctl.handle_key(KeyCommand::Play(Choice::Rock));
        ctl.reveal(RevealStage::ChoicesShown);
        ctl.reveal(RevealStage::ResultShown);
        assert_eq!(
            ctl.handle_key(KeyCommand::Acknowledge),
            KeyEffect::Acknowledged
        );
        assert!(!ctl.buttons_disabled());
        assert!(ctl.round().is_none());
        assert_eq!(ctl.stage(), RevealStage::Hidden);
    }

    #[test]
    fn reveal_after_reset_is_dropped() {
        let mut ctl = controller(&[Choice::Scissors]);
        ctl.play(Choice::Rock);
        let fresh = ctl.reset();
        assert!(fresh.is_zero());
        ctl.reveal(RevealStage::ResultShown);
        assert_eq!(ctl.stage(), RevealStage::Hidden);
        assert!(ctl.shown_score().is_zero());
    }

    #[test]
    fn late_choices_step_does_not_hide_result() {
        let mut ctl = controller(&[Choice::Paper]);
        ctl.play(Choice::Paper);
        ctl.reveal(RevealStage::ResultShown);
        ctl.reveal(RevealStage::ChoicesShown);
        assert_eq!(ctl.stage(), RevealStage::ResultShown);
    }

    #[test]
    fn unknown_markup_choice_is_an_error() {
        let mut ctl = controller(&[Choice::Paper]);
        assert!(ctl.play_named("lizard").is_err());
        assert!(ctl.play_named("scissors").unwrap().is_some());
    }

    #[test]
    fn button_label_is_not_a_choice_name() {
        let mut ctl = controller(&[Choice::Rock]);
        assert!(ctl.choose_named("Rock").is_none());
        assert!(ctl.choose_named(" rock").is_none());
        assert!(!ctl.buttons_disabled());
        assert!(ctl.round().is_none());
        assert_eq!(ctl.session().rounds_played(), 0);

        assert!(ctl.choose_named("rock").is_some());
        assert_eq!(ctl.selected(), Some(Choice::Rock));
    }
}
