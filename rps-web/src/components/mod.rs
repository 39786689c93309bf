pub mod button;
pub mod choice_button;
pub mod result_panel;
pub mod round_display;
pub mod scoreboard;
