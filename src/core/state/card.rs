//! Greeting card controller
//!
//! The card is either showing its front (closed), waiting for a greeting
//! (loading) or showing the greeting on its back (open). Every request gets an
//! id; only the answer to the latest one is shown.

use ratatui::layout::Rect;

use crate::{
    core::{cmd::Cmd, msg::card::CardMsg},
    domain::{theme::Theme, tilt::Tilt},
    infrastructure::config::CardConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Closed,
    Loading,
    Open,
}

#[derive(Debug, Clone)]
pub struct CardState {
    pub theme: Theme,
    pub is_open: bool,
    /// Id of the request whose answer is awaited
    pub pending_request: Option<u64>,
    pub greeting: Option<String>,
    pub tilt: Tilt,
    /// Flip animation progress: 0.0 shows the front, 1.0 the back
    pub flip: f64,
    pub max_tilt: f64,
    flip_step: f64,
    last_request_id: u64,
    close_id: u64,
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(&CardConfig::default())
    }
}

impl CardState {
    pub fn new(config: &CardConfig) -> Self {
        Self {
            theme: config.theme,
            is_open: false,
            pending_request: None,
            greeting: None,
            tilt: Tilt::NEUTRAL,
            flip: 0.0,
            max_tilt: config.max_tilt.abs(),
            flip_step: 1.0 / f64::from(config.flip_frames.max(1)),
            last_request_id: 0,
            close_id: 0,
        }
    }

    pub fn phase(&self) -> CardPhase {
        if self.pending_request.is_some() {
            CardPhase::Loading
        } else if self.is_open {
            CardPhase::Open
        } else {
            CardPhase::Closed
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Whether the back face is the one facing the viewer
    pub fn shows_back(&self) -> bool {
        self.flip >= 0.5
    }

    /// Tilt as rendered: the open card tilts half as much
    pub fn effective_tilt(&self) -> Tilt {
        if self.is_open {
            self.tilt.scaled(0.5)
        } else {
            self.tilt
        }
    }

    /// Card-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CardMsg) -> Vec<Cmd> {
        match msg {
            CardMsg::Activate => {
                if self.is_open {
                    return vec![];
                }
                if let Some(stale) = self.pending_request {
                    tracing::debug!(stale, "superseding pending greeting request");
                }
                vec![self.start_request()]
            }

            CardMsg::SelectTheme(theme) => self.select_theme(theme),

            CardMsg::NextTheme => self.select_theme(self.theme.next()),

            CardMsg::Close => {
                if !self.is_open || self.is_loading() {
                    return vec![];
                }
                self.is_open = false;
                self.close_id += 1;
                vec![Cmd::ScheduleClear {
                    close_id: self.close_id,
                }]
            }

            CardMsg::GreetingReady { request_id, text } => {
                if self.pending_request != Some(request_id) {
                    tracing::info!(
                        request_id,
                        pending = ?self.pending_request,
                        "dropping stale greeting"
                    );
                    return vec![];
                }
                self.pending_request = None;
                self.greeting = Some(text);
                self.is_open = true;
                vec![]
            }

            CardMsg::ClearGreeting { close_id } => {
                if close_id == self.close_id && self.phase() == CardPhase::Closed {
                    self.greeting = None;
                    self.tilt = Tilt::NEUTRAL;
                }
                vec![]
            }
        }
    }

    fn select_theme(&mut self, theme: Theme) -> Vec<Cmd> {
        match self.phase() {
            CardPhase::Loading => vec![],
            CardPhase::Closed => {
                self.theme = theme;
                vec![]
            }
            CardPhase::Open => {
                self.theme = theme;
                vec![self.start_request()]
            }
        }
    }

    fn start_request(&mut self) -> Cmd {
        self.last_request_id += 1;
        self.pending_request = Some(self.last_request_id);
        Cmd::GenerateGreeting {
            request_id: self.last_request_id,
            theme: self.theme,
        }
    }

    /// Recompute the tilt for a pointer over `column`/`row`
    pub fn pointer_moved(&mut self, card: Rect, column: u16, row: u16) {
        self.tilt = Tilt::from_pointer(card, column, row, self.max_tilt);
    }

    pub fn pointer_left(&mut self) {
        self.tilt = Tilt::NEUTRAL;
    }

    /// Move the flip animation one frame towards the current face
    pub fn advance_frame(&mut self) {
        let target = if self.is_open { 1.0 } else { 0.0 };
        if self.flip < target {
            self.flip = (self.flip + self.flip_step).min(target);
        } else if self.flip > target {
            self.flip = (self.flip - self.flip_step).max(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_card(text: &str) -> CardState {
        let mut card = CardState::default();
        card.update(CardMsg::Activate);
        card.update(CardMsg::GreetingReady {
            request_id: 1,
            text: text.to_string(),
        });
        card
    }

    #[test]
    fn test_activate_enters_loading() {
        let mut card = CardState::default();
        assert_eq!(card.phase(), CardPhase::Closed);

        let cmds = card.update(CardMsg::Activate);

        assert_eq!(card.phase(), CardPhase::Loading);
        assert!(!card.is_open);
        assert_eq!(
            cmds,
            vec![Cmd::GenerateGreeting {
                request_id: 1,
                theme: Theme::Magic
            }]
        );
    }

    #[test]
    fn test_greeting_ready_opens_card() {
        let card = open_card("Світла й тепла!");

        assert_eq!(card.phase(), CardPhase::Open);
        assert!(card.is_open);
        assert_eq!(card.greeting.as_deref(), Some("Світла й тепла!"));
    }

    #[test]
    fn test_activate_while_open_is_ignored() {
        let mut card = open_card("text");

        let cmds = card.update(CardMsg::Activate);

        assert!(cmds.is_empty());
        assert_eq!(card.phase(), CardPhase::Open);
    }

    #[test]
    fn test_retrigger_while_loading_supersedes_previous_request() {
        let mut card = CardState::default();
        card.update(CardMsg::Activate);
        let cmds = card.update(CardMsg::Activate);
        assert_eq!(
            cmds,
            vec![Cmd::GenerateGreeting {
                request_id: 2,
                theme: Theme::Magic
            }]
        );

        // The fresh answer arrives first, then the stale one
        card.update(CardMsg::GreetingReady {
            request_id: 2,
            text: "fresh".to_string(),
        });
        card.update(CardMsg::GreetingReady {
            request_id: 1,
            text: "stale".to_string(),
        });

        assert_eq!(card.greeting.as_deref(), Some("fresh"));
        assert_eq!(card.phase(), CardPhase::Open);
    }

    #[test]
    fn test_stale_answer_does_not_end_loading() {
        let mut card = CardState::default();
        card.update(CardMsg::Activate);
        card.update(CardMsg::Activate);

        card.update(CardMsg::GreetingReady {
            request_id: 1,
            text: "stale".to_string(),
        });

        assert_eq!(card.phase(), CardPhase::Loading);
        assert_eq!(card.greeting, None);
    }

    #[test]
    fn test_theme_switch_while_open_reloads_and_stays_open() {
        let mut card = open_card("first");

        let cmds = card.update(CardMsg::SelectTheme(Theme::Cozy));

        assert_eq!(card.phase(), CardPhase::Loading);
        assert!(card.is_open);
        assert_eq!(card.theme, Theme::Cozy);
        // Old text stays until the new one arrives
        assert_eq!(card.greeting.as_deref(), Some("first"));
        assert_eq!(
            cmds,
            vec![Cmd::GenerateGreeting {
                request_id: 2,
                theme: Theme::Cozy
            }]
        );

        card.update(CardMsg::GreetingReady {
            request_id: 2,
            text: "second".to_string(),
        });
        assert_eq!(card.phase(), CardPhase::Open);
        assert_eq!(card.greeting.as_deref(), Some("second"));
    }

    #[test]
    fn test_theme_switch_while_loading_is_ignored() {
        let mut card = open_card("first");
        card.update(CardMsg::SelectTheme(Theme::Hope));

        let cmds = card.update(CardMsg::SelectTheme(Theme::Spiritual));

        assert!(cmds.is_empty());
        assert_eq!(card.theme, Theme::Hope);
    }

    #[test]
    fn test_theme_preselect_while_closed() {
        let mut card = CardState::default();

        let cmds = card.update(CardMsg::NextTheme);
        assert!(cmds.is_empty());
        assert_eq!(card.theme, Theme::Cozy);
        assert_eq!(card.phase(), CardPhase::Closed);

        let cmds = card.update(CardMsg::Activate);
        assert_eq!(
            cmds,
            vec![Cmd::GenerateGreeting {
                request_id: 1,
                theme: Theme::Cozy
            }]
        );
    }

    #[test]
    fn test_close_keeps_text_until_deferred_clear() {
        let mut card = open_card("keep me");
        card.pointer_moved(Rect::new(0, 0, 10, 10), 0, 0);

        let cmds = card.update(CardMsg::Close);

        assert_eq!(cmds, vec![Cmd::ScheduleClear { close_id: 1 }]);
        assert_eq!(card.phase(), CardPhase::Closed);
        assert_eq!(card.greeting.as_deref(), Some("keep me"));

        card.update(CardMsg::ClearGreeting { close_id: 1 });
        assert_eq!(card.greeting, None);
        assert_eq!(card.tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_clear_is_skipped_when_card_reopens() {
        let mut card = open_card("first");
        card.update(CardMsg::Close);

        // Reopened before the deferred clear fires
        card.update(CardMsg::Activate);
        card.update(CardMsg::ClearGreeting { close_id: 1 });
        assert_eq!(card.greeting.as_deref(), Some("first"));

        card.update(CardMsg::GreetingReady {
            request_id: 2,
            text: "second".to_string(),
        });
        assert_eq!(card.greeting.as_deref(), Some("second"));
    }

    #[test]
    fn test_outdated_clear_is_ignored() {
        let mut card = open_card("first");
        card.update(CardMsg::Close);
        card.update(CardMsg::Activate);
        card.update(CardMsg::GreetingReady {
            request_id: 2,
            text: "second".to_string(),
        });
        card.update(CardMsg::Close);

        card.update(CardMsg::ClearGreeting { close_id: 1 });
        assert_eq!(card.greeting.as_deref(), Some("second"));

        card.update(CardMsg::ClearGreeting { close_id: 2 });
        assert_eq!(card.greeting, None);
    }

    #[test]
    fn test_close_while_loading_or_closed_is_ignored() {
        let mut card = CardState::default();
        assert!(card.update(CardMsg::Close).is_empty());

        let mut card = open_card("x");
        card.update(CardMsg::NextTheme);
        assert!(card.update(CardMsg::Close).is_empty());
        assert!(card.is_open);
    }

    #[test]
    fn test_tilt_follows_pointer_and_resets_on_leave() {
        let mut card = CardState::default();
        let rect = Rect::new(10, 10, 20, 10);

        card.pointer_moved(rect, 10, 10);
        assert!(!card.tilt.is_neutral());

        card.pointer_moved(rect, 0, 0);
        assert_eq!(card.tilt, Tilt::NEUTRAL);

        card.pointer_moved(rect, 29, 19);
        card.pointer_left();
        assert_eq!(card.tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_open_card_tilts_half_as_much() {
        let mut card = open_card("x");
        card.tilt = Tilt { x: 8.0, y: -6.0 };

        assert_eq!(card.effective_tilt(), Tilt { x: 4.0, y: -3.0 });
    }

    #[test]
    fn test_flip_animates_towards_face() {
        let config = CardConfig {
            flip_frames: 4,
            ..Default::default()
        };
        let mut card = CardState::new(&config);
        card.update(CardMsg::Activate);
        card.update(CardMsg::GreetingReady {
            request_id: 1,
            text: "x".to_string(),
        });

        card.advance_frame();
        card.advance_frame();
        assert_eq!(card.flip, 0.5);
        assert!(card.shows_back());
        card.advance_frame();
        card.advance_frame();
        card.advance_frame();
        assert_eq!(card.flip, 1.0);

        card.update(CardMsg::Close);
        card.advance_frame();
        assert_eq!(card.flip, 0.75);
    }
}
