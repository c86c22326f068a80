use crate::{
    core::cmd::Cmd,
    core::msg::{pointer::PointerMsg, system::SystemMsg, Msg},
    core::state::AppState,
    domain::{
        geometry::{Point, Viewport},
        layout::PageLayout,
    },
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = update_in_place(msg, &mut state);
    (state, commands)
}

/// Same as [`update`], applied to a borrowed state
pub fn update_in_place(msg: Msg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let resized = matches!(system_msg, SystemMsg::Resize(..));
            let commands = state.system.update(system_msg);
            if resized {
                // The snow field is mounted on the first non-empty resize
                let screen = state.system.screen;
                state
                    .snow
                    .resize(Viewport::from_cells(screen.width, screen.height), &mut state.rng);
            }
            commands
        }

        // Card messages (delegated to CardState)
        Msg::Card(card_msg) => state.card.update(card_msg),

        Msg::Pointer(PointerMsg::Moved { column, row }) => {
            state.pointer = Point::from_cell(column, row);
            state.sparkles.pointer_moved(state.pointer);
            let card = PageLayout::new(state.system.screen).card;
            state.card.pointer_moved(card, column, row);
            vec![]
        }

        Msg::Pointer(PointerMsg::Left) => {
            state.pointer = Point::OFFSCREEN;
            state.card.pointer_left();
            vec![]
        }

        Msg::Frame => {
            state.system.frame_count = state.system.frame_count.wrapping_add(1);
            state.snow.advance(state.pointer, &mut state.rng);
            state.sparkles.advance(&mut state.rng);
            state.card.advance_frame();
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::*;
    use crate::{
        core::{
            cmd::TuiCommand,
            msg::card::CardMsg,
            state::CardPhase,
        },
        domain::{sparkle, theme::Theme, tilt::Tilt},
        infrastructure::config::Config,
    };

    fn mounted_state() -> AppState {
        let state = AppState::new_with_seed(Config::default(), 42);
        let (state, _) = update(Msg::System(SystemMsg::Resize(100, 32)), state);
        state
    }

    #[test]
    fn test_quit_message() {
        let state = AppState::default();
        let (new_state, cmds) = update(Msg::System(SystemMsg::Quit), state);

        assert!(new_state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_resize_mounts_snow_once() {
        let state = AppState::new_with_seed(Config::default(), 1);
        assert!(!state.snow.is_mounted());

        let (state, cmds) = update(Msg::System(SystemMsg::Resize(80, 24)), state);
        assert_eq!(
            cmds,
            vec![Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24
            })]
        );
        assert!(state.snow.is_mounted());
        assert_eq!(state.snow.flakes().len(), 150);
        let first = state.snow.flakes()[0].clone();

        let (state, _) = update(Msg::System(SystemMsg::Resize(120, 40)), state);
        assert_eq!(state.snow.flakes()[0], first);
        assert_eq!(state.snow.viewport(), Viewport::from_cells(120, 40));
    }

    #[test]
    fn test_zero_size_screen_draws_no_snow() {
        let state = AppState::new_with_seed(Config::default(), 1);
        let (state, _) = update(Msg::System(SystemMsg::Resize(0, 0)), state);
        let (state, _) = update(Msg::Frame, state);

        assert!(!state.snow.is_mounted());
        assert!(state.snow.flakes().is_empty());
    }

    #[test]
    fn test_frame_emits_sparkles_only_after_motion() {
        let state = mounted_state();
        let (state, _) = update(Msg::Frame, state);
        assert!(state.sparkles.is_empty());

        let (state, _) = update(
            Msg::Pointer(PointerMsg::Moved { column: 5, row: 5 }),
            state,
        );
        let (state, _) = update(Msg::Frame, state);
        assert_eq!(state.sparkles.len(), sparkle::BATCH);

        // stationary pointer: no new sparkles, old ones age
        let (state, _) = update(Msg::Frame, state);
        assert!(state.sparkles.len() <= sparkle::BATCH);
        assert_eq!(state.system.frame_count, 3);
    }

    #[test]
    fn test_pointer_over_card_tilts_and_leaving_resets() {
        let state = mounted_state();
        let card = PageLayout::new(Rect::new(0, 0, 100, 32)).card;

        let (state, _) = update(
            Msg::Pointer(PointerMsg::Moved {
                column: card.x,
                row: card.y,
            }),
            state,
        );
        assert!(!state.card.tilt.is_neutral());
        assert!(state.card.tilt.x.abs() <= 10.0 && state.card.tilt.y.abs() <= 10.0);
        assert_eq!(state.pointer, Point::from_cell(card.x, card.y));

        let (state, _) = update(Msg::Pointer(PointerMsg::Left), state);
        assert_eq!(state.card.tilt, Tilt::NEUTRAL);
        assert_eq!(state.pointer, Point::OFFSCREEN);
    }

    #[test]
    fn test_pointer_outside_card_has_no_tilt() {
        let state = mounted_state();
        let (state, _) = update(Msg::Pointer(PointerMsg::Moved { column: 0, row: 0 }), state);

        assert_eq!(state.card.tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_card_flow_through_update() {
        let state = mounted_state();

        let (state, cmds) = update(Msg::Card(CardMsg::Activate), state);
        assert_eq!(
            cmds,
            vec![Cmd::GenerateGreeting {
                request_id: 1,
                theme: Theme::Magic
            }]
        );
        assert_eq!(state.card.phase(), CardPhase::Loading);

        let (mut state, _) = update(
            Msg::Card(CardMsg::GreetingReady {
                request_id: 1,
                text: "Веселих свят".to_string(),
            }),
            state,
        );
        assert_eq!(state.card.phase(), CardPhase::Open);

        for _ in 0..100 {
            state = update(Msg::Frame, state).0;
        }
        assert_eq!(state.card.flip, 1.0);
        assert!(state.card.shows_back());
    }

    #[test]
    fn test_update_in_place_matches_update() {
        let msgs = [
            Msg::Pointer(PointerMsg::Moved { column: 40, row: 12 }),
            Msg::Card(CardMsg::Activate),
            Msg::Frame,
            Msg::Frame,
        ];
        let mut owned = mounted_state();
        let mut borrowed = mounted_state();

        for msg in msgs {
            let (next, owned_cmds) = update(msg.clone(), owned);
            owned = next;
            let borrowed_cmds = update_in_place(msg, &mut borrowed);
            assert_eq!(owned_cmds, borrowed_cmds);
        }

        assert_eq!(owned.system.frame_count, borrowed.system.frame_count);
        assert_eq!(owned.pointer, borrowed.pointer);
        assert_eq!(owned.card.phase(), borrowed.card.phase());
        assert_eq!(owned.card.tilt, borrowed.card.tilt);
        assert_eq!(owned.snow.flakes(), borrowed.snow.flakes());
        assert_eq!(owned.sparkles.len(), borrowed.sparkles.len());
    }
}
