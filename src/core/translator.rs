use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{card::CardMsg, pointer::PointerMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::layout::{hit_test, CardHit},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // Every rendered frame advances the animations
        RawMsg::Frame => vec![Msg::Frame],

        // User input
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::FocusLost => vec![Msg::Pointer(PointerMsg::Left)],

        RawMsg::AppFpsUpdate(fps) => vec![Msg::System(SystemMsg::UpdateFps(fps))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Tick | RawMsg::Render | RawMsg::FocusGained => vec![],
    }
}

/// Translates keyboard input through the configured key bindings
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global bindings work even with an empty keymap
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let lookup = vec![KeyEvent::new(key.code, key.modifiers)];
    match state.config.config.keybindings.get(&lookup) {
        Some(action) => translate_action(*action),
        None => vec![],
    }
}

fn translate_action(action: Action) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::OpenCard => vec![Msg::Card(CardMsg::Activate)],
        Action::CloseCard => vec![Msg::Card(CardMsg::Close)],
        Action::NextTheme => vec![Msg::Card(CardMsg::NextTheme)],
        Action::ThemeMagic | Action::ThemeCozy | Action::ThemeHope | Action::ThemeSpiritual => action
            .theme()
            .map(|theme| Msg::Card(CardMsg::SelectTheme(theme)))
            .into_iter()
            .collect(),
    }
}

/// Pointer motion moves the sparkles and tilt; a left click is hit-tested
/// against the same layout the card is drawn with.
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let moved = Msg::Pointer(PointerMsg::Moved {
        column: mouse.column,
        row: mouse.row,
    });
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => vec![moved],
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = hit_test(
                state.system.screen,
                state.card.is_open,
                mouse.column,
                mouse.row,
            );
            let click = match hit {
                Some(CardHit::Front) => Some(CardMsg::Activate),
                Some(CardHit::Theme(theme)) => Some(CardMsg::SelectTheme(theme)),
                Some(CardHit::Close) => Some(CardMsg::Close),
                None => None,
            };
            // A click in place is not motion and leaves no sparkles
            let still = state.pointer.to_cell() == Some((mouse.column, mouse.row));
            (!still)
                .then_some(moved)
                .into_iter()
                .chain(click.map(Msg::Card))
                .collect()
        }
        _ => vec![],
    }
}
