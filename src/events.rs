//! Terminal event decoding.
//!
//! Maps crossterm events to the [`Action`]s the app understands. Everything
//! else (releases, resizes, unknown keys) maps to `None` and only triggers
//! the next render pass.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::app::Action;

/// Decode one terminal event into a user intent.
pub fn map_event(event: &Event) -> Option<Action> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('c') => Some(Action::CycleProxyType),
        KeyCode::Char('R') => Some(Action::ReloadConfig),
        KeyCode::Tab | KeyCode::Right => Some(Action::NextRoute),
        KeyCode::BackTab | KeyCode::Left => Some(Action::PrevRoute),
        KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
        KeyCode::Char(ch @ '1'..='9') => {
            let idx = ch as usize - '1' as usize;
            Some(Action::Route(idx))
        }
        _ => None,
    }
}
