use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode, Panel};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    FocusNext,
    FocusPrev,
    /// Previous slide (carousel) or collapse (FAQ)
    MoveLeft,
    /// Next slide (carousel) or expand (FAQ)
    MoveRight,
    /// Jump the focused carousel to a dot position
    GoToDot(usize),
    /// Toggle the selected FAQ entry / order the current product
    Select,
    /// Open the WhatsApp order link for the current product
    Order,
    /// Show the help overlay
    Help,
    /// Show the contact overlay
    Contact,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key dismisses an overlay
    if app.mode != Mode::Normal {
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Panel navigation
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::FocusNext,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::FocusPrev,

        // Slide navigation within the focused panel
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::MoveLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::MoveRight,
        (KeyCode::Left, KeyModifiers::NONE) => Action::MoveLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::MoveRight,

        // Jump straight to a dot position (1-based on the keyboard)
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoToDot(c as usize - '1' as usize)
        }

        (KeyCode::Enter, KeyModifiers::NONE) => Action::Select,

        // Order the product at the leading visible position
        (KeyCode::Char('o'), KeyModifiers::NONE)
            if matches!(app.focus, Panel::Section(_)) =>
        {
            Action::Order
        }

        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::Contact,
        (KeyCode::Char('?'), KeyModifiers::SHIFT) => Action::Help,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::Help,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::ExitMode,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use std::sync::Arc;
    use vitrine_core::{AppConfig, Showcase};

    fn test_app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Showcase::sample(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = test_app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('l')), &app), Action::MoveRight);
        assert_eq!(handle_key_event(key(KeyCode::Char('3')), &app), Action::GoToDot(2));
        assert_eq!(handle_key_event(key(KeyCode::Char('o')), &app), Action::Order);
    }

    #[test]
    fn test_overlay_swallows_keys() {
        let mut app = test_app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::ExitMode);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }

    #[test]
    fn test_order_only_on_sections() {
        let mut app = test_app();
        app.focus = Panel::Faq;
        assert_eq!(handle_key_event(key(KeyCode::Char('o')), &app), Action::None);
    }
}
