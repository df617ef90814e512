use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mission_core::{AppViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press onto a dashboard message given what is on screen.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return InputAction::Quit;
    }

    // The alert is modal.
    if view.alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => InputAction::Dispatch(Msg::AlertDismissed),
            _ => InputAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('r') if ctrl => InputAction::Dispatch(Msg::ResetClicked),
        KeyCode::Char('t') if ctrl => InputAction::Dispatch(Msg::AlertClicked),
        KeyCode::Enter => InputAction::Dispatch(Msg::AnalyzeSubmitted),
        _ if view.analyzer.busy => InputAction::Ignore,
        KeyCode::Backspace => {
            let mut text = view.analyzer.input.clone();
            if text.pop().is_some() {
                InputAction::Dispatch(Msg::InputChanged(text))
            } else {
                InputAction::Ignore
            }
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = view.analyzer.input.clone();
            text.push(ch);
            InputAction::Dispatch(Msg::InputChanged(text))
        }
        _ => InputAction::Ignore,
    }
}
