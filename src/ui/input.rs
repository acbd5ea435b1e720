use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::transform::TransformIntent;
use crate::ui::app::App;

/// Route a key event into the app.
///
/// The four transform buttons live on the arrow keys; `q`, `Esc`, or
/// `Ctrl+Q` quits. Everything else is a no-op.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let quit = matches!(key.code, KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('q')) && key.modifiers.is_empty())
        || is_ctrl_char(key, 'q');
    if quit {
        app.request_quit();
        return;
    }

    if let Some(intent) = intent_for(key.code) {
        app.dispatch(intent);
    }
}

/// The four buttons of the original surface, as key bindings.
fn intent_for(code: KeyCode) -> Option<TransformIntent> {
    match code {
        KeyCode::Left => Some(TransformIntent::RotateLeft),
        KeyCode::Right => Some(TransformIntent::RotateRight),
        KeyCode::Up => Some(TransformIntent::IncreaseOpacity),
        KeyCode::Down => Some(TransformIntent::DecreaseOpacity),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
