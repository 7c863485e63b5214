//! Keyboard input dispatch for the demo screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::DemoState;

/// Positions moved by PageUp / PageDown.
pub const PAGE: i64 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut DemoState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    let bar = &mut app.seek_bar;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('h') | KeyCode::Left => bar.step_by(-1),
        KeyCode::Char('l') | KeyCode::Right => bar.step_by(1),
        KeyCode::PageDown => bar.step_by(-PAGE),
        KeyCode::PageUp => bar.step_by(PAGE),
        KeyCode::Home => bar.seek(0),
        KeyCode::End => {
            let max = bar.track_max();
            bar.seek(max);
        }
        KeyCode::Char('r') => {
            bar.reset();
            app.set_status("Reset to start value");
            return;
        }
        KeyCode::Tab => {
            app.focused = !app.focused;
            return;
        }
        _ => return,
    }

    let (position, max, value) = (bar.progress(), bar.track_max(), bar.value());
    if position == 0 || position == max {
        app.set_warning(format!("At the end of the track ({value})"));
    } else {
        app.status_message = None;
    }
}
