//! Key event handling.
//!
//! Polls crossterm and forwards every keystroke to an `App` transition.
//! Nothing here mutates wizard state directly.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use udyam_engine::{App, Focus};

/// Handle pending terminal events.
///
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if event::poll(Duration::from_millis(50))?
        && let Event::Key(key) = event::read()?
    {
        // Only handle key press events (not release) - important for Windows.
        if key.kind != KeyEventKind::Press {
            return Ok(app.should_quit());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(true);
        }

        if app.submission().is_some() {
            handle_payload_view(app, key);
        } else {
            handle_wizard(app, key);
        }
    }

    Ok(app.should_quit())
}

fn handle_payload_view(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
    }
}

fn handle_wizard(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.issue_otp(),
            KeyCode::Char('b') => app.back(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Enter => primary_action(app),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// Enter means: verify when the OTP row has focus, submit on the terminal
/// step, advance otherwise.
fn primary_action(app: &mut App) {
    if app.focus() == Focus::Otp {
        app.verify_otp();
    } else if app.is_last_step() {
        app.submit();
    } else {
        app.next();
    }
}
