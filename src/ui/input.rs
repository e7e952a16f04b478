use crate::ui::app::{App, Screen};
use crate::ui::compose::{ComposeField, ComposeIntent, ComposeState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+Q and Ctrl+C quit from anywhere. In raw mode Ctrl+C arrives as
    // a plain key event, not a signal.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen().clone() {
        Screen::Feed => handle_feed_key(app, key),
        Screen::Read { .. } => handle_read_key(app, key),
        Screen::Compose => handle_compose_key(app, key),
    }
}

fn handle_feed_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('l') => app.toggle_selected_like(),
        KeyCode::Char('r') => app.load_feed(),
        KeyCode::Char('n') => app.open_compose(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_read_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_feed(),
        KeyCode::Enter => app.submit_comment(),
        KeyCode::Backspace => app.comment_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.comment_input(ch);
        }
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    // The login-required surface accepts only Esc.
    if !app.compose().is_editing() {
        if matches!(key.code, KeyCode::Esc) {
            app.close_compose();
        }
        return;
    }

    if is_ctrl_char(key, 's') {
        app.submit_compose();
        return;
    }

    let on_category = matches!(
        app.compose(),
        ComposeState::Editing {
            focused: ComposeField::Category,
            ..
        }
    );

    match key.code {
        KeyCode::Esc => app.close_compose(),
        KeyCode::Tab => app.compose_dispatch(ComposeIntent::FocusNext),
        KeyCode::BackTab => app.compose_dispatch(ComposeIntent::FocusPrev),
        KeyCode::Left if on_category => app.compose_dispatch(ComposeIntent::CategoryPrev),
        KeyCode::Right if on_category => app.compose_dispatch(ComposeIntent::CategoryNext),
        KeyCode::Enter => {
            let in_content = matches!(
                app.compose(),
                ComposeState::Editing {
                    focused: ComposeField::Content,
                    ..
                }
            );
            if in_content {
                // Content is the one multiline field.
                app.compose_dispatch(ComposeIntent::Input('\n'));
            } else {
                app.compose_dispatch(ComposeIntent::FocusNext);
            }
        }
        KeyCode::Backspace => app.compose_dispatch(ComposeIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.compose_dispatch(ComposeIntent::Input(ch));
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
