use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Always honoured
    ForceQuit, // Ctrl+C
    Resize,

    // Meaning depends on the view (home or lesson)
    Quit,
    CursorUp,
    CursorDown,
    Submit,
    Next,
    Prev,
    Back,
    ToggleTheme,
    /// Digit key 1-9: open the n-th course directly.
    Pick(usize),

    // Lesson scrolling
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
}

/// Translate a key press into a `TuiEvent`.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Ignore key releases; held keys still repeat
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l')) => Some(TuiEvent::Next),
        (_, KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h')) => Some(TuiEvent::Prev),
        (_, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b')) => Some(TuiEvent::Back),
        (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| TuiEvent::Pick(d as usize - 1)),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown | KeyCode::Char(' ')) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    let raw = match event::read() {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            return None;
        }
    };
    match raw {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
