//! crossterm events to shell input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use folio_types::input::{InputEvent, Key, KeyChord};

/// What the main loop should do with one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppInput {
    /// Forward to the terminal shell.
    Shell(InputEvent),
    /// Scroll the page view by this many lines.
    Scroll(isize),
    /// The window was resized; redraw.
    Redraw,
}

/// Lines moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

/// Map a crossterm event. Returns `None` for events the app ignores.
pub fn map_event(event: Event) -> Option<AppInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::FocusGained => Some(AppInput::Shell(InputEvent::FocusGained)),
        Event::FocusLost => Some(AppInput::Shell(InputEvent::FocusLost)),
        Event::Resize(..) => Some(AppInput::Redraw),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppInput> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    let event = match key.code {
        KeyCode::Char('c') if ctrl && !alt => InputEvent::Quit,
        KeyCode::Char(c) if ctrl || alt => InputEvent::Chord(KeyChord {
            ctrl,
            alt,
            key: c.to_ascii_lowercase(),
        }),
        KeyCode::Char(c) => InputEvent::TextInput(c),
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Enter => InputEvent::Key(Key::Enter),
        KeyCode::Up => InputEvent::Key(Key::Up),
        KeyCode::Down => InputEvent::Key(Key::Down),
        KeyCode::Tab => InputEvent::Key(Key::Tab),
        KeyCode::Esc => InputEvent::Key(Key::Escape),
        // F1 stands in for the floating launcher button.
        KeyCode::F(1) => InputEvent::LauncherClick,
        KeyCode::PageUp => return Some(AppInput::Scroll(-PAGE_STEP)),
        KeyCode::PageDown => return Some(AppInput::Scroll(PAGE_STEP)),
        _ => return None,
    };
    Some(AppInput::Shell(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<AppInput> {
        map_event(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn printable_characters() {
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(AppInput::Shell(InputEvent::TextInput('a')))
        );
        assert_eq!(
            press(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(AppInput::Shell(InputEvent::TextInput('A')))
        );
    }

    #[test]
    fn ctrl_letters_become_chords() {
        assert_eq!(
            press(KeyCode::Char('O'), KeyModifiers::CONTROL),
            Some(AppInput::Shell(InputEvent::Chord(KeyChord::ctrl('o'))))
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(AppInput::Shell(InputEvent::Quit))
        );
    }

    #[test]
    fn editing_keys() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(AppInput::Shell(InputEvent::Key(Key::Enter)))
        );
        assert_eq!(
            press(KeyCode::Tab, KeyModifiers::NONE),
            Some(AppInput::Shell(InputEvent::Key(Key::Tab)))
        );
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Some(AppInput::Shell(InputEvent::Backspace))
        );
        assert_eq!(
            press(KeyCode::F(1), KeyModifiers::NONE),
            Some(AppInput::Shell(InputEvent::LauncherClick))
        );
    }

    #[test]
    fn paging_scrolls_the_page() {
        assert_eq!(
            press(KeyCode::PageDown, KeyModifiers::NONE),
            Some(AppInput::Scroll(PAGE_STEP))
        );
        assert_eq!(press(KeyCode::Home, KeyModifiers::NONE), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn resize_redraws() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(AppInput::Redraw));
    }
}
