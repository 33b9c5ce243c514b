use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use tui_textarea::Key;

use super::EventsService;
use crate::domain::models::Event;

fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<Event> {
    return EventsService::handle_crossterm(CrosstermEvent::Key(KeyEvent::new(code, modifiers)));
}

#[test]
fn it_maps_control_keys() {
    assert!(matches!(
        key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLC())
    ));
    assert!(matches!(
        key(KeyCode::Char('l'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLL())
    ));
    assert!(matches!(
        key(KeyCode::Char('n'), KeyModifiers::CONTROL),
        Some(Event::KeyboardCTRLN())
    ));
    assert!(matches!(
        key(KeyCode::Enter, KeyModifiers::NONE),
        Some(Event::KeyboardEnter())
    ));
}

#[test]
fn it_maps_scroll_keys() {
    assert!(matches!(
        key(KeyCode::Up, KeyModifiers::NONE),
        Some(Event::UIScrollUp())
    ));
    assert!(matches!(
        key(KeyCode::PageDown, KeyModifiers::NONE),
        Some(Event::UIScrollPageDown())
    ));
    assert!(matches!(
        key(KeyCode::Char('u'), KeyModifiers::CONTROL),
        Some(Event::UIScrollPageUp())
    ));
}

#[test]
fn it_passes_plain_characters_to_input() {
    match key(KeyCode::Char('k'), KeyModifiers::NONE) {
        Some(Event::KeyboardCharInput(input)) => {
            assert!(matches!(input.key, Key::Char('k')));
            assert!(!input.ctrl);
        }
        _ => panic!("expected character input"),
    }
}

#[test]
fn it_maps_mouse_wheel() {
    let event = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });

    assert!(matches!(
        EventsService::handle_crossterm(event),
        Some(Event::UIScrollDown())
    ));
}

#[test]
fn it_maps_paste() {
    match EventsService::handle_crossterm(CrosstermEvent::Paste("Jai Badri Vishal".to_string())) {
        Some(Event::KeyboardPaste(text)) => assert_eq!(text, "Jai Badri Vishal"),
        _ => panic!("expected paste"),
    }
}

#[test]
fn it_ignores_focus_changes() {
    assert!(EventsService::handle_crossterm(CrosstermEvent::FocusGained).is_none());
}
