#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseEventKind;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

/// Also paces debounced session saves.
const UI_TICK_MILLIS: u64 = 250;

fn handle_input(input: Input) -> Event {
    match input {
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => return Event::KeyboardCTRLC(),
        Input {
            key: Key::Char('l'),
            ctrl: true,
            ..
        } => return Event::KeyboardCTRLL(),
        Input {
            key: Key::Char('n'),
            ctrl: true,
            ..
        } => return Event::KeyboardCTRLN(),
        Input {
            key: Key::Char('d'),
            ctrl: true,
            ..
        }
        | Input {
            key: Key::PageDown, ..
        } => return Event::UIScrollPageDown(),
        Input {
            key: Key::Char('u'),
            ctrl: true,
            ..
        }
        | Input {
            key: Key::PageUp, ..
        } => return Event::UIScrollPageUp(),
        Input {
            key: Key::Down | Key::MouseScrollDown,
            ..
        } => return Event::UIScrollDown(),
        Input {
            key: Key::Up | Key::MouseScrollUp,
            ..
        } => return Event::UIScrollUp(),
        Input {
            key: Key::Enter, ..
        } => return Event::KeyboardEnter(),
        input => return Event::KeyboardCharInput(input),
    }
}

/// Merges terminal input, worker events and the UI tick into one stream.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
    tick: time::Interval,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        let mut tick = time::interval(time::Duration::from_millis(UI_TICK_MILLIS));
        tick.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        return EventsService {
            crossterm_events: EventStream::new(),
            events,
            tick,
        };
    }

    /// Maps terminal input to app events. Key releases, focus changes and
    /// resizes map to nothing.
    pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => return Some(Event::KeyboardPaste(text)),
            CrosstermEvent::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => return Some(Event::UIScrollUp()),
                MouseEventKind::ScrollDown => return Some(Event::UIScrollDown()),
                _ => return None,
            },
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Release {
                    return None;
                }
                return Some(handle_input(key_event.into()));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => EventsService::handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "Failed to read terminal event");
                        None
                    }
                    None => None
                },
                _ = self.tick.tick() => Some(Event::UITick())
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
