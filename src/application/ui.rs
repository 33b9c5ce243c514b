use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::models::VoiceEvent;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::ChatSessionManager;
use crate::domain::services::Preferences;
use crate::domain::services::Sessions;
use crate::infrastructure::storage::StorageManager;

fn new_textarea<'a>(app_state: &AppState, content: &str) -> tui_textarea::TextArea<'a> {
    let mut textarea = TextArea::new(&app_state.t("chat.title"), content);
    textarea.set_placeholder_text(app_state.t("chat.placeholder"));
    return textarea;
}

/// Text shown in place of the input box while it is locked.
fn status_text(app_state: &AppState) -> Option<String> {
    if app_state.manager.is_awaiting_response() {
        return Some(app_state.t("chat.thinking"));
    }

    if app_state.manager.is_listening() {
        let interim = app_state.manager.interim_transcript();
        if interim.is_empty() {
            return Some(app_state.t("chat.listening"));
        }
        return Some(format!("{} {interim}", app_state.t("chat.listening")));
    }

    return None;
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = new_textarea(app_state, "");

    loop {
        let status = status_text(app_state);
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            app_state
                .bubble_list
                .render(frame, layout[0], app_state.scroll.position.into());
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if let Some(text) = &status {
                Loading::new(text).render(frame, layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        let is_locked = status.is_some();
        match events.next().await? {
            Event::ChatReply(res) => {
                app_state.handle_chat_reply(res);
            }
            Event::Voice(event) => {
                let is_final = matches!(event, VoiceEvent::Result { is_final: true, .. });
                app_state.handle_voice_event(event);
                if is_final {
                    let input = app_state.manager.input().to_string();
                    textarea = new_textarea(app_state, &input);
                }
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardCTRLL() => {
                app_state.toggle_voice(&tx)?;
            }
            Event::KeyboardCTRLN() => {
                app_state.new_chat()?;
            }
            Event::KeyboardEnter() => {
                if is_locked {
                    continue;
                }

                let input_str = textarea.lines().join("\n");
                if input_str.trim().is_empty() {
                    continue;
                }
                textarea = new_textarea(app_state, "");
                app_state.manager.set_input("");

                let (should_break, should_continue) =
                    app_state.handle_slash_commands(&input_str, &tx)?;
                if should_break {
                    break;
                }
                if should_continue {
                    continue;
                }

                app_state.submit(&input_str, &tx)?;
            }
            Event::KeyboardCharInput(input) => {
                if !is_locked {
                    textarea.input(input);
                    app_state.manager.set_input(&textarea.lines().join("\n"));
                }
            }
            Event::KeyboardPaste(text) => {
                if !is_locked {
                    textarea.insert_str(text);
                    app_state.manager.set_input(&textarea.lines().join("\n"));
                }
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                app_state.tick();
            }
        }
    }

    if app_state.manager.is_listening() {
        tx.send(Action::VoiceStop())?;
    }

    return app_state.manager.flush();
}

fn build_app_state() -> Result<AppState> {
    let storage = StorageManager::get()?;
    let preferences = Preferences::new(storage.clone());
    let manager = ChatSessionManager::new(
        Sessions::new(storage),
        &Config::get(ConfigKey::UserID),
        preferences.language(),
        Duration::from_millis(Config::save_debounce_millis()),
    );

    let mut app_state = AppState::new(manager, preferences);
    let session_id = Config::get(ConfigKey::SessionID);
    if !session_id.is_empty() {
        app_state.manager.load_chat(&session_id)?;
    }

    return Ok(app_state);
}

pub fn destruct_terminal_for_panic() {
    if disable_raw_mode().is_err() {
        return;
    }
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste,
        cursor::Show
    );
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = build_app_state()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let res = start_loop(&mut terminal, &mut app_state, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}
