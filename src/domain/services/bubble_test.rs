use std::time::Duration;

use ratatui::style::Color;

use super::Bubble;
use super::BubbleAlignment;
use super::BubbleTone;
use crate::domain::models::ChatMessage;

fn lines_to_strings(bubble: &Bubble) -> Vec<String> {
    return bubble
        .as_lines()
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<Vec<String>>()
                .join("")
                .trim_end()
                .to_string();
        })
        .collect();
}

#[test]
fn it_creates_assistant_bubble_with_response_time() {
    let message = ChatMessage::assistant("Hi there!", Duration::from_millis(1234));
    let lines = lines_to_strings(&Bubble::from_message(&message, 50));

    assert_eq!(
        lines,
        vec![
            "╭Deep-Shiva (1.2s)──╮",
            "│ Hi there!         │",
            "╰───────────────────╯",
        ]
    );
}

#[test]
fn it_aligns_right() {
    let bubble = Bubble::new(
        "You",
        "Namaste",
        BubbleAlignment::Right,
        BubbleTone::User,
        30,
    );

    assert_eq!(
        lines_to_strings(&bubble),
        vec![
            "               ╭You──────╮",
            "               │ Namaste │",
            "               ╰─────────╯",
        ]
    );
}

#[test]
fn it_wraps_long_text() {
    let bubble = Bubble::notice(
        "The Char Dham yatra takes pilgrims to Yamunotri, Gangotri, Kedarnath and Badrinath.",
        30,
    );

    assert_eq!(
        lines_to_strings(&bubble),
        vec![
            "╭Deep-Shiva───────────────╮",
            "│ The Char Dham yatra     │",
            "│ takes pilgrims to       │",
            "│ Yamunotri, Gangotri,    │",
            "│ Kedarnath and           │",
            "│ Badrinath.              │",
            "╰─────────────────────────╯",
        ]
    );
}

#[test]
fn it_colours_errors_red() {
    let message = ChatMessage::apology(Duration::from_millis(300));
    let lines = Bubble::from_message(&message, 80).as_lines();

    assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    assert_eq!(lines[1].spans[1].style.fg, Some(Color::Red));
}

#[test]
fn it_survives_narrow_windows() {
    let bubble = Bubble::notice("Namaste from the hills", 6);
    assert!(!bubble.as_lines().is_empty());
}
