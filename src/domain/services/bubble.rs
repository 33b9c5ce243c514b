#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use crate::domain::models::wrap_text;
use crate::domain::models::ChatMessage;
use crate::domain::models::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleTone {
    User,
    Assistant,
    Error,
    Notice,
}

pub struct Bubble {
    alignment: BubbleAlignment,
    tone: BubbleTone,
    title: String,
    text: String,
    window_max_width: usize,
}

pub struct BubbleConfig {
    pub bubble_padding: usize,
    pub border_elements_length: usize,
    pub outer_padding_percentage: f32,
}

fn repeat_from_subtractions(text: &str, subtractions: Vec<usize>) -> String {
    let count = subtractions
        .into_iter()
        .map(|e| return e as i64)
        .reduce(|a, b| return a - b)
        .unwrap_or(0);

    if count <= 0 {
        return "".to_string();
    }

    return text.repeat(count as usize);
}

fn width(text: &str) -> usize {
    return text.chars().count();
}

impl Bubble {
    pub fn new(
        title: &str,
        text: &str,
        alignment: BubbleAlignment,
        tone: BubbleTone,
        window_max_width: usize,
    ) -> Bubble {
        return Bubble {
            alignment,
            tone,
            title: title.to_string(),
            text: text.to_string(),
            window_max_width,
        };
    }

    /// User messages sit on the right, replies on the left titled with their
    /// response time.
    pub fn from_message(message: &ChatMessage, window_max_width: usize) -> Bubble {
        if message.role == Role::User {
            return Bubble::new(
                &message.role.to_string(),
                &message.content,
                BubbleAlignment::Right,
                BubbleTone::User,
                window_max_width,
            );
        }

        let mut title = message.role.to_string();
        if let Some(label) = message.response_time_label() {
            title = format!("{title} ({label})");
        }

        let mut tone = BubbleTone::Assistant;
        if message.is_error() {
            tone = BubbleTone::Error;
        }

        return Bubble::new(
            &title,
            &message.content,
            BubbleAlignment::Left,
            tone,
            window_max_width,
        );
    }

    pub fn greeting(text: &str, window_max_width: usize) -> Bubble {
        return Bubble::new(
            &Role::Assistant.to_string(),
            text,
            BubbleAlignment::Left,
            BubbleTone::Assistant,
            window_max_width,
        );
    }

    pub fn notice(text: &str, window_max_width: usize) -> Bubble {
        return Bubble::new(
            &Role::Assistant.to_string(),
            text,
            BubbleAlignment::Left,
            BubbleTone::Notice,
            window_max_width,
        );
    }

    pub fn style_config() -> BubbleConfig {
        return BubbleConfig {
            // Unicode character border + padding.
            bubble_padding: 8,
            // left border + left padding + (text, not counted) + right padding + right border +
            // scrollbar.
            border_elements_length: 5,
            outer_padding_percentage: 0.04,
        };
    }

    pub fn as_lines(&self) -> Vec<Line<'static>> {
        let max_line_length = self.get_max_line_length();
        let lines = wrap_text(&self.text, max_line_length)
            .into_iter()
            .map(|line| return self.text_to_line(line, max_line_length))
            .collect();

        return self.wrap_lines_in_bubble(lines, max_line_length);
    }

    fn text_to_line(&self, text: String, max_line_length: usize) -> Line<'static> {
        let fill = repeat_from_subtractions(" ", vec![max_line_length, width(&text)]);
        let formatted_line_length = max_line_length + Bubble::style_config().bubble_padding;

        let wrapped_spans = vec![
            self.highlight_span("│ ".to_string()),
            Span::styled(text, self.text_style()),
            self.highlight_span(format!("{fill} │")),
        ];

        let outer_bubble_padding =
            repeat_from_subtractions(" ", vec![self.window_max_width, formatted_line_length]);

        if self.alignment == BubbleAlignment::Left {
            let mut line_spans = wrapped_spans;
            line_spans.push(Span::from(outer_bubble_padding));
            return Line::from(line_spans);
        }

        let mut line_spans = vec![Span::from(outer_bubble_padding)];
        line_spans.extend(wrapped_spans);

        return Line::from(line_spans);
    }

    fn get_max_line_length(&self) -> usize {
        let style_config = Bubble::style_config();
        // Add a minimum 4% of padding on the side.
        let min_bubble_padding_length = ((self.window_max_width as f32
            * style_config.outer_padding_percentage)
            .ceil()) as usize;

        // Border elements + minimum bubble padding.
        let line_border_width = style_config.border_elements_length + min_bubble_padding_length;
        let available = self.window_max_width.saturating_sub(line_border_width).max(1);

        let mut max_line_length = self.text.lines().map(width).max().unwrap_or(1);
        if max_line_length > available {
            max_line_length = available;
        }

        let title_length = width(&self.title);
        if max_line_length < title_length {
            max_line_length = title_length;
        }

        return max_line_length;
    }

    fn wrap_lines_in_bubble(
        &self,
        lines: Vec<Line<'static>>,
        max_line_length: usize,
    ) -> Vec<Line<'static>> {
        // Add 2 for the vertical bars, minus the title.
        let inner_bar = "─".repeat(max_line_length + 2 - width(&self.title));
        let top_bar = format!("╭{}{inner_bar}╮", self.title);
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));
        let bar_bubble_padding = repeat_from_subtractions(
            " ",
            vec![
                self.window_max_width,
                max_line_length,
                Bubble::style_config().bubble_padding,
            ],
        );

        if self.alignment == BubbleAlignment::Left {
            let mut res = vec![self.highlight_line(format!("{top_bar}{bar_bubble_padding}"))];
            res.extend(lines);
            res.push(self.highlight_line(format!("{bottom_bar}{bar_bubble_padding}")));
            return res;
        }

        let mut res = vec![self.highlight_line(format!("{bar_bubble_padding}{top_bar}"))];
        res.extend(lines);
        res.push(self.highlight_line(format!("{bar_bubble_padding}{bottom_bar}")));
        return res;
    }

    fn border_color(&self) -> Option<Color> {
        match self.tone {
            BubbleTone::User => return None,
            // Saffron
            BubbleTone::Assistant => return Some(Color::Rgb(255, 153, 51)),
            BubbleTone::Error => return Some(Color::Red),
            BubbleTone::Notice => return Some(Color::Cyan),
        }
    }

    fn text_style(&self) -> Style {
        if self.tone == BubbleTone::Error {
            return Style {
                fg: Some(Color::Red),
                ..Style::default()
            };
        }

        return Style::default();
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        return Span::styled(
            text,
            Style {
                fg: self.border_color(),
                ..Style::default()
            },
        );
    }

    fn highlight_line(&self, text: String) -> Line<'static> {
        return Line::from(self.highlight_span(text));
    }
}
