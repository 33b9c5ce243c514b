use std::collections::HashMap;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use crate::domain::models::ChatMessage;

#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

/// Something shown in the transcript pane. Greetings and notices come from
/// the app itself and are never stored.
pub enum BubbleSource<'a> {
    Greeting(&'a str),
    Message(&'a ChatMessage),
    Notice(&'a str),
}

impl BubbleSource<'_> {
    fn to_bubble(&self, line_width: usize) -> Bubble {
        match self {
            BubbleSource::Greeting(text) => return Bubble::greeting(text, line_width),
            BubbleSource::Message(message) => return Bubble::from_message(message, line_width),
            BubbleSource::Notice(text) => return Bubble::notice(text, line_width),
        }
    }

    fn fingerprint(&self) -> String {
        match self {
            BubbleSource::Greeting(text) => return format!("greeting:{text}"),
            BubbleSource::Message(message) => {
                return format!("{}:{}", message.timestamp.timestamp_millis(), message.content)
            }
            BubbleSource::Notice(text) => return format!("notice:{text}"),
        }
    }
}

struct BubbleCacheEntry {
    fingerprint: String,
    lines: Vec<Line<'static>>,
}

#[derive(Default)]
pub struct BubbleList {
    cache: HashMap<usize, BubbleCacheEntry>,
    line_width: usize,
    lines_len: usize,
}

impl BubbleList {
    pub fn new() -> BubbleList {
        return BubbleList::default();
    }

    pub fn set_sources(&mut self, sources: &[BubbleSource], line_width: usize) {
        if self.line_width != line_width {
            self.cache.clear();
            self.line_width = line_width;
        }
        self.cache.retain(|idx, _| return *idx < sources.len());

        self.lines_len = sources
            .iter()
            .enumerate()
            .map(|(idx, source)| {
                let fingerprint = source.fingerprint();
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if cache_entry.fingerprint == fingerprint {
                        return cache_entry.lines.len();
                    }
                }

                let bubble_lines = source.to_bubble(line_width).as_lines();
                let bubble_line_len = bubble_lines.len();
                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        fingerprint,
                        lines: bubble_lines,
                    },
                );

                return bubble_line_len;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn is_empty(&self) -> bool {
        return self.lines_len == 0;
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: usize) {
        let mut indexes: Vec<usize> = self.cache.keys().cloned().collect();
        indexes.sort();
        let lines: Vec<Line> = indexes
            .iter()
            .filter_map(|idx| return self.cache.get(idx))
            .flat_map(|entry| return entry.lines.to_owned())
            .collect();

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default())
                .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
            rect,
        );
    }
}
