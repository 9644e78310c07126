use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use vitrine_core::content::FaqEntry;

use crate::theme::Theme;

/// FAQ accordion state.
///
/// Exclusive-open: opening an entry closes whichever one was open, and
/// activating the open entry closes it.
pub struct FaqState {
    entries: Vec<FaqEntry>,
    /// Cursor position
    pub selected: usize,
    /// Index of the expanded entry, if any
    pub open: Option<usize>,
    /// Question-line hit areas recorded at render time
    pub entry_areas: Vec<Rect>,
}

impl FaqState {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            selected: 0,
            open: None,
            entry_areas: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggle an entry: activating the open one closes it, opening one
    /// closes any other.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }

    pub fn expand_selected(&mut self) {
        if self.selected < self.entries.len() {
            self.open = Some(self.selected);
        }
    }
}

pub struct FaqWidget;

impl FaqWidget {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        faq: &mut FaqState,
        theme: &Theme,
        is_focused: bool,
    ) {
        faq.entry_areas.clear();

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };

        let block = Block::default()
            .title(" FAQ ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let mut y = inner.y;
        for (i, entry) in faq.entries.iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }

            let is_open = faq.open == Some(i);
            let marker = if is_open { "▾" } else { "▸" };
            let style = if i == faq.selected && is_focused {
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };

            let question_area = Rect::new(inner.x, y, inner.width, 1);
            let line = Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(theme.accent)),
                Span::styled(entry.question.clone(), style),
            ]);
            frame.render_widget(Paragraph::new(line), question_area);
            faq.entry_areas.push(question_area);
            y += 1;

            if is_open {
                let wrap_width = inner.width.saturating_sub(2) as usize;
                for answer_line in wrap_text(&entry.answer, wrap_width) {
                    if y >= inner.bottom() {
                        break;
                    }
                    frame.render_widget(
                        Paragraph::new(Span::styled(
                            answer_line,
                            Style::default().fg(theme.grey1),
                        )),
                        Rect::new(inner.x + 2, y, inner.width.saturating_sub(2), 1),
                    );
                    y += 1;
                }
            }
        }
    }
}

/// Greedy word wrap to a cell width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line = word.to_string();
        } else if UnicodeWidthStr::width(line.as_str()) + 1 + UnicodeWidthStr::width(word) <= width
        {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<FaqEntry> {
        (0..3)
            .map(|i| FaqEntry {
                question: format!("Question {}", i),
                answer: format!("Answer {}", i),
            })
            .collect()
    }

    #[test]
    fn test_exclusive_open() {
        let mut faq = FaqState::new(entries());
        faq.toggle(0);
        assert_eq!(faq.open, Some(0));
        // Opening another entry closes the first
        faq.toggle(2);
        assert_eq!(faq.open, Some(2));
    }

    #[test]
    fn test_toggle_open_entry_closes_it() {
        let mut faq = FaqState::new(entries());
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open, None);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut faq = FaqState::new(entries());
        faq.toggle(10);
        assert_eq!(faq.open, None);
    }

    #[test]
    fn test_selection_saturates() {
        let mut faq = FaqState::new(entries());
        faq.select_prev();
        assert_eq!(faq.selected, 0);
        for _ in 0..10 {
            faq.select_next();
        }
        assert_eq!(faq.selected, 2);
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| UnicodeWidthStr::width(l.as_str()) <= 15));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert!(wrap_text("anything", 0).is_empty());
    }
}
