use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use vitrine_core::content::Product;

use crate::app::SectionState;
use crate::theme::Theme;

/// Rendered width of one product card, in cells
pub const CARD_WIDTH: u16 = 26;
/// Spacing between adjacent cards, in cells
pub const CARD_GAP: u16 = 2;
/// Width of the prev/next arrow column on each side of the track
const ARROW_COL: u16 = 2;
/// Total height of one section (block borders + cards + dot row)
pub const SECTION_HEIGHT: u16 = 10;

/// Live measurements fed into the carousel layout calculator
#[derive(Debug, Clone, Copy)]
pub struct TrackMeasurements {
    pub item_width: f64,
    pub gap: f64,
    pub viewport_width: f64,
}

pub struct CarouselWidget;

impl CarouselWidget {
    /// Measure the card width, gap, and track viewport for a given
    /// terminal width. Must mirror the geometry used by `render`.
    pub fn measure(total_width: u16) -> TrackMeasurements {
        let inner = total_width.saturating_sub(2);
        let track = inner.saturating_sub(2 * ARROW_COL);
        TrackMeasurements {
            item_width: CARD_WIDTH as f64,
            gap: CARD_GAP as f64,
            viewport_width: track as f64,
        }
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &mut SectionState,
        theme: &Theme,
        is_focused: bool,
    ) {
        state.track_area = None;
        state.prev_area = None;
        state.next_area = None;
        state.dot_areas.clear();

        if area.width < 2 * ARROW_COL + 4 || area.height < 4 {
            return;
        }

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };

        let title = if state.carousel.is_hovered() {
            format!(" {} [paused] ", state.section.title)
        } else {
            format!(" {} ", state.section.title)
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Cards above, one dot row below
        let cards = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
        let dots_row = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);

        let track = Rect::new(
            inner.x + ARROW_COL,
            cards.y,
            inner.width.saturating_sub(2 * ARROW_COL),
            cards.height,
        );
        state.track_area = Some(track);

        Self::render_arrows(frame, inner, cards, state, theme, is_focused);
        Self::render_cards(frame, track, state, theme, is_focused);
        Self::render_dots(frame, dots_row, track, state, theme);
    }

    fn render_arrows(
        frame: &mut Frame,
        inner: Rect,
        cards: Rect,
        state: &mut SectionState,
        theme: &Theme,
        is_focused: bool,
    ) {
        let arrow_style = if is_focused {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.grey1)
        };

        let prev = Rect::new(inner.x, cards.y, ARROW_COL, cards.height);
        let next = Rect::new(
            inner.right().saturating_sub(ARROW_COL),
            cards.y,
            ARROW_COL,
            cards.height,
        );

        let mid_y = cards.y + cards.height / 2;
        frame.render_widget(
            Paragraph::new("‹").style(arrow_style),
            Rect::new(prev.x, mid_y, 1, 1),
        );
        frame.render_widget(
            Paragraph::new("›").style(arrow_style).alignment(Alignment::Right),
            Rect::new(next.x, mid_y, ARROW_COL, 1),
        );

        state.prev_area = Some(prev);
        state.next_area = Some(next);
    }

    /// Draw the visible card window: each card sits at its track offset
    /// minus the current offset, and whatever falls past the viewport
    /// edge is cropped.
    fn render_cards(
        frame: &mut Frame,
        track: Rect,
        state: &mut SectionState,
        theme: &Theme,
        is_focused: bool,
    ) {
        if state.section.products.is_empty() {
            let empty = Paragraph::new("No products in this section yet")
                .style(Style::default().fg(theme.grey0))
                .alignment(Alignment::Center);
            frame.render_widget(empty, Rect::new(track.x, track.y + track.height / 2, track.width, 1));
            return;
        }

        let offset = state.carousel.offset();
        let current = state.carousel.current_index();

        for (i, product) in state.section.products.iter().enumerate() {
            let x_rel = state.carousel.offset_for(i) - offset;
            if x_rel < 0.0 {
                continue;
            }
            if x_rel >= track.width as f64 {
                break;
            }
            let x = track.x + x_rel.round() as u16;
            let width = CARD_WIDTH.min(track.right().saturating_sub(x));
            if width < 4 {
                break;
            }
            let card_area = Rect::new(x, track.y, width, track.height);
            Self::render_card(frame, card_area, product, theme, is_focused && i == current);
        }
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        product: &Product,
        theme: &Theme,
        highlighted: bool,
    ) {
        let border_style = if highlighted {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.grey0)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                truncate(&product.name, inner.width),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate(&product.price, inner.width),
                Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(tag) = &product.tag {
            lines.push(Line::from(Span::styled(
                truncate(&format!("· {}", tag), inner.width),
                Style::default().fg(theme.badge),
            )));
        }
        if let Some(description) = &product.description {
            lines.push(Line::from(Span::styled(
                truncate(description, inner.width),
                Style::default().fg(theme.grey1),
            )));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Dot indicators centered under the track; falls back to a compact
    /// "current/total" readout when the row does not fit.
    fn render_dots(
        frame: &mut Frame,
        dots_row: Rect,
        track: Rect,
        state: &mut SectionState,
        theme: &Theme,
    ) {
        let actives: Vec<bool> = state.carousel.dots().iter().map(|d| d.active).collect();
        if actives.is_empty() {
            return;
        }

        let count = actives.len() as u16;
        let total_width = count * 2 - 1;

        if total_width > track.width {
            let compact = format!(
                "{}/{}",
                state.carousel.current_index() + 1,
                actives.len()
            );
            frame.render_widget(
                Paragraph::new(compact)
                    .style(Style::default().fg(theme.grey1))
                    .alignment(Alignment::Center),
                Rect::new(track.x, dots_row.y, track.width, 1),
            );
            return;
        }

        let start_x = track.x + (track.width - total_width) / 2;
        let mut spans = Vec::new();
        for (i, active) in actives.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let (symbol, style) = if *active {
                ("●", Style::default().fg(theme.accent))
            } else {
                ("○", Style::default().fg(theme.grey0))
            };
            spans.push(Span::styled(symbol, style));
            state
                .dot_areas
                .push(Rect::new(start_x + i as u16 * 2, dots_row.y, 1, 1));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(start_x, dots_row.y, total_width, 1),
        );
    }
}

/// Truncate a string to a cell width, appending an ellipsis when cut
fn truncate(s: &str, max_width: u16) -> String {
    let max = max_width as usize;
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_matches_render_geometry() {
        let m = CarouselWidget::measure(120);
        assert!((m.item_width - CARD_WIDTH as f64).abs() < f64::EPSILON);
        assert!((m.gap - CARD_GAP as f64).abs() < f64::EPSILON);
        // borders (2) + arrow columns (2 * 2)
        assert!((m.viewport_width - 114.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_tiny_terminal() {
        let m = CarouselWidget::measure(3);
        assert!((m.viewport_width - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer product name", 10), "a longer …");
        assert_eq!(truncate("exact", 5), "exact");
    }
}
