use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use vitrine_core::content::StoreInfo;

use crate::theme::Theme;

pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, store: &StoreInfo, theme: &Theme) {
        let mut spans = vec![Span::styled(
            store.name.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )];
        if let Some(tagline) = &store.tagline {
            spans.push(Span::styled(
                format!("  —  {}", tagline),
                Style::default().fg(theme.grey1),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.bg1))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
