use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode, Panel};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
            Mode::Contact => "CONTACT",
        };

        let focus_str = match app.focus {
            Panel::Section(i) => app
                .sections
                .get(i)
                .map(|s| s.section.title.as_str())
                .unwrap_or("Showcase"),
            Panel::Faq => "FAQ",
        };

        let product_count: usize = app.sections.iter().map(|s| s.section.products.len()).sum();

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {} | Sections: {} | Products: {}",
                mode_str,
                focus_str,
                app.sections.len(),
                product_count
            )
        };

        let help_hint = " q:quit j/k:panels h/l:slide o:order c:contact ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey1).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
