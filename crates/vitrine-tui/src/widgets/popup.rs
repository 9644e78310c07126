use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use vitrine_core::content::StoreInfo;
use vitrine_core::ContactConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the help overlay with the key bindings
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let lines = vec![
            key_line("j / k", "move between sections", theme),
            key_line("h / l", "previous / next slide", theme),
            key_line("1-9", "jump to a dot position", theme),
            key_line("Enter", "expand / collapse FAQ entry", theme),
            key_line("o", "order the highlighted product", theme),
            key_line("c", "contact details", theme),
            key_line("q", "quit", theme),
        ];
        Self::render_box(frame, " Help ", lines, theme);
    }

    /// Render the contact overlay
    pub fn render_contact(
        frame: &mut Frame,
        store: &StoreInfo,
        contact: &ContactConfig,
        theme: &Theme,
    ) {
        let mut lines = vec![Line::from(Span::styled(
            store.name.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::default());

        if let Some(phone) = &contact.whatsapp_phone {
            lines.push(detail_line("WhatsApp", &format!("+{}", phone), theme));
        }
        if let Some(email) = &contact.business_email {
            lines.push(detail_line("Email", email, theme));
        }
        lines.push(detail_line("Inquiries", "vitrine inquire --help", theme));

        Self::render_box(frame, " Contact ", lines, theme);
    }

    fn render_box(frame: &mut Frame, title: &str, mut lines: Vec<Line>, theme: &Theme) {
        let area = frame.area();

        let content_height = lines.len() as u16;
        let popup_width = 52u16.min(area.width.saturating_sub(4));
        let popup_height = (content_height + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey0),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn key_line<'a>(key: &'a str, description: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:<8}", key),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(description, Style::default().fg(theme.fg1)),
    ])
}

fn detail_line<'a>(label: &str, value: &str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:<10}", label),
            Style::default().fg(theme.grey1),
        ),
        Span::styled(value.to_string(), Style::default().fg(theme.fg0)),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
