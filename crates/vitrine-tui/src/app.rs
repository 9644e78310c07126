use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use vitrine_core::content::{Product, Section, Showcase, StoreInfo};
use vitrine_core::AppConfig;

use crate::carousel::Carousel;
use crate::theme::Theme;
use crate::widgets::{CarouselWidget, FaqState};

/// Currently focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Section(usize),
    Faq,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
    /// Contact overlay
    Contact,
}

/// One showcase section with its carousel and the hit areas recorded at
/// render time (used for mouse hover and click dispatch)
pub struct SectionState {
    pub section: Section,
    pub carousel: Carousel,
    pub track_area: Option<Rect>,
    pub prev_area: Option<Rect>,
    pub next_area: Option<Rect>,
    pub dot_areas: Vec<Rect>,
}

impl SectionState {
    pub fn new(section: Section, config: &AppConfig) -> Self {
        let carousel = Carousel::new(section.products.len(), &config.carousel);
        Self {
            section,
            carousel,
            track_area: None,
            prev_area: None,
            next_area: None,
            dot_areas: Vec::new(),
        }
    }

    /// The product at the leading visible position
    pub fn current_product(&self) -> Option<&Product> {
        self.section.products.get(self.carousel.current_index())
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active theme
    pub theme: Theme,
    /// Store identity for the header and contact overlay
    pub store: StoreInfo,
    /// Carousel sections, one per content section
    pub sections: Vec<SectionState>,
    /// FAQ accordion state
    pub faq: FaqState,
    /// Currently focused panel
    pub focus: Panel,
    /// Current application mode
    pub mode: Mode,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Section whose track the pointer is currently over
    hovered_section: Option<usize>,
}

impl App {
    /// Build the app from loaded showcase content. Callers await the
    /// content load first, so every carousel below is constructed against
    /// content that is guaranteed present.
    pub fn new(config: Arc<AppConfig>, theme: Theme, showcase: Showcase) -> Self {
        let sections: Vec<SectionState> = showcase
            .sections
            .into_iter()
            .map(|section| SectionState::new(section, &config))
            .collect();
        let focus = if sections.is_empty() {
            Panel::Faq
        } else {
            Panel::Section(0)
        };

        Self {
            config,
            theme,
            store: showcase.store,
            sections,
            faq: FaqState::new(showcase.faq),
            focus,
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
            hovered_section: None,
        }
    }

    /// Recompute every carousel's layout from the terminal width.
    /// Called once on mount and on every resize event.
    pub fn remeasure_all(&mut self, terminal_width: u16) {
        let m = CarouselWidget::measure(terminal_width);
        for state in &mut self.sections {
            // An empty track measures an item width of zero
            let item_width = if state.section.products.is_empty() {
                0.0
            } else {
                m.item_width
            };
            state
                .carousel
                .remeasure(item_width, Some(m.gap), m.viewport_width);
        }
    }

    /// Arm every section's autoplay timer
    pub fn start_autoplay(&mut self, now: Instant) {
        for state in &mut self.sections {
            state.carousel.start_autoplay(now);
        }
    }

    /// Advance any carousel whose autoplay interval has elapsed.
    /// Returns true when at least one advanced.
    pub fn poll_autoplay(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        for state in &mut self.sections {
            advanced |= state.carousel.poll_autoplay(now);
        }
        advanced
    }

    /// Get the focused section, if a section is focused
    pub fn focused_section(&self) -> Option<&SectionState> {
        match self.focus {
            Panel::Section(i) => self.sections.get(i),
            Panel::Faq => None,
        }
    }

    /// Get the focused section mutably
    pub fn focused_section_mut(&mut self) -> Option<&mut SectionState> {
        match self.focus {
            Panel::Section(i) => self.sections.get_mut(i),
            Panel::Faq => None,
        }
    }

    /// Cycle focus to the next panel
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Panel::Section(i) if i + 1 < self.sections.len() => Panel::Section(i + 1),
            Panel::Section(_) if !self.faq.is_empty() => Panel::Faq,
            Panel::Section(_) => Panel::Section(0),
            Panel::Faq if !self.sections.is_empty() => Panel::Section(0),
            Panel::Faq => Panel::Faq,
        };
    }

    /// Cycle focus to the previous panel
    pub fn focus_prev(&mut self) {
        let last_section = self.sections.len().saturating_sub(1);
        self.focus = match self.focus {
            Panel::Section(i) if i > 0 => Panel::Section(i - 1),
            Panel::Section(_) if !self.faq.is_empty() => Panel::Faq,
            Panel::Section(_) => Panel::Section(last_section),
            Panel::Faq if !self.sections.is_empty() => Panel::Section(last_section),
            Panel::Faq => Panel::Faq,
        };
    }

    /// Move down: between panels, or within the FAQ list
    pub fn move_down(&mut self) {
        match self.focus {
            Panel::Section(_) => self.focus_next(),
            Panel::Faq => self.faq.select_next(),
        }
    }

    /// Move up: between panels, or within the FAQ list
    pub fn move_up(&mut self) {
        match self.focus {
            Panel::Section(_) => self.focus_prev(),
            Panel::Faq => {
                if self.faq.selected == 0 {
                    self.focus_prev();
                } else {
                    self.faq.select_prev();
                }
            }
        }
    }

    /// Dispatch a mouse event against the hit areas recorded at render time
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => self.update_hover(mouse.column, mouse.row, now),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Track pointer enter/leave edges over the carousel tracks.
    /// Entering suspends that section's autoplay; leaving resumes it.
    fn update_hover(&mut self, column: u16, row: u16, now: Instant) {
        let pos = Position::new(column, row);
        let over = self
            .sections
            .iter()
            .position(|s| s.track_area.is_some_and(|area| area.contains(pos)));

        if over == self.hovered_section {
            return;
        }
        if let Some(prev) = self.hovered_section {
            if let Some(state) = self.sections.get_mut(prev) {
                state.carousel.pointer_leave(now);
            }
        }
        if let Some(idx) = over {
            self.sections[idx].carousel.pointer_enter();
        }
        self.hovered_section = over;
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);

        for (i, state) in self.sections.iter_mut().enumerate() {
            if state.prev_area.is_some_and(|area| area.contains(pos)) {
                state.carousel.previous();
                self.focus = Panel::Section(i);
                return;
            }
            if state.next_area.is_some_and(|area| area.contains(pos)) {
                state.carousel.next();
                self.focus = Panel::Section(i);
                return;
            }
            if let Some(dot) = state.dot_areas.iter().position(|area| area.contains(pos)) {
                state.carousel.go_to(dot as isize);
                self.focus = Panel::Section(i);
                return;
            }
        }

        if let Some(entry) = self
            .faq
            .entry_areas
            .iter()
            .position(|area| area.contains(pos))
        {
            self.faq.selected = entry;
            self.faq.toggle(entry);
            self.focus = Panel::Faq;
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Showcase::sample(),
        )
    }

    #[test]
    fn test_focus_cycles_through_sections_and_faq() {
        let mut app = test_app();
        let n = app.sections.len();
        assert_eq!(app.focus, Panel::Section(0));

        for i in 1..n {
            app.focus_next();
            assert_eq!(app.focus, Panel::Section(i));
        }
        app.focus_next();
        assert_eq!(app.focus, Panel::Faq);
        app.focus_next();
        assert_eq!(app.focus, Panel::Section(0));

        app.focus_prev();
        assert_eq!(app.focus, Panel::Faq);
    }

    #[test]
    fn test_hover_edges_suspend_and_resume() {
        let mut app = test_app();
        app.remeasure_all(120);
        app.start_autoplay(Instant::now());
        app.sections[0].track_area = Some(Rect::new(0, 0, 50, 8));
        app.sections[1].track_area = Some(Rect::new(0, 10, 50, 8));

        let now = Instant::now();
        app.update_hover(5, 3, now);
        assert!(app.sections[0].carousel.is_hovered());
        assert!(!app.sections[0].carousel.is_autoplaying());
        assert!(app.sections[1].carousel.is_autoplaying());

        // Moving within the same track is not a new edge
        app.update_hover(6, 4, now);
        assert!(app.sections[0].carousel.is_hovered());

        // Moving to the other section's track swaps the suspension
        app.update_hover(5, 12, now);
        assert!(!app.sections[0].carousel.is_hovered());
        assert!(app.sections[0].carousel.is_autoplaying());
        assert!(app.sections[1].carousel.is_hovered());
        assert!(!app.sections[1].carousel.is_autoplaying());

        // Leaving all tracks resumes everything
        app.update_hover(100, 40, now);
        assert!(!app.sections[1].carousel.is_hovered());
        assert!(app.sections[1].carousel.is_autoplaying());
    }

    #[test]
    fn test_click_dispatch() {
        let mut app = test_app();
        app.remeasure_all(120);
        app.sections[1].next_area = Some(Rect::new(60, 10, 2, 6));
        app.sections[1].dot_areas = vec![Rect::new(20, 17, 1, 1), Rect::new(23, 17, 1, 1)];

        app.handle_click(60, 12);
        assert_eq!(app.sections[1].carousel.current_index(), 1);
        assert_eq!(app.focus, Panel::Section(1));

        app.handle_click(20, 17);
        assert_eq!(app.sections[1].carousel.current_index(), 0);
    }
}
