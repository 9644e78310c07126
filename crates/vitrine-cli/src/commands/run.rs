use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use vitrine_core::{inquiry, AppConfig, Showcase};
use vitrine_tui::{
    app::{App, Mode, Panel},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    load_theme,
    widgets::{
        CarouselWidget, FaqWidget, HeaderWidget, PopupWidget, StatusBarWidget, SECTION_HEIGHT,
    },
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Load showcase content first: every carousel and listener below is
    // wired strictly after the content exists.
    let showcase = Showcase::load_or_sample(&config.content_path()).await?;
    tracing::info!("Loaded showcase with {} sections", showcase.sections.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("vitrine")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    // Create app state
    let mut app = App::new(config.clone(), theme, showcase);

    // Mount: measure against the initial terminal size, then arm autoplay
    let size = terminal.size()?;
    app.remeasure_all(size.width);
    app.start_autoplay(Instant::now());

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    // Main loop
    loop {
        terminal.draw(|frame| ui(frame, &mut app))?;

        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, Instant::now());
                }
                AppEvent::Resize(width, _) => {
                    // Reflow every carousel against the new width
                    app.remeasure_all(width);
                }
                AppEvent::Tick => {
                    app.poll_autoplay(Instant::now());
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Header, one row per section, FAQ, status bar
    let mut constraints = vec![Constraint::Length(1)];
    for _ in &app.sections {
        constraints.push(Constraint::Length(SECTION_HEIGHT));
    }
    constraints.push(Constraint::Min(if app.faq.is_empty() { 0 } else { 3 }));
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    HeaderWidget::render(frame, rows[0], &app.store, &app.theme);

    let theme = app.theme.clone();
    let focus = app.focus;
    for (i, state) in app.sections.iter_mut().enumerate() {
        CarouselWidget::render(frame, rows[1 + i], state, &theme, focus == Panel::Section(i));
    }

    if !app.faq.is_empty() {
        let faq_row = rows[1 + app.sections.len()];
        FaqWidget::render(frame, faq_row, &mut app.faq, &theme, focus == Panel::Faq);
    }

    StatusBarWidget::render(frame, rows[rows.len() - 1], app);

    // Render overlays on top
    match app.mode {
        Mode::Help => PopupWidget::render_help(frame, &theme),
        Mode::Contact => PopupWidget::render_contact(frame, &app.store, &app.config.contact, &theme),
        Mode::Normal => {}
    }
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveDown => app.move_down(),
        Action::MoveUp => app.move_up(),
        Action::FocusNext => app.focus_next(),
        Action::FocusPrev => app.focus_prev(),
        Action::MoveLeft => match app.focus {
            Panel::Section(_) => {
                if let Some(state) = app.focused_section_mut() {
                    state.carousel.previous();
                }
            }
            Panel::Faq => app.faq.collapse(),
        },
        Action::MoveRight => match app.focus {
            Panel::Section(_) => {
                if let Some(state) = app.focused_section_mut() {
                    state.carousel.next();
                }
            }
            Panel::Faq => app.faq.expand_selected(),
        },
        Action::GoToDot(index) => {
            if let Some(state) = app.focused_section_mut() {
                // Only in-range dot positions exist as targets
                if index <= state.carousel.layout().max_index {
                    state.carousel.go_to(index as isize);
                }
            }
        }
        Action::Select => match app.focus {
            Panel::Faq => app.faq.toggle_selected(),
            Panel::Section(_) => order_current(app),
        },
        Action::Order => order_current(app),
        Action::Help => app.mode = Mode::Help,
        Action::Contact => app.mode = Mode::Contact,
        Action::ExitMode => {
            app.mode = Mode::Normal;
            app.clear_status();
        }
        Action::None => {}
    }
}

/// Open the WhatsApp order link for the product at the leading visible
/// position of the focused section
fn order_current(app: &mut App) {
    let Some(phone) = app.config.contact.whatsapp_phone.clone() else {
        app.set_status("No WhatsApp number configured (contact.whatsapp_phone)");
        return;
    };
    let Some(product) = app
        .focused_section()
        .and_then(|state| state.current_product())
        .cloned()
    else {
        return;
    };

    match inquiry::whatsapp_order_url(&phone, &product) {
        Ok(url) => match open::that(url.as_str()) {
            Ok(()) => app.set_status(format!("Opening WhatsApp order for \"{}\"", product.name)),
            Err(e) => app.set_status(format!("Could not open browser: {}", e)),
        },
        Err(e) => app.set_status(format!("Could not build order link: {}", e)),
    }
}
