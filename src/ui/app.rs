//! Main application: terminal lifecycle, event loop, key handling, drawing.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::card::{songs, Card};
use crate::config::{self, Config};
use crate::share::Theme;
use crate::ui::audio::{MusicBackend, SilentBackend};
use crate::ui::clipboard;
use crate::ui::components::{Confetti, Snowfield, StatusBar, TextInputState};
use crate::ui::events::{AppEvent, Focus};
use crate::ui::theme;

/// How long a transient notice ("Copied ✅") stays on screen.
const NOTICE_TTL: Duration = Duration::from_millis(1100);

const SUBTITLE_COMPOSING: &str = "Make it personal, then share it.";
const SUBTITLE_REVEALED: &str = "Boom. Your greeting is ready to send. 😄";

/// Main application state
pub struct App {
    config: Config,
    /// The canonical card state
    card: Card,
    /// Which text field has focus
    focus: Focus,
    to_input: TextInputState,
    from_input: TextInputState,
    message_input: TextInputState,
    snow: Snowfield,
    confetti: Confetti,
    music: Box<dyn MusicBackend + Send>,
    subtitle: &'static str,
    /// Transient action feedback plus its error flag
    notice: Option<(String, bool)>,
    /// Bumped per notice so stale expiry timers are ignored
    notice_seq: u64,
    should_quit: bool,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        theme::set_theme(config.theme);

        Self {
            card: Card::new(config.base_url.clone(), config.theme),
            snow: Snowfield::new(config.snowflakes),
            confetti: Confetti::new(),
            music: Box::new(SilentBackend),
            focus: Focus::To,
            to_input: TextInputState::new(),
            from_input: TextInputState::new(),
            message_input: TextInputState::new(),
            subtitle: SUBTITLE_COMPOSING,
            notice: None,
            notice_seq: 0,
            should_quit: false,
            event_tx,
            event_rx,
            config,
        }
    }

    /// Apply a shared URL or bare token to the card, syncing the editor
    /// fields and running the theme side effects for any theme it carried.
    pub fn open_shared_link(&mut self, link: &str) {
        let Some(applied) = self.card.apply_from_link(link) else {
            return;
        };

        self.to_input.set(self.card.to());
        self.from_input.set(self.card.from_name());
        self.message_input.set(self.card.message());

        if let Some(applied_theme) = applied.theme {
            theme::set_theme(applied_theme);
            persist_theme(applied_theme);
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input + animation tick (~60fps)
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            self.handle_key_event(key);
                        }
                    }

                    let area = terminal.get_frame().area();
                    if self.card.snow_enabled() {
                        self.snow.tick();
                    }
                    self.confetti.tick(area.height);
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ClearNotice(seq) => {
                if seq == self.notice_seq {
                    self.notice = None;
                }
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                }
                KeyCode::Char('t') => {
                    let next = self.card.toggle_theme();
                    theme::set_theme(next);
                    persist_theme(next);
                }
                KeyCode::Char('s') => {
                    self.card.toggle_snow();
                }
                KeyCode::Char('p') => {
                    if self.card.toggle_music() {
                        self.music.start(self.card.song());
                    } else {
                        self.music.stop();
                    }
                }
                KeyCode::Char('g') => {
                    self.card.next_song();
                    if self.card.music_on() {
                        self.music.start(self.card.song());
                    }
                }
                KeyCode::Char('y') => self.copy_link(),
                KeyCode::Char('e') => self.share(),
                KeyCode::Char('d') => self.reveal(),
                KeyCode::Char('b') => {
                    self.burst(self.config.confetti_particles);
                }
                KeyCode::Char('r') => self.reset(),
                // Readline-style editing in the focused field
                KeyCode::Char('w') => {
                    self.focused_input_mut().delete_word();
                    self.sync_focused_field();
                }
                KeyCode::Char('u') => {
                    self.focused_input_mut().delete_to_start();
                    self.sync_focused_field();
                }
                KeyCode::Char('k') => {
                    self.focused_input_mut().delete_to_end();
                    self.sync_focused_field();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                // The message is multi-line; Enter elsewhere advances focus.
                if self.focus == Focus::Message {
                    self.focused_input_mut().insert_char('\n');
                    self.sync_focused_field();
                } else {
                    self.focus = self.focus.next();
                }
            }
            KeyCode::Char(c) => {
                self.focused_input_mut().insert_char(c);
                self.sync_focused_field();
            }
            KeyCode::Backspace => {
                self.focused_input_mut().delete_char();
                self.sync_focused_field();
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete_forward();
                self.sync_focused_field();
            }
            KeyCode::Left => self.focused_input_mut().move_left(),
            KeyCode::Right => self.focused_input_mut().move_right(),
            KeyCode::Home => self.focused_input_mut().move_start(),
            KeyCode::End => self.focused_input_mut().move_end(),
            _ => {}
        }
    }

    fn focused_input_mut(&mut self) -> &mut TextInputState {
        match self.focus {
            Focus::To => &mut self.to_input,
            Focus::From => &mut self.from_input,
            Focus::Message => &mut self.message_input,
        }
    }

    /// Push the focused editor's value into the card, which refreshes the
    /// share link as a side effect.
    fn sync_focused_field(&mut self) {
        match self.focus {
            Focus::To => self.card.set_to(self.to_input.value()),
            Focus::From => self.card.set_from(self.from_input.value()),
            Focus::Message => self.card.set_message(self.message_input.value()),
        }
    }

    fn copy_link(&mut self) {
        match clipboard::copy_text(self.card.share_link()) {
            Ok(()) => self.set_notice("Copied ✅", false),
            Err(e) => {
                tracing::warn!(error = %e, "Copy link failed");
                self.set_notice("Copy failed", true);
            }
        }
    }

    /// Share = copy the composed greeting together with the link.
    fn share(&mut self) {
        let text = format!("{}\n\n{}", self.card.greeting(), self.card.share_link());
        match clipboard::copy_text(&text) {
            Ok(()) => self.set_notice("Link Copied ✅", false),
            Err(e) => {
                tracing::warn!(error = %e, "Share failed");
                self.set_notice("Share failed", true);
            }
        }
    }

    fn reveal(&mut self) {
        if self.card.reveal() {
            self.subtitle = SUBTITLE_REVEALED;
            self.burst(220);
        }
    }

    fn reset(&mut self) {
        self.card.reset();
        self.music.stop();
        self.to_input.clear();
        self.from_input.clear();
        self.message_input.clear();
        self.focus = Focus::To;
        self.subtitle = SUBTITLE_COMPOSING;
        self.burst(60);
    }

    fn burst(&mut self, count: usize) {
        // Burst geometry comes from the last known terminal size; the
        // renderer clips anything that lands outside.
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        self.confetti.burst(count, width, height);
    }

    fn set_notice(&mut self, text: &str, is_error: bool) {
        self.notice = Some((text.to_string(), is_error));
        self.notice_seq += 1;
        let seq = self.notice_seq;
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            let _ = tx.send(AppEvent::ClearNotice(seq));
        });
    }

    // ------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------

    fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        self.snow.resize(area.width, area.height);

        // Base wash
        f.render_widget(
            Block::default().style(Style::default().bg(theme::bg_base())),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(9),
                Constraint::Min(7),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(f, chunks[0]);
        self.draw_form(f, chunks[1]);
        self.draw_preview(f, chunks[2]);
        self.draw_share_link(f, chunks[3]);
        self.draw_status_bar(f, chunks[4]);

        // FX overlay over everything
        if self.card.snow_enabled() {
            self.snow.render(area, f.buffer_mut());
        }
        self.confetti.render(area, f.buffer_mut());
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let title = Line::from(Span::styled(
            "🎄 Tidings",
            Style::default()
                .fg(theme::accent_primary())
                .add_modifier(Modifier::BOLD),
        ));
        let subtitle = Line::from(Span::styled(
            self.subtitle,
            Style::default().fg(theme::text_secondary()),
        ));
        f.render_widget(
            Paragraph::new(vec![title, subtitle]).alignment(Alignment::Center),
            area,
        );
    }

    fn draw_form(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::text_muted()))
            .title(" Card ")
            .title_style(Style::default().fg(theme::text_secondary()))
            .style(Style::default().bg(theme::bg_surface()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_field(f, rows[0], "To:", &self.to_input, "recipient", Focus::To);
        self.draw_field(f, rows[1], "From:", &self.from_input, "you", Focus::From);
        self.draw_field(
            f,
            rows[2],
            "Message:",
            &self.message_input,
            "write something warm…",
            Focus::Message,
        );
        self.draw_counter(f, rows[3]);
    }

    fn draw_field(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        input: &TextInputState,
        placeholder: &str,
        field: Focus,
    ) {
        let focused = self.focus == field;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(area);

        let label_color = if focused {
            theme::accent_primary()
        } else {
            theme::text_secondary()
        };
        f.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(label_color))),
            cols[0],
        );

        input.render_with_placeholder(
            cols[1],
            f.buffer_mut(),
            Style::default().fg(theme::text_primary()),
            placeholder,
            Style::default().fg(theme::text_muted()),
            focused,
        );
    }

    fn draw_counter(&self, f: &mut Frame, area: Rect) {
        let chars = self.card.message_chars();
        let limit = self.config.message_limit;
        // Soft limit: the counter turns warning-colored but never blocks input
        let color = if chars > limit {
            theme::accent_warning()
        } else {
            theme::text_muted()
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("{chars}/{limit}"),
                Style::default().fg(color),
            ))
            .alignment(Alignment::Right),
            area,
        );
    }

    fn draw_preview(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::text_muted()))
            .title(" Preview ")
            .title_style(Style::default().fg(theme::text_secondary()))
            .style(Style::default().bg(theme::bg_surface()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        f.render_widget(
            Paragraph::new(self.card.greeting())
                .style(Style::default().fg(theme::text_primary()))
                .wrap(Wrap { trim: false }),
            inner,
        );
    }

    fn draw_share_link(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::text_muted()))
            .title(" Share link ")
            .title_style(Style::default().fg(theme::text_secondary()))
            .style(Style::default().bg(theme::bg_surface()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        f.render_widget(
            Paragraph::new(self.card.share_link())
                .style(Style::default().fg(theme::accent_primary())),
            inner,
        );
    }

    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        f.render_widget(
            StatusBar {
                notice: self.notice.as_ref().map(|(text, _)| text.as_str()),
                notice_is_error: self.notice.as_ref().is_some_and(|(_, e)| *e),
                snow_on: self.card.snow_enabled(),
                music_on: self.card.music_on(),
                song_title: songs::title_for(self.card.song()),
            },
            area,
        );
    }
}

/// Persist the theme preference; failure is logged, never surfaced.
fn persist_theme(theme: Theme) {
    if let Err(e) = config::save_theme_config(theme) {
        tracing::warn!(error = %e, "Failed to persist theme preference");
    }
}
