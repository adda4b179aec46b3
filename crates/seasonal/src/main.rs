use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use seasonal_animation::ParticleAnimator;
use seasonal_core::{AnimatorOptions, DocumentMetrics, ElementColor};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = seasonal_config::load_or_default();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Wall clock the animator ticks against.
    started_at: Instant,
    /// Time between event-loop ticks.
    tick_rate: Duration,
    /// Animation options from the config file; color is overridden by the
    /// cycling key.
    options: AnimatorOptions,
    /// Current element color.
    element_color: ElementColor,
    /// Terminal grid size, re-measured on resize and used at the next start.
    grid: (u16, u16),
    /// The particle animator.
    animator: ParticleAnimator,
}

impl App {
    /// Construct a new instance of [`App`] from the file configuration.
    pub fn new(config: seasonal_config::FileConfig) -> Self {
        let element_color =
            ElementColor::parse_or_default(config.animation.element_color.as_deref());
        Self {
            running: false,
            started_at: Instant::now(),
            tick_rate: Duration::from_millis(config.tick_rate_ms()),
            options: config.animation,
            element_color,
            grid: (0, 0),
            animator: ParticleAnimator::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.grid = (size.width, size.height);
        self.start_animation()?;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since the app started; the animator's clock.
    fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Start (or restart) the animation against the current grid size.
    fn start_animation(&mut self) -> color_eyre::Result<()> {
        let metrics = DocumentMetrics::from_cells(self.grid.0, self.grid.1);
        let options = AnimatorOptions {
            element_color: Some(self.element_color.hex()),
            ..self.options.clone()
        };
        self.animator.start(&options, metrics, self.elapsed_ms())?;
        Ok(())
    }

    /// Advance the animation and render the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = self.elapsed_ms();
        self.animator.update(now);
        self.animator.render(frame, now);

        let chunks =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        let accent = self.element_color.color();
        let status = if self.animator.state().is_running() {
            format!("falling x{}  ", self.animator.particle_count())
        } else {
            "stopped  ".to_string()
        };
        let help = Line::from(vec![
            status.fg(accent),
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "space".bold().fg(accent),
            " start/stop  ".dark_gray(),
            "r".bold().fg(accent),
            " restart  ".dark_gray(),
            "c".bold().fg(accent),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a timeout so the animation keeps ticking.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Mouse(_) => {}
                // The running animation keeps its start-time metrics; the
                // new size takes effect at the next start.
                Event::Resize(cols, rows) => self.grid = (cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ')) => self.toggle_animation()?,
            (_, KeyCode::Char('r')) => self.start_animation()?,
            (_, KeyCode::Char('c')) => self.cycle_color()?,
            _ => {}
        }
        Ok(())
    }

    /// Toggle between running and stopped.
    fn toggle_animation(&mut self) -> color_eyre::Result<()> {
        if self.animator.state().is_running() {
            self.animator.stop();
            Ok(())
        } else {
            self.start_animation()
        }
    }

    /// Cycle to the next preset color. Configuration is immutable for the
    /// duration of a run, so a running animation restarts to pick it up.
    fn cycle_color(&mut self) -> color_eyre::Result<()> {
        self.element_color = self.element_color.next_preset();
        if self.animator.state().is_running() {
            self.start_animation()?;
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
