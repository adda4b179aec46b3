//! Particle animator: spawn scheduling, trajectory stepping, retirement.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::StdRng};
use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use seasonal_core::{
    AnimatorConfig, AnimatorOptions, AnimatorState, CELL_HEIGHT_PX, CELL_WIDTH_PX, DocumentMetrics,
};
use thiserror::Error;

use crate::color::attenuate;
use crate::particle::Particle;

/// Cap on in-flight particles. A very small spawn interval combined with a
/// long fall duration would otherwise grow the collection without bound;
/// once at the cap, spawn ticks are skipped until a fall completes.
pub const MAX_PARTICLES: usize = 512;

/// Errors from starting an animation run.
#[derive(Debug, Error)]
pub enum AnimatorError {
    /// The host surface could not be measured (non-finite dimensions).
    #[error("host document is not ready: invalid dimensions {0:?}")]
    InvalidDocument(DocumentMetrics),
}

/// Owns one animation run: the resolved configuration, the sizing snapshot,
/// the spawn schedule, and every in-flight particle.
///
/// The animator is entirely clock-driven: the host calls [`update`] with a
/// monotonic millisecond clock each tick and [`render`] each draw. Nothing
/// advances between calls, so stopping clears all particles immediately and
/// no retired particle can reappear.
///
/// [`update`]: ParticleAnimator::update
/// [`render`]: ParticleAnimator::render
#[derive(Debug)]
pub struct ParticleAnimator {
    state: AnimatorState,
    config: AnimatorConfig,
    metrics: DocumentMetrics,
    /// Spawn interval after responsive scaling, fixed at start.
    spawn_interval_ms: u64,
    /// Clock value of the next scheduled spawn.
    next_spawn_ms: u64,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl Default for ParticleAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleAnimator {
    /// Create a stopped animator.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a stopped animator with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: AnimatorState::Stopped,
            config: AnimatorConfig::default(),
            metrics: DocumentMetrics::from_cells(0, 0),
            spawn_interval_ms: 0,
            next_spawn_ms: 0,
            particles: Vec::new(),
            rng,
        }
    }

    /// Start an animation run.
    ///
    /// Any previous run is cancelled first and its particles removed, so
    /// calling start while running is safe and leaves exactly one active
    /// spawn schedule. Document metrics are snapshotted here and never
    /// re-sampled; the first spawn lands one effective interval after
    /// `now_ms`.
    pub fn start(
        &mut self,
        options: &AnimatorOptions,
        metrics: DocumentMetrics,
        now_ms: u64,
    ) -> Result<(), AnimatorError> {
        if !metrics.is_valid() {
            return Err(AnimatorError::InvalidDocument(metrics));
        }
        self.stop();
        self.config = AnimatorConfig::resolve(options);
        self.metrics = metrics;
        self.spawn_interval_ms = self
            .config
            .effective_spawn_interval_ms(metrics.viewport_width);
        self.next_spawn_ms = now_ms + self.spawn_interval_ms;
        self.state = AnimatorState::Running;
        Ok(())
    }

    /// Stop the animation and remove every particle immediately.
    ///
    /// No-op when already stopped; safe to call repeatedly.
    pub fn stop(&mut self) {
        self.particles.clear();
        self.state = AnimatorState::Stopped;
    }

    /// Advance the animation to the given clock value.
    ///
    /// Retires particles whose fall has completed, then runs the spawn
    /// schedule. The schedule is a fixed-interval timeline with catch-up: a
    /// late tick spawns every particle owed since the last one, so spawn
    /// cadence never depends on tick rate.
    pub fn update(&mut self, now_ms: u64) {
        if !self.state.is_running() {
            return;
        }
        self.particles.retain(|p| !p.is_done(now_ms));
        while self.next_spawn_ms <= now_ms {
            if self.particles.len() < MAX_PARTICLES {
                let particle =
                    Particle::spawn(&mut self.rng, &self.config, &self.metrics, self.next_spawn_ms);
                // A spawn owed from far enough back would already have
                // finished its fall; it never becomes visible.
                if !particle.is_done(now_ms) {
                    self.particles.push(particle);
                }
            }
            self.next_spawn_ms += self.spawn_interval_ms;
        }
    }

    /// Render every in-flight particle into the frame.
    ///
    /// Document units map back to terminal cells; particles outside the area
    /// are simply not drawn. Empty cells render as blanks so the animation
    /// never disturbs anything outside its own layer.
    pub fn render(&self, frame: &mut Frame, now_ms: u64) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut cells: HashMap<(u16, u16), Span<'static>> = HashMap::new();
        for particle in &self.particles {
            let (x, y) = particle.position(now_ms);
            let cx = (x / CELL_WIDTH_PX).floor();
            let cy = (y / CELL_HEIGHT_PX).floor();
            if cx < 0.0 || cy < 0.0 || cx >= f32::from(area.width) || cy >= f32::from(area.height) {
                continue;
            }
            let color = attenuate(
                self.config.element_color.color(),
                particle.opacity(now_ms),
            );
            cells.insert(
                (cx as u16, cy as u16),
                Span::styled(particle.glyph().to_string(), Style::new().fg(color)),
            );
        }

        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| cells.remove(&(x, y)).unwrap_or_else(|| Span::raw(" ")))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Current animator state.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Number of in-flight particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Spawn interval in effect for this run, after responsive scaling.
    pub fn effective_spawn_interval_ms(&self) -> u64 {
        self.spawn_interval_ms
    }
}
