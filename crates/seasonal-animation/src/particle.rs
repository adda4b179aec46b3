//! A single falling element and its trajectory.

use rand::Rng;
use seasonal_core::{AnimatorConfig, DocumentMetrics};

use crate::chars::{FLAKE_CHARS, GLYPHS_PER_CLASS};

/// Vertical spawn position, just above the top edge.
const START_Y: f32 = -50.0;

/// Particles come to rest this far above the bottom of the document.
const END_Y_MARGIN: f32 = 40.0;

/// Opacity every particle fades to over its fall.
const FADE_TARGET: f32 = 0.2;

/// All attributes are fixed at spawn time; sampling the trajectory at a
/// clock value is pure, so a particle needs no per-tick mutation. Lifecycle
/// is strictly Spawned -> Falling -> Removed, with removal handled by the
/// animator once the fall duration elapses.
#[derive(Debug, Clone)]
pub struct Particle {
    spawned_at_ms: u64,
    duration_ms: u64,
    start_x: f32,
    end_y: f32,
    /// Net horizontal travel over the whole fall.
    drift: f32,
    sway_amplitude: f32,
    sway_phase: f32,
    start_opacity: f32,
    size: f32,
    glyph: char,
}

/// Uniform sample over `[lo, hi)`, degenerating to `lo` on an empty range
/// (zero-size documents must spawn rather than panic).
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

impl Particle {
    /// Spawn a particle with randomized attributes.
    ///
    /// Size is `min_size` plus a uniform draw over the whole `max_size`
    /// range, so it can exceed `max_size`; this additive contract is
    /// deliberate and covered by tests.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        config: &AnimatorConfig,
        metrics: &DocumentMetrics,
        now_ms: u64,
    ) -> Self {
        let size = config.min_size + uniform(rng, 0.0, config.max_size);
        let sway_amplitude = uniform(rng, 100.0, 300.0);
        Self {
            spawned_at_ms: now_ms,
            duration_ms: (metrics.document_height * 10.0) as u64
                + uniform(rng, 0.0, 5000.0) as u64,
            start_x: uniform(rng, -100.0, metrics.document_width - 100.0),
            end_y: metrics.document_height - END_Y_MARGIN,
            drift: uniform(rng, -100.0, 100.0),
            sway_amplitude,
            sway_phase: uniform(rng, 0.0, std::f32::consts::TAU),
            start_opacity: uniform(rng, 0.5, 1.5),
            size,
            glyph: pick_glyph(rng, size, config),
        }
    }

    /// Linear fall progress in [0, 1] at the given clock value.
    fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms) as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    /// Position in document units at the given clock value.
    ///
    /// Vertical motion and net drift ease linearly; the sway term modulates
    /// the horizontal position sinusoidally over elapsed time.
    pub fn position(&self, now_ms: u64) -> (f32, f32) {
        let p = self.progress(now_ms);
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms) as f32;
        let sway = self.sway_amplitude * (elapsed / 100.0 + self.sway_phase).sin();
        let x = self.start_x + self.drift * p + sway;
        let y = START_Y + (self.end_y - START_Y) * p;
        (x, y)
    }

    /// Opacity at the given clock value, fading linearly toward 0.2.
    pub fn opacity(&self, now_ms: u64) -> f32 {
        let p = self.progress(now_ms);
        self.start_opacity + (FADE_TARGET - self.start_opacity) * p
    }

    /// Whether the fall duration has elapsed.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.spawned_at_ms) >= self.duration_ms
    }

    /// Element size in document units.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Glyph drawn for this particle.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    #[cfg(test)]
    pub(crate) fn start_opacity(&self) -> f32 {
        self.start_opacity
    }

    #[cfg(test)]
    pub(crate) fn start_x(&self) -> f32 {
        self.start_x
    }

    #[cfg(test)]
    pub(crate) fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Pick a glyph from the size class the sampled size falls into.
fn pick_glyph<R: Rng>(rng: &mut R, size: f32, config: &AnimatorConfig) -> char {
    let fraction = if config.max_size > 0.0 {
        ((size - config.min_size) / config.max_size).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let class = ((fraction * 3.0) as usize).min(2);
    let idx = class * GLYPHS_PER_CLASS + rng.gen_range(0..GLYPHS_PER_CLASS);
    FLAKE_CHARS[idx % FLAKE_CHARS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn test_metrics() -> DocumentMetrics {
        DocumentMetrics {
            document_width: 800.0,
            document_height: 2000.0,
            viewport_width: 800.0,
        }
    }

    #[test]
    fn test_spawn_attribute_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = AnimatorConfig {
            min_size: 10.0,
            max_size: 15.0,
            ..Default::default()
        };
        let metrics = test_metrics();
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, &config, &metrics, 0);
            assert!(p.size() >= 10.0 && p.size() < 25.0, "size {}", p.size());
            assert!(
                p.start_x() >= -100.0 && p.start_x() < 700.0,
                "start x {}",
                p.start_x()
            );
            assert!(
                p.start_opacity() >= 0.5 && p.start_opacity() < 1.5,
                "opacity {}",
                p.start_opacity()
            );
            assert!(p.duration_ms() >= 20_000 && p.duration_ms() < 25_000);
        }
    }

    #[test]
    fn test_spawn_on_zero_size_document() {
        let mut rng = StdRng::seed_from_u64(7);
        let metrics = DocumentMetrics {
            document_width: 0.0,
            document_height: 0.0,
            viewport_width: 0.0,
        };
        let p = Particle::spawn(&mut rng, &AnimatorConfig::default(), &metrics, 0);
        assert_eq!(p.start_x(), -100.0);
        // Only the random term remains of the height-scaled duration.
        assert!(p.duration_ms() < 5000);
        let (_, y) = p.position(0);
        assert_eq!(y, -50.0);
    }

    #[test]
    fn test_trajectory_endpoints() {
        let mut rng = StdRng::seed_from_u64(3);
        let metrics = test_metrics();
        let p = Particle::spawn(&mut rng, &AnimatorConfig::default(), &metrics, 1000);

        let (_, y0) = p.position(1000);
        assert_eq!(y0, -50.0);
        assert!(!p.is_done(1000));

        let end = 1000 + p.duration_ms();
        let (_, y1) = p.position(end);
        assert_eq!(y1, 2000.0 - 40.0);
        assert!(p.is_done(end));
        // Progress clamps; the particle never overshoots its target.
        assert_eq!(p.position(end + 60_000).1, y1);
    }

    #[test]
    fn test_opacity_fades_to_target() {
        let mut rng = StdRng::seed_from_u64(11);
        let metrics = test_metrics();
        let p = Particle::spawn(&mut rng, &AnimatorConfig::default(), &metrics, 0);

        let start = p.opacity(0);
        assert!((0.5..1.5).contains(&start));
        let mid = p.opacity(p.duration_ms() / 2);
        assert!(mid < start);
        let end = p.opacity(p.duration_ms());
        assert!((end - 0.2).abs() < 1e-5);
    }
}
