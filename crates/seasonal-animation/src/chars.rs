//! Glyphs for the falling elements.

/// Flake glyphs grouped by size class: three small, three medium, three
/// large. A particle picks one from its class at spawn time.
pub const FLAKE_CHARS: &[char] = &['·', '°', '✧', '*', '•', '✦', '❄', '❅', '❆'];

/// Number of glyphs per size class in [`FLAKE_CHARS`].
pub const GLYPHS_PER_CLASS: usize = 3;
