//! Sizing snapshot of the host surface.

/// Horizontal size of one terminal cell in document units.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Vertical size of one terminal cell in document units.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Dimensions of the host surface, sampled once when an animation starts.
///
/// The animator works in pixel-like document units rather than terminal
/// cells, so fall durations and drift ranges keep meaningful magnitudes on
/// any grid. Document size is the full drawable content; the viewport width
/// drives the responsive spawn-interval multiplier.
///
/// These values are never re-sampled mid-run: resizing the host does not
/// move existing or future particles until the next start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentMetrics {
    /// Total content width in document units.
    pub document_width: f32,
    /// Total content height in document units.
    pub document_height: f32,
    /// Visible width in document units.
    pub viewport_width: f32,
}

impl DocumentMetrics {
    /// Snapshot metrics for a terminal grid of `cols` x `rows` cells.
    ///
    /// The terminal has no scrollback to animate over, so document and
    /// viewport width coincide.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        let width = f32::from(cols) * CELL_WIDTH_PX;
        Self {
            document_width: width,
            document_height: f32::from(rows) * CELL_HEIGHT_PX,
            viewport_width: width,
        }
    }

    /// Whether every dimension is a finite, non-negative number.
    ///
    /// Zero-size documents are valid (spawns degenerate to the origin);
    /// non-finite values mean the host was not ready to be measured.
    pub fn is_valid(&self) -> bool {
        [self.document_width, self.document_height, self.viewport_width]
            .iter()
            .all(|d| d.is_finite() && *d >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells() {
        let m = DocumentMetrics::from_cells(100, 40);
        assert_eq!(m.document_width, 800.0);
        assert_eq!(m.document_height, 640.0);
        assert_eq!(m.viewport_width, 800.0);
    }

    #[test]
    fn test_validity() {
        assert!(DocumentMetrics::from_cells(0, 0).is_valid());
        let bad = DocumentMetrics {
            document_width: f32::NAN,
            document_height: 100.0,
            viewport_width: 100.0,
        };
        assert!(!bad.is_valid());
    }
}
