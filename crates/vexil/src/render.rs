//! Row rendering.
//!
//! Folds the cell grid into horizontal runs of equal color, one list of
//! spans per row. The shell then needs a single attribute change per run
//! instead of one per cell.

use crate::color::Color;
use crate::flag::FlagKind;
use crate::geometry::{self, HEIGHT, WIDTH};

/// A horizontal run of same-colored cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub color: Color,
    /// Run length in cells; spans of a row always sum to [`WIDTH`].
    pub width: usize,
}

/// A fully rendered flag: [`HEIGHT`] rows of color runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagArt {
    rows: Vec<Vec<Span>>,
}

impl FlagArt {
    /// Evaluates the flag's color function over the whole grid and merges
    /// adjacent equal cells into spans.
    pub(crate) fn paint(kind: FlagKind) -> Self {
        let mut rows = Vec::with_capacity(HEIGHT);

        for row in 0..HEIGHT {
            let mut spans: Vec<Span> = Vec::new();
            for col in 0..WIDTH {
                let color = geometry::color_at(kind, row, col);
                match spans.last_mut() {
                    Some(span) if span.color == color => span.width += 1,
                    _ => spans.push(Span { color, width: 1 }),
                }
            }
            rows.push(spans);
        }

        FlagArt { rows }
    }

    /// The rendered rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Span>] {
        &self.rows
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        WIDTH
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_width(spans: &[Span]) -> usize {
        spans.iter().map(|s| s.width).sum()
    }

    #[test]
    fn every_row_spans_the_full_width() {
        for kind in FlagKind::ALL {
            let art = FlagArt::paint(kind);
            assert_eq!(art.rows().len(), HEIGHT);
            for spans in art.rows() {
                assert_eq!(row_width(spans), WIDTH);
            }
        }
    }

    #[test]
    fn adjacent_spans_never_share_a_color() {
        for kind in FlagKind::ALL {
            let art = FlagArt::paint(kind);
            for spans in art.rows() {
                for pair in spans.windows(2) {
                    assert_ne!(pair[0].color, pair[1].color);
                }
            }
        }
    }

    #[test]
    fn banded_flags_collapse_to_one_span_per_row() {
        let art = FlagArt::paint(FlagKind::De);
        for spans in art.rows() {
            assert_eq!(spans.len(), 1);
        }
    }

    #[test]
    fn french_rows_are_three_spans() {
        let art = FlagArt::paint(FlagKind::Fr);
        for spans in art.rows() {
            let colors: Vec<Color> = spans.iter().map(|s| s.color).collect();
            assert_eq!(colors, [Color::Blue, Color::White, Color::Red]);
            assert_eq!(spans.iter().map(|s| s.width).collect::<Vec<_>>(), [20, 20, 20]);
        }
    }
}
