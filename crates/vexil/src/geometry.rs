//! Per-flag color functions.
//!
//! Every flag is a pure function from a grid cell to a palette color,
//! evaluated with integer arithmetic only. The grid is fixed at 60×20; there
//! is no sub-pixel rendering and no anti-aliasing. Band boundaries come from
//! truncating division, and where that leaves a remainder (the German and
//! Spanish thirds, the last French band) the uneven split is part of the
//! flag's shape, not something to even out.

use crate::color::Color;
use crate::flag::FlagKind;

/// Grid width in cells.
pub const WIDTH: usize = 60;
/// Grid height in cells.
pub const HEIGHT: usize = 20;

/// Color of one grid cell of one flag.
///
/// Total for every `(row, col)` in `[0, HEIGHT) × [0, WIDTH)`.
pub(crate) fn color_at(kind: FlagKind, row: usize, col: usize) -> Color {
    debug_assert!(row < HEIGHT && col < WIDTH);
    match kind {
        FlagKind::Cz => czech(row, col),
        FlagKind::De => german(row),
        FlagKind::Us => american(row, col),
        FlagKind::Fr => french(col),
        FlagKind::Jp => japanese(row, col),
        FlagKind::It => italian(col),
        FlagKind::Es => spanish(row),
    }
}

/// Blue wedge at the hoist, white over red behind it.
///
/// The wedge length grows linearly from the top row, spans the full width at
/// the center row, and shrinks symmetrically below. Membership includes the
/// boundary column, so the wedge is anchored at column 0 on every row.
fn czech(row: usize, col: usize) -> Color {
    let top_half = row <= HEIGHT / 2;
    let wedge = if top_half {
        (2 * row * WIDTH) / HEIGHT
    } else {
        (2 * (HEIGHT - row) * WIDTH) / HEIGHT
    };

    if col <= wedge {
        Color::Blue
    } else if top_half {
        Color::White
    } else {
        Color::Red
    }
}

/// Horizontal thirds: black, red, yellow. 20 / 3 = 6, so the bottom band
/// absorbs the remainder (rows 0–5, 6–11, 12–19).
fn german(row: usize) -> Color {
    let band = HEIGHT / 3;
    if row < band {
        Color::Black
    } else if row < 2 * band {
        Color::Red
    } else {
        Color::Yellow
    }
}

/// Thirteen red/white stripes with a blue field over the top-left.
///
/// Stripe height is 20 / 13 = 1, so each grid row is a stripe and rows past
/// the thirteenth keep alternating on the same parity. The field covers the
/// top seven stripe heights and the left two fifths of the width.
fn american(row: usize, col: usize) -> Color {
    const STRIPES: usize = 13;
    let stripe_height = HEIGHT / STRIPES;
    let field_height = stripe_height * 7;
    let field_width = WIDTH * 2 / 5;

    if row < field_height && col < field_width {
        Color::Blue
    } else if (row / stripe_height) % 2 == 0 {
        Color::Red
    } else {
        Color::White
    }
}

/// Vertical thirds: blue, white, red. The rightmost band absorbs the
/// remainder so the three bands partition all 60 columns.
fn french(col: usize) -> Color {
    let band = WIDTH / 3;
    if col < band {
        Color::Blue
    } else if col < 2 * band {
        Color::White
    } else {
        Color::Red
    }
}

/// Centered red disc on white, membership by squared distance.
fn japanese(row: usize, col: usize) -> Color {
    let center_x = (WIDTH / 2) as i64;
    let center_y = (HEIGHT / 2) as i64;
    let radius = (WIDTH.min(HEIGHT) / 4) as i64;

    let dx = col as i64 - center_x;
    let dy = row as i64 - center_y;
    if dx * dx + dy * dy <= radius * radius {
        Color::Red
    } else {
        Color::White
    }
}

/// Vertical thirds: green, white, red.
fn italian(col: usize) -> Color {
    let band = WIDTH / 3;
    if col < band {
        Color::Green
    } else if col < 2 * band {
        Color::White
    } else {
        Color::Red
    }
}

/// Horizontal thirds with red outer bands and a yellow center, split the
/// same way as the German bands (rows 0–5, 6–11, 12–19).
fn spanish(row: usize) -> Color {
    let band = HEIGHT / 3;
    if row < band || row >= 2 * band {
        Color::Red
    } else {
        Color::Yellow
    }
}
