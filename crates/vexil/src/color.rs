//! The closed flag palette.
//!
//! Six colors cover all seven flags. Geometry returns these values; mapping
//! them to actual terminal attributes happens in the shell.

/// A cell color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    White,
    Red,
    Black,
    Yellow,
    Green,
}

impl Color {
    /// All palette colors, in declaration order.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::White,
        Color::Red,
        Color::Black,
        Color::Yellow,
        Color::Green,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Blue => write!(f, "blue"),
            Color::White => write!(f, "white"),
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
            Color::Yellow => write!(f, "yellow"),
            Color::Green => write!(f, "green"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_lowercase() {
        for color in Color::ALL {
            let name = color.to_string();
            assert_eq!(name, name.to_lowercase());
        }
    }
}
