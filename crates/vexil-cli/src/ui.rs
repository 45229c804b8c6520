//! Terminal output primitives.
//!
//! Everything that writes styled text lives here: the box-drawn menu panel,
//! status lines, and the flag painter that turns color spans into runs of
//! block glyphs. Geometry stays in the `vexil` crate; this module only
//! applies terminal attributes and resets them after every styled run.

use std::io::{self, Write};

use console::style;

use vexil::{Color, FlagSpec, Span};

/// The glyph every grid cell is drawn with.
const BLOCK: &str = "\u{2588}"; // █

/// Interior width of the menu panel.
const PANEL_WIDTH: usize = 32;

pub mod symbols {
    pub const DIAMOND: &str = "\u{25C6}"; // ◆
    pub const ARROW: &str = "\u{2500}\u{25B8}"; // ─▸
}

/// Map a palette color to the terminal's standard foreground color.
fn terminal_color(color: Color) -> console::Color {
    match color {
        Color::Blue => console::Color::Blue,
        Color::White => console::Color::White,
        Color::Red => console::Color::Red,
        Color::Black => console::Color::Black,
        Color::Yellow => console::Color::Yellow,
        Color::Green => console::Color::Green,
    }
}

/// Build one output line from a row of spans: a styled run of block glyphs
/// per span, attribute reset between runs.
pub fn flag_line(spans: &[Span]) -> String {
    let mut line = String::new();
    for span in spans {
        let run = BLOCK.repeat(span.width);
        line.push_str(&style(run).fg(terminal_color(span.color)).to_string());
    }
    line
}

/// Print a rendered flag, one line per grid row, no indentation: the flag
/// itself is exactly as wide as the grid.
pub fn print_flag(spec: &FlagSpec) {
    let art = spec.render();
    for spans in art.rows() {
        println!("{}", flag_line(spans));
    }
}

/// Print the heading line above a rendered flag.
pub fn heading(name: &str) {
    println!();
    println!("  {} {}", style(symbols::ARROW).dim(), style(name).bold());
    println!();
}

/// Print an error message.
pub fn error(msg: &str) {
    println!(
        "  {} {}",
        style(symbols::DIAMOND).red().bold(),
        style(msg).red()
    );
}

/// Print a dim/secondary message.
pub fn dim(msg: &str) {
    println!("  {}", style(msg).dim());
}

/// Print one `list` entry.
pub fn list_entry(code: &str, name: &str) {
    println!("  {}  {}", style(code).bold(), name);
}

/// Print a prompt without a trailing newline.
pub fn prompt(msg: &str) {
    print!("  {} ", msg);
    let _ = io::stdout().flush();
}

/// Print the panel header line.
pub fn box_header(title: &str) {
    println!("{}", header_line(title));
}

/// Print one panel content line, padded to the panel width.
pub fn box_line(content: &str) {
    println!("{}", content_line(content));
}

/// Print the panel footer line.
pub fn box_footer() {
    println!("{}", footer_line());
}

fn header_line(title: &str) -> String {
    let title_padded = format!(" {} ", title);
    let dashes = PANEL_WIDTH.saturating_sub(title_padded.chars().count() + 1);

    format!(
        "  {}{}{}{}",
        style("\u{256D}\u{2500}").dim(), // ╭─
        style(title_padded).bold(),
        style("\u{2500}".repeat(dashes)).dim(),
        style("\u{256E}").dim() // ╮
    )
}

fn content_line(content: &str) -> String {
    let padding = PANEL_WIDTH.saturating_sub(content.chars().count() + 1);
    format!(
        "  {} {}{}{}",
        style("\u{2502}").dim(), // │
        content,
        " ".repeat(padding),
        style("\u{2502}").dim()
    )
}

fn footer_line() -> String {
    format!(
        "  {}{}{}",
        style("\u{2570}").dim(), // ╰
        style("\u{2500}".repeat(PANEL_WIDTH + 1)).dim(),
        style("\u{256F}").dim() // ╯
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use vexil::{resolve, FlagKind, WIDTH};

    fn visible_width(line: &str) -> usize {
        console::strip_ansi_codes(line).chars().count()
    }

    #[test]
    fn flag_line_is_one_glyph_per_cell() {
        for kind in FlagKind::ALL {
            let art = resolve(kind).render();
            for spans in art.rows() {
                assert_eq!(visible_width(&flag_line(spans)), WIDTH);
            }
        }
    }

    #[test]
    fn flag_line_is_all_blocks() {
        let art = resolve(FlagKind::Fr).render();
        let stripped = console::strip_ansi_codes(&flag_line(&art.rows()[0])).to_string();
        assert!(stripped.chars().all(|c| c == '\u{2588}'));
    }

    #[test]
    fn panel_edges_line_up() {
        // Header, content lines, and footer must all render the same width.
        let expected = PANEL_WIDTH + 4;
        assert_eq!(visible_width(&header_line("VEXIL")), expected);
        assert_eq!(visible_width(&content_line("  1  Czech Republic")), expected);
        assert_eq!(visible_width(&content_line("")), expected);
        assert_eq!(visible_width(&footer_line()), expected);
    }
}
