//! The interactive menu loop.
//!
//! Clear the screen, draw the panel, read a selection, render, wait for a
//! key, repeat. Invalid input re-prompts and is never fatal; `0` leaves the
//! loop and the process exits 0.

use console::Term;

use vexil::{FlagKind, Selection};

use crate::ui;

/// Run the menu until the user quits.
pub fn run() -> miette::Result<()> {
    let term = Term::stdout();

    loop {
        term.clear_screen()
            .map_err(|e| miette::miette!("failed to clear terminal: {}", e))?;

        draw_menu();
        ui::prompt("Select a flag:");

        let input = term
            .read_line()
            .map_err(|e| miette::miette!("failed to read input: {}", e))?;

        match Selection::parse(&input) {
            Ok(Selection::Quit) => break,
            Ok(Selection::Flag(kind)) => {
                tracing::debug!(flag = %kind, "rendering");
                show_flag(&term, kind)?;
            }
            Err(err) => {
                tracing::debug!(input = %input.trim(), "invalid selection");
                println!();
                ui::error(&err.to_string());
                wait_for_key(&term, "press any key to try again...")?;
            }
        }
    }

    println!();
    ui::dim("Bye.");
    Ok(())
}

fn draw_menu() {
    ui::box_header("VEXIL");
    ui::box_line("");
    for kind in FlagKind::ALL {
        ui::box_line(&format!("  {}  {}", kind.menu_index(), kind.name()));
    }
    ui::box_line("");
    ui::box_line("  0  Quit");
    ui::box_line("");
    ui::box_footer();
    println!();
}

fn show_flag(term: &Term, kind: FlagKind) -> miette::Result<()> {
    term.clear_screen()
        .map_err(|e| miette::miette!("failed to clear terminal: {}", e))?;

    let spec = vexil::resolve(kind);
    ui::heading(spec.name());
    ui::print_flag(&spec);
    println!();
    wait_for_key(term, "press any key to return to the menu...")
}

fn wait_for_key(term: &Term, hint: &str) -> miette::Result<()> {
    ui::dim(hint);
    term.read_key()
        .map_err(|e| miette::miette!("failed to read key: {}", e))?;
    Ok(())
}
