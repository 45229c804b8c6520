//! vexil command-line interface.
//!
//! No subcommand drops into the interactive menu; `show` and `list` exist
//! for scripts and pipes.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vexil::FlagKind;

mod menu;
mod ui;

#[derive(Parser)]
#[command(name = "vexil")]
#[command(about = "Draw country flags in the terminal")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single flag and exit
    Show {
        /// Country code (cz, de, us, fr, jp, it, es)
        flag: FlagKind,
    },

    /// List the available flags
    List,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr and stays silent unless RUST_LOG asks for it,
    // so it never lands inside the rendered art.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vexil=warn")),
        )
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        // No command = interactive menu
        None => {
            if atty::is(atty::Stream::Stdout) {
                menu::run()?;
            } else {
                eprintln!("Run 'vexil --help' for usage or 'vexil' in a terminal for the menu.");
                std::process::exit(1);
            }
        }

        Some(Commands::Show { flag }) => {
            tracing::debug!(flag = %flag, "rendering one-shot");
            let spec = vexil::resolve(flag);
            ui::heading(spec.name());
            ui::print_flag(&spec);
        }

        Some(Commands::List) => {
            for kind in FlagKind::ALL {
                ui::list_entry(kind.code(), kind.name());
            }
        }
    }

    Ok(())
}
