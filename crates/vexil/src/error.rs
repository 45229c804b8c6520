//! Library error types.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while turning user input into a flag.
///
/// Rendering itself has no failure modes; only selection and code parsing
/// can go wrong.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("invalid selection '{input}'")]
    #[diagnostic(
        code(vexil::menu::invalid_selection),
        help("enter a number between 0 and 7")
    )]
    InvalidSelection { input: String },

    #[error("unknown flag '{code}'")]
    #[diagnostic(
        code(vexil::flag::unknown_flag),
        help("known flags: cz, de, us, fr, jp, it, es")
    )]
    UnknownFlag { code: String },
}
