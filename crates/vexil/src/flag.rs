//! Flag identifiers and menu selection parsing.

use std::str::FromStr;

use crate::error::FlagError;

/// The seven flags the viewer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    Cz,
    De,
    Us,
    Fr,
    Jp,
    It,
    Es,
}

impl FlagKind {
    /// All flags, in menu order.
    pub const ALL: [FlagKind; 7] = [
        FlagKind::Cz,
        FlagKind::De,
        FlagKind::Us,
        FlagKind::Fr,
        FlagKind::Jp,
        FlagKind::It,
        FlagKind::Es,
    ];

    /// English display name.
    pub fn name(&self) -> &'static str {
        match self {
            FlagKind::Cz => "Czech Republic",
            FlagKind::De => "Germany",
            FlagKind::Us => "United States",
            FlagKind::Fr => "France",
            FlagKind::Jp => "Japan",
            FlagKind::It => "Italy",
            FlagKind::Es => "Spain",
        }
    }

    /// Two-letter country code, as accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            FlagKind::Cz => "cz",
            FlagKind::De => "de",
            FlagKind::Us => "us",
            FlagKind::Fr => "fr",
            FlagKind::Jp => "jp",
            FlagKind::It => "it",
            FlagKind::Es => "es",
        }
    }

    /// 1-based position in the interactive menu.
    pub fn menu_index(&self) -> u32 {
        match self {
            FlagKind::Cz => 1,
            FlagKind::De => 2,
            FlagKind::Us => 3,
            FlagKind::Fr => 4,
            FlagKind::Jp => 5,
            FlagKind::It => 6,
            FlagKind::Es => 7,
        }
    }

    /// Inverse of [`menu_index`](Self::menu_index); `None` outside 1–7.
    pub fn from_menu_index(index: u32) -> Option<FlagKind> {
        match index {
            1 => Some(FlagKind::Cz),
            2 => Some(FlagKind::De),
            3 => Some(FlagKind::Us),
            4 => Some(FlagKind::Fr),
            5 => Some(FlagKind::Jp),
            6 => Some(FlagKind::It),
            7 => Some(FlagKind::Es),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for FlagKind {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        FlagKind::ALL
            .into_iter()
            .find(|k| k.code() == code)
            .ok_or(FlagError::UnknownFlag { code })
    }
}

/// A parsed menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `0` — leave the menu.
    Quit,
    /// `1`–`7` — draw this flag.
    Flag(FlagKind),
}

impl Selection {
    /// Parses one line of menu input.
    ///
    /// Anything that is not an integer in 0–7 is an invalid selection; the
    /// caller re-prompts, it is never fatal.
    pub fn parse(input: &str) -> Result<Selection, FlagError> {
        let trimmed = input.trim();
        let invalid = || FlagError::InvalidSelection {
            input: trimmed.to_string(),
        };

        let index: u32 = trimmed.parse().map_err(|_| invalid())?;
        if index == 0 {
            return Ok(Selection::Quit);
        }
        FlagKind::from_menu_index(index)
            .map(Selection::Flag)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_index_round_trips() {
        for kind in FlagKind::ALL {
            assert_eq!(FlagKind::from_menu_index(kind.menu_index()), Some(kind));
        }
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("cz".parse::<FlagKind>().unwrap(), FlagKind::Cz);
        assert_eq!("CZ".parse::<FlagKind>().unwrap(), FlagKind::Cz);
        assert_eq!(" es ".parse::<FlagKind>().unwrap(), FlagKind::Es);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "xx".parse::<FlagKind>().unwrap_err();
        assert_eq!(
            err,
            FlagError::UnknownFlag {
                code: "xx".to_string()
            }
        );
    }

    #[test]
    fn selection_zero_quits() {
        assert_eq!(Selection::parse("0").unwrap(), Selection::Quit);
    }

    #[test]
    fn selection_maps_menu_numbers() {
        assert_eq!(
            Selection::parse("1").unwrap(),
            Selection::Flag(FlagKind::Cz)
        );
        assert_eq!(
            Selection::parse(" 7\n").unwrap(),
            Selection::Flag(FlagKind::Es)
        );
    }

    #[test]
    fn selection_rejects_garbage() {
        for input in ["abc", "99", "8", "-1", "", "1.5"] {
            assert!(
                matches!(
                    Selection::parse(input),
                    Err(FlagError::InvalidSelection { .. })
                ),
                "expected {input:?} to be invalid"
            );
        }
    }
}
