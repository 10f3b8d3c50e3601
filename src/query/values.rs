/// Closed value sets understood by cheat.sh.
///
/// Each set has two spellings: the name a user types on the command line and
/// the wire form that goes into the request path. They only differ for
/// special commands, where the service routes `:bash_completion` with an
/// underscore but `:styles-demo` with a dash.
use std::str::FromStr;

use super::errors::QueryError;

/// A closed set of named values accepted by one query field.
pub trait Choice: Sized + Copy + 'static {
    /// CLI-facing field name used in error messages.
    const FIELD: &'static str;

    /// Every member, in the order they are listed to the user.
    const ALL: &'static [Self];

    /// Canonical user-facing spelling.
    fn name(self) -> &'static str;

    /// Spelling sent to the service.
    fn wire(self) -> &'static str {
        self.name()
    }

    /// Parse a user-facing spelling. Matching is case-sensitive.
    fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.name() == s)
    }

    /// Canonical spellings of all members.
    #[must_use]
    fn legal() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.name()).collect()
    }
}

/// Non-search administrative actions (`/:<command>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialCommand {
    /// Service help page.
    Help,
    /// List all cheat sheets (or those under the topic).
    List,
    /// How to post a new cheat sheet.
    Post,
    /// Shell function for tab completion.
    BashCompletion,
    /// List of color styles.
    Styles,
    /// Demo of every color style.
    StylesDemo,
    /// A random cheat sheet.
    Random,
}

impl Choice for SpecialCommand {
    const FIELD: &'static str = "cmd";

    const ALL: &'static [Self] = &[
        Self::Help,
        Self::List,
        Self::Post,
        Self::BashCompletion,
        Self::Styles,
        Self::StylesDemo,
        Self::Random,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Post => "post",
            Self::BashCompletion => "bash-completion",
            Self::Styles => "styles",
            Self::StylesDemo => "styles-demo",
            Self::Random => "random",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            Self::BashCompletion => "bash_completion",
            other => other.name(),
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "bash_completion" => Some(Self::BashCompletion),
            "styles_demo" => Some(Self::StylesDemo),
            _ => Self::ALL.iter().copied().find(|v| v.name() == s),
        }
    }
}

/// Single-character rendering flags (`?<chars>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayOption {
    /// `q`: quiet mode, no github/twitter buttons.
    Quiet,
    /// `T`: text only, no ANSI sequences.
    TextOnly,
    /// `Q`: code only, no commentary.
    CodeOnly,
}

impl Choice for DisplayOption {
    const FIELD: &'static str = "options";

    const ALL: &'static [Self] = &[Self::Quiet, Self::TextOnly, Self::CodeOnly];

    fn name(self) -> &'static str {
        match self {
            Self::Quiet => "q",
            Self::TextOnly => "T",
            Self::CodeOnly => "Q",
        }
    }
}

/// Single-character search modifiers (trailing `/<chars>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOption {
    /// `b`: match on word boundaries only.
    WordBoundary,
    /// `i`: case-insensitive.
    CaseInsensitive,
    /// `r`: recursive, search every cheat sheet.
    Recursive,
}

impl Choice for SearchOption {
    const FIELD: &'static str = "search_opts";

    const ALL: &'static [Self] = &[Self::WordBoundary, Self::CaseInsensitive, Self::Recursive];

    fn name(self) -> &'static str {
        match self {
            Self::WordBoundary => "b",
            Self::CaseInsensitive => "i",
            Self::Recursive => "r",
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),*) => {$(
        impl FromStr for $ty {
            type Err = QueryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| QueryError::InvalidEnumValue {
                    field: Self::FIELD,
                    rejected: vec![s.to_owned()],
                    legal: Self::legal(),
                })
            }
        }
    )*};
}

impl_from_str!(SpecialCommand, DisplayOption, SearchOption);
