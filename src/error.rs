use crate::{decl::HookRole, location::Location};

/// Structural errors found while collecting or composing declarations.
///
/// All of these are fatal: a suite is either collected completely or not at
/// all.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("suite `{name}` is declared twice, at {first} and at {second}")]
    DuplicateSuite {
        name: &'static str,
        first: Location,
        second: Location,
    },

    /// `locations` holds the first and second declaration sites when both
    /// cases were declared statically.
    #[error("case `{name}` is declared twice in suite `{suite}`{}", sites(.locations))]
    DuplicateCase {
        suite: String,
        name: String,
        locations: Option<(Location, Location)>,
    },

    #[error("case `{case}` at {location} belongs to suite `{suite}`, which was never declared")]
    UndeclaredSuite {
        suite: &'static str,
        case: &'static str,
        location: Location,
    },

    #[error("{kind} `{name}` at {location} belongs to case `{case}`, which was never declared")]
    UndeclaredCase {
        kind: DeclKind,
        name: &'static str,
        case: &'static str,
        location: Location,
    },

    #[error(
        "case `{case}` in suite `{suite}` has {setups} setup hook(s) but {teardowns} teardown hook(s)"
    )]
    UnpairedFixture {
        suite: String,
        case: String,
        setups: usize,
        teardowns: usize,
    },

    #[error("no suite named `{0}` was declared")]
    UnknownSuite(String),
}

fn sites(locations: &Option<(Location, Location)>) -> String {
    match locations {
        Some((first, second)) => format!(", at {first} and at {second}"),
        None => String::new(),
    }
}

/// What kind of declaration an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Test,
    Hook(HookRole),
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclKind::Test => f.write_str("test"),
            DeclKind::Hook(role) => write!(f, "{role} hook"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
