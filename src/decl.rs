//! Static declarations.
//!
//! Every suite, case, test and hook is declared as its own `static`. Cases
//! point at their suite and tests and hooks point at their case, so each
//! declaration carries its owner with it and can live anywhere in the
//! program. The [`suite!`](crate::suite), [`case!`](crate::case) and
//! [`fixture!`](crate::fixture) macros and the `#[test]`, `#[setup]` and
//! `#[teardown]` attributes produce these values and place them into the
//! [registry](crate::registry).
//!
//! Identity is the address of the static. Two suites with the same name are
//! still two suites; the [collector](crate::collect) reports that as an error.

use std::{fmt, ops::Range};

use crate::location::Location;

/// Declaration data shared by all kinds of declarations.
pub trait Declared {
    fn name(&self) -> &'static str;

    fn location(&self) -> Location;
}

#[derive(Debug)]
pub struct SuiteDecl {
    pub name: &'static str,
    pub location: Location,
}

impl SuiteDecl {
    pub const fn new(name: &'static str, location: Location) -> Self {
        Self { name, location }
    }
}

#[derive(Debug)]
pub struct CaseDecl {
    pub suite: &'static SuiteDecl,
    pub name: &'static str,
    pub location: Location,
}

impl CaseDecl {
    pub const fn new(suite: &'static SuiteDecl, name: &'static str, location: Location) -> Self {
        Self {
            suite,
            name,
            location,
        }
    }
}

#[derive(Debug)]
pub struct TestDecl {
    pub case: &'static CaseDecl,
    pub name: &'static str,
    pub function: fn(i32),
    /// Iteration indices the test is run with, `0..1` for a plain test.
    pub iterations: Range<i32>,
    pub location: Location,
}

impl TestDecl {
    pub const fn new(
        case: &'static CaseDecl,
        name: &'static str,
        function: fn(i32),
        iterations: Range<i32>,
        location: Location,
    ) -> Self {
        Self {
            case,
            name,
            function,
            iterations,
            location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookRole {
    Setup,
    Teardown,
}

impl fmt::Display for HookRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookRole::Setup => f.write_str("setup"),
            HookRole::Teardown => f.write_str("teardown"),
        }
    }
}

/// A single setup or teardown hook.
///
/// Hooks are paired per case by ordinal: the n-th setup of a case belongs
/// with the n-th teardown of the same case.
#[derive(Debug)]
pub struct HookDecl {
    pub case: &'static CaseDecl,
    pub role: HookRole,
    pub name: &'static str,
    pub function: fn(),
    pub location: Location,
}

impl HookDecl {
    pub const fn new(
        case: &'static CaseDecl,
        role: HookRole,
        name: &'static str,
        function: fn(),
        location: Location,
    ) -> Self {
        Self {
            case,
            role,
            name,
            function,
            location,
        }
    }
}

macro_rules! impl_declared {
    ($($ty:ty),*) => {
        $(
            impl Declared for $ty {
                fn name(&self) -> &'static str {
                    self.name
                }

                fn location(&self) -> Location {
                    self.location
                }
            }
        )*
    };
}

impl_declared!(SuiteDecl, CaseDecl, TestDecl, HookDecl);
