use std::fmt::{self, Display};

/// Source position of a declaration.
///
/// Captured at the declaration site with [`location!`](crate::location) and
/// used to order declarations independently of how the linker laid them out.
/// The derived ordering compares file first, then line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Expand to the [`Location`] of the invocation site.
#[macro_export]
macro_rules! location {
    () => {
        $crate::location::Location::new(file!(), line!(), column!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_file_then_line_then_column() {
        let mut locations = vec![
            Location::new("b.rs", 1, 1),
            Location::new("a.rs", 9, 1),
            Location::new("a.rs", 2, 7),
            Location::new("a.rs", 2, 3),
        ];
        locations.sort();

        assert_eq!(
            locations,
            vec![
                Location::new("a.rs", 2, 3),
                Location::new("a.rs", 2, 7),
                Location::new("a.rs", 9, 1),
                Location::new("b.rs", 1, 1),
            ]
        );
    }

    #[test]
    fn macro_captures_call_site() {
        let location = crate::location!();
        assert_eq!(location.file, file!());
        assert_eq!(location.line, line!() - 2);
        assert_eq!(
            location.to_string(),
            format!("{}:{}:{}", file!(), location.line, location.column)
        );
    }
}
