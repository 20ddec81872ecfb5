//! Worker positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The position a worker holds.
///
/// The set of positions is fixed; every rendering matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// A regular employee.
    Employee,
    /// A manager.
    Manager,
    /// An accountant.
    Accountant,
}

impl Position {
    /// All positions, in the order the console menu lists them.
    pub const ALL: [Position; 3] = [Position::Employee, Position::Manager, Position::Accountant];

    /// Returns the human-readable label for this position.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::models::Position;
    ///
    /// assert_eq!(Position::Accountant.label(), "Accountant");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Position::Employee => "Employee",
            Position::Manager => "Manager",
            Position::Accountant => "Accountant",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
