use importfix_types::SourceRef;
use std::fmt;

/// Human-readable output, one variant per message the interpreter can emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Opens the block for an undeclared import.
    UndeclaredImport {
        name: String,
        references: Vec<SourceRef>,
    },

    /// No namespaced candidate survived filtering.
    NoInstallablePackage,

    /// Precedes the add commands; `alternatives` is how many follow.
    FixWith { alternatives: usize },

    /// Opens the block for an unused dependency (name already demangled).
    UnusedDependency { name: String },

    /// Precedes the single remove command.
    RemoveWith,

    /// Trailer emitted once when anything failed.
    CheckFailed { label: String, reproduce: String },
}

impl Diagnostic {
    /// True for messages that start a new block of output.
    pub fn opens_block(&self) -> bool {
        matches!(
            self,
            Diagnostic::UndeclaredImport { .. }
                | Diagnostic::UnusedDependency { .. }
                | Diagnostic::CheckFailed { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UndeclaredImport { name, references } => {
                write!(f, "Could not find a package providing `{name}`")?;
                for r in references {
                    write!(f, "\n  - imported at {r}")?;
                }
                Ok(())
            }
            Diagnostic::NoInstallablePackage => {
                f.write_str("Could not find any installed pip package providing that import.")
            }
            Diagnostic::FixWith { alternatives: 1 } => {
                f.write_str("You can fix this by running the following command:")
            }
            Diagnostic::FixWith { .. } => {
                f.write_str("You can fix this by running one of the following commands:")
            }
            Diagnostic::UnusedDependency { name } => write!(f, "Package `{name}` is not used"),
            Diagnostic::RemoveWith => f.write_str("You can remove it using the following command:"),
            Diagnostic::CheckFailed { label, reproduce } => write!(
                f,
                "There were errors while checking the dependencies of {label}.\n\
                 To run this test locally you can run '{reproduce}'"
            ),
        }
    }
}
