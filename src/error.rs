//! Error taxonomy for the breaker.
//!
//! Two kinds of failure are distinguished. Malformed input — a paragraph
//! missing its terminating forced break, or an empty line-length schedule —
//! is rejected immediately, before any search is attempted. An infeasible fit
//! (the active list drains mid-scan) is not an error by default: the breaker
//! recovers by admitting a single overfull line. Callers that would
//! rather see this surfaced as an error can ask for that with
//! [`OverfullPolicy::Reject`].

use core::fmt;

/// How the breaker should react when the active list drains and no
/// feasible continuation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverfullPolicy {
    /// Admit the most recently deactivated node as a single active node,
    /// with its adjustment ratio pinned to `-1`, and continue the scan. This
    /// is the paper's implicit behavior and the default here.
    #[default]
    Recover,
    /// Surface the condition to the caller as [`BreakError::Overfull`]
    /// instead of recovering.
    Reject,
}

/// A paragraph failed validation before the search began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The paragraph's last two items are not `(glue(0, +∞, 0), penalty(−∞))`,
    /// so there is no guarantee the scan will ever reach a legal final break.
    MissingTerminator,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingTerminator => f.write_str(
                "paragraph must end with a (glue(0, +inf, 0), penalty(-inf)) pair to force a final break",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}

/// The breaker could not produce a result from the given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakError {
    /// The paragraph does not satisfy the well-formedness invariants (see
    /// [`BuildError`]).
    MalformedParagraph(BuildError),
    /// The line-length schedule was empty.
    EmptyLineLengths,
    /// The active list drained at the given item position with
    /// [`OverfullPolicy::Reject`] in effect.
    Overfull {
        /// The item index at which the scan had no feasible predecessor.
        position: usize,
    },
}

impl fmt::Display for BreakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakError::MalformedParagraph(e) => write!(f, "malformed paragraph: {e}"),
            BreakError::EmptyLineLengths => f.write_str("line length schedule must not be empty"),
            BreakError::Overfull { position } => {
                write!(f, "no feasible line break at item {position}; paragraph is overfull")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BreakError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BreakError::MalformedParagraph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BuildError> for BreakError {
    fn from(e: BuildError) -> Self {
        BreakError::MalformedParagraph(e)
    }
}
