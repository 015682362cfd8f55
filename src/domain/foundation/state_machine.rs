//! State machine trait for phase enums.
//!
//! Gives phase enums a single place to declare which transitions are legal,
//! and a validated `transition_to` built on top of that declaration.

use super::ValidationError;

/// Trait for enums that represent a state machine.
///
/// Implementors define valid transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ShellPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Editing, Loading) | (Loading, Showing) /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Editing => vec![Loading],
///             // ... etc
///         }
///     }
/// }
///
/// let next = phase.transition_to(ShellPhase::Loading)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_transition(
                format!("{:?}", self),
                format!("{:?}", target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Dropdown {
        Closed,
        Open,
        Detached,
    }

    impl StateMachine for Dropdown {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Dropdown::*;
            matches!(
                (self, target),
                (Closed, Open) | (Open, Closed) | (Open, Detached) | (Closed, Detached)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Dropdown::*;
            match self {
                Closed => vec![Open, Detached],
                Open => vec![Closed, Detached],
                Detached => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Dropdown::Closed.transition_to(Dropdown::Open), Ok(Dropdown::Open));
    }

    #[test]
    fn transition_to_reports_both_ends_on_failure() {
        let err = Dropdown::Detached
            .transition_to(Dropdown::Open)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot transition from Detached to Open"
        );
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Dropdown::Detached.is_terminal());
        assert!(!Dropdown::Open.is_terminal());
    }
}
