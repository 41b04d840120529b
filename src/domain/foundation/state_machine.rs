//! State machine trait for stage and status enums.
//!
//! Provides a consistent interface for validating and performing transitions
//! across enum-driven lifecycles (dialog stages, estimate lifecycle, ...).

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Stage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Stage::Greeting => vec![Stage::GetNameInitial],
///             Stage::GetNameInitial => vec![Stage::GetEmail],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let next = current_stage.transition_to(Stage::GetEmail)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
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

    // Test enum for StateMachine trait
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum QuoteStatus {
        Draft,
        Priced,
        Delivered,
        Expired,
    }

    impl StateMachine for QuoteStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use QuoteStatus::*;
            matches!(
                (self, target),
                (Draft, Priced) | (Priced, Delivered) | (Priced, Expired) | (Delivered, Expired)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use QuoteStatus::*;
            match self {
                Draft => vec![Priced],
                Priced => vec![Delivered, Expired],
                Delivered => vec![Expired],
                Expired => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let status = QuoteStatus::Draft;
        let result = status.transition_to(QuoteStatus::Priced);
        assert_eq!(result, Ok(QuoteStatus::Priced));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let status = QuoteStatus::Draft;
        let result = status.transition_to(QuoteStatus::Delivered);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_returns_true_for_expired() {
        assert!(QuoteStatus::Expired.is_terminal());
    }

    #[test]
    fn is_terminal_returns_false_for_non_terminal() {
        assert!(!QuoteStatus::Draft.is_terminal());
        assert!(!QuoteStatus::Priced.is_terminal());
        assert!(!QuoteStatus::Delivered.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            QuoteStatus::Draft,
            QuoteStatus::Priced,
            QuoteStatus::Delivered,
            QuoteStatus::Expired,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }
}
