//! Aggregate abstraction: Decide and Evolve.

use crate::command::Command;
use crate::event::DomainEvent;

/// The pure decision model of one aggregate type.
///
/// State is never stored. It is recomputed by folding the full history of a
/// resource through [`Decider::evolve`], starting from
/// [`Decider::initial_state`]. Neither function performs I/O, reads the
/// clock or generates identifiers.
pub trait Decider {
    /// Derived state of one resource.
    type State: Clone + std::fmt::Debug + Send + Sync;
    /// Intents accepted by this aggregate.
    type Command: Command;
    /// Facts produced by this aggregate.
    type Event: DomainEvent;
    /// Reasons a command is refused.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The aggregate kind recorded on every stored event.
    const RESOURCE_TYPE: &'static str;

    /// State of a resource with no events.
    fn initial_state() -> Self::State;

    /// Applies one event. Total: combinations that cannot advance the state
    /// return it unchanged.
    fn evolve(state: Self::State, event: &Self::Event) -> Self::State;

    /// Validates a command against the current state, yielding the single
    /// event to append or the reason it is refused.
    ///
    /// # Errors
    ///
    /// Returns the aggregate's domain error when the transition is illegal.
    fn decide(state: &Self::State, command: &Self::Command) -> Result<Self::Event, Self::Error>;

    /// Folds a history from the initial state.
    fn fold<'a, I>(events: I) -> Self::State
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        events
            .into_iter()
            .fold(Self::initial_state(), |state, event| Self::evolve(state, event))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    use super::Decider;
    use crate::command::Command;
    use crate::event::DomainEvent;

    /// A two-step aggregate used to exercise the generic machinery.
    pub(crate) struct Draft;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DraftState {
        NotStarted,
        Started { owner: String },
        Finished { owner: String },
    }

    #[derive(Debug, Clone)]
    pub(crate) enum DraftCommand {
        Start { owner: String },
        Finish,
    }

    impl Command for DraftCommand {
        fn command_type(&self) -> &'static str {
            match self {
                Self::Start { .. } => "draft.start",
                Self::Finish => "draft.finish",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub(crate) enum DraftEvent {
        Started { owner: String },
        Finished,
    }

    impl DomainEvent for DraftEvent {
        fn event_type(&self) -> &'static str {
            match self {
                Self::Started { .. } => "draft.started",
                Self::Finished => "draft.finished",
            }
        }
    }

    #[derive(Debug, Error)]
    pub(crate) enum DraftError {
        #[error("already started")]
        AlreadyStarted,
        #[error("not started")]
        NotStarted,
    }

    impl Decider for Draft {
        type State = DraftState;
        type Command = DraftCommand;
        type Event = DraftEvent;
        type Error = DraftError;

        const RESOURCE_TYPE: &'static str = "draft";

        fn initial_state() -> DraftState {
            DraftState::NotStarted
        }

        fn evolve(state: DraftState, event: &DraftEvent) -> DraftState {
            match (state, event) {
                (DraftState::NotStarted, DraftEvent::Started { owner }) => DraftState::Started {
                    owner: owner.clone(),
                },
                (DraftState::Started { owner }, DraftEvent::Finished) => {
                    DraftState::Finished { owner }
                }
                (state, _) => state,
            }
        }

        fn decide(state: &DraftState, command: &DraftCommand) -> Result<DraftEvent, DraftError> {
            match (state, command) {
                (DraftState::NotStarted, DraftCommand::Start { owner }) => {
                    Ok(DraftEvent::Started {
                        owner: owner.clone(),
                    })
                }
                (DraftState::NotStarted, DraftCommand::Finish) => Err(DraftError::NotStarted),
                (DraftState::Started { .. }, DraftCommand::Finish) => Ok(DraftEvent::Finished),
                (DraftState::Started { .. } | DraftState::Finished { .. }, DraftCommand::Start { .. })
                | (DraftState::Finished { .. }, DraftCommand::Finish) => {
                    Err(DraftError::AlreadyStarted)
                }
            }
        }
    }

    #[test]
    fn test_fold_of_no_events_is_initial_state() {
        assert_eq!(Draft::fold(std::iter::empty()), DraftState::NotStarted);
    }

    #[test]
    fn test_fold_ignores_events_that_cannot_advance_state() {
        let events = vec![
            DraftEvent::Finished,
            DraftEvent::Started {
                owner: "ada".into(),
            },
            DraftEvent::Started {
                owner: "grace".into(),
            },
        ];

        assert_eq!(
            Draft::fold(&events),
            DraftState::Started {
                owner: "ada".into()
            }
        );
    }

    #[test]
    fn test_replaying_the_same_history_is_deterministic() {
        let events = vec![
            DraftEvent::Started {
                owner: "ada".into(),
            },
            DraftEvent::Finished,
        ];

        assert_eq!(Draft::fold(&events), Draft::fold(&events));
    }
}
