// Screen Sequencer: the wizard's screens, transition rules and back stack

pub mod screens;
pub mod sequencer;

use thiserror::Error;

pub use screens::{Screen, ScreenInfo};
pub use sequencer::{NavigationAction, ScreenSequencer, TransitionRecord};

/// Contract violations raised by the sequencer. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Action {action:?} is not allowed on screen {from}")]
    InvalidTransition { from: Screen, action: NavigationAction },
    #[error("Cannot navigate back from {screen}: no previous screen")]
    NoPreviousScreen { screen: Screen },
    #[error("Screen {screen} is not on the navigation history")]
    ScreenNotInHistory { screen: Screen },
    #[error("Unknown screen '{name}'")]
    UnknownScreen { name: String },
}
