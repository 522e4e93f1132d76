use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{NavigationError, Screen};

/// User intents that move the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationAction {
    StartOrder,
    Next,
    Back,
    Cancel,
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: Screen,
    pub to: Screen,
    pub action: NavigationAction,
    /// The order must be cleared as part of this transition
    pub resets_order: bool,
    pub timestamp: DateTime<Utc>,
}

/// Linear order wizard with an explicit back stack.
///
/// The top of `history` is the current screen; `Start` is always at the bottom.
#[derive(Debug, Clone)]
pub struct ScreenSequencer {
    history: Vec<Screen>,
    last_transition: Option<TransitionRecord>,
}

impl Default for ScreenSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenSequencer {
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Start],
            last_transition: None,
        }
    }

    pub fn current(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Start)
    }

    pub fn can_navigate_back(&self) -> bool {
        self.history.len() > 1
    }

    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.last_transition.as_ref()
    }

    /// Actions the current screen accepts, in display order
    pub fn available_actions(&self) -> Vec<NavigationAction> {
        let mut actions = match self.current() {
            Screen::Start => vec![NavigationAction::StartOrder],
            Screen::Entree | Screen::SideDish | Screen::Accompaniment => {
                vec![NavigationAction::Next, NavigationAction::Cancel]
            }
            Screen::Checkout => vec![NavigationAction::Confirm, NavigationAction::Cancel],
        };
        if self.can_navigate_back() {
            actions.push(NavigationAction::Back);
        }
        actions
    }

    /// Apply an action. On error the sequencer is left exactly as it was.
    pub fn handle(&mut self, action: NavigationAction) -> Result<&TransitionRecord, NavigationError> {
        let from = self.current();

        let (to, resets_order) = match (from, action) {
            (Screen::Start, NavigationAction::StartOrder) => (Screen::Entree, false),
            (Screen::Entree, NavigationAction::Next) => (Screen::SideDish, false),
            (Screen::SideDish, NavigationAction::Next) => (Screen::Accompaniment, false),
            (Screen::Accompaniment, NavigationAction::Next) => (Screen::Checkout, false),
            (
                Screen::Entree | Screen::SideDish | Screen::Accompaniment | Screen::Checkout,
                NavigationAction::Cancel,
            )
            | (Screen::Checkout, NavigationAction::Confirm) => (Screen::Start, true),
            (_, NavigationAction::Back) => {
                if !self.can_navigate_back() {
                    error!(screen = %from, "Back navigation with no previous screen");
                    return Err(NavigationError::NoPreviousScreen { screen: from });
                }
                (self.history[self.history.len() - 2], false)
            }
            _ => {
                error!(screen = %from, action = ?action, "Rejected navigation action");
                return Err(NavigationError::InvalidTransition { from, action });
            }
        };

        match action {
            NavigationAction::Back => {
                self.history.pop();
            }
            _ if resets_order => self.pop_back_to(Screen::Start)?,
            _ => self.history.push(to),
        }

        info!(
            from = %from,
            to = %to,
            action = ?action,
            resets_order = resets_order,
            depth = self.history.len(),
            "Screen transition"
        );

        Ok(&*self.last_transition.insert(TransitionRecord {
            from,
            to,
            action,
            resets_order,
            timestamp: Utc::now(),
        }))
    }

    /// Drop every screen above the most recent `target`, keeping `target` itself.
    pub fn pop_back_to(&mut self, target: Screen) -> Result<(), NavigationError> {
        let position = self
            .history
            .iter()
            .rposition(|screen| *screen == target)
            .ok_or(NavigationError::ScreenNotInHistory { screen: target })?;
        self.history.truncate(position + 1);
        Ok(())
    }
}
