//! Session view-state machine.
//!
//! One visitor's traversal runs `Entry` (pre-identification) through
//! `LanguageSelect` into the `Node` loop, where option selection pushes
//! onto the traversal history and "go back" pops it. The machine has no
//! terminal state; the only exits are external.
//!
//! A session is owned exclusively by one view. If the host allows
//! concurrent actions on one session, the last applied transition wins;
//! there is no merging.

mod history;

pub use history::*;

use letter_model::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    /// Initial state, before the visitor has identified themselves.
    Entry,

    /// Identification accepted; waiting for a language choice.
    LanguageSelect,

    /// Navigating the graph.
    Node {
        current: String,
        history: TraversalHistory,
    },
}

/// One visitor's traversal of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    root: String,
    language: Option<Language>,
    contact: Option<String>,
    state: ViewState,
}

impl Session {
    /// Create a session at the entry state, rooted at the given node.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            root: root.into(),
            language: None,
            contact: None,
            state: ViewState::Entry,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    /// The node the session is looking at, when it has entered the graph.
    pub fn current_node(&self) -> Option<&str> {
        match &self.state {
            ViewState::Node { current, .. } => Some(current),
            _ => None,
        }
    }

    /// `Entry -> LanguageSelect` on accepted identification. Returns
    /// whether the transition applied; every transition method is a
    /// no-op (returning false) outside its source state.
    pub fn accept_identification(&mut self, contact: impl Into<String>) -> bool {
        if !matches!(self.state, ViewState::Entry) {
            return false;
        }
        self.contact = Some(contact.into());
        self.state = ViewState::LanguageSelect;
        true
    }

    /// `LanguageSelect -> Node(root, [])` on a language choice.
    pub fn choose_language(&mut self, language: Language) -> bool {
        if !matches!(self.state, ViewState::LanguageSelect) {
            return false;
        }
        self.language = Some(language);
        self.state = ViewState::Node {
            current: self.root.clone(),
            history: TraversalHistory::new(),
        };
        true
    }

    /// `Node(n, h) -> Node(n', h + [n])`. The caller resolves `n'` first;
    /// only successful forward navigation advances the session, so a
    /// failed resolution leaves the previous node on display.
    pub fn advance(&mut self, next_node_id: impl Into<String>) -> bool {
        match &mut self.state {
            ViewState::Node { current, history } => {
                history.push(current.clone());
                *current = next_node_id.into();
                true
            }
            _ => false,
        }
    }

    /// Go back one step. With an empty history this lands on the root
    /// with the history still empty.
    pub fn go_back(&mut self) -> bool {
        match &mut self.state {
            ViewState::Node { current, history } => {
                match history.pop() {
                    Some(previous) => *current = previous,
                    None => *current = self.root.clone(),
                }
                true
            }
            _ => false,
        }
    }

    /// Return to the root directly, discarding history unconditionally.
    pub fn return_to_root(&mut self) -> bool {
        match &mut self.state {
            ViewState::Node { current, history } => {
                *current = self.root.clone();
                history.clear();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at_node() -> Session {
        let mut session = Session::new("home");
        assert!(session.accept_identification("+1 555 0100"));
        assert!(session.choose_language(Language::Fa));
        session
    }

    #[test]
    fn test_entry_to_language_select() {
        let mut session = Session::new("home");
        assert!(matches!(session.state(), ViewState::Entry));

        assert!(session.accept_identification("+1 555 0100"));
        assert!(matches!(session.state(), ViewState::LanguageSelect));
        assert_eq!(session.contact(), Some("+1 555 0100"));
    }

    #[test]
    fn test_language_choice_enters_graph_at_root() {
        let session = session_at_node();

        assert_eq!(session.language(), Some(Language::Fa));
        assert_eq!(session.current_node(), Some("home"));
        match session.state() {
            ViewState::Node { history, .. } => assert!(history.is_empty()),
            state => panic!("unexpected state: {state:?}"),
        }
    }

    #[test]
    fn test_forward_navigation_records_history() {
        let mut session = session_at_node();

        assert!(session.advance("services"));

        assert_eq!(session.current_node(), Some("services"));
        match session.state() {
            ViewState::Node { history, .. } => assert_eq!(history.entries(), ["home"]),
            state => panic!("unexpected state: {state:?}"),
        }
    }

    #[test]
    fn test_forward_back_round_trip_restores_state() {
        let mut session = session_at_node();
        let before = session.state().clone();

        assert!(session.advance("services"));
        assert!(session.go_back());

        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_go_back_on_empty_history_lands_on_root() {
        let mut session = session_at_node();
        assert!(session.advance("services"));
        assert!(session.advance("web-details"));

        assert!(session.go_back());
        assert!(session.go_back());
        assert_eq!(session.current_node(), Some("home"));

        // One more go-back: nothing to pop, still at the root.
        assert!(session.go_back());
        assert_eq!(session.current_node(), Some("home"));
        match session.state() {
            ViewState::Node { history, .. } => assert!(history.is_empty()),
            state => panic!("unexpected state: {state:?}"),
        }
    }

    #[test]
    fn test_return_to_root_discards_history() {
        let mut session = session_at_node();
        assert!(session.advance("services"));
        assert!(session.advance("web-details"));

        assert!(session.return_to_root());

        assert_eq!(session.current_node(), Some("home"));
        match session.state() {
            ViewState::Node { history, .. } => assert!(history.is_empty()),
            state => panic!("unexpected state: {state:?}"),
        }
    }

    #[test]
    fn test_invalid_transitions_are_no_ops() {
        let mut session = Session::new("home");

        // Not in the graph yet: navigation transitions do nothing.
        assert!(!session.advance("services"));
        assert!(!session.go_back());
        assert!(!session.return_to_root());
        assert!(!session.choose_language(Language::En));
        assert!(matches!(session.state(), ViewState::Entry));

        assert!(session.accept_identification("visitor"));
        // Already past entry: a second identification is ignored.
        assert!(!session.accept_identification("other"));
        assert_eq!(session.contact(), Some("visitor"));
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(Session::new("home").id, Session::new("home").id);
    }
}
