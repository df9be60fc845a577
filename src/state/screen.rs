use uuid::Uuid;

use crate::error::SearchError;
use crate::models::{FoundCases, SearchCriteria, SearchOutcome};

/// Generation token tying an in-flight request to the screen state that
/// issued it. A response whose token no longer matches is discarded, so a
/// late reply can never overwrite a newer screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(Uuid);

impl RequestToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// What the rendering layer should show.
#[derive(Debug)]
pub enum ScreenState {
    Idle,
    Submitting,
    Results(FoundCases),
    NotFound,
    Failed(SearchError),
}

/// What a submit call decided.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Dispatch the request carrying this token.
    Dispatch(RequestToken),
    /// A search is already in flight; this submit is ignored.
    InFlight,
}

/// Per-screen search state machine.
///
/// `Idle → Submitting → (Results | NotFound | Failed)`, with terminal
/// states returning to `Idle` on new-search and `Failed`/`NotFound`
/// re-entering `Submitting` on retry. Transitions happen only on explicit
/// actions plus the client-enforced timeout; at most one request is in
/// flight per screen.
pub struct SearchScreen {
    state: ScreenState,
    current_token: Option<RequestToken>,
    last_criteria: Option<SearchCriteria>,
}

impl SearchScreen {
    pub fn new() -> Self {
        Self { state: ScreenState::Idle, current_token: None, last_criteria: None }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ScreenState::Submitting)
    }

    /// Criteria of the most recent dispatch, kept for retry.
    pub fn last_criteria(&self) -> Option<&SearchCriteria> {
        self.last_criteria.as_ref()
    }

    /// Handle a form submit. Validation runs before any dispatch; invalid
    /// criteria move the screen to `Failed` without touching the network.
    /// A submit while already `Submitting` is ignored.
    pub fn submit(&mut self, criteria: SearchCriteria) -> Result<SubmitDecision, SearchError> {
        if self.is_submitting() {
            return Ok(SubmitDecision::InFlight);
        }
        criteria.validate()?;

        let token = RequestToken::new();
        self.state = ScreenState::Submitting;
        self.current_token = Some(token);
        self.last_criteria = Some(criteria);
        Ok(SubmitDecision::Dispatch(token))
    }

    /// Deliver the outcome of a dispatched request.
    ///
    /// Returns `false` when the token is stale (the screen moved on via
    /// new-search or a later submit) and the outcome was discarded.
    pub fn resolve(&mut self, token: RequestToken, outcome: SearchOutcome) -> bool {
        if self.current_token != Some(token) {
            return false;
        }
        self.current_token = None;
        self.state = match outcome {
            SearchOutcome::Found(found) => ScreenState::Results(found),
            SearchOutcome::NotFound => ScreenState::NotFound,
            SearchOutcome::Failed(err) => ScreenState::Failed(err),
        };
        true
    }

    /// Replay the last criteria from a terminal `NotFound`/`Failed` state.
    /// Returns the token and criteria to dispatch, or `None` when there is
    /// nothing to retry.
    pub fn retry(&mut self) -> Option<(RequestToken, SearchCriteria)> {
        match self.state {
            ScreenState::NotFound | ScreenState::Failed(_) => {}
            _ => return None,
        }
        let criteria = self.last_criteria.clone()?;

        let token = RequestToken::new();
        self.state = ScreenState::Submitting;
        self.current_token = Some(token);
        Some((token, criteria))
    }

    /// Reset to a blank form. Any in-flight request becomes stale.
    pub fn new_search(&mut self) {
        self.state = ScreenState::Idle;
        self.current_token = None;
        self.last_criteria = None;
    }
}

impl Default for SearchScreen {
    fn default() -> Self {
        Self::new()
    }
}
