//! Search session state machine.
//!
//! The session turns user intents into at most one outstanding search,
//! applies a response only when it belongs to the request it is still
//! waiting for, and closes with exactly one delivered result.
//!
//! Everything here runs on the task that owns the session: transport
//! completions and debounce deadlines are fed in by that task's event loop,
//! so no state is shared and nothing needs locking.

use std::time::Instant;

use crate::config::SessionConfig;
use crate::error::{SessionError, TransportError};
use crate::logic::debounce::Debouncer;
use crate::logic::delivery::{DeliveryGuard, PickCallback, Presenter};
use crate::logic::pagination::{PaginationView, clamp_page, compute_view};
use crate::sources::search::{SearchResponse, catalog_item};
use crate::sources::{Dispatcher, RequestHandle, Transport};
use crate::state::{
    EmptyReason, PageTarget, PickMode, PickResult, ResultPage, SearchIntent, SessionPhase,
    SessionView,
};

/// One pick-or-cancel interaction.
pub struct Session<T, P> {
    /// Validated configuration.
    config: SessionConfig,
    /// Issues and cancels requests.
    dispatcher: Dispatcher<T>,
    /// Rendering collaborator.
    presenter: P,
    /// Pending typed query.
    debouncer: Debouncer<String>,
    /// Lifecycle phase.
    phase: SessionPhase,
    /// Query and page last sent (or about to be).
    intent: SearchIntent,
    /// Last accepted response.
    results: ResultPage,
    /// Request whose response is still wanted.
    current: Option<RequestHandle>,
    /// Index of the focused item on the current page.
    focused: Option<usize>,
    /// Exactly-once result delivery.
    guard: DeliveryGuard,
}

impl<T: Transport, P: Presenter> Session<T, P> {
    /// What: Create an idle session.
    ///
    /// Inputs:
    /// - `config`: Validated configuration.
    /// - `transport`: Request transport.
    /// - `presenter`: Rendering collaborator.
    ///
    /// Output:
    /// - Session in [`SessionPhase::Idle`] with no callback armed.
    pub fn new(config: SessionConfig, transport: T, presenter: P) -> Self {
        let dispatcher = Dispatcher::new(transport, config.page_size);
        let debouncer = Debouncer::new(config.debounce);
        Self {
            config,
            dispatcher,
            presenter,
            debouncer,
            phase: SessionPhase::Idle,
            intent: SearchIntent::default(),
            results: ResultPage::default(),
            current: None,
            focused: None,
            guard: DeliveryGuard::default(),
        }
    }

    /// What: Begin a session with a result callback and an optional pre-filled query.
    ///
    /// Inputs:
    /// - `callback`: Receives the pick or the cancellation, exactly once.
    /// - `initial_query`: Query searched immediately, without debounce.
    ///
    /// # Errors
    /// - `SessionError::InvalidTransition` unless the session is idle.
    pub fn start_session<F>(
        &mut self,
        callback: F,
        initial_query: Option<&str>,
    ) -> Result<(), SessionError>
    where
        F: FnOnce(PickResult) + Send + 'static,
    {
        if self.phase != SessionPhase::Idle {
            return Err(SessionError::InvalidTransition {
                operation: "start a session",
                phase: self.phase,
            });
        }
        self.begin(Box::new(callback), initial_query);
        Ok(())
    }

    /// Arm the guard and run the initial query.
    fn begin(&mut self, callback: PickCallback, initial_query: Option<&str>) {
        self.guard = DeliveryGuard::new(callback);
        tracing::debug!(?initial_query, "session started");
        self.submit_query(initial_query.unwrap_or_default());
    }

    /// What: Handle typed query text.
    ///
    /// Details:
    /// - Same as [`Session::set_query_at`] with the current instant.
    pub fn set_query(&mut self, text: &str) {
        self.set_query_at(text, Instant::now());
    }

    /// What: Handle typed query text at a given instant.
    ///
    /// Inputs:
    /// - `text`: Full current contents of the query field.
    /// - `now`: Instant of the keystroke.
    ///
    /// Details:
    /// - Blank text empties the list synchronously and sends nothing.
    /// - Other text goes through the debouncer; only the last text of a burst is searched.
    pub fn set_query_at(&mut self, text: &str, now: Instant) {
        if self.phase == SessionPhase::Closed {
            return;
        }
        if text.trim().is_empty() {
            self.show_blank(text);
            return;
        }
        if let Some(query) = self.debouncer.schedule(text.to_string(), now) {
            self.search(query);
        }
    }

    /// What: Search immediately, as for Enter or the search button.
    ///
    /// Details:
    /// - Drops any pending debounced text.
    pub fn submit_query(&mut self, text: &str) {
        if self.phase == SessionPhase::Closed {
            return;
        }
        self.debouncer.cancel();
        if text.trim().is_empty() {
            self.show_blank(text);
        } else {
            self.search(text.to_string());
        }
    }

    /// Instant at which a pending typed query becomes due.
    #[must_use]
    pub fn debounce_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// What: Run the pending typed query if its quiet period has elapsed.
    ///
    /// Inputs:
    /// - `now`: Current instant.
    pub fn on_debounce_elapsed(&mut self, now: Instant) {
        if self.phase == SessionPhase::Closed {
            return;
        }
        if let Some(query) = self.debouncer.fire(now) {
            self.search(query);
        }
    }

    /// What: Move to another page of the current query.
    ///
    /// Inputs:
    /// - `target`: Previous, next or an explicit page number.
    ///
    /// Details:
    /// - The page is clamped against the last known page count.
    /// - Resolving to the page already requested sends nothing, except after a
    ///   failed request where it retries.
    /// - Ignored while idle, closed, in the detail view or with a blank query.
    pub fn set_page(&mut self, target: PageTarget) {
        if matches!(
            self.phase,
            SessionPhase::Idle | SessionPhase::Closed | SessionPhase::Detail
        ) || self.intent.query.trim().is_empty()
        {
            tracing::debug!(phase = ?self.phase, ?target, "page change ignored");
            return;
        }
        let current = i64::try_from(self.intent.page).unwrap_or(i64::MAX);
        let requested = match target {
            PageTarget::Previous => current.saturating_sub(1),
            PageTarget::Next => current.saturating_add(1),
            PageTarget::Number(n) => n,
        };
        let page = clamp_page(requested, self.pagination().page_count);
        if page == self.intent.page && self.phase != SessionPhase::Empty(EmptyReason::Failed) {
            tracing::debug!(page, "already on requested page");
            return;
        }
        self.intent.page = page;
        self.dispatch();
    }

    /// What: Apply a transport completion.
    ///
    /// Inputs:
    /// - `handle`: Handle the request was issued under.
    /// - `outcome`: Decoded response or failure.
    ///
    /// Output:
    /// - `true` when the response was applied, `false` when it was stale and discarded.
    pub fn on_result(
        &mut self,
        handle: RequestHandle,
        outcome: Result<SearchResponse, TransportError>,
    ) -> bool {
        if self.phase == SessionPhase::Closed || self.current != Some(handle) {
            tracing::trace!(%handle, current = ?self.current, "discarding stale response");
            return false;
        }
        self.current = None;
        match outcome {
            Ok(response) => {
                let items: Vec<_> = response
                    .records
                    .iter()
                    .map(|record| catalog_item(record, &self.config))
                    .collect();
                self.phase = if items.is_empty() {
                    SessionPhase::Empty(EmptyReason::NoMatches)
                } else {
                    SessionPhase::Populated
                };
                // A record list longer than the reported count wins.
                let shown = u64::try_from(items.len()).unwrap_or(u64::MAX);
                let total_count = response.result_count.max(shown);
                tracing::debug!(%handle, total = total_count, shown, "search results applied");
                self.results = ResultPage {
                    total_count,
                    page: self.intent.page,
                    items,
                };
            }
            Err(e) => {
                tracing::warn!(%handle, query = %self.intent.query, error = %e, "search failed");
                self.results = ResultPage {
                    page: self.intent.page,
                    ..ResultPage::default()
                };
                self.phase = SessionPhase::Empty(EmptyReason::Failed);
            }
        }
        self.render();
        true
    }

    /// What: Focus one item of the current page.
    ///
    /// Inputs:
    /// - `index`: Position on the current page.
    ///
    /// Output:
    /// - `true` when the detail view opened.
    pub fn open_detail(&mut self, index: usize) -> bool {
        if self.phase != SessionPhase::Populated || index >= self.results.items.len() {
            return false;
        }
        self.focused = Some(index);
        self.phase = SessionPhase::Detail;
        self.render();
        true
    }

    /// Leave the detail view, back to the result list.
    pub fn close_detail(&mut self) {
        if self.phase != SessionPhase::Detail {
            return;
        }
        self.focused = None;
        self.phase = SessionPhase::Populated;
        self.render();
    }

    /// What: Pick the focused item.
    ///
    /// Inputs:
    /// - `mode`: Deliver the image locator or the catalog page locator.
    ///
    /// Output:
    /// - `true` when the pick closed the session.
    ///
    /// Details:
    /// - Only valid in the detail view; a mode disabled in the configuration is ignored.
    pub fn pick(&mut self, mode: PickMode) -> bool {
        if self.phase != SessionPhase::Detail {
            return false;
        }
        let allowed = match mode {
            PickMode::UseAsset => self.config.allow_image_pick,
            PickMode::UseCatalogPage => self.config.allow_page_pick,
        };
        if !allowed {
            tracing::warn!(?mode, "pick mode disabled by configuration");
            return false;
        }
        let Some(item) = self
            .focused
            .and_then(|index| self.results.items.get(index))
            .cloned()
        else {
            return false;
        };
        self.close(PickResult::Picked(item.into_pick(mode)));
        true
    }

    /// What: Cancel the pick.
    ///
    /// Details:
    /// - Delivers the "nothing picked" result; a no-op once closed.
    pub fn cancel(&mut self) {
        if self.phase == SessionPhase::Closed {
            return;
        }
        self.close(PickResult::Cancelled);
    }

    /// What: Return a closed (or unused) session to idle for another pick.
    ///
    /// # Errors
    /// - `SessionError::InvalidTransition` while a session is active.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        if !matches!(self.phase, SessionPhase::Idle | SessionPhase::Closed) {
            return Err(SessionError::InvalidTransition {
                operation: "reset",
                phase: self.phase,
            });
        }
        self.debouncer.cancel();
        self.supersede();
        self.intent = SearchIntent::default();
        self.results = ResultPage::default();
        self.focused = None;
        self.guard = DeliveryGuard::default();
        self.phase = SessionPhase::Idle;
        Ok(())
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Query and page last requested.
    #[must_use]
    pub const fn intent(&self) -> &SearchIntent {
        &self.intent
    }

    /// Last accepted results.
    #[must_use]
    pub const fn results(&self) -> &ResultPage {
        &self.results
    }

    /// Request whose response is still wanted.
    #[must_use]
    pub const fn current_request(&self) -> Option<RequestHandle> {
        self.current
    }

    /// Configuration the session was built with.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Pagination derived from the last accepted results.
    #[must_use]
    pub fn pagination(&self) -> PaginationView {
        compute_view(
            self.results.total_count,
            self.config.page_size,
            self.results.page,
        )
    }

    /// What: Snapshot for the presenter.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            query: self.intent.query.clone(),
            requested_page: self.intent.page,
            results: self.results.clone(),
            pagination: self.pagination(),
            focused: self
                .focused
                .and_then(|index| self.results.items.get(index))
                .cloned(),
            allow_image_pick: self.config.allow_image_pick,
            allow_page_pick: self.config.allow_page_pick,
        }
    }

    /// Rendering collaborator.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Rendering collaborator, mutably (e.g. to redraw after a resize).
    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    /// Render the current state.
    pub fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }

    /// Empty the list for a blank query without touching the network.
    fn show_blank(&mut self, text: &str) {
        self.debouncer.cancel();
        self.supersede();
        self.intent = SearchIntent {
            query: text.to_string(),
            page: 1,
        };
        self.results = ResultPage::default();
        self.focused = None;
        self.phase = SessionPhase::Empty(EmptyReason::BlankQuery);
        self.render();
    }

    /// Search page 1 of a new query.
    fn search(&mut self, query: String) {
        self.intent = SearchIntent { query, page: 1 };
        self.dispatch();
    }

    /// Replace the current request with one for the current intent.
    fn dispatch(&mut self) {
        self.supersede();
        let handle = self.dispatcher.dispatch(&self.intent.query, self.intent.page);
        self.current = Some(handle);
        self.focused = None;
        self.phase = SessionPhase::Searching;
        self.render();
    }

    /// Cancel the current request, if any; its response will be discarded.
    fn supersede(&mut self) {
        if let Some(handle) = self.current.take() {
            self.dispatcher.cancel(handle);
        }
    }

    /// Deliver the result and close.
    fn close(&mut self, result: PickResult) {
        self.debouncer.cancel();
        self.supersede();
        self.focused = None;
        self.phase = SessionPhase::Closed;
        self.render();
        self.guard.deliver(result, &mut self.presenter);
    }
}

/// What: Build a session and start it in one call.
///
/// Inputs:
/// - `config`: Validated configuration.
/// - `transport`: Request transport.
/// - `presenter`: Rendering collaborator.
/// - `callback`: Receives the pick or the cancellation, exactly once.
/// - `initial_query`: Optional pre-filled query.
///
/// Output:
/// - The running session.
pub fn pick_image<T, P, F>(
    config: SessionConfig,
    transport: T,
    presenter: P,
    callback: F,
    initial_query: Option<&str>,
) -> Session<T, P>
where
    T: Transport,
    P: Presenter,
    F: FnOnce(PickResult) + Send + 'static,
{
    let mut session = Session::new(config, transport, presenter);
    session.begin(Box::new(callback), initial_query);
    session
}
