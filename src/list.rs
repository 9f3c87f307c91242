use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::JobSource;
use crate::error::AppError;
use crate::models::job::{JobPage, JobSummary};

/// Where the list currently stands. `FirstLoad`, `Refreshing` and
/// `LoadingMore` mean a fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    FirstLoad,
    Loaded,
    Refreshing,
    LoadingMore,
    Errored,
}

impl ListPhase {
    pub fn is_fetching(self) -> bool {
        matches!(
            self,
            ListPhase::FirstLoad | ListPhase::Refreshing | ListPhase::LoadingMore
        )
    }
}

/// What became of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch ran and the list was updated.
    Completed,
    /// The trigger was dropped by the in-flight guard or a phase
    /// precondition; nothing changed.
    Ignored,
    /// The fetch ran and failed; the error is recorded on the state.
    Failed,
}

#[derive(Debug, Default)]
struct ListState {
    jobs: Vec<JobSummary>,
    phase: ListPhase,
    next_page: u32,
    total: u32,
    can_load_more: bool,
    last_error: Option<String>,
}

/// Point-in-time copy of the list state, safe to hold across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub jobs: Vec<JobSummary>,
    pub phase: ListPhase,
    /// Zero-based index of the next page a `load_more` would request.
    pub next_page: u32,
    /// Collection size the server reported on the most recent page.
    pub total: u32,
    pub can_load_more: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchKind {
    First,
    Refresh,
    More,
}

impl FetchKind {
    fn label(self) -> &'static str {
        match self {
            FetchKind::First => "first load",
            FetchKind::Refresh => "refresh",
            FetchKind::More => "load more",
        }
    }
}

/// Accumulates pages from a `JobSource`.
///
/// The lock is taken to decide a transition and to apply a finished fetch,
/// never across the network call. At most one fetch is in flight per list:
/// a trigger of any kind arriving while one is running is dropped, not
/// queued. Refresh replaces the accumulated list; load-more appends to it.
pub struct JobList {
    source: Arc<dyn JobSource>,
    page_size: u32,
    state: Mutex<ListState>,
}

impl JobList {
    /// `page_size` is clamped to at least 1.
    pub fn new(source: Arc<dyn JobSource>, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            state: Mutex::new(ListState::default()),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Load page 0 into an idle or errored list. From any other phase the
    /// trigger is dropped.
    pub async fn first_load(&self) -> LoadOutcome {
        self.run(FetchKind::First).await
    }

    /// Re-fetch page 0 and wholesale-replace the accumulated list, resetting
    /// the cursor. Allowed once loaded, or as the explicit way out of
    /// `Errored`.
    pub async fn refresh(&self) -> LoadOutcome {
        self.run(FetchKind::Refresh).await
    }

    /// Fetch the cursor page and append it. Only runs from `Loaded` while
    /// `can_load_more` holds.
    pub async fn load_more(&self) -> LoadOutcome {
        self.run(FetchKind::More).await
    }

    /// Snapshot the current state.
    pub fn view(&self) -> ListView {
        let state = self.lock();
        ListView {
            jobs: state.jobs.clone(),
            phase: state.phase,
            next_page: state.next_page,
            total: state.total,
            can_load_more: state.can_load_more,
            last_error: state.last_error.clone(),
        }
    }

    async fn run(&self, kind: FetchKind) -> LoadOutcome {
        let Some(page_num) = self.begin(kind) else {
            tracing::debug!("{} trigger ignored", kind.label());
            return LoadOutcome::Ignored;
        };
        let result = self.source.fetch_page(page_num, self.page_size).await;
        self.finish(kind, result)
    }

    /// Check preconditions and enter the in-flight phase. Returns the page
    /// to fetch, or `None` when the trigger must be dropped.
    fn begin(&self, kind: FetchKind) -> Option<u32> {
        let mut state = self.lock();
        if state.phase.is_fetching() {
            return None;
        }
        match kind {
            FetchKind::First => {
                if !matches!(state.phase, ListPhase::Idle | ListPhase::Errored) {
                    return None;
                }
                state.phase = ListPhase::FirstLoad;
                state.last_error = None;
                Some(0)
            }
            FetchKind::Refresh => {
                if !matches!(state.phase, ListPhase::Loaded | ListPhase::Errored) {
                    return None;
                }
                state.phase = ListPhase::Refreshing;
                // Optimistic reset; recomputed when the page lands.
                state.can_load_more = true;
                state.last_error = None;
                Some(0)
            }
            FetchKind::More => {
                if state.phase != ListPhase::Loaded || !state.can_load_more {
                    return None;
                }
                state.phase = ListPhase::LoadingMore;
                Some(state.next_page)
            }
        }
    }

    fn finish(&self, kind: FetchKind, result: Result<JobPage, AppError>) -> LoadOutcome {
        let mut state = self.lock();
        match result {
            Ok(page) => {
                let fetched = page.items.len();
                match kind {
                    FetchKind::First | FetchKind::Refresh => {
                        state.jobs = page.items;
                        state.next_page = 1;
                    }
                    FetchKind::More => {
                        state.jobs.extend(page.items);
                        state.next_page += 1;
                    }
                }
                state.total = page.total;
                // More pages exist only while full pages keep arriving and
                // the accumulated list is still short of the server total.
                state.can_load_more =
                    fetched as u32 == self.page_size && (state.jobs.len() as u32) < state.total;
                state.phase = ListPhase::Loaded;
                tracing::debug!(
                    "{}: {fetched} items, holding {} of {}",
                    kind.label(),
                    state.jobs.len(),
                    state.total
                );
                LoadOutcome::Completed
            }
            Err(err) => {
                tracing::warn!("{} failed: {err}", kind.label());
                state.phase = ListPhase::Errored;
                state.can_load_more = false;
                state.last_error = Some(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    // The lock is never held across an await, so contention is bounded by
    // plain field updates.
    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
