use crate::catalog::{self, IdentifierPool};
use crate::selector::{AttemptBudget, CandidateSelector};
use crate::state::ViewerState;
use crate::traits::ArtworkSource;
use crate::types::{
    AcceptancePolicy, AdvanceOutcome, ObjectId, RequestStatus, Verdict, ViewerConfig, ViewerError,
};
use interfaces::BaselineAcceptancePolicy;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Pool, selector and state, plus the draw → fetch → judge loop that ties them together.
pub struct Viewer<P: AcceptancePolicy = BaselineAcceptancePolicy> {
    source: Arc<dyn ArtworkSource>,
    config: ViewerConfig,
    pool: RwLock<IdentifierPool>,
    selector: Mutex<CandidateSelector>,
    state: Arc<RwLock<ViewerState>>,
    _policy: PhantomData<fn() -> P>,
}

impl Viewer<BaselineAcceptancePolicy> {
    pub fn new(source: Arc<dyn ArtworkSource>, config: ViewerConfig) -> Self {
        Self::with_policy(source, config)
    }
}

impl<P: AcceptancePolicy> Viewer<P> {
    pub fn with_policy(source: Arc<dyn ArtworkSource>, config: ViewerConfig) -> Self {
        let selector = CandidateSelector::from_seed(config.seed);
        let state = ViewerState::with_filter(config.filter_on_start);

        Self {
            source,
            config,
            pool: RwLock::new(IdentifierPool::empty()),
            selector: Mutex::new(selector),
            state: Arc::new(RwLock::new(state)),
            _policy: PhantomData,
        }
    }

    /// Load the pool and show the first artwork. Runs once per session.
    pub async fn init(&self) -> AdvanceOutcome {
        match catalog::load_pool(self.source.as_ref(), self.config.pool_range.clone()).await {
            Ok(pool) => {
                let size = pool.len();
                *self.pool.write().await = pool;
                self.state.write().await.pool_size = size;

                if size == 0 {
                    warn!("Pool is empty; advancing is disabled");
                    return AdvanceOutcome::Disabled;
                }
                self.on_advance().await
            }
            Err(e) => {
                // Terminal for the session: the pool stays empty.
                self.state.write().await.status = RequestStatus::Error(e.to_string());
                AdvanceOutcome::Disabled
            }
        }
    }

    /// Draw candidates until one is accepted, a fetch fails, or the budget runs out.
    pub async fn on_advance(&self) -> AdvanceOutcome {
        let pool = self.pool.read().await.clone();
        if pool.is_empty() {
            return AdvanceOutcome::Disabled;
        }

        let ticket = self.state.write().await.begin_advance();
        let mut budget = AttemptBudget::new(self.config.max_attempts);

        while budget.try_consume() {
            let candidate = match self.draw(&pool, ticket).await {
                Some(candidate) => candidate,
                None => return AdvanceOutcome::Superseded,
            };

            let fetched = match self.source.object(candidate).await {
                Ok(fetched) => fetched,
                Err(e) => return self.fail(ticket, candidate, e).await,
            };

            let mut state = self.state.write().await;
            if !state.is_current(ticket) {
                debug!("Dropping stale result for object {}", candidate);
                return AdvanceOutcome::Superseded;
            }

            match P::judge(&fetched.record, state.selection.filter_active) {
                Verdict::Accept => {
                    let artwork = state.show(&fetched);
                    info!("Showing object {} after {} attempt(s)", candidate, budget.used());
                    return AdvanceOutcome::Accepted(artwork);
                }
                Verdict::Reject(reason) => {
                    debug!("Rejected object {}: {:?}", candidate, reason);
                }
            }
        }

        let attempts = budget.used();
        let mut state = self.state.write().await;
        if !state.is_current(ticket) {
            return AdvanceOutcome::Superseded;
        }
        warn!("{}", ViewerError::RetryBoundExceeded { attempts });
        state.status = RequestStatus::RetryBoundExceeded { attempts };
        AdvanceOutcome::Exhausted { attempts }
    }

    async fn draw(&self, pool: &IdentifierPool, ticket: u64) -> Option<ObjectId> {
        let candidate = self.selector.lock().await.select_next(pool)?;
        let mut state = self.state.write().await;
        if !state.is_current(ticket) {
            return None;
        }
        state.selection.current_id = Some(candidate);
        Some(candidate)
    }

    async fn fail(&self, ticket: u64, id: ObjectId, error: ViewerError) -> AdvanceOutcome {
        let error = ViewerError::RecordFetchFailure {
            id,
            message: error.to_string(),
        };
        warn!("{}", error);

        let mut state = self.state.write().await;
        if !state.is_current(ticket) {
            return AdvanceOutcome::Superseded;
        }
        let message = error.to_string();
        state.status = RequestStatus::Error(message.clone());
        AdvanceOutcome::Failed(message)
    }

    /// Flip the artist filter. The current card stays until the next advance.
    pub async fn toggle_filter(&self) -> bool {
        let active = self.state.write().await.toggle_filter();
        info!("Artist filter {}", if active { "on" } else { "off" });
        active
    }

    /// Clear the form inputs; leaves the artwork and status alone.
    pub async fn reset(&self) {
        self.state.write().await.reset_inputs();
    }

    pub async fn set_input(&self, field: &str, value: &str) -> crate::types::Result<()> {
        self.state.write().await.inputs.set(field, value)
    }

    pub async fn can_advance(&self) -> bool {
        self.state.read().await.can_advance()
    }

    pub async fn snapshot(&self) -> ViewerState {
        self.state.read().await.clone()
    }

    pub async fn pool(&self) -> IdentifierPool {
        self.pool.read().await.clone()
    }

    /// Shared handle to the state, for front ends that render on their own schedule.
    pub fn get_state(&self) -> Arc<RwLock<ViewerState>> {
        self.state.clone()
    }
}
