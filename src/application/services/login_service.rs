//! Login controller: credentials in, tokens stored and dashboard opened out.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::application::services::LoginForm;
use crate::domain::entities::{Credentials, TokenPair};
use crate::domain::ports::{Navigator, Notifier, TokenEndpoint, TokenStore};
use crate::domain::request_state::{RequestState, SubmissionTracker, SubmitPolicy};
use crate::error::LoginError;

/// Default route opened after a successful login.
pub const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard";

/// Default alert text for every failed login.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Credenciales incorrectas";

/// Behavior knobs for [`LoginService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    pub dashboard_route: String,
    pub failure_message: String,
    pub submit_policy: SubmitPolicy,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            dashboard_route: DEFAULT_DASHBOARD_ROUTE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            submit_policy: SubmitPolicy::default(),
        }
    }
}

/// What a single call to [`LoginService::submit`] ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Tokens stored and navigation triggered.
    LoggedIn,
    /// Failure alert shown.
    Failed,
    /// Response discarded because a newer submission started meanwhile.
    Superseded,
    /// Refused because another submission was still pending.
    Blocked,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// Bridges the login form to the token service and reacts to the outcome.
///
/// On success the access and refresh tokens are written to the store (in that
/// order) and the navigator is sent to the dashboard route. Every failure,
/// whatever the cause, produces the same alert; the cause is only logged.
/// Errors never escape [`LoginService::submit`].
///
/// Requests run concurrently, but handling a response is serialized: the two
/// token writes and the navigation of one submission complete before the next
/// submission's response is handled.
pub struct LoginService {
    endpoint: Arc<dyn TokenEndpoint>,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    settings: LoginSettings,
    tracker: SubmissionTracker,
    commit: Mutex<()>,
}

impl LoginService {
    pub fn new(
        endpoint: Arc<dyn TokenEndpoint>,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        settings: LoginSettings,
    ) -> Self {
        let tracker = SubmissionTracker::new(settings.submit_policy);

        Self {
            endpoint,
            store,
            navigator,
            notifier,
            settings,
            tracker,
            commit: Mutex::new(()),
        }
    }

    pub fn settings(&self) -> &LoginSettings {
        &self.settings
    }

    /// Current request lifecycle state.
    pub fn state(&self) -> RequestState {
        self.tracker.state()
    }

    /// Submits the current contents of `form`.
    pub async fn submit_form(&self, form: &LoginForm) -> SubmitOutcome {
        self.submit(form.credentials()).await
    }

    /// Sends `credentials` to the token service and handles the response.
    ///
    /// No local validation is performed; empty fields go to the server as-is.
    /// Overlapping calls are resolved according to [`LoginSettings::submit_policy`].
    pub async fn submit(&self, credentials: Credentials) -> SubmitOutcome {
        let Some(submission) = self.tracker.begin() else {
            warn!(
                username = %credentials.username,
                "Login request already pending, submission refused"
            );
            return SubmitOutcome::Blocked;
        };

        info!(
            username = %credentials.username,
            generation = submission.generation(),
            "Submitting login"
        );

        let response = self.endpoint.obtain_pair(credentials).await;

        // Writes, navigation and alert of one submission never interleave with
        // another's, so the store always holds a single pair.
        let _commit = self.commit.lock().await;

        if !submission.is_current() {
            debug!(
                generation = submission.generation(),
                "Discarding response of superseded login request"
            );
            return SubmitOutcome::Superseded;
        }

        let result = match response {
            Ok(pair) => self.persist(&pair).await,
            Err(e) => Err(e),
        };

        // A newer submission started while the tokens were being written; it
        // overwrites them and owns the navigation.
        if !submission.is_current() {
            debug!(
                generation = submission.generation(),
                "Login request superseded while storing tokens"
            );
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(()) => {
                info!(route = %self.settings.dashboard_route, "Login succeeded, navigating");
                self.navigator.navigate(&self.settings.dashboard_route);
                SubmitOutcome::LoggedIn
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "Login failed");
                self.notifier.alert(&self.settings.failure_message);
                SubmitOutcome::Failed
            }
        }
    }

    /// Writes both tokens, access first.
    async fn persist(&self, pair: &TokenPair) -> Result<(), LoginError> {
        for (key, value) in pair.entries() {
            self.store.set(key, value).await?;
            debug!(key, "Token stored");
        }
        Ok(())
    }
}
