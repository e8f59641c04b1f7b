//! Home page loading state machine.
//!
//! DESIGN
//! ======
//! The page mounts in `Loading`, issues both status fetches concurrently, and
//! folds their joint outcome into a single terminal transition. A resolution
//! arriving after the page has already settled is discarded, so a slow or
//! duplicate response can never clobber a terminal state.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use api::HealthInfo;

use crate::net::{ApiClient, ClientError};

/// The finite set of rendering states the home page can be in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Requests are outstanding.
    Loading,
    /// Both requests resolved successfully.
    Loaded { health: HealthInfo, message: String },
    /// At least one request failed.
    Failed { error: String },
}

impl LoadState {
    /// Whether the state is terminal (`Loaded` or `Failed`).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Loading
    }
}

/// The home page: a [`LoadState`] plus its text rendering.
#[derive(Clone, Debug, Default)]
pub struct HomePage {
    state: LoadState,
}

impl HomePage {
    /// A freshly mounted page, rendering the loading text.
    #[must_use]
    pub fn new() -> Self {
        Self { state: LoadState::Loading }
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Visible text lines for the current state.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        match &self.state {
            LoadState::Loading => vec!["Loading...".to_owned()],
            LoadState::Loaded { message, .. } => {
                vec!["Backend is connected!".to_owned(), message.clone()]
            }
            LoadState::Failed { error } => {
                vec![format!("Backend connection failed: {error}")]
            }
        }
    }

    /// Fold a joint fetch outcome into the page. The first terminal
    /// transition wins; later resolutions are ignored.
    pub fn resolve(&mut self, outcome: Result<(HealthInfo, String), ClientError>) {
        if self.state.is_terminal() {
            return;
        }
        self.state = match outcome {
            Ok((health, message)) => LoadState::Loaded { health, message },
            Err(e) => LoadState::Failed { error: e.to_string() },
        };
    }

    /// Issue both status fetches concurrently and settle the page. Both must
    /// succeed to reach `Loaded`; either failure folds to `Failed`.
    pub async fn load(&mut self, client: &ApiClient) {
        let outcome = tokio::try_join!(client.fetch_health(), client.fetch_message())
            .map(|(health, msg)| (health, msg.message));
        self.resolve(outcome);
    }
}
