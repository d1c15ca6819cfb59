//! Character resolution with offline fallback

use crate::fallback::pick_sample;
use crate::remote::RemoteSource;
use crate::source::CharacterSource;
use std::time::Duration;
use storychar_core::CharacterRecord;
use tracing::warn;

/// Whether to try the remote API or go straight to the local samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    #[default]
    RemotePreferred,
    OfflineForced,
}

/// Produces exactly one fully-populated character per call.
///
/// Remote failures of any kind are absorbed: logged, then answered from
/// the sample set. `resolve` has no error channel.
pub struct Resolver<S> {
    source: S,
    mode: FetchMode,
}

impl Resolver<RemoteSource> {
    /// Resolver over the HTTP source, the configuration the CLI uses.
    pub fn remote(endpoint: impl Into<String>, timeout: Duration, mode: FetchMode) -> Self {
        Self::new(RemoteSource::with_endpoint(endpoint).with_timeout(timeout)).with_mode(mode)
    }
}

impl<S: CharacterSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            mode: FetchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    /// Resolve one character. In `OfflineForced` mode the source is never
    /// consulted; otherwise a single fetch attempt is made and any failure
    /// falls through to the sample set.
    pub async fn resolve(&self) -> CharacterRecord {
        if self.mode == FetchMode::OfflineForced {
            return pick_sample();
        }

        match self.source.fetch().await {
            Ok(raw) => raw.normalize(),
            Err(e) => {
                warn!("{} fetch failed: {}", self.source.name(), e);
                pick_sample()
            }
        }
    }
}
