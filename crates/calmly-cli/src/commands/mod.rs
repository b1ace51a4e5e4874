//! Subcommand implementations.
//!
//! Every backend command builds a [`Context`] from the config file and the
//! stored session, then hands an explicit credential to `calmly-core`.

pub mod auth;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod journal;
pub mod mood;
pub mod profile;
mod render;

use calmly_core::{ApiClient, ApiError, Config, CoreError, DataSync, Session, SessionStore};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

pub struct Context {
    pub config: Config,
    pub sessions: SessionStore,
}

impl Context {
    pub fn load() -> Result<Self, CoreError> {
        Ok(Self {
            config: Config::load()?,
            sessions: SessionStore::open()?,
        })
    }

    pub fn client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::with_timeout(&self.config.api.base_url, self.config.api.timeout())
    }

    pub fn sync(&self) -> Result<DataSync<ApiClient>, ApiError> {
        Ok(DataSync::new(self.client()?)
            .with_fan_out(self.config.sync.fan_out())
            .with_recent_moods(self.config.display.recent_moods))
    }

    pub fn session(&self) -> Result<Session, CoreError> {
        self.sessions.require()
    }
}

/// Whether `err` (or what it wraps) is an authorization failure.
pub fn is_unauthorized(err: &(dyn std::error::Error + 'static)) -> bool {
    match err.downcast_ref::<ApiError>() {
        Some(api) => api.is_unauthorized(),
        None => matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Api(ApiError::Unauthorized)) | Some(CoreError::NotLoggedIn)
        ),
    }
}
