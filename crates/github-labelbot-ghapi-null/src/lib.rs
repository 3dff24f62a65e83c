//! Null driver for GH API.
//!
//! Used when no API credentials are configured, so that offline commands
//! still run.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use github_labelbot_ghapi_interface::{types::GhLabel, ApiService, Result};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait(?Send)]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn labels_list(&self, _owner: &str, _name: &str) -> Result<Vec<GhLabel>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, _owner: &str, _name: &str, _label: &GhLabel) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(
        &self,
        _owner: &str,
        _name: &str,
        _current_name: &str,
        _label: &GhLabel,
    ) -> Result<()> {
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn labels_delete(&self, _owner: &str, _name: &str, _label_name: &str) -> Result<()> {
        Ok(())
    }
}
