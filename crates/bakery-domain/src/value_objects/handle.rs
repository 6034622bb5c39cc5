//! Raw asset handles

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Raw asset data returned by an asset resolver
///
/// A handle is deliberately not `Clone`: it is handed back to the resolver
/// that produced it through `AssetResolver::release` once baking is done.
/// Only the baked container is ever retained by the cache.
#[derive(Debug)]
pub struct RawHandle {
    id: u64,
    address: String,
    data: Vec<u8>,
    format: Option<String>,
    resolved_at: DateTime<Utc>,
}

impl RawHandle {
    /// Create a handle with a process-unique id
    pub fn new<S: Into<String>>(address: S, data: Vec<u8>) -> Self {
        Self {
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
            address: address.into(),
            data,
            format: None,
            resolved_at: Utc::now(),
        }
    }

    /// Attach a format hint (usually the file extension)
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Unique handle id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Address this handle was resolved from
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the raw data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the resolved asset is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Format hint, if the resolver provided one
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Resolution timestamp
    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }

    /// Raw bytes as UTF-8 text
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.data).map_err(|e| {
            Error::bake_with_source(format!("Asset '{}' is not valid UTF-8", self.address), e)
        })
    }
}
