//! Response provenance tagging.
//!
//! Every gateway response carries the mode that served it, so callers
//! can distinguish real backend data from the in-memory substitute
//! dataset instead of the degradation being invisible.

use serde::{Deserialize, Serialize};

/// The mode that served a gateway response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    /// The live backend answered.
    Live,
    /// The backend was unreachable; the substitute dataset (or an empty
    /// placeholder, for mutations) was returned instead.
    Fallback,
}

/// A response value tagged with the [`DataSource`] that produced it.
#[derive(Debug, Clone)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self {
            source: DataSource::Live,
            data,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            source: DataSource::Fallback,
            data,
        }
    }

    /// True when the value came from the substitute dataset. For
    /// mutations this means nothing was persisted.
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}
