use serde::Serialize;
use vodca::References;

use crate::entity::{ImageUrl, Isbn};

/// One resolution attempt's inputs. Replaced wholesale whenever either input changes.
#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct CoverRequest {
    isbn: Option<Isbn>,
    fallback: Option<ImageUrl>,
}

impl CoverRequest {
    pub fn new(isbn: Option<Isbn>, fallback: Option<ImageUrl>) -> Self {
        Self { isbn, fallback }
    }

    /// The state reached when the lookup yields nothing usable.
    pub fn fallback_state(&self) -> CoverState {
        CoverState::from_fallback(self.fallback.clone())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "state", content = "url", rename_all = "snake_case")]
pub enum CoverState {
    /// Nothing requested yet.
    Idle,
    /// Lookup in flight; consumers render a placeholder.
    Loading,
    Resolved(ImageUrl),
    NoCover,
}

impl CoverState {
    pub fn from_fallback(fallback: Option<ImageUrl>) -> Self {
        match fallback {
            Some(url) => CoverState::Resolved(url),
            None => CoverState::NoCover,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CoverSource {
    Primary,
    Fallback,
    Blank,
}

/// Render-time image source. A failed load swaps to the fallback once,
/// a second failure leaves the slot blank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoverDisplay {
    primary: Option<ImageUrl>,
    fallback: Option<ImageUrl>,
    source: CoverSource,
}

impl CoverDisplay {
    pub fn new(state: &CoverState, fallback: Option<ImageUrl>) -> Self {
        match state {
            CoverState::Resolved(url) => Self {
                primary: Some(url.clone()),
                fallback,
                source: CoverSource::Primary,
            },
            CoverState::Idle | CoverState::Loading | CoverState::NoCover => Self {
                primary: None,
                fallback,
                source: CoverSource::Blank,
            },
        }
    }

    pub fn source(&self) -> CoverSource {
        self.source
    }

    pub fn current(&self) -> Option<&ImageUrl> {
        match self.source {
            CoverSource::Primary => self.primary.as_ref(),
            CoverSource::Fallback => self.fallback.as_ref(),
            CoverSource::Blank => None,
        }
    }

    pub fn on_load_error(&mut self) {
        self.source = match (self.source, &self.fallback) {
            (CoverSource::Primary, Some(fallback)) if self.primary.as_ref() != Some(fallback) => {
                CoverSource::Fallback
            }
            _ => CoverSource::Blank,
        };
    }
}
