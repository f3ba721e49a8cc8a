use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CartId(Uuid);

impl CartId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
