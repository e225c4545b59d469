use serde::{Deserialize, Serialize};

pub const DEFAULT_PATH: &str = "/rpc";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientOptions {
    /// Endpoint path joined to the base url.
    ///
    /// If not specified, `/rpc` is used.
    pub path: Option<String>,

    /// First id handed out by the client's counter.
    ///
    /// If not specified, ids start at 1.
    pub first_id: Option<u64>,
}

impl ClientOptions {
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }
    pub fn first_id(&self) -> u64 {
        self.first_id.unwrap_or(1)
    }
}
