use parse_display::Display;
use serde::Serialize;
use serde_json::Value;

use super::Result;


pub const JSONRPC_VERSION: &str = "2.0";

/// Largest integer a JavaScript peer can represent without loss.
pub const MAX_SAFE_INTEGER: u64 = 9007199254740991;

/// Omits the `params` member from the envelope.
pub const NO_PARAMS: Option<&()> = None;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[display("{0}")]
#[serde(transparent)]
pub struct RequestId(pub(crate) u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}
impl From<RequestId> for u64 {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

/// The `user_id` / `session` pair attached to an envelope.
///
/// Either both members are emitted or neither is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub user_id: Value,
    pub session: Value,
}

impl Identity {
    /// Builds an identity only when both parts are present and neither
    /// serializes to `null`.
    pub fn from_parts<U, S>(user_id: Option<&U>, session: Option<&S>) -> Result<Option<Self>>
    where
        U: Serialize + ?Sized,
        S: Serialize + ?Sized,
    {
        let (Some(user_id), Some(session)) = (user_id, session) else {
            return Ok(None);
        };
        let user_id = serde_json::to_value(user_id)?;
        let session = serde_json::to_value(session)?;
        if user_id.is_null() || session.is_null() {
            return Ok(None);
        }
        Ok(Some(Self { user_id, session }))
    }
}

/// A JSON-RPC 2.0 request envelope.
///
/// Members are written in the order `jsonrpc`, `method`, `params`, `id`,
/// followed by the identity pair when one is attached. `params` is
/// serialized directly so the caller's own member order is kept.
#[derive(Debug, Serialize)]
pub struct RequestMessage<'a, P: ?Sized> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<&'a P>,
    pub id: RequestId,
    #[serde(flatten)]
    pub identity: Option<Identity>,
}

impl<'a, P> RequestMessage<'a, P>
where
    P: Serialize + ?Sized,
{
    pub fn new(
        id: RequestId,
        method: &'a str,
        params: Option<&'a P>,
        identity: Option<Identity>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id,
            identity,
        }
    }

    pub fn to_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
