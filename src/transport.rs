use std::{future::Future, pin::Pin};

use parse_display::Display;

/// Terminal result of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// The server answered. `status` is the HTTP status code.
    Complete { status: u16, body: String },
    /// No answer was received: the connection failed or the body could not be read.
    Failed,
}

impl Exchange {
    pub const SUCCESS_STATUS: u16 = 200;

    pub fn state(&self) -> CallState {
        match self {
            Self::Complete {
                status: Self::SUCCESS_STATUS,
                ..
            } => CallState::CompletedSuccess,
            Self::Complete { .. } => CallState::CompletedOther,
            Self::Failed => CallState::Failed,
        }
    }

    /// The response body, only for an exchange that completed with status 200.
    pub fn into_success_body(self) -> Option<String> {
        match self {
            Self::Complete {
                status: Self::SUCCESS_STATUS,
                body,
            } => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Complete { status, .. } => Some(*status),
            Self::Failed => None,
        }
    }
}

/// Lifecycle of a single call.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(style = "kebab-case")]
pub enum CallState {
    Idle,
    Sent,
    CompletedSuccess,
    CompletedOther,
    Failed,
}

/// Carries a serialized envelope to the server.
///
/// Implementations report every outcome through [`Exchange`]; they never
/// retry and never apply a timeout of their own.
pub trait Transport {
    fn post(&self, body: String) -> impl Future<Output = Exchange> + Send;

    fn boxed(self) -> BoxTransport
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxTransport(Box::new(self))
    }
}

pub struct BoxTransport(Box<dyn DynTransport + Send + Sync + 'static>);
impl Transport for BoxTransport {
    async fn post(&self, body: String) -> Exchange {
        self.0.dyn_post(body).await
    }
    fn boxed(self) -> BoxTransport
    where
        Self: Sized + Send + Sync + 'static,
    {
        self
    }
}

trait DynTransport {
    fn dyn_post<'a>(&'a self, body: String) -> Pin<Box<dyn Future<Output = Exchange> + Send + 'a>>;
}
impl<T: Transport> DynTransport for T {
    fn dyn_post<'a>(&'a self, body: String) -> Pin<Box<dyn Future<Output = Exchange> + Send + 'a>> {
        Box::pin(self.post(body))
    }
}
