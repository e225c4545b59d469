//! A small asynchronous [JSON-RPC 2.0] client that posts each request to an
//! HTTP endpoint.
//!
//! Every call takes the next id from an [`IdCounter`], serializes an envelope
//! of the form
//!
//! ```json
//! {"jsonrpc":"2.0","method":"foo","params":{"a":1},"id":1}
//! ```
//!
//! and sends it as the body of a single POST request to `/rpc`. The response
//! body is handed back unparsed, and only when the server answered with status
//! 200. Any other outcome is dropped without notice: there are no retries and
//! no timeouts.
//!
//! ```no_run
//! use rpcpost::{Client, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::http("http://localhost:4443")?;
//!
//!     client.call("echo", Some(&json!(["hello"])), |body| println!("{body}"))?;
//!
//!     if let Some(body) = client
//!         .request_with_identity("my_team_info", Some(&json!([])), Some(&7), Some("key"))?
//!         .await
//!     {
//!         println!("{body}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [JSON-RPC 2.0]: https://www.jsonrpc.org/specification
use std::sync::Arc;

use serde::Serialize;
use tokio::spawn;
use tracing::{debug, trace};

mod error;
mod http;
mod id_counter;
mod message;
mod options;
mod reply;
mod transport;

pub use error::*;
pub use http::*;
pub use id_counter::*;
pub use message::*;
pub use options::*;
pub use reply::*;
pub use transport::*;

/// Builds request envelopes and dispatches them through a [`Transport`].
///
/// Cloning a `Client` shares both the transport and the id counter.
/// Dispatching requires a running Tokio runtime.
#[derive(Clone)]
pub struct Client {
    transport: Arc<BoxTransport>,
    counter: IdCounter,
}

impl Client {
    pub fn new(transport: impl Transport + Send + Sync + 'static) -> Self {
        Self::with_counter(transport, IdCounter::new())
    }

    pub fn with_counter(
        transport: impl Transport + Send + Sync + 'static,
        counter: IdCounter,
    ) -> Self {
        Self {
            transport: Arc::new(transport.boxed()),
            counter,
        }
    }

    /// A client posting to `/rpc` on `base_url`.
    pub fn http(base_url: &str) -> Result<Self> {
        Self::from_options(base_url, &ClientOptions::default())
    }

    pub fn from_options(base_url: &str, options: &ClientOptions) -> Result<Self> {
        Ok(Self::with_counter(
            HttpTransport::with_options(base_url, options)?,
            IdCounter::starting_at(options.first_id()),
        ))
    }

    pub fn counter(&self) -> &IdCounter {
        &self.counter
    }

    /// Sends a request and invokes `callback` with the raw response body.
    ///
    /// `callback` runs at most once, and only if the server answers with
    /// status 200. The only error returned is a failure to build the request,
    /// in which case nothing is sent.
    pub fn call<P>(
        &self,
        method: &str,
        params: Option<&P>,
        callback: impl FnOnce(String) + Send + 'static,
    ) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let id = self.counter.next()?;
        self.send(id, method, params, None, callback)
    }

    /// Like [`Client::call`], with `user_id` and `session` attached to the
    /// envelope.
    ///
    /// The pair is attached only when both are present and non-null.
    /// Otherwise the envelope carries neither.
    pub fn call_with_identity<P, U, S>(
        &self,
        method: &str,
        params: Option<&P>,
        user_id: Option<&U>,
        session: Option<&S>,
        callback: impl FnOnce(String) + Send + 'static,
    ) -> Result<()>
    where
        P: Serialize + ?Sized,
        U: Serialize + ?Sized,
        S: Serialize + ?Sized,
    {
        let id = self.counter.next()?;
        let identity = Identity::from_parts(user_id, session)?;
        self.send(id, method, params, identity, callback)
    }

    /// Sends a request and returns a future of the raw response body.
    pub fn request<P>(&self, method: &str, params: Option<&P>) -> Result<Reply>
    where
        P: Serialize + ?Sized,
    {
        let id = self.counter.next()?;
        let (reply, tx) = Reply::new(id);
        self.send(id, method, params, None, move |body| {
            let _ = tx.send(body);
        })?;
        Ok(reply)
    }

    pub fn request_with_identity<P, U, S>(
        &self,
        method: &str,
        params: Option<&P>,
        user_id: Option<&U>,
        session: Option<&S>,
    ) -> Result<Reply>
    where
        P: Serialize + ?Sized,
        U: Serialize + ?Sized,
        S: Serialize + ?Sized,
    {
        let id = self.counter.next()?;
        let identity = Identity::from_parts(user_id, session)?;
        let (reply, tx) = Reply::new(id);
        self.send(id, method, params, identity, move |body| {
            let _ = tx.send(body);
        })?;
        Ok(reply)
    }

    fn send<P>(
        &self,
        id: RequestId,
        method: &str,
        params: Option<&P>,
        identity: Option<Identity>,
        on_success: impl FnOnce(String) + Send + 'static,
    ) -> Result<()>
    where
        P: Serialize + ?Sized,
    {
        let body = RequestMessage::new(id, method, params, identity).to_text()?;
        debug!(%id, method, state = %CallState::Sent, "dispatching request");
        let transport = self.transport.clone();
        spawn(async move {
            let exchange = transport.post(body).await;
            let state = exchange.state();
            let status = exchange.status();
            match exchange.into_success_body() {
                Some(body) => {
                    trace!(%id, %state, "request completed");
                    on_success(body);
                }
                None => debug!(%id, %state, ?status, "dropping request without response"),
            }
        });
        Ok(())
    }
}
