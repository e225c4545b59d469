use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot;

use super::RequestId;

/// The pending response body of a call.
///
/// Resolves to `Some(body)` when the server answered with status 200 and to
/// `None` when the exchange ended any other way. It never resolves if the
/// server never answers. Dropping a `Reply` does not cancel the request.
#[derive(Debug)]
pub struct Reply {
    id: RequestId,
    rx: oneshot::Receiver<String>,
}

impl Reply {
    pub(crate) fn new(id: RequestId) -> (Self, oneshot::Sender<String>) {
        let (tx, rx) = oneshot::channel();
        (Self { id, rx }, tx)
    }

    pub fn id(&self) -> RequestId {
        self.id
    }
}

impl Future for Reply {
    type Output = Option<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}
