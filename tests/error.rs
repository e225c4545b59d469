use std::collections::HashMap;

use rpcpost::{Client, Error, HttpTransport, NO_PARAMS};
use tokio::test;

#[test]
async fn serialize_error_message() {
    let client = Client::http("http://127.0.0.1:1").unwrap();
    let mut params = HashMap::new();
    params.insert(vec![0u8], 0);
    let e = client.call("foo", Some(&params), |_| {}).unwrap_err();
    assert!(matches!(e, Error::Serialize(_)));
    assert!(
        e.to_string().starts_with("failed to serialize request"),
        "{e}"
    );
}

#[test]
async fn url_error_message() {
    let e = HttpTransport::new("localhost rpc").unwrap_err();
    assert!(e.to_string().contains("localhost rpc/rpc"), "{e}");
    assert!(std::error::Error::source(&e).is_some());
}

#[test]
async fn overflow_error_message() {
    let e = Error::RequestIdOverflow;
    assert_eq!(e.to_string(), "request id overflow");
}

#[test]
async fn no_params_call_succeeds_locally() {
    let client = Client::http("http://127.0.0.1:1").unwrap();
    client.call("foo", NO_PARAMS, |_| {}).unwrap();
}
