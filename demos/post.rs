use std::env;

use rpcpost::Client;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (Some(base_url), Some(method)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: post <base-url> <method> [params-json] [user-id session]");
    };
    let params: Value = match args.next() {
        Some(p) => serde_json::from_str(&p)?,
        None => Value::Null,
    };
    let user_id = args.next();
    let session = args.next();

    let client = Client::http(&base_url)?;
    let reply = client.request_with_identity(
        &method,
        Some(&params),
        user_id.as_deref(),
        session.as_deref(),
    )?;
    match reply.await {
        Some(body) => println!("{body}"),
        None => eprintln!("no response"),
    }
    Ok(())
}
