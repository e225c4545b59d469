use tracing::trace;
use url::Url;

use super::{ClientOptions, Error, Exchange, Result, Transport};

/// Posts envelopes to a JSON-RPC endpoint over HTTP.
///
/// The request carries the envelope text as its body and no custom headers.
/// No timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, &ClientOptions::default())
    }

    pub fn with_options(base_url: &str, options: &ClientOptions) -> Result<Self> {
        let url = endpoint_url(base_url, options.path())?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Transport for HttpTransport {
    async fn post(&self, body: String) -> Exchange {
        let response = match self.client.post(self.url.clone()).body(body).send().await {
            Ok(response) => response,
            Err(e) => {
                trace!(url = %self.url, error = %e, "http request failed");
                return Exchange::Failed;
            }
        };
        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Exchange::Complete { status, body },
            Err(e) => {
                trace!(url = %self.url, status, error = %e, "failed to read response body");
                Exchange::Failed
            }
        }
    }
}

fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let to_error = |source| Error::Url {
        url: format!("{base_url}{path}"),
        source,
    };
    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_default_path() -> Result<()> {
        let t = HttpTransport::new("http://localhost:4443")?;
        assert_eq!(t.url().as_str(), "http://localhost:4443/rpc");
        Ok(())
    }

    #[test]
    fn endpoint_url_replaces_base_path() -> Result<()> {
        let t = HttpTransport::new("http://localhost:8000/app/index.html")?;
        assert_eq!(t.url().as_str(), "http://localhost:8000/rpc");
        Ok(())
    }

    #[test]
    fn endpoint_url_custom_path() -> Result<()> {
        let options = ClientOptions {
            path: Some("/api/rpc".into()),
            ..ClientOptions::default()
        };
        let t = HttpTransport::with_options("https://example.com", &options)?;
        assert_eq!(t.url().as_str(), "https://example.com/api/rpc");
        Ok(())
    }

    #[test]
    fn endpoint_url_invalid() {
        let e = HttpTransport::new("not a url").unwrap_err();
        assert!(matches!(e, Error::Url { .. }), "{e}");
    }
}
