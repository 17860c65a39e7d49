use std::net::SocketAddr;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Response;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

use crate::core::handler::{respond, HttpRequest};
use crate::utils::error::Result;

/// Local HTTP server that answers every request, on any path and with any
/// method, with the handler's fixed response.
pub struct PreviewServer {
    listener: TcpListener,
}

impl PreviewServer {
    pub async fn bind(host: &str, port: u16) -> Result<Self> {
        let listener = TcpListener::bind((host, port)).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the task is dropped. Invocations share no
    /// state, so each connection gets its own task with no coordination.
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer_addr) = self.listener.accept().await?;
            tracing::debug!("Accepted connection from {}", peer_addr);

            tokio::spawn(async move {
                let io = TokioIo::new(stream);
                let conn = http1::Builder::new()
                    .serve_connection(io, service_fn(|_req| async { build_response() }));
                if let Err(e) = conn.await {
                    tracing::warn!("Connection error: {}", e);
                }
            });
        }
    }
}

fn build_response() -> std::result::Result<Response<Full<Bytes>>, hyper::http::Error> {
    let fixed = respond(&HttpRequest::default());

    let mut builder = Response::builder().status(fixed.status_code);
    for (name, value) in &fixed.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.body(Full::new(Bytes::from(fixed.body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_response_carries_fixed_fields() {
        let response = build_response().unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/html"
        );
    }
}
