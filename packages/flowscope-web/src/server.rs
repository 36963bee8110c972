//! HTTP endpoint
//!
//! One synchronous accept loop; every request is answered in-line. Analysis
//! failures still produce a 200 with the error rendered into the page, so
//! the editor content is never lost on a bad snippet.

use std::io::Cursor;
use std::io::Read;

use anyhow::anyhow;
use flowscope_analysis::AnalysisDriver;
use tiny_http::{Method, Request, Response, Server};
use tracing::{info, warn};

use crate::assets::STATIC_FILES;
use crate::page;

pub struct ViewerServer {
    server: Server,
    driver: AnalysisDriver,
    default_source: String,
}

impl ViewerServer {
    /// Bind the listening socket; port 0 picks an ephemeral port
    pub fn bind(
        addr: &str,
        driver: AnalysisDriver,
        default_source: String,
    ) -> anyhow::Result<Self> {
        let server =
            Server::http(addr).map_err(|e| anyhow!("cannot bind http server on {}: {}", addr, e))?;
        Ok(Self {
            server,
            driver,
            default_source,
        })
    }

    /// Port actually bound
    pub fn port(&self) -> u16 {
        self.server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(0)
    }

    /// Serve requests forever
    pub fn run(self) {
        for mut request in self.server.incoming_requests() {
            let response = self.handle(&mut request);
            let status = response.status_code().0;
            info!("{} {} -> {}", request.method(), request.url(), status);
            if let Err(e) = request.respond(response) {
                warn!("failed to send response: {}", e);
            }
        }
    }

    fn handle(&self, request: &mut Request) -> Response<Cursor<Vec<u8>>> {
        let url = request.url().to_string();
        let path = url.split('?').next().unwrap_or("");

        match (request.method(), path) {
            (Method::Get, "/") => self.page(self.default_source.clone()),
            (Method::Post, "/") => {
                let mut body = String::new();
                if request.as_reader().read_to_string(&mut body).is_err() {
                    return plain(400, "unreadable request body");
                }
                let source = form_value(&body, "javaCode")
                    .unwrap_or_else(|| self.default_source.clone());
                self.page(source)
            }
            (Method::Get, path) if path.starts_with("/static/") => {
                static_file(&path["/static/".len()..])
            }
            _ => plain(404, "not found"),
        }
    }

    /// Analyze and render; failures become the error page, never a 5xx
    fn page(&self, source: String) -> Response<Cursor<Vec<u8>>> {
        let html = match self.driver.run(&source) {
            Ok(values) => page::success_page(&source, &values),
            Err(e) => {
                warn!("analysis failed: {}", e);
                page::error_page(&source, &e)
            }
        };
        with_content_type(Response::from_string(html), "text/html; charset=utf-8")
    }
}

fn static_file(name: &str) -> Response<Cursor<Vec<u8>>> {
    match STATIC_FILES.get(name) {
        Some((content_type, body)) => {
            with_content_type(Response::from_string(*body), content_type)
        }
        None => plain(404, "not found"),
    }
}

fn plain(code: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    with_content_type(Response::from_string(body).with_status_code(code), "text/plain")
}

fn with_content_type(
    response: Response<Cursor<Vec<u8>>>,
    content_type: &str,
) -> Response<Cursor<Vec<u8>>> {
    response.with_header(
        format!("Content-Type: {}", content_type)
            .parse::<tiny_http::Header>()
            .unwrap(),
    )
}

/// Look up one form-urlencoded parameter
fn form_value(body: &str, name: &str) -> Option<String> {
    body.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if url_decode(key) == name {
            Some(url_decode(value))
        } else {
            None
        }
    })
}

/// Decode application/x-www-form-urlencoded: `+` is a space, `%XX` a byte.
/// Malformed escapes pass through untouched.
fn url_decode(raw: &str) -> String {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut iter = raw.bytes();
    while let Some(b) = iter.next() {
        match b {
            b'+' => bytes.push(b' '),
            b'%' => match (iter.next(), iter.next()) {
                (Some(hi), Some(lo)) => match (hex_value(hi), hex_value(lo)) {
                    (Some(hi), Some(lo)) => bytes.push(hi << 4 | lo),
                    _ => {
                        bytes.push(b'%');
                        bytes.push(hi);
                        bytes.push(lo);
                    }
                },
                (Some(hi), None) => {
                    bytes.push(b'%');
                    bytes.push(hi);
                }
                _ => bytes.push(b'%'),
            },
            other => bytes.push(other),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
