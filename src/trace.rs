//! Text rendering of HTTP exchanges for verbose mode.
//!
//! Produces a wire-style dump (start line, headers, blank line, body)
//! that the client emits through `tracing` when verbose mode is on.
//! Rendering never touches the request or response it describes.

use crate::http::{HttpRequest, HttpResponse};

pub(crate) fn dump_request(req: &HttpRequest) -> String {
    let mut out = format!("{} {} HTTP/1.1\r\n", req.method, req.url);
    push_headers(&mut out, &req.headers);
    out.push_str("\r\n");
    if let Some(body) = &req.body {
        out.push_str(&String::from_utf8_lossy(body));
    }
    out
}

pub(crate) fn dump_response(resp: &HttpResponse) -> String {
    let mut out = format!(
        "HTTP/1.1 {} {}\r\n",
        resp.status.as_u16(),
        resp.status.canonical_reason().unwrap_or("")
    );
    push_headers(&mut out, &resp.headers);
    out.push_str("\r\n");
    out.push_str(&String::from_utf8_lossy(&resp.body));
    out
}

fn push_headers(out: &mut String, headers: &http::HeaderMap) {
    for (name, value) in headers {
        out.push_str(name.as_str());
        out.push_str(": ");
        out.push_str(value.to_str().unwrap_or("<opaque>"));
        out.push_str("\r\n");
    }
}
