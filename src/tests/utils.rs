use crate::listings::ListingStore;
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use tempfile::TempDir;

/// A scratch data directory seeded with the given (file name, contents) pairs.
/// Keep the `TempDir` alive for as long as the state is used.
pub fn state_with_files(files: &[(&str, &str)]) -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("create temp dir");

    for (name, contents) in files {
        std::fs::write(dir.path().join(name), contents).expect("write fixture");
    }

    let state = AppState::new(ListingStore::new(dir.path()));
    (dir, state)
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
