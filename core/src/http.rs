//! Plain-data HTTP exchange between `BirdClient` and whatever transport the
//! caller uses. Nothing here opens a socket.

/// HTTP method for a request. The bird API only reads and creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Method, absolute URL, headers and optional JSON body for one bird API call.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status and body the transport got back; `BirdClient::parse_*` reads these.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
