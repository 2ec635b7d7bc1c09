//! HTTP request routing
//!
//! Routing is a pure function over (method, url, body) so the API surface
//! can be tested without opening a socket. Mutating endpoints take a JSON
//! object body; reads pass the path in the query string.

use fs_tree::NodeKind;
use serde::Deserialize;
use serde_json::json;
use services_namespace::{NamespaceOperations, NamespaceService, NodeInfo};
use std::collections::HashMap;

/// A routed response, ready to be written out by the server loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
    /// Whether the body is JSON (controls the Content-Type header)
    pub is_json: bool,
}

impl ApiResponse {
    fn node(info: &NodeInfo) -> Self {
        match serde_json::to_string(info) {
            Ok(body) => Self {
                status: 200,
                body,
                is_json: true,
            },
            Err(e) => Self::error(500, &format!("Serialization failed: {}", e)),
        }
    }

    fn text(body: String) -> Self {
        Self {
            status: 200,
            body,
            is_json: false,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({"status": "error", "message": message}).to_string(),
            is_json: true,
        }
    }
}

/// Request arguments, decoded from the JSON body of mutating endpoints
#[derive(Debug, Default, Deserialize)]
struct Args {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    information: Option<String>,
    #[serde(default)]
    src: Option<String>,
    #[serde(default)]
    dest: Option<String>,
}

impl Args {
    fn from_body(body: &str) -> Result<Self, ApiResponse> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(body)
            .map_err(|e| ApiResponse::error(400, &format!("Invalid JSON body: {}", e)))
    }
}

/// Splits a request url into its route and decoded query parameters
fn parse_url(url: &str) -> (&str, HashMap<String, String>) {
    let (route, query) = match url.split_once('?') {
        Some((route, query)) => (route, query),
        None => (url, ""),
    };

    let mut params = HashMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode_component(key), decode_component(value));
    }
    (route, params)
}

/// Decodes percent escapes and `+` in a query component
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let escape = raw
                    .get(i + 1..i + 3)
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match escape {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Looks up a node and checks its kind before a content operation
fn expect_kind(
    service: &NamespaceService,
    path: &str,
    kind: NodeKind,
    mismatch: &str,
) -> Result<(), ApiResponse> {
    let info = service
        .node_info(path)
        .map_err(|e| ApiResponse::error(400, &e.to_string()))?;
    if info.kind != kind {
        return Err(ApiResponse::error(400, mismatch));
    }
    Ok(())
}

/// Routes one request against the namespace service
pub fn route(service: &mut NamespaceService, method: &str, url: &str, body: &str) -> ApiResponse {
    let (path_part, params) = parse_url(url);

    let result = match (method, path_part) {
        ("GET", "/") => {
            let path = params.get("path").map(String::as_str).unwrap_or(".");
            return match service.node_info(path) {
                Ok(info) => ApiResponse::node(&info),
                Err(e) => ApiResponse::error(404, &e.to_string()),
            };
        }

        ("PUT", "/") => Args::from_body(body).and_then(|args| {
            let (Some(src), Some(dest)) = (args.src, args.dest) else {
                return Err(ApiResponse::error(
                    400,
                    "You need to specify src and dest to move elements!",
                ));
            };
            service
                .move_node(&src, &dest)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        ("DELETE", "/") => Args::from_body(body).and_then(|args| {
            let Some(path) = args.path else {
                return Err(ApiResponse::error(400, "Argument path is required!"));
            };
            service
                .delete(&path)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        ("POST", "/directory") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(name)) = (args.path, args.name) else {
                return Err(ApiResponse::error(400, "Arguments path and name are required"));
            };
            service
                .create_directory(&path, &name)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        ("GET", "/binaryfile") => {
            let Some(path) = params.get("path") else {
                return ApiResponse::error(400, "Argument path is required");
            };
            expect_kind(service, path, NodeKind::Binary, "File is not BinaryFile").and_then(
                |()| {
                    service
                        .read(path)
                        .map(ApiResponse::text)
                        .map_err(|e| ApiResponse::error(400, &e.to_string()))
                },
            )
        }

        ("POST", "/binaryfile") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(name)) = (args.path, args.name) else {
                return Err(ApiResponse::error(400, "Arguments path and name are required"));
            };
            let Some(information) = args.information else {
                return Err(ApiResponse::error(400, "Argument information is required"));
            };
            service
                .create_binary_file(&path, &name, &information)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        ("GET", "/logtextfile") => {
            let Some(path) = params.get("path") else {
                return ApiResponse::error(400, "Argument path is required");
            };
            expect_kind(service, path, NodeKind::Log, "File is not LogFile").and_then(|()| {
                service
                    .read(path)
                    .map(ApiResponse::text)
                    .map_err(|e| ApiResponse::error(400, &e.to_string()))
            })
        }

        ("PUT", "/logtextfile") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(information)) = (args.path, args.information) else {
                return Err(ApiResponse::error(
                    400,
                    "Arguments path and information are required",
                ));
            };
            expect_kind(service, &path, NodeKind::Log, "File is not LogFile").and_then(|()| {
                service
                    .append_log(&path, &information)
                    .map(ApiResponse::text)
                    .map_err(|e| ApiResponse::error(400, &e.to_string()))
            })
        }),

        ("POST", "/logtextfile") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(name)) = (args.path, args.name) else {
                return Err(ApiResponse::error(400, "Arguments path and name are required"));
            };
            let information = args.information.unwrap_or_default();
            service
                .create_log_file(&path, &name, &information)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        ("GET", "/bufferfile") => {
            let Some(path) = params.get("path") else {
                return ApiResponse::error(400, "Argument path is required");
            };
            expect_kind(service, path, NodeKind::Buffer, "File is not BufferFile").and_then(
                |()| {
                    service
                        .pop_buffer(path)
                        .map(ApiResponse::text)
                        .map_err(|e| ApiResponse::error(400, &e.to_string()))
                },
            )
        }

        ("PUT", "/bufferfile") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(information)) = (args.path, args.information) else {
                return Err(ApiResponse::error(
                    400,
                    "Arguments path and information are required",
                ));
            };
            expect_kind(service, &path, NodeKind::Buffer, "File is not BufferFile").and_then(
                |()| {
                    service
                        .push_buffer(&path, &information)
                        .map(|info| ApiResponse::node(&info))
                        .map_err(|e| ApiResponse::error(400, &e.to_string()))
                },
            )
        }),

        ("POST", "/bufferfile") => Args::from_body(body).and_then(|args| {
            let (Some(path), Some(name)) = (args.path, args.name) else {
                return Err(ApiResponse::error(400, "Arguments path and name are required"));
            };
            service
                .create_buffer(&path, &name)
                .map(|info| ApiResponse::node(&info))
                .map_err(|e| ApiResponse::error(400, &e.to_string()))
        }),

        _ => return ApiResponse::error(404, "Not found"),
    };

    match result {
        Ok(response) => response,
        Err(response) => response,
    }
}
