//! HTTP surface contract
//!
//! Pins the error envelope shape, the status codes clients branch on, and
//! the content type split between JSON metadata and plain-text file reads.

#[cfg(test)]
mod tests {
    use memfsd::http::{route, ApiResponse};
    use serde_json::Value;
    use services_namespace::NamespaceService;

    fn envelope(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_error_envelope_shape() {
        let mut service = NamespaceService::new();
        let response = route(&mut service, "DELETE", "/", "{}");
        assert_eq!(response.status, 400);
        assert!(response.is_json);

        let value = envelope(&response);
        assert_eq!(value["status"], "error");
        assert!(value["message"].is_string());
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_unresolvable_path_is_404() {
        let mut service = NamespaceService::new();
        let response = route(&mut service, "GET", "/?path=./missing", "");
        assert_eq!(response.status, 404);
        assert_eq!(envelope(&response)["status"], "error");
    }

    #[test]
    fn test_semantic_errors_are_400() {
        let mut service = NamespaceService::new();
        route(&mut service, "POST", "/directory", r#"{"path": ".", "name": "Dir_1"}"#);
        let duplicate = route(&mut service, "POST", "/directory", r#"{"path": ".", "name": "Dir_1"}"#);
        assert_eq!(duplicate.status, 400);
        assert_eq!(envelope(&duplicate)["status"], "error");
    }

    #[test]
    fn test_metadata_is_json_and_reads_are_plain_text() {
        let mut service = NamespaceService::new();
        let created = route(
            &mut service,
            "POST",
            "/binaryfile",
            r#"{"path": ".", "name": "file.bin", "information": "data"}"#,
        );
        assert!(created.is_json);

        let read = route(&mut service, "GET", "/binaryfile?path=./file.bin", "");
        assert!(!read.is_json);
        assert_eq!(read.body, "data");
    }

    #[test]
    fn test_unknown_route_is_404() {
        let mut service = NamespaceService::new();
        let response = route(&mut service, "GET", "/nothing-here", "");
        assert_eq!(response.status, 404);
        assert_eq!(envelope(&response)["status"], "error");
    }
}
