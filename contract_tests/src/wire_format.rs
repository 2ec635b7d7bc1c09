//! Node metadata wire contract
//!
//! Pins the JSON shape clients parse: the four `type` strings, the field
//! names of node metadata, the optionality of `childs` and `length`, and
//! the root-inclusive `path` ancestry.

// ===== Stable kind strings =====
#[allow(dead_code)]
const KIND_DIRECTORY: &str = "directory";
#[allow(dead_code)]
const KIND_BINARY: &str = "binary";
#[allow(dead_code)]
const KIND_LOGFILE: &str = "logfile";
#[allow(dead_code)]
const KIND_BUFFER: &str = "buffer";

#[cfg(test)]
mod tests {
    use super::*;
    use fs_tree::NodeKind;
    use serde_json::{json, Value};
    use services_namespace::{NamespaceOperations, NamespaceService, NodeInfo};

    fn seeded_service() -> NamespaceService {
        let mut service = NamespaceService::new();
        service.create_directory(".", "Dir_1").unwrap();
        service.create_binary_file("./Dir_1", "file.bin", "data").unwrap();
        service.create_log_file("./Dir_1", "file.log", "entry").unwrap();
        service.create_buffer("./Dir_1", "file.buf").unwrap();
        service
    }

    fn info_json(service: &NamespaceService, path: &str) -> Value {
        let info = service.node_info(path).unwrap();
        serde_json::to_value(&info).unwrap()
    }

    #[test]
    fn test_kind_strings_are_stable() {
        assert_eq!(serde_json::to_string(&NodeKind::Directory).unwrap(), format!("\"{}\"", KIND_DIRECTORY));
        assert_eq!(serde_json::to_string(&NodeKind::Binary).unwrap(), format!("\"{}\"", KIND_BINARY));
        assert_eq!(serde_json::to_string(&NodeKind::Log).unwrap(), format!("\"{}\"", KIND_LOGFILE));
        assert_eq!(serde_json::to_string(&NodeKind::Buffer).unwrap(), format!("\"{}\"", KIND_BUFFER));
    }

    #[test]
    fn test_root_metadata_shape() {
        let service = NamespaceService::new();
        let value = info_json(&service, ".");
        assert_eq!(
            value,
            json!({
                "name": "~",
                "type": "directory",
                "path": [],
                "childs": [],
            })
        );
    }

    #[test]
    fn test_directory_metadata_shape() {
        let service = seeded_service();
        let value = info_json(&service, "./Dir_1");
        assert_eq!(
            value,
            json!({
                "name": "Dir_1",
                "type": "directory",
                "path": ["~"],
                "childs": ["file.bin", "file.log", "file.buf"],
            })
        );
    }

    #[test]
    fn test_leaf_metadata_omits_directory_fields() {
        let service = seeded_service();
        let value = info_json(&service, "./Dir_1/file.bin");
        assert_eq!(
            value,
            json!({
                "name": "file.bin",
                "type": "binary",
                "path": ["~", "Dir_1"],
            })
        );
        assert!(value.get("childs").is_none());
        assert!(value.get("length").is_none());
    }

    #[test]
    fn test_buffer_metadata_carries_length() {
        let mut service = seeded_service();
        service.push_buffer("./Dir_1/file.buf", "item").unwrap();
        let value = info_json(&service, "./Dir_1/file.buf");
        assert_eq!(
            value,
            json!({
                "name": "file.buf",
                "type": "buffer",
                "path": ["~", "Dir_1"],
                "length": 1,
            })
        );
    }

    #[test]
    fn test_nested_path_is_root_inclusive_ancestry() {
        let mut service = seeded_service();
        service.create_directory("./Dir_1", "Nested_Dir").unwrap();
        service.create_directory("./Dir_1/Nested_Dir", "Deep").unwrap();
        let value = info_json(&service, "./Dir_1/Nested_Dir/Deep");
        assert_eq!(value["path"], json!(["~", "Dir_1", "Nested_Dir"]));
    }

    #[test]
    fn test_metadata_round_trips_through_serde() {
        let service = seeded_service();
        let info = service.node_info("./Dir_1").unwrap();
        let text = serde_json::to_string(&info).unwrap();
        let back: NodeInfo = serde_json::from_str(&text).unwrap();
        assert_eq!(back, info);
    }
}
