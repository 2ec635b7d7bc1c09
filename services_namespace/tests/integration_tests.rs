//! Integration tests for the namespace service
//!
//! These tests validate complete workflows across path resolution, tree
//! mutation and the cwd pointer:
//! - creation, navigation and round-trip resolution
//! - capacity and uniqueness enforcement
//! - move and delete semantics, including the cwd reset policy

use fs_tree::{NodeKind, PathError, TreeError, DIR_MAX_ELEMS, MAX_BUF_FILE_SIZE};
use services_namespace::{NamespaceOperations, NamespaceService, OperationError};

fn complex_service() -> NamespaceService {
    let mut service = NamespaceService::new();
    service.create_directory(".", "Dir_1").unwrap();
    service.create_directory(".", "Dir_2").unwrap();
    service.create_directory(".", "Dir_3").unwrap();
    service.create_directory("./Dir_1", "Dir_11").unwrap();
    service.create_directory("./Dir_1", "Dir_12").unwrap();
    service.create_directory("./Dir_2", "Dir_21").unwrap();
    service.create_directory("./Dir_2", "Dir_22").unwrap();
    service
}

#[test]
fn test_round_trip_resolution() {
    let mut service = NamespaceService::new();
    let created = service.create_directory(".", "A").unwrap();
    let resolved = service.node_info("./A").unwrap();
    assert_eq!(created, resolved);

    let back = service.node_info("./A/..").unwrap();
    assert_eq!(back.name, "~");
    assert!(back.path.is_empty());
}

#[test]
fn test_nested_scenario_ancestry() {
    let mut service = NamespaceService::new();
    service.create_directory(".", "Dir_1").unwrap();
    service.create_directory("./Dir_1", "Nested_Dir").unwrap();

    let info = service.node_info("./Dir_1/Nested_Dir").unwrap();
    assert_eq!(info.name, "Nested_Dir");
    assert_eq!(info.path, vec!["~".to_string(), "Dir_1".to_string()]);
}

#[test]
fn test_backtracking_resolution() {
    let service = complex_service();
    let info = service.node_info("./Dir_1/Dir_11/../../Dir_2/Dir_22").unwrap();
    assert_eq!(info.name, "Dir_22");
    assert_eq!(info.path, vec!["~".to_string(), "Dir_2".to_string()]);
}

#[test]
fn test_sibling_resolution_fails_without_ascent() {
    let service = complex_service();
    let result = service.node_info("./Dir_1/Dir_11/Dir_22");
    assert_eq!(
        result,
        Err(OperationError::Path(PathError::SegmentNotFound(
            "Dir_22".to_string()
        )))
    );
}

#[test]
fn test_ascending_past_root_fails() {
    let service = complex_service();
    let result = service.node_info("..");
    assert_eq!(result, Err(OperationError::Path(PathError::AboveRoot)));
}

#[test]
fn test_directory_capacity_is_atomic() {
    let mut service = NamespaceService::new();
    for i in 0..DIR_MAX_ELEMS {
        service.create_directory(".", &format!("Dir__{}", i)).unwrap();
    }
    let result = service.create_directory(".", "Dummy");
    assert_eq!(result, Err(OperationError::Tree(TreeError::DirectoryFull)));
    assert_eq!(service.list_cwd().unwrap().len(), DIR_MAX_ELEMS);
}

#[test]
fn test_duplicate_name_is_atomic() {
    let mut service = NamespaceService::new();
    service.create_directory(".", "Dummy").unwrap();
    let result = service.create_buffer(".", "Dummy");
    assert_eq!(
        result,
        Err(OperationError::Tree(TreeError::DuplicateName(
            "Dummy".to_string()
        )))
    );
    assert_eq!(service.node_info("./Dummy").unwrap().kind, NodeKind::Directory);
}

#[test]
fn test_buffer_full_workflow() {
    let mut service = NamespaceService::new();
    service.create_buffer(".", "dummy.buf").unwrap();
    for i in 0..MAX_BUF_FILE_SIZE {
        service.push_buffer("./dummy.buf", &i.to_string()).unwrap();
    }
    let result = service.push_buffer("./dummy.buf", "overflow");
    assert_eq!(result, Err(OperationError::Tree(TreeError::BufferFull)));
    assert_eq!(
        service.node_info("./dummy.buf").unwrap().length,
        Some(MAX_BUF_FILE_SIZE)
    );
}

#[test]
fn test_move_updates_both_directories() {
    let mut service = complex_service();
    service.create_buffer("./Dir_1/Dir_11", "dummy.buf").unwrap();

    service.move_node("./Dir_1/Dir_11/dummy.buf", "./Dir_3").unwrap();

    assert_eq!(service.node_info("./Dir_1/Dir_11").unwrap().childs, Some(vec![]));
    assert_eq!(
        service.node_info("./Dir_3").unwrap().childs,
        Some(vec!["dummy.buf".to_string()])
    );
    let moved = service.node_info("./Dir_3/dummy.buf").unwrap();
    assert_eq!(moved.path, vec!["~".to_string(), "Dir_3".to_string()]);
}

#[test]
fn test_move_to_missing_destination_leaves_tree_unchanged() {
    let mut service = complex_service();
    service.create_buffer("./Dir_1", "dummy.buf").unwrap();

    let result = service.move_node("./Dir_1/dummy.buf", "./Nowhere");
    assert!(matches!(result, Err(OperationError::Path(_))));
    assert!(service
        .node_info("./Dir_1")
        .unwrap()
        .childs
        .unwrap()
        .contains(&"dummy.buf".to_string()));
}

#[test]
fn test_move_to_leaf_destination_fails() {
    let mut service = complex_service();
    service.create_buffer("./Dir_1", "dummy.buf").unwrap();
    service.create_binary_file(".", "file.bin", "x").unwrap();

    let result = service.move_node("./Dir_1/dummy.buf", "./file.bin");
    assert_eq!(
        result,
        Err(OperationError::NotADirectory("file.bin".to_string()))
    );
}

#[test]
fn test_move_directory_carries_subtree() {
    let mut service = complex_service();
    service.create_log_file("./Dir_1/Dir_11", "deep.log", "x").unwrap();

    service.move_node("./Dir_1/Dir_11", "./Dir_3").unwrap();

    let log = service.node_info("./Dir_3/Dir_11/deep.log").unwrap();
    assert_eq!(
        log.path,
        vec!["~".to_string(), "Dir_3".to_string(), "Dir_11".to_string()]
    );
}

#[test]
fn test_delete_resets_cwd_when_inside_deleted_subtree() {
    let mut service = complex_service();
    service.change_working_directory("./Dir_1/Dir_11").unwrap();
    assert_eq!(service.cwd_path(), "~/Dir_1/Dir_11");

    // deleting an ancestor of the cwd resets the cwd to the root
    service.delete("~/Dir_1").unwrap();
    assert_eq!(service.cwd_path(), "~");
    assert_eq!(
        service.node_info(".").unwrap().childs,
        Some(vec!["Dir_2".to_string(), "Dir_3".to_string()])
    );
}

#[test]
fn test_delete_elsewhere_keeps_cwd() {
    let mut service = complex_service();
    service.change_working_directory("./Dir_1").unwrap();
    service.delete("~/Dir_2").unwrap();
    assert_eq!(service.cwd_path(), "~/Dir_1");
}

#[test]
fn test_delete_root_fails() {
    let mut service = complex_service();
    let result = service.delete("~");
    assert_eq!(result, Err(OperationError::Tree(TreeError::CannotDeleteRoot)));
}

#[test]
fn test_leaf_content_workflow() {
    let mut service = NamespaceService::new();
    service.create_directory(".", "Dir_1").unwrap();
    service
        .create_binary_file("./Dir_1", "file.bin", "Dummy info")
        .unwrap();
    service.create_log_file("./Dir_1", "file.log", "1 - Hello").unwrap();
    service.create_buffer("./Dir_1", "file.buf").unwrap();

    assert_eq!(service.read("./Dir_1/file.bin").unwrap(), "Dummy info");
    service.append_log("./Dir_1/file.log", "\n2 - World").unwrap();
    assert_eq!(
        service.read("./Dir_1/file.log").unwrap(),
        "1 - Hello\n2 - World"
    );

    service.push_buffer("./Dir_1/file.buf", "item").unwrap();
    assert_eq!(service.pop_buffer("./Dir_1/file.buf").unwrap(), "item");
    assert_eq!(
        service.pop_buffer("./Dir_1/file.buf"),
        Err(OperationError::Tree(TreeError::EmptyBuffer))
    );
}

#[test]
fn test_render_tree_follows_cwd() {
    let mut service = complex_service();
    service.change_working_directory("./Dir_2").unwrap();
    let rendered = service.render_tree().unwrap();
    assert_eq!(rendered, "Dir_2\n   Dir_21\n   Dir_22\n");
}
