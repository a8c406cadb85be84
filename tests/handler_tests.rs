//! MCP tool handler tests
mod common;

use common::{extract_id_from_response, get_file_handler, get_test_handler};
use taskpad_mcp::Priority;

#[tokio::test]
async fn test_add_and_list_task() {
    let handler = get_test_handler();

    let response = handler
        .handle_add_task(
            "  Buy milk  ".to_string(),
            None,
            None,
            Some("high".to_string()),
        )
        .await
        .unwrap();
    assert!(response.contains("Task created with ID:"));
    let id = extract_id_from_response(&response);

    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.contains(&format!("[{}] Buy milk", id)));
    assert!(list.contains("high priority"));
    assert!(list.contains("No due date"));
    assert!(list.contains("No description"));
}

#[tokio::test]
async fn test_add_rejects_blank_title_and_bad_arguments() {
    let handler = get_test_handler();

    assert!(handler
        .handle_add_task("   ".to_string(), None, None, None)
        .await
        .is_err());
    assert!(handler
        .handle_add_task("ok".to_string(), None, Some("2025/01/01".to_string()), None)
        .await
        .is_err());
    assert!(handler
        .handle_add_task("ok".to_string(), None, None, Some("urgent".to_string()))
        .await
        .is_err());

    assert!(handler.lock_store().tasks().is_empty());
}

#[tokio::test]
async fn test_edit_task_replaces_fields() {
    let handler = get_test_handler();
    let id = extract_id_from_response(
        &handler
            .handle_add_task(
                "Draft".to_string(),
                Some("notes".to_string()),
                Some("2025-01-01".to_string()),
                Some("low".to_string()),
            )
            .await
            .unwrap(),
    );

    let response = handler
        .handle_edit_task(id.clone(), "Final".to_string(), None, None, None)
        .await
        .unwrap();
    assert!(response.contains("updated successfully"));

    let store = handler.lock_store();
    let task = store.find(&id).unwrap();
    assert_eq!(task.title, "Final");
    assert_eq!(task.description, None);
    assert_eq!(task.due_date, None);
    assert_eq!(task.priority, Priority::medium);
}

#[tokio::test]
async fn test_unknown_ids_are_errors() {
    let handler = get_test_handler();

    let result = handler
        .handle_edit_task("ghost".to_string(), "x".to_string(), None, None, None)
        .await;
    let err_msg = format!("{:?}", result.unwrap_err());
    assert!(err_msg.contains("ghost"));

    assert!(handler.handle_delete_task("ghost".to_string()).await.is_err());
    assert!(handler
        .handle_toggle_complete("ghost".to_string())
        .await
        .is_err());
    assert!(handler
        .handle_reorder("ghost".to_string(), "other".to_string())
        .await
        .is_err());
}

#[tokio::test]
async fn test_toggle_delete_and_stats() {
    let handler = get_test_handler();
    let a = extract_id_from_response(
        &handler
            .handle_add_task("a".to_string(), None, None, None)
            .await
            .unwrap(),
    );
    let b = extract_id_from_response(
        &handler
            .handle_add_task("b".to_string(), None, Some("2000-01-01".to_string()), None)
            .await
            .unwrap(),
    );

    let response = handler.handle_toggle_complete(a.clone()).await.unwrap();
    assert!(response.contains("marked as completed"));

    let stats = handler.handle_stats().await.unwrap();
    assert!(stats.contains("Total: 2"));
    assert!(stats.contains("Completed: 1"));
    assert!(stats.contains("Pending: 1"));
    assert!(stats.contains("Overdue: 1"));

    handler.handle_delete_task(b).await.unwrap();
    let stats = handler.handle_stats().await.unwrap();
    assert!(stats.contains("Total: 1"));
    assert!(stats.contains("Overdue: 0"));
}

#[tokio::test]
async fn test_reorder_and_manual_sort() {
    let handler = get_test_handler();
    let mut ids = Vec::new();
    for title in ["first", "second", "third"] {
        ids.push(extract_id_from_response(
            &handler
                .handle_add_task(title.to_string(), None, None, None)
                .await
                .unwrap(),
        ));
    }

    assert!(handler
        .handle_reorder(ids[0].clone(), ids[0].clone())
        .await
        .is_err());

    handler
        .handle_reorder(ids[2].clone(), ids[0].clone())
        .await
        .unwrap();

    let list = handler
        .handle_list(None, None, None, Some("manual".to_string()))
        .await
        .unwrap();
    // manual sort shows highest order first: storage is [third, first, second]
    let second = list.find("] second").unwrap();
    let first = list.find("] first").unwrap();
    let third = list.find("] third").unwrap();
    assert!(second < first && first < third);
}

#[tokio::test]
async fn test_list_criteria_persist_between_calls() {
    let handler = get_test_handler();
    handler
        .handle_add_task("Walk dog".to_string(), None, None, Some("low".to_string()))
        .await
        .unwrap();
    handler
        .handle_add_task("Wash car".to_string(), None, None, Some("high".to_string()))
        .await
        .unwrap();

    let list = handler
        .handle_list(None, Some("high".to_string()), None, None)
        .await
        .unwrap();
    assert!(list.contains("Wash car"));
    assert!(!list.contains("Walk dog"));

    // the priority filter is still active
    let list = handler
        .handle_list(None, None, Some("walk".to_string()), None)
        .await
        .unwrap();
    assert!(list.contains("No tasks found"));

    handler.handle_clear_filters().await.unwrap();
    let list = handler.handle_list(None, None, None, None).await.unwrap();
    assert!(list.contains("Found 2 task(s)"));

    assert!(handler
        .handle_list(Some("overdue".to_string()), None, None, None)
        .await
        .is_err());
}

#[tokio::test]
async fn test_reminders_tool() {
    let handler = get_test_handler();
    let today = taskpad_mcp::tasks::local_date_today();
    handler
        .handle_add_task(
            "Submit form".to_string(),
            None,
            Some(today.format("%Y-%m-%d").to_string()),
            None,
        )
        .await
        .unwrap();

    let reminders = handler.handle_reminders().await.unwrap();
    assert!(reminders.contains("1 task(s) due today!"));
    assert!(reminders.contains("Submit form"));
}

#[tokio::test]
async fn test_theme_is_saved_with_tasks() {
    let (handler, dir) = get_file_handler();
    let response = handler.handle_set_theme(None).await.unwrap();
    assert_eq!(response, "Theme set to dark");

    let response = handler
        .handle_set_theme(Some("light".to_string()))
        .await
        .unwrap();
    assert_eq!(response, "Theme set to light");
    assert!(handler
        .handle_set_theme(Some("sepia".to_string()))
        .await
        .is_err());

    let content = std::fs::read_to_string(dir.path().join("tasks.toml")).unwrap();
    assert!(content.contains("theme = \"light\""));
}
