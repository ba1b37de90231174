use std::sync::Arc;

use serde_json::{json, Map, Value};
use tempfile::TempDir;

use leavedesk_actions::{ActionRequest, ActionResponse, ActionRuntime};
use leavedesk_core::i18n::OutboundMessage;
use leavedesk_db::{
    connect_with_settings, run_pending, LeaveApplicationRepository, SqlLeaveApplicationRepository,
};

async fn migrated_store(dir: &TempDir) -> Arc<SqlLeaveApplicationRepository> {
    let url = format!("sqlite://{}", dir.path().join("leave_applications.db").display());
    let pool = connect_with_settings(&url, 1, 5, true).await.expect("create database");
    run_pending(&pool).await.expect("migrate");
    pool.close().await;
    Arc::new(SqlLeaveApplicationRepository::new(url, 5))
}

fn validate(slots: &Map<String, Value>, field: &str, text: &str) -> ActionRequest {
    let mut slots = slots.clone();
    slots.insert(field.to_string(), Value::from(text));
    serde_json::from_value(json!({
        "next_action": "validate_leave_form",
        "sender_id": "emp-1",
        "tracker": {
            "latest_message": {"text": text, "intent": {"name": "inform"}},
            "slots": slots,
            "requested_slot": field
        }
    }))
    .expect("validate request")
}

fn apply(slots: &mut Map<String, Value>, response: &ActionResponse) {
    for event in &response.events {
        let value = event.value.as_ref().map_or(Value::Null, |value| value.to_json());
        slots.insert(event.name.clone(), value);
    }
}

#[tokio::test]
async fn a_conversation_fills_the_form_and_stores_it_twice_when_submitted_twice() {
    let dir = TempDir::new().expect("tempdir");
    let store = migrated_store(&dir).await;
    let runtime = ActionRuntime::standard(store.clone()).expect("runtime");
    let mut slots = Map::new();

    let turns = [
        ("leave_type", "Annual", true),
        ("start_date", "1st of June", false),
        ("start_date", "01/06/2025", true),
        ("end_date", "2025-06-03", true),
        ("reason", "no", false),
        ("reason", "sister's wedding", true),
        ("leave_days", "৩", true),
    ];
    for (field, text, accepted) in turns {
        let response =
            runtime.handle(&validate(&slots, field, text), "req-turn").await.expect("turn");
        assert_eq!(response.events.len(), 1, "{field} should produce one slot event");
        assert_eq!(response.events[0].value.is_some(), accepted, "{field}={text}");
        assert_eq!(response.responses.is_empty(), accepted, "rejections carry one message");
        apply(&mut slots, &response);
    }
    assert_eq!(slots.get("leave_type"), Some(&json!("annual")));
    assert_eq!(slots.get("leave_days"), Some(&json!(3)));

    let submit: ActionRequest = serde_json::from_value(json!({
        "next_action": "action_submit_leave",
        "sender_id": "emp-1",
        "tracker": {"latest_message": {"text": "submit"}, "slots": slots}
    }))
    .expect("submit request");

    for _ in 0..2 {
        let response = runtime.handle(&submit, "req-submit").await.expect("submit");
        assert!(response.events.is_empty());
        assert_eq!(
            response.responses,
            vec![OutboundMessage::text(
                "✅ Leave request submitted!\nType: annual\nFrom: 01/06/2025 To: 2025-06-03\nDays: 3\nReason: sister's wedding"
            )]
        );
    }

    let stored = store.list_applications().await.expect("list");
    assert_eq!(stored.len(), 2);
    assert_ne!(stored[0].id, stored[1].id);
    assert_eq!(stored[1].reason, "sister's wedding");
}

#[tokio::test]
async fn faq_intents_reply_with_their_template() {
    let dir = TempDir::new().expect("tempdir");
    let runtime = ActionRuntime::standard(migrated_store(&dir).await).expect("runtime");

    let request: ActionRequest = serde_json::from_value(json!({
        "next_action": "action_handle_faq",
        "tracker": {"latest_message": {"text": "when is payday?", "intent": {"name": "ask_salary_date"}}}
    }))
    .expect("faq request");

    let response = runtime.handle(&request, "req-faq").await.expect("faq");
    assert_eq!(response.responses, vec![OutboundMessage::template("utter_ask_salary_date")]);
}
