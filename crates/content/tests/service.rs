//! Content service behaviour: reads, updates with pre-write snapshots,
//! and snapshot-failure tolerance.

mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use brickside_content::service::ContentService;
use brickside_core::section::Section;
use brickside_store::MemoryStore;

use common::FailingStore;

#[tokio::test]
async fn content_is_absent_before_first_write() {
    let service = ContentService::new(Arc::new(MemoryStore::new()));

    assert!(service.get_content(Section::Hero).await.unwrap().is_none());
    assert!(service.get_all_content().await.unwrap().is_empty());
}

#[tokio::test]
async fn first_update_writes_without_creating_a_version() {
    let service = ContentService::new(Arc::new(MemoryStore::new()));

    let update = service
        .update_content(Section::Hero, &json!({ "title": "Welcome" }), "a@x.com")
        .await
        .unwrap();
    assert_eq!(update.section, Section::Hero);
    assert_eq!(update.updated_by, "a@x.com");
    assert!(update.version_created.is_none(), "nothing to snapshot yet");

    let doc = service.get_content(Section::Hero).await.unwrap().unwrap();
    assert_eq!(doc, json!({ "title": "Welcome" }));
    assert!(service
        .versions()
        .list_versions(Section::Hero)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn second_update_snapshots_the_previous_document() {
    let service = ContentService::new(Arc::new(MemoryStore::new()));

    service
        .update_content(Section::About, &json!({ "title": "v1" }), "a@x.com")
        .await
        .unwrap();
    let update = service
        .update_content(Section::About, &json!({ "title": "v2" }), "a@x.com")
        .await
        .unwrap();

    let version_id = update.version_created.expect("previous doc existed");
    let snapshot = service
        .versions()
        .get_version_content(Section::About, &version_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(snapshot, json!({ "title": "v1" }));

    let versions = service.versions().list_versions(Section::About).await.unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].note.as_deref(), Some("Content update"));

    let doc = service.get_content(Section::About).await.unwrap().unwrap();
    assert_eq!(doc, json!({ "title": "v2" }));
}

#[tokio::test]
async fn get_all_content_keys_by_section_name() {
    let service = ContentService::new(Arc::new(MemoryStore::new()));

    service
        .update_content(Section::Hero, &json!({ "title": "Hero" }), "a@x.com")
        .await
        .unwrap();
    service
        .update_content(Section::Footer, &json!({ "phone": "111" }), "a@x.com")
        .await
        .unwrap();

    let all = service.get_all_content().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["hero"], json!({ "title": "Hero" }));
    assert_eq!(all["footer"], json!({ "phone": "111" }));
    assert!(!all.contains_key("about"));
}

#[tokio::test]
async fn update_proceeds_when_snapshot_fails() {
    let store = Arc::new(FailingStore::new());
    let service = ContentService::new(store.clone());

    service
        .update_content(Section::Hero, &json!({ "rev": 1 }), "a@x.com")
        .await
        .unwrap();

    // Snapshots land under _versions/; the content write must survive.
    store.fail_puts_under("_versions/");
    let update = service
        .update_content(Section::Hero, &json!({ "rev": 2 }), "a@x.com")
        .await
        .unwrap();
    assert!(update.version_created.is_none());

    store.heal();
    let doc = service.get_content(Section::Hero).await.unwrap().unwrap();
    assert_eq!(doc, json!({ "rev": 2 }));
}

#[tokio::test]
async fn failed_content_write_keeps_previous_document() {
    let store = Arc::new(FailingStore::new());
    let service = ContentService::new(store.clone());

    service
        .update_content(Section::Hero, &json!({ "rev": 1 }), "a@x.com")
        .await
        .unwrap();

    store.fail_puts_under("content/");
    let result = service
        .update_content(Section::Hero, &json!({ "rev": 2 }), "a@x.com")
        .await;
    assert!(result.is_err());

    store.heal();
    let doc = service.get_content(Section::Hero).await.unwrap().unwrap();
    assert_eq!(doc, json!({ "rev": 1 }));
}

// ---------------------------------------------------------------------------
// End-to-end: edit twice, roll back, verify the restored document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn edit_then_rollback_restores_the_earlier_document() {
    let service = ContentService::new(Arc::new(MemoryStore::new()));
    let section = Section::Hero;

    service
        .update_content(section, &json!({ "headline": "Original" }), "a@x.com")
        .await
        .unwrap();
    // Pin the snapshot's timestamp so the rollback backup (stamped with
    // the wall clock) can never reuse its id within the same second.
    let snapshot_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let snapshot_id = service
        .versions()
        .create_version_at(section, "a@x.com", None, snapshot_at)
        .await
        .unwrap()
        .unwrap();
    service
        .update_content(section, &json!({ "headline": "Revised" }), "a@x.com")
        .await
        .unwrap();

    let rollback = service
        .versions()
        .rollback_to_version(section, &snapshot_id, "a@x.com", None)
        .await
        .unwrap();

    let doc = service.get_content(section).await.unwrap().unwrap();
    assert_eq!(doc, json!({ "headline": "Original" }));

    // The revised document survives as the rollback backup.
    let backup_id = rollback.backup_version_id.unwrap();
    let backup = service
        .versions()
        .get_version_content(section, &backup_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(backup, json!({ "headline": "Revised" }));
}
