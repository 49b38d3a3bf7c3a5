//! Write-path behaviour: validation, versioning, bulk deletes

mod common;

use common::{field, value};
use serde_json::json;
use strata_core::{ComponentRegistry, FieldType, RegistryEntry, Schema, SchemaField};
use strata_engine::{ConfigEngine, EngineError, ResolveContext, UpsertRequest, Value};

fn header_registry() -> ComponentRegistry {
    let schema = Schema::new()
        .add_field("title", SchemaField::new(FieldType::String).required())
        .add_field("depth", SchemaField::new(FieldType::Number));

    ComponentRegistry::new().with_component(
        "header",
        RegistryEntry::with_default(value(json!({"title": "Welcome"}))).and_schema(schema),
    )
}

async fn engine() -> ConfigEngine {
    ConfigEngine::builder()
        .with_registry(header_registry())
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_upsert_versions_are_sequential() {
    let engine = engine().await;

    for expected in 1..=4u64 {
        let version = engine
            .upsert(UpsertRequest::new(
                "header",
                value(json!({"title": format!("rev {}", expected)})),
            ))
            .await
            .unwrap();
        assert_eq!(version, expected);
    }
}

#[tokio::test]
async fn test_versions_are_independent_per_scope() {
    let engine = engine().await;

    let global = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "g"}))))
        .await
        .unwrap();
    let page = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "p"}))).page_scope("home"))
        .await
        .unwrap();
    let global_again = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "g2"}))))
        .await
        .unwrap();

    assert_eq!(global, 1);
    assert_eq!(page, 1);
    assert_eq!(global_again, 2);
}

#[tokio::test]
async fn test_validation_blocks_write_and_reports_field() {
    let engine = engine().await;

    // Missing the required title, and depth mistyped
    let result = engine
        .upsert(UpsertRequest::new(
            "header",
            value(json!({"depth": "two"})),
        ))
        .await;

    match result {
        Err(EngineError::Validation {
            component_key,
            violations,
        }) => {
            assert_eq!(component_key, "header");
            assert_eq!(violations.len(), 2);
            assert_eq!(violations[0].path, "depth");
            assert_eq!(violations[1].path, "title");
            assert!(violations[1].message.contains("required"));
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    // No version was consumed
    let history = engine.history("default", "dev", "header").await.unwrap();
    assert!(history.is_empty());

    // The effective configuration is exactly the registry default
    let effective = engine
        .resolve("default", "dev", "header", &ResolveContext::none())
        .await
        .unwrap();
    assert_eq!(effective, value(json!({"title": "Welcome"})));
}

#[tokio::test]
async fn test_failed_upsert_does_not_consume_a_version() {
    let engine = engine().await;

    engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "ok"}))))
        .await
        .unwrap();

    let rejected = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": 42}))))
        .await;
    assert!(rejected.is_err());

    let version = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "ok 2"}))))
        .await
        .unwrap();
    assert_eq!(version, 2);
}

#[tokio::test]
async fn test_unregistered_components_are_accepted_without_validation() {
    let engine = engine().await;

    // "gizmo" has no registry entry: any shape is accepted
    let version = engine
        .upsert(UpsertRequest::new(
            "gizmo",
            value(json!({"whatever": [1, 2, {"deep": null}]})),
        ))
        .await
        .unwrap();
    assert_eq!(version, 1);

    let effective = engine
        .resolve("default", "dev", "gizmo", &ResolveContext::none())
        .await
        .unwrap();
    assert!(effective.get("whatever").is_some());
}

#[tokio::test]
async fn test_partial_updates_validate_against_declared_fields_only() {
    let engine = engine().await;

    engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "base"}))))
        .await
        .unwrap();

    // A follow-up document carrying extra, undeclared fields passes: the
    // schema only constrains the fields it declares
    let version = engine
        .upsert(UpsertRequest::new(
            "header",
            value(json!({"title": "v2", "experimental": true})),
        ))
        .await
        .unwrap();
    assert_eq!(version, 2);
}

#[tokio::test]
async fn test_delete_component_is_identity_scoped() {
    let engine = engine().await;

    engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "a"}))))
        .await
        .unwrap();
    engine
        .upsert(UpsertRequest::new("footer", value(json!({"c": 1}))))
        .await
        .unwrap();
    engine
        .upsert(
            UpsertRequest::new("header", value(json!({"title": "b"})))
                .tenant("acme"),
        )
        .await
        .unwrap();

    let removed = engine.delete_component("default", "dev", "header").await.unwrap();
    assert_eq!(removed, 1);

    // Other components and other tenants are untouched
    assert_eq!(engine.history("default", "dev", "footer").await.unwrap().len(), 1);
    assert_eq!(engine.history("acme", "dev", "header").await.unwrap().len(), 1);
    assert!(engine.history("default", "dev", "header").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_all_resets_resolution_to_defaults() {
    let engine = engine().await;

    engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "override"}))))
        .await
        .unwrap();
    engine
        .upsert(UpsertRequest::new("footer", value(json!({"c": 1}))))
        .await
        .unwrap();

    let removed = engine.delete_all().await.unwrap();
    assert_eq!(removed, 2);

    let effective = engine
        .resolve("default", "dev", "header", &ResolveContext::none())
        .await
        .unwrap();
    assert_eq!(field(&effective, "title"), &value(json!("Welcome")));

    // Versioning restarts once the scope's documents are gone
    let version = engine
        .upsert(UpsertRequest::new("header", value(json!({"title": "fresh"}))))
        .await
        .unwrap();
    assert_eq!(version, 1);
}

#[tokio::test]
async fn test_provenance_is_recorded() {
    let engine = engine().await;

    engine
        .upsert(
            UpsertRequest::new("header", value(json!({"title": "t"})))
                .created_by("alice"),
        )
        .await
        .unwrap();

    let history = engine.history("default", "dev", "header").await.unwrap();
    assert_eq!(history[0].created_by, "alice");
    assert_eq!(history[0].version, 1);
}

#[tokio::test]
async fn test_upsert_value_must_be_object_when_schema_declared() {
    let engine = engine().await;

    let result = engine
        .upsert(UpsertRequest::new("header", Value::Number(3.0)))
        .await;

    match result {
        Err(EngineError::Validation { violations, .. }) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].path, "$");
        }
        other => panic!("expected validation failure, got {:?}", other),
    }
}
