use chrono::{TimeZone, Utc};
use pipenode_core::domain::interval::DestinationInterval;
use pipenode_core::domain::node::{Destination, NodeId};
use pipenode_core::dto::node::NodeSummary;
use pipenode_core::{PipelineBackend, PipelineNode, PipelineStage, SourceRecord, normalize};
use serde_json::json;

#[test]
fn test_plugin_transformation_example() {
    let record = SourceRecord::from_value(json!({
        "id": 5,
        "name": "Geo",
        "enabled": true,
        "updated_at": "2024-01-01",
        "order": 2,
        "plugin": { "id": 31, "name": "GeoIP" },
        "config": {}
    }))
    .unwrap();

    let node = normalize(record, PipelineStage::Transformation).unwrap();
    let day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    assert_eq!(node.backend(), PipelineBackend::Plugin);
    assert_eq!(node.stage(), PipelineStage::Transformation);
    assert_eq!(node.id(), NodeId::Numeric(5));
    assert_eq!(node.order(), Some(2));
    assert_eq!(node.created_at(), day);
    assert_eq!(node.updated_at(), day);
}

#[test]
fn test_batch_export_destination_example() {
    let record = SourceRecord::from_value(json!({
        "id": "uuid-1",
        "name": "S3 export",
        "paused": false,
        "interval": "hour",
        "destination": { "type": "S3" },
        "created_at": "2024-02-01"
    }))
    .unwrap();

    let node = normalize(record, PipelineStage::Destination).unwrap();
    assert_eq!(
        node.created_at(),
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    );
    let summary = serde_json::to_value(NodeSummary::from(&node)).unwrap();

    assert_eq!(summary["backend"], json!("batch_export"));
    assert_eq!(summary["stage"], json!("destination"));
    assert_eq!(summary["enabled"], json!(true));
    assert_eq!(summary["description"], json!("S3 batch export"));
    assert_eq!(summary["interval"], json!("hour"));
    assert_eq!(summary["created_at"], summary["updated_at"]);
    assert_eq!(summary["service"]["type"], json!("S3"));
}

#[test]
fn test_hog_function_example() {
    let record = SourceRecord::from_value(json!({
        "id": 77,
        "name": "Filter",
        "enabled": false,
        "created_at": "2024-03-01",
        "hog": "return event"
    }))
    .unwrap();

    let node = normalize(record, PipelineStage::Destination).unwrap();

    match &node {
        PipelineNode::Destination(Destination::HogFunction(function)) => {
            assert_eq!(function.id, "hog-77");
        }
        other => panic!("expected hog function destination, got {:?}", other.backend()),
    }
    assert_eq!(node.interval(), Some(DestinationInterval::Realtime));
    assert!(!node.enabled());
    assert_eq!(
        node.updated_at(),
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_batch_export_cannot_be_a_transformation() {
    let record = SourceRecord::from_value(json!({
        "id": "uuid-2",
        "name": "Nightly",
        "paused": true,
        "interval": "day",
        "destination": { "type": "BigQuery" },
        "created_at": "2024-02-01T00:00:00Z"
    }))
    .unwrap();

    let err = normalize(record, PipelineStage::Transformation).unwrap_err();
    assert!(err.is_incompatible_stage());
    assert_eq!(
        err.to_string(),
        "cannot build a transformation node from a batch_export record"
    );
}

#[test]
fn test_batch_export_keeps_uuid_id() {
    let id = uuid::Uuid::new_v4();
    let record = SourceRecord::from_value(json!({
        "id": id,
        "name": "Warehouse",
        "interval": "every 5 minutes",
        "destination": { "type": "Snowflake", "config": { "database": "events" } },
        "created_at": "2024-04-01T12:30:00Z"
    }))
    .unwrap();

    let node = normalize(record, PipelineStage::Destination).unwrap();

    assert_eq!(node.id(), NodeId::Text(id.to_string()));
    // paused defaults to false when the API omits it
    assert!(node.enabled());
    assert_eq!(node.interval().map(|i| i.to_string()).as_deref(), Some("every 5 minutes"));
}

#[test]
fn test_unparseable_timestamp_rejects_record() {
    let err = SourceRecord::from_value(json!({
        "id": 77,
        "name": "Filter",
        "enabled": true,
        "created_at": "last tuesday",
        "hog": "return event"
    }))
    .unwrap_err();

    assert!(err.to_string().contains("invalid timestamp: last tuesday"));
}
