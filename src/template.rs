use serde_json::{Map, Value};

use crate::composer::Composition;

pub const ALARM_RESOURCE_TYPE: &str = "AWS::CloudWatch::Alarm";

/// Renders composed alarms as a `Resources` document keyed by logical id.
pub fn build_alarm_document(construct_id: &str, composition: &Composition) -> Result<Value, serde_json::Error> {
    let mut resources = Map::new();
    for alarm in composition.alarms() {
        let logical_id = format!("{}{}", construct_id, alarm.kind.logical_suffix());
        resources.insert(
            logical_id,
            serde_json::json!({
                "Type": ALARM_RESOURCE_TYPE,
                "Properties": serde_json::to_value(alarm)?,
            }),
        );
    }
    Ok(serde_json::json!({ "Resources": resources }))
}

/// Properties of every alarm resource in a rendered document.
pub fn alarm_properties(document: &Value) -> Vec<&Value> {
    document
        .get("Resources")
        .and_then(|r| r.as_object())
        .map(|resources| {
            resources
                .values()
                .filter(|r| r.get("Type").and_then(|t| t.as_str()) == Some(ALARM_RESOURCE_TYPE))
                .filter_map(|r| r.get("Properties"))
                .collect()
        })
        .unwrap_or_default()
}
