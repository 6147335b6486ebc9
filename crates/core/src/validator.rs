//! Structural checks for externally supplied watchface objects
//!
//! The validator is a shallow safety gate: it checks that required fields
//! exist and that enum-like tags are known. `style`, `props` and
//! `properties` stay open-ended and are never inspected.

use pomowatch_types::{is_truthy, ComponentKind, LayoutType};
use serde_json::Value;

/// Returns `true` when `candidate` is safe to treat as a watchface config
pub fn validate(candidate: &Value) -> bool {
    check(candidate).is_ok()
}

/// Like [`validate`], but reports the first failed check
pub fn check(candidate: &Value) -> Result<(), String> {
    let root = candidate
        .as_object()
        .ok_or_else(|| "watchface must be a JSON object".to_string())?;

    for field in ["id", "name", "version"] {
        match root.get(field) {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => return Err(format!("'{}' must be a non-empty string", field)),
        }
    }

    let theme = root
        .get("theme")
        .and_then(Value::as_object)
        .ok_or_else(|| "'theme' must be an object".to_string())?;
    let layout = root
        .get("layout")
        .and_then(Value::as_object)
        .ok_or_else(|| "'layout' must be an object".to_string())?;
    let components = root
        .get("components")
        .and_then(Value::as_array)
        .ok_or_else(|| "'components' must be an array".to_string())?;

    let colors = theme
        .get("colors")
        .and_then(Value::as_object)
        .ok_or_else(|| "'theme.colors' must be an object".to_string())?;
    for color in ["background", "foreground"] {
        if !colors.get(color).is_some_and(is_truthy) {
            return Err(format!("'theme.colors.{}' is required", color));
        }
    }

    let layout_type = layout.get("type").and_then(Value::as_str).unwrap_or_default();
    if !LayoutType::KNOWN.contains(&layout_type) {
        return Err(format!("unsupported layout type '{}'", layout_type));
    }

    for (index, component) in components.iter().enumerate() {
        let kind = component.get("type");
        let id = component.get("id");
        if !kind.is_some_and(is_truthy) || !id.is_some_and(is_truthy) {
            return Err(format!("component #{} is missing 'type' or 'id'", index));
        }
        let kind = kind.and_then(Value::as_str).unwrap_or_default();
        if !ComponentKind::KNOWN.contains(&kind) {
            return Err(format!("component #{} has unknown type '{}'", index, kind));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "id": "myface",
            "name": "My Face",
            "version": "1.0.0",
            "theme": {"colors": {"background": "#000", "foreground": "#fff"}},
            "layout": {"type": "circular"},
            "components": [{"type": "time", "id": "time"}]
        })
    }

    fn without(path: &[&str]) -> Value {
        let mut value = minimal();
        let (last, parents) = path.split_last().unwrap();
        let mut cursor = &mut value;
        for key in parents {
            cursor = cursor.get_mut(*key).unwrap();
        }
        cursor.as_object_mut().unwrap().remove(*last);
        value
    }

    #[test]
    fn test_minimal_config_is_valid() {
        assert!(validate(&minimal()));
    }

    #[test]
    fn test_empty_component_list_is_valid() {
        let mut value = minimal();
        value["components"] = json!([]);
        assert!(validate(&value));
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        for path in [
            &["id"][..],
            &["name"],
            &["version"],
            &["theme"],
            &["layout"],
            &["components"],
            &["theme", "colors"],
            &["theme", "colors", "background"],
            &["theme", "colors", "foreground"],
            &["layout", "type"],
        ] {
            assert!(!validate(&without(path)), "accepted config without {:?}", path);
        }
    }

    #[test]
    fn test_wrongly_typed_fields_are_rejected() {
        let mut value = minimal();
        value["id"] = json!(42);
        assert!(!validate(&value));

        let mut value = minimal();
        value["name"] = json!("");
        assert!(!validate(&value));

        let mut value = minimal();
        value["theme"] = json!("dark");
        assert!(!validate(&value));

        let mut value = minimal();
        value["components"] = json!({"type": "time", "id": "time"});
        assert!(!validate(&value));

        assert!(!validate(&json!([minimal()])));
    }

    #[test]
    fn test_layout_type_must_be_known() {
        let mut value = minimal();
        value["layout"]["type"] = json!("hexagonal");
        assert!(!validate(&value));

        for kind in ["circular", "rectangular", "custom"] {
            value["layout"]["type"] = json!(kind);
            assert!(validate(&value));
        }
    }

    #[test]
    fn test_components_need_type_and_known_kind() {
        let mut value = minimal();
        value["components"] = json!([{"type": "time"}]);
        assert!(!validate(&value));

        value["components"] = json!([{"id": "t"}]);
        assert!(!validate(&value));

        value["components"] = json!([{"type": "time", "id": "t"}, {"type": "bogus", "id": "b"}]);
        assert!(!validate(&value));
        assert!(check(&value).unwrap_err().contains("bogus"));
    }

    #[test]
    fn test_open_maps_are_not_inspected() {
        let mut value = minimal();
        value["components"][0]["style"] = json!({"anything": [1, {"nested": null}]});
        value["components"][0]["props"] = json!({"showElapsed": "maybe"});
        value["theme"]["customStyles"] = json!({"@import": 7});
        assert!(validate(&value));
    }
}
