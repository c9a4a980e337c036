//! Input widget resolution for attribute descriptors.
//!
//! # Responsibility
//! - Pick the input kind an attribute editor should render.
//! - Collect widget settings (read-only, unit, range, options) from meta.
//!
//! # Invariants
//! - Resolution is pure: same descriptor, same `InputSpec`.
//! - GeoJSON points always resolve to `Map`; meta never refines it.
//! - Meta refinements only apply to the base kind they name:
//!   `Text -> Select`, `Text -> Textarea`, `Number -> Range`.

use crate::model::attribute::AttributeDescriptor;
use crate::model::meta::MetaItemType;
use crate::model::value::{Value, ValueType};
use crate::model::value_descriptor::AttributeValueType;
use serde::Serialize;

/// Input widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Text,
    Textarea,
    Select,
    Number,
    Range,
    Switch,
    Json,
    Map,
}

/// Resolved editor settings for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSpec {
    pub kind: InputType,
    pub icon: &'static str,
    pub label: Option<String>,
    pub read_only: bool,
    pub unit: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Allowed values; non-empty only for `Select`-capable attributes.
    pub options: Vec<Value>,
}

/// Resolves the input widget for `descriptor`.
///
/// Base kind follows the value descriptor: GeoJSON point renders a map,
/// otherwise string -> text, number -> number, boolean -> switch, and
/// anything else -> raw JSON. Meta then refines the base kind:
/// - non-empty ALLOWED_VALUES turns text into select;
/// - truthy MULTILINE turns (non-select) text into textarea;
/// - both RANGE_MIN and RANGE_MAX turn number into range.
pub fn resolve_input<D>(descriptor: &D) -> InputSpec
where
    D: AttributeDescriptor + ?Sized,
{
    let value_descriptor = descriptor.value_descriptor();
    let number = |kind: MetaItemType| descriptor.meta_value(kind).and_then(Value::as_f64);

    let mut spec = InputSpec {
        kind: base_kind(value_descriptor),
        icon: value_descriptor.icon(),
        label: descriptor.label().map(str::to_string),
        read_only: descriptor
            .meta_value(MetaItemType::ReadOnly)
            .and_then(Value::as_bool)
            .unwrap_or(false),
        unit: descriptor
            .meta_value(MetaItemType::UnitType)
            .and_then(Value::as_str)
            .map(str::to_string),
        min: number(MetaItemType::RangeMin),
        max: number(MetaItemType::RangeMax),
        step: number(MetaItemType::Step),
        options: descriptor
            .meta_value(MetaItemType::AllowedValues)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
    };

    let base = spec.kind;
    match base {
        InputType::Text if !spec.options.is_empty() => spec.kind = InputType::Select,
        InputType::Text if is_truthy(descriptor.meta_value(MetaItemType::Multiline)) => {
            spec.kind = InputType::Textarea
        }
        InputType::Number if spec.min.is_some() && spec.max.is_some() => {
            spec.kind = InputType::Range
        }
        _ => {}
    }
    spec
}

fn base_kind(value_descriptor: AttributeValueType) -> InputType {
    if value_descriptor == AttributeValueType::GeoJsonPoint {
        return InputType::Map;
    }
    match value_descriptor.value_type() {
        ValueType::String => InputType::Text,
        ValueType::Number => InputType::Number,
        ValueType::Boolean => InputType::Switch,
        ValueType::Object | ValueType::Array => InputType::Json,
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

/// Status line shown under an attribute input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperState {
    /// A write is in flight.
    Sending,
    /// The last write failed.
    SendFailed,
    /// Value last updated at this epoch-ms timestamp.
    Updated(i64),
}

impl HelperState {
    /// Sending wins over failure, failure over the update timestamp.
    /// A missing or zero timestamp yields no helper text.
    pub fn resolve(sending: bool, failed: bool, timestamp: Option<i64>) -> Option<Self> {
        if sending {
            return Some(Self::Sending);
        }
        if failed {
            return Some(Self::SendFailed);
        }
        timestamp.filter(|ts| *ts != 0).map(Self::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::{resolve_input, HelperState, InputType};
    use crate::model::attribute::{AttributeDescriptor, DerivedAttributeDescriptor};
    use crate::model::attribute_type::AttributeType;
    use crate::model::meta::MetaItemType;
    use crate::model::value_descriptor::AttributeValueType;
    use serde_json::json;

    #[test]
    fn base_kind_follows_value_type() {
        assert_eq!(resolve_input(&AttributeType::String).kind, InputType::Text);
        assert_eq!(resolve_input(&AttributeType::Email).kind, InputType::Text);
        assert_eq!(resolve_input(&AttributeType::Number).kind, InputType::Number);
        assert_eq!(
            resolve_input(&AttributeType::ConsoleProviders).kind,
            InputType::Json
        );
        let flag = DerivedAttributeDescriptor {
            value_descriptor: AttributeValueType::Boolean,
            ..AttributeType::String.with_name("FLAG", Vec::new())
        };
        assert_eq!(resolve_input(&flag).kind, InputType::Switch);
    }

    #[test]
    fn geo_json_point_renders_map_and_ignores_refinements() {
        let location = AttributeType::Location.with_name(
            "LOCATION",
            vec![MetaItemType::AllowedValues.with_initial_value(json!(["a"]))],
        );
        let spec = resolve_input(&location);
        assert_eq!(spec.kind, InputType::Map);
        assert_eq!(spec.icon, "map-marker");
    }

    #[test]
    fn allowed_values_turn_text_into_select() {
        let mode = AttributeType::String.with_name(
            "MODE",
            vec![MetaItemType::AllowedValues.with_initial_value(json!(["auto", "manual"]))],
        );
        let spec = resolve_input(&mode);
        assert_eq!(spec.kind, InputType::Select);
        assert_eq!(spec.options, vec![json!("auto"), json!("manual")]);

        let empty = AttributeType::String.with_name(
            "MODE",
            vec![MetaItemType::AllowedValues.with_initial_value(json!([]))],
        );
        assert_eq!(resolve_input(&empty).kind, InputType::Text);
    }

    #[test]
    fn multiline_turns_text_into_textarea() {
        let notes = AttributeType::String.with_name(
            "NOTES",
            vec![MetaItemType::Multiline.with_initial_value(true)],
        );
        assert_eq!(resolve_input(&notes).kind, InputType::Textarea);

        let off = AttributeType::String.with_name(
            "NOTES",
            vec![MetaItemType::Multiline.with_initial_value(false)],
        );
        assert_eq!(resolve_input(&off).kind, InputType::Text);

        let options_win = AttributeType::String.with_name(
            "NOTES",
            vec![
                MetaItemType::Multiline.with_initial_value(true),
                MetaItemType::AllowedValues.with_initial_value(json!(["x"])),
            ],
        );
        assert_eq!(resolve_input(&options_win).kind, InputType::Select);
    }

    #[test]
    fn range_needs_both_bounds_on_numbers() {
        let dimmer = AttributeType::Number.with_name(
            "DIMMER",
            vec![
                MetaItemType::RangeMin.with_initial_value(0),
                MetaItemType::RangeMax.with_initial_value(100),
                MetaItemType::Step.with_initial_value(5),
            ],
        );
        let spec = resolve_input(&dimmer);
        assert_eq!(spec.kind, InputType::Range);
        assert_eq!(spec.min, Some(0.0));
        assert_eq!(spec.max, Some(100.0));
        assert_eq!(spec.step, Some(5.0));

        let half = AttributeType::Number.with_name(
            "DIMMER",
            vec![MetaItemType::RangeMin.with_initial_value(0)],
        );
        assert_eq!(resolve_input(&half).kind, InputType::Number);

        let text = AttributeType::String.with_name(
            "NAME",
            vec![
                MetaItemType::RangeMin.with_initial_value(0),
                MetaItemType::RangeMax.with_initial_value(10),
            ],
        );
        assert_eq!(resolve_input(&text).kind, InputType::Text);
    }

    #[test]
    fn read_only_unit_and_label_come_from_meta() {
        let temperature = AttributeType::Number.with_name(
            "TEMPERATURE",
            vec![
                MetaItemType::Label.with_initial_value("Temperature"),
                MetaItemType::ReadOnly.with_initial_value(true),
                MetaItemType::UnitType.with_initial_value("celsius"),
            ],
        );
        let spec = resolve_input(&temperature);
        assert!(spec.read_only);
        assert_eq!(spec.unit.as_deref(), Some("celsius"));
        assert_eq!(spec.label.as_deref(), Some("Temperature"));
        assert_eq!(spec.icon, "numeric");

        let plain = resolve_input(&AttributeType::SurfaceArea);
        assert!(!plain.read_only);
        assert_eq!(plain.unit, None);
        assert_eq!(plain.label.as_deref(), AttributeType::SurfaceArea.label());
    }

    #[test]
    fn resolves_through_trait_objects() {
        let descriptor: &dyn AttributeDescriptor = &AttributeType::GeoCity;
        assert_eq!(resolve_input(descriptor).kind, InputType::Text);
    }

    #[test]
    fn helper_state_priority() {
        assert_eq!(
            HelperState::resolve(true, true, Some(5)),
            Some(HelperState::Sending)
        );
        assert_eq!(
            HelperState::resolve(false, true, Some(5)),
            Some(HelperState::SendFailed)
        );
        assert_eq!(
            HelperState::resolve(false, false, Some(1_700_000_000_000)),
            Some(HelperState::Updated(1_700_000_000_000))
        );
        assert_eq!(HelperState::resolve(false, false, Some(0)), None);
        assert_eq!(HelperState::resolve(false, false, None), None);
    }
}
