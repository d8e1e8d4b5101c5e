use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

use super::schema::{FieldKind, FieldSpec, ScalarKind, Schema};
use super::value::OptionValue;

/// Upper bound on positional list growth through `set_path`.
const MAX_LIST_POSITION: usize = 1024;

/// JSON key marking a verbatim code fragment in [`OptionObject::from_json`].
pub const RAW_JSON_MARKER: &str = "$raw";

/// One node of an option tree, bound to the schema that declares its fields.
///
/// Values are checked against the declared field kind when they are assigned,
/// so a tree built through this API always renders.
#[derive(Clone)]
pub struct OptionObject {
    schema: &'static Schema,
    values: IndexMap<&'static str, OptionValue>,
}

impl OptionObject {
    #[must_use]
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: IndexMap::new(),
        }
    }

    /// Builds a tree from a JSON object, checking every key against `schema`.
    ///
    /// `null` members are treated as unset. A member written as
    /// `{"$raw": "code"}` becomes a raw code fragment.
    pub fn from_json(schema: &'static Schema, json: &Value) -> ChartResult<Self> {
        let Value::Object(entries) = json else {
            return Err(ChartError::ShapeMismatch {
                field: schema.name.to_owned(),
                expected: format!("a `{}` object", schema.name),
                found: json_shape(json).to_owned(),
            });
        };

        let mut object = Self::new(schema);
        for (key, member) in entries {
            let spec = object.field_spec(key)?;
            if member.is_null() {
                continue;
            }
            let value = json_to_value(spec.name, spec.kind, member)?;
            object.set(spec.name, value)?;
        }
        Ok(object)
    }

    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&OptionValue> {
        self.values.get(field)
    }

    /// Number of directly assigned fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when nothing below this node would render.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.values.values().all(OptionValue::is_vacant)
    }

    /// Assigns a field after checking it against the declared kind.
    pub fn set(&mut self, field: &str, value: impl Into<OptionValue>) -> ChartResult<&mut Self> {
        let spec = self.field_spec(field)?;
        let value = value.into();
        ensure_fits(spec, &value)?;
        self.values.insert(spec.name, value);
        Ok(self)
    }

    pub fn unset(&mut self, field: &str) -> Option<OptionValue> {
        self.values.shift_remove(field)
    }

    /// Assigns a value through a dotted path such as `hAxis.textStyle.color`
    /// or `series.1.color`.
    ///
    /// Intermediate objects are created as needed. Integer segments address
    /// entries of integer-labelled collections and positional object lists.
    pub fn set_path(
        &mut self,
        path: &str,
        value: impl Into<OptionValue>,
    ) -> ChartResult<&mut Self> {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Err(ChartError::Configuration("empty option path".to_owned()));
        };

        let mut current: &mut OptionObject = self;
        let mut cursor = 0;
        while cursor < parents.len() {
            let segment = parents[cursor];
            let spec = current.field_spec(segment)?;
            current = match spec.kind {
                FieldKind::Object(_) | FieldKind::ScalarOrObject(..) => {
                    current.object_mut(segment)?
                }
                FieldKind::Indexed(_) | FieldKind::ObjectList(_) => {
                    cursor += 1;
                    let label = parents.get(cursor).ok_or_else(|| {
                        ChartError::Configuration(format!(
                            "option path `{path}` must address an entry of `{segment}`"
                        ))
                    })?;
                    let label: u32 = label.parse().map_err(|_| {
                        ChartError::Configuration(format!(
                            "`{label}` in option path `{path}` is not an integer label"
                        ))
                    })?;
                    if matches!(spec.kind, FieldKind::Indexed(_)) {
                        current.indexed_mut(segment, label)?
                    } else {
                        current.list_item_mut(segment, label as usize)?
                    }
                }
                _ => {
                    return Err(ChartError::Configuration(format!(
                        "option `{segment}` in path `{path}` is not a nested object"
                    )));
                }
            };
            cursor += 1;
        }

        current.set(last, value)?;
        Ok(self)
    }

    /// Nested object for an `Object` or `ScalarOrObject` field, created on first access.
    pub fn object_mut(&mut self, field: &str) -> ChartResult<&mut OptionObject> {
        let spec = self.field_spec(field)?;
        let schema = match spec.kind {
            FieldKind::Object(schema) | FieldKind::ScalarOrObject(_, schema) => schema,
            _ => return Err(not_nested(spec)),
        };

        let slot = self
            .values
            .entry(spec.name)
            .or_insert_with(|| OptionValue::Object(OptionObject::new(schema)));
        if !matches!(slot, OptionValue::Object(_)) {
            *slot = OptionValue::Object(OptionObject::new(schema));
        }
        match slot {
            OptionValue::Object(object) => Ok(object),
            other => Err(mismatch(spec, other)),
        }
    }

    /// Entry `label` of an integer-labelled collection, created on first access.
    pub fn indexed_mut(&mut self, field: &str, label: u32) -> ChartResult<&mut OptionObject> {
        let spec = self.field_spec(field)?;
        let FieldKind::Indexed(schema) = spec.kind else {
            return Err(not_nested(spec));
        };

        let slot = self
            .values
            .entry(spec.name)
            .or_insert_with(|| OptionValue::Indexed(BTreeMap::new()));
        if !matches!(slot, OptionValue::Indexed(_)) {
            *slot = OptionValue::Indexed(BTreeMap::new());
        }
        match slot {
            OptionValue::Indexed(entries) => Ok(entries
                .entry(label)
                .or_insert_with(|| OptionObject::new(schema))),
            other => Err(mismatch(spec, other)),
        }
    }

    /// Item `position` of a positional object list, padding with empty objects.
    pub fn list_item_mut(
        &mut self,
        field: &str,
        position: usize,
    ) -> ChartResult<&mut OptionObject> {
        let spec = self.field_spec(field)?;
        let FieldKind::ObjectList(schema) = spec.kind else {
            return Err(not_nested(spec));
        };
        if position >= MAX_LIST_POSITION {
            return Err(ChartError::Configuration(format!(
                "position {position} of `{}` exceeds {MAX_LIST_POSITION}",
                spec.name
            )));
        }

        let slot = self
            .values
            .entry(spec.name)
            .or_insert_with(|| OptionValue::List(Vec::new()));
        if !matches!(slot, OptionValue::List(_)) {
            *slot = OptionValue::List(Vec::new());
        }
        let OptionValue::List(items) = slot else {
            return Err(not_nested(spec));
        };
        while items.len() <= position {
            items.push(OptionValue::Object(OptionObject::new(schema)));
        }
        let item = &mut items[position];
        if !matches!(item, OptionValue::Object(_)) {
            *item = OptionValue::Object(OptionObject::new(schema));
        }
        match item {
            OptionValue::Object(object) => Ok(object),
            other => Err(mismatch(spec, other)),
        }
    }

    fn field_spec(&self, field: &str) -> ChartResult<&'static FieldSpec> {
        self.schema
            .field(field)
            .ok_or_else(|| ChartError::UnknownOption {
                schema: self.schema.name,
                field: field.to_owned(),
            })
    }
}

impl PartialEq for OptionObject {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name && self.values == other.values
    }
}

impl fmt::Debug for OptionObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionObject")
            .field("schema", &self.schema.name)
            .field("values", &self.values)
            .finish()
    }
}

pub(crate) fn ensure_fits(spec: &FieldSpec, value: &OptionValue) -> ChartResult<()> {
    if value.fits(&spec.kind) {
        Ok(())
    } else {
        Err(mismatch(spec, value))
    }
}

fn mismatch(spec: &FieldSpec, value: &OptionValue) -> ChartError {
    ChartError::ShapeMismatch {
        field: spec.name.to_owned(),
        expected: spec.kind.to_string(),
        found: value.shape_name(),
    }
}

fn not_nested(spec: &FieldSpec) -> ChartError {
    ChartError::Configuration(format!(
        "option `{}` is {}, not a nested object",
        spec.name, spec.kind
    ))
}

fn json_to_value(field: &str, kind: FieldKind, json: &Value) -> ChartResult<OptionValue> {
    if let Some(code) = raw_marker(json) {
        return Ok(OptionValue::Raw(code.to_owned()));
    }

    match (kind, json) {
        (FieldKind::Object(schema) | FieldKind::ScalarOrObject(_, schema), Value::Object(_)) => {
            Ok(OptionValue::Object(OptionObject::from_json(schema, json)?))
        }
        (FieldKind::Scalar(scalar) | FieldKind::ScalarOrObject(scalar, _), other) => {
            json_to_scalar(field, scalar, other)
        }
        (FieldKind::Indexed(schema), Value::Object(entries)) => {
            let mut indexed = BTreeMap::new();
            for (label, entry) in entries {
                let label: u32 = label.parse().map_err(|_| ChartError::ShapeMismatch {
                    field: field.to_owned(),
                    expected: kind.to_string(),
                    found: format!("the label '{label}'"),
                })?;
                indexed.insert(label, OptionObject::from_json(schema, entry)?);
            }
            Ok(OptionValue::Indexed(indexed))
        }
        (FieldKind::Indexed(schema), Value::Array(items)) => {
            let mut indexed = BTreeMap::new();
            for (position, entry) in items.iter().enumerate() {
                let label = u32::try_from(position).map_err(|_| {
                    ChartError::InvalidData(format!("too many entries for `{field}`"))
                })?;
                indexed.insert(label, OptionObject::from_json(schema, entry)?);
            }
            Ok(OptionValue::Indexed(indexed))
        }
        (FieldKind::ObjectList(schema), Value::Array(items)) => items
            .iter()
            .map(|item| match raw_marker(item) {
                Some(code) => Ok(OptionValue::Raw(code.to_owned())),
                None => OptionObject::from_json(schema, item).map(OptionValue::Object),
            })
            .collect::<ChartResult<Vec<_>>>()
            .map(OptionValue::List),
        (FieldKind::ScalarList(scalar), Value::Array(items)) => items
            .iter()
            .map(|item| json_to_scalar(field, scalar, item))
            .collect::<ChartResult<Vec<_>>>()
            .map(OptionValue::List),
        (FieldKind::Raw, Value::String(code)) => Ok(OptionValue::Raw(code.clone())),
        (kind, other) => Err(ChartError::ShapeMismatch {
            field: field.to_owned(),
            expected: kind.to_string(),
            found: json_shape(other).to_owned(),
        }),
    }
}

fn json_to_scalar(field: &str, kind: ScalarKind, json: &Value) -> ChartResult<OptionValue> {
    if let Some(code) = raw_marker(json) {
        return Ok(OptionValue::Raw(code.to_owned()));
    }

    let mismatch = || ChartError::ShapeMismatch {
        field: field.to_owned(),
        expected: kind.to_string(),
        found: json_shape(json).to_owned(),
    };

    match json {
        Value::Bool(value) => Ok(OptionValue::Bool(*value)),
        Value::Number(number) => number.as_f64().map(OptionValue::Number).ok_or_else(mismatch),
        Value::String(text) if matches!(kind, ScalarKind::Date | ScalarKind::NumberOrDate) => {
            parse_date(text).map(OptionValue::Date).ok_or_else(mismatch)
        }
        Value::String(text) => Ok(OptionValue::String(text.clone())),
        _ => Err(mismatch()),
    }
}

fn raw_marker(json: &Value) -> Option<&str> {
    match json {
        Value::Object(entries) if entries.len() == 1 => {
            entries.get(RAW_JSON_MARKER).and_then(Value::as_str)
        }
        _ => None,
    }
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(chrono::NaiveTime::MIN))
        })
}

fn json_shape(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
