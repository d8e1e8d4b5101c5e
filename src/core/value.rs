use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};

use super::object::OptionObject;
use super::schema::{FieldKind, ScalarKind};

/// Value assigned to an option field.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
    Date(NaiveDateTime),
    /// Verbatim code fragment; accepted by every field kind.
    Raw(String),
    List(Vec<OptionValue>),
    Object(OptionObject),
    Indexed(BTreeMap<u32, OptionObject>),
}

impl OptionValue {
    /// Wraps a code fragment that renders unescaped.
    #[must_use]
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }

    #[must_use]
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<OptionValue>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Short description of the value's shape, used in error messages.
    #[must_use]
    pub fn shape_name(&self) -> String {
        match self {
            Self::Bool(_) => "a boolean".to_owned(),
            Self::Number(value) if value.is_finite() => "a number".to_owned(),
            Self::Number(value) => format!("the non-finite number {value}"),
            Self::String(value) => format!("the string '{value}'"),
            Self::Date(_) => "a date".to_owned(),
            Self::Raw(_) => "raw code".to_owned(),
            Self::List(_) => "a list".to_owned(),
            Self::Object(object) => format!("a `{}` object", object.schema().name),
            Self::Indexed(_) => "an integer-labelled collection".to_owned(),
        }
    }

    /// Whether an object-like value carries nothing to render.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        match self {
            Self::Object(object) => object.is_vacant(),
            Self::Indexed(entries) => entries.is_empty(),
            _ => false,
        }
    }

    pub(crate) fn fits(&self, kind: &FieldKind) -> bool {
        if matches!(self, Self::Raw(_)) {
            return true;
        }
        match *kind {
            FieldKind::Scalar(scalar) => self.fits_scalar(scalar),
            FieldKind::Raw => false,
            FieldKind::Object(schema) => {
                matches!(self, Self::Object(object) if object.schema().is_a(schema))
            }
            FieldKind::ScalarOrObject(scalar, schema) => match self {
                Self::Object(object) => object.schema().is_a(schema),
                other => other.fits_scalar(scalar),
            },
            FieldKind::Indexed(schema) => match self {
                Self::Indexed(entries) => entries
                    .values()
                    .all(|object| object.schema().is_a(schema)),
                _ => false,
            },
            FieldKind::ObjectList(schema) => match self {
                Self::List(items) => items.iter().all(|item| match item {
                    Self::Object(object) => object.schema().is_a(schema),
                    Self::Raw(_) => true,
                    _ => false,
                }),
                _ => false,
            },
            FieldKind::ScalarList(scalar) => match self {
                Self::List(items) => items
                    .iter()
                    .all(|item| matches!(item, Self::Raw(_)) || item.fits_scalar(scalar)),
                _ => false,
            },
        }
    }

    fn fits_scalar(&self, kind: ScalarKind) -> bool {
        match (kind, self) {
            (ScalarKind::String, Self::String(_))
            | (ScalarKind::Boolean | ScalarKind::BooleanOrEnum(_), Self::Bool(_))
            | (ScalarKind::Date | ScalarKind::NumberOrDate, Self::Date(_)) => true,
            (
                ScalarKind::Number | ScalarKind::NumberOrString | ScalarKind::NumberOrDate,
                Self::Number(value),
            ) => value.is_finite(),
            (
                ScalarKind::Enum(allowed) | ScalarKind::BooleanOrEnum(allowed),
                Self::String(value),
            ) => allowed.contains(&value.as_str()),
            (ScalarKind::NumberOrString, Self::String(_)) => true,
            _ => false,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<NaiveDateTime> for OptionValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDate> for OptionValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<OptionObject> for OptionValue {
    fn from(value: OptionObject) -> Self {
        Self::Object(value)
    }
}

impl<V: Into<OptionValue>> From<Vec<V>> for OptionValue {
    fn from(items: Vec<V>) -> Self {
        Self::list(items)
    }
}
