use std::fmt;

use indexmap::IndexMap;

/// Scalar shapes accepted by an option field.
///
/// The `*Or*` variants are closed sums for fields the runtime accepts in more
/// than one form (for example `isStacked: true` or `isStacked: 'percent'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Date,
    Enum(&'static [&'static str]),
    BooleanOrEnum(&'static [&'static str]),
    NumberOrString,
    NumberOrDate,
}

/// Declared shape of an option field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// Verbatim code fragment.
    Raw,
    Object(&'static Schema),
    /// Either a scalar or a nested object, e.g. `backgroundColor`.
    ScalarOrObject(ScalarKind, &'static Schema),
    /// Integer-labelled collection rendered as `{0: {...}, 1: {...}}`.
    Indexed(&'static Schema),
    /// Positional collection of objects rendered as `[{...}, {...}]`.
    ObjectList(&'static Schema),
    /// Positional collection of scalars rendered as `[a, b]`.
    ScalarList(ScalarKind),
}

/// Value rendered for an unset field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Number(f64),
    Str(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: Option<FieldDefault>,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::String))
    }

    #[must_use]
    pub const fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Number))
    }

    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Boolean))
    }

    #[must_use]
    pub const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Scalar(ScalarKind::Enum(allowed)))
    }

    #[must_use]
    pub const fn object(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldKind::Object(schema))
    }

    #[must_use]
    pub const fn indexed(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldKind::Indexed(schema))
    }

    #[must_use]
    pub const fn object_list(name: &'static str, schema: &'static Schema) -> Self {
        Self::new(name, FieldKind::ObjectList(schema))
    }

    #[must_use]
    pub const fn list(name: &'static str, item: ScalarKind) -> Self {
        Self::new(name, FieldKind::ScalarList(item))
    }

    #[must_use]
    pub const fn with_default(self, default: FieldDefault) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

/// Named option schema.
///
/// A schema either stands alone or extends a base schema. Extensions only
/// declare their additional or overridden fields; see [`Schema::fields`] for
/// how the two are merged.
#[derive(Debug, PartialEq)]
pub struct Schema {
    pub name: &'static str,
    pub extends: Option<&'static Schema>,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Resolved field list in declaration order.
    ///
    /// Base fields come first. An extension field with the same name as a base
    /// field replaces it in place; other extension fields are appended.
    #[must_use]
    pub fn fields(&'static self) -> Vec<&'static FieldSpec> {
        let mut chain = Vec::new();
        let mut current = Some(self);
        while let Some(schema) = current {
            chain.push(schema);
            current = schema.extends;
        }

        let mut resolved: IndexMap<&'static str, &'static FieldSpec> = IndexMap::new();
        for schema in chain.into_iter().rev() {
            for field in schema.fields {
                resolved.insert(field.name, field);
            }
        }
        resolved.into_values().collect()
    }

    /// Looks a field up, most-derived declaration first.
    #[must_use]
    pub fn field(&'static self, name: &str) -> Option<&'static FieldSpec> {
        let mut current = Some(self);
        while let Some(schema) = current {
            if let Some(field) = schema.fields.iter().find(|field| field.name == name) {
                return Some(field);
            }
            current = schema.extends;
        }
        None
    }

    /// Whether `self` is `other` or extends it. Schemas are compared by
    /// identity, not by name.
    #[must_use]
    pub fn is_a(&'static self, other: &'static Schema) -> bool {
        let mut current = Some(self);
        while let Some(schema) = current {
            if std::ptr::eq(schema, other) {
                return true;
            }
            current = schema.extends;
        }
        false
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("a string"),
            Self::Number => f.write_str("a finite number"),
            Self::Boolean => f.write_str("a boolean"),
            Self::Date => f.write_str("a date"),
            Self::Enum(allowed) => write!(f, "one of {}", quoted_list(allowed)),
            Self::BooleanOrEnum(allowed) => {
                write!(f, "a boolean or one of {}", quoted_list(allowed))
            }
            Self::NumberOrString => f.write_str("a number or a string"),
            Self::NumberOrDate => f.write_str("a number or a date"),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => kind.fmt(f),
            Self::Raw => f.write_str("raw code"),
            Self::Object(schema) => write!(f, "a `{}` object", schema.name),
            Self::ScalarOrObject(kind, schema) => {
                write!(f, "{kind} or a `{}` object", schema.name)
            }
            Self::Indexed(schema) => {
                write!(f, "an integer-labelled collection of `{}`", schema.name)
            }
            Self::ObjectList(schema) => write!(f, "a list of `{}`", schema.name),
            Self::ScalarList(kind) => write!(f, "a list of {kind}"),
        }
    }
}

fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
