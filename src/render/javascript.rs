use tracing::trace;

use crate::core::object::ensure_fits;
use crate::core::{FieldDefault, OptionObject, OptionValue};
use crate::error::ChartResult;

use super::OptionOutput;
use super::literal::{bool_literal, datetime_literal, number_literal, string_literal};

/// Renders option trees as JavaScript object literals.
///
/// Keys are written unquoted in schema order and separators carry no
/// whitespace, e.g. `{legend:"none",hAxis:{title:"Year"}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavascriptOptionOutput;

impl JavascriptOptionOutput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn render_object(&self, object: &OptionObject) -> ChartResult<String> {
        let mut members = Vec::new();
        for spec in object.schema().fields() {
            let rendered = match object.get(spec.name) {
                Some(value) => {
                    ensure_fits(spec, value)?;
                    if value.is_vacant() {
                        None
                    } else {
                        Some(self.render_value(spec.name, value)?)
                    }
                }
                None => spec.default.map(render_default),
            };
            if let Some(rendered) = rendered {
                members.push(format!("{}:{rendered}", spec.name));
            }
        }
        Ok(format!("{{{}}}", members.join(",")))
    }

    fn render_value(&self, field: &str, value: &OptionValue) -> ChartResult<String> {
        match value {
            OptionValue::Bool(flag) => Ok(bool_literal(*flag).to_owned()),
            OptionValue::Number(number) => number_literal(field, *number),
            OptionValue::String(text) => Ok(string_literal(text)),
            OptionValue::Date(date) => Ok(datetime_literal(*date)),
            OptionValue::Raw(code) => Ok(code.clone()),
            OptionValue::Object(object) => self.render_object(object),
            OptionValue::List(items) => {
                let rendered = items
                    .iter()
                    .map(|item| self.render_value(field, item))
                    .collect::<ChartResult<Vec<_>>>()?;
                Ok(format!("[{}]", rendered.join(",")))
            }
            OptionValue::Indexed(entries) => {
                let mut rendered = Vec::with_capacity(entries.len());
                for (label, object) in entries {
                    rendered.push(format!("{label}:{}", self.render_object(object)?));
                }
                Ok(format!("{{{}}}", rendered.join(",")))
            }
        }
    }
}

impl OptionOutput for JavascriptOptionOutput {
    fn render(&self, options: &OptionObject) -> ChartResult<String> {
        self.render_object(options)
    }

    fn draw(&self, options_name: &str, options: &OptionObject) -> ChartResult<String> {
        let literal = self.render_object(options)?;
        trace!(
            options_name,
            schema = options.schema().name,
            bytes = literal.len(),
            "rendered options"
        );
        Ok(format!("var {options_name} = {literal};"))
    }
}

fn render_default(default: FieldDefault) -> String {
    match default {
        FieldDefault::Bool(flag) => bool_literal(flag).to_owned(),
        FieldDefault::Number(number) if number.is_finite() => number.to_string(),
        FieldDefault::Number(_) => "null".to_owned(),
        FieldDefault::Str(text) => string_literal(text),
    }
}
