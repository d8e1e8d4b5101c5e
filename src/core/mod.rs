pub mod identifier;
pub mod object;
pub mod schema;
pub mod value;

pub use identifier::{upper_first, validate_identifier};
pub use object::{OptionObject, RAW_JSON_MARKER};
pub use schema::{FieldDefault, FieldKind, FieldSpec, ScalarKind, Schema};
pub use value::OptionValue;
