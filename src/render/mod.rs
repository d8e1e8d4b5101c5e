mod javascript;
pub mod literal;

pub use javascript::JavascriptOptionOutput;

use crate::core::OptionObject;
use crate::error::ChartResult;

/// Contract implemented by any option serializer.
///
/// Implementations receive a fully built option tree and return the complete
/// text or an error; they never hand back a partial rendering.
pub trait OptionOutput: Send + Sync {
    /// Literal text for one option object.
    fn render(&self, options: &OptionObject) -> ChartResult<String>;

    /// Statement declaring `options_name` bound to the rendered literal.
    fn draw(&self, options_name: &str, options: &OptionObject) -> ChartResult<String>;
}
