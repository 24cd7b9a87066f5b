//! Downstream parser seam
//!
//! The canonical text is meant for a symbolic-expression parser living
//! outside this crate. Implement [`ExpressionParser`] for it and call
//! [`convert_with`] to run the whole chain.

use super::options::{ConversionConfig, NormalizationConfig};
use super::pipeline::Normalizer;

/// A symbolic parser that accepts canonical LaTeX
pub trait ExpressionParser {
    type Output;
    type Error;

    /// Parse canonical text under the given configuration records.
    fn parse(
        &self,
        canonical: &str,
        normalization: &NormalizationConfig,
        conversion: &ConversionConfig,
    ) -> Result<Self::Output, Self::Error>;
}

/// Normalize `input` and hand it to `parser` with default configuration
/// records.
///
/// ```rust
/// use texcanon::{convert_with, ConversionConfig, ExpressionParser, NormalizationConfig};
///
/// struct Echo;
///
/// impl ExpressionParser for Echo {
///     type Output = String;
///     type Error = ();
///
///     fn parse(
///         &self,
///         canonical: &str,
///         _: &NormalizationConfig,
///         _: &ConversionConfig,
///     ) -> Result<String, ()> {
///         Ok(canonical.to_string())
///     }
/// }
///
/// assert_eq!(convert_with(&Echo, r"\boxed{x=\frac12}"), Ok(r"\frac{1}{2}".to_string()));
/// ```
pub fn convert_with<P: ExpressionParser + ?Sized>(
    parser: &P,
    input: &str,
) -> Result<P::Output, P::Error> {
    let canonical = Normalizer::new().normalize(input);
    let normalization = NormalizationConfig::default();
    let conversion = ConversionConfig::default();

    tracing::debug!(canonical = canonical.as_str(), "handing off to expression parser");
    parser.parse(&canonical, &normalization, &conversion)
}
