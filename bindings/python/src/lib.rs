//! Python bindings for texcanon
//!
//! Exposed as the `_native` extension module.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Normalize LaTeX math into canonical form.
#[pyfunction]
#[pyo3(signature = (input, extract_boxed = true, strip_non_ascii = false, fold_unicode_symbols = false))]
fn normalize(
    input: &str,
    extract_boxed: bool,
    strip_non_ascii: bool,
    fold_unicode_symbols: bool,
) -> String {
    let options = texcanon::NormalizeOptions {
        extract_boxed,
        strip_non_ascii,
        fold_unicode_symbols,
    };
    texcanon::normalize_with_options(input, &options)
}

/// Normalize, raising `ValueError` when the delimiters do not nest.
#[pyfunction]
fn try_normalize(input: &str) -> PyResult<String> {
    texcanon::try_normalize(input).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Structural stage only.
#[pyfunction]
fn preprocess_structure(input: &str) -> String {
    texcanon::preprocess_structure(input)
}

/// Notation stage only.
#[pyfunction]
fn canonicalize_notation(input: &str) -> String {
    texcanon::canonicalize_notation(input)
}

/// Check delimiter balance.
#[pyfunction]
fn is_balanced(input: &str) -> bool {
    texcanon::is_balanced(input)
}

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(try_normalize, m)?)?;
    m.add_function(wrap_pyfunction!(preprocess_structure, m)?)?;
    m.add_function(wrap_pyfunction!(canonicalize_notation, m)?)?;
    m.add_function(wrap_pyfunction!(is_balanced, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
