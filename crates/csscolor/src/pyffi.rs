//! Python integration.
//!
//! The extension module lets an editor with an embedded Python runtime, such
//! as Vim, drive an [`Emitter`] directly. Directives are rendered as editor
//! commands and handed to a Python callable, typically `vim.command`.

use pyo3::prelude::*;

use crate::error::ColorFormatError;
use crate::host::{Directive, Host};
use crate::Emitter;

/// A host forwarding each directive's command text to a Python callable.
#[derive(Debug)]
pub struct CallbackHost {
    command: Py<PyAny>,
}

impl Host for CallbackHost {
    fn execute(&mut self, directive: &Directive) -> std::io::Result<()> {
        Python::with_gil(|py| {
            self.command
                .call1(py, (directive.to_string(),))
                .map(|_| ())
                .map_err(std::io::Error::other)
        })
    }
}

/// Convert a percentage triple to a color code. <i class=python-only>Python
/// only!</i>
#[pyfunction]
#[pyo3(name = "percentage_to_code")]
pub fn py_percentage_to_code(r: &str, g: &str, b: &str) -> Result<String, ColorFormatError> {
    crate::percentage_to_code(r, g, b)
}

/// An emitter sending commands to a Python callable. <i
/// class=python-only>Python only!</i>
#[pyclass(name = "Emitter", module = "csscolor")]
pub struct PyEmitter {
    inner: Emitter<CallbackHost>,
}

#[pymethods]
impl PyEmitter {
    /// Create a new emitter for the given command callable.
    #[new]
    pub fn new(command: Py<PyAny>) -> Self {
        Self {
            inner: Emitter::new(CallbackHost { command }),
        }
    }

    /// Define a highlight group for the given background color.
    pub fn add_highlight(&mut self, group: &str, color: &str) -> PyResult<()> {
        Ok(self.inner.add_highlight(group, color)?)
    }

    /// Define a syntax keyword for the given color.
    pub fn add_syntax_keyword(&mut self, color: &str, keyword: &str) -> PyResult<()> {
        Ok(self.inner.add_syntax_keyword(color, keyword)?)
    }

    /// Define syntax keywords for all named colors.
    pub fn define_named_colors(&mut self) -> PyResult<()> {
        Ok(self.inner.define_named_colors()?)
    }

    /// Get a debug representation for this emitter.
    pub fn __repr__(&self) -> String {
        format!("Emitter({:?})", self.inner.options())
    }
}

#[doc(hidden)]
#[pymodule]
pub fn csscolor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_percentage_to_code, m)?)?;
    m.add_class::<PyEmitter>()?;
    Ok(())
}
