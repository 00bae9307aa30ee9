//! Warnings and reports produced while rendering

/// A warning generated during rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a render pass.
///
/// Rendering never fails; entries that could not be drawn are reported here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderReport {
    /// Number of entries painted onto the canvas
    pub drawn: usize,
    pub warnings: Vec<Warning>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
