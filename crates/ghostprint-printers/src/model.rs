//! Printer records used for name matching.

/// One installed printer as reported by the enumeration capability.
///
/// Opaque beyond its name; matching never inspects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterDescriptor {
    /// Printer name used for matching.
    pub name: String,
}

impl PrinterDescriptor {
    /// Build a descriptor from any name-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Outcome of printer resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPrinter {
    /// Exact matched printer name; `None` selects the system default.
    pub name: Option<String>,
}

impl ResolvedPrinter {
    /// Resolution that selects the system default printer.
    #[must_use]
    pub const fn system_default() -> Self {
        Self { name: None }
    }
}
