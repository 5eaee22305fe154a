//! Exact-match printer resolution.

use crate::error::PrinterError;
use crate::model::{PrinterDescriptor, ResolvedPrinter};

/// Match a requested printer name against the enumerated list.
///
/// An absent request selects the system default without inspecting the
/// list. A present request must match one descriptor name exactly and
/// case-sensitively; the first match wins, and duplicates are not
/// distinguished. There is no partial or fuzzy matching.
///
/// # Errors
///
/// Returns [`PrinterError::NotFound`] carrying the requested name when no
/// descriptor matches.
pub fn resolve(
    requested: Option<&str>,
    available: &[PrinterDescriptor],
) -> Result<ResolvedPrinter, PrinterError> {
    let Some(requested) = requested else {
        return Ok(ResolvedPrinter::system_default());
    };

    if available.iter().any(|printer| printer.name == requested) {
        Ok(ResolvedPrinter {
            name: Some(requested.to_string()),
        })
    } else {
        Err(PrinterError::NotFound {
            requested: requested.to_string(),
        })
    }
}
