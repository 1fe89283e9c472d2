//! Structural equality of mount declarations.

use bsdbundle_common::types::Mount;

/// Reports whether two mounts declare the same filesystem.
///
/// `source`, `destination` and `type` must be identical and the option
/// lists must match element by element in order. Pass-through keys are not
/// compared.
pub fn mounts_equal(a: &Mount, b: &Mount) -> bool {
    a.source == b.source
        && a.destination == b.destination
        && a.typ == b.typ
        && a.options == b.options
}
