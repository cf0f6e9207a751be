//! SCIP symbol role bitmasks
//!
//! Roles can be combined with bitwise OR; an occurrence that both defines
//! and exports a symbol carries `DEFINITION | EXPORT`.

pub const DEFINITION: u32 = 0x1;
pub const REFERENCE: u32 = 0x2;
pub const IMPORT: u32 = 0x4;
pub const EXPORT: u32 = 0x8;

const ROLE_NAMES: [(u32, &str); 4] = [
    (DEFINITION, "Definition"),
    (REFERENCE, "Reference"),
    (IMPORT, "Import"),
    (EXPORT, "Export"),
];

/// Name of a single role, or `"Unknown"` for anything else (including
/// combined masks).
pub fn role_name(role: u32) -> &'static str {
    ROLE_NAMES
        .iter()
        .find(|(mask, _)| *mask == role)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

/// Names of every recognized role set in `roles`, in fixed order.
pub fn role_names(roles: u32) -> Vec<&'static str> {
    ROLE_NAMES
        .iter()
        .filter(|(mask, _)| roles & mask != 0)
        .map(|(_, name)| *name)
        .collect()
}

pub fn is_definition(roles: u32) -> bool {
    roles & DEFINITION != 0
}

pub fn is_reference(roles: u32) -> bool {
    roles & REFERENCE != 0
}

pub fn is_import(roles: u32) -> bool {
    roles & IMPORT != 0
}

pub fn is_export(roles: u32) -> bool {
    roles & EXPORT != 0
}
