//! Bridge loosely-typed JSON maps and registered record types: attribute
//! assignment with type coercion, attribute export, and default synthesis.

/// Field introspection, default synthesis, coercion, and attribute assignment.
pub mod bridge;
