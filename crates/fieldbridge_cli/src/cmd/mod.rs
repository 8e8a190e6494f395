/// Attribute assignment command.
pub mod assign;
/// Default map command.
pub mod defaults;
/// Field listing command.
pub mod fields;
/// Color, path, and URL helper commands.
pub mod helpers;
/// Demo record types and name registry.
pub mod records;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared output helpers.
pub mod util;
