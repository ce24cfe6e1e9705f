// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - members: optional-member probing and the MEMBERS descriptor
// - structural: first-type-parameter extraction and rebinding

mod members;
mod structural;

pub use members::*;
pub use structural::*;
