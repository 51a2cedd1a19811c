mod bracket;
mod common;
mod half_match;
mod r#match;
mod raw;

pub use bracket::*;
pub use common::*;
pub use half_match::*;
pub use r#match::*;
pub use raw::*;
