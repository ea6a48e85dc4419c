pub mod editing;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use editing::{commands::*, document::*, patch::*};
pub use parsing::{blocks::*, lines::*, marker::*};
