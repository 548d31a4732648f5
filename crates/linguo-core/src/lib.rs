pub mod bundle;
pub mod error;
pub mod language;
pub mod patch;
pub mod patcher;

pub use bundle::Bundle;
pub use error::PatchError;
pub use language::Language;
pub use patch::{PatchEntry, PatchValue, Translations};
pub use patcher::{PatchReport, Patcher};
