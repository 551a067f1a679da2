pub mod error;
pub mod pack;
pub mod spec;
pub mod stack;

pub use error::SpecError;
pub use pack::Pack;
pub use spec::{SpecInput, StackSpec};
pub use stack::{BuiltinFeatures, Stack};
