mod defaults;
mod types;

pub use defaults::*;
pub use types::*;
