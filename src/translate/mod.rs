pub mod interface;
pub mod output_contract;
pub mod prompt;
pub mod parser;
pub mod error;

pub use interface::*;
pub use error::TranslateError;
