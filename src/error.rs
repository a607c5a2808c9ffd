use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number for {name}: {value:?}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
