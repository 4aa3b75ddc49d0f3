//! Error types for component models.

use hc_core::HcError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for HcError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => HcError::InvalidArg { what },
            ComponentError::InvalidArg { what } => HcError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical {
            what: "outlet diameter",
        };
        assert!(err.to_string().contains("outlet diameter"));
    }

    #[test]
    fn error_conversion() {
        let core: HcError = ComponentError::InvalidArg { what: "test" }.into();
        assert!(matches!(core, HcError::InvalidArg { .. }));
    }
}
