pub(crate) mod validate_inputs;

#[cfg(any(test, feature = "testkit"))]
pub use validate_inputs::MockValidateInputsInterface;
pub use validate_inputs::{input_names, ValidateInputsInterface};
