//! Controller validation test suite.
//!
//! Every test drives the fixture controller in `common` through the
//! in-process test client: it posts form fields and checks the rendered
//! response.
//!
//! ## Usage
//!
//! ```bash
//! cargo test --test lib
//! cargo test validation::translation
//! ```

extern crate formgate;

pub mod common;
pub mod validation;

#[cfg(test)]
mod test_suite_meta {
    use crate::common;

    #[test]
    fn test_suite_setup() {
        let controller = common::basic_controller();
        assert_eq!(
            controller.action_names(),
            vec![
                "display_form",
                "password",
                "process_form",
                "send_to_error_handler",
                "two_validators",
                "validate_controller_based_validator",
                "validated_and_unvalidated",
                "validated_int",
            ]
        );
    }
}
