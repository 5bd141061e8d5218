//! Register-Validation Core
//!
//! A small rule interpreter for registration forms. Each field carries an
//! ordered list of declarative [`Rule`]s; the [`Validator`] runs them in order,
//! stops at the first failure, and reports one message per field.
//!
//! ```rust
//! use register_validation::{validate_form, FormData, FormRules};
//!
//! let form = FormData::from([
//!     ("name", "Al"),
//!     ("email", "al@x.com"),
//!     ("phone", "5551234567"),
//!     ("dob", "2000-01-01"),
//!     ("password", "Abcdef1!"),
//!     ("confirmPassword", "Abcdef1!"),
//! ]);
//!
//! let errors = validate_form(&form, &FormRules::registration()).unwrap();
//! assert!(errors.is_submittable());
//! ```
//!
//! Timing (change, blur, submit) is a caller concern: every call is a pure
//! function of its arguments.

pub mod date;
pub mod email;
pub mod error;
pub mod form;
pub mod password;
pub mod phone;
pub mod registry;
pub mod rule;
pub mod string;
pub mod validator;

pub use error::ConfigError;
pub use form::{FormData, FormErrors, FormRules};
pub use password::PasswordPolicy;
pub use registry::{CustomEvaluator, RuleContext, RuleRegistry};
pub use rule::Rule;
pub use validator::{validate_field, validate_form, Validator, ValidatorOptions};

/// Outcome of a single evaluator: `Ok(())` when the rule passes, or the
/// user-facing error message.
pub type Outcome = Result<(), String>;
