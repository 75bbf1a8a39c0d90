// Lab Exercises - Core Library
// Exposes every exercise for use in the CLI and tests

pub mod error;
pub mod factorial;
pub mod sorter;
pub mod billing;
pub mod credentials;
pub mod temperature;
pub mod age;
pub mod student;
pub mod prompt;
pub mod sessions;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{AuthError, ErrorKind, LabError, LabResult};
pub use factorial::{factorial_iterative, factorial_recursive, FactorialMethod};
pub use sorter::{sort_json, sort_list, ListInput, SortOrder, TotalOrd};
pub use billing::{calculate_power_bill, Bill, CustomerClass, SlabCharge, Tariff};
pub use credentials::{Credential, CredentialStore};
pub use temperature::{convert, convert_many, TemperatureUnit, DEFAULT_PRECISION};
pub use age::{classify_age, AgeGroup};
pub use student::Student;
pub use prompt::{PromptError, Prompter};
pub use sessions::{run_interactive, Exercise};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
