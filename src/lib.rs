//! Constrained Random String Generation
//!
//! Short random strings that must satisfy structure beyond uniform
//! randomness: grouped identifiers, pronounceable nicknames, and passwords
//! with exact class composition and placement rules.
//!
//! # Architecture
//!
//! ```text
//! entropy (RandomSource) ──┬── identifier
//!                          ├── nickname
//!                          └── password ── policy / rules / strategies
//! ```
//!
//! # Design Principles
//!
//! - **Injected randomness**: generators take a [`RandomSource`]; nothing
//!   calls a global RNG
//! - **Fail-closed entropy**: backend failures are errors, never a silent
//!   downgrade to a weaker source
//! - **Eager validation**: unsatisfiable requests are rejected at
//!   construction, not discovered through endless retries
//! - **Whole results only**: a call returns a fully valid string or an error
//!
//! # Example
//!
//! ```no_run
//! use constrained_random::{
//!     ConstraintPasswordGenerator, PasswordPolicy, PhoneticNicknameGenerator,
//!     StructuredIdGenerator,
//! };
//!
//! let mut ids = StructuredIdGenerator::new();
//! let mut nicks = PhoneticNicknameGenerator::new().unwrap();
//! let mut passwords = ConstraintPasswordGenerator::new(PasswordPolicy::default()).unwrap();
//!
//! println!("{}", ids.generate().unwrap());
//! println!("{}", nicks.generate().unwrap());
//! println!("{}", passwords.generate().unwrap());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod alphabet;
pub mod config;
pub mod entropy;
pub mod error;
pub mod identifier;
pub mod nickname;
pub mod password;

// Re-export commonly used types at crate root
pub use alphabet::Alphabet;
pub use config::{ConfigError, FileConfig, OutputConfig};
pub use entropy::{EntropyError, RandomSource, ScriptedRandom, SecureRandom, SeededRandom};
pub use error::GeneratorError;
pub use identifier::StructuredIdGenerator;
pub use nickname::PhoneticNicknameGenerator;
pub use password::{ConstraintPasswordGenerator, PasswordPolicy, PolicyError, Strategy};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
