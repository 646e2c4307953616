//! Validation and generation of UK Unique Taxpayer References.
//!
//! A UTR is ten decimal digits: a leading check digit followed by nine
//! reference digits. [`validator::validate`] and [`generator::generate`] are
//! the two engine operations; [`validator::check_utr`] and
//! [`generator::generate_utr`] wrap them in the serializable result records.

pub mod audit;
pub mod checksum;
pub mod generator;
pub mod logging;
pub mod models;
pub mod output;
pub mod util;
pub mod validator;

pub use generator::{generate, generate_utr};
pub use models::{Utr, UtrCheckResult, UtrGenerateResult};
pub use validator::{check_utr, validate};
