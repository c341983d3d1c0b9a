pub mod configs;
pub mod error;
pub mod hooks;
pub mod i18n;
mod routes;
mod utils;
mod views;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::error::I18nError;
