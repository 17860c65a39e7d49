pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::PreviewConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use core::handler::{respond, HttpRequest, HttpResponse};
pub use core::page::{DeploymentPage, HostingOption};
pub use utils::error::{PageError, Result};
