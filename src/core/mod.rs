pub mod handler;
pub mod page;
#[cfg(feature = "cli")]
pub mod server;

pub use handler::{respond, HttpRequest, HttpResponse};
pub use page::{DeploymentPage, HostingOption};
pub use crate::utils::error::Result;
