mod handler;
pub mod handlers;
mod registry;

pub use handler::{PackageContext, Packager};
pub use registry::PackagerRegistry;
