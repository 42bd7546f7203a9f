mod auth;
mod dataset;

pub use auth::TokenManager;
pub use dataset::DatasetManager;
pub use dataset::ExportError;
