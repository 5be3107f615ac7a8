pub mod errors;
pub mod routes;
pub mod types;

pub use errors::{ConfigError, RendererError, RequestError, WebpaneError};
pub use routes::{DEFAULT_EXTERNAL_HOSTS, DEFAULT_EXTERNAL_SCHEMES};
pub use types::{Bounds, DeviceClass};
