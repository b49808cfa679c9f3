pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{config_path, load_config, load_or_default, resolve_settings, HostSettings};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, WiredFlow};
