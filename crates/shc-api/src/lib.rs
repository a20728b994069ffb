// shc-api: Async Rust client for the smart-home controller REST API

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod transport;

pub use client::ShcClient;
pub use config::{DEFAULT_API_VERSION, DEFAULT_PORT, EndpointConfig};
pub use error::{Error, ErrorKind};
pub use gateway::SmartHome;
pub use models::{ApiError, Device, DeviceStatus, Message, Room, Scenario};
pub use transport::{TlsMode, TransportConfig};
