mod client;
mod controller;
mod device;
mod error;
mod logger;
mod protocol;
mod types;

pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use controller::{ColibriController, ColibriControllerBuilder};
pub use device::ZoneDevice;
pub use error::{Error, Result};
pub use logger::MessageLogMode;
pub use types::*;
