//! Driver implementations and the driver registry

pub mod registry;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
mod file;
#[cfg(feature = "file")]
pub mod json_file;
#[cfg(feature = "file")]
pub mod text_file;

pub use registry::{create, register, DriverConstructor, DriverOptions};

#[cfg(feature = "console")]
pub use console::{ConsoleDriver, CONSOLE_DRIVER_NAME};

#[cfg(feature = "file")]
pub use json_file::{JsonFileDriver, JSON_FILE_DRIVER_NAME};
#[cfg(feature = "file")]
pub use text_file::{TextFileDriver, TEXT_FILE_DRIVER_NAME};

pub use crate::core::Driver;
