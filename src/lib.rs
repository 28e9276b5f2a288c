//! # Plumekit
//!
//! A cross-platform utility kit for building applications with PlumeUI.
//!
//! Plumekit provides a unified API for common system functionalities across
//! macOS, iOS, Android, Windows, and Linux.
//!
//! ## Features
//!
//! Plumekit is modular. Enable only the features you need to keep your
//! dependencies minimal.
//!
//! - `clipboard`: System clipboard access.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! plumekit = { version = "0.1", features = ["clipboard"] }
//! ```
//!
//! ```rust,ignore
//! use plumekit::clipboard;
//!
//! clipboard::copy("Hello World");
//! assert_eq!(clipboard::paste(), "Hello World");
//! ```

#[cfg(feature = "clipboard")]
pub use plumekit_clipboard as clipboard;
