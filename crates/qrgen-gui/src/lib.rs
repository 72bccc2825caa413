//! QR Code Generator - GUI Library
//!
//! Application types and modules for the QR Code Generator desktop
//! application. Encoding, persistence and the generate/save/clear workflow
//! live in `qrgen-core`; this crate wires them into an Iced 0.14 window
//! using the Elm architecture.

pub mod app;
pub mod component;
pub mod handler;
pub mod logging;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
