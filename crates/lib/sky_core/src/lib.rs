//! # sky_core
//!
//! Session, routing and guard logic for the SkyVenda admin client.

pub mod config;
pub mod format;
pub mod guard;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod storage;
