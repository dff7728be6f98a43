//! Backend endpoints, one module per resource.

pub mod ads;
pub mod admins;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod denuncias;
pub mod orders;
pub mod users;
