//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod basket_client;

pub use basket_client::*;
