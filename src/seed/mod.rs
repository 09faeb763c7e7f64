//! Seeding module
//!
//! Fills a collection with users, either fetched from a randomuser.me
//! compatible API or generated offline.
//!
//! # Overview
//!
//! The seed module provides:
//! - `RandomUserClient` - HTTP client for `GET /api/?results=N`
//! - `add_one` / `add_many` - Write fetched users one at a time or as one batch
//! - `synthetic_users` / `seed_synthetic` - Deterministic offline users

mod client;
mod synthetic;

pub use client::{add_many, add_one, RandomUserClient, RandomUserConfig};
pub use synthetic::{seed_synthetic, synthetic_users};

#[cfg(test)]
mod tests;
