//! Sanity content API adapter

mod client;

pub use client::SanityClient;
