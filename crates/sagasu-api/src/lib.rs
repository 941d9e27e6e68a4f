//! Remote metadata service clients.
//!
//! Currently a single backend: the public AniList GraphQL endpoint.

pub mod anilist;

pub use anilist::{AniListClient, AniListError};
