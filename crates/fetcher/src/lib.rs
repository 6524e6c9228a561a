pub mod client;
pub mod error;
pub mod service;

pub use client::{GithubClient, RestGithubClient};
pub use error::FetchError;
pub use service::{Dataset, ProfileFetcher};
