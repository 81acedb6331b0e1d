//! Avatar blob addressing and content.

use crate::ProfileHubError;
use bytes::Bytes;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// Storage path of one uploaded avatar inside the avatars bucket.
///
/// Paths are generated as `<random-fraction>.<extension>`, so each upload
/// lands under a fresh name and earlier blobs are left behind. Uniqueness is
/// probabilistic; nothing checks the bucket for collisions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AvatarPath(String);

impl AvatarPath {
    /// Generate a fresh path for a file with the given extension.
    pub fn generate(rng: &mut impl Rng, extension: &str) -> Self {
        let fraction: f64 = rng.gen();
        Self(format!("{fraction}.{extension}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AvatarPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AvatarPath {
    type Err = ProfileHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ProfileHubError::InvalidAvatarPath);
        }
        Ok(Self(s.to_string()))
    }
}

/// Downloaded avatar content, held locally for display.
#[derive(Debug, Clone)]
pub struct AvatarImage {
    path: AvatarPath,
    content: Bytes,
}

impl AvatarImage {
    pub fn new(path: AvatarPath, content: Bytes) -> Self {
        Self { path, content }
    }

    pub fn path(&self) -> &AvatarPath {
        &self.path
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_paths_keep_the_extension() {
        let path = AvatarPath::generate(&mut rand::thread_rng(), "png");
        assert!(path.as_str().ends_with(".png"));
        assert!(path.as_str().starts_with("0."));
    }

    #[test]
    fn generated_paths_are_distinct() {
        let mut rng = rand::thread_rng();
        let first = AvatarPath::generate(&mut rng, "jpg");
        let second = AvatarPath::generate(&mut rng, "jpg");
        assert_ne!(first, second);
    }
}
