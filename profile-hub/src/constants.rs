//! Constants that are shared between other crates in this workspace.
//! Crate-specific constants should go in their respective crates.

/// Tabular collection holding one profile row per user.
pub const PROFILES_TABLE: &str = "profiles";

/// Blob bucket holding uploaded avatar images.
pub const AVATARS_BUCKET: &str = "avatars";

pub mod headers {
    pub const API_KEY: &str = "apikey";
    pub const PREFER: &str = "Prefer";

    /// Upsert resolution understood by the tabular store.
    pub const MERGE_DUPLICATES: &str = "resolution=merge-duplicates";
}
