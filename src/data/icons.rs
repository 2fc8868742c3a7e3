use std::path::Path;

/// Bundled icon directory, relative to the embedder's working directory.
pub const LOCAL_ICON_DIR: &str = "icons";
pub const REMOTE_ICON_BASE: &str = "https://cdn.weather-tile.dev/icons";
pub const REMOTE_DEFAULT_URL: &str = "https://cdn.weather-tile.dev/icons/default.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTier {
    Local,
    Remote,
    RemoteDefault,
}

/// Ordered candidate locations for an icon identifier: bundled file first,
/// then the hosted copy, then the hosted default asset.
#[must_use]
pub fn asset_candidates(icon: &str) -> Vec<(AssetTier, String)> {
    candidates_under(icon, Path::new(LOCAL_ICON_DIR))
}

fn candidates_under(icon: &str, local_dir: &Path) -> Vec<(AssetTier, String)> {
    vec![
        (
            AssetTier::Local,
            local_dir.join(icon).to_string_lossy().into_owned(),
        ),
        (AssetTier::Remote, format!("{REMOTE_ICON_BASE}/{icon}")),
        (AssetTier::RemoteDefault, REMOTE_DEFAULT_URL.to_string()),
    ]
}

/// Fallback chain over the candidate locations. Each tier is attempted only
/// after the previous one fails; exhaustion pins the chain on the last tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetChain {
    candidates: Vec<(AssetTier, String)>,
    index: usize,
}

impl AssetChain {
    #[must_use]
    pub fn new(icon: &str) -> Self {
        Self {
            candidates: asset_candidates(icon),
            index: 0,
        }
    }

    /// Like `new`, but skips the local tier when the bundled file is absent.
    #[must_use]
    pub fn resolve(icon: &str) -> Self {
        Self::resolve_under(icon, Path::new(LOCAL_ICON_DIR))
    }

    #[must_use]
    pub fn resolve_under(icon: &str, local_dir: &Path) -> Self {
        let mut chain = Self {
            candidates: candidates_under(icon, local_dir),
            index: 0,
        };
        if !local_dir.join(icon).exists() {
            chain.index = 1;
        }
        chain
    }

    #[must_use]
    pub fn tier(&self) -> AssetTier {
        self.candidates[self.index].0
    }

    #[must_use]
    pub fn current_url(&self) -> &str {
        &self.candidates[self.index].1
    }

    /// Move to the next tier after a load failure. Returns false once the
    /// final tier is already active.
    pub fn advance(&mut self) -> bool {
        if self.index + 1 < self.candidates.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }
}
