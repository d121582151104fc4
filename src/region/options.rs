use serde::{Deserialize, Serialize};

/// Options used when turning layout boxes into word regions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOptions {
    /// Character widths added before the first and after the last word of each line.
    pub expand_chars: u32,
}

impl Default for RegionOptions {
    fn default() -> Self {
        Self { expand_chars: 1 }
    }
}
