use serde::Deserialize;

/// Ranked-list defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    /// Entries per ranked list when the request does not say otherwise
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_n: default_top_n() }
    }
}

impl RankingConfig {
    /// # Errors
    ///
    /// Returns an error if `top_n` is zero
    pub fn validate(&self) -> Result<(), String> {
        if self.top_n == 0 {
            return Err("ranking.top_n must be greater than 0".to_owned());
        }
        Ok(())
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_top_n() -> usize {
    5
}
