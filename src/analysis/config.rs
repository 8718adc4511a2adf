// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Options controlling which stages [`PretzelAnalysis::compute`] runs.
///
/// [`PretzelAnalysis::compute`]: crate::PretzelAnalysis::compute
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Regroup the twists around missing strands before computing homology.
    /// Default `true`.
    pub partition_twists: bool,

    /// Build the Seifert matrix. When `false` the analysis stops after the
    /// homology pairing. Default `true`.
    pub compute_seifert: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            partition_twists: true,
            compute_seifert: true,
        }
    }
}

impl AnalysisConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }
}

/// Builder for [`AnalysisConfig`].
///
/// ```rust
/// use pretzelrs::AnalysisConfig;
///
/// let config = AnalysisConfig::builder().partition_twists(false).build();
/// assert!(!config.partition_twists);
/// assert!(config.compute_seifert);
/// ```
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    /// Set whether twists are regrouped around missing strands.
    pub fn partition_twists(mut self, partition: bool) -> Self {
        self.config.partition_twists = partition;
        self
    }

    /// Set whether the Seifert matrix is built.
    pub fn compute_seifert(mut self, compute: bool) -> Self {
        self.config.compute_seifert = compute;
        self
    }

    /// Finish building.
    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(AnalysisConfig::builder().build(), AnalysisConfig::default());
        assert_eq!(
            AnalysisConfig::builder()
                .partition_twists(false)
                .compute_seifert(false)
                .build(),
            AnalysisConfig {
                partition_twists: false,
                compute_seifert: false,
            }
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"compute_seifert": false}"#).unwrap();
        assert!(config.partition_twists);
        assert!(!config.compute_seifert);
    }
}
