//! Workload shape, latency targets and use-case classification

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ValidationError;

/// Which latency column of a benchmark row is compared against targets
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase", from = "RawPercentile")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Percentile {
    Mean,
    P90,
    #[default]
    P95,
    P99,
}

impl Percentile {
    /// Parse a percentile name, falling back to `p95` on anything unknown
    pub fn parse_or_default(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(percentile = raw, "unknown percentile requested, using p95");
            Self::P95
        })
    }
}

/// Wire shapes accepted for a percentile: a name, a bare number, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPercentile {
    Name(String),
    Number(f64),
    Other(serde::de::IgnoredAny),
}

impl From<RawPercentile> for Percentile {
    fn from(raw: RawPercentile) -> Self {
        match raw {
            RawPercentile::Name(name) => Self::parse_or_default(&name),
            // 95 reads as p95
            RawPercentile::Number(number) => Self::parse_or_default(&format!("p{number}")),
            RawPercentile::Other(_) => {
                tracing::warn!("percentile is neither a name nor a number, using p95");
                Self::P95
            }
        }
    }
}

/// Use cases with calibrated latency references and quality tables
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case", from = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UseCase {
    /// Interactive chat assistants
    #[default]
    ChatbotConversational,
    /// IDE inline completion
    CodeCompletion,
    /// Longer-form code generation with explanations
    CodeGenerationDetailed,
    Translation,
    ContentGeneration,
    SummarizationShort,
    /// Retrieval-augmented question answering over documents
    DocumentAnalysisRag,
    LongDocumentSummarization,
    ResearchLegalAnalysis,
}

impl UseCase {
    /// Parse a use-case name, falling back to the default use case
    pub fn parse_or_default(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(use_case = raw, default = %Self::default(), "unknown use case, using default");
            Self::default()
        })
    }
}

impl From<String> for UseCase {
    fn from(raw: String) -> Self {
        Self::parse_or_default(&raw)
    }
}

/// Shape of the expected workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficProfile {
    /// Input tokens per request
    pub prompt_tokens: u32,
    /// Generated tokens per request
    pub output_tokens: u32,
    /// Sustained requests per second the deployment must serve
    #[serde(default)]
    pub expected_qps: Option<f64>,
}

impl TrafficProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prompt_tokens == 0 {
            return Err(ValidationError::ZeroTokens { field: "prompt_tokens" });
        }
        if self.output_tokens == 0 {
            return Err(ValidationError::ZeroTokens { field: "output_tokens" });
        }
        if let Some(qps) = self.expected_qps
            && (!qps.is_finite() || qps < 0.0)
        {
            return Err(ValidationError::InvalidQps { value: qps });
        }
        Ok(())
    }

    /// Expected QPS, with an absent value treated as zero
    pub fn required_qps(&self) -> f64 {
        self.expected_qps.unwrap_or(0.0)
    }
}

/// Latency service level objectives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SloTargets {
    pub ttft_target_ms: u32,
    pub itl_target_ms: u32,
    pub e2e_target_ms: u32,
    #[serde(default)]
    pub percentile: Percentile,
}

impl SloTargets {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttft_target_ms == 0 {
            return Err(ValidationError::ZeroTarget { field: "ttft_target_ms" });
        }
        if self.itl_target_ms == 0 {
            return Err(ValidationError::ZeroTarget { field: "itl_target_ms" });
        }
        if self.e2e_target_ms == 0 {
            return Err(ValidationError::ZeroTarget { field: "e2e_target_ms" });
        }
        Ok(())
    }

    /// Targets as floating-point milliseconds
    pub fn as_metrics(&self) -> LatencyMetrics {
        LatencyMetrics {
            ttft_ms: f64::from(self.ttft_target_ms),
            itl_ms: f64::from(self.itl_target_ms),
            e2e_ms: f64::from(self.e2e_target_ms),
        }
    }

    /// Targets relaxed by a fractional tolerance (0.2 = +20%)
    pub fn relaxed(&self, tolerance: f64) -> LatencyMetrics {
        let factor = 1.0 + tolerance.max(0.0);
        let base = self.as_metrics();
        LatencyMetrics {
            ttft_ms: base.ttft_ms * factor,
            itl_ms: base.itl_ms * factor,
            e2e_ms: base.e2e_ms * factor,
        }
    }
}

/// A TTFT / ITL / E2E triple in milliseconds, used for both predictions and targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyMetrics {
    pub ttft_ms: f64,
    pub itl_ms: f64,
    pub e2e_ms: f64,
}
