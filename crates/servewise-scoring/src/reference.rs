//! Per-use-case latency and throughput reference points
//!
//! A 10k-token legal analysis and a 256-token completion have very
//! different acceptable latencies, so absolute performance is judged
//! against thresholds calibrated per use case.

use servewise_core::UseCase;

/// Four anchor points of a piecewise-linear score curve
///
/// For lower-is-better metrics the anchors ascend
/// (`excellent < good < acceptable < limit`); for higher-is-better metrics
/// they descend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
    pub limit: f64,
}

const fn thresholds(excellent: f64, good: f64, acceptable: f64, limit: f64) -> Thresholds {
    Thresholds {
        excellent,
        good,
        acceptable,
        limit,
    }
}

/// Reference thresholds for one use case
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyReference {
    /// Time to first token, ms
    pub ttft: Thresholds,
    /// Inter-token latency, ms
    pub itl: Thresholds,
    /// End-to-end latency, ms
    pub e2e: Thresholds,
    /// Output tokens per second of one replica (higher is better)
    pub throughput: Thresholds,
}

const INTERACTIVE_THROUGHPUT: Thresholds = thresholds(3000.0, 1500.0, 600.0, 100.0);
const BATCH_THROUGHPUT: Thresholds = thresholds(2000.0, 1000.0, 400.0, 50.0);

const CHATBOT: LatencyReference = LatencyReference {
    ttft: thresholds(100.0, 200.0, 500.0, 2000.0),
    itl: thresholds(15.0, 25.0, 50.0, 100.0),
    e2e: thresholds(2000.0, 4000.0, 8000.0, 20_000.0),
    throughput: INTERACTIVE_THROUGHPUT,
};

const CODE_COMPLETION: LatencyReference = LatencyReference {
    ttft: thresholds(50.0, 100.0, 200.0, 800.0),
    itl: thresholds(10.0, 20.0, 35.0, 80.0),
    e2e: thresholds(500.0, 1000.0, 2000.0, 6000.0),
    throughput: INTERACTIVE_THROUGHPUT,
};

const CODE_GENERATION: LatencyReference = LatencyReference {
    ttft: thresholds(150.0, 300.0, 600.0, 2000.0),
    itl: thresholds(15.0, 25.0, 45.0, 100.0),
    e2e: thresholds(5000.0, 10_000.0, 20_000.0, 60_000.0),
    throughput: INTERACTIVE_THROUGHPUT,
};

const TRANSLATION: LatencyReference = LatencyReference {
    ttft: thresholds(150.0, 300.0, 600.0, 2000.0),
    itl: thresholds(15.0, 25.0, 50.0, 100.0),
    e2e: thresholds(3000.0, 6000.0, 12_000.0, 30_000.0),
    throughput: INTERACTIVE_THROUGHPUT,
};

const CONTENT_GENERATION: LatencyReference = LatencyReference {
    ttft: thresholds(200.0, 400.0, 800.0, 3000.0),
    itl: thresholds(20.0, 30.0, 60.0, 120.0),
    e2e: thresholds(8000.0, 15_000.0, 30_000.0, 60_000.0),
    throughput: BATCH_THROUGHPUT,
};

const SUMMARIZATION_SHORT: LatencyReference = LatencyReference {
    ttft: thresholds(300.0, 600.0, 1200.0, 4000.0),
    itl: thresholds(15.0, 30.0, 60.0, 120.0),
    e2e: thresholds(3000.0, 6000.0, 12_000.0, 30_000.0),
    throughput: BATCH_THROUGHPUT,
};

const DOCUMENT_RAG: LatencyReference = LatencyReference {
    ttft: thresholds(500.0, 1000.0, 2000.0, 6000.0),
    itl: thresholds(15.0, 30.0, 60.0, 120.0),
    e2e: thresholds(5000.0, 10_000.0, 20_000.0, 60_000.0),
    throughput: BATCH_THROUGHPUT,
};

const LONG_SUMMARIZATION: LatencyReference = LatencyReference {
    ttft: thresholds(1500.0, 3000.0, 6000.0, 20_000.0),
    itl: thresholds(20.0, 35.0, 70.0, 150.0),
    e2e: thresholds(10_000.0, 20_000.0, 40_000.0, 120_000.0),
    throughput: BATCH_THROUGHPUT,
};

const RESEARCH_LEGAL: LatencyReference = LatencyReference {
    ttft: thresholds(2000.0, 4000.0, 8000.0, 25_000.0),
    itl: thresholds(20.0, 35.0, 70.0, 150.0),
    e2e: thresholds(15_000.0, 30_000.0, 60_000.0, 180_000.0),
    throughput: BATCH_THROUGHPUT,
};

/// Reference thresholds for a use case
pub const fn for_use_case(use_case: UseCase) -> &'static LatencyReference {
    match use_case {
        UseCase::ChatbotConversational => &CHATBOT,
        UseCase::CodeCompletion => &CODE_COMPLETION,
        UseCase::CodeGenerationDetailed => &CODE_GENERATION,
        UseCase::Translation => &TRANSLATION,
        UseCase::ContentGeneration => &CONTENT_GENERATION,
        UseCase::SummarizationShort => &SUMMARIZATION_SHORT,
        UseCase::DocumentAnalysisRag => &DOCUMENT_RAG,
        UseCase::LongDocumentSummarization => &LONG_SUMMARIZATION,
        UseCase::ResearchLegalAnalysis => &RESEARCH_LEGAL,
    }
}
