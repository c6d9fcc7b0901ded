//! Use-case task bonuses for the balanced ranking
//!
//! Lets specialist model families surface in the balanced view even when a
//! generalist family leads on raw accuracy. The bonus never touches
//! `accuracy_score` itself.

use servewise_core::UseCase;

type BonusTable = &'static [(&'static str, u8)];

const CODE_COMPLETION: BonusTable = &[
    ("deepseek", 20),
    ("codestral", 20),
    ("qwen2.5-coder", 18),
    ("starcoder", 15),
    ("codellama", 12),
    ("granite", 8),
];

const CODE_GENERATION: BonusTable = &[
    ("deepseek", 15),
    ("qwen2.5-coder", 15),
    ("codestral", 12),
    ("codellama", 10),
];

const CHATBOT: BonusTable = &[("mistral", 5), ("granite", 5)];

const TRANSLATION: BonusTable = &[("qwen", 10), ("mistral", 8), ("gemma", 6)];

const CONTENT_GENERATION: BonusTable = &[("mistral", 8), ("llama", 5)];

const SUMMARIZATION: BonusTable = &[("mistral", 6), ("phi", 6), ("granite", 5)];

const LONG_CONTEXT: BonusTable = &[("qwen", 8), ("llama-3.1", 6), ("llama-3.3", 6)];

const RESEARCH: BonusTable = &[("gpt-oss", 10), ("deepseek-r1", 10), ("qwen3", 8)];

const fn table_for(use_case: UseCase) -> BonusTable {
    match use_case {
        UseCase::ChatbotConversational => CHATBOT,
        UseCase::CodeCompletion => CODE_COMPLETION,
        UseCase::CodeGenerationDetailed => CODE_GENERATION,
        UseCase::Translation => TRANSLATION,
        UseCase::ContentGeneration => CONTENT_GENERATION,
        UseCase::SummarizationShort => SUMMARIZATION,
        UseCase::DocumentAnalysisRag | UseCase::LongDocumentSummarization => LONG_CONTEXT,
        UseCase::ResearchLegalAnalysis => RESEARCH,
    }
}

/// Bonus points for a model on a use case; first matching substring wins
pub fn task_bonus(use_case: Option<UseCase>, model_name: &str) -> u8 {
    let Some(use_case) = use_case else {
        return 0;
    };
    let name = model_name.to_lowercase();
    table_for(use_case)
        .iter()
        .find(|(needle, _)| name.contains(needle))
        .map_or(0, |(_, bonus)| *bonus)
}
