//! Benchmark repository ids whose names differ from the quality tables

/// Benchmark model id (lowercase) → canonical display name (lowercase)
const ALIASES: &[(&str, &str)] = &[
    ("redhatai/llama-3.3-70b-instruct-quantized.w8a8", "llama 3.3 70b instruct"),
    ("redhatai/llama-3.3-70b-instruct-quantized.w4a16", "llama 3.3 70b instruct"),
    ("redhatai/llama-3.3-70b-instruct-fp8-dynamic", "llama 3.3 70b instruct"),
    ("redhatai/meta-llama-3.1-8b-instruct-quantized.w4a16", "llama 3.1 8b instruct"),
    ("redhatai/meta-llama-3.1-8b-instruct-fp8-dynamic", "llama 3.1 8b instruct"),
    ("redhatai/meta-llama-3.1-70b-instruct-fp8", "llama 3.1 70b instruct"),
    ("redhatai/qwen2.5-7b-instruct-quantized.w8a8", "qwen2.5 7b instruct"),
    ("redhatai/qwen2.5-72b-instruct-fp8-dynamic", "qwen2.5 72b instruct"),
    ("redhatai/mistral-small-24b-instruct-2501-fp8-dynamic", "mistral small 3 24b instruct"),
    ("redhatai/mixtral-8x7b-instruct-v0.1-fp8", "mixtral 8x7b instruct"),
    ("redhatai/deepseek-r1-distill-llama-70b-quantized.w8a8", "deepseek r1 distill llama 70b"),
    ("redhatai/granite-3.1-8b-instruct-quantized.w4a16", "granite 3.1 8b instruct"),
    ("ibm-granite/granite-3.1-8b-instruct", "granite 3.1 8b instruct"),
    ("openai/gpt-oss-120b", "gpt-oss 120b"),
    ("openai/gpt-oss-20b", "gpt-oss 20b"),
];

/// Canonical quality-table name for a known benchmark model id
pub fn canonical_name(model_id: &str) -> Option<&'static str> {
    let key = model_id.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_are_lowercase() {
        for (alias, canonical) in ALIASES {
            assert_eq!(*alias, alias.to_lowercase());
            assert_eq!(*canonical, canonical.to_lowercase());
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(
            canonical_name("RedHatAI/Llama-3.3-70B-Instruct-FP8-dynamic"),
            Some("llama 3.3 70b instruct")
        );
        assert_eq!(canonical_name("meta-llama/Llama-3.3-70B-Instruct"), None);
    }
}
