mod harness;

use harness::config::{TestData, repo_root};
use harness::fixtures;
use servewise_config::Config;
use servewise_core::{RecommendationRequest, UseCase};
use servewise_planner::Recommender;

#[tokio::test]
async fn bundled_config_and_demo_request() {
    let root = repo_root();
    let config = Config::load(&root.join("servewise.toml")).unwrap();
    let recommender = Recommender::from_config(&config).unwrap();

    let raw = std::fs::read_to_string(root.join("demos/request.json")).unwrap();
    let request: RecommendationRequest = serde_json::from_str(&raw).unwrap();

    let lists = recommender.recommend(&request).await.unwrap();

    assert!(!lists.is_empty());
    assert!(lists.best_accuracy.len() <= 3);

    let best = &lists.best_accuracy[0];
    assert!(
        lists
            .best_accuracy
            .iter()
            .all(|c| c.scores.accuracy_score <= best.scores.accuracy_score)
    );

    let slo = &request.slo_targets;
    for candidate in lists.best_accuracy.iter().chain(&lists.balanced) {
        assert!(candidate.meets_slo);
        assert!(candidate.predicted_ttft_ms <= f64::from(slo.ttft_target_ms));
        assert!(candidate.predicted_e2e_ms <= f64::from(slo.e2e_target_ms));
    }
}

#[tokio::test]
async fn quantized_variant_shares_the_base_model_score() {
    let config = Config::load(&repo_root().join("servewise.toml")).unwrap();
    let recommender = Recommender::from_config(&config).unwrap();

    let request: RecommendationRequest = serde_json::from_value(serde_json::json!({
        "traffic_profile": {"prompt_tokens": 512, "output_tokens": 256, "expected_qps": 2.0},
        "slo_targets": {"ttft_target_ms": 1000, "itl_target_ms": 100, "e2e_target_ms": 30000},
        "top_n": 10
    }))
    .unwrap();

    let lists = recommender.recommend(&request).await.unwrap();

    let score_of = |id: &str| {
        lists
            .best_accuracy
            .iter()
            .find(|c| c.model_id == id)
            .map(|c| c.scores.accuracy_score)
    };
    let base = score_of("meta-llama/Llama-3.3-70B-Instruct").unwrap();
    let quantized = score_of("RedHatAI/Llama-3.3-70B-Instruct-quantized.w4a16").unwrap();
    assert_eq!(base, quantized);
}

#[tokio::test]
async fn loaded_files_match_in_code_fixtures() {
    let data = TestData::new(fixtures::rows());
    let config = data.load().unwrap();
    assert!(config.data.benchmarks.starts_with(data.dir()));

    let from_files = Recommender::from_config(&config)
        .unwrap()
        .recommend(&fixtures::request(UseCase::CodeCompletion))
        .await
        .unwrap();
    let in_code = fixtures::recommender()
        .recommend(&fixtures::request(UseCase::CodeCompletion))
        .await
        .unwrap();

    assert_eq!(from_files, in_code);
}

#[tokio::test]
async fn configured_top_n_applies_without_request_override() {
    let data = TestData::new(fixtures::rows()).with_ranking("top_n = 1");
    let recommender = Recommender::from_config(&data.load().unwrap()).unwrap();

    let lists = recommender
        .recommend(&fixtures::request(UseCase::ChatbotConversational))
        .await
        .unwrap();

    assert_eq!(lists.best_accuracy.len(), 1);
    assert!(lists.balanced.len() <= 1);
}

#[tokio::test]
async fn tighter_tolerance_drops_near_misses() {
    let data = TestData::new(fixtures::rows()).with_planner("near_miss_tolerance = 0.1");
    let recommender = Recommender::from_config(&data.load().unwrap()).unwrap();

    let mut request = fixtures::request(UseCase::ChatbotConversational);
    request.include_near_miss = true;
    request.top_n = Some(10);

    let lists = recommender.recommend(&request).await.unwrap();

    assert_eq!(lists.total_configs_evaluated, 4);
}

#[tokio::test]
async fn missing_quality_tables_fall_back_to_model_size() {
    let data = TestData::new(fixtures::rows()).without_quality();
    let recommender = Recommender::from_config(&data.load().unwrap()).unwrap();

    let lists = recommender
        .recommend(&fixtures::request(UseCase::ChatbotConversational))
        .await
        .unwrap();

    assert_eq!(lists.best_accuracy[0].model_name, "Chat 70B");
    assert!(lists.best_accuracy.iter().all(|c| c.scores.accuracy_score > 0));
}

#[test]
fn missing_data_file_fails_to_load() {
    let data = TestData::new(fixtures::rows());
    let config = data.load().unwrap();
    std::fs::remove_file(&config.data.catalog).unwrap();

    assert!(Recommender::from_config(&config).is_err());
}
