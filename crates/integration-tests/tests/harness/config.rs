//! On-disk configuration and data files for loader tests

use std::path::{Path, PathBuf};

use servewise_config::Config;
use servewise_core::BenchmarkRow;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "models": [
        {"id": "acme/chat-8b", "display_name": "Chat 8B", "size_label": "8B"},
        {"id": "acme/chat-70b", "display_name": "Chat 70B", "size_label": "70B"},
        {"id": "deepseek-ai/deepseek-coder-16b", "display_name": "DeepSeek Coder 16B", "size_label": "16B"}
    ],
    "gpu_types": [
        {"gpu_type": "L4", "cost_per_hour_usd": 1.0},
        {"gpu_type": "H100", "aliases": ["H100-80GB"], "cost_per_hour_usd": 4.0}
    ]
}"#;

const QUALITY: &str = r#"
[chatbot_conversational]
"Chat 70B" = 82
"Chat 8B" = "65%"
"DeepSeek Coder 16B" = 0.60

[code_completion]
"Chat 70B" = 72
"Chat 8B" = 60
"DeepSeek Coder 16B" = 66
"#;

/// Config file plus data files in a temporary directory
pub struct TestData {
    dir: TempDir,
    rows: Vec<BenchmarkRow>,
    ranking: String,
    planner: String,
    with_quality: bool,
}

impl TestData {
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
            rows,
            ranking: String::new(),
            planner: String::new(),
            with_quality: true,
        }
    }

    /// Extra lines for the `[ranking]` section
    pub fn with_ranking(mut self, body: &str) -> Self {
        body.clone_into(&mut self.ranking);
        self
    }

    /// Extra lines for the `[planner]` section
    pub fn with_planner(mut self, body: &str) -> Self {
        body.clone_into(&mut self.planner);
        self
    }

    pub fn without_quality(mut self) -> Self {
        self.with_quality = false;
        self
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Write everything and return the config file path
    pub fn write(&self) -> PathBuf {
        let data = self.dir.path().join("data");
        std::fs::create_dir_all(&data).expect("data dir");

        let benchmarks = serde_json::json!({ "benchmarks": self.rows });
        std::fs::write(data.join("benchmarks.json"), benchmarks.to_string()).expect("benchmarks");
        std::fs::write(data.join("catalog.json"), CATALOG).expect("catalog");

        let quality_line = if self.with_quality {
            std::fs::write(data.join("quality.toml"), QUALITY).expect("quality");
            "quality = \"data/quality.toml\"\n"
        } else {
            ""
        };

        let config = format!(
            "[data]\nbenchmarks = \"data/benchmarks.json\"\ncatalog = \"data/catalog.json\"\n{quality_line}\n\
             [planner]\n{}\n\n[ranking]\n{}\n",
            self.planner, self.ranking
        );
        let path = self.dir.path().join("servewise.toml");
        std::fs::write(&path, config).expect("config");
        path
    }

    pub fn load(&self) -> anyhow::Result<Config> {
        Config::load(&self.write())
    }
}

/// Root of the repository, holding the sample config and data
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}
