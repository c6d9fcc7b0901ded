#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::io::{Read, Write};

use anyhow::Context;
use args::Args;
use clap::Parser;
use servewise_config::Config;
use servewise_core::RecommendationRequest;
use servewise_planner::Recommender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize telemetry
    let telemetry_guard = servewise_telemetry::init(config.telemetry.as_ref(), &args.log_level)?;

    tracing::info!(
        config_path = %args.config.display(),
        "starting servewise"
    );

    let request = read_request(&args)?;
    let recommender = Recommender::from_config(&config)?;
    let lists = recommender.recommend(&request).await?;

    let output = if args.compact {
        serde_json::to_string(&lists)?
    } else {
        serde_json::to_string_pretty(&lists)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write recommendation")?;

    if let Err(e) = telemetry_guard.force_flush() {
        tracing::warn!(error = %e, "failed to flush telemetry");
    }

    Ok(())
}

/// Parse the request and apply command-line overrides
fn read_request(args: &Args) -> anyhow::Result<RecommendationRequest> {
    let raw = match &args.request {
        Some(path) if !args.request_from_stdin() => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file: {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let mut request: RecommendationRequest = serde_json::from_str(&raw).context("failed to parse request JSON")?;

    if args.near_miss {
        request.include_near_miss = true;
    }
    if let Some(top_n) = args.top_n {
        request.top_n = Some(top_n);
    }

    tracing::debug!(
        use_case = %request.intent.use_case,
        expected_qps = request.traffic_profile.expected_qps,
        include_near_miss = request.include_near_miss,
        "parsed recommendation request"
    );

    Ok(request)
}
