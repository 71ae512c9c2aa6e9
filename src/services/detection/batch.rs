// Batch Detection
// Runs `detect_text` over many items on blocking workers with bounded parallelism.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    BatchDetectRequest, BatchDetectResponse, BatchItemResponse, BatchSummary, DetectionResult,
};
use crate::services::config_store::DetectionConfig;
use super::{detect_text, DetectError};

/// Detect every item in `request`. Output order matches input order; items
/// that fail policy or whose worker dies are reported with `error` set.
pub async fn detect_batch(request: BatchDetectRequest, config: &DetectionConfig) -> BatchDetectResponse {
    let parallel = request
        .parallel
        .unwrap_or(config.batch_parallel)
        .max(1);
    let semaphore = Arc::new(Semaphore::new(parallel));
    let total = request.items.len();

    info!(items = total, parallel, "batch.start");

    let mut ids = Vec::with_capacity(total);
    let mut set = JoinSet::new();
    for (idx, item) in request.items.into_iter().enumerate() {
        ids.push(item.id.unwrap_or_else(|| Uuid::new_v4().to_string()));

        let text = item.text;
        let semaphore = Arc::clone(&semaphore);
        let config = config.clone();
        set.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => tokio::task::spawn_blocking(move || detect_text(&text, &config))
                    .await
                    .unwrap_or_else(|e| Err(DetectError::Worker(e.to_string()))),
                Err(e) => Err(DetectError::Worker(e.to_string())),
            };
            (idx, outcome)
        });
    }

    let mut outcomes: Vec<Option<Result<DetectionResult, DetectError>>> = vec![None; total];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, outcome)) => outcomes[idx] = Some(outcome),
            Err(e) => warn!(error = %e, "batch.task_failed"),
        }
    }

    let items: Vec<BatchItemResponse> = ids
        .into_iter()
        .zip(outcomes)
        .map(|(id, outcome)| {
            match outcome.unwrap_or_else(|| Err(DetectError::Worker("task aborted".to_string()))) {
                Ok(result) => BatchItemResponse {
                    id,
                    result: Some(result),
                    error: None,
                },
                Err(e) => {
                    warn!(id = %id, error = %e, "batch.item_failed");
                    BatchItemResponse {
                        id,
                        result: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let summary = summarize(&items);
    info!(
        count = summary.count,
        fail_count = summary.fail_count,
        avg_ai_score = summary.avg_ai_score,
        "batch.done"
    );

    BatchDetectResponse { items, summary }
}

fn summarize(items: &[BatchItemResponse]) -> BatchSummary {
    let mut scores: Vec<f64> = items
        .iter()
        .filter_map(|i| i.result.as_ref().map(|r| r.ai_score))
        .collect();
    let fail_count = items.len() - scores.len();

    if scores.is_empty() {
        return BatchSummary {
            count: items.len(),
            fail_count,
            avg_ai_score: 0.0,
            p95_ai_score: 0.0,
        };
    }

    scores.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    let p95_idx = ((scores.len() as f64 * 0.95).ceil() as usize).saturating_sub(1);

    BatchSummary {
        count: items.len(),
        fail_count,
        avg_ai_score: avg,
        p95_ai_score: scores[p95_idx.min(scores.len() - 1)],
    }
}
