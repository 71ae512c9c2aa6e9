use anyhow::{Context, Result};
use provenance_detector::models::BatchDetectRequest;
use provenance_detector::services::config_store::{AppConfig, ConfigStore};
use provenance_detector::{detect_batch, detect_text, init_logging};
use serde::Serialize;
use std::io::Read;

fn preview(s: &str, max_chars: usize) -> String {
    let mut out: String = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin failed")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("read file failed: {}", path))
}

fn load_config() -> Result<AppConfig> {
    match ConfigStore::default_config_dir() {
        Some(dir) => ConfigStore::new(dir).load().context("load config failed"),
        None => Ok(AppConfig::default()),
    }
}

fn write_json<T: Serialize>(out_path: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(out_path, json).with_context(|| format!("write out failed: {}", out_path))?;
    println!();
    println!("Wrote JSON: {}", out_path);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage:\n  classify_text <path|-> [--out <json_path>] [--sentences <n>]\n  classify_text <batch.json> --batch [--out <json_path>]\n  classify_text --init-config\n\nNotes:\n  - `-` reads the text from stdin.\n  - `--batch` expects a JSON body: {{\"items\": [{{\"id\": \"..\", \"text\": \"..\"}}], \"parallel\": 4}}."
        );
        return Ok(());
    }

    init_logging();

    if has_flag(&args, "--init-config") {
        let dir = ConfigStore::default_config_dir()
            .context("no config directory available on this platform")?;
        let store = ConfigStore::new(dir);
        store
            .init_default(env!("CARGO_PKG_VERSION"))
            .context("write config failed")?;
        println!("Wrote config: {}", store.config_file().display());
        return Ok(());
    }

    let path = args[1].clone();
    let out_path = parse_arg_value(&args, "--out");
    let sentences_n: usize = parse_arg_value(&args, "--sentences")
        .and_then(|s| s.parse().ok())
        .unwrap_or(50);
    let config = load_config()?;
    let input = read_input(&path)?;

    if has_flag(&args, "--batch") {
        let request: BatchDetectRequest =
            serde_json::from_str(&input).context("parse batch request failed")?;
        let response = detect_batch(request, &config.detection).await;

        for item in &response.items {
            match (&item.result, &item.error) {
                (Some(r), _) => println!(
                    "[{}] ai={:.0} plagiarism={:.0} human={:.0}  {}",
                    item.id, r.ai_score, r.plagiarism_score, r.human_written_score, r.overview.verdict
                ),
                (None, Some(e)) => println!("[{}] error: {}", item.id, e),
                (None, None) => println!("[{}] no result", item.id),
            }
        }
        println!();
        println!(
            "Items: {}  failed: {}  avg ai: {:.1}  p95 ai: {:.1}",
            response.summary.count,
            response.summary.fail_count,
            response.summary.avg_ai_score,
            response.summary.p95_ai_score
        );

        if let Some(out_path) = out_path {
            write_json(&out_path, &response)?;
        }
        return Ok(());
    }

    let result = detect_text(&input, &config.detection)?;

    println!("Input: {}", path);
    println!(
        "Words: {}  Sentences: {}  Flesch: {:.1}",
        result.statistics.word_count,
        result.statistics.sentence_count,
        result.statistics.flesch_reading_ease
    );
    println!();
    println!("Verdict: {}", result.overview.verdict);
    println!("  {}", result.overview.explanation);
    for indicator in &result.overview.indicators {
        println!("  - {}", indicator);
    }
    println!();
    println!(
        "AI: {:.0}  Plagiarism: {:.0}  Human: {:.0}",
        result.ai_score, result.plagiarism_score, result.human_written_score
    );
    println!();

    for (i, s) in result.sentences.iter().take(sentences_n).enumerate() {
        println!(
            "[S{:04}] ai={:5.1}{} {}{}",
            i,
            s.ai_probability,
            if s.suspicious { " !" } else { "  " },
            preview(&s.text, 100),
            s.reason
                .as_deref()
                .map(|r| format!("  ({})", r))
                .unwrap_or_default()
        );
    }
    if result.sentences.len() > sentences_n {
        println!("... ({} more sentences)", result.sentences.len() - sentences_n);
    }

    if let Some(out_path) = out_path {
        write_json(&out_path, &result)?;
    }

    Ok(())
}
