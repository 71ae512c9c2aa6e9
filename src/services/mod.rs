// Provenance Detector Core Services

pub mod text_processor;
pub mod config_store;
pub mod detection;

pub use text_processor::*;
pub use config_store::*;

pub use detection::{
    classify,
    classify_verdict,
    detect_batch,
    detect_text,
    score_sentence,
    DetectError,
};
