//! Integration tests for the signing pipeline.
//!
//! These tests run the full chain end-to-end:
//! source -> single-hash -> multi-hash -> combine -> sink
//! and verify determinism, ordering, fault propagation and the
//! no-deadlock property at the buffer ceiling.

use data_signer::core::pipeline::{Pipeline, BUFFER_CAPACITY};
use data_signer::error::PipelineError;
use data_signer::core::primitives::doubles::{
    FailingChecksum, FailingDigest, IdentityDigest, LengthChecksum,
};
use data_signer::core::primitives::{Checksum, Digest, SerializedDigest, Sha256Digest, Xxh3Checksum};
use data_signer::core::stages::{
    CollectSink, CombineStage, MultiHashStage, SingleHashStage, ValueSource,
};
use std::sync::Arc;

fn run_chain(
    checksum: Arc<dyn Checksum>,
    digest: Arc<dyn Digest>,
    values: Vec<String>,
) -> Result<Option<String>, PipelineError> {
    let (sink, results) = CollectSink::new();
    Pipeline::builder()
        .stage(ValueSource::new(values))
        .stage(SingleHashStage::new(
            Arc::clone(&checksum),
            SerializedDigest::new(digest),
        ))
        .stage(MultiHashStage::new(checksum))
        .stage(CombineStage::new())
        .stage(sink)
        .build()
        .run()?;
    Ok(results.try_iter().next())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn combined_signature_with_test_doubles() {
    // Per value "0" / "1": single-hash gives "1~1" (length checksums),
    // multi-hash gives six length-4 checksums, so "444444" per item.
    let signature = run_chain(
        Arc::new(LengthChecksum),
        Arc::new(IdentityDigest),
        strings(&["0", "1"]),
    )
    .unwrap();

    assert_eq!(signature.as_deref(), Some("444444_444444"));
}

#[test]
fn combined_signature_distinguishes_value_lengths() {
    // "a" -> "1~1" (len 3) -> "444444"; the ten-byte value -> "10~10"
    // (len 5) -> "666666".
    let signature = run_chain(
        Arc::new(LengthChecksum),
        Arc::new(IdentityDigest),
        strings(&["0123456789", "a"]),
    )
    .unwrap();

    assert_eq!(signature.as_deref(), Some("444444_666666"));
}

#[test]
fn combined_signature_is_arrival_order_independent() {
    let forward = run_chain(
        Arc::new(LengthChecksum),
        Arc::new(IdentityDigest),
        strings(&["a", "0123456789"]),
    )
    .unwrap();
    let reversed = run_chain(
        Arc::new(LengthChecksum),
        Arc::new(IdentityDigest),
        strings(&["0123456789", "a"]),
    )
    .unwrap();

    assert_eq!(forward, reversed);
}

#[test]
fn production_primitives_are_deterministic() {
    let values = strings(&["0", "1", "2"]);

    let first = run_chain(Arc::new(Xxh3Checksum), Arc::new(Sha256Digest), values.clone()).unwrap();
    let second = run_chain(Arc::new(Xxh3Checksum), Arc::new(Sha256Digest), values).unwrap();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn pipeline_terminates_at_the_buffer_ceiling() {
    // 100 items saturate every intermediate channel; correct close
    // semantics must still drain the chain to completion.
    let values: Vec<String> = (0..BUFFER_CAPACITY).map(|i| i.to_string()).collect();

    let signature = run_chain(Arc::new(LengthChecksum), Arc::new(IdentityDigest), values)
        .unwrap()
        .expect("combine emits one string");

    // One multi-signature per item, joined by 99 separators.
    assert_eq!(signature.split('_').count(), BUFFER_CAPACITY);
}

#[test]
fn primitive_failure_yields_no_combined_output() {
    let (sink, results) = CollectSink::new();
    let checksum: Arc<dyn Checksum> = Arc::new(LengthChecksum);
    let result = Pipeline::builder()
        .stage(ValueSource::new(strings(&["0", "1"])))
        .stage(SingleHashStage::new(
            Arc::clone(&checksum),
            SerializedDigest::new(Arc::new(FailingDigest)),
        ))
        .stage(MultiHashStage::new(checksum))
        .stage(CombineStage::new())
        .stage(sink)
        .build()
        .run();

    assert!(matches!(
        result,
        Err(PipelineError::Stage {
            stage: "single-hash",
            ..
        })
    ));
    assert_eq!(results.try_iter().count(), 0);
}

#[test]
fn late_stage_failure_yields_no_combined_output() {
    // The failing stage closes its output like an exhausted one; the
    // combine stage downstream must not turn that into an empty
    // combined result.
    let (sink, results) = CollectSink::new();
    let result = Pipeline::builder()
        .stage(ValueSource::new(strings(&["0", "1"])))
        .stage(SingleHashStage::new(
            Arc::new(LengthChecksum),
            SerializedDigest::new(Arc::new(IdentityDigest)),
        ))
        .stage(MultiHashStage::new(Arc::new(FailingChecksum)))
        .stage(CombineStage::new())
        .stage(sink)
        .build()
        .run();

    assert!(matches!(
        result,
        Err(PipelineError::Stage {
            stage: "multi-hash",
            ..
        })
    ));
    assert_eq!(results.try_iter().count(), 0);
}
