#[cfg(test)]
mod driver_tests {
    use rand::{rngs::StdRng, SeedableRng};

    use codec_core::compression::{create_codec, Codec, CodecError, CodecKind};
    use codec_core::config::HarnessConfig;
    use codec_core::driver::{
        bench, codec_rng, resolve_seed, run_all, run_all_with, run_codec, run_kinds, verify, verify_codec,
        Status,
    };
    use codec_core::types::HarnessError;

    /// Claims fast decompression but overruns its output by one byte.
    struct Overrunning;

    impl Codec for Overrunning {
        fn name(&self) -> &'static str { "overrunning" }
        fn kind(&self) -> CodecKind { CodecKind::Lz4 }
        fn max_compressed_size(&self, n: usize) -> usize { n }
        fn compress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
            output[..input.len()].copy_from_slice(input);
            Ok(input.len())
        }
        fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize, CodecError> {
            output[..input.len()].copy_from_slice(input);
            Ok(input.len())
        }
        fn decompress_fast(&self, input: &[u8], output: &mut [u8], n: usize) -> Result<usize, CodecError> {
            output[..n].copy_from_slice(&input[..n]);
            output[n] = 0;
            Ok(n)
        }
        fn supports_fast_decompress(&self) -> bool { true }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0DEC)
    }

    #[test]
    fn phases_pass_for_fast_codecs() {
        for kind in [CodecKind::Lz4, CodecKind::Deflate] {
            let c = create_codec(kind, None).unwrap();
            verify::round_trip(c.as_ref(), 4096, &mut rng()).unwrap();
            verify::concatenated_fast(c.as_ref(), 4096, &mut rng()).unwrap();
        }
    }

    #[test]
    fn zstd_passes_round_trip_but_not_fast_phase() {
        let c = create_codec(CodecKind::Zstd, None).unwrap();
        verify::round_trip(c.as_ref(), 4096, &mut rng()).unwrap();
        let err = verify::concatenated_fast(c.as_ref(), 4096, &mut rng()).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn sentinel_overwrite_is_an_assertion_failure() {
        let err = verify::concatenated_fast(&Overrunning, 64, &mut rng()).unwrap_err();
        assert!(err.is_assertion(), "{}", err);
        assert!(err.to_string().contains("write past 64 output bytes"));
    }

    #[test]
    fn verify_codec_stops_at_first_failure_when_asked() {
        let c = create_codec(CodecKind::Zstd, None).unwrap();
        let failures = verify_codec(c.as_ref(), 4096, &mut rng(), true);
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn run_codec_reports_done_for_lz4() {
        let cfg = HarnessConfig::quick(1);
        let out = run_codec(CodecKind::Lz4, &cfg, 1);
        assert_eq!(out.status, Status::Done);
        assert!(out.failures.is_empty());
        assert_eq!(out.bench.len(), 1);
        let snap = &out.bench[0];
        assert_eq!(snap.iterations, 4);
        assert!(snap.standard.is_some() && snap.fast.is_some());
    }

    #[test]
    fn run_codec_aborts_zstd_after_fast_phase_by_default() {
        let cfg = HarnessConfig::quick(2);
        let out = run_codec(CodecKind::Zstd, &cfg, 2);
        assert_eq!(out.status, Status::Failed);
        assert_eq!(out.failures.len(), 1);
        assert!(out.failures[0].contains("operation not supported"));
        assert!(out.bench.is_empty());
    }

    #[test]
    fn run_codec_continues_past_failure_when_configured() {
        let cfg = HarnessConfig { continue_after_failure: true, ..HarnessConfig::quick(3) };
        let out = run_codec(CodecKind::Zstd, &cfg, 3);
        assert_eq!(out.status, Status::Failed);
        assert_eq!(out.bench.len(), 1);
        assert!(out.bench[0].fast_unsupported);
        assert!(out.bench[0].fast.is_none());
        assert!(out.bench[0].standard.is_some());
    }

    #[test]
    fn none_kind_fails_without_aborting_run() {
        let cfg = HarnessConfig::quick(4);
        let summary = run_kinds(&[CodecKind::None, CodecKind::Lz4], &cfg);
        assert_eq!(summary.outcomes.len(), 2);
        assert_eq!(summary.outcomes[0].status, Status::Failed);
        assert!(summary.outcomes[0].failures[0].contains("compressor not available"));
        assert_eq!(summary.outcomes[1].status, Status::Done);
    }

    #[test]
    fn run_all_uses_fixed_order_and_seed() {
        let cfg = HarnessConfig { skip_bench: true, ..HarnessConfig::quick(5) };
        let summary = run_all(&cfg);
        let names: Vec<_> = summary.outcomes.iter().map(|o| o.codec.as_str()).collect();
        assert_eq!(names, vec!["lz4", "deflate", "zstd"]);
        assert_eq!(summary.seed, 5);
        assert!(!summary.all_passed());
        assert_eq!(summary.failed_codecs(), vec!["zstd"]);

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"status\": \"failed\""));
    }

    #[test]
    fn run_all_with_reports_each_outcome_in_order() {
        let cfg = HarnessConfig { skip_bench: true, ..HarnessConfig::quick(6) };
        let mut seen = Vec::new();
        let summary = run_all_with(&cfg, |o| seen.push((o.codec.clone(), o.status)));
        assert_eq!(seen.len(), summary.outcomes.len());
        for ((name, status), o) in seen.iter().zip(&summary.outcomes) {
            assert_eq!(name, &o.codec);
            assert_eq!(*status, o.status);
        }
    }

    #[test]
    fn configured_level_reaches_the_codec() {
        let mut cfg = HarnessConfig::quick(7);
        cfg.levels.insert("deflate".into(), 0);
        let out = run_codec(CodecKind::Deflate, &cfg, 7);
        assert_eq!(out.status, Status::Done);
        // level 0 stores, so nothing shrinks
        assert!(out.bench[0].bytes_compressed >= out.bench[0].bytes_original);
    }

    #[test]
    fn bench_checks_all_sizes() {
        let c = create_codec(CodecKind::Deflate, None).unwrap();
        let snaps = bench::latency(c.as_ref(), &[4096, 16384], 3, &mut rng()).unwrap();
        assert_eq!(snaps.iter().map(|s| s.chunk_size).collect::<Vec<_>>(), vec![4096, 16384]);
        for s in &snaps {
            assert_eq!(s.standard.unwrap().count, 3);
            assert_eq!(s.fast.unwrap().count, 3);
            assert_eq!(s.bytes_original, 3 * s.chunk_size as u64);
        }
    }

    #[test]
    fn seeds_are_reproducible() {
        let cfg = HarnessConfig::quick(99);
        assert_eq!(resolve_seed(&cfg), 99);

        use rand::RngCore;
        let a = codec_rng(99, CodecKind::Lz4).next_u64();
        let b = codec_rng(99, CodecKind::Lz4).next_u64();
        let c = codec_rng(99, CodecKind::Deflate).next_u64();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn assertion_message_carries_location() {
        fn check(v: usize) -> Result<(), HarnessError> {
            codec_core::verify!(v == 1, "got {}", v);
            Ok(())
        }
        assert!(check(1).is_ok());
        let msg = check(2).unwrap_err().to_string();
        assert!(msg.contains("test_driver.rs"));
        assert!(msg.contains("assertion `v == 1` failed: got 2"));
    }
}
