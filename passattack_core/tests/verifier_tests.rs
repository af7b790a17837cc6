//! Hash verifier contract tests

use passattack_core::{AlgorithmId, HashSpec, HashVerifier};
use proptest::prelude::*;

const FAST_ALGORITHMS: [AlgorithmId; 4] = [
    AlgorithmId::Md5,
    AlgorithmId::Sha1,
    AlgorithmId::Sha256,
    AlgorithmId::Sha512,
];

#[test]
fn digest_verify_round_trip_for_fast_algorithms() {
    let verifier = HashVerifier::new();
    for algorithm in FAST_ALGORITHMS {
        let target = verifier.digest("correct horse battery staple", algorithm).unwrap();
        assert!(
            verifier
                .verify("correct horse battery staple", &target, algorithm)
                .unwrap(),
            "round trip failed for {algorithm}"
        );
        assert!(!verifier
            .verify("correct horse battery stable", &target, algorithm)
            .unwrap());
    }
}

#[test]
fn digest_verify_round_trip_for_adaptive_algorithms() {
    let verifier = HashVerifier::new();
    for algorithm in [AlgorithmId::Bcrypt, AlgorithmId::Pbkdf2Sha256] {
        let probe = verifier.availability(algorithm);
        if !probe.available {
            // Backend compiled out in this configuration; the probe is the
            // supported way to find out, so there is nothing more to test.
            continue;
        }
        let target = verifier.digest("hunter2", algorithm).unwrap();
        assert!(verifier.verify("hunter2", &target, algorithm).unwrap());
        assert!(!verifier.verify("hunter3", &target, algorithm).unwrap());
    }
}

#[test]
fn hex_targets_compare_case_insensitively() {
    let verifier = HashVerifier::new();
    for algorithm in FAST_ALGORITHMS {
        let target = verifier.digest("Passw0rd", algorithm).unwrap().to_uppercase();
        assert!(verifier.verify("Passw0rd", &target, algorithm).unwrap());
    }
}

#[test]
fn candidates_compare_case_sensitively() {
    let verifier = HashVerifier::new();
    let target = verifier.digest("Password", AlgorithmId::Sha256).unwrap();
    assert!(!verifier.verify("password", &target, AlgorithmId::Sha256).unwrap());
}

#[test]
fn malformed_fast_target_is_false_not_error() {
    let verifier = HashVerifier::new();
    for algorithm in FAST_ALGORITHMS {
        for target in ["", "zzz", "definitely not hex", "$2b$12$garbage"] {
            assert!(!verifier.verify("pw", target, algorithm).unwrap());
        }
    }
}

#[test]
fn verify_trims_target_whitespace() {
    let verifier = HashVerifier::new();
    let target = verifier.digest("abc", AlgorithmId::Md5).unwrap();
    assert!(verifier
        .verify("abc", &format!("  {target}\n"), AlgorithmId::Md5)
        .unwrap());
}

#[test]
fn fast_algorithms_are_always_available() {
    let verifier = HashVerifier::new();
    for algorithm in FAST_ALGORITHMS {
        let probe = verifier.availability(algorithm);
        assert!(probe.available, "{algorithm} should always be available");
        assert!(!probe.reason.is_empty());
    }
}

#[test]
fn pbkdf2_is_available_regardless_of_backend() {
    // The custom fallback encoding keeps pbkdf2_sha256 usable even when
    // the PHC backend is compiled out.
    let probe = HashVerifier::new().availability(AlgorithmId::Pbkdf2Sha256);
    assert!(probe.available);
}

#[test]
fn hash_spec_preserves_adaptive_targets_byte_exact() {
    let encoded = "$2b$12$abcdefghijklmnopqrstuv";
    let spec = HashSpec::new(AlgorithmId::Bcrypt, &format!(" {encoded} ")).unwrap();
    assert_eq!(spec.target(), encoded);
}

proptest! {
    #[test]
    fn prop_round_trip_holds_for_arbitrary_passwords(password in "[ -~]{0,24}") {
        let verifier = HashVerifier::new();
        for algorithm in FAST_ALGORITHMS {
            let target = verifier.digest(&password, algorithm).unwrap();
            prop_assert!(verifier.verify(&password, &target, algorithm).unwrap());
        }
    }

    #[test]
    fn prop_digest_is_deterministic(password in "\\PC{0,16}") {
        let verifier = HashVerifier::new();
        for algorithm in FAST_ALGORITHMS {
            let first = verifier.digest(&password, algorithm).unwrap();
            let second = verifier.digest(&password, algorithm).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
