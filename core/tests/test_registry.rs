// tests/test_registry.rs
use serde_json::json;
use workout_core::{read_package, ActivityKind, PackageError, Workout};

#[test]
fn test_codes_resolve_to_variants() {
    let swm = read_package("SWM", &[json!(720), json!(1), json!(80), json!(25), json!(40)]).unwrap();
    let run = read_package("RUN", &[json!(15000), json!(1), json!(75)]).unwrap();
    let wlk = read_package("WLK", &[json!(9000), json!(1), json!(75), json!(180)]).unwrap();

    assert!(matches!(swm, Workout::Swimming(s) if s.count_pool == 40 && s.length_pool == 25.0));
    assert!(matches!(run, Workout::Running(r) if r.action == 15000));
    assert!(matches!(wlk, Workout::SportsWalking(w) if w.height == 180.0));

    assert_eq!(swm.kind(), ActivityKind::Swimming);
    assert_eq!(run.kind().name(), "Running");
    assert_eq!(wlk.kind().code(), "WLK");
}

#[test]
fn test_unknown_code() {
    let err = read_package("GGR", &[json!(1), json!(1), json!(1)]).unwrap_err();
    assert_eq!(err, PackageError::UnknownCode("GGR".to_string()));
    assert_eq!(err.reason(), "unknown_code");
    assert!(err.to_string().contains("GGR"));
}

#[test]
fn test_lookup_is_case_sensitive() {
    let err = read_package("run", &[json!(15000), json!(1), json!(75)]).unwrap_err();
    assert!(matches!(err, PackageError::UnknownCode(_)));
}

#[test]
fn test_arity_mismatch() {
    let err = read_package("RUN", &[json!(15000), json!(1), json!(75), json!(180)]).unwrap_err();
    assert_eq!(
        err,
        PackageError::ArityMismatch { code: "RUN".into(), expected: 3, got: 4 }
    );

    let err = read_package("SWM", &[json!(720)]).unwrap_err();
    assert!(matches!(err, PackageError::ArityMismatch { expected: 5, got: 1, .. }));
    assert_eq!(err.to_string(), "SWM: expected 5 readings, got 1");
}

#[test]
fn test_non_numeric_reading() {
    let err = read_package("WLK", &[json!(9000), json!("one"), json!(75), json!(180)]).unwrap_err();
    match err {
        PackageError::InvalidReading { ref field, index, ref value, .. } => {
            assert_eq!(*field, "duration");
            assert_eq!(index, 1);
            assert_eq!(*value, json!("one"));
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.reason(), "invalid_reading");
}

#[test]
fn test_integer_fields() {
    // 720.0 er et heltall, 720.5 er det ikke
    assert!(read_package("RUN", &[json!(720.0), json!(1), json!(75)]).is_ok());

    let err = read_package("SWM", &[json!(720), json!(1), json!(80), json!(25), json!(40.5)]).unwrap_err();
    assert!(matches!(err, PackageError::InvalidReading { field: "count_pool", index: 4, .. }));

    let err = read_package("RUN", &[json!(null), json!(1), json!(75)]).unwrap_err();
    assert!(matches!(err, PackageError::InvalidReading { field: "action", .. }));
}

#[test]
fn test_arity_table() {
    assert_eq!(ActivityKind::Swimming.arity(), 5);
    assert_eq!(ActivityKind::Running.arity(), 3);
    assert_eq!(ActivityKind::SportsWalking.arity(), 4);
}
