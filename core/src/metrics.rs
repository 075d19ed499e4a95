use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Egen registry for kjernen, så binæren bestemmer selv hva som eksponeres.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static SUMMARIES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register(IntCounterVec::new(
        Opts::new("workout_summaries_total", "Workout summaries produced"),
        &["training_type"],
    ))
});

static PACKAGE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register(IntCounterVec::new(
        Opts::new("workout_package_errors_total", "Packages rejected by the dispatcher"),
        &["reason"],
    ))
});

fn register(counter: prometheus::Result<IntCounterVec>) -> IntCounterVec {
    // Navn og labels er konstante; feiler bare ved programmeringsfeil.
    let counter = counter.expect("valid metric definition");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("metric registered once");
    counter
}

pub fn summaries_total(training_type: &str) -> prometheus::IntCounter {
    SUMMARIES_TOTAL.with_label_values(&[training_type])
}

pub fn package_errors_total(reason: &str) -> prometheus::IntCounter {
    PACKAGE_ERRORS_TOTAL.with_label_values(&[reason])
}

/// Prometheus tekstformat for alle tellere i `REGISTRY`.
pub fn gather_text() -> String {
    // Tvinger frem registrering selv om ingenting er talt ennå.
    Lazy::force(&SUMMARIES_TOTAL);
    Lazy::force(&PACKAGE_ERRORS_TOTAL);

    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&REGISTRY.gather(), &mut buf) {
        log::warn!("metrics encoding failed: {e}");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
