use boxplot_rs::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_fallback("boxplot_rs=debug"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_once() {
    assert!(init_tracing_with_fallback("boxplot_rs=debug"));
    assert!(!init_default_tracing());
}
