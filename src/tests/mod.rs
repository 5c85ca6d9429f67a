mod phonenormalizer_tests;

/// Installs a trace level logger once for the whole test binary, so
/// rejected numbers show up in the output of failing tests.
pub(crate) fn init_logger() {
    let _ = colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
