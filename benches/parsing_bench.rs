use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bdphonenumber::PHONE_NORMALIZER;

use phonenumber::{self as rlp, country::Id};

/// A mix of accepted and rejected inputs, written the ways people
/// actually type them.
fn setup_parsing_data() -> Vec<&'static str> {
    vec![
        // international form
        "+8801712345678",
        // country code without plus
        "8801987654321",
        // no country code at all
        "1712345678",
        // spaces and hyphens
        "+880 1612-345678",
        // Bengali digits
        "+৮৮০১৭১২৩৪৫৬৭৮",
        // national prefix, rejected by validate
        "01512345678",
        // too short
        "+880171234567",
        // garbage
        "not a phone",
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let inputs = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("bdphonenumber: validate", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_NORMALIZER.validate(black_box(input));
            }
        })
    });

    group.bench_function("bdphonenumber: parse", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = PHONE_NORMALIZER.parse(black_box(input));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = rlp::parse(Some(Id::BD), black_box(input));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
