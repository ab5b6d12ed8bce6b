//! Benchmarks for the payment form engine.
//!
//! Every keystroke runs normalization, formatting and validation, so these
//! measure the per-input cost.
//!
//! Run with: cargo bench

use card_form::{card, format, luhn, normalize, CardForm, Field};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Test card numbers
const VISA_16: &str = "4539148803436467";
const VISA_16_FORMATTED: &str = "4539 1488 0343 6467";
const AMEX: &str = "378282246310005";

const VISA_DIGITS: [u8; 16] = [4, 5, 3, 9, 1, 4, 8, 8, 0, 3, 4, 3, 6, 4, 6, 7];

/// Random typed text: mostly digits with separators and letters mixed in.
fn random_inputs(count: usize, len: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"0123456789012345678901234567890123456789 -/abcXYZ";
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

/// Benchmark Luhn algorithm specifically
fn bench_luhn(c: &mut Criterion) {
    let mut group = c.benchmark_group("luhn");

    group.bench_function("validate_16_digits", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("passes_luhn_formatted", |b| {
        b.iter(|| luhn::passes_luhn(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("check_digit_15", |b| {
        b.iter(|| luhn::generate_check_digit(black_box(&VISA_DIGITS[..15])))
    });

    group.finish();
}

/// Benchmark the per-field text pipeline
fn bench_normalize_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_format");

    for len in [4usize, 16, 64] {
        let inputs = random_inputs(64, len);
        group.throughput(Throughput::Elements(inputs.len() as u64));

        group.bench_with_input(BenchmarkId::new("digits", len), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(normalize::normalize_digits(input));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("format", len), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    black_box(format::format_card_number(input));
                }
            })
        });
    }

    group.bench_function("name", |b| {
        b.iter(|| normalize::normalize_name(black_box("J0hn Sm!th-Appleseed")))
    });

    group.finish();
}

/// Benchmark card number validation
fn bench_card_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_validation");

    group.bench_function("visa_16_raw", |b| {
        b.iter(|| card::is_valid_card_number(black_box(VISA_16)))
    });

    group.bench_function("visa_16_formatted", |b| {
        b.iter(|| card::is_valid_card_number(black_box(VISA_16_FORMATTED)))
    });

    group.bench_function("amex_15", |b| {
        b.iter(|| card::is_valid_card_number(black_box(AMEX)))
    });

    group.finish();
}

/// Benchmark the form engine: keystrokes, submit and reset
fn bench_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("form");

    group.bench_function("type_card_number", |b| {
        b.iter(|| {
            let mut form = CardForm::default();
            for end in 1..=VISA_16.len() {
                black_box(form.input(Field::CardNumber, &VISA_16[..end]));
            }
        })
    });

    let inputs = random_inputs(100, 20);
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("random_inputs", |b| {
        let mut form = CardForm::default();
        b.iter(|| {
            for (input, field) in inputs.iter().zip(Field::ALL.iter().cycle()) {
                black_box(form.input(*field, input));
            }
        })
    });

    group.bench_function("submit_reset", |b| {
        let mut form = CardForm::default();
        b.iter(|| {
            form.input_name("John Smith");
            form.input_card_number(VISA_16);
            form.input_month("04");
            form.input_year("25");
            form.input_cvc("123");
            black_box(form.submit());
            form.reset();
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_luhn,
    bench_normalize_format,
    bench_card_validation,
    bench_form,
);

criterion_main!(benches);
