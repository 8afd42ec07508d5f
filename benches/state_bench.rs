// benches/state_bench.rs

use bb84_otp::bb84::{flip_state, generate_bb84_state, measure_bb84_state, run_round};
use bb84_otp::bb84_states::{random_bit, MeasurementBasis};
use bb84_otp::{encode_key, Cipher, KeySource, OneTimePad, SimulatedExchange, SimulationConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn benchmark_states(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("generate_bb84_state", |b| {
        b.iter(|| generate_bb84_state(random_bit(&mut rng), MeasurementBasis::random(&mut rng)))
    });

    let state = generate_bb84_state(true, MeasurementBasis::Diagonal);
    c.bench_function("measure_bb84_state_matching_basis", |b| {
        b.iter(|| measure_bb84_state(black_box(state), MeasurementBasis::Diagonal, &mut rng))
    });
    c.bench_function("measure_bb84_state_other_basis", |b| {
        b.iter(|| measure_bb84_state(black_box(state), MeasurementBasis::Rectilinear, &mut rng))
    });
    c.bench_function("flip_state", |b| b.iter(|| flip_state(black_box(state))));
    c.bench_function("run_round_noisy", |b| b.iter(|| run_round(0.1, 0.05, &mut rng)));
}

fn benchmark_pipeline(c: &mut Criterion) {
    c.bench_function("simulated_exchange_128", |b| {
        let mut source = SimulatedExchange::new(SimulationConfig::seeded(1)).unwrap();
        b.iter(|| source.exchange().unwrap())
    });

    let key = encode_key(&[true, false, true, true, false, false, true, false]);
    c.bench_function("one_time_pad_roundtrip", |b| {
        b.iter(|| {
            let ciphertext = OneTimePad.encrypt(black_box("hello quantum world"), &key).unwrap();
            OneTimePad.decrypt(&ciphertext, &key).unwrap()
        })
    });
}

criterion_group!(benches, benchmark_states, benchmark_pipeline);
criterion_main!(benches);
