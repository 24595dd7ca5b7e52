use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poculum::prelude::*;

const N_BIG_LIST: usize = 2000;

fn big_list() -> Poculum {
    let v: Vec<Poculum> = (0..N_BIG_LIST).map(|i| Poculum::from(i as u64)).collect();
    Poculum::from(v)
}

const N_LIST: usize = 10;
const N_MAP: usize = 10;

fn big_val() -> Poculum {
    let v0: Vec<Poculum> = (0..N_LIST).map(|i| Poculum::from(i as u64)).collect();
    let m: VecMap<String, Poculum> = (0..N_MAP)
        .map(|i| (format!("key{}", i), Poculum::from(v0.clone())))
        .collect();
    let v: Vec<Poculum> = std::iter::repeat(m).map(Poculum::from).take(N_LIST).collect();
    Poculum::from(v)
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function(
        &format!(
            "Creating a Poculum object of size {}",
            encode_full(&big_val()).unwrap().len()
        ),
        |b| b.iter(|| black_box(big_val())),
    );
}

fn bench_enc(c: &mut Criterion) {
    let big = big_val();
    let enc_len = encode_full(&big).unwrap().len();
    c.bench_function(
        &format!("Encoding a Poculum object, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&big)).unwrap()),
    );
}

fn bench_enc_single_alloc(c: &mut Criterion) {
    let big = big_val();
    let enc_len = encode_full(&big).unwrap().len();
    c.bench_function(
        &format!(
            "Encoding a Poculum object, output size of {} bytes, buffer preallocated",
            enc_len
        ),
        move |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(enc_len * 2);
                encode(black_box(&big), &mut out).unwrap();
                out
            })
        },
    );
}

fn bench_dec(c: &mut Criterion) {
    let big = big_val();
    let enc = encode_full(&big).unwrap();
    c.bench_function(
        &format!("Decoding a Poculum object, input size of {} bytes", enc.len()),
        move |b| b.iter(|| decode_full(black_box(&enc)).unwrap()),
    );
}

fn bench_enc_flat(c: &mut Criterion) {
    let flat = big_list();
    let enc_len = encode_full(&flat).unwrap().len();
    c.bench_function(
        &format!("Encoding a Poculum vector, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_full(black_box(&flat)).unwrap()),
    );
}

fn bench_dec_flat(c: &mut Criterion) {
    let flat = big_list();
    let enc = encode_full(&flat).unwrap();
    c.bench_function(
        &format!("Decoding a Poculum vector of length {}", enc.len()),
        move |b| b.iter(|| decode_full(black_box(&enc)).unwrap()),
    );
}

criterion_group!(
    benches,
    bench_construction,
    bench_enc,
    bench_enc_single_alloc,
    bench_dec,
    bench_enc_flat,
    bench_dec_flat
);
criterion_main!(benches);
