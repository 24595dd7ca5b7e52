use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poculum::prelude::*;
use serde_json::json;

fn poculum_i64_encode(c: &mut Criterion) {
    c.bench_function("Poculum i64 encode", |b| {
        let k = Poculum::from(1_000_000i64);
        b.iter(|| encode_full(black_box(&k)).unwrap())
    });
}

fn json_i64_encode(c: &mut Criterion) {
    c.bench_function("JSON i64 encode", |b| {
        b.iter(|| serde_json::to_string(&black_box(1_000_000i64)).unwrap())
    });
}

fn poculum_i64_decode(c: &mut Criterion) {
    c.bench_function("Poculum i64 decode", |b| {
        let enc = encode_full(&Poculum::from(1_000_000i64)).unwrap();
        b.iter(|| decode_full(black_box(&enc)).unwrap())
    });
}

fn json_i64_decode(c: &mut Criterion) {
    c.bench_function("JSON i64 decode", |b| {
        let enc = serde_json::to_string(&1_000_000i64).unwrap();
        b.iter(|| serde_json::from_str::<i64>(black_box(&enc)).unwrap())
    });
}

fn poculum_str_encode(c: &mut Criterion) {
    c.bench_function("Poculum string encode", |b| {
        let s: String = (0..10_000).map(|x| char::from(b'a' + (x % 26) as u8)).collect();
        let k = Poculum::from(s);
        b.iter(|| encode_full(black_box(&k)).unwrap())
    });
}

fn json_str_encode(c: &mut Criterion) {
    c.bench_function("JSON string encode", |b| {
        let s: String = (0..10_000).map(|x| char::from(b'a' + (x % 26) as u8)).collect();
        b.iter(|| serde_json::to_string(&black_box(&s)).unwrap())
    });
}

// A document with a numeric table and a text blob, the shape the format is
// meant to shrink relative to JSON.
fn sample_doc() -> Poculum {
    let numbers: Vec<Poculum> = (0..1000u64).map(Poculum::from).collect();
    let mut m = VecMap::with_capacity(2);
    m.push("numbers".to_string(), Poculum::from(numbers));
    m.push("text".to_string(), Poculum::from("hello".repeat(100)));
    Poculum::Map(m)
}

fn poculum_doc_round_trip(c: &mut Criterion) {
    let doc = sample_doc();
    let enc_len = encode_full(&doc).unwrap().len();
    c.bench_function(
        &format!("Poculum document round trip, {} bytes", enc_len),
        move |b| b.iter(|| decode_full(&encode_full(black_box(&doc)).unwrap()).unwrap()),
    );
}

fn json_doc_round_trip(c: &mut Criterion) {
    let doc = json!({
        "numbers": (0..1000u64).collect::<Vec<u64>>(),
        "text": "hello".repeat(100),
    });
    let enc_len = serde_json::to_vec(&doc).unwrap().len();
    c.bench_function(
        &format!("JSON document round trip, {} bytes", enc_len),
        move |b| {
            b.iter(|| {
                let enc = serde_json::to_vec(black_box(&doc)).unwrap();
                serde_json::from_slice::<serde_json::Value>(&enc).unwrap()
            })
        },
    );
}

criterion_group!(
    benches,
    poculum_i64_encode,
    json_i64_encode,
    poculum_i64_decode,
    json_i64_decode,
    poculum_str_encode,
    json_str_encode,
    poculum_doc_round_trip,
    json_doc_round_trip,
);
criterion_main!(benches);
