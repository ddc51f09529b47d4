//! Criterion benchmark untuk codec envelope
//!
//! Run dengan: cargo bench

use amp::{Header, Message};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_header(c: &mut Criterion) {
    let mut group = c.benchmark_group("header");
    group.throughput(Throughput::Elements(1));

    let header = Header::new(0x12, 64, [0xAB; 32]);
    let bytes = header.encode();

    group.bench_function("encode", |b| {
        b.iter(|| black_box(header).encode());
    });

    group.bench_function("decode", |b| {
        b.iter(|| Header::decode(black_box(&bytes)).unwrap());
    });

    group.finish();
}

fn bench_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("message");

    for payload_size in [64usize, 1024, 65536].iter() {
        let payload = vec![0x5Au8; *payload_size];
        let msg = Message::from_vector(("PeerMessage", &payload)).unwrap();
        let raw = msg.as_raw().unwrap();

        group.throughput(Throughput::Bytes(raw.len() as u64));

        group.bench_function(format!("as_raw_{}", payload_size), |b| {
            b.iter(|| black_box(&msg).as_raw().unwrap());
        });

        group.bench_function(format!("from_raw_{}", payload_size), |b| {
            b.iter(|| Message::from_raw(black_box(&raw)).unwrap());
        });

        group.bench_function(format!("set_data_{}", payload_size), |b| {
            let mut target = Message::new();
            b.iter(|| target.set_data(black_box(&payload)).unwrap());
        });

        group.bench_function(format!("id_{}", payload_size), |b| {
            b.iter(|| black_box(&msg).id().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_header, bench_message);
criterion_main!(benches);
