#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use vblob::prelude::*;

const N_FRAMES: usize = 2000;
const FRAME_LEN: usize = 200;

fn many_frames() -> VariableBlob {
    let payload = VariableBlob::from(vec![0x5a; FRAME_LEN]);
    let mut out = VariableBlob::with_capacity(N_FRAMES * (FRAME_LEN + 2));
    for _ in 0..N_FRAMES {
        payload.frame_into(&mut out);
    }
    out
}

fn bench_frame(c: &mut Criterion) {
    let payload = VariableBlob::from(vec![0x5a; FRAME_LEN]);
    c.bench_function(
        &format!("Framing {} payloads of {} bytes", N_FRAMES, FRAME_LEN),
        move |b| {
            b.iter(|| {
                let mut out = VariableBlob::new();
                for _ in 0..N_FRAMES {
                    black_box(&payload).frame_into(&mut out);
                }
                out
            })
        },
    );
}

fn bench_unframe(c: &mut Criterion) {
    let frames = many_frames();
    c.bench_function(
        &format!("Unframing a buffer of {} bytes", frames.len()),
        move |b| {
            b.iter(|| {
                let mut src = frames.clone();
                for _ in 0..N_FRAMES {
                    black_box(src.unframe().unwrap());
                }
            })
        },
    );
}

fn bench_ints(c: &mut Criterion) {
    let xs: Vec<u64> = (0..N_FRAMES as u64).map(|i| i * 0x0101_0101).collect();
    let enc = encode_full(&xs).unwrap();
    c.bench_function(
        &format!("Encoding {} u64s", N_FRAMES),
        move |b| b.iter(|| encode_full(black_box(&xs))),
    );
    c.bench_function(
        &format!("Decoding {} u64s", N_FRAMES),
        move |b| b.iter(|| decode_full::<_, Vec<u64>>(black_box(&enc))),
    );
}

fn bench_wide(c: &mut Criterion) {
    let n = Int256::min_value();
    c.bench_function("Encoding an Int256", move |b| {
        b.iter(|| encode_full(black_box(&n)))
    });
}

criterion_group!(benches, bench_frame, bench_unframe, bench_ints, bench_wide);
criterion_main!(benches);
