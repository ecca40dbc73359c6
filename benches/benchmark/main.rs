use criterion::criterion_main;

mod append;
mod common;

criterion_main!(append::append_benches);
