use crate::common::{configure_criterion, realistic_records, realistic_users, User};
use criterion::{criterion_group, BatchSize, Criterion};
use model_collections::{CollectionConfig, Input, Sequence};
use std::hint::black_box;

pub fn bench_append_policies(c: &mut Criterion) {
    let users = realistic_users();
    let records = realistic_records();
    let base = Sequence::<User>::default_class();
    let strict = base.subclass("StrictUsers", CollectionConfig::strict());
    let lax = base.subclass("LaxUsers", CollectionConfig::lax());
    let unchecked = base.subclass("UncheckedUsers", CollectionConfig::unchecked());

    let mut group = c.benchmark_group("append");

    group.bench_function("strict_instances", |b| {
        b.iter_batched(
            || Sequence::with_class(strict.clone()),
            |mut seq| {
                for user in users {
                    seq.append(user.clone()).unwrap();
                }
                black_box(seq)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lax_instances", |b| {
        b.iter_batched(
            || Sequence::with_class(lax.clone()),
            |mut seq| {
                for user in users {
                    seq.append(user.clone()).unwrap();
                }
                black_box(seq)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lax_records", |b| {
        b.iter_batched(
            || Sequence::with_class(lax.clone()),
            |mut seq| {
                for record in records {
                    seq.append(Input::raw(record.clone())).unwrap();
                }
                black_box(seq)
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("strict_rejects_records", |b| {
        b.iter_batched(
            || Sequence::with_class(strict.clone()),
            |mut seq| {
                for record in records {
                    black_box(seq.append(Input::raw(record.clone())).is_err());
                }
                seq
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("unchecked_instances", |b| {
        b.iter_batched(
            || Sequence::with_class(unchecked.clone()),
            |mut seq| {
                for user in users {
                    seq.append(user.clone()).unwrap();
                }
                black_box(seq)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

pub fn bench_bulk_decode(c: &mut Criterion) {
    let text = serde_json::to_string(realistic_records()).unwrap();
    let class = Sequence::<User>::default_class();

    c.bench_function("validate_json_1000", |b| {
        b.iter(|| {
            let decoded = Sequence::validate_json(class.clone(), black_box(&text));
            black_box(decoded.unwrap())
        })
    });
}

criterion_group! {
    name = append_benches;
    config = configure_criterion();
    targets = bench_append_policies, bench_bulk_decode,
}
