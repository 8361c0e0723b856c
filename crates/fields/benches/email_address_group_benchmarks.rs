use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use crm_fields::{EmailAddress, EmailAddressGroup};

fn build_group(size: usize) -> EmailAddressGroup {
    let list = (0..size)
        .map(|i| EmailAddress::from_address(format!("contact{i}@example.com")).unwrap())
        .collect();
    EmailAddressGroup::from_list(list).unwrap()
}

fn bench_from_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_list");
    for size in [1usize, 5, 25, 100] {
        let list: Vec<EmailAddress> = build_group(size).list().to_vec();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| EmailAddressGroup::from_list(black_box(list.clone())).unwrap())
        });
    }
    group.finish();
}

fn bench_derivations(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    for size in [5usize, 25, 100] {
        let base = build_group(size);
        let existing = base.list()[size - 1].clone();
        let fresh = EmailAddress::from_address("fresh@example.com").unwrap();

        group.bench_with_input(
            BenchmarkId::new("with_primary_existing", size),
            &base,
            |b, base| b.iter(|| base.with_primary(black_box(existing.clone()))),
        );
        group.bench_with_input(BenchmarkId::new("with_added", size), &base, |b, base| {
            b.iter(|| base.with_added(black_box(fresh.clone())).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("has_address_miss", size), &base, |b, base| {
            b.iter(|| base.has_address(black_box("missing@example.com")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_from_list, bench_derivations);
criterion_main!(benches);
