use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jscan::{get_by_path, parse_lazy, Path, VecTape};

fn flat_object(n: usize) -> Vec<u8> {
    let mut s = Vec::with_capacity(n * 12);
    s.push(b'{');
    for i in 0..n {
        if i > 0 {
            s.push(b',');
        }
        s.extend_from_slice(format!("\"k{i}\":{i}").as_bytes());
    }
    s.push(b'}');
    s
}

fn array_of_objects(n: usize) -> Vec<u8> {
    let mut s = Vec::with_capacity(n * 24);
    s.push(b'[');
    for i in 0..n {
        if i > 0 {
            s.push(b',');
        }
        s.extend_from_slice(format!("{{\"id\":{i},\"name\":\"item{i}\"}}").as_bytes());
    }
    s.push(b']');
    s
}

fn bench_get_by_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_path");
    for n in [16usize, 256, 4096] {
        let doc = flat_object(n);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("last_key", n), &doc, |b, doc| {
            let path = Path::parse(&format!("k{}", n - 1)).unwrap();
            b.iter(|| get_by_path(black_box(doc), black_box(&path)).unwrap());
        });
    }
    group.finish();
}

fn bench_parse_lazy(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_lazy");
    for n in [16usize, 256, 4096] {
        let doc = array_of_objects(n);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::new("last_element", n), &doc, |b, doc| {
            let path = Path::parse(&format!("[{}]", n - 1)).unwrap();
            b.iter(|| {
                let mut tape = VecTape::new();
                parse_lazy(black_box(doc), black_box(&path), &mut tape).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_by_path, bench_parse_lazy);
criterion_main!(benches);
