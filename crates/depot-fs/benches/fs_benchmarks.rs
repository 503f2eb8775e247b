use criterion::{Criterion, black_box, criterion_group, criterion_main};
use depot_fs::{Location, NormalizedPath, PathHandle};
use std::fs;
use tempfile::tempdir;

fn copy_directory_benchmark(c: &mut Criterion) {
    c.bench_function("PathHandle::copy_directory_to (flat, 64 files)", |b| {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        for i in 0..64 {
            let sub = src.join(format!("d{}", i % 8));
            fs::create_dir_all(&sub).unwrap();
            fs::write(sub.join(format!("f{i}.bin")), vec![0u8; 4096]).unwrap();
        }
        let source = PathHandle::from_absolute(&src).unwrap();
        let dest = Location::absolute(dir.path().join("out"));

        b.iter(|| {
            source.copy_directory_to(black_box(&dest)).unwrap();
        })
    });
}

fn normalize_benchmark(c: &mut Criterion) {
    c.bench_function("NormalizedPath::new (dotted)", |b| {
        b.iter(|| NormalizedPath::new(black_box("/srv/./depot/a/../b//c/d/../../e.txt")))
    });
}

criterion_group!(benches, copy_directory_benchmark, normalize_benchmark);
criterion_main!(benches);
