use criterion::{criterion_group, criterion_main, Criterion};
use unicode_blocks_prepare::{compile, write_artifact, CompilerOptions, JsonEmitter, TypstEmitter};

mod group;

fn compile_ucd(c: &mut Criterion)
{
    let mut group = c.benchmark_group("compile");
    let provider = group::provider();

    group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

    for (name, options) in [
        ("default", CompilerOptions::default()),
        (
            "expand_ranges",
            CompilerOptions {
                expand_ranges: true,
                ..Default::default()
            },
        ),
        (
            "parallel",
            CompilerOptions {
                expand_ranges: true,
                parallel: true,
                ..Default::default()
            },
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| compile(criterion::black_box(&provider), &options).unwrap())
        });
    }

    group.finish();
}

fn emit(c: &mut Criterion)
{
    let mut group = c.benchmark_group("emit");
    let artifact = compile(&group::provider(), &CompilerOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ucd");

    group.bench_function("json", |b| {
        b.iter(|| write_artifact(&artifact, &JsonEmitter, &target).unwrap())
    });
    group.bench_function("typst", |b| {
        b.iter(|| write_artifact(&artifact, &TypstEmitter, &target).unwrap())
    });

    group.finish();
}

criterion_group!(benches, compile_ucd, emit);
criterion_main!(benches);
