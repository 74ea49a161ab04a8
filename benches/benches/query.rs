use criterion::{criterion_group, criterion_main, Criterion};
use unicode_blocks::UnicodeBlocks;
use unicode_blocks_prepare::{compile, write_artifact, CompilerOptions, JsonEmitter};

mod group;

#[inline(never)]
fn query_all(tables: &UnicodeBlocks, probes: &[u32]) -> usize
{
    probes
        .iter()
        .filter(|code| tables.query(**code).attributes.is_some())
        .count()
}

fn query(c: &mut Criterion)
{
    let mut group = c.benchmark_group("query");
    let probes = group::probes();

    group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

    // одни и те же кодпоинты при разных вариантах хранения Hangul Syllables
    for (name, expand_ranges) in [("sparse", false), ("dense", true)] {
        let options = CompilerOptions {
            expand_ranges,
            ..Default::default()
        };
        let artifact = compile(&group::provider(), &options).unwrap();

        group.bench_with_input(
            criterion::BenchmarkId::new("hangul", name),
            &(&artifact.tables, probes.as_slice()),
            |b, data| b.iter(|| query_all(data.0, criterion::black_box(data.1))),
        );
    }

    group.finish();
}

fn load(c: &mut Criterion)
{
    let artifact = compile(&group::provider(), &CompilerOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ucd");

    write_artifact(&artifact, &JsonEmitter, &target).unwrap();

    c.bench_function("load_json", |b| b.iter(|| UnicodeBlocks::load(&target).unwrap()));
}

criterion_group!(benches, query, load);
criterion_main!(benches);
