use criterion::{criterion_group, criterion_main, Criterion};
use feederpatrol_lib::{
    build_coverage_route, enumerate_leaf_paths, load_graph, partition_route, plan_coverage,
    select_worst_path, Graph, PlannerConfig, Position,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/feeder_nodes.csv")
}

static FIXTURE: Lazy<Graph> =
    Lazy::new(|| load_graph(&fixture_path()).expect("fixture loads").graph);

/// Radial feeder: `branches` spurs of `depth` nodes hanging off a substation.
static RADIAL: Lazy<Graph> = Lazy::new(|| radial_feeder(12, 15));

fn radial_feeder(branches: usize, depth: usize) -> Graph {
    let mut builder = Graph::builder();
    builder.add_node("root", Some(Position::new(0.0, 0.0)));
    for branch in 0..branches {
        let mut previous = "root".to_string();
        for step in 0..depth {
            let id = format!("b{branch}-{step}");
            let offset = (step + 1) as f64 * 50.0;
            builder.add_node(&id, Some(Position::new(offset, branch as f64 * 50.0)));
            builder.add_edge(&previous, &id, 40.0 + (branch * 7 + step * 3) as f64);
            previous = id;
        }
    }
    builder.build()
}

fn benchmark_coverage(c: &mut Criterion) {
    let fixture = &*FIXTURE;
    let radial = &*RADIAL;

    c.bench_function("plan_fixture_five_drones", |b| {
        let config = PlannerConfig::default();
        b.iter(|| {
            let plan = plan_coverage(fixture, &config).expect("plan");
            black_box(plan.fleet.handoff_count())
        });
    });

    c.bench_function("leaf_paths_radial", |b| {
        let root = radial.index_of("root").expect("root node");
        b.iter(|| black_box(enumerate_leaf_paths(radial, root).len()));
    });

    c.bench_function("coverage_route_radial", |b| {
        let root = radial.index_of("root").expect("root node");
        let paths = enumerate_leaf_paths(radial, root);
        let worst = select_worst_path(&paths).cloned();
        b.iter(|| {
            let route = build_coverage_route(radial, root, worst.as_ref());
            black_box(route.steps.len())
        });
    });

    c.bench_function("partition_radial_eight_drones", |b| {
        let root = radial.index_of("root").expect("root node");
        let route = build_coverage_route(radial, root, None);
        b.iter(|| black_box(partition_route(radial, &route, 8).boundaries.len()));
    });
}

criterion_group!(benches, benchmark_coverage);
criterion_main!(benches);
