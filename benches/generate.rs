use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use planshape::config::DiagramConfig;
use planshape::generate::generate_document;
use planshape::plan::PlanNode;
use std::hint::black_box;

fn scan_chain(depth: usize, partitions: usize) -> PlanNode {
    let mut node = PlanNode::new("DataSourceExec").with_property(
        "file_groups",
        format!("{{{partitions} groups: [[data.parquet]]}}"),
    );
    for level in 0..depth {
        let parent = if level % 2 == 0 {
            PlanNode::new("FilterExec").with_property("predicate", "value@1 > 100")
        } else {
            PlanNode::new("CoalesceBatchesExec").with_property("target_batch_size", "8192")
        };
        node = parent.with_child(node);
    }
    PlanNode::new("SortPreservingMergeExec")
        .with_property("expr", "[key@0 ASC]")
        .with_child(node)
}

fn bushy_join(leaves: usize) -> PlanNode {
    let scan = |name: &str| {
        PlanNode::new("DataSourceExec")
            .with_property("file_groups", "{4 groups: [[a], [b], [c], [d]]}")
            .with_property("projection", format!("[{name}_key@0, {name}_value@1]"))
    };
    let mut node = scan("t0");
    for index in 1..leaves {
        let left_key = format!("t{}_key", index - 1);
        let right = scan(&format!("t{index}"));
        node = PlanNode::new("HashJoinExec")
            .with_property("join_type", "Inner")
            .with_property("on", format!("[({left_key}@0, t{index}_key@0)]"))
            .with_child(node)
            .with_child(right);
    }
    node
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let config = DiagramConfig::default();
    for (name, plan) in [
        ("chain_8", scan_chain(8, 4)),
        ("chain_32", scan_chain(32, 16)),
        ("joins_4", bushy_join(4)),
        ("joins_8", bushy_join(8)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &plan, |b, plan| {
            b.iter(|| {
                let document = generate_document(black_box(plan), &config).expect("generate failed");
                black_box(document.elements.len());
            });
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let config = DiagramConfig::default();
    let plan = scan_chain(32, 16);
    let document = generate_document(&plan, &config).expect("generate failed");
    group.bench_with_input(
        BenchmarkId::from_parameter("chain_32"),
        &document,
        |b, document| {
            b.iter(|| {
                let json = serde_json::to_string(black_box(document)).expect("serialize failed");
                black_box(json.len());
            });
        },
    );
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_generate, bench_serialize
);
criterion_main!(benches);
