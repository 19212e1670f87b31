//! A two-table hash join, written to `join_plan.excalidraw`.

use planshape::{DiagramConfig, PlanNode, generate_document, write_document};
use std::path::Path;

fn scan(table: &str, groups: &str, projection: &str) -> PlanNode {
    PlanNode::new("DataSourceExec")
        .with_property("file_groups", format!("{{{groups} groups: [[{table}.parquet]]}}"))
        .with_property("projection", projection)
}

fn main() -> anyhow::Result<()> {
    let plan = PlanNode::new("CoalesceBatchesExec")
        .with_property("target_batch_size", "8192")
        .with_child(
            PlanNode::new("HashJoinExec")
                .with_property("join_type", "Inner")
                .with_property("on", "[(c_custkey@0, o_custkey@1)]")
                .with_child(scan("customer", "1", "[c_custkey@0, c_name@1]"))
                .with_child(
                    PlanNode::new("FilterExec")
                        .with_property("predicate", "o_totalprice@2 > 1000")
                        .with_child(scan(
                            "orders",
                            "4",
                            "[o_orderkey@0, o_custkey@1, o_totalprice@2]",
                        )),
                ),
        );

    let document = generate_document(&plan, &DiagramConfig::default())?;
    write_document(&document, Some(Path::new("join_plan.excalidraw")))?;
    println!("wrote join_plan.excalidraw");
    Ok(())
}
