//! Builds a small single-branch plan by hand and prints the diagram JSON.
//!
//! ```sh
//! cargo run --example simple_plan > simple_plan.excalidraw
//! ```

use planshape::{DiagramConfig, PlanNode, generate_document, write_document};

fn main() -> anyhow::Result<()> {
    let plan = PlanNode::new("SortPreservingMergeExec")
        .with_property("expr", "[region@0 ASC]")
        .with_child(
            PlanNode::new("SortExec")
                .with_property("expr", "[region@0 ASC]")
                .with_child(
                    PlanNode::new("AggregateExec")
                        .with_property("mode", "FinalPartitioned")
                        .with_property("gby", "[region@0 as region]")
                        .with_property("aggr", "[sum(amount@1)]")
                        .with_child(
                            PlanNode::new("RepartitionExec")
                                .with_property("partitioning", "Hash([region@0], 4)")
                                .with_child(
                                    PlanNode::new("DataSourceExec")
                                        .with_property(
                                            "file_groups",
                                            "{2 groups: [[sales/1.parquet], [sales/2.parquet]]}",
                                        )
                                        .with_property("projection", "[region@0, amount@1]"),
                                ),
                        ),
                ),
        );

    let document = generate_document(&plan, &DiagramConfig::default())?;
    write_document(&document, None)?;
    Ok(())
}
