use std::collections::BTreeMap;

/// One stage of a physical execution plan, as produced by an external
/// `EXPLAIN` parser. The tree is read-only input to generation.
#[derive(Debug, Clone)]
pub struct PlanNode {
    /// Operator tag, e.g. `FilterExec` or `RepartitionExec`.
    pub operator: String,
    /// Raw key/value properties; semantics vary per operator.
    pub properties: BTreeMap<String, String>,
    /// Ordered inputs. Exclusive ownership, no sharing or cycles.
    pub children: Vec<PlanNode>,
    /// Depth in the original plan text. Informational only.
    pub level: usize,
}

impl PlanNode {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            properties: BTreeMap::new(),
            children: Vec::new(),
            level: 0,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, mut child: PlanNode) -> Self {
        child.relevel(self.level + 1);
        self.children.push(child);
        self
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(PlanNode::node_count).sum::<usize>()
    }

    fn relevel(&mut self, level: usize) {
        self.level = level;
        for child in &mut self.children {
            child.relevel(level + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assigns_levels() {
        let tree = PlanNode::new("SortExec")
            .with_child(PlanNode::new("FilterExec").with_child(PlanNode::new("DataSourceExec")));
        assert_eq!(tree.level, 0);
        assert_eq!(tree.children[0].level, 1);
        assert_eq!(tree.children[0].children[0].level, 2);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn property_lookup() {
        let node = PlanNode::new("LocalLimitExec").with_property("fetch", "10");
        assert_eq!(node.property("fetch"), Some("10"));
        assert_eq!(node.property("skip"), None);
    }
}
