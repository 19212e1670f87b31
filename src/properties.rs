//! Extraction of structured data from semi-structured plan properties.
//!
//! Everything here is tuned to the DataFusion `EXPLAIN` text dialect
//! (`a@0`, `Hash([a@0], 4)`, `[(l@0, r@0)]`, ...). Generators consume only
//! the structured results, so supporting another dialect means swapping this
//! module, not the layout code. Malformed input never errors; extractors
//! degrade to empty results so the node still renders.

use once_cell::sync::Lazy;
use regex::Regex;

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\d+").unwrap());
static QUALIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*\.)+").unwrap());
static GROUP_COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+groups?").unwrap());
static HASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Hash\((\[.*\])\s*,\s*(\d+)\)$").unwrap());
static ROUND_ROBIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^RoundRobinBatch\((\d+)\)$").unwrap());
static SORT_DIRECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(ASC|DESC)(\s+NULLS\s+(FIRST|LAST))?\s*$").unwrap());
static BINNING_CALL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(date_bin|date_trunc)\s*\((.*)\)$").unwrap());
static COLUMN_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.]*(@\d+)?$").unwrap());

/// Splits on `separator` at bracket depth zero, honoring `()`, `[]` and `{}`.
/// Every property extractor goes through this instead of a plain split.
pub fn split_top_level(input: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut current = String::new();
    for ch in input.chars() {
        match ch {
            '(' | '[' | '{' => {
                depth += 1;
                current.push(ch);
            }
            ')' | ']' | '}' => {
                depth -= 1;
                current.push(ch);
            }
            _ if ch == separator && depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        parts.push(current.trim().to_string());
    }
    parts.retain(|part| !part.is_empty());
    parts
}

/// Removes every `@N` ordinal suffix, e.g. `date_bin(t@2)` -> `date_bin(t)`.
pub fn strip_ordinals(input: &str) -> String {
    ORDINAL_RE.replace_all(input, "").into_owned()
}

/// Removes a leading `table.` qualifier chain from a column reference.
pub fn strip_qualifier(input: &str) -> String {
    QUALIFIER_RE.replace(input.trim(), "").into_owned()
}

fn strip_outer(input: &str, open: char, close: char) -> &str {
    let trimmed = input.trim();
    if trimmed.starts_with(open) && trimmed.ends_with(close) && trimmed.len() >= 2 {
        &trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()]
    } else {
        trimmed
    }
}

/// `[a@0, b@1]` (or a bare `a, b`) -> `["a", "b"]`.
pub fn parse_column_list(raw: &str) -> Vec<String> {
    split_top_level(strip_outer(raw, '[', ']'), ',')
        .iter()
        .map(|part| strip_ordinals(part))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Number of parallel file groups in a scan's `file_groups` property.
/// Accepts both the summarized `{2 groups: [[..], [..]]}` form and a bare
/// nested list; returns 0 when nothing can be extracted.
pub fn parse_file_group_count(raw: &str) -> usize {
    if let Some(captures) = GROUP_COUNT_RE.captures(raw) {
        if let Ok(count) = captures[1].parse() {
            return count;
        }
    }
    let inner = strip_outer(strip_outer(raw, '{', '}'), '[', ']');
    if inner.contains('[') {
        return split_top_level(inner, ',')
            .iter()
            .filter(|part| part.starts_with('['))
            .count();
    }
    0
}

/// Flat list of the file paths inside a `file_groups` property, in group
/// order. Handles both the summarized `{2 groups: [[a], [b, c]]}` form and a
/// bare nested list; anything unparseable yields an empty list.
pub fn parse_file_group_paths(raw: &str) -> Vec<String> {
    let body = strip_outer(raw, '{', '}');
    // Skip a "N groups:" prefix, but never cut inside a bare path list
    // (paths may carry scheme colons like s3://).
    let body = if body.trim_start().starts_with('[') {
        body
    } else if let Some(idx) = body.find(':') {
        &body[idx + 1..]
    } else {
        body
    };
    let inner = strip_outer(body, '[', ']');
    split_top_level(inner, ',')
        .iter()
        .filter(|group| group.starts_with('['))
        .flat_map(|group| split_top_level(strip_outer(group, '[', ']'), ','))
        .collect()
}

/// Output partitioning of a repartition stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partitioning {
    Hash { columns: Vec<String>, count: usize },
    RoundRobin { count: usize },
    Other { raw: String },
}

impl Partitioning {
    /// Stream count, when the scheme carries one.
    pub fn count(&self) -> Option<usize> {
        match self {
            Partitioning::Hash { count, .. } | Partitioning::RoundRobin { count } => Some(*count),
            Partitioning::Other { .. } => None,
        }
    }

    /// Detail string with ordinals stripped, e.g. `Hash([a, b], 4)`.
    pub fn display(&self) -> String {
        match self {
            Partitioning::Hash { columns, count } => {
                format!("Hash([{}], {count})", columns.join(", "))
            }
            Partitioning::RoundRobin { count } => format!("RoundRobinBatch({count})"),
            Partitioning::Other { raw } => strip_ordinals(raw),
        }
    }
}

/// Parses a `partitioning` property. Unrecognized schemes are preserved as
/// `Other` so the raw text still shows in the node detail.
pub fn parse_partitioning(raw: &str) -> Partitioning {
    let trimmed = raw.trim();
    if let Some(captures) = HASH_RE.captures(trimmed) {
        if let Ok(count) = captures[2].parse() {
            return Partitioning::Hash {
                columns: parse_column_list(&captures[1]),
                count,
            };
        }
    }
    if let Some(captures) = ROUND_ROBIN_RE.captures(trimmed) {
        if let Ok(count) = captures[1].parse() {
            return Partitioning::RoundRobin { count };
        }
    }
    Partitioning::Other {
        raw: trimmed.to_string(),
    }
}

/// Column names of a sort-expression list, in sort order:
/// `[l@0 ASC NULLS LAST, m@1 DESC]` -> `["l", "m"]`.
pub fn parse_sort_expressions(raw: &str) -> Vec<String> {
    split_top_level(strip_outer(raw, '[', ']'), ',')
        .iter()
        .map(|part| {
            let without_direction = SORT_DIRECTION_RE.replace(part, "");
            strip_ordinals(without_direction.trim())
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Sort-expression list kept human readable for detail text:
/// `[l@0 ASC NULLS LAST]` -> `"l ASC NULLS LAST"`.
pub fn display_sort_expressions(raw: &str) -> String {
    split_top_level(strip_outer(raw, '[', ']'), ',')
        .iter()
        .map(|part| strip_ordinals(part))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Equi-join key pairs from an `on` property:
/// `[(t.a@0, s.b@0)]` -> `[("a", "b")]`. Qualifiers and ordinals are
/// stripped from both sides.
pub fn parse_join_keys(raw: &str) -> Vec<(String, String)> {
    split_top_level(strip_outer(raw, '[', ']'), ',')
        .iter()
        .filter_map(|pair| {
            let inner = strip_outer(pair, '(', ')');
            let sides = split_top_level(inner, ',');
            if sides.len() != 2 {
                return None;
            }
            Some((
                strip_qualifier(&strip_ordinals(&sides[0])),
                strip_qualifier(&strip_ordinals(&sides[1])),
            ))
        })
        .collect()
}

/// Output column name of one projection/group-by expression: the alias after
/// the trailing ` as `, otherwise the whole expression with ordinals
/// stripped.
pub fn expression_name(expr: &str) -> String {
    let trimmed = expr.trim();
    if let Some(idx) = trimmed.rfind(" as ") {
        return trimmed[idx + 4..].trim().to_string();
    }
    strip_ordinals(trimmed)
}

/// Raw expressions of a bracketed list, split at depth zero.
pub fn split_expression_list(raw: &str) -> Vec<String> {
    split_top_level(strip_outer(raw, '[', ']'), ',')
}

/// Output column names of an expression list (`expr`, `gby` or `aggr`).
pub fn parse_expression_names(raw: &str) -> Vec<String> {
    split_expression_list(raw)
        .iter()
        .map(|part| expression_name(part))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Detects a binning call in a group-by expression and reports
/// `(output_name, source_column)`. The source is the first argument that
/// reads as a column reference rather than a literal. Aggregate uses this to
/// keep a bucketed column in the sort order next to its source.
pub fn binning_promotion(expr: &str) -> Option<(String, String)> {
    let trimmed = expr.trim();
    let (call, name) = match trimmed.rfind(" as ") {
        Some(idx) => (trimmed[..idx].trim(), trimmed[idx + 4..].trim().to_string()),
        None => (trimmed, strip_ordinals(trimmed)),
    };
    let captures = BINNING_CALL_RE.captures(call)?;
    let args = split_top_level(&captures[2], ',');
    let source = args
        .iter()
        .find(|arg| COLUMN_REF_RE.is_match(arg.trim()))
        .map(|arg| strip_qualifier(&strip_ordinals(arg)))?;
    Some((name, source))
}

/// Lenient counter parse for `skip`/`fetch`-style properties.
pub fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}
