use serde::Serialize;

/// One row of the spreadsheet-function reference table.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaEntry {
    pub name: &'static str,
    pub formula: String,
    pub description: &'static str,
}

/// Function templates with a `{range}` placeholder for the data cell range.
const REFERENCE: [(&str, &str, &str); 13] = [
    ("Count", "=COUNT({range})", "Number of numeric cells in the range"),
    ("Sum", "=SUM({range})", "Total of all values"),
    ("Mean", "=AVERAGE({range})", "Arithmetic mean"),
    ("Median", "=MEDIAN({range})", "Middle value of the sorted range"),
    (
        "Mode",
        "=MODE.SNGL({range})",
        "Most frequent value (first one on ties)",
    ),
    ("Min", "=MIN({range})", "Smallest value"),
    ("Max", "=MAX({range})", "Largest value"),
    (
        "Sample variance",
        "=VAR.S({range})",
        "Variance with an n-1 denominator",
    ),
    (
        "Population variance",
        "=VAR.P({range})",
        "Variance with an n denominator",
    ),
    (
        "Sample std dev",
        "=STDEV.S({range})",
        "Standard deviation with an n-1 denominator",
    ),
    (
        "Population std dev",
        "=STDEV.P({range})",
        "Standard deviation with an n denominator",
    ),
    (
        "First quartile",
        "=QUARTILE.INC({range}, 1)",
        "25th percentile, linear interpolation",
    ),
    (
        "Third quartile",
        "=QUARTILE.INC({range}, 3)",
        "75th percentile, linear interpolation",
    ),
];

/// The spreadsheet functions matching each computed statistic, with `range`
/// (e.g. `"B2:B21"`) substituted into each formula. Static reference text
/// otherwise.
pub fn formula_reference(range: &str) -> Vec<FormulaEntry> {
    REFERENCE
        .iter()
        .map(|&(name, template, description)| FormulaEntry {
            name,
            formula: template.replace("{range}", range),
            description,
        })
        .collect()
}
