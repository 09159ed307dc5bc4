//! Options handed to the DataTables widget on activation.
//!
//! Field names serialize to the camelCase keys the widget reads.

use serde::Serialize;

/// `-1` is the widget's "show every row" page length.
pub const ALL_ROWS: i32 = -1;

/// Entry of the page-size selector label row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LengthLabel {
    Count(i32),
    Text(String),
}

/// Sort direction of the default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginate {
    pub first: String,
    pub last: String,
    pub next: String,
    pub previous: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStrings {
    pub search: String,
    pub length_menu: String,
    pub info: String,
    pub info_empty: String,
    pub info_filtered: String,
    pub empty_table: String,
    pub zero_records: String,
    pub paginate: Paginate,
}

impl Default for LanguageStrings {
    fn default() -> Self {
        Self {
            search: "Search:".into(),
            length_menu: "Show _MENU_ entries".into(),
            info: "Showing _START_ to _END_ of _TOTAL_ entries".into(),
            info_empty: "Showing 0 to 0 of 0 entries".into(),
            info_filtered: "(filtered from _MAX_ total entries)".into(),
            empty_table: "No data available in table".into(),
            zero_records: "No matching records found".into(),
            paginate: Paginate {
                first: "First".into(),
                last: "Last".into(),
                next: "Next".into(),
                previous: "Previous".into(),
            },
        }
    }
}

/// Length control and search on one row, the table on the next, info and
/// pagination on the last.
pub const DEFAULT_DOM_LAYOUT: &str = concat!(
    r#"<"row"<"col-sm-12 col-md-6"l><"col-sm-12 col-md-6"f>>"#,
    r#"<"row"<"col-sm-12"tr>>"#,
    r#"<"row"<"col-sm-12 col-md-5"i><"col-sm-12 col-md-7"p>>"#,
);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableOptions {
    pub page_length: i32,
    /// Page-size values and their labels, as two parallel rows.
    pub length_menu: (Vec<i32>, Vec<LengthLabel>),
    /// `[column, direction]` pairs.
    pub order: Vec<(usize, SortDirection)>,
    pub language: LanguageStrings,
    pub responsive: bool,
    pub auto_width: bool,
    pub dom: String,
}

impl DataTableOptions {
    pub fn with_page_length(page_length: i32) -> Self {
        Self {
            page_length,
            ..Self::default()
        }
    }
}

impl Default for DataTableOptions {
    fn default() -> Self {
        let sizes = [10, 25, 50, 100];
        let mut values: Vec<i32> = sizes.to_vec();
        values.push(ALL_ROWS);
        let mut labels: Vec<LengthLabel> = sizes.iter().map(|n| LengthLabel::Count(*n)).collect();
        labels.push(LengthLabel::Text("All".into()));

        Self {
            page_length: 25,
            length_menu: (values, labels),
            order: vec![(0, SortDirection::Desc)],
            language: LanguageStrings::default(),
            responsive: true,
            auto_width: false,
            dom: DEFAULT_DOM_LAYOUT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_json() {
        let value = serde_json::to_value(DataTableOptions::default()).unwrap();
        assert_eq!(value["pageLength"], json!(25));
        assert_eq!(
            value["lengthMenu"],
            json!([[10, 25, 50, 100, -1], [10, 25, 50, 100, "All"]])
        );
        assert_eq!(value["order"], json!([[0, "desc"]]));
        assert_eq!(value["responsive"], json!(true));
        assert_eq!(value["autoWidth"], json!(false));
        assert_eq!(value["language"]["infoEmpty"], json!("Showing 0 to 0 of 0 entries"));
        assert_eq!(value["language"]["paginate"]["previous"], json!("Previous"));
    }

    #[test]
    fn test_dom_layout_rows() {
        let dom = DataTableOptions::default().dom;
        assert_eq!(dom.matches(r#"<"row""#).count(), 3);
        assert!(dom.starts_with(r#"<"row"<"col-sm-12 col-md-6"l>"#));
    }

    #[test]
    fn test_with_page_length() {
        let options = DataTableOptions::with_page_length(50);
        assert_eq!(options.page_length, 50);
        assert_eq!(options.order, vec![(0, SortDirection::Desc)]);
    }
}
