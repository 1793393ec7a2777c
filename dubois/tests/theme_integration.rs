//! Integration tests for the Du Bois theme

use dubois::{
    dubois_table, Dataset, Error, Frame, Length, RenderOptions, StyledTable, ThemeOptions,
};
use serde_json::json;

fn life_expectancy() -> Frame {
    Frame::new(["year", "life_expectancy", "country_name"])
        .with_row([json!(1900), json!(47.3), json!("United States")])
        .with_row([json!(1950), json!(68.2), json!("United States")])
}

fn styled(options: ThemeOptions) -> StyledTable<Frame> {
    dubois_table(life_expectancy(), options).unwrap()
}

#[test]
fn test_layout_from_column_count() {
    let table = styled(ThemeOptions::new());

    assert_eq!(table.options().table_width, Some(Length::px(405.0)));
    assert_eq!(
        table.column_width("life_expectancy"),
        Some(Length::pct(100.0 / 3.0))
    );

    let total: f64 = table.column_widths().iter().map(|(_, w)| w.value()).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_labels_follow_column_order() {
    let table = styled(ThemeOptions::new());
    let labels: Vec<&str> = table
        .column_labels()
        .iter()
        .map(|(_, label)| label.as_str())
        .collect();

    assert_eq!(labels, ["Year", "Life Expectancy", "Country Name"]);
}

#[test]
fn test_no_title_means_no_header() {
    let table = styled(ThemeOptions::new());
    assert!(table.header().is_none());
}

#[test]
fn test_title_without_subtitle() {
    let table = styled(ThemeOptions::new().title("X"));
    let header = table.header().unwrap();

    assert_eq!(header.title, "X");
    assert_eq!(header.subtitle, None);
}

#[test]
fn test_title_with_subtitle() {
    let table = styled(ThemeOptions::new().title("X").subtitle("Y"));
    let header = table.header().unwrap();

    assert_eq!(header.title, "X");
    assert_eq!(header.subtitle.as_deref(), Some("Y"));
}

#[test]
fn test_source_note() {
    assert!(styled(ThemeOptions::new()).source_notes().is_empty());

    let table = styled(ThemeOptions::new().source_note("Z"));
    assert_eq!(table.source_notes(), &["Z"]);
}

#[test]
fn test_zero_columns() {
    let result = dubois_table(Frame::new(Vec::<String>::new()), ThemeOptions::new());
    assert_eq!(result.unwrap_err(), Error::ZeroColumns);
}

#[test]
fn test_passthrough_options_unchanged() {
    let render = RenderOptions::new()
        .id("life-table")
        .locale("fr")
        .rowname_col("year")
        .option("row_striping", false)
        .unwrap();
    let table = styled(ThemeOptions::new().render(render.clone()));

    assert_eq!(table.render_options(), &render);
}

#[test]
fn test_passthrough_error_propagates() {
    let result = dubois_table(
        life_expectancy(),
        ThemeOptions::new().render(RenderOptions::new().groupname_col("continent")),
    );

    assert_eq!(
        result.unwrap_err(),
        Error::UnknownColumn {
            column: "continent".to_string(),
            context: "groupname_col",
        }
    );
}

#[test]
fn test_rowname_col_by_name_is_still_checked() {
    let render = RenderOptions::new().option("rowname_col", "county").unwrap();
    let result = dubois_table(life_expectancy(), ThemeOptions::new().render(render));

    assert_eq!(
        result.unwrap_err(),
        Error::UnknownColumn {
            column: "county".to_string(),
            context: "rowname_col",
        }
    );
}

#[test]
fn test_borrowed_dataset_is_untouched() {
    let frame = life_expectancy();
    let table = dubois_table(&frame, ThemeOptions::new().title("Borrowed")).unwrap();

    assert_eq!(table.data().num_rows(), 2);
    assert_eq!(frame, life_expectancy());
}

#[test]
fn test_json_shape() {
    let table = styled(
        ThemeOptions::new()
            .title("Life Expectancy")
            .source_note("CDC")
            .render(RenderOptions::new().id("le")),
    );
    let value = serde_json::to_value(&table).unwrap();

    assert_eq!(value["render_options"], json!({"id": "le"}));
    assert_eq!(value["options"]["table_width"], json!("405px"));
    assert_eq!(value["options"]["table_layout"], json!("auto"));
    assert_eq!(value["fonts"][0], json!({"google": {"name": "Baskervville SC"}}));
    assert_eq!(value["fonts"][4], json!({"system": "Serif"}));
    assert_eq!(value["column_labels"][1], json!(["life_expectancy", "Life Expectancy"]));
    assert_eq!(value["header"], json!({"title": "Life Expectancy"}));
    assert_eq!(value["source_notes"], json!(["CDC"]));
    assert_eq!(value["data"]["columns"][0], json!("year"));
}
