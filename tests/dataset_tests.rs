use linechart_rs::data::ChartData;
use linechart_rs::error::ChartError;
use linechart_rs::render::Color;

const VALID: &str = r##"{
    "columns": [
        ["x", 1542412800, 1542499200, 1542585600, 1542672000],
        ["y0", 37, 20, 32, 39],
        ["y1", 22, 12, 30, 40]
    ],
    "types": {"y0": "line", "y1": "line", "x": "x"},
    "names": {"y0": "#0", "y1": "#1"},
    "colors": {"y0": "#3DC23F", "y1": "#F34C44"}
}"##;

fn expect_invalid(json: &str, needle: &str) {
    let err = ChartData::from_json_str(json)
        .and_then(ChartData::into_chart)
        .expect_err("dataset should be rejected");
    match err {
        ChartError::InvalidDataset(message) => {
            assert!(
                message.contains(needle),
                "`{message}` does not mention `{needle}`"
            );
        }
        other => panic!("expected InvalidDataset, got {other:?}"),
    }
}

#[test]
fn valid_document_decodes_into_a_chart() {
    let chart = ChartData::from_json_str(VALID)
        .expect("decode")
        .into_chart()
        .expect("validate");

    assert_eq!(chart.x(), &[1_542_412_800, 1_542_499_200, 1_542_585_600, 1_542_672_000]);
    assert_eq!(chart.series().len(), 2);

    // Document order defines legend order.
    let first = &chart.series()[0];
    assert_eq!(first.id(), "y0");
    assert_eq!(first.name(), "#0");
    assert_eq!(first.color(), Color::from_hex("#3DC23F").expect("hex"));
    assert_eq!(first.values(), &[37.0, 20.0, 32.0, 39.0]);
    assert!(first.is_visible());
    assert_eq!(chart.series()[1].id(), "y1");
}

#[test]
fn list_document_decodes_every_record() {
    let doc = format!("[{VALID}, {VALID}]");
    let records = ChartData::list_from_json_str(&doc).expect("decode list");
    assert_eq!(records.len(), 2);
    for record in records {
        record.into_chart().expect("each record validates");
    }
}

#[test]
fn missing_x_column_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["y0", 1, 2, 3]],
            "types": {"y0": "line"},
            "names": {"y0": "#0"},
            "colors": {"y0": "#3DC23F"}
        }"##,
        "no x column",
    );
}

#[test]
fn duplicate_x_columns_are_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["x2", 1, 2]],
            "types": {"x": "x", "x2": "x"},
            "names": {},
            "colors": {}
        }"##,
        "more than one x column",
    );
}

#[test]
fn unknown_column_type_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["y0", 3, 4]],
            "types": {"x": "x", "y0": "area"},
            "names": {"y0": "#0"},
            "colors": {"y0": "#3DC23F"}
        }"##,
        "unknown column type",
    );
}

#[test]
fn column_absent_from_types_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["y0", 3, 4]],
            "types": {"x": "x"},
            "names": {"y0": "#0"},
            "colors": {"y0": "#3DC23F"}
        }"##,
        "missing from `types`",
    );
}

#[test]
fn line_without_name_or_color_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["y0", 3, 4]],
            "types": {"x": "x", "y0": "line"},
            "names": {},
            "colors": {"y0": "#3DC23F"}
        }"##,
        "missing from `names`",
    );
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["y0", 3, 4]],
            "types": {"x": "x", "y0": "line"},
            "names": {"y0": "#0"},
            "colors": {}
        }"##,
        "missing from `colors`",
    );
}

#[test]
fn malformed_hex_color_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2], ["y0", 3, 4]],
            "types": {"x": "x", "y0": "line"},
            "names": {"y0": "#0"},
            "colors": {"y0": "green"}
        }"##,
        "y0",
    );
}

#[test]
fn stray_string_inside_a_column_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, "oops", 3]],
            "types": {"x": "x"},
            "names": {},
            "colors": {}
        }"##,
        "stray string",
    );
}

#[test]
fn column_without_leading_identifier_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [[1, 2, 3]],
            "types": {"x": "x"},
            "names": {},
            "colors": {}
        }"##,
        "leading identifier",
    );
}

#[test]
fn non_increasing_x_axis_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 3, 2, 1]],
            "types": {"x": "x"},
            "names": {},
            "colors": {}
        }"##,
        "strictly increasing",
    );
}

#[test]
fn mismatched_series_length_is_rejected() {
    expect_invalid(
        r##"{
            "columns": [["x", 1, 2, 3], ["y0", 5, 6]],
            "types": {"x": "x", "y0": "line"},
            "names": {"y0": "#0"},
            "colors": {"y0": "#3DC23F"}
        }"##,
        "2 values for 3 x entries",
    );
}

#[test]
fn syntactically_broken_json_is_a_parse_error() {
    let err = ChartData::from_json_str("{not json").expect_err("parse failure");
    assert!(matches!(err, ChartError::InvalidDataset(_)));
}
