use serde_json::{json, Value};
use tempfile::TempDir;

use facetdex::models::{Facet, SearchQuery};
use facetdex::{SearchCatalog, SearchConfig};

fn write_snapshot(dir: &TempDir, results: Value) {
    let body = json!({
        "help": "package_search",
        "success": true,
        "result": {"count": 0, "results": results}
    });
    std::fs::write(dir.path().join("packages.json"), body.to_string()).unwrap();
}

fn record(id: &str, title: &str, group: &str, format: &str, org: Option<(&str, &str)>) -> Value {
    json!({
        "id": id,
        "title": title,
        "notes": null,
        "groups": [{"name": group, "title": group}],
        "resources": [{"format": format, "url": format!("https://example.org/{id}.{format}")}],
        "organization": org.map(|(name, title)| json!({"name": name, "title": title})),
        "license_id": "cc-by"
    })
}

fn setup_catalog() -> (TempDir, SearchCatalog) {
    let tmp = TempDir::new().unwrap();
    write_snapshot(
        &tmp,
        json!([
            record("R1", "Hospital beds", "health", "csv", Some(("City", "City Council"))),
            record("R2", "Vaccination rates", "health", "json", Some(("City", "City Council"))),
            record("R3", "Tram timetable", "transport", "csv", None),
        ]),
    );
    let catalog = SearchCatalog::open(SearchConfig::new(tmp.path(), "packages.json")).unwrap();
    (tmp, catalog)
}

fn to_json(catalog: &SearchCatalog, query: &SearchQuery) -> Value {
    serde_json::to_value(catalog.search(query).unwrap()).unwrap()
}

#[test]
fn golden_group_drill_down() {
    let (_tmp, catalog) = setup_catalog();
    let query = SearchQuery::new().with_filter("groups", "health").unwrap();
    let json = to_json(&catalog, &query);

    assert_eq!(json["result"]["count"], json!(2));
    assert_eq!(json["result"]["facets"]["groups"], json!({"health": 2}));
    assert_eq!(
        json["result"]["facets"]["res_format"],
        json!({"csv": 1, "json": 1})
    );
    assert_eq!(json["result"]["facets"]["organization"], json!({"City": 2}));

    let ids: Vec<&str> = json["result"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["R1", "R2"]);
}

#[test]
fn golden_search_facets_shape() {
    let (_tmp, catalog) = setup_catalog();
    let json = to_json(&catalog, &SearchQuery::new());

    assert_eq!(
        json["result"]["search_facets"]["organization"],
        json!({
            "title": "organization",
            "items": [{"name": "City", "display_name": "City Council", "count": 2}]
        })
    );
    assert_eq!(
        json["result"]["search_facets"]["res_format"]["items"],
        json!([
            {"name": "csv", "display_name": "csv", "count": 2},
            {"name": "json", "display_name": "json", "count": 1}
        ])
    );
}

#[test]
fn golden_records_pass_through_unchanged() {
    let (_tmp, catalog) = setup_catalog();
    let query = SearchQuery::new().with_text("tram");
    let json = to_json(&catalog, &query);

    assert_eq!(json["success"], json!(true));
    assert_eq!(json["help"], json!("package_search"));
    let r3 = &json["result"]["results"][0];
    assert_eq!(r3["id"], json!("R3"));
    assert_eq!(r3["license_id"], json!("cc-by"));
    assert_eq!(r3["resources"][0]["url"], json!("https://example.org/R3.csv"));
    assert!(r3["organization"].is_null());
}

#[test]
fn golden_text_and_facet_combined() {
    let (_tmp, catalog) = setup_catalog();
    let query = SearchQuery::new()
        .with_text("vaccination")
        .with_facet(Facet::ResFormat, "csv");
    let response = catalog.search(&query).unwrap();

    assert_eq!(response.count(), 0);
    assert!(response.records().is_empty());
}

#[test]
fn golden_publisher_alias() {
    let (_tmp, catalog) = setup_catalog();
    let query = SearchQuery::new().with_filter("publisher", "City").unwrap();
    let response = catalog.search(&query).unwrap();
    assert_eq!(response.ids(), vec!["R1", "R2"]);
}

#[test]
fn golden_pagination_boundaries() {
    let tmp = TempDir::new().unwrap();
    let results: Vec<Value> = (1..=5)
        .map(|i| record(&format!("P{i}"), "Parking zones", "mobility", "csv", None))
        .collect();
    write_snapshot(&tmp, Value::Array(results));
    let catalog = SearchCatalog::open(SearchConfig::new(tmp.path(), "packages.json")).unwrap();

    let page = catalog
        .search(&SearchQuery::new().with_start(3).with_rows(10))
        .unwrap();
    assert_eq!(page.ids(), vec!["P4", "P5"]);
    assert_eq!(page.count(), 5);

    let page = catalog
        .search(&SearchQuery::new().with_start(10).with_rows(5))
        .unwrap();
    assert!(page.records().is_empty());
    assert_eq!(page.count(), 5);
}

#[test]
fn golden_facet_field_restriction() {
    let (_tmp, catalog) = setup_catalog();
    let query = SearchQuery::new().with_facet_fields(["groups"]);
    let json = to_json(&catalog, &query);

    let facet_keys: Vec<&String> = json["result"]["facets"].as_object().unwrap().keys().collect();
    assert_eq!(facet_keys, vec!["groups"]);
    let search_facet_keys: Vec<&String> = json["result"]["search_facets"]
        .as_object()
        .unwrap()
        .keys()
        .collect();
    assert_eq!(search_facet_keys, vec!["groups"]);

    let query = SearchQuery::new().with_facet_fields(["group", "publisher"]);
    let json = to_json(&catalog, &query);
    let facet_keys: Vec<&String> = json["result"]["facets"].as_object().unwrap().keys().collect();
    assert_eq!(facet_keys, vec!["groups", "organization"]);
}

#[test]
fn golden_common_words_find_records() {
    let tmp = TempDir::new().unwrap();
    write_snapshot(
        &tmp,
        json!([
            record("I1", "Research information", "science", "pdf", None),
            record("I2", "New world map", "geo", "geojson", None),
            record("I3", "Open budget", "economy", "csv", None),
        ]),
    );
    let catalog = SearchCatalog::open(SearchConfig::new(tmp.path(), "packages.json")).unwrap();

    for (text, expected) in [("information", "I1"), ("new", "I2"), ("open", "I3")] {
        let response = catalog.search(&SearchQuery::new().with_text(text)).unwrap();
        assert_eq!(response.ids(), vec![expected], "query {text:?}");
    }
}
