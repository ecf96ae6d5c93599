//! End-to-end composition: a full briefing pack assembled from a dataset,
//! a bullet store, and images, then written out and inspected.

use deck_gen::canvas::STANDARD;
use deck_gen::template::{SlideTemplate, SummarySlide, TablePanel, TabularSlide, TitleSlide};
use deck_gen::{
    colours, estimate_bullet_height, row_height, BulletStore, Chrome, Dataset, Document, In, Info,
    Primitive, Rect, COMPACT_FONT_SIZE, INFO_BOX_HEADER_HEIGHT, TITLE_BOX_HEIGHT,
};
use std::io::Write;
use std::path::PathBuf;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bullet_store() -> BulletStore {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "table_notes": ["first note", "second note", "third note"],
            "scenario": ["baseline demand", ["sensitivity", ["worst case"]]],
            "assumptions": ["no supply disruption"]
        }}"#
    )
    .expect("write store");
    BulletStore::from_path(file.path()).expect("parse store")
}

fn dataset(rows: usize) -> Dataset {
    Dataset::new(
        vec!["Category".to_string(), "Capacity".to_string(), "Status".to_string()],
        (0..rows)
            .map(|r| vec![format!("cat{r}"), format!("{}", r * 10), "ok".to_string()])
            .collect(),
    )
}

fn png(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    image::RgbImage::new(47, 59).save(&path).expect("write png");
    path
}

#[test]
fn tabular_slide_chains_every_primitive_off_the_previous_one() {
    init();
    let dir = tempfile::tempdir().expect("temp dir");
    let store = bullet_store();

    let slide = TabularSlide::new(
        "Capacity Forecast",
        "Capacity by Category",
        dataset(2),
        vec![colours::GREEN, colours::AMBER],
        &store,
        "table_notes",
        "scenario",
        "assumptions",
        png(&dir, "chart.png"),
    )
    .compose(STANDARD)
    .expect("compose tabular slide");

    // placement order: title box, table, bullets, divider, scenario
    // (header + body), assumptions (header + body), image
    let rects: Vec<Rect> = slide.primitives.iter().map(Primitive::rect).collect();
    let title = rects[0];
    let table = rects[1];
    let bullets = rects[2];
    let divider = rects[3];
    let scenario_header = rects[4];
    let scenario_body = rects[5];
    let assumptions_header = rects[6];

    // the table title precedes the table by the fixed title-box gap
    assert_eq!(title.top + TITLE_BOX_HEIGHT, table.top);

    // table height derives from 2 data rows plus the header
    assert_eq!(table.height, row_height(COMPACT_FONT_SIZE) * 3.0);

    // each link in the chain hangs off the previous realized rectangle
    assert_eq!(bullets.top, table.bottom() + In(0.05));
    assert_eq!(
        bullets.height,
        estimate_bullet_height(&store.load("table_notes"), deck_gen::Pt(8.0), In(4.78))
    );
    assert_eq!(divider.top, bullets.bottom() + In(0.07));
    assert_eq!(divider.height, In(0.0));
    assert_eq!(scenario_header.top, divider.top + In(0.07));
    assert_eq!(scenario_body.top, scenario_header.top + INFO_BOX_HEADER_HEIGHT);
    assert_eq!(assumptions_header.top, scenario_body.bottom() + In(0.1));
}

#[test]
fn written_pack_reproduces_layout_and_numbering() {
    init();
    let dir = tempfile::tempdir().expect("temp dir");
    let store = bullet_store();

    let mut doc = Document::with_canvas(
        Chrome {
            reference_number: "REF-2026-014".into(),
            classification: "OFFICIAL".into(),
            code_version: "0.1.0".into(),
            job_id: "JOB-88".into(),
        },
        STANDARD,
    );
    doc.set_info(
        Info::new()
            .title("Capacity Briefing")
            .author("Planning Cell")
            .clone(),
    );

    doc.add_slide(&TitleSlide::new("Capacity Briefing", png(&dir, "cover.png")).issued_on("3 March 2026"))
        .expect("title slide");
    doc.add_slide(&TabularSlide::new(
        "Capacity Forecast",
        "Capacity by Category",
        dataset(3),
        vec![colours::GREEN],
        &store,
        "table_notes",
        "scenario",
        "assumptions",
        png(&dir, "chart.png"),
    ))
    .expect("tabular slide");
    doc.add_slide(
        &SummarySlide::new(
            "Summary",
            &store,
            "scenario",
            "capacity holds through Q3",
            TablePanel::new("Totals", dataset(2), vec![colours::GREEN, colours::RED]),
            png(&dir, "summary.png"),
        )
        .with_second_table(TablePanel::new("Deltas", dataset(2), Vec::new())),
    )
    .expect("summary slide");

    let mut out = Vec::new();
    doc.write(&mut out).expect("write document");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON output");
    assert_eq!(value["chrome"]["reference_number"], "REF-2026-014");
    assert_eq!(value["info"]["title"], "Capacity Briefing");

    let slides = value["slides"].as_array().expect("slides array");
    assert_eq!(slides.len(), 3);

    for (index, slide) in slides.iter().enumerate() {
        let primitives = slide["primitives"].as_array().expect("primitives array");
        let texts: Vec<&str> = primitives
            .iter()
            .filter_map(|p| p["TextBox"]["text"].as_str())
            .collect();

        // chrome stamped on every slide, numbering against the final count
        assert!(texts.contains(&"Reference Number: REF-2026-014"));
        assert!(texts.contains(&"Job ID: JOB-88"));
        assert_eq!(texts.iter().filter(|t| **t == "OFFICIAL").count(), 2);
        let number = format!("{}/3", index + 1);
        assert!(
            texts.contains(&number.as_str()),
            "slide {index} missing page indicator {number}"
        );
    }

    // bullet content flowed through formatting into the second slide
    let tabular = &slides[1];
    let bullet_points: Vec<&str> = tabular["primitives"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["BulletList"]["points"].as_array())
        .flatten()
        .filter_map(|point| point.as_str())
        .collect();
    assert!(bullet_points.contains(&"• first note"));
    assert!(bullet_points.contains(&"   • sensitivity"));
    assert!(bullet_points.contains(&"      • worst case"));
}
