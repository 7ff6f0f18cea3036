// tests/pipeline.rs
//
// Default processor and builder, driven through the accessor with an
// offline scraper that drops a captured page into the raw store.
//
use std::fs;
use std::path::PathBuf;

use doms_access::processor::process_page;
use doms_access::{
    record, store, AppConfig, BoxError, CaseAccessor, CaseId, Collaborators, Dataset,
    DatasetBuilder, PageProcessor, Processor, SchemaBuilder, Scraper,
};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>U.2021.1234 &Oslash;L</title><style>p { color: red }</style></head>
<body>
  <h1>Dom</h1>
  <script>trackPage();</script>
  <p>Landsrettens dom af 3. maj 2021 &sect; 12.</p>
</body>
</html>"#;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("doms_pipeline_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Writes the fixture page instead of going to the network.
struct FixtureScraper { raw_dir: PathBuf }

impl Scraper for FixtureScraper {
    fn scrape(&mut self, case_id: &CaseId) -> Result<(), BoxError> {
        store::save_raw_page(&self.raw_dir, case_id, PAGE)?;
        Ok(())
    }
}

#[test]
fn html_page_becomes_title_and_text() {
    let rec = process_page(&CaseId::from(1234), PAGE);
    assert_eq!(rec.case_id(), Some("1234"));
    assert_eq!(rec.get_str("title"), Some("U.2021.1234 ØL"));
    assert_eq!(rec.get_str("text"), Some("Dom Landsrettens dom af 3. maj 2021 § 12."));
}

#[test]
fn json_page_is_taken_field_by_field() {
    let page = r#"{"headline": "Kendelse", "case_id": "wrong", "instance": "Højesteret"}"#;
    let rec = process_page(&CaseId::from("K9"), page);
    assert_eq!(rec.case_id(), Some("K9"));
    assert_eq!(rec.get_str("headline"), Some("Kendelse"));
    assert_eq!(rec.get_str("instance"), Some("Højesteret"));
}

#[test]
fn processor_reads_from_the_raw_store() {
    let dir = tmp_dir("processor");
    let mut cfg = AppConfig::default();
    cfg.raw_dir = dir.clone();

    let id = CaseId::from("77");
    let mut p = PageProcessor::new(&cfg);
    assert!(p.process(&id).is_err());

    store::save_raw_page(&dir, &id, PAGE).unwrap();
    assert_eq!(p.process(&id).unwrap().get_str("title"), Some("U.2021.1234 ØL"));
}

#[test]
fn builder_projects_onto_configured_fields() {
    let mut b = SchemaBuilder::with_fields(["title", "text", "court"]);
    assert_eq!(b.fields(), ["case_id", "title", "text", "court"]);

    let out = b
        .make_dataset_sample(record! { "case_id" => "5", "title" => "T", "extra" => 1 })
        .unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out.get_str("title"), Some("T"));
    assert!(out.get("court").unwrap().is_null());
    assert!(!out.contains_key("extra"));

    assert!(b.make_dataset_sample(record! { "title" => "no id" }).is_err());
}

#[test]
fn miss_goes_through_default_processor_and_builder() {
    let dir = tmp_dir("end_to_end");
    let mut cfg = AppConfig::default();
    cfg.raw_dir = dir.clone();
    cfg.fields = vec!["case_id".into(), "title".into(), "text".into()];

    let cached = Dataset::from_records(vec![record! { "case_id" => "1", "title" => "cached" }]);
    let mut acc = CaseAccessor::new(cfg, cached, |cfg: &AppConfig| {
        Ok(Collaborators::new(
            FixtureScraper { raw_dir: cfg.raw_dir.clone() },
            PageProcessor::new(cfg),
            SchemaBuilder::new(cfg),
        ))
    });

    let rec = acc.get_case(1234).unwrap().into_owned();
    assert_eq!(rec.keys().count(), 3);
    assert_eq!(rec.case_id(), Some("1234"));
    assert_eq!(rec.get_str("title"), Some("U.2021.1234 ØL"));
    assert!(dir.join("1234").join("page.html").exists());

    assert_eq!(acc.get_case(1).unwrap().get_str("title"), Some("cached"));
}
