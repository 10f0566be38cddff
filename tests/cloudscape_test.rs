use std::fs;

use awsdocs_mcp::cloudscape::demos::DemoRepo;
use awsdocs_mcp::cloudscape::{
    format_demo_implementation, format_demo_results, format_doc_results,
};

const TABLE_DEMO: &str = r#"// Orders Demo
import { Table, Header, Pagination } from '@cloudscape-design/components';

const page = {
  title: "Orders table",
  description: "Paginated list of customer orders"
};

export default function OrdersTable() {
  return <Table header={<Header>Orders</Header>} pagination={<Pagination />} />;
}
"#;

const FORM_DEMO: &str = r#"
import { Form, Button } from '@cloudscape-design/components';
import { useState } from 'react';

export default function ContactForm() {
  const [value, setValue] = useState('');
  return <Form actions={<Button>Submit</Button>} />;
}
"#;

/// Build a demos snapshot on disk the way the extracted zipball looks.
fn fixture_repo(dir: &std::path::Path) {
    fs::create_dir_all(dir.join("demos-main/src/pages")).unwrap();
    fs::create_dir_all(dir.join("demos-main/node_modules/react")).unwrap();

    fs::write(dir.join("demos-main/src/pages/orders-table.tsx"), TABLE_DEMO).unwrap();
    fs::write(dir.join("demos-main/src/pages/contact-form.tsx"), FORM_DEMO).unwrap();
    fs::write(dir.join("demos-main/src/pages/readme.txt"), "table table table").unwrap();
    fs::write(
        dir.join("demos-main/node_modules/react/index.js"),
        "// table internals",
    )
    .unwrap();
}

#[test]
fn test_demo_search_finds_matching_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    fixture_repo(temp_dir.path());
    let repo = DemoRepo::from_dir(temp_dir.path());

    let results = repo.search("table", 10);

    // The table demo matches; the .txt file and anything under node_modules
    // are never considered.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].demo_name, "Orders table");
    assert_eq!(
        results[0].description.as_deref(),
        Some("Paginated list of customer orders")
    );
    assert!(results[0].file_path.ends_with("src/pages/orders-table.tsx"));
    assert!(results[0].components_used.contains(&"Table".to_string()));
    assert!(results[0].components_used.contains(&"Pagination".to_string()));
}

#[test]
fn test_demo_implementation_matches_file_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    fixture_repo(temp_dir.path());
    let repo = DemoRepo::from_dir(temp_dir.path());

    let demo = repo.implementation("contact-form").unwrap();
    assert!(demo.file_path.ends_with("src/pages/contact-form.tsx"));
    assert!(demo.components_used.contains(&"Form".to_string()));

    assert!(repo.implementation("no-such-demo").is_none());
}

#[test]
fn test_pattern_search_restricts_to_component() {
    let temp_dir = tempfile::tempdir().unwrap();
    fixture_repo(temp_dir.path());
    let repo = DemoRepo::from_dir(temp_dir.path());

    // Both .tsx demos use Cloudscape imports, so both are pattern candidates.
    let all = repo.patterns(None);
    assert_eq!(all.len(), 2);

    let forms = repo.patterns(Some("form"));
    assert_eq!(forms.len(), 1);
    assert!(forms[0].file_path.ends_with("contact-form.tsx"));
}

#[test]
fn test_demo_reports_render_sources() {
    let temp_dir = tempfile::tempdir().unwrap();
    fixture_repo(temp_dir.path());
    let repo = DemoRepo::from_dir(temp_dir.path());

    let results = repo.search("table", 10);
    let report = format_demo_results("table", &results);
    assert!(report.contains("## 1. Orders table"));
    assert!(report.contains("https://github.com/cloudscape-design/demos/blob/main/"));
    assert!(report.contains("```tsx"));

    let implementation = format_demo_implementation(&results[0]);
    assert!(implementation.contains("## Implementation"));
    assert!(implementation.contains("OrdersTable"));
}

#[test]
fn test_empty_snapshot_renders_notices() {
    let repo = DemoRepo::empty();
    assert!(!repo.available());

    let report = format_demo_results("table", &repo.search("table", 10));
    assert_eq!(report, "No demos found for query: table");
}

#[test]
fn test_doc_report_empty_notice() {
    assert_eq!(
        format_doc_results("wizard", &[]),
        "No documentation found for query: wizard"
    );
}
