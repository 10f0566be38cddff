use awsdocs_mcp::model::TreeEntry;
use awsdocs_mcp::search::{clamp_limit, score_path, search_tree};

fn blob(path: &str) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        kind: "blob".to_string(),
    }
}

fn tree(path: &str) -> TreeEntry {
    TreeEntry {
        path: path.to_string(),
        kind: "tree".to_string(),
    }
}

#[test]
fn test_search_tree_filters_and_ranks() {
    // Two markdown files match the query, one does not, and directories and
    // non-markdown blobs never count.
    let entries = vec![
        blob("docs/auth/setup.md"),
        blob("docs/misc/intro.md"),
        blob("docs/auth/mfa.md"),
        blob("docs/auth/picture.png"),
        tree("docs/auth"),
    ];

    let results = search_tree(&entries, "auth", 3);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].path, "docs/auth/setup.md");
    assert_eq!(results[1].path, "docs/auth/mfa.md");
    assert_eq!(results[0].rank_order, 1);
    assert_eq!(results[1].rank_order, 2);

    // Both hits carry the same additive score: one matching path component
    // plus the core-topic bonus.
    assert_eq!(results[0].relevance_score, 7.0);
    assert_eq!(results[1].relevance_score, 7.0);
}

#[test]
fn test_search_tree_urls_point_at_docs_repo() {
    let entries = vec![blob("src/pages/build-a-backend/auth/set-up-auth.md")];
    let results = search_tree(&entries, "auth", 10);

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].url,
        "https://github.com/aws-amplify/docs/blob/main/src/pages/build-a-backend/auth/set-up-auth.md"
    );
    assert_eq!(
        results[0].raw_url,
        "https://raw.githubusercontent.com/aws-amplify/docs/main/src/pages/build-a-backend/auth/set-up-auth.md"
    );
}

#[test]
fn test_search_tree_limit_applies_after_sorting() {
    let entries = vec![
        blob("docs/misc/auth-notes.md"),
        blob("src/pages/build-a-backend/auth/auth.mdx"),
        blob("docs/other/auth.md"),
    ];

    let results = search_tree(&entries, "auth", 1);

    // The deeply boosted build-a-backend page wins even though it appears
    // second in the listing.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].path, "src/pages/build-a-backend/auth/auth.mdx");
    assert_eq!(results[0].rank_order, 1);
}

#[test]
fn test_score_path_bonuses_stack() {
    let plain = score_path("docs/guide.md", "guide");
    let boosted = score_path("src/pages/build-a-backend/react/guide.md", "guide");

    // build-a-backend (+4), /pages/ (+1) and the framework keyword (+2) all
    // stack on top of the base filename and component matches.
    assert!(boosted >= plain + 7.0);
}

#[test]
fn test_clamp_limit_bounds() {
    assert_eq!(clamp_limit(-1), 10);
    assert_eq!(clamp_limit(0), 10);
    assert_eq!(clamp_limit(25), 25);
    assert_eq!(clamp_limit(9999), 50);
}
