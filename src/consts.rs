//! Fixed configuration for both servers.
//!
//! Everything here is read-only process-wide data: repository identifiers,
//! keyword lists used by the relevance scorer, and the well-known file lists
//! probed during template discovery. Nothing is mutated after startup.

/// GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Public Amplify documentation site.
pub const AMPLIFY_DOCS_BASE: &str = "https://docs.amplify.aws";

/// Repository holding the official Amplify documentation sources.
pub const DOCUMENTATION_REPO: &str = "aws-amplify/docs";

/// User-Agent sent with every GitHub request.
pub const USER_AGENT: &str = "AmplifyGen2MCPServer/1.0";

/// Socket timeout for GitHub fetches, in seconds.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// Official sample repositories, one per frontend framework.
/// Order is significant: discovery and formatting iterate in this order.
pub const SAMPLE_REPOSITORIES: &[(&str, &str)] = &[
    ("next", "aws-samples/amplify-next-template"),
    ("react", "aws-samples/amplify-vite-react-template"),
    ("angular", "aws-samples/amplify-angular-template"),
    ("vue", "aws-samples/amplify-vue-template"),
    ("ai", "aws-samples/amplify-ai-examples"),
];

/// Well-known project files probed during template discovery.
pub const PROJECT_TEMPLATE_FILES: &[(&str, &str)] = &[
    ("package.json", "Project configuration and dependencies"),
    ("README.md", "Project documentation and setup instructions"),
    ("amplify/backend.ts", "Amplify backend configuration"),
    ("amplify/auth/resource.ts", "Authentication configuration"),
    ("amplify/data/resource.ts", "Data/API configuration"),
    ("amplify/storage/resource.ts", "Storage configuration"),
    ("src/main.tsx", "React main entry point"),
    ("src/main.ts", "Vue/Angular main entry point"),
    ("src/app/app.component.ts", "Angular app component"),
    ("pages/_app.tsx", "Next.js app component"),
    ("app/layout.tsx", "Next.js app router layout"),
];

/// Default and maximum result-list sizes for search tools.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Default and maximum character counts for content reads.
pub const DEFAULT_CONTENT_LENGTH: usize = 5000;
pub const MAX_CONTENT_LENGTH: usize = 50000;

/// Framework keywords that earn a scoring boost when present in a path.
pub const FRAMEWORK_KEYWORDS: &[&str] = &["react", "vue", "angular", "nextjs", "flutter"];

/// Core Amplify topics that earn a scoring boost when present in a path.
pub const CORE_TOPIC_KEYWORDS: &[&str] = &["auth", "data", "storage", "function", "api", "deploy"];

/// Template files whose sample-search hits get an extra boost.
pub const KEY_TEMPLATE_FILES: &[&str] = &["package.json", "README.md", "amplify/backend.ts"];

/// Ordered issue-keyword to documentation-topic mapping used by the
/// troubleshooting tool. The first keyword found in the issue string wins.
pub const ISSUE_TOPIC_MAP: &[(&str, &str)] = &[
    ("deployment", "deployment"),
    ("deploy", "deployment"),
    ("build", "deployment"),
    ("auth", "authentication"),
    ("authentication", "authentication"),
    ("login", "authentication"),
    ("signin", "authentication"),
    ("data", "data"),
    ("graphql", "data"),
    ("api", "data"),
    ("storage", "storage"),
    ("file", "storage"),
    ("upload", "storage"),
];

/// Cloudscape documentation site root.
pub const CLOUDSCAPE_BASE_URL: &str = "https://cloudscape.design";

/// Documentation sections crawled by the Cloudscape searcher.
pub const CLOUDSCAPE_DOC_SECTIONS: &[&str] =
    &["/components/", "/foundation/", "/patterns/", "/get-started/"];

/// Socket timeout for Cloudscape page fetches, in seconds.
pub const CLOUDSCAPE_FETCH_TIMEOUT_SECS: u64 = 30;

/// Zipball snapshot of the public Cloudscape demos repository.
pub const CLOUDSCAPE_DEMOS_ZIP_URL: &str =
    "https://codeload.github.com/cloudscape-design/demos/zip/refs/heads/main";

/// Web URL of the demos repository, for rendered links.
pub const CLOUDSCAPE_DEMOS_REPO_URL: &str = "https://github.com/cloudscape-design/demos";

/// File extensions considered demo sources.
pub const DEMO_FILE_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js", "json"];

/// Path fragments that exclude a file from demo searches.
pub const DEMO_SKIP_PATTERNS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "coverage",
    ".DS_Store",
    "package-lock.json",
    "yarn.lock",
];
