//! Built-in rule sets.

use crate::error::{MarkerGuardError, Result};

/// Preset used when no rule file is present.
pub const DEFAULT_PRESET: &str = "web-worker-table";

/// Available preset names.
pub const AVAILABLE_PRESETS: &[&str] = &["web-worker-table", "react-hooks-demo"];

/// Raw TOML of a built-in preset.
///
/// # Errors
/// Returns an error if the preset name is unknown.
pub fn preset_source(name: &str) -> Result<&'static str> {
    match name {
        "web-worker-table" => Ok(PRESET_WEB_WORKER_TABLE),
        "react-hooks-demo" => Ok(PRESET_REACT_HOOKS_DEMO),
        _ => Err(MarkerGuardError::Config(format!(
            "Unknown preset: '{}'. Available presets: {}",
            name,
            AVAILABLE_PRESETS.join(", ")
        ))),
    }
}

// Web Worker demo: 100k-row table with virtual list, search index and metrics.
const PRESET_WEB_WORKER_TABLE: &str = r#"
version = "1"

[files]
"index.html" = "main page"
"main.js" = "main thread logic"
"worker.js" = "worker thread"
"README.md" = "documentation"
"QUICK_START.md" = "quick start guide"
"TEST_GUIDE.js" = "test cases"
"ADVANCED_OPTIMIZATION.js" = "advanced optimizations"
"完整说明书.md" = "full manual"
"start.sh" = "start script"

[[content]]
file = "index.html"
marker = '<div class="table-wrapper"'
label = "table element"

[[content]]
file = "index.html"
marker = 'id="table-body"'
label = "virtual list body"

[[content]]
file = "index.html"
marker = 'id="metric-inp"'
label = "performance panel"

[[content]]
file = "index.html"
marker = 'id="search-input"'
label = "search box"

[[content]]
file = "index.html"
marker = 'src="main.js"'
label = "worker loader script"

[[content]]
file = "main.js"
marker = "class PerformanceMonitor"
label = "PerformanceMonitor class"

[[content]]
file = "main.js"
marker = "class VirtualList"
label = "VirtualList class"

[[content]]
file = "main.js"
marker = "class WorkerManager"
label = "WorkerManager class"

[[content]]
file = "main.js"
marker = "class DataTableApp"
label = "DataTableApp class"

[[content]]
file = "main.js"
marker = "recordInputResponse"
label = "input response recording"

[[content]]
file = "worker.js"
marker = "generateData"
label = "data generation"

[[content]]
file = "worker.js"
marker = "buildSearchIndex"
label = "index building"

[[content]]
file = "worker.js"
marker = "searchByKeyword"
label = "keyword search"

[[content]]
file = "worker.js"
marker = "processData"
label = "data processing"

[[content]]
file = "worker.js"
marker = "self.onmessage"
label = "message listener"

[quality]
comment_marker = "//"
comment_threshold = 0.1
comment_density = ["main.js"]
line_count = ["main.js", "worker.js", "index.html"]

[[features]]
label = "virtual list"
file = "main.js"
marker = "class VirtualList"

[[features]]
label = "inverted index"
file = "worker.js"
marker = "buildSearchIndex"

[[features]]
label = "worker query cache"
file = "worker.js"
marker = "lastQueryParams"

[[features]]
label = "debounced search"
file = "main.js"
marker = "debounce"

[[features]]
label = "performance monitoring"
file = "main.js"
marker = "class PerformanceMonitor"

[[features]]
label = "chunked results"
file = "worker.js"
marker = "paginateData"
"#;

// React 18 hooks showcase built with Vite.
const PRESET_REACT_HOOKS_DEMO: &str = r#"
version = "1"

[files]
"package.json" = "package manifest"
"src/App.jsx" = "application shell"
"src/hooks/index.js" = "hook registry"
"src/components/CodeBlock.jsx" = "code viewer"

[[content]]
file = "src/App.jsx"
marker = "hooksList"
label = "hook list import"

[[content]]
file = "src/App.jsx"
marker = 'id="hook-select"'
label = "hook selector"

[[content]]
file = "src/hooks/index.js"
marker = "export const hooksList"
label = "hook list export"

[quality]
comment_marker = "//"
comment_threshold = 0.05
comment_density = ["src/hooks/index.js"]
line_count = ["src/App.jsx", "src/hooks/index.js"]

[[dependencies]]
file = "package.json"
marker = '"react"'
label = "react"

[[dependencies]]
file = "package.json"
marker = '"react-dom"'
label = "react-dom"

[[features]]
label = "useState"
file = "src/hooks/index.js"
marker = "id: 'useState'"

[[features]]
label = "useEffect"
file = "src/hooks/index.js"
marker = "id: 'useEffect'"

[[features]]
label = "useContext"
file = "src/hooks/index.js"
marker = "id: 'useContext'"

[[features]]
label = "useReducer"
file = "src/hooks/index.js"
marker = "id: 'useReducer'"

[[features]]
label = "useDeferredValue"
file = "src/hooks/index.js"
marker = "id: 'useDeferredValue'"

[[features]]
label = "useTransition"
file = "src/hooks/index.js"
marker = "id: 'useTransition'"

[[features]]
label = "useId"
file = "src/hooks/index.js"
marker = "id: 'useId'"

[[features]]
label = "useSyncExternalStore"
file = "src/hooks/index.js"
marker = "id: 'useSyncExternalStore'"

[[features]]
label = "useInsertionEffect"
file = "src/hooks/index.js"
marker = "id: 'useInsertionEffect'"
"#;

#[cfg(test)]
#[path = "presets_tests.rs"]
mod tests;
