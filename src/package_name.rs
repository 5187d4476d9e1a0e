//! npm package name validation.
//! Mirrors the rules npm applies to names of newly published packages.

use regex::Regex;
use std::sync::LazyLock;

/// Longest name the npm registry accepts
const MAX_LENGTH: usize = 214;

/// Names npm reserves outright
const RESERVED_NAMES: [&str; 2] = ["node_modules", "favicon.ico"];

/// Node core modules; a package may not shadow one of them. Internal
/// `_`-prefixed modules and `x/y` subpaths are left out because the leading
/// underscore and slash rules already reject them. `sea`, `sqlite` and `test`
/// exist only under the `node:` scheme but are still refused.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "sea",
    "sqlite",
    "stream",
    "string_decoder",
    "sys",
    "test",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// `@scope/name` or `name`. The scope may use every character
/// `encodeURIComponent` leaves untouched; the package part may not use the
/// legacy `~'!()*` characters.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-_.!~*'()]+/)?[a-z0-9\-_.]+$").expect("valid package name pattern")
});

/// Checks whether `name` can be used for a new npm package.
///
/// # Examples
/// ```
/// use avcreate::package_name::is_valid_package_name;
///
/// assert!(is_valid_package_name("my-gadget"));
/// assert!(is_valid_package_name("@aardvarkxr/my-gadget"));
/// assert!(!is_valid_package_name("My Gadget"));
/// ```
pub fn is_valid_package_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_LENGTH {
        return false;
    }
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    if RESERVED_NAMES.contains(&name) || CORE_MODULES.contains(&name) {
        return false;
    }
    NAME_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_limit() {
        assert!(is_valid_package_name(&"a".repeat(MAX_LENGTH)));
        assert!(!is_valid_package_name(&"a".repeat(MAX_LENGTH + 1)));
    }
}
