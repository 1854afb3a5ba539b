//! Instance identity (host / pod name), resolved once at startup.

use std::fs;

const HOSTNAME_FILES: [&str; 2] = ["/proc/sys/kernel/hostname", "/etc/hostname"];
const FALLBACK: &str = "unknown";

/// Configured override, then the kernel hostname files, then `$HOSTNAME`.
pub fn resolve(configured: Option<&str>) -> String {
    resolve_from(configured, &HOSTNAME_FILES, std::env::var("HOSTNAME").ok())
}

/// First non-blank of: `configured`, each file in `files`, `env`. Falls back to `"unknown"`.
fn resolve_from(configured: Option<&str>, files: &[&str], env: Option<String>) -> String {
    if let Some(id) = configured.map(str::trim).filter(|s| !s.is_empty()) {
        return id.to_string();
    }

    for path in files {
        if let Some(name) = fs::read_to_string(path).ok().and_then(non_blank) {
            return name;
        }
    }

    env.and_then(non_blank).unwrap_or_else(|| {
        tracing::warn!("hostname could not be resolved, using {FALLBACK:?}");
        FALLBACK.to_string()
    })
}

fn non_blank(s: String) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const MISSING: &str = "/nonexistent/storefront/hostname";

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("storefront-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn override_wins_and_is_trimmed() {
        assert_eq!(resolve(Some("  pod-a \n")), "pod-a");
        assert_eq!(resolve_from(Some("pod-b"), &[MISSING], Some("env-host".into())), "pod-b");
    }

    #[test]
    fn blank_override_falls_through() {
        let id = resolve(Some("   "));
        assert!(!id.trim().is_empty());
        assert_eq!(id, id.trim());
    }

    #[test]
    fn file_contents_are_trimmed_and_win_over_env() {
        let path = temp_file("host-file", "  node-7\n");
        let file = path.to_str().unwrap();
        assert_eq!(resolve_from(None, &[MISSING, file], Some("env-host".into())), "node-7");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn blank_file_falls_through_to_next() {
        let blank = temp_file("blank-file", " \n");
        let named = temp_file("named-file", "second\n");
        let files = [blank.to_str().unwrap(), named.to_str().unwrap()];
        assert_eq!(resolve_from(None, &files, None), "second");
        fs::remove_file(&blank).unwrap();
        fs::remove_file(&named).unwrap();
    }

    #[test]
    fn missing_files_fall_through_to_env() {
        assert_eq!(resolve_from(Some(" "), &[MISSING], Some(" env-host\n".into())), "env-host");
    }

    #[test]
    fn blank_env_falls_back_to_unknown() {
        assert_eq!(resolve_from(None, &[MISSING], Some("   ".into())), "unknown");
        assert_eq!(resolve_from(None, &[], None), "unknown");
    }
}
