//! Project and module names derived from `git remote -v` output.
//!
//! A listing line looks like `origin\tgit@host:org/repo.git (fetch)`. Only
//! `(fetch)` lines are considered and the first one that yields a name wins.

/// URL fields of every fetch line, in listing order.
fn fetch_urls(listing: &str) -> impl Iterator<Item = &str> {
    listing
        .lines()
        .filter(|line| line.contains("fetch"))
        .filter_map(|line| line.split_whitespace().nth(1))
}

/// Project name from a remote listing, e.g. `org-repo`.
pub fn project_name(listing: &str) -> Option<String> {
    fetch_urls(listing).find_map(project_from_url)
}

/// Module name from a remote listing, e.g. `repo`.
pub fn module_name(listing: &str) -> Option<String> {
    fetch_urls(listing).find_map(module_from_url)
}

/// `https://host/org/repo.git` and `git@host:org/repo.git` both give `org-repo`.
///
/// URL-style remotes keep only the last two path segments; scp-style remotes
/// keep the whole path after the first `:`.
pub fn project_from_url(url: &str) -> Option<String> {
    let path = if url.contains("://") {
        let segments: Vec<&str> = url.split('/').collect();
        if segments.len() < 2 {
            return None;
        }
        segments[segments.len() - 2..].join("/")
    } else {
        let (_, path) = url.split_once(':')?;
        path.to_string()
    };

    let path = path.strip_suffix(".git").unwrap_or(&path);
    Some(path.replace('/', "-"))
}

/// Basename of the remote path with `.git` removed.
pub fn module_from_url(url: &str) -> Option<String> {
    let (_, path) = url.split_once(':')?;
    let path = path.strip_suffix(".git").unwrap_or(path);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SSH_LISTING: &str = "origin\tgit@github.com:acme/widget.git (fetch)\n\
                               origin\tgit@github.com:acme/widget.git (push)\n";

    const HTTPS_LISTING: &str = "origin\thttps://github.com/acme/widget.git (fetch)\n\
                                 origin\thttps://github.com/acme/widget.git (push)\n";

    #[test]
    fn test_project_from_https() {
        assert_eq!(project_name(HTTPS_LISTING), Some("acme-widget".to_string()));
    }

    #[test]
    fn test_project_from_https_without_git_suffix() {
        assert_eq!(
            project_from_url("https://gitlab.example.com/group/sub/tool"),
            Some("sub-tool".to_string())
        );
    }

    #[test]
    fn test_project_from_ssh_joins_whole_path() {
        assert_eq!(project_name(SSH_LISTING), Some("acme-widget".to_string()));
        assert_eq!(
            project_from_url("git@host:group/sub/tool.git"),
            Some("group-sub-tool".to_string())
        );
    }

    #[test]
    fn test_module_from_ssh() {
        assert_eq!(module_name(SSH_LISTING), Some("widget".to_string()));
    }

    #[test]
    fn test_module_from_https_takes_basename() {
        assert_eq!(module_name(HTTPS_LISTING), Some("widget".to_string()));
    }

    #[test]
    fn test_module_trailing_slash() {
        assert_eq!(
            module_from_url("git@host:org/repo/"),
            Some("repo".to_string())
        );
    }

    #[test]
    fn test_lines_are_split_on_newlines() {
        // Remote names and hosts containing the letter `n` must not break parsing.
        let listing = "upstream\tgit@gitlab.internal:platform/engine.git (fetch)\n\
                       upstream\tgit@gitlab.internal:platform/engine.git (push)\n";
        assert_eq!(
            project_name(listing),
            Some("platform-engine".to_string())
        );
        assert_eq!(module_name(listing), Some("engine".to_string()));
    }

    #[test]
    fn test_push_only_listing_has_no_name() {
        let listing = "origin\tgit@host:org/repo.git (push)\n";
        assert_eq!(project_name(listing), None);
        assert_eq!(module_name(listing), None);
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(project_name(""), None);
        assert_eq!(module_name(""), None);
    }

    #[test]
    fn test_unparsable_fetch_line_falls_through_to_next() {
        let listing = "local\t/srv/git/repo.git (fetch)\n\
                       origin\tgit@host:org/repo.git (fetch)\n";
        assert_eq!(project_name(listing), Some("org-repo".to_string()));
        assert_eq!(module_name(listing), Some("repo".to_string()));
    }

    #[test]
    fn test_fetch_line_without_url_is_skipped() {
        assert_eq!(project_name("fetch\n"), None);
    }
}
