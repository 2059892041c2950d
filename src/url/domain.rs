use url::Url;

/// Checks whether two URLs point at the same host
///
/// This is the domain-confinement boundary: only pages on the seed's host
/// have their outbound links followed. The port participates in the
/// comparison, so `http://localhost:8080` and `http://localhost:9090` are
/// different hosts.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkrot::url::same_host;
///
/// let a = Url::parse("https://example.com/a").unwrap();
/// let b = Url::parse("https://example.com/b?q=1").unwrap();
/// let other = Url::parse("https://other.example/x").unwrap();
/// assert!(same_host(&a, &b));
/// assert!(!same_host(&a, &other));
/// ```
pub fn same_host(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_same_host_different_paths() {
        assert!(same_host(
            &url("https://example.com/a"),
            &url("https://example.com/b/c")
        ));
    }

    #[test]
    fn test_different_hosts() {
        assert!(!same_host(
            &url("https://example.com/"),
            &url("https://other.example/")
        ));
    }

    #[test]
    fn test_subdomain_is_different_host() {
        assert!(!same_host(
            &url("https://example.com/"),
            &url("https://blog.example.com/")
        ));
    }

    #[test]
    fn test_different_ports() {
        assert!(!same_host(
            &url("http://127.0.0.1:8080/"),
            &url("http://127.0.0.1:9090/")
        ));
    }

    #[test]
    fn test_explicit_default_port_matches() {
        assert!(same_host(
            &url("https://example.com:443/"),
            &url("https://example.com/")
        ));
    }
}
