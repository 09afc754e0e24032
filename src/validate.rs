use std::sync::LazyLock;

/// Optional http(s) scheme, domain or IPv4 host, then optional port, path,
/// query and fragment.
static URL_SHAPE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        r"(?i)^(https?://)?",
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        r"(:[0-9]+)?",
        r"(/[-a-z0-9%_.~+]*)*",
        r"(\?[;&a-z0-9%_.~+=-]*)?",
        r"(#[-a-z0-9_]*)?$",
    ))
    .unwrap()
});

/// File suffixes the scoring service knows how to read from a URL.
pub const SUPPORTED_EXTENSIONS: [&str; 7] =
    [".jpeg", ".jpg", ".png", ".gif", ".bmp", ".tiff", ".pdf"];

/// Purely syntactic check; nothing is resolved.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_SHAPE.is_match(candidate)
}

/// Case-sensitive suffix match against the whole string, query and fragment
/// included.
pub fn has_supported_extension(candidate: &str) -> bool {
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| candidate.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_common_shapes() {
        for url in [
            "example.com",
            "http://example.com",
            "https://example.com/proof.pdf",
            "https://www.example.com:8080/a/b/c.png?x=1&y=2#top",
            "https://sub-domain.example.co.uk/path_with~tilde",
            "192.168.0.1",
            "http://10.0.0.7:5000/scan.jpg",
            "HTTPS://EXAMPLE.COM/Proof.PDF",
        ] {
            assert!(is_valid_url(url), "{url} should be valid");
        }
    }

    #[test]
    fn rejects_malformed() {
        for url in [
            "",
            "not a url",
            "ftp://example.com/a.pdf",
            "https://",
            "https://example",
            "https://-bad.com",
            "https://example.com/with space.pdf",
            "https://example.com/a.pdf#frag?ment",
            "http:/example.com",
            "https://1.2.3/a.png",
        ] {
            assert!(!is_valid_url(url), "{url} should be invalid");
        }
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(has_supported_extension("https://x.com/a.pdf"));
        assert!(!has_supported_extension("https://x.com/a.PDF"));
        assert!(has_supported_extension("https://x.com/photo.jpeg"));
        assert!(has_supported_extension("https://x.com/scan.tiff"));
        assert!(!has_supported_extension("https://x.com/scan.tif"));
    }

    #[test]
    fn extension_is_checked_on_the_full_string() {
        assert!(!has_supported_extension("https://x.com/a.pdf?download=1"));
        assert!(has_supported_extension("https://x.com/view?file=a.png"));
    }

    proptest! {
        #[test]
        fn example_com_urls_are_valid(
            https in any::<bool>(),
            port in proptest::option::of(1u16..),
            path in proptest::collection::vec("[a-zA-Z0-9_.~+-]{0,8}", 0..4),
            query in proptest::option::of("[a-z0-9=&]{0,10}"),
            fragment in proptest::option::of("[a-z0-9_-]{0,8}"),
        ) {
            let mut url = String::from(if https { "https://example.com" } else { "http://example.com" });
            if let Some(port) = port {
                url.push_str(&format!(":{port}"));
            }
            for segment in &path {
                url.push('/');
                url.push_str(segment);
            }
            if let Some(query) = query {
                url.push('?');
                url.push_str(&query);
            }
            if let Some(fragment) = fragment {
                url.push('#');
                url.push_str(&fragment);
            }
            prop_assert!(is_valid_url(&url), "{}", url);
        }

        #[test]
        fn ipv4_hosts_are_valid(a in 0u8.., b in 0u8.., c in 0u8.., d in 0u8.., file in "[a-z]{1,8}\\.(pdf|png)") {
            let url = format!("http://{a}.{b}.{c}.{d}/{file}");
            prop_assert!(is_valid_url(&url), "{}", url);
        }

        #[test]
        fn whitespace_is_never_valid(prefix in "[a-z]{1,6}", suffix in "[a-z]{0,6}") {
            let url = format!("https://{prefix} {suffix}.com");
            prop_assert!(!is_valid_url(&url));
        }

        #[test]
        fn uppercase_extensions_are_unsupported(stem in "[a-z]{1,8}", ext in "(PDF|PNG|JPG|JPEG|GIF|BMP|TIFF)") {
            let url = format!("https://example.com/{stem}.{ext}");
            prop_assert!(!has_supported_extension(&url));
        }
    }
}
