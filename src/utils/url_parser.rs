/// Host (and port, if any) of a base URL, for "data from" footers.
pub fn api_host(base_url: &str) -> &str {
    let s = base_url.trim();
    let s = s.split_once("://").map(|(_, rest)| rest).unwrap_or(s);
    s.split('/').next().unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::api_host;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(api_host("https://pricing.example.com/api"), "pricing.example.com");
        assert_eq!(api_host("http://localhost:9090"), "localhost:9090");
        assert_eq!(api_host(""), "");
    }
}
