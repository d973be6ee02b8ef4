use regex::Regex;

/// Request methods recognised in front of the requested URL.
pub const HTTP_METHODS: [&str; 9] = [
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "CONNECT", "OPTIONS", "TRACE",
];

// One IPv4 octet, 0-255. Longer digit runs are rejected by the word boundaries.
const IPV4_OCTET: &str = r"(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)";

// ASCII-only, so a neighbouring non-ASCII letter does not hide a field.
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Pulls the client address and requested URL out of a raw access log line.
///
/// Both lookups are heuristics over the whole line and run independently, so
/// a line missing one field can still yield the other.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    ip_address: Regex,
    request: Regex,
}

impl FieldExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let ip_address = Regex::new(&format!(
            r"{WORD_BOUNDARY}{IPV4_OCTET}(?:\.{IPV4_OCTET}){{3}}{WORD_BOUNDARY}"
        ))?;
        let request = Regex::new(&format!(
            r"{WORD_BOUNDARY}(?:{}){WORD_BOUNDARY}(.*?){WORD_BOUNDARY}HTTP{WORD_BOUNDARY}",
            HTTP_METHODS.join("|")
        ))?;

        Ok(Self {
            ip_address,
            request,
        })
    }

    /// First dotted-quad IPv4 address on the line.
    pub fn ip_address<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.ip_address.find(line).map(|m| m.as_str())
    }

    /// Text between the first method token and the next `HTTP` token, trimmed.
    pub fn url<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.request
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn log_with_ip(ip: &str) -> String {
        format!(
            r#"{ip} - - [10/Jul/2018:22:21:28 +0200] "GET /intranet-analytics/ HTTP/1.1" 200 3574 "-" "Mozilla/5.0 (X11; U; Linux x86_64; fr-FR) AppleWebKit/534.7 (KHTML, like Gecko) Epiphany/2.30.6 Safari/534.7""#
        )
    }

    fn log_with_request(method: &str, url: &str) -> String {
        format!(
            r#"177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "{method} {url} HTTP/1.1" 200 3574 "-" "Mozilla/5.0 (X11; U; Linux x86_64; fr-FR) AppleWebKit/534.7 (KHTML, like Gecko) Epiphany/2.30.6 Safari/534.7""#
        )
    }

    #[test]
    fn extracts_addresses_of_every_octet_width() {
        let extractor = FieldExtractor::new().unwrap();
        for ip in [
            "1.1.1.1",
            "11.1.1.1",
            "11.11.1.1",
            "11.11.11.1",
            "11.11.11.11",
            "111.11.11.11",
            "111.111.11.11",
            "111.111.111.11",
            "111.111.111.111",
            "0.0.0.0",
            "255.255.255.255",
        ] {
            assert_eq!(extractor.ip_address(&log_with_ip(ip)), Some(ip));
        }
    }

    #[test]
    fn rejects_four_digit_leading_group() {
        let extractor = FieldExtractor::new().unwrap();
        assert_eq!(extractor.ip_address(&log_with_ip("1111.111.111.111")), None);
        assert_eq!(extractor.ip_address(&log_with_ip("1111.1.1.1")), None);
    }

    #[test]
    fn rejects_out_of_range_octets() {
        let extractor = FieldExtractor::new().unwrap();
        assert_eq!(extractor.ip_address("client 256.1.1.1 done"), None);
        assert_eq!(extractor.ip_address("client 1.1.1.300 done"), None);
    }

    #[test]
    fn returns_first_address_on_the_line() {
        let extractor = FieldExtractor::new().unwrap();
        let line = "10.0.0.1 forwarded-for 192.168.1.20";
        assert_eq!(extractor.ip_address(line), Some("10.0.0.1"));
    }

    #[test]
    fn extracts_url_for_every_method() {
        let extractor = FieldExtractor::new().unwrap();
        for method in HTTP_METHODS {
            let line = log_with_request(method, "/intranet-analytics");
            assert_eq!(extractor.url(&line), Some("/intranet-analytics"), "{method}");
        }
    }

    #[test]
    fn keeps_external_urls_and_query_strings() {
        let extractor = FieldExtractor::new().unwrap();
        let line = log_with_request("GET", "http://example.net/faq/?lang=en&page=2");
        assert_eq!(
            extractor.url(&line),
            Some("http://example.net/faq/?lang=en&page=2")
        );
    }

    #[test]
    fn no_method_means_no_url() {
        let extractor = FieldExtractor::new().unwrap();
        let line = log_with_request("not a request method", "not a url url");
        assert_eq!(extractor.url(&line), None);
    }

    #[test]
    fn method_must_be_a_whole_word() {
        let extractor = FieldExtractor::new().unwrap();
        assert_eq!(extractor.url(r#""GETTER /a HTTP/1.1""#), None);
        assert_eq!(extractor.url(r#""XPOST /a HTTP/1.1""#), None);
    }

    #[test]
    fn stops_at_first_http_token() {
        let extractor = FieldExtractor::new().unwrap();
        let line = r#""GET /first HTTP/1.1" "POST /second HTTP/1.1""#;
        assert_eq!(extractor.url(line), Some("/first"));
    }

    #[test]
    fn non_ascii_neighbours_do_not_block_extraction() {
        let extractor = FieldExtractor::new().unwrap();
        assert_eq!(extractor.ip_address("client=é10.0.0.1 x"), Some("10.0.0.1"));
        assert_eq!(extractor.ip_address("10.0.0.1ü"), Some("10.0.0.1"));
        assert_eq!(extractor.url("éGET /a HTTP/1.1"), Some("/a"));
        assert_eq!(extractor.url("GET /straße HTTPé"), Some("/straße"));
    }

    #[test]
    fn fields_are_extracted_independently() {
        let extractor = FieldExtractor::new().unwrap();
        let line = r#"- - [10/Jul/2018:22:21:28 +0200] "GET /docs HTTP/1.1" 200"#;
        assert_eq!(extractor.ip_address(line), None);
        assert_eq!(extractor.url(line), Some("/docs"));
    }
}
