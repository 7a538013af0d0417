//! Header extraction and origination parsing.
//!
//! The origination IP is the first IPv4 literal in square brackets in
//! the value of the first `Received` header whose value starts with
//! `"from "`. A message with no such header, or a matching header with
//! no bracketed literal, derives the sentinel — never an error.

use regex::Regex;

use crate::pipeline::types::OriginationRecord;
use crate::source::types::{HeaderLine, MessageRecord};

/// Pull the header sequence out of each record.
///
/// Records lacking a payload or header list contribute an empty
/// sequence, keeping positions aligned with the input batch.
pub fn extract_headers(messages: &[MessageRecord]) -> Vec<&[HeaderLine]> {
    messages.iter().map(|m| m.headers()).collect()
}

/// Parses origination IPs out of routing headers.
pub struct OriginParser {
    bracketed_ipv4: Regex,
}

impl OriginParser {
    pub fn new() -> Self {
        Self {
            bracketed_ipv4: Regex::new(r"\[\d+\.\d+\.\d+\.\d+\]").unwrap(),
        }
    }

    /// Derive the origination record for one header sequence.
    pub fn parse(&self, headers: &[HeaderLine]) -> OriginationRecord {
        let Some(received) = headers
            .iter()
            .find(|h| h.name == "Received" && h.value.starts_with("from "))
        else {
            return OriginationRecord::sentinel();
        };

        match self.bracketed_ipv4.find(&received.value) {
            Some(m) => {
                let literal = m.as_str();
                OriginationRecord {
                    ip: literal[1..literal.len() - 1].to_string(),
                }
            }
            None => OriginationRecord::sentinel(),
        }
    }

    /// Derive origination records for a batch, in input order.
    pub fn parse_batch(&self, headers: &[&[HeaderLine]]) -> Vec<OriginationRecord> {
        headers.iter().map(|h| self.parse(h)).collect()
    }
}

impl Default for OriginParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::types::MessageRecord;

    fn received(value: &str) -> HeaderLine {
        HeaderLine::new("Received", value)
    }

    #[test]
    fn extracts_bracketed_ipv4() {
        let parser = OriginParser::new();
        let headers = vec![received(
            "from mail-ed1-f51.google.com (mail-ed1-f51.google.com. [209.85.208.51]) by mx.example.com",
        )];

        let origin = parser.parse(&headers);
        assert_eq!(origin.ip, "209.85.208.51");
    }

    #[test]
    fn first_qualifying_header_wins() {
        let parser = OriginParser::new();
        let headers = vec![
            received("from relay-a.example.com [1.1.1.1] by mx"),
            received("from relay-b.example.com [2.2.2.2] by mx"),
        ];

        assert_eq!(parser.parse(&headers).ip, "1.1.1.1");
    }

    #[test]
    fn received_without_from_prefix_is_skipped() {
        let parser = OriginParser::new();
        let headers = vec![
            received("by mx.example.com with SMTP id xyz [3.3.3.3]"),
            received("from relay.example.com [4.4.4.4] by mx"),
        ];

        assert_eq!(parser.parse(&headers).ip, "4.4.4.4");
    }

    #[test]
    fn non_received_headers_never_match() {
        let parser = OriginParser::new();
        let headers = vec![
            HeaderLine::new("X-Received", "from fake.example.com [5.5.5.5]"),
            HeaderLine::new("Subject", "from [6.6.6.6]"),
        ];

        assert!(parser.parse(&headers).is_sentinel());
    }

    #[test]
    fn no_headers_yields_sentinel() {
        let parser = OriginParser::new();
        assert!(parser.parse(&[]).is_sentinel());
    }

    #[test]
    fn qualifying_header_without_bracketed_ip_yields_sentinel() {
        let parser = OriginParser::new();
        let headers = vec![received("from relay.example.com (unknown) by mx")];
        assert!(parser.parse(&headers).is_sentinel());
    }

    #[test]
    fn unbracketed_ip_does_not_match() {
        let parser = OriginParser::new();
        let headers = vec![received("from relay.example.com 7.7.7.7 by mx")];
        assert!(parser.parse(&headers).is_sentinel());
    }

    #[test]
    fn first_literal_in_value_wins() {
        let parser = OriginParser::new();
        let headers = vec![received("from a [8.8.8.8] via b [9.9.9.9]")];
        assert_eq!(parser.parse(&headers).ip, "8.8.8.8");
    }

    #[test]
    fn batch_preserves_input_order() {
        let parser = OriginParser::new();
        let messages = vec![
            MessageRecord::with_headers("m1", vec![received("from a [1.2.3.4] by mx")]),
            MessageRecord::with_headers("m2", vec![]),
            MessageRecord::with_headers("m3", vec![received("from b [5.6.7.8] by mx")]),
        ];

        let headers = extract_headers(&messages);
        let origins = parser.parse_batch(&headers);

        assert_eq!(origins.len(), 3);
        assert_eq!(origins[0].ip, "1.2.3.4");
        assert!(origins[1].is_sentinel());
        assert_eq!(origins[2].ip, "5.6.7.8");
    }

    #[test]
    fn extract_headers_handles_missing_payload() {
        let messages = vec![MessageRecord {
            id: "bare".into(),
            internal_date: None,
            snippet: None,
            history_id: None,
            label_ids: vec![],
            payload: None,
            size_estimate: None,
        }];

        let headers = extract_headers(&messages);
        assert_eq!(headers.len(), 1);
        assert!(headers[0].is_empty());
    }
}
