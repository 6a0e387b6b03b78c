// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Parsing of raw HTTP request text.

use rawsign_core::{Error, Result};

/// A raw request split into its head and body.
///
/// Both parts borrow from the original text, nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRequest<'a> {
    /// Request line and header lines.
    pub head: &'a str,
    /// The blank line between head and body as it appears in the text, empty
    /// if there is none.
    pub separator: &'a str,
    /// Everything after the first blank line, empty if there is none.
    pub body: &'a str,
    /// `"\r\n"` if the head contains one, `"\n"` otherwise.
    pub line_ending: &'static str,
}

/// The components of a request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head<'a> {
    /// Request method, e.g. `GET`.
    pub method: &'a str,
    /// Raw request-URI, path plus optional `?query`. May contain spaces.
    pub request_uri: &'a str,
    /// HTTP version token, e.g. `HTTP/1.1`.
    pub http_version: &'a str,
    /// Raw header lines in their original order.
    pub headers: Vec<&'a str>,
}

/// Split a raw request into head and body on the first blank line.
///
/// The earliest of `\r\n\r\n` and `\n\n` wins. A request without a blank
/// line has no body.
pub fn parse_request(raw: &str) -> RawRequest<'_> {
    let split = match (raw.find("\r\n\r\n"), raw.find("\n\n")) {
        (Some(c), Some(l)) if c < l => Some((c, 4)),
        (_, Some(l)) => Some((l, 2)),
        (Some(c), None) => Some((c, 4)),
        (None, None) => None,
    };

    let (head, separator, body) = match split {
        Some((idx, len)) => (&raw[..idx], &raw[idx..idx + len], &raw[idx + len..]),
        None => (raw, "", ""),
    };

    RawRequest {
        head,
        separator,
        body,
        line_ending: line_ending_of(head),
    }
}

fn line_ending_of(head: &str) -> &'static str {
    if head.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Parse a request head into method, request-URI, version and header lines.
///
/// Empty header lines are dropped, a trailing `\r` is stripped from every line.
pub fn parse_head(head: &str) -> Result<Head<'_>> {
    let mut lines = head.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

    let request_line = lines.next().unwrap_or_default();
    let (method, request_uri, http_version) = parse_request_line(request_line)?;

    Ok(Head {
        method,
        request_uri,
        http_version,
        headers: lines.filter(|l| !l.trim().is_empty()).collect(),
    })
}

/// Extract `(method, request_uri, http_version)` from a request line.
///
/// The method is the leading run of ASCII letters and the version the trailing
/// `HTTP/d.d` token. Everything in between is the request-URI, which is why
/// this does not split on whitespace.
fn parse_request_line(line: &str) -> Result<(&str, &str, &str)> {
    let start = line.len() - line.trim_start().len();
    let method_len = line[start..]
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .count();
    let method_end = start + method_len;
    let followed_by_space = line[method_end..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    if method_len == 0 || !followed_by_space {
        return Err(Error::request_invalid(format!(
            "request line has no method: {line:?}"
        )));
    }
    // Skip exactly one separator, the URI keeps anything beyond it.
    let uri_start = method_end + line[method_end..].chars().next().map_or(0, char::len_utf8);

    let trimmed = line.trim_end();
    let version_start = trimmed
        .rfind(char::is_whitespace)
        .map(|idx| idx + trimmed[idx..].chars().next().map_or(1, char::len_utf8))
        .ok_or_else(|| {
            Error::request_invalid(format!("request line has no http version: {line:?}"))
        })?;
    let http_version = &trimmed[version_start..];
    if !is_http_version(http_version) {
        return Err(Error::request_invalid(format!(
            "request line has no http version: {line:?}"
        )));
    }

    let uri_end = trimmed[..version_start].trim_end().len();
    let request_uri = if uri_start <= uri_end {
        &line[uri_start..uri_end]
    } else {
        ""
    };

    Ok((&line[start..method_end], request_uri, http_version))
}

/// Matches `HTTP/<digits>.<digits>`, case-insensitive.
fn is_http_version(token: &str) -> bool {
    let Some(prefix) = token.get(..5) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("http/") {
        return false;
    }

    match token[5..].split_once('.') {
        Some((major, minor)) => {
            !major.is_empty()
                && !minor.is_empty()
                && major.bytes().all(|b| b.is_ascii_digit())
                && minor.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
