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

//! Canonicalization of the request-URI.

use crate::constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET};
use percent_encoding::{percent_decode_str, percent_encode, utf8_percent_encode};
use std::collections::BTreeMap;

/// The canonical form of a request-URI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalUri {
    /// Normalized and percent-encoded path, always starting with `/` for
    /// absolute input.
    pub path: String,
    /// Sorted and re-encoded query string without the leading `?`.
    pub query: String,
}

/// Canonicalize a raw request-URI into its path and query parts.
///
/// ```
/// use rawsign_aws_v4::canonicalize_uri;
///
/// let uri = canonicalize_uri("/foo/../bar?b=2&a=1");
/// assert_eq!(uri.path, "/bar");
/// assert_eq!(uri.query, "a=1&b=2");
/// ```
pub fn canonicalize_uri(request_uri: &str) -> CanonicalUri {
    let (path, query) = request_uri.split_once('?').unwrap_or((request_uri, ""));

    CanonicalUri {
        path: canonicalize_path(path),
        query: canonicalize_query(query),
    }
}

/// Normalize `path` and percent-encode it, keeping `/` unencoded.
///
/// The path is not decoded first: an already encoded `%20` becomes `%2520`.
pub fn canonicalize_path(path: &str) -> String {
    utf8_percent_encode(&normalize_path(path), &AWS_URI_ENCODE_SET).to_string()
}

/// Resolve `.` and `..` segments and collapse repeated `/`.
///
/// A trailing `/` survives normalization. `..` above the root of an absolute
/// path is dropped, in a relative path it is kept.
fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if !absolute => segments.push(".."),
                _ => {}
            },
            _ => segments.push(segment),
        }
    }

    let mut normalized = String::with_capacity(path.len());
    if absolute {
        normalized.push('/');
    }
    normalized.push_str(&segments.join("/"));
    if trailing && !normalized.ends_with('/') {
        normalized.push('/');
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Canonicalize a raw query string.
///
/// Parameters are split on `&` and on the first `=`, decoded with plain
/// percent-decoding (`+` stays `+`), re-encoded with the SigV4 rules and
/// sorted by name then value. Duplicate names keep every value.
///
/// The query ends at the first whitespace, which is where the request-URI of
/// a request line would end. A fragment without `=` does not start a new
/// parameter: it continues the value of the previous one, or, at the start
/// of the query, is carried into the name of the next parameter. Trailing
/// held text becomes a parameter with an empty value.
pub fn canonicalize_query(query: &str) -> String {
    let query = query
        .find(char::is_whitespace)
        .map_or(query, |idx| &query[..idx]);

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in split_query(query) {
        params
            .entry(reencode(&name))
            .or_default()
            .push(reencode(&value));
    }

    let mut pairs = Vec::with_capacity(params.len());
    for (name, mut values) in params {
        values.sort();
        for value in values {
            pairs.push(format!("{name}={value}"));
        }
    }
    pairs.join("&")
}

fn split_query(query: &str) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    let mut held: Option<String> = None;

    for fragment in query.split('&').filter(|f| !f.is_empty()) {
        if fragment.contains('=') {
            let fragment = match held.take() {
                Some(prefix) => format!("{prefix}&{fragment}"),
                None => fragment.to_string(),
            };
            let (name, value) = fragment.split_once('=').unwrap_or((fragment.as_str(), ""));
            params.push((name.to_string(), value.to_string()));
        } else if let Some((_, value)) = params.last_mut() {
            value.push('&');
            value.push_str(fragment);
        } else {
            held = Some(match held {
                Some(prefix) => format!("{prefix}&{fragment}"),
                None => fragment.to_string(),
            });
        }
    }

    if let Some(name) = held {
        params.push((name, String::new()));
    }
    params
}

/// Decode then encode again, byte for byte. Escapes that do not form valid
/// UTF-8 are kept as they are.
fn reencode(s: &str) -> String {
    let decoded: Vec<u8> = percent_decode_str(s).collect();
    percent_encode(&decoded, &AWS_QUERY_ENCODE_SET).to_string()
}
