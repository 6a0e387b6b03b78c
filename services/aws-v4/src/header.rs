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

use std::collections::BTreeMap;

/// Canonical header block and signed header list of a request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalHeaders {
    /// `name:value` lines sorted by name, joined by `\n`, without a trailing newline.
    pub canonical: String,
    /// Sorted lowercase header names joined by `;`.
    pub signed: String,
}

/// Canonicalize raw header lines.
///
/// Each line is split on the first `:`. Names are trimmed and lowercased,
/// whitespace runs inside values collapse to a single space. Repeated names
/// keep all their values in order, joined by `,`.
///
/// A line without `:` is a folded continuation and becomes another value of
/// the previous header. With no previous header it is taken as a name with an
/// empty value.
pub fn canonicalize_headers(lines: &[&str]) -> CanonicalHeaders {
    let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut last: Option<String> = None;

    for line in lines.iter().filter(|l| !l.trim().is_empty()) {
        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name.trim().to_lowercase(), value),
            None => match &last {
                Some(name) => (name.clone(), *line),
                None => (line.trim().to_lowercase(), ""),
            },
        };

        headers
            .entry(name.clone())
            .or_default()
            .push(collapse_whitespace(value));
        last = Some(name);
    }

    let canonical = headers
        .iter()
        .map(|(name, values)| format!("{name}:{}", values.join(",")))
        .collect::<Vec<_>>()
        .join("\n");
    let signed = headers
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";");

    CanonicalHeaders { canonical, signed }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
