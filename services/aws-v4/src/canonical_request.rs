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

use crate::constants::EMPTY_STRING_SHA256;
use crate::header::canonicalize_headers;
use crate::parse::{parse_head, parse_request};
use crate::uri::canonicalize_uri;
use rawsign_core::{Context, Result};

/// Build a canonical request, hashing `payload` with the context's crypto.
///
/// An empty payload is not hashed, [`EMPTY_STRING_SHA256`] is used instead.
///
/// ```text
/// POST
/// /
///
/// content-type:application/x-www-form-urlencoded; charset=utf-8
/// host:iam.amazonaws.com
/// x-amz-date:20110909T233600Z
///
/// content-type;host;x-amz-date
/// b6359072c78d70ebee1e81adcbab4f01bf2c23245fa365ef83fe8f1f955085e2
/// ```
pub async fn build_canonical_request(
    ctx: &Context,
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    canonical_headers: &str,
    signed_headers: &str,
    payload: &[u8],
) -> Result<String> {
    let payload_hash = if payload.is_empty() {
        EMPTY_STRING_SHA256.to_string()
    } else {
        ctx.hash(payload).await?
    };

    Ok(build_canonical_request_with_payload_hash(
        method,
        canonical_uri,
        canonical_query,
        canonical_headers,
        signed_headers,
        &payload_hash,
    ))
}

/// Build a canonical request from an already known payload hash, such as
/// `UNSIGNED-PAYLOAD` or the value of `x-amz-content-sha256`.
pub fn build_canonical_request_with_payload_hash(
    method: &str,
    canonical_uri: &str,
    canonical_query: &str,
    canonical_headers: &str,
    signed_headers: &str,
    payload_hash: &str,
) -> String {
    [
        method,
        canonical_uri,
        canonical_query,
        canonical_headers,
        "",
        signed_headers,
        payload_hash,
    ]
    .join("\n")
}

/// Run the whole canonicalization pipeline over raw request text.
pub async fn request_to_canonical_request(ctx: &Context, raw: &str) -> Result<String> {
    let request = parse_request(raw);
    let head = parse_head(request.head)?;
    let uri = canonicalize_uri(head.request_uri);
    let headers = canonicalize_headers(&head.headers);

    build_canonical_request(
        ctx,
        head.method,
        &uri.path,
        &uri.query,
        &headers.canonical,
        &headers.signed,
        request.body.as_bytes(),
    )
    .await
}
