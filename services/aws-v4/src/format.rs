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

use crate::constants::{
    ALGORITHM, X_AMZ_ALGORITHM_QUERY, X_AMZ_CREDENTIAL_QUERY, X_AMZ_DATE_QUERY,
    X_AMZ_EXPIRES_QUERY, X_AMZ_SIGNATURE_QUERY, X_AMZ_SIGNED_HEADERS_QUERY,
};
use crate::parse::parse_request;

/// Render the value of an `Authorization` header.
///
/// ```
/// use rawsign_aws_v4::build_authorization;
///
/// assert_eq!(
///     build_authorization("AKIDEXAMPLE", "20110909/us-east-1/iam/aws4_request", "host", "abc"),
///     "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request, SignedHeaders=host, Signature=abc"
/// );
/// ```
pub fn build_authorization(
    access_key_id: &str,
    scope: &str,
    signed_headers: &str,
    signature: &str,
) -> String {
    format!("{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}")
}

/// Everything a presigned query string carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryAuthorization<'a> {
    /// Access key id, the first part of `X-Amz-Credential`.
    pub access_key_id: &'a str,
    /// Credential scope, the rest of `X-Amz-Credential`.
    pub scope: &'a str,
    /// Signing time in ISO 8601 basic format.
    pub date_time: &'a str,
    /// Validity in seconds.
    pub expires: u64,
    /// `;` separated signed header names.
    pub signed_headers: &'a str,
    /// Hex signature.
    pub signature: &'a str,
}

/// Append the presigning parameters to `action` in their fixed order.
///
/// `action` is kept verbatim, so it should already end with `&` (or `?`) when
/// it is not empty. Values are form encoded: `/` becomes `%2F`, space `+`.
pub fn querystringify(action: &str, auth: &QueryAuthorization<'_>) -> String {
    let credential = format!("{}/{}", auth.access_key_id, auth.scope);
    let expires = auth.expires.to_string();

    // Appended pairs start after `action`, no separator is put in between.
    form_urlencoded::Serializer::for_suffix(action.to_string(), action.len())
        .append_pair(X_AMZ_ALGORITHM_QUERY, ALGORITHM)
        .append_pair(X_AMZ_CREDENTIAL_QUERY, &credential)
        .append_pair(X_AMZ_DATE_QUERY, auth.date_time)
        .append_pair(X_AMZ_EXPIRES_QUERY, &expires)
        .append_pair(X_AMZ_SIGNED_HEADERS_QUERY, auth.signed_headers)
        .append_pair(X_AMZ_SIGNATURE_QUERY, auth.signature)
        .finish()
}

/// Insert the `Authorization` header, and the session token header when
/// given, at the end of the head of a raw request.
///
/// The request's own line ending and blank line are kept and the body is left
/// untouched.
pub fn add_authorization(raw: &str, authorization: &str, security_token: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(2);
    if let Some(token) = security_token {
        lines.push(format!("X-Amz-Security-Token:{token}"));
    }
    lines.push(format!("Authorization: {authorization}"));

    append_header_lines(raw, &lines)
}

/// Append `lines` after the last header line of `raw`.
pub(crate) fn append_header_lines(raw: &str, lines: &[String]) -> String {
    let request = parse_request(raw);
    let sep = request.line_ending;

    let extra: usize = lines.iter().map(|l| l.len() + sep.len()).sum();
    let mut out = String::with_capacity(raw.len() + extra);
    out.push_str(request.head);
    for line in lines {
        out.push_str(sep);
        out.push_str(line);
    }

    if !request.body.is_empty() {
        out.push_str(request.separator);
        out.push_str(request.body);
    }
    out
}
