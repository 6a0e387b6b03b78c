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

use crate::constants::{ALGORITHM, AWS4_PREFIX, AWS4_REQUEST};
use rawsign_core::{Context, Result};
use std::fmt::{Debug, Formatter};

/// A key derived for one `(secret, date, region, service)` scope.
///
/// Deriving takes four HMAC rounds, callers signing many requests in the same
/// scope can derive it once with [`pre_calculate_signing_key`] and reuse it.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// `<date>/<region>/<service>/aws4_request`
pub fn credential_scope(date: &str, region: &str, service: &str) -> String {
    format!("{date}/{region}/{service}/{AWS4_REQUEST}")
}

/// ```text
/// AWS4-HMAC-SHA256
/// 20110909T233600Z
/// 20110909/us-east-1/iam/aws4_request
/// 3511de7e95d28ecd39e9513b642aee07e54f4941150d8df8bf94b328ef7e55e2
/// ```
pub fn build_string_to_sign(
    date_time: &str,
    scope: &str,
    hashed_canonical_request: &str,
) -> String {
    [ALGORITHM, date_time, scope, hashed_canonical_request].join("\n")
}

/// Derive the signing key.
///
/// `date` is the `YYYYMMDD` day of the signing time. Every round's raw output
/// keys the next round.
pub async fn pre_calculate_signing_key(
    ctx: &Context,
    secret_access_key: &str,
    date: &str,
    region: &str,
    service: &str,
) -> Result<SigningKey> {
    let mut key = format!("{AWS4_PREFIX}{secret_access_key}").into_bytes();
    for input in [date, region, service, AWS4_REQUEST] {
        key = ctx.hmac(&key, input.as_bytes()).await?;
    }

    Ok(SigningKey(key))
}

/// Hex signature of `string_to_sign` under an already derived key.
pub async fn pre_calculated_sign(
    ctx: &Context,
    key: &SigningKey,
    string_to_sign: &str,
) -> Result<String> {
    ctx.hmac_hex(key.as_bytes(), string_to_sign.as_bytes()).await
}

/// Derive the signing key and sign `string_to_sign` with it.
pub async fn sign(
    ctx: &Context,
    secret_access_key: &str,
    date: &str,
    region: &str,
    service: &str,
    string_to_sign: &str,
) -> Result<String> {
    let key = pre_calculate_signing_key(ctx, secret_access_key, date, region, service).await?;
    pre_calculated_sign(ctx, &key, string_to_sign).await
}
