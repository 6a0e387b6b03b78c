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

use crate::Result;
use std::fmt::Debug;

/// Crypto is the hashing capability used by signers.
///
/// Signers only ever need SHA-256 and HMAC-SHA256, so that is all this trait
/// exposes. Implementations are selected per environment (a pure Rust backend,
/// a platform library, ...) and MUST be functionally identical: the same input
/// always yields the same bytes.
///
/// The methods are async so that backends which suspend while waiting for an
/// underlying engine can be plugged in without blocking.
#[async_trait::async_trait]
pub trait Crypto: Debug + Send + Sync + 'static {
    /// Hex encoded (lowercase) SHA-256 digest of `data`.
    async fn hash(&self, data: &[u8]) -> Result<String>;

    /// Raw HMAC-SHA256 of `data` under `key`.
    async fn hmac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;

    /// Hex encoded (lowercase) HMAC-SHA256 of `data` under `key`.
    ///
    /// Use this function instead of `hex::encode(hmac(key, data))` so that
    /// backends can avoid the extra copy.
    async fn hmac_hex(&self, key: &[u8], data: &[u8]) -> Result<String> {
        let tag = self.hmac(key, data).await?;
        Ok(hex::encode(tag))
    }
}
