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

//! aws-lc-rs based hashing implementation for rawsign.
//!
//! This crate provides `AwsLcCrypto`, a backend that implements the `Crypto`
//! trait from `rawsign_core` on top of the AWS-LC native library. It produces
//! exactly the same output as `rawsign-crypto-rustcrypto` and can be used
//! wherever a FIPS capable or assembly optimized backend is preferred.
//!
//! ## Example
//!
//! ```
//! use rawsign_core::Context;
//! use rawsign_crypto_aws_lc::AwsLcCrypto;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_crypto(AwsLcCrypto);
//!
//!     let tag = ctx.hmac_hex(b"key", b"").await.expect("hmac must succeed");
//!     assert_eq!(tag.len(), 64);
//! }
//! ```

use async_trait::async_trait;
use aws_lc_rs::{digest, hmac};
use rawsign_core::{Crypto, Result};

/// AWS-LC implementation of the `Crypto` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsLcCrypto;

#[async_trait]
impl Crypto for AwsLcCrypto {
    async fn hash(&self, data: &[u8]) -> Result<String> {
        Ok(hex::encode(digest::digest(&digest::SHA256, data)))
    }

    async fn hmac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        Ok(hmac::sign(&key, data).as_ref().to_vec())
    }

    async fn hmac_hex(&self, key: &[u8], data: &[u8]) -> Result<String> {
        let key = hmac::Key::new(hmac::HMAC_SHA256, key);
        Ok(hex::encode(hmac::sign(&key, data)))
    }
}
