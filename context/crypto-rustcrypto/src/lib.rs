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

//! RustCrypto based hashing implementation for rawsign.
//!
//! This crate provides `RustCrypto`, a backend that implements the `Crypto`
//! trait from `rawsign_core` using the pure Rust `sha2` and `hmac` crates.
//!
//! ## Example
//!
//! ```
//! use rawsign_core::Context;
//! use rawsign_crypto_rustcrypto::RustCrypto;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_crypto(RustCrypto);
//!
//!     let digest = ctx.hash(b"").await.expect("hash must succeed");
//!     assert_eq!(
//!         digest,
//!         "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//!     );
//! }
//! ```

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use rawsign_core::{Crypto, Error, Result};
use sha2::{Digest, Sha256};

/// Pure Rust implementation of the `Crypto` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCrypto;

impl RustCrypto {
    fn mac(key: &[u8], data: &[u8]) -> Result<Hmac<Sha256>> {
        let mut h = Hmac::<Sha256>::new_from_slice(key)
            .map_err(|e| Error::crypto_failed(format!("failed to build hmac key: {e}")))?;
        h.update(data);
        Ok(h)
    }
}

#[async_trait]
impl Crypto for RustCrypto {
    async fn hash(&self, data: &[u8]) -> Result<String> {
        Ok(hex::encode(Sha256::digest(data).as_slice()))
    }

    async fn hmac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::mac(key, data)?.finalize().into_bytes().to_vec())
    }

    // Skip the intermediate Vec.
    async fn hmac_hex(&self, key: &[u8], data: &[u8]) -> Result<String> {
        Ok(hex::encode(Self::mac(key, data)?.finalize().into_bytes()))
    }
}
