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

use crate::{Crypto, Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the capabilities used during request signing.
///
/// ## Important
///
/// rawsign provides NO default crypto implementation in this crate. Users MUST
/// configure one of the `rawsign-crypto-*` backends (or their own).
/// Any unconfigured component will use a no-op implementation that returns
/// errors or empty values when called.
///
/// ## Example
///
/// ```
/// use rawsign_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    crypto: Arc<dyn Crypto>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("crypto", &self.crypto)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    ///
    /// ```
    /// use rawsign_core::Context;
    ///
    /// let ctx = Context::new();
    /// // You can configure specific components as needed:
    /// // ctx.with_crypto(my_backend)
    /// //    .with_env(my_env_provider);
    /// ```
    pub fn new() -> Self {
        Self {
            crypto: Arc::new(NoopCrypto),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the crypto implementation.
    pub fn with_crypto(mut self, crypto: impl Crypto) -> Self {
        self.crypto = Arc::new(crypto);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Hex encoded SHA-256 digest of `data`.
    #[inline]
    pub async fn hash(&self, data: &[u8]) -> Result<String> {
        self.crypto.hash(data).await
    }

    /// Raw HMAC-SHA256 of `data` under `key`.
    #[inline]
    pub async fn hmac(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        self.crypto.hmac(key, data).await
    }

    /// Hex encoded HMAC-SHA256 of `data` under `key`.
    #[inline]
    pub async fn hmac_hex(&self, key: &[u8], data: &[u8]) -> Result<String> {
        self.crypto.hmac_hex(key, data).await
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }
}

/// Permits parameterizing the environment lookups.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopEnv is a no-op implementation that always returns None.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// NoopCrypto is a no-op implementation that always returns an error.
///
/// This is used when no crypto backend is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCrypto;

#[async_trait::async_trait]
impl Crypto for NoopCrypto {
    async fn hash(&self, _data: &[u8]) -> Result<String> {
        Err(Error::crypto_failed(
            "hashing not supported: no crypto backend configured",
        ))
    }

    async fn hmac(&self, _key: &[u8], _data: &[u8]) -> Result<Vec<u8>> {
        Err(Error::crypto_failed(
            "hmac not supported: no crypto backend configured",
        ))
    }
}
