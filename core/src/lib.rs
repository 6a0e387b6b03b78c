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

//! Core components for signing raw HTTP requests.
//!
//! This crate provides the foundational types shared by the rawsign crates.
//! The signing algorithms never talk to a crypto library or to the process
//! environment directly, they go through a [`Context`] instead.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for hashing/HMAC and environment access
//! - **Crypto**: The capability used by signers to compute SHA-256 digests and HMAC-SHA256 tags
//! - **Env**: The capability used by configuration loaders to read environment variables
//!
//! ## Example
//!
//! ```
//! use async_trait::async_trait;
//! use rawsign_core::{Context, Crypto, Result};
//!
//! // A toy backend, real ones live in the `rawsign-crypto-*` crates.
//! #[derive(Debug)]
//! struct Fixed;
//!
//! #[async_trait]
//! impl Crypto for Fixed {
//!     async fn hash(&self, _: &[u8]) -> Result<String> {
//!         Ok("00".repeat(32))
//!     }
//!
//!     async fn hmac(&self, _: &[u8], _: &[u8]) -> Result<Vec<u8>> {
//!         Ok(vec![0; 32])
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_crypto(Fixed);
//! assert_eq!(ctx.hmac_hex(b"key", b"data").await?, "00".repeat(32));
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`Crypto`]: For hashing and HMAC
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`time`]: Time formatting used by AWS style signers
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::NoopCrypto;
pub use context::NoopEnv;
pub use context::OsEnv;
pub use context::StaticEnv;

mod crypto;
pub use crypto::Crypto;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;
