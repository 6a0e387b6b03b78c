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

//! AWS SigV4 signer for raw HTTP requests.
//!
//! The crate takes request text as it would appear on the wire, builds the
//! SigV4 canonical request from it and renders the signature back into the
//! text (or into a presigned request-URI). Hashing is delegated to the
//! [`Crypto`](rawsign_core::Crypto) backend configured in the [`Context`](rawsign_core::Context).
//!
//! ```
//! use rawsign_aws_v4::{Credential, RequestSigner};
//! use rawsign_core::time::parse_iso8601;
//! use rawsign_core::Context;
//! use rawsign_crypto_rustcrypto::RustCrypto;
//!
//! # #[tokio::main]
//! # async fn main() -> rawsign_core::Result<()> {
//! let ctx = Context::new().with_crypto(RustCrypto);
//! let cred = Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY");
//! let signer =
//!     RequestSigner::new("service", "us-east-1").with_time(parse_iso8601("20150830T123600Z")?);
//!
//! let signed = signer
//!     .sign_raw(
//!         &ctx,
//!         &cred,
//!         "GET / HTTP/1.1\nHost:example.amazonaws.com\nX-Amz-Date:20150830T123600Z",
//!     )
//!     .await?;
//! assert!(signed.ends_with(
//!     "Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
//! ));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::EMPTY_STRING_SHA256;
pub use constants::UNSIGNED_PAYLOAD;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod parse;
pub use parse::parse_head;
pub use parse::parse_request;
pub use parse::Head;
pub use parse::RawRequest;

mod uri;
pub use uri::canonicalize_path;
pub use uri::canonicalize_query;
pub use uri::canonicalize_uri;
pub use uri::CanonicalUri;

mod header;
pub use header::canonicalize_headers;
pub use header::CanonicalHeaders;

mod canonical_request;
pub use canonical_request::build_canonical_request;
pub use canonical_request::build_canonical_request_with_payload_hash;
pub use canonical_request::request_to_canonical_request;

mod sign;
pub use sign::build_string_to_sign;
pub use sign::credential_scope;
pub use sign::pre_calculate_signing_key;
pub use sign::pre_calculated_sign;
pub use sign::sign;
pub use sign::SigningKey;

mod format;
pub use format::add_authorization;
pub use format::build_authorization;
pub use format::querystringify;
pub use format::QueryAuthorization;

mod sign_request;
pub use sign_request::RequestSigner;

pub use rawsign_core::time::{format_date, format_iso8601};
