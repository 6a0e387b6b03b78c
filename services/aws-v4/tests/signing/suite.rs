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

//! The AWS SigV4 test suite.
//!
//! Every group under `testdata/aws4_testsuite` holds a request (`.req`) and
//! the canonical request, string to sign, authorization and signed request
//! derived from it, all signed for `service` in `us-east-1` at
//! `20150830T123600Z` with the example credential.

use super::contexts;
use anyhow::{Context as _, Result};
use pretty_assertions::assert_eq;
use rawsign_aws_v4::{
    add_authorization, build_authorization, build_string_to_sign, credential_scope,
    request_to_canonical_request, sign, Credential, RequestSigner,
};
use rawsign_core::time::parse_rfc2822;
use std::fs;
use std::path::{Path, PathBuf};

const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
const DATE: &str = "20150830";
const DATE_TIME: &str = "20150830T123600Z";
const REGION: &str = "us-east-1";
const SERVICE: &str = "service";

/// Session token of the group that adds `X-Amz-Security-Token` after signing.
const TOKEN: &str = "AQoDYXdzEPT//////////wEXAMPLEtc764bNrC9SAPBSM22wDOk4x4HIZ8j4FZTwdQWLWsKWHGBuFqwAeMicRXmxfpSPfIeoIYRqTflfKD8YUuwthAx7mSEI/qkPpKPi/kMcGdQrmGdeehM4IC1NtBmUpp2wUE8phUZampKsburEDy0KPkyQDYwT7WZ0wq5VSXDvp75YU9HFvlRd8Tx6q6fE8YQcHNVXAkiY9q6d+xo0rKwT38xVqr7ZD0u0iPPkUL64lIZbqBAz+scqKmlzm8FDrypNC9Yjc8fPOLn9FX9KSYvKTr4rvx3iSIlTJabIQwj2ICCR/oLxBA==";

#[derive(Debug)]
struct Case {
    name: String,
    req: String,
    creq: String,
    sts: String,
    authz: String,
    sreq: String,
}

impl Case {
    fn load(dir: &Path) -> Result<Option<Case>> {
        let Some(name) = dir.file_name().and_then(|v| v.to_str()) else {
            return Ok(None);
        };
        if !dir.join(format!("{name}.req")).exists() {
            return Ok(None);
        }

        let read = |ext: &str| -> Result<String> {
            let path = dir.join(format!("{name}.{ext}"));
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
        };

        Ok(Some(Case {
            name: name.to_string(),
            req: read("req")?,
            creq: read("creq")?,
            sts: read("sts")?,
            authz: read("authz")?,
            sreq: read("sreq")?,
        }))
    }

    /// Only one group expects the token to be appended to a signed request.
    fn token(&self) -> Option<&'static str> {
        (self.name == "post-sts-header-after").then_some(TOKEN)
    }

    fn signed_headers(&self) -> &str {
        self.creq.lines().rev().nth(1).unwrap_or_default()
    }
}

fn collect(dir: &Path, cases: &mut Vec<Case>) -> Result<()> {
    if let Some(case) = Case::load(dir)? {
        cases.push(case);
    }

    let mut children = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?;
    children.sort();
    for child in children.into_iter().filter(|p| p.is_dir()) {
        collect(&child, cases)?;
    }
    Ok(())
}

fn cases() -> Result<Vec<Case>> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/aws4_testsuite");
    let mut cases = Vec::new();
    collect(&root, &mut cases)?;
    assert_eq!(cases.len(), 31, "test suite is incomplete");
    Ok(cases)
}

#[tokio::test]
async fn test_canonical_request() -> Result<()> {
    for (backend, ctx) in contexts() {
        for case in cases()? {
            let creq = request_to_canonical_request(&ctx, &case.req).await?;
            assert_eq!(creq, case.creq, "{} on {backend}", case.name);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_string_to_sign() -> Result<()> {
    let scope = credential_scope(DATE, REGION, SERVICE);

    for (backend, ctx) in contexts() {
        for case in cases()? {
            let hashed = ctx.hash(case.creq.as_bytes()).await?;
            let sts = build_string_to_sign(DATE_TIME, &scope, &hashed);
            assert_eq!(sts, case.sts, "{} on {backend}", case.name);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_authorization() -> Result<()> {
    let scope = credential_scope(DATE, REGION, SERVICE);

    for (backend, ctx) in contexts() {
        for case in cases()? {
            let signature = sign(&ctx, SECRET_ACCESS_KEY, DATE, REGION, SERVICE, &case.sts).await?;
            let authz =
                build_authorization(ACCESS_KEY_ID, &scope, case.signed_headers(), &signature);
            assert_eq!(authz, case.authz, "{} on {backend}", case.name);
        }
    }
    Ok(())
}

#[test]
fn test_signed_request() -> Result<()> {
    for case in cases()? {
        let sreq = add_authorization(&case.req, &case.authz, case.token());
        assert_eq!(sreq, case.sreq, "{}", case.name);
    }
    Ok(())
}

#[tokio::test]
async fn test_request_signer() -> Result<()> {
    let time = parse_rfc2822("Sun, 30 Aug 2015 12:36:00 GMT")?;
    let signer = RequestSigner::new(SERVICE, REGION).with_time(time);

    for (backend, ctx) in contexts() {
        for case in cases()? {
            let mut cred = Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY);
            if let Some(token) = case.token() {
                cred = cred.with_session_token(token);
            }

            let sreq = signer.sign_raw(&ctx, &cred, &case.req).await?;
            assert_eq!(sreq, case.sreq, "{} on {backend}", case.name);
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_request_signer_reads_request_time() -> Result<()> {
    let signer = RequestSigner::new(SERVICE, REGION);

    for (backend, ctx) in contexts() {
        for case in cases()? {
            let mut cred = Credential::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY);
            if let Some(token) = case.token() {
                cred = cred.with_session_token(token);
            }

            let sreq = signer.sign_raw(&ctx, &cred, &case.req).await?;
            assert_eq!(sreq, case.sreq, "{} on {backend}", case.name);
        }
    }
    Ok(())
}
