//! Request headers for the parent API.

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};

/// User agent of the iOS parent app build the gateway expects.
pub const APP_USER_AGENT: &str = "my-bright-day-store/11.180.23 CFNetwork/1496.0.7 Darwin/23.5.0";

/// Build the headers sent with every API request.
///
/// Token and cookie are used verbatim. A bad credential is only noticed when
/// the server rejects it; the one local failure is a value containing bytes
/// that cannot appear in a header at all.
pub fn build_headers(token: &str, cookie: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(4);

    insert(
        &mut headers,
        header::AUTHORIZATION,
        "Authorization",
        &format!("Bearer {}", token),
    )?;
    insert(&mut headers, header::COOKIE, "Cookie", cookie)?;
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_static(APP_USER_AGENT),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}

fn insert(
    headers: &mut HeaderMap,
    name: HeaderName,
    label: &'static str,
    value: &str,
) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(label))?;
    headers.insert(name, value);
    Ok(())
}
