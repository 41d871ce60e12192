use std::borrow::Cow;

use http::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use http::{Method, Request};
use serde::Deserialize;
use url::form_urlencoded;

// https://datatracker.ietf.org/doc/html/rfc7523#section-2.2
pub const CLIENT_ASSERTION_TYPE_JWT_BEARER: &str =
    "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

pub const DEFAULT_GRANT_TYPE: &str = "client_credentials";
pub const DEFAULT_SCOPE: &str = "idv.read";
pub const DEFAULT_RESOURCE: &str = "https://api.tomopayment.com/v1/idv";

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Overrides for the token request parameters. Unset fields use the defaults
/// above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, bon::Builder)]
pub struct BodyOptions<'a> {
    #[builder(into)]
    pub grant_type: Option<Cow<'a, str>>,
    #[builder(into)]
    pub scope: Option<Cow<'a, str>>,
    // https://datatracker.ietf.org/doc/html/rfc8707
    #[builder(into)]
    pub resource: Option<Cow<'a, str>>,
    #[builder(into)]
    pub client_assertion_type: Option<Cow<'a, str>>,
}

/// Headers and form body for a POST to the token endpoint.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub headers: HeaderMap,
    pub body: String,
}

impl TokenRequest {
    /// Token request with every parameter at its default.
    pub fn new(client_assertion: &str) -> Self {
        build_token_request(client_assertion, &BodyOptions::default())
    }

    /// Attach the body and headers to a POST for `uri`.
    pub fn into_http_request(self, uri: &str) -> http::Result<Request<Vec<u8>>> {
        let mut request = Request::builder()
            .uri(uri)
            .method(Method::POST)
            .body(self.body.into_bytes())?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

/// Form-encode the token request for `client_assertion`.
///
/// Parameters are always written in the order `grant_type`, `scope`,
/// `resource`, `client_assertion_type`, `client_assertion`. The assertion is
/// not inspected.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn build_token_request(client_assertion: &str, options: &BodyOptions<'_>) -> TokenRequest {
    let body = form_urlencoded::Serializer::new(String::new())
        .append_pair(
            "grant_type",
            options.grant_type.as_deref().unwrap_or(DEFAULT_GRANT_TYPE),
        )
        .append_pair("scope", options.scope.as_deref().unwrap_or(DEFAULT_SCOPE))
        .append_pair(
            "resource",
            options.resource.as_deref().unwrap_or(DEFAULT_RESOURCE),
        )
        .append_pair(
            "client_assertion_type",
            options
                .client_assertion_type
                .as_deref()
                .unwrap_or(CLIENT_ASSERTION_TYPE_JWT_BEARER),
        )
        .append_pair("client_assertion", client_assertion)
        .finish();

    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
    TokenRequest { headers, body }
}
