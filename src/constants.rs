/// Default base URL of the Pardot API
pub const DEFAULT_BASE_URL: &str = "https://pi.pardot.com/api";
/// API version segment used in every URI
pub const API_VERSION: &str = "3";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Pardot API
pub const USER_AGENT: &str = "pardot-client/0.1.0";
/// Response format requested on every call. Always overrides any caller supplied `format`.
pub const RESPONSE_FORMAT: &str = "json";
/// Value of `@attributes.stat` in a failure document
pub const STATUS_FAIL: &str = "fail";
/// Value of `@attributes.stat` in a successful document
pub const STATUS_OK: &str = "ok";
/// Error code returned by Pardot for "Invalid API key or user key".
///
/// A call failing with this code on a cached session key triggers a single re-login.
pub const INVALID_API_KEY_ERR_CODE: i64 = 1;
