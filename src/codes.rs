use {once_cell::sync::Lazy, std::collections::BTreeMap};

/// The server has received the request headers and the client should proceed to send the request body.
pub const CONTINUE: u16 = 100;
/// The server is switching to the protocol named in the client's `Upgrade` header.
pub const SWITCHING_PROTOCOLS: u16 = 101;
/// The server has accepted the request but has not completed it yet. (WebDAV)
pub const PROCESSING: u16 = 102;
/// Lets the client start preloading resources while the server prepares the final response.
pub const EARLY_HINTS: u16 = 103;

/// The request succeeded.
pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const ACCEPTED: u16 = 202;
/// The returned metadata comes from a transforming proxy rather than the origin server.
pub const NON_AUTHORITATIVE_INFO: u16 = 203;
pub const NO_CONTENT: u16 = 204;
pub const RESET_CONTENT: u16 = 205;
/// The body holds only the byte ranges named by the request's `Range` header.
pub const PARTIAL_CONTENT: u16 = 206;
pub const MULTI_STATUS: u16 = 207;
pub const ALREADY_REPORTED: u16 = 208;
/// The response is the result of instance manipulations applied to the current instance. (RFC 3229)
pub const IM_USED: u16 = 226;

pub const MULTIPLE_CHOICES: u16 = 300;
/// The resource has a new permanent URL given in the `Location` header.
pub const MOVED_PERMANENTLY: u16 = 301;
pub const FOUND: u16 = 302;
pub const SEE_OTHER: u16 = 303;
pub const NOT_MODIFIED: u16 = 304;
/// Deprecated; kept because clients still report it.
pub const USE_PROXY: u16 = 305;
/// Repeat the request at another URL without changing the method. Unlike 302 the method must not change.
pub const TEMPORARY_REDIRECT: u16 = 307;
/// Like 301, but the method and body must not change when following the redirect.
pub const PERMANENT_REDIRECT: u16 = 308;

/// The server was unable to parse the client's request, presumably due to a malformed request.
pub const BAD_REQUEST: u16 = 400;
/// The request lacks valid authentication credentials.
pub const UNAUTHORIZED: u16 = 401;
pub const PAYMENT_REQUIRED: u16 = 402;
/// The client is known but does not have access rights to the resource.
pub const FORBIDDEN: u16 = 403;
/// The requested resource could not be found but may be available in the future.
pub const NOT_FOUND: u16 = 404;
pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const NOT_ACCEPTABLE: u16 = 406;
pub const PROXY_AUTH_REQUIRED: u16 = 407;
pub const REQUEST_TIMEOUT: u16 = 408;
pub const CONFLICT: u16 = 409;
/// The resource requested is no longer available and will not be available again. Search engines
/// and similar tools should remove this resource from their indices.
pub const GONE: u16 = 410;
pub const LENGTH_REQUIRED: u16 = 411;
pub const PRECONDITION_FAILED: u16 = 412;
pub const REQUEST_ENTITY_TOO_LARGE: u16 = 413;
pub const REQUEST_URI_TOO_LONG: u16 = 414;
pub const UNSUPPORTED_MEDIA_TYPE: u16 = 415;
pub const REQUESTED_RANGE_NOT_SATISFIABLE: u16 = 416;
pub const EXPECTATION_FAILED: u16 = 417;
/// The server refuses to brew coffee because it is, permanently, a teapot. (RFC 2324)
pub const IM_A_TEAPOT: u16 = 418;
/// The request was sent to a server that cannot produce a response for this scheme and authority.
pub const MISDIRECTED_REQUEST: u16 = 421;
pub const UNPROCESSABLE_ENTITY: u16 = 422;
pub const LOCKED: u16 = 423;
pub const FAILED_DEPENDENCY: u16 = 424;
/// The server is unwilling to process a request that might be replayed. (RFC 8470)
pub const TOO_EARLY: u16 = 425;
pub const UPGRADE_REQUIRED: u16 = 426;
pub const PRECONDITION_REQUIRED: u16 = 428;
/// The client has sent too many requests in a given amount of time.
pub const TOO_MANY_REQUESTS: u16 = 429;
pub const REQUEST_HEADER_FIELDS_TOO_LARGE: u16 = 431;
/// The resource cannot be served for legal reasons, such as government censorship.
pub const UNAVAILABLE_FOR_LEGAL_REASONS: u16 = 451;

/// A generic error: the server met an unexpected condition.
pub const INTERNAL_SERVER_ERROR: u16 = 500;
pub const NOT_IMPLEMENTED: u16 = 501;
/// The server, acting as a gateway or proxy, got an invalid response from upstream.
pub const BAD_GATEWAY: u16 = 502;
/// The server is overloaded or down for maintenance.
pub const SERVICE_UNAVAILABLE: u16 = 503;
pub const GATEWAY_TIMEOUT: u16 = 504;
pub const HTTP_VERSION_NOT_SUPPORTED: u16 = 505;
pub const VARIANT_ALSO_NEGOTIATES: u16 = 506;
pub const INSUFFICIENT_STORAGE: u16 = 507;
pub const LOOP_DETECTED: u16 = 508;
pub const NOT_EXTENDED: u16 = 510;
pub const NETWORK_AUTHENTICATION_REQUIRED: u16 = 511;

/// Every known status code with its reason phrase, in ascending blocks by class.
static TABLE: [(u16, &str); 62] = [
    // 100s
    (CONTINUE, "Continue"),
    (SWITCHING_PROTOCOLS, "Switching Protocols"),
    (PROCESSING, "Processing"),
    (EARLY_HINTS, "Early Hints"),
    // 200s
    (OK, "OK"),
    (CREATED, "Created"),
    (ACCEPTED, "Accepted"),
    (NON_AUTHORITATIVE_INFO, "Non-Authoritative Information"),
    (NO_CONTENT, "No Content"),
    (RESET_CONTENT, "Reset Content"),
    (PARTIAL_CONTENT, "Partial Content"),
    (MULTI_STATUS, "Multi-Status"),
    (ALREADY_REPORTED, "Already Reported"),
    (IM_USED, "IM Used"),
    // 300s
    (MULTIPLE_CHOICES, "Multiple Choices"),
    (MOVED_PERMANENTLY, "Moved Permanently"),
    (FOUND, "Found"),
    (SEE_OTHER, "See Other"),
    (NOT_MODIFIED, "Not Modified"),
    (USE_PROXY, "Use Proxy"),
    (TEMPORARY_REDIRECT, "Temporary Redirect"),
    (PERMANENT_REDIRECT, "Permanent Redirect"),
    // 400s
    (BAD_REQUEST, "Bad Request"),
    (UNAUTHORIZED, "Unauthorized"),
    (PAYMENT_REQUIRED, "Payment Required"),
    (FORBIDDEN, "Forbidden"),
    (NOT_FOUND, "Not Found"),
    (METHOD_NOT_ALLOWED, "Method Not Allowed"),
    (NOT_ACCEPTABLE, "Not Acceptable"),
    (PROXY_AUTH_REQUIRED, "Proxy Authentication Required"),
    (REQUEST_TIMEOUT, "Request Timeout"),
    (CONFLICT, "Conflict"),
    (GONE, "Gone"),
    (LENGTH_REQUIRED, "Length Required"),
    (PRECONDITION_FAILED, "Precondition Failed"),
    (REQUEST_ENTITY_TOO_LARGE, "Request Entity Too Large"),
    (REQUEST_URI_TOO_LONG, "Request URI Too Long"),
    (UNSUPPORTED_MEDIA_TYPE, "Unsupported Media Type"),
    (REQUESTED_RANGE_NOT_SATISFIABLE, "Requested Range Not Satisfiable"),
    (EXPECTATION_FAILED, "Expectation Failed"),
    (IM_A_TEAPOT, "I'm a teapot"),
    (MISDIRECTED_REQUEST, "Misdirected Request"),
    (UNPROCESSABLE_ENTITY, "Unprocessable Entity"),
    (LOCKED, "Locked"),
    (FAILED_DEPENDENCY, "Failed Dependency"),
    (TOO_EARLY, "Too Early"),
    (UPGRADE_REQUIRED, "Upgrade Required"),
    (PRECONDITION_REQUIRED, "Precondition Required"),
    (TOO_MANY_REQUESTS, "Too Many Requests"),
    (REQUEST_HEADER_FIELDS_TOO_LARGE, "Request Header Fields Too Large"),
    (UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
    // 500s
    (INTERNAL_SERVER_ERROR, "Internal Server Error"),
    (NOT_IMPLEMENTED, "Not Implemented"),
    (BAD_GATEWAY, "Bad Gateway"),
    (SERVICE_UNAVAILABLE, "Service Unavailable"),
    (GATEWAY_TIMEOUT, "Gateway Timeout"),
    (HTTP_VERSION_NOT_SUPPORTED, "HTTP Version Not Supported"),
    (VARIANT_ALSO_NEGOTIATES, "Variant Also Negotiates"),
    (INSUFFICIENT_STORAGE, "Insufficient Storage"),
    (LOOP_DETECTED, "Loop Detected"),
    (NOT_EXTENDED, "Not Extended"),
    (NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
];

/// All known codes, in the order the table defines them.
pub static STATUS_CODES: Lazy<Vec<u16>> = Lazy::new(|| TABLE.iter().map(|&(code, _)| code).collect());

static REASONS: Lazy<BTreeMap<u16, &'static str>> = Lazy::new(|| TABLE.iter().copied().collect());

/// Returns the canonical reason phrase for `code`, or `None` if the code is
/// not one we know about.
pub fn reason(code: u16) -> Option<&'static str> {
    REASONS.get(&code).copied()
}
