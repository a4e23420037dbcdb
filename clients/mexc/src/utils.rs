use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Milliseconds since the Unix epoch, as sent in the `Request-Time` header.
pub fn timestamp_ms() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}

/// Query-escape a single value: only ASCII alphanumerics and `-_.~` stay
/// literal, everything else is `%XX`, and space is `%20` rather than `+`.
fn encode_value(value: &str) -> String {
    // byte_serialize keeps `*` and escapes `~`; a literal '+' or '%' is already
    // escaped, so every '+' left is a space and every %7E came from '~'
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}

/// Build the canonical parameter string used as signing input.
///
/// Keys are sorted by byte order and joined as `k=v&k=v`. Values are
/// percent-encoded, keys are taken as is. An empty input yields `""`.
pub fn canonicalize<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = params.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k.as_ref(), encode_value(v.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

/// HMAC-SHA256(secret_key, access_key + request_time + params) -> lowercase hex.
pub fn sign(access_key: &str, secret_key: &str, request_time: &str, params: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(access_key.as_bytes());
    mac.update(request_time.as_bytes());
    mac.update(params.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
