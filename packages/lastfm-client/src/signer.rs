//! Request signatures (`api_sig`)
//!
//! The signature is the MD5 of every transmitted `key + value` pair except
//! `format`, sorted by key bytes and concatenated without separators, with the
//! shared secret appended. The concatenated string holds the secret and is
//! never logged.

use crate::auth::ApiSecret;

/// Key excluded from the signed set
pub const FORMAT_KEY: &str = "format";

/// Key carrying the signature itself
pub const SIGNATURE_KEY: &str = "api_sig";

/// Compute the `api_sig` for a set of query pairs
///
/// Insertion order does not matter. `format` and a stale `api_sig` are
/// skipped. Keys are expected to be unique.
pub fn sign<'a, I>(pairs: I, secret: &ApiSecret) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut signed: Vec<(&str, &str)> = pairs
        .into_iter()
        .filter(|(k, _)| *k != FORMAT_KEY && *k != SIGNATURE_KEY)
        .collect();
    signed.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let capacity = signed.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>()
        + secret.expose().len();
    let mut payload = String::with_capacity(capacity);
    for (k, v) in signed {
        payload.push_str(k);
        payload.push_str(v);
    }
    payload.push_str(secret.expose());

    format!("{:x}", md5::compute(payload.as_bytes()))
}

/// Recompute the signature of a transmitted query and compare it with the
/// `api_sig` it carries
pub fn verify<'a, I>(pairs: I, secret: &ApiSecret) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let pairs: Vec<(&str, &str)> = pairs.into_iter().collect();
    let Some((_, transmitted)) = pairs.iter().find(|(k, _)| *k == SIGNATURE_KEY) else {
        return false;
    };
    sign(pairs.iter().copied(), secret) == *transmitted
}
