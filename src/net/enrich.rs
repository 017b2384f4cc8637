//! Outbound payload enrichment.
//!
//! Right before a websocket message is sent, the attributes of the element
//! that triggered it are scanned for a prefix (`data-` by default). Each match
//! is copied into the outgoing parameters under the attribute name with the
//! prefix stripped, so `data-card="7"` becomes `card=7`. Unprefixed
//! attributes are never copied.

#[cfg(test)]
#[path = "enrich_test.rs"]
mod enrich_test;

use std::collections::{BTreeMap, HashMap};

/// A mutable key→string parameter set for one outgoing message.
pub trait ParameterMap {
    /// Insert or overwrite `key`.
    fn insert_param(&mut self, key: &str, value: &str);
}

impl ParameterMap for HashMap<String, String> {
    fn insert_param(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl ParameterMap for BTreeMap<String, String> {
    fn insert_param(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), value.to_owned());
    }
}

impl ParameterMap for serde_json::Map<String, serde_json::Value> {
    fn insert_param(&mut self, key: &str, value: &str) {
        self.insert(key.to_owned(), serde_json::Value::String(value.to_owned()));
    }
}

/// Pull `(key, value)` pairs out of `attrs` for every name starting with `prefix`.
///
/// The key is the name with `prefix` removed; an attribute named exactly
/// `prefix` has no key and is skipped. Order follows `attrs`.
pub fn extract_tagged<I, K, V>(attrs: I, prefix: &str) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    attrs
        .into_iter()
        .filter_map(|(name, value)| {
            let key = name.as_ref().strip_prefix(prefix)?;
            if key.is_empty() {
                return None;
            }
            Some((key.to_owned(), value.as_ref().to_owned()))
        })
        .collect()
}

/// Copy every prefixed attribute of `attrs` into `params`.
///
/// Copied values overwrite parameters with the same key, and a later
/// attribute overwrites an earlier one. Returns the number of attributes
/// copied; with zero, `params` is untouched.
pub fn enrich<P, I, K, V>(params: &mut P, attrs: I, prefix: &str) -> usize
where
    P: ParameterMap + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let tagged = extract_tagged(attrs, prefix);
    for (key, value) in &tagged {
        params.insert_param(key, value);
    }
    if !tagged.is_empty() {
        log::debug!("[ws-send] attached {} parameter(s): {tagged:?}", tagged.len());
    }
    tagged.len()
}
