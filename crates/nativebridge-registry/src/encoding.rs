//! Encoded signature sets.
//!
//! The signature set of a type travels to the dynamic side as one string:
//!
//! ```text
//! set    := '{' [ entry { ', ' entry } ] '}'
//! entry  := key '=' value
//! ```
//!
//! Keys are exposed method names and values are encoded [`Signature`]s. Inside
//! keys and values, `\`, `{`, `}`, `=` and `,` are backslash-escaped. Entries
//! are ordered by key so the same method set always encodes to the same bytes.
//!
//! [`Signature`]: nativebridge_core::Signature

use std::collections::BTreeMap;

use nativebridge_core::text::{self, Cursor};
use nativebridge_core::{DecodeError, DecodeResult, MethodDescriptor};

const RESERVED: &[char] = &['{', '}', '=', ','];

/// Collapse descriptors into the per-type mapping.
///
/// Later descriptors overwrite earlier ones with the same exposed name.
pub fn collect_signature_map<I>(descriptors: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = MethodDescriptor>,
{
    let mut map = BTreeMap::new();
    for desc in descriptors {
        map.insert(desc.exposed_name, desc.signature);
    }
    map
}

/// Encode a name → signature mapping.
pub fn encode_signature_set(map: &BTreeMap<String, String>) -> String {
    let payload: usize = map.iter().map(|(k, v)| k.len() + v.len() + 3).sum();
    let mut out = String::with_capacity(payload + 2);
    out.push('{');
    for (i, (name, signature)) in map.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        text::escape_into(&mut out, name, RESERVED);
        out.push('=');
        text::escape_into(&mut out, signature, RESERVED);
    }
    out.push('}');
    out
}

/// Decode a string produced by [`encode_signature_set`].
///
/// Returns the `(exposed name, signature)` pairs in encoded order.
pub fn decode_signature_set(input: &str) -> DecodeResult<Vec<(String, String)>> {
    let mut cursor = Cursor::new(input);
    cursor.expect('{')?;

    let mut entries = Vec::new();
    if cursor.peek() == Some('}') {
        cursor.bump();
        cursor.finish()?;
        return Ok(entries);
    }

    loop {
        let key_offset = cursor.offset();
        let key = cursor.read_until(RESERVED)?;
        if key.is_empty() {
            return Err(DecodeError::EmptyName { offset: key_offset });
        }
        cursor.expect('=')?;
        let value = cursor.read_until(RESERVED)?;
        entries.push((key, value));

        let offset = cursor.offset();
        match cursor.next_char()? {
            '}' => break,
            ',' => cursor.expect(' ')?,
            found => {
                return Err(DecodeError::Expected {
                    expected: '}',
                    found,
                    offset,
                });
            }
        }
    }

    cursor.finish()?;
    Ok(entries)
}
