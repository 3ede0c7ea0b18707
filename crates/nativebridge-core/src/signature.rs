//! Canonical method signatures.
//!
//! A [`Signature`] is the transmissible description of one native method: its
//! native name, return kind and parameter kinds. The textual form puts the
//! return descriptor first and prefixes every parameter with `'`:
//!
//! ```text
//! <native name>:<return>'<param 1>'<param 2>...
//! ```
//!
//! `\`, `:` and `'` inside the native name are backslash-escaped. The format
//! is deterministic and decodes without any reflection on the dynamic side.
//!
//! # Example
//!
//! ```
//! use nativebridge_core::{Signature, TypeDescriptor};
//!
//! let sig = Signature::new(
//!     "set_level",
//!     TypeDescriptor::Bool,
//!     vec![TypeDescriptor::Int32, TypeDescriptor::String],
//! );
//! assert_eq!(sig.encode(), "set_level:Z'I'T");
//! assert_eq!(Signature::parse("set_level:Z'I'T").unwrap(), sig);
//! ```

use std::fmt;

use crate::error::{DecodeError, DecodeResult};
use crate::text::{self, Cursor};
use crate::TypeDescriptor;

const NAME_RESERVED: &[char] = &[':', '\''];

/// Decoded method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Native method name.
    pub name: String,
    /// Return kind.
    pub returns: TypeDescriptor,
    /// Parameter kinds in declaration order.
    pub params: Vec<TypeDescriptor>,
}

impl Signature {
    pub fn new(
        name: impl Into<String>,
        returns: TypeDescriptor,
        params: Vec<TypeDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            returns,
            params,
        }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn encode_into(&self, out: &mut String) {
        text::escape_into(out, &self.name, NAME_RESERVED);
        out.push(':');
        self.returns.encode_into(out);
        for param in &self.params {
            out.push('\'');
            param.encode_into(out);
        }
    }

    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }

    /// Decode a signature produced by [`Signature::encode`].
    pub fn parse(input: &str) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(input);
        let name = cursor.read_until(&[':'])?;
        if name.is_empty() {
            return Err(DecodeError::EmptyName { offset: 0 });
        }
        cursor.expect(':')?;
        let returns = TypeDescriptor::decode(&mut cursor)?;

        let mut params = Vec::new();
        while !cursor.is_at_end() {
            cursor.expect('\'')?;
            params.push(TypeDescriptor::decode(&mut cursor)?);
        }

        Ok(Self {
            name,
            returns,
            params,
        })
    }
}

impl fmt::Display for Signature {
    /// Renders as `ret name(p1, p2)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.returns, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")
    }
}
