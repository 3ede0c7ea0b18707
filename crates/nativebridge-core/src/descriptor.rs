//! Type descriptors: the per-type vocabulary of a method signature.
//!
//! A [`TypeDescriptor`] tells the dynamic side what kind of value sits in a
//! parameter or return slot, which is all its marshaler needs to pick a
//! conversion. Descriptors have a compact textual form:
//!
//! ```text
//! V void   Z bool   C char   T string
//! B int8   S int16  I int32  J int64
//! b uint8  s uint16 i uint32 j uint64
//! F float  D double
//! [<desc>          array of <desc>
//! ?<desc>          optional <desc>
//! L<name>;         native object named <name>
//! ```
//!
//! Inside an object name, `\`, `;` and `'` are backslash-escaped. Decoding
//! stops at [`MAX_NESTING`] levels of `[` / `?`.
//!
//! # Example
//!
//! ```
//! use nativebridge_core::TypeDescriptor;
//!
//! let desc = TypeDescriptor::Array(Box::new(TypeDescriptor::Int32));
//! assert_eq!(desc.encode(), "[I");
//! assert_eq!(TypeDescriptor::parse("[I").unwrap(), desc);
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::error::{DecodeError, DecodeResult};
use crate::text::{self, Cursor};

/// Characters reserved inside an object name.
const OBJECT_RESERVED: &[char] = &[';', '\''];

/// Deepest array/optional nesting the decoder accepts.
pub const MAX_NESTING: usize = 64;

/// Kind of value carried by a parameter or return slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Void,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
    Char,
    String,
    /// Homogeneous sequence.
    Array(Box<TypeDescriptor>),
    /// Value that may be absent.
    Optional(Box<TypeDescriptor>),
    /// Native object passed by handle, identified by its declared name.
    Object(Cow<'static, str>),
}

impl TypeDescriptor {
    /// Descriptor for a native object with a static name.
    pub const fn object(name: &'static str) -> Self {
        TypeDescriptor::Object(Cow::Borrowed(name))
    }

    /// Single-char code for scalar kinds; `None` for composite kinds.
    pub const fn code(&self) -> Option<char> {
        match self {
            TypeDescriptor::Void => Some('V'),
            TypeDescriptor::Bool => Some('Z'),
            TypeDescriptor::Int8 => Some('B'),
            TypeDescriptor::Int16 => Some('S'),
            TypeDescriptor::Int32 => Some('I'),
            TypeDescriptor::Int64 => Some('J'),
            TypeDescriptor::Uint8 => Some('b'),
            TypeDescriptor::Uint16 => Some('s'),
            TypeDescriptor::Uint32 => Some('i'),
            TypeDescriptor::Uint64 => Some('j'),
            TypeDescriptor::Float => Some('F'),
            TypeDescriptor::Double => Some('D'),
            TypeDescriptor::Char => Some('C'),
            TypeDescriptor::String => Some('T'),
            TypeDescriptor::Array(_) | TypeDescriptor::Optional(_) | TypeDescriptor::Object(_) => {
                None
            }
        }
    }

    /// Scalar kind for a single-char code.
    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'V' => TypeDescriptor::Void,
            'Z' => TypeDescriptor::Bool,
            'B' => TypeDescriptor::Int8,
            'S' => TypeDescriptor::Int16,
            'I' => TypeDescriptor::Int32,
            'J' => TypeDescriptor::Int64,
            'b' => TypeDescriptor::Uint8,
            's' => TypeDescriptor::Uint16,
            'i' => TypeDescriptor::Uint32,
            'j' => TypeDescriptor::Uint64,
            'F' => TypeDescriptor::Float,
            'D' => TypeDescriptor::Double,
            'C' => TypeDescriptor::Char,
            'T' => TypeDescriptor::String,
            _ => return None,
        })
    }

    /// Human-readable name, used in diagnostics.
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            TypeDescriptor::Void => Cow::Borrowed("void"),
            TypeDescriptor::Bool => Cow::Borrowed("bool"),
            TypeDescriptor::Int8 => Cow::Borrowed("int8"),
            TypeDescriptor::Int16 => Cow::Borrowed("int16"),
            TypeDescriptor::Int32 => Cow::Borrowed("int"),
            TypeDescriptor::Int64 => Cow::Borrowed("int64"),
            TypeDescriptor::Uint8 => Cow::Borrowed("uint8"),
            TypeDescriptor::Uint16 => Cow::Borrowed("uint16"),
            TypeDescriptor::Uint32 => Cow::Borrowed("uint"),
            TypeDescriptor::Uint64 => Cow::Borrowed("uint64"),
            TypeDescriptor::Float => Cow::Borrowed("float"),
            TypeDescriptor::Double => Cow::Borrowed("double"),
            TypeDescriptor::Char => Cow::Borrowed("char"),
            TypeDescriptor::String => Cow::Borrowed("string"),
            TypeDescriptor::Array(elem) => Cow::Owned(format!("array<{}>", elem.name())),
            TypeDescriptor::Optional(inner) => Cow::Owned(format!("{}?", inner.name())),
            TypeDescriptor::Object(name) => name.clone(),
        }
    }

    /// Append the textual form to `out`.
    pub fn encode_into(&self, out: &mut String) {
        match self {
            TypeDescriptor::Array(elem) => {
                out.push('[');
                elem.encode_into(out);
            }
            TypeDescriptor::Optional(inner) => {
                out.push('?');
                inner.encode_into(out);
            }
            TypeDescriptor::Object(name) => {
                out.push('L');
                text::escape_into(out, name, OBJECT_RESERVED);
                out.push(';');
            }
            scalar => {
                if let Some(code) = scalar.code() {
                    out.push(code);
                }
            }
        }
    }

    /// Textual form.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        self.encode_into(&mut out);
        out
    }

    /// Decode exactly one descriptor from `input`.
    pub fn parse(input: &str) -> DecodeResult<Self> {
        let mut cursor = Cursor::new(input);
        let desc = Self::decode(&mut cursor)?;
        cursor.finish()?;
        Ok(desc)
    }

    /// Decode one descriptor at the cursor, leaving the rest unread.
    ///
    /// Fails with [`DecodeError::TooDeep`] past [`MAX_NESTING`] levels of
    /// arrays and optionals.
    pub fn decode(cursor: &mut Cursor<'_>) -> DecodeResult<Self> {
        Self::decode_nested(cursor, 0)
    }

    fn decode_nested(cursor: &mut Cursor<'_>, depth: usize) -> DecodeResult<Self> {
        let offset = cursor.offset();
        let code = cursor.next_char()?;
        if matches!(code, '[' | '?') && depth >= MAX_NESTING {
            return Err(DecodeError::TooDeep { offset });
        }
        match code {
            '[' => Ok(TypeDescriptor::Array(Box::new(Self::decode_nested(
                cursor,
                depth + 1,
            )?))),
            '?' => Ok(TypeDescriptor::Optional(Box::new(Self::decode_nested(
                cursor,
                depth + 1,
            )?))),
            'L' => {
                let name_offset = cursor.offset();
                let name = cursor.read_until(&[';'])?;
                cursor.expect(';')?;
                if name.is_empty() {
                    return Err(DecodeError::EmptyName {
                        offset: name_offset,
                    });
                }
                Ok(TypeDescriptor::Object(Cow::Owned(name)))
            }
            other => {
                Self::from_code(other).ok_or(DecodeError::UnknownTypeCode { code: other, offset })
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
