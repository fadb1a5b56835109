/// Indirect object identifier: (object number, generation).
/// Freshly written files only ever use generation 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjId(pub u32, pub u16);

impl ObjId {
    pub fn new(num: u32) -> Self {
        ObjId(num, 0)
    }
}

/// The subset of PDF object types (ISO 32000-1, 7.3) the canvas emits.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Stored without the leading `/`.
    Name(String),
    /// Stored unescaped, without the enclosing parens.
    LiteralString(String),
    Array(Vec<PdfObject>),
    /// Vec keeps the key order stable across runs.
    Dictionary(Vec<(String, PdfObject)>),
    Stream {
        dict: Vec<(String, PdfObject)>,
        data: Vec<u8>,
    },
    Reference(ObjId),
}

impl PdfObject {
    pub fn name(s: &str) -> Self {
        PdfObject::Name(s.to_string())
    }

    pub fn literal_string(s: &str) -> Self {
        PdfObject::LiteralString(s.to_string())
    }

    pub fn array(items: Vec<PdfObject>) -> Self {
        PdfObject::Array(items)
    }

    pub fn dict(entries: Vec<(&str, PdfObject)>) -> Self {
        PdfObject::Dictionary(owned_entries(entries))
    }

    pub fn stream(dict_entries: Vec<(&str, PdfObject)>, data: Vec<u8>) -> Self {
        PdfObject::Stream {
            dict: owned_entries(dict_entries),
            data,
        }
    }

    /// `[x y w h]` rectangle array, as used by `/MediaBox`.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        PdfObject::array(vec![
            PdfObject::Real(x),
            PdfObject::Real(y),
            PdfObject::Real(width),
            PdfObject::Real(height),
        ])
    }
}

impl From<ObjId> for PdfObject {
    fn from(id: ObjId) -> Self {
        PdfObject::Reference(id)
    }
}

fn owned_entries(entries: Vec<(&str, PdfObject)>) -> Vec<(String, PdfObject)> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
