use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::fonts::winansi_code;
use crate::objects::{ObjId, PdfObject};

/// Serializes PDF objects to any `Write` target, recording the byte
/// offset of every indirect object for the cross-reference table.
pub struct PdfWriter<W: Write> {
    writer: W,
    offset: usize,
    xref: BTreeMap<u32, usize>,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        PdfWriter {
            writer,
            offset: 0,
            xref: BTreeMap::new(),
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> io::Result<()> {
        self.writer.write_all(data)?;
        self.offset += data.len();
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// `%PDF-1.7` followed by a comment of high bytes so transfer
    /// tools treat the file as binary.
    pub fn write_header(&mut self) -> io::Result<()> {
        self.write_str("%PDF-1.7\n")?;
        self.write_bytes(b"%\xe2\xe3\xcf\xd3\n")
    }

    pub fn write_object(&mut self, id: ObjId, obj: &PdfObject) -> io::Result<()> {
        log::trace!("object {} at offset {}", id.0, self.offset);
        self.xref.insert(id.0, self.offset);
        self.write_str(&format!("{} {} obj\n", id.0, id.1))?;
        self.write_value(obj)?;
        self.write_str("\nendobj\n")
    }

    fn write_value(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => self.write_str(&n.to_string()),
            PdfObject::Real(f) => self.write_str(&format_number(*f)),
            PdfObject::Name(name) => self.write_str(&format!("/{}", name)),
            PdfObject::LiteralString(s) => self.write_str(&format!("({})", escape_pdf_string(s))),
            PdfObject::Array(items) => {
                self.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.write_str(" ")?;
                    }
                    self.write_value(item)?;
                }
                self.write_str("]")
            }
            PdfObject::Dictionary(entries) => {
                self.write_str("<<")?;
                self.write_entries(entries)?;
                self.write_str(" >>")
            }
            PdfObject::Stream { dict, data } => {
                self.write_str("<<")?;
                self.write_entries(dict)?;
                self.write_str(&format!(" /Length {} >>\nstream\n", data.len()))?;
                self.write_bytes(data)?;
                self.write_str("\nendstream")
            }
            PdfObject::Reference(id) => self.write_str(&format!("{} {} R", id.0, id.1)),
        }
    }

    fn write_entries(&mut self, entries: &[(String, PdfObject)]) -> io::Result<()> {
        for (key, val) in entries {
            self.write_str(&format!(" /{} ", key))?;
            self.write_value(val)?;
        }
        Ok(())
    }

    /// Write the xref table, trailer, `startxref` and `%%EOF`.
    /// Object numbers never written get free entries.
    pub fn write_xref_and_trailer(&mut self, root: ObjId, info: Option<ObjId>) -> io::Result<()> {
        let xref_offset = self.offset;
        let size = self.xref.keys().next_back().map_or(1, |&max| max + 1);

        self.write_str(&format!("xref\n0 {}\n", size))?;
        // Every entry is exactly 20 bytes including the CRLF.
        self.write_bytes(b"0000000000 65535 f\r\n")?;
        for num in 1..size {
            let entry = match self.xref.get(&num) {
                Some(&off) => format!("{:010} 00000 n\r\n", off),
                None => "0000000000 00000 f\r\n".to_string(),
            };
            self.write_str(&entry)?;
        }

        let mut trailer = format!("trailer\n<< /Size {} /Root {} {} R", size, root.0, root.1);
        if let Some(info) = info {
            trailer.push_str(&format!(" /Info {} {} R", info.0, info.1));
        }
        trailer.push_str(" >>\n");
        self.write_str(&trailer)?;
        self.write_str(&format!("startxref\n{}\n%%EOF\n", xref_offset))
    }

    /// Bytes written so far.
    pub fn current_offset(&self) -> usize {
        self.offset
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Escape a string for use inside a PDF literal `( ... )`.
///
/// The built-in fonts are declared with WinAnsiEncoding. Characters
/// with a code above 0x7F are written as octal escapes of that code;
/// characters the encoding cannot show become `?`.
pub fn escape_pdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii() => out.push(c),
            c => match winansi_code(c) {
                Some(code) => out.push_str(&format!("\\{:03o}", code)),
                None => out.push('?'),
            },
        }
    }
    out
}

/// Format a number for PDF output: integers without a fraction,
/// everything else with at most four decimals and no trailing zeros.
pub fn format_number(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
