use std::io::{self, Write};

use pdf_canvas::{Canvas, CanvasError, PageSize, TextStyle};

/// Helper: find a byte pattern in a buffer.
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn number(obj: &lopdf::Object) -> f64 {
    match obj {
        lopdf::Object::Integer(i) => *i as f64,
        lopdf::Object::Real(r) => *r as f64,
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn empty_canvas_is_a_valid_single_page_pdf() {
    let canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    let bytes = canvas.finish().unwrap();

    assert!(bytes.starts_with(b"%PDF-1.7\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert!(contains_bytes(&bytes, b"/Type /Catalog"));
    assert!(contains_bytes(&bytes, b"/Count 1"));
    assert!(contains_bytes(&bytes, b"/Length 0"));
}

#[test]
fn parses_back_with_letter_media_box() {
    let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    canvas.place_text_styled("Hello", 72.0, 720.0, &TextStyle::default());
    let bytes = canvas.finish().unwrap();

    let doc = lopdf::Document::load_mem(&bytes).expect("generated PDF should parse");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = pages.get(&1).unwrap();
    let page = doc.get_object(*page_id).unwrap().as_dict().unwrap();
    let media_box: Vec<f64> = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(number)
        .collect();
    assert_eq!(media_box, vec![0.0, 0.0, 612.0, 792.0]);
}

#[test]
fn xref_size_counts_every_object() {
    let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    canvas.set_info("Creator", "test");
    canvas.place_text_styled("Hello", 20.0, 20.0, &TextStyle::default());
    let bytes = canvas.finish().unwrap();

    // 1 catalog, 2 pages, 3 page, 4-5 fonts, 6 content, 7 info
    assert!(
        contains_bytes(&bytes, b"/Size 8"),
        "{}",
        String::from_utf8_lossy(&bytes)
    );
    assert!(contains_bytes(&bytes, b"xref\n0 8\n"));
}

#[test]
fn parentheses_are_escaped() {
    let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    canvas.place_text_styled("Phone: (951) 653-3333", 20.0, 20.0, &TextStyle::regular(8.0));
    let bytes = canvas.finish().unwrap();
    assert!(contains_bytes(&bytes, b"(Phone: \\(951\\) 653-3333) Tj"));
}

#[test]
fn compressed_content_round_trips_through_lopdf() {
    let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    canvas.set_compression(true);
    canvas.place_text_styled("Compressed", 100.0, 500.0, &TextStyle::bold(9.0));
    let bytes = canvas.finish().unwrap();
    assert!(contains_bytes(&bytes, b"/Filter /FlateDecode"));

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    let page_id = *doc.get_pages().get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    assert!(contains_bytes(&content, b"(Compressed) Tj"));
}

#[test]
fn create_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.pdf");

    let mut canvas = Canvas::create(&path, PageSize::LETTER).unwrap();
    canvas.set_info("Title", "A Test Document");
    canvas.place_text_styled("Hello, PDF!", 72.0, 720.0, &TextStyle::default());
    canvas.finish().unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7\n"));
    assert!(bytes.ends_with(b"%%EOF\n"));
    assert!(contains_bytes(&bytes, b"(A Test Document)"));
}

#[test]
fn create_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.pdf");
    let result = Canvas::create(&path, PageSize::LETTER);
    assert!(matches!(result, Err(CanvasError::Io(_))));
}

/// Accepts a fixed number of bytes, then reports a full disk.
struct FullDisk {
    remaining: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_surfaces_from_finish() {
    let mut canvas = Canvas::new(FullDisk { remaining: 400 }, PageSize::LETTER).unwrap();
    canvas.place_text_styled(&"x".repeat(1000), 0.0, 0.0, &TextStyle::default());
    match canvas.finish() {
        Err(CanvasError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
        Err(other) => panic!("expected Io error, got {}", other),
        Ok(_) => panic!("expected failure"),
    }
}

#[test]
fn identical_drawing_gives_identical_bytes() {
    let draw = || {
        let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
        canvas.set_info("Title", "same");
        canvas.place_text_centered("centred", 306.0, 50.0, &TextStyle::regular(8.0));
        canvas.finish().unwrap()
    };
    assert_eq!(draw(), draw());
}
