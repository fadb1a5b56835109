use pdf_canvas::{Canvas, Color, PageSize, TextStyle};

fn render(draw: impl FnOnce(&mut Canvas<Vec<u8>>)) -> String {
    let mut canvas = Canvas::new(Vec::new(), PageSize::LETTER).unwrap();
    draw(&mut canvas);
    String::from_utf8_lossy(&canvas.finish().unwrap()).into_owned()
}

#[test]
fn stroke_line_produces_operators() {
    let output = render(|c| {
        c.move_to(100.0, 200.0).line_to(300.0, 400.0).stroke();
    });
    assert!(output.contains("100 200 m\n300 400 l\nS\n"));
}

#[test]
fn set_stroke_color_operator() {
    let output = render(|c| {
        c.set_stroke_color(Color::rgb(1.0, 0.0, 0.0));
    });
    assert!(output.contains("1 0 0 RG\n"));
}

#[test]
fn set_fill_color_from_hex() {
    // #3b6a96
    let output = render(|c| {
        c.set_fill_color(Color::from_hex(0x3b6a96));
    });
    assert!(output.contains("0.2314 0.4157 0.5882 rg\n"), "{}", output);
}

#[test]
fn set_line_width_operator() {
    let output = render(|c| {
        c.set_line_width(2.5);
    });
    assert!(output.contains("2.5 w\n"));
}

#[test]
fn fill_and_fill_stroke() {
    let output = render(|c| {
        c.rect(10.0, 10.0, 50.0, 50.0).fill();
        c.rect(50.0, 512.0, 510.0, 18.0).fill_stroke();
    });
    assert!(output.contains("10 10 50 50 re\nf\n"));
    assert!(output.contains("50 512 510 18 re\nB\n"));
}

#[test]
fn save_restore_wraps_state_changes() {
    let output = render(|c| {
        c.save_state()
            .set_fill_color(Color::white())
            .place_text_styled("QTY", 420.0, 517.0, &TextStyle::bold(9.0))
            .restore_state();
    });
    assert!(output.contains("q\n1 1 1 rg\nBT\n/F2 9 Tf\n420 517 Td\n(QTY) Tj\nET\nQ\n"));
}

#[test]
fn draw_order_is_call_order() {
    let output = render(|c| {
        c.set_fill_color(Color::from_hex(0x3b6a96))
            .rect(480.0, 632.0, 90.0, 20.0)
            .fill_stroke()
            .set_fill_color(Color::white())
            .place_text_styled("ESTIMATE 8571", 483.0, 638.0, &TextStyle::bold(10.0));
    });
    let rect_at = output.find("480 632 90 20 re").unwrap();
    let text_at = output.find("(ESTIMATE 8571) Tj").unwrap();
    assert!(rect_at < text_at, "text must be painted over the badge");
}
