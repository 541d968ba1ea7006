use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(Rgba::parse("#ff0000"), Some(Rgba::new(255.0, 0.0, 0.0, 1.0)));
    assert_eq!(Rgba::parse("#0F0"), Some(Rgba::new(0.0, 255.0, 0.0, 1.0)));

    let c = Rgba::parse("#0000ff80").unwrap();
    assert_eq!(c.b, 255.0);
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);

    let c = Rgba::parse("#fff8").unwrap();
    assert!((c.a - 136.0 / 255.0).abs() < 1e-9);

    assert_eq!(Rgba::parse("#12345"), None);
    assert_eq!(Rgba::parse("#gg0000"), None);
}

#[test]
fn parses_functional_forms() {
    assert_eq!(
        Rgba::parse("rgb(10, 20, 30)"),
        Some(Rgba::new(10.0, 20.0, 30.0, 1.0))
    );
    assert_eq!(
        Rgba::parse("rgba(10 20 30 / 0.5)"),
        Some(Rgba::new(10.0, 20.0, 30.0, 0.5))
    );
    assert_eq!(
        Rgba::parse("rgb(300, -4, 30)"),
        Some(Rgba::new(255.0, 0.0, 30.0, 1.0))
    );

    let red = Rgba::parse("hsl(0, 100%, 50%)").unwrap();
    assert!((red.r - 255.0).abs() < 1e-9);
    assert!(red.g.abs() < 1e-9);
    assert!(red.b.abs() < 1e-9);
}

#[test]
fn unsupported_paint_is_no_color() {
    assert_eq!(Rgba::parse("none"), None);
    assert_eq!(Rgba::parse("transparent"), None);
    assert_eq!(Rgba::parse("url(#grad)"), None);
    assert_eq!(Rgba::parse("currentColor"), None);
    assert_eq!(parse_color(None), None);
    assert_eq!(Rgba::parse("navy"), Some(Rgba::new(0.0, 0.0, 128.0, 1.0)));
}

#[test]
fn distance_is_normalized() {
    let black = Rgba::new(0.0, 0.0, 0.0, 1.0);
    let white_clear = Rgba::new(255.0, 255.0, 255.0, 0.0);
    assert_eq!(color_distance(None, None), 0.0);
    assert_eq!(color_distance(Some(&black), None), 1.0);
    assert_eq!(color_distance(Some(&black), Some(&black)), 0.0);
    assert!((color_distance(Some(&black), Some(&white_clear)) - 1.0).abs() < 1e-12);
}

#[test]
fn css_output_rounds_channels() {
    let a = Rgba::new(0.0, 0.0, 0.0, 1.0);
    let b = Rgba::new(255.0, 100.0, 0.0, 0.0);
    assert_eq!(a.lerp(&b, 0.5).to_css(), "rgba(128, 50, 0, 0.5)");
}
