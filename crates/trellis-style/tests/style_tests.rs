//! Tests for building and rendering styles.

use trellis_style::prelude::*;

#[test]
fn test_title_rule() {
    let mut title = Style::new("#title").unwrap();
    title
        .font(Font::new().size(14).weight("lighter"))
        .margin(Edges::all(5).top(0));

    let expected = "#title {\n    font-size: 14px;\n    font-weight: lighter;\n    margin: 5px;\n    margin-top: 0px;\n}";
    assert_eq!(title.render(false), expected);
    assert_eq!(title.render(false), title.render(false));
}

#[test]
fn test_inline_attribute() {
    let mut style = Style::inline();
    style.rule("color", "red");

    assert_eq!(style.inline_attribute(), "style=\"color: red;\"");
}

#[test]
fn test_rule_accepts_rendered_values() {
    let mut style = Style::inline();
    style
        .rule("width", px(120))
        .rule("color", Color::rgb(0, 128, 0).transparent(0.5))
        .rule("grid-template-columns", repeat(4, fr(1)))
        .rule("z-index", 10);

    assert_eq!(style.get("width"), Some("120px"));
    assert_eq!(style.get("color"), Some("rgba(0,128,0,0.5)"));
    assert_eq!(style.get("grid-template-columns"), Some("repeat(4, 1fr)"));
    assert_eq!(style.get("z-index"), Some("10"));
}

#[test]
fn test_composition() {
    let mut base = Style::inline();
    base.font(Font::new().family("sans-serif")).padding(4);

    let mut emphasis = Style::inline();
    emphasis.font(Font::new().weight("bold")).padding(8);

    let mut label = Style::new("span.label").unwrap();
    label.apply([&base, &emphasis]);

    assert_eq!(
        label.render(true),
        "font-family: sans-serif;padding: 8px;font-weight: bold;"
    );
}

#[test]
fn test_sub_styles() {
    let mut menu = Style::new("nav .menu").unwrap();
    menu.flexbox(Flexbox::row().justify("space-between"));
    menu.on("hover").unwrap().background(gray(0.9));
    menu.children("a", None).unwrap().hidden();
    menu.children("*", Some(2)).unwrap().width(0.5);

    let rendered: Vec<String> = menu
        .sub_styles()
        .iter()
        .map(|s| s.selector().unwrap().to_string())
        .collect();
    assert_eq!(
        rendered,
        ["nav .menu:hover", "nav .menu a", "nav .menu *:nth-child(2)"]
    );

    for child in menu.sub_styles() {
        assert_eq!(child.parent().unwrap().to_string(), "nav .menu");
    }
    assert_eq!(menu.get("display"), Some("flex"));
    assert!(menu.get("visibility").is_none());
}

#[test]
fn test_nested_derivation() {
    let mut card = Style::new(".card").unwrap();
    card.children("button", None)
        .unwrap()
        .on("focus")
        .unwrap()
        .rule("outline", "none");

    let button = &card.sub_styles()[0];
    let focused = &button.sub_styles()[0];
    assert_eq!(
        focused.render(false),
        ".card button:focus {\n    outline: none;\n}"
    );
}

#[test]
fn test_grid_layout() {
    let mut layout = Style::new("main").unwrap();
    layout
        .grid(Grid::new().columns(vec![GridTrack::from(px(200)), GridTrack::from(fr(1))]).rows(3).gap(0.5))
        .unwrap();

    assert_eq!(
        layout.render(true),
        "display: grid;grid-template-columns: 200px 1fr;grid-template-rows: repeat(3, 1fr);gap: 0.5fr;"
    );

    let mut empty = Style::new("aside").unwrap();
    let err = empty.grid(Grid::new().auto_rows("auto")).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(empty.is_empty());

    assert!(Style::inline().grid(Grid::new().rows(2)).is_ok());
    assert!(Style::inline().grid(Grid::new().columns(2)).is_ok());
}

#[test]
fn test_place_and_flexbox() {
    let mut item = Style::inline();
    item.place(Place::new().columns((0, 2)).rows((1, 1)));
    assert_eq!(item.render(true), "grid-column: 0 / 3;grid-row: 1 / 2;");

    let mut row = Style::inline();
    row.flexbox(Flexbox::direction("row").reverse());
    assert_eq!(row.get("flex-direction"), Some("row-reverse"));
}

#[test]
fn test_markup() {
    assert_eq!(
        Style::new("div#main.wide.dark").unwrap().markup().unwrap(),
        "id=\"main\" class=\"wide dark\""
    );
    assert!(matches!(
        Style::new("ul li").unwrap().markup(),
        Err(Error::NoMarkup { .. })
    ));
    assert_eq!(Style::inline().markup(), Err(Error::MissingSelector));
}

#[test]
fn test_any_state_and_selector_syntax() {
    let mut item = Style::new(".item").unwrap();
    for state in [
        "first-of-type",
        "last-of-type",
        "target",
        "required",
        "invalid",
        "placeholder-shown",
        "root",
        "nth-of-type(2)",
    ] {
        let derived = item.on(state).unwrap();
        assert_eq!(derived.selector().unwrap().to_string(), format!(".item:{}", state));
    }
    assert_eq!(item.sub_styles().len(), 8);

    for (text, canonical) in [
        (":root", ":root"),
        ("p::before", "p::before"),
        ("input[type=text]", r#"input[type="text"]"#),
        ("a[href^='https']:hover::after", r#"a[href^="https"]:hover::after"#),
    ] {
        let style = Style::new(text).unwrap();
        assert_eq!(style.selector().unwrap().to_string(), canonical);
    }

    let mut before = Style::new("blockquote::before").unwrap();
    before.rule("content", "'\\201C'");
    assert_eq!(before.render(false), "blockquote::before {\n    content: '\\201C';\n}");
}

#[test]
fn test_malformed_selectors() {
    for text in ["", "div >", "a:", "p::before.x", "p, span"] {
        assert!(
            matches!(Style::new(text), Err(Error::InvalidSelector { .. })),
            "'{}' should be rejected",
            text
        );
    }

    let mut link = Style::new("a").unwrap();
    assert!(link.children("> >", None).is_err());
    assert!(link.sub_styles().is_empty());
}

#[test]
fn test_keyframes() {
    let mut small = Style::inline();
    small.scale(0.9);
    let mut large = Style::inline();
    large.scale(1.1);

    let mut pulse = Animation::new("pulse");
    pulse.start(&small).end(&large);

    let mut dot = Style::new(".dot").unwrap();
    dot.animation(&pulse, 0.8, "infinite");

    assert_eq!(
        dot.render(true),
        "animation-name: pulse;animation-duration: 0.8s;animation-iteration-count: infinite;"
    );
    assert_eq!(
        pulse.css(),
        "@keyframes pulse {\n    0% {\n        transform: scale(0.9);\n    }\n    100% {\n        transform: scale(1.1);\n    }\n}"
    );
}
