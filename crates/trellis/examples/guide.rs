//! Trellis guide example
//!
//! Builds a responsive fluid grid stylesheet with a hover state, an
//! animated notice and media queries, then prints it or writes it to the
//! path given as the first argument.
//!
//! Run with: cargo run -p trellis --example guide [-- out.css]

use trellis::prelude::*;

fn make_grid_styles(sheet: &mut StyleSheet, columns: u32) -> trellis::Result<()> {
    for size in 1..=12 {
        let fraction = f64::from(size.min(columns)) / f64::from(columns);
        sheet.select(&format!(".span-{}", size))?.width(fraction);
    }
    Ok(())
}

fn build() -> trellis::Result<StyleSheet> {
    let mut base = Style::inline();
    base.font(Font::new().family("system-ui, sans-serif"));

    let mut sheet = StyleSheet::new().with_base(base);

    sheet.select(".main")?.padding(50);
    sheet
        .select(".container")?
        .background(gray(0.9))
        .padding(10)
        .margin(Edges::new().bottom(10));

    let col = sheet.select(".col")?;
    col.background(gray(0.95))
        .border(0.1, gray(1.0))
        .height(100)
        .transition(Transition::new().property("background-color"));
    col.on("hover")?.background(blue(0.85));

    sheet.select(".row")?.flexbox(Flexbox::row().wrap());

    let mut hidden = Style::inline();
    hidden.rule("opacity", 0).translate(Translate::new().y(-8));
    let mut shown = Style::inline();
    shown.rule("opacity", 1).translate(Translate::new());

    let mut appear = Animation::new("appear");
    appear.start(&hidden).end(&shown);

    sheet
        .select(".notice")?
        .animation(&appear, 0.4, 1)
        .rounded()
        .shadow(Color::BLACK.transparent(0.2), Shadow::offset(0, 2).blur(6));

    make_grid_styles(&mut sheet, 12)?;
    for (width, columns) in [(1600, 8), (1200, 6), (800, 4), (600, 1)] {
        sheet.media(MediaQuery::max_width(width), |sheet| {
            make_grid_styles(sheet, columns)
        })?;
    }

    Ok(sheet)
}

fn main() -> trellis::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let sheet = build()?;

    match std::env::args().nth(1) {
        Some(path) => sheet.render_to(path)?,
        None => println!("{}", sheet.render()),
    }

    Ok(())
}
