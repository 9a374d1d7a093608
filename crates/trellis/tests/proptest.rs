//! Property tests for stylesheet ordering and lookup.

use std::collections::HashSet;

use proptest::prelude::*;
use trellis::{SheetOptions, StyleSheet};

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..10).prop_map(|names| {
        let mut seen = HashSet::new();
        names.into_iter().filter(|name| seen.insert(name.clone())).collect()
    })
}

fn build(names: &[String]) -> StyleSheet {
    let mut sheet = StyleSheet::with_options(SheetOptions::bare());
    for (i, name) in names.iter().enumerate() {
        sheet.select(&format!(".{}", name)).unwrap().rule("order", i);
    }
    sheet
}

fn block_start(css: &str, name: &str) -> Option<usize> {
    let block = format!(".{} {{\n", name);
    if css.starts_with(&block) {
        return Some(0);
    }
    css.find(&format!("\n{}", block)).map(|at| at + 1)
}

proptest! {
    #[test]
    fn roots_render_in_insertion_order(names in names_strategy()) {
        let sheet = build(&names);
        let css = sheet.render();

        let positions: Vec<usize> = names
            .iter()
            .map(|name| block_start(&css, name).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        let footer = format!("/* Generated {} styles */", names.len());
        prop_assert!(css.ends_with(&footer));
    }

    #[test]
    fn reselecting_keeps_one_style_per_selector(names in names_strategy()) {
        let mut sheet = build(&names);
        for name in names.iter().rev() {
            sheet.select(&format!(".{}", name)).unwrap().rule("color", "red");
        }

        prop_assert_eq!(sheet.len(), names.len());
        prop_assert_eq!(sheet.render(), build_recolored(&names).render());
    }

    #[test]
    fn dynamic_render_has_only_used_styles(names in names_strategy(), mask in prop::collection::vec(any::<bool>(), 10)) {
        let mut sheet = build(&names);
        let used: Vec<&String> = names.iter().zip(&mask).filter(|(_, used)| **used).map(|(name, _)| name).collect();
        for name in &used {
            sheet.get(name).unwrap();
        }

        let css = sheet.render_dynamic();
        for name in &names {
            prop_assert_eq!(block_start(&css, name).is_some(), used.contains(&name));
        }
        let footer = format!("/* Generated {} styles */", used.len());
        prop_assert!(css.ends_with(&footer));
    }
}

fn build_recolored(names: &[String]) -> StyleSheet {
    let mut sheet = build(names);
    for name in names {
        sheet.select(&format!(".{}", name)).unwrap().rule("color", "red");
    }
    sheet
}
