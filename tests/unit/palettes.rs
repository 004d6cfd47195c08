use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn signif_red_lookup_is_stable() {
    let first = rss_col("signif_red").unwrap();
    let second = rss_col("signif_red").unwrap();
    assert_eq!(first, second);
    assert_eq!(first, SIGNIF_RED);
    assert_eq!(first.to_hex(), "#C8102E");
}

#[test]
fn every_significant_color_is_in_the_semantic_table() {
    for (name, color) in [
        ("signif_red", SIGNIF_RED),
        ("signif_yellow", SIGNIF_YELLOW),
        ("signif_blue", SIGNIF_BLUE),
        ("signif_orange", SIGNIF_ORANGE),
        ("signif_green", SIGNIF_GREEN),
    ] {
        assert_eq!(rss_col(name).unwrap(), color, "{name}");
    }
}

#[test]
fn unknown_names_surface_lookup_errors() {
    assert_eq!(
        rss_col("signif_purple"),
        Err(PaletteError::UnknownColor("signif_purple".into()))
    );
    assert_eq!(
        palette("rainbow").unwrap_err(),
        PaletteError::UnknownPalette("rainbow".into())
    );
}

#[test]
fn table_names_are_unique() {
    let palettes: HashSet<_> = palette_names().collect();
    assert_eq!(palettes.len(), RSS_PALETTES.len());
    let cols: HashSet<_> = RSS_COLS.iter().map(|(name, _)| *name).collect();
    assert_eq!(cols.len(), RSS_COLS.len());
}

#[test]
fn qualitative_palette_is_the_significant_set_in_order() {
    let qual = palette("signif_qual").unwrap();
    assert_eq!(qual.kind, PaletteKind::Qualitative);
    assert_eq!(
        qual.colors(),
        &[SIGNIF_RED, SIGNIF_YELLOW, SIGNIF_BLUE, SIGNIF_ORANGE, SIGNIF_GREEN]
    );
    assert_eq!(qual.get(2), Some(SIGNIF_BLUE));
    assert_eq!(qual.get(5), None);
}

#[test]
fn qualitative_colors_n_cycles() {
    let qual = palette("signif_qual").unwrap();
    let seven = qual.colors_n(7);
    assert_eq!(seven.len(), 7);
    assert_eq!(seven[5], SIGNIF_RED);
    assert_eq!(seven[6], SIGNIF_YELLOW);
    assert_eq!(qual.colors_n(2), vec![SIGNIF_RED, SIGNIF_YELLOW]);
}

#[test]
fn continuous_colors_n_keeps_end_stops() {
    for name in ["signif_seq", "signif_div"] {
        let pal = palette(name).unwrap();
        for n in [2, 3, 9, 20] {
            let colors = pal.colors_n(n);
            assert_eq!(colors.len(), n);
            assert_eq!(colors[0], pal.colors()[0], "{name} n={n}");
            assert_eq!(colors[n - 1], pal.colors()[pal.len() - 1], "{name} n={n}");
        }
    }
}

#[test]
fn continuous_colors_n_at_stop_count_reproduces_stops() {
    let seq = palette("signif_seq").unwrap();
    assert_eq!(seq.colors_n(seq.len()), seq.colors().to_vec());
}

#[test]
fn diverging_midpoint_is_neutral() {
    let div = palette("signif_div").unwrap();
    assert_eq!(div.colors_n(3)[1], Color::from_pixel(0xF5F5F5));
}

#[test]
fn colors_n_edge_cases() {
    let seq = palette("signif_seq").unwrap();
    assert!(seq.colors_n(0).is_empty());
    assert_eq!(seq.colors_n(1), vec![seq.colors()[0]]);
}

#[test]
fn reversed_flips_order() {
    let div = palette("signif_div").unwrap();
    let rev = div.reversed();
    assert_eq!(rev.first(), Some(&SIGNIF_BLUE));
    assert_eq!(rev.last(), Some(&SIGNIF_RED));
}
