//! Full pipeline with a real outline font. Skipped when no font is found.

mod common;

use elemcards::{generate_from, Element, RunConfig, StaticSource};
use image::Rgba;

fn hydrogen() -> Element {
    Element::new(1, "H", "Hydrogen", 1.008, "diatomic nonmetal")
}

#[test]
fn hydrogen_card_end_to_end() {
    let Some(font) = common::system_font_path() else {
        println!("No system font found; set ELEMCARDS_TEST_FONT to run. Skipping.");
        return;
    };
    let dir = tempfile::tempdir().expect("tempdir");
    let config = RunConfig {
        font_path: font,
        colors_path: common::write_colors(dir.path()),
        outdir: dir.path().join("elements"),
        height: 600,
        ..Default::default()
    };

    let summary = generate_from(&config, &StaticSource::new(vec![hydrogen()]), |_| {})
        .expect("generation");
    assert_eq!(summary.written.len(), 1);
    assert!(summary.failures.is_empty());

    let path = config.outdir.join("001_H.png");
    assert_eq!(summary.written[0].path, path);
    let img = image::open(&path).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (783, 600));

    let blue = Rgba([0x34, 0x98, 0xdb, 0xff]);
    assert_eq!(img.get_pixel(0, 0), &blue);
    assert_eq!(img.get_pixel(782, 599), &blue);
    assert_eq!(img.get_pixel(20, 300), &blue);

    // Every text row region carries dark glyph pixels.
    let dark_in = |x0: u32, y0: u32, x1: u32, y1: u32| {
        (y0..y1).any(|y| (x0..x1).any(|x| img.get_pixel(x, y).0[0] < 100))
    };
    assert!(dark_in(70, 70, 300, 160), "atomic number missing");
    assert!(dark_in(450, 70, 713, 160), "atomic mass missing");
    assert!(dark_in(250, 150, 530, 300), "symbol missing");
    assert!(dark_in(100, 300, 683, 450), "name missing");
    // Nothing drawn in the gap between the frame and the corner text.
    assert!(!dark_in(41, 41, 69, 69));
}

#[test]
fn one_unwritable_tile_does_not_stop_the_batch() {
    let Some(font) = common::system_font_path() else {
        println!("No system font found; skipping.");
        return;
    };
    let dir = tempfile::tempdir().expect("tempdir");
    let outdir = dir.path().join("elements");
    std::fs::create_dir_all(outdir.join("002_He.png")).expect("blocker dir");

    let config = RunConfig {
        font_path: font,
        colors_path: common::write_colors(dir.path()),
        outdir: outdir.clone(),
        height: 90,
        ..Default::default()
    };
    let elements = vec![
        hydrogen(),
        Element::new(2, "He", "Helium", 4.0026, "noble gas"),
        Element::new(3, "Li", "Lithium", 6.94, "alkali metal"),
    ];
    let summary = generate_from(&config, &StaticSource::new(elements), |_| {}).expect("run");

    assert_eq!(summary.written.len(), 2);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].symbol, "He");
    assert!(outdir.join("001_H.png").is_file());
    assert!(outdir.join("003_Li.png").is_file());
}
