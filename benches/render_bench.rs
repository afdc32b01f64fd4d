use criterion::{criterion_group, criterion_main, Criterion};

use elemcards::rendering::layout::{layout_tile, CardText};
use elemcards::rendering::raster::encode_png;
use elemcards::rendering::{render_card, CardStyle};
use elemcards::{category, BlockFace, CanvasGeometry, ColorTable, Element, LayoutConfig};

fn bench_layout(c: &mut Criterion) {
    let cfg = LayoutConfig::default();
    let geometry = CanvasGeometry::from_height(600, &cfg).expect("geometry");
    let face = BlockFace::default();
    let text = CardText::for_element(
        &Element::new(59, "Pr", "Praseodymium", 140.90766, "lanthanide"),
        cfg.mass_precision,
    );

    c.bench_function("layout_tile", |b| {
        b.iter(|| layout_tile(&geometry, &cfg, &text, &face))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let inputs = [
        "Diatomic Nonmetal",
        "Noble Gases",
        "unknown, probably transition metal",
        "Post-Transition Metal",
    ];
    c.bench_function("normalize_category", |b| {
        b.iter(|| {
            for s in inputs {
                let _ = category::normalize(s);
            }
        })
    });
}

fn bench_render_card(c: &mut Criterion) {
    let cfg = LayoutConfig::default();
    let geometry = CanvasGeometry::from_height(300, &cfg).expect("geometry");
    let face = BlockFace::default();
    let colors: ColorTable = [("transition metal", "#e67e22")].into_iter().collect();
    let fe = Element::new(26, "Fe", "Iron", 55.845, "transition metal");
    let style = CardStyle::for_element(&fe, &colors);

    c.bench_function("render_card", |b| {
        b.iter(|| render_card(&fe, &style, &geometry, &cfg, &face))
    });

    let image = render_card(&fe, &style, &geometry, &cfg, &face);
    c.bench_function("encode_png", |b| b.iter(|| encode_png(&image).expect("encode")));
}

criterion_group!(benches, bench_layout, bench_normalize, bench_render_card);
criterion_main!(benches);
