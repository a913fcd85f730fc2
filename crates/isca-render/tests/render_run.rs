use isca_engine::{RunConfig, StepEngine};
use isca_render::{AsciiRenderer, GridRenderer, PgmFormat, PgmRenderer};
use isca_sources::BaselineRule;

fn rule_90(size: usize, steps: usize) -> isca_engine::Grid {
    let config = RunConfig::new(
        size,
        steps,
        vec![Box::new(BaselineRule::from_number(90).unwrap())],
    );
    let mut engine = StepEngine::new(config).unwrap();
    engine.run().unwrap();
    engine.into_grid()
}

#[test]
fn rule_90_ascii_is_sierpinski() {
    let text = AsciiRenderer::with_glyphs('#', '.').render_string(&rule_90(9, 4));
    assert_eq!(
        text,
        "....#....\n\
         ...#.#...\n\
         ..#...#..\n\
         .#.#.#.#.\n"
    );
}

#[test]
fn pgm_size_matches_grid() {
    let grid = rule_90(16, 8);
    let renderer = PgmRenderer::new().with_scale(3).unwrap();
    let buf = renderer.render_to_vec(&grid).unwrap();
    let header = format!("P5\n{} {}\n255\n", 16 * 3, 8 * 3);
    assert!(buf.starts_with(header.as_bytes()));
    assert_eq!(buf.len(), header.len() + 16 * 3 * 8 * 3);

    let live_pixels = buf[header.len()..].iter().filter(|&&p| p == 0).count();
    assert_eq!(live_pixels, grid.count_ones() * 9);
}

#[test]
fn renderers_report_extensions() {
    let renderers: Vec<Box<dyn GridRenderer>> = vec![
        Box::new(AsciiRenderer::new()),
        Box::new(PgmRenderer::new().with_format(PgmFormat::Plain)),
    ];
    let exts: Vec<_> = renderers.iter().map(|r| r.extension()).collect();
    assert_eq!(exts, vec!["txt", "pgm"]);
}
