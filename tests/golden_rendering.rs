use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use verseslides::rendering::{layout, paint, raster, render_slide};
use verseslides::{paginate, RenderConfig, SlidePosition, SlideTemplate, VerseRecord};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn psalm_23() -> Vec<VerseRecord> {
    [
        "The LORD is my shepherd; I shall not want.",
        "He maketh me to lie down in green pastures: he leadeth me beside the still waters.",
        "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake.",
        "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.",
        "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over.",
        "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the LORD for ever.",
    ]
    .iter()
    .enumerate()
    .map(|(i, t)| VerseRecord::new(i as u32 + 1, *t))
    .collect()
}

#[test]
fn golden_slide_matches_fixture() {
    let template = SlideTemplate {
        book: "Psalms".into(),
        chapter: 23,
        translation: "kjv".into(),
    };
    let slides = paginate(&psalm_23(), &template);
    assert_eq!(slides.len(), 2);

    let position = SlidePosition::from_index(0, slides.len());
    let cfg = RenderConfig::default();

    // PNG bytes are stable between runs
    let shot = render_slide(&slides[0], position, &cfg).expect("render");
    let again = render_slide(&slides[0], position, &cfg).expect("render");
    assert_eq!(shot.digest(), again.digest());

    // The golden holds the sha256 of the raw RGBA pixels, independent of PNG
    // compression settings
    let nodes = layout::layout_slide(&slides[0], position, cfg.viewport);
    let commands = paint::paint_slide(&nodes, cfg.viewport);
    let canvas = raster::rasterize_canvas(&commands, cfg.viewport, cfg.scale).expect("rasterize");
    assert_eq!((canvas.width(), canvas.height()), (2560, 1440));
    let digest = hex::encode(Sha256::digest(canvas.pixels()));

    let expected_path = golden_path("psalm23_slide1.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
