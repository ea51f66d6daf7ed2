use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    println!("cargo:rerun-if-env-changed=DASHBOARD_MINIFY_CSS");

    // Mirrors the `minify` runtime setting; set DASHBOARD_MINIFY_CSS=0 for readable output
    let minify = std::env::var("DASHBOARD_MINIFY_CSS")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
        .unwrap_or(true);

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // main.css @imports the component sheets
    let mut stylesheet = bundler
        .bundle(Path::new("assets/css/main.css"))
        .expect("Failed to bundle CSS");

    if minify {
        stylesheet
            .minify(MinifyOptions::default())
            .expect("Failed to minify CSS");
    }

    let css = stylesheet
        .to_css(PrinterOptions {
            minify,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write("assets/dist/bundle.css", css.code).expect("Failed to write bundle.css");
}
