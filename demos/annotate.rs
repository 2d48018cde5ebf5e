use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use phonetics_rs::{
    engines::furigana::{FuriganaEngine, FuriganaModel, FuriganaModelParams},
    engines::ipa::{IpaEngine, IpaLexicon, IpaModelParams},
    LazyModel, PhoneticsEngine,
};

static ENGLISH: LazyModel<IpaLexicon> = LazyModel::new();
static JAPANESE: LazyModel<FuriganaModel> = LazyModel::new();

/// Usage: `echo "I read the apple." | cargo run --example annotate -- en dict/english`
///        `echo "囲碁は楽しい。" | cargo run --example annotate -- ja dict/ipadic`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let lang = args.next().unwrap_or_else(|| "en".to_string());
    let model_path = PathBuf::from(args.next().unwrap_or_else(|| format!("dict/{lang}")));

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let load_start = Instant::now();
    let annotation = match lang.as_str() {
        "en" => {
            let lexicon = ENGLISH
                .get_or_try_init(|| IpaLexicon::load(&model_path, &IpaModelParams::default()))?;
            IpaEngine::from_lexicon(lexicon).annotate(&text)
        }
        "ja" => {
            let model = JAPANESE.get_or_try_init(|| {
                FuriganaModel::load(&model_path, &FuriganaModelParams::default())
            })?;
            FuriganaEngine::from_model(model).annotate(&text)
        }
        other => return Err(format!("unknown language {other:?}, expected en or ja").into()),
    };
    log::info!(
        "Annotated {} of {} units in {:.2?}",
        annotation.annotated_count(),
        annotation.units.len(),
        load_start.elapsed()
    );

    let response = serde_json::json!({
        "text": text,
        "html": annotation.to_html(),
    });
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
