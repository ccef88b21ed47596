use signal_deck::deck::{DeckContext, OUTPUT_FILENAME, build_presentation};

fn main() -> signal_deck::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let ctx = DeckContext::default();
    let pres = build_presentation(&ctx)?;
    pres.save(OUTPUT_FILENAME)?;

    println!("✅ Presentation created successfully: {}", OUTPUT_FILENAME);
    println!("📊 Total slides: {}", pres.slide_count());
    println!("🎨 Professional blue theme applied");
    Ok(())
}
