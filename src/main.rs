use clap::Parser;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use zipwx::{app::App, cli::Cli, config, weather::openweather::OpenWeatherSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log = cli.log_config()?;

    let api_key = config::load_or_prompt_key()?;

    let source = OpenWeatherSource::new(api_key, cli.zipcode.clone())?;
    // fail fast on a bad key or ZIP, before the terminal is taken over
    source.probe().await?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            flag.store(true, Ordering::SeqCst);
        }
    });

    let mut app = App::new(Box::new(source), cli.zipcode, cli.debug, log, shutdown);
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal).await;
    ratatui::restore();
    result
}
