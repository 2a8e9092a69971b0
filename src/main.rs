use lsm_verse::utils::logger;
use lsm_verse::{Invocation, VerseConfig, VerseError, VerseFetcher, VerseRunner};

fn fail(e: VerseError) -> ! {
    tracing::error!("❌ Verse lookup failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let invocation = Invocation::from_env();

    // 有參數時不讀設定、不連線、不輸出
    if invocation.reference().is_none() {
        return;
    }

    let config = match VerseConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(&config.logging);
    tracing::debug!("Config: {:?}", config);

    let fetcher = match VerseFetcher::new(&config.api) {
        Ok(fetcher) => fetcher,
        Err(e) => fail(e),
    };

    let runner = VerseRunner::new(fetcher);
    let mut stdout = std::io::stdout();

    if let Err(e) = runner.run(&invocation, &mut stdout).await {
        fail(e);
    }
}
