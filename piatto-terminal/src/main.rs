use piatto_catalog::Catalog;
use piatto_order::OrderRegistry;
use piatto_terminal::{Session, TerminalConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "piatto_terminal=info,piatto_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = TerminalConfig::load()?;
    tracing::info!("Starting terminal with promo discount {}", config.promo.discount);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        Catalog::standard(),
        config,
        OrderRegistry::global(),
    );
    session.run()
}
