fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    log::info!("Starting custdash {}", env!("CARGO_PKG_VERSION"));

    let channels = custdash_bridge::BridgeChannels::default();
    custdash_backend::run(channels.backend_rx, channels.backend_tx);
    custdash_frontend::run(channels.frontend_rx, channels.frontend_tx)
}
