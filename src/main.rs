//! GlassDesk console status.
//!
//! Opens the same database and settings the command server uses and prints
//! a one-shot overview: memory, note and vault counts, this machine's IP and
//! a generator self-check. With `--watch` it keeps the memory line updating
//! on the configured dashboard interval until Ctrl-C.

use std::sync::{Arc, Mutex};

use glassdesk::app::App;
use glassdesk::logging;
use glassdesk::platform;
use glassdesk::services::settings_engine::SettingsEngine;
use glassdesk::types::settings::DashboardSettings;
use glassdesk::views::bridge::{CommandBridge, LocalBridge};
use glassdesk::views::dashboard::{DashboardView, StatsPoller};
use glassdesk::views::generator::GeneratorView;
use glassdesk::views::notes::NotesView;
use glassdesk::views::remote::RemoteView;
use glassdesk::views::vault::VaultView;
use glassdesk::views::Notification;

fn report(n: Option<Notification>) {
    if let Some(n) = n {
        eprintln!("  ! {}", n.message);
    }
}

async fn watch(
    bridge: Arc<dyn CommandBridge>,
    settings: DashboardSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let view = Arc::new(Mutex::new(DashboardView::new()));
    let poller = StatsPoller::from_settings(bridge, Arc::clone(&view), &settings);
    let mut ticker = tokio::time::interval(settings.interval());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            _ = &mut ctrl_c => break,
            _ = ticker.tick() => {
                if let Ok(v) = view.lock() {
                    println!("  memory     {}", v.stats());
                }
            }
        }
    }
    poller.stop().await;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    logging::init(&logging::startup_level(&mut settings_engine));

    let db_path = platform::default_db_path();
    let app = App::with_settings(&db_path.to_string_lossy(), settings_engine)?;
    let generator_bounds = app.settings().generator.clone();
    let dashboard_settings = app.settings().dashboard.clone();
    let bridge = Arc::new(LocalBridge::new(app));

    let mut dashboard = DashboardView::new();
    report(dashboard.refresh(bridge.as_ref()));
    let mut notes = NotesView::new();
    report(notes.refresh(bridge.as_ref()));
    let mut vault = VaultView::new();
    report(vault.refresh(bridge.as_ref()));
    let mut remote = RemoteView::new();
    report(remote.load_ip(bridge.as_ref()));
    let mut generator = GeneratorView::new(generator_bounds);
    let generated = generator.generate(bridge.as_ref());

    println!("GlassDesk v{}", env!("CARGO_PKG_VERSION"));
    println!("  database   {}", db_path.display());
    println!("  memory     {}", dashboard.stats());
    println!("  notes      {}", notes.notes().len());
    println!("  vault      {} entries", vault.entries().len());
    println!("  ip         {}", remote.my_ip());
    match generator.summary() {
        Some(summary) => println!("  generator  ok ({})", summary),
        None => eprintln!("  ! {}", generated.message),
    }

    if std::env::args().skip(1).any(|a| a == "--watch") {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(watch(bridge, dashboard_settings))?;
    }
    Ok(())
}
