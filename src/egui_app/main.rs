/**
 * SiteDesk Desktop Client - Main Entry Point
 *
 * Loads configuration, installs logging and runs the eframe application.
 * An optional first argument is opened as a route, so password reset links
 * can be handed straight to the binary.
 */
use std::time::{Duration, Instant};

use eframe::egui;
use sitedesk::egui_app::pages::{page_meta, PageMeta};
use sitedesk::egui_app::theme::styles;
use sitedesk::egui_app::{views, AppState, Config, Route};
use tracing_subscriber::EnvFilter;

/// Repaint interval while replies or redirects are outstanding
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sitedesk=info")),
        )
        .init();

    let config = Config::load()?;
    let start = std::env::args().nth(1).map(|arg| Route::parse(&arg));

    let mut state = AppState::new(config)?;
    if let Some(route) = start {
        state.navigate(route);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PageMeta::app_name())
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        PageMeta::app_name(),
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(SiteDeskApp::new(state)))
        }),
    )?;
    Ok(())
}

/// Main application state
struct SiteDeskApp {
    state: AppState,
    /// Route whose title is on the window
    titled: Option<Route>,
}

impl SiteDeskApp {
    fn new(state: AppState) -> Self {
        Self { state, titled: None }
    }
}

impl eframe::App for SiteDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.tick(now);

        let route = self.state.current_route().clone();
        if self.titled.as_ref() != Some(&route) {
            page_meta(&route).apply(ctx);
            self.titled = Some(route);
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_alert(ctx, &self.state);

        if self.state.needs_polling() {
            let wait = self
                .state
                .next_deadline(now)
                .map_or(POLL_INTERVAL, |left| left.min(POLL_INTERVAL));
            ctx.request_repaint_after(wait);
        }
    }
}
