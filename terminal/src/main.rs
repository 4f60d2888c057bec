//! # Erdtree Terminal - Binary Entry Point
//!
//! Native desktop data browser for an Elden Ring game-data REST API.
//! Initializes logging, resolves configuration from the environment, and
//! hands the [`App`] orchestrator to eframe's event loop.

use terminal::app::App;
use terminal::core::Config;
use terminal::ui;
use terminal::ui::theme::Theme;
use tracing_subscriber::EnvFilter;

/// eframe shell around the application orchestrator.
struct TerminalWindow {
    app: App,
}

impl TerminalWindow {
    fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self { app }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain async results before rendering this frame
        self.app.on_tick();

        ui::render(ctx, &mut self.app);

        // Wake up regularly so task results land without user input
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("terminal=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Refusing to start without valid configuration");
            std::process::exit(1);
        }
    };

    let app = App::new(&config);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Erdtree Terminal")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Erdtree Terminal",
        native_options,
        Box::new(|cc| Ok(Box::new(TerminalWindow::new(cc, app)))),
    )
}
