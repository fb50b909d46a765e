// ~/quote-widget/src/main.rs

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod logging;
mod cli;
mod config;
mod desktop;
mod error;
mod paths;
mod quote;
mod widget;

use clap::Parser;

use crate::{
    cli::Cli,
    config::{default_config_path, load_config, WidgetConfig},
    paths::widget_root_dir,
    quote::daily_quote,
    widget::run_widget,
};

pub struct QuoteWidgetApp {
    cli: Cli,
    config: WidgetConfig,
}

impl QuoteWidgetApp {
    pub fn new(cli: Cli) -> Self {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        let mut config = load_config(&config_path);
        cli.apply_overrides(&mut config);
        info!("Quote policy: {:?}", config.quote_policy);
        Self { cli, config }
    }

    pub fn run(&self) {
        let today = chrono::Local::now().date_naive();
        let quote = daily_quote(&self.config, &widget_root_dir(), today);

        if self.cli.print {
            println!("{quote}");
            return;
        }

        match run_widget(quote, &self.config) {
            Ok(()) => info!("Widget closed"),
            Err(e) => error!("Widget window error: {e}"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);
    info!("Quote widget starting");

    let app = QuoteWidgetApp::new(cli);
    app.run();

    info!("Quote widget exiting");
}
