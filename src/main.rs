mod config;
mod controller;
mod logging;
mod models;
mod storage;
mod ui;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::storage::{JsonFileStore, Store};
use crate::ui::{App, render};

/// 终端闪卡
#[derive(Debug, Parser)]
#[command(name = "flashdeck", version, about)]
struct Cli {
    /// 配置文件路径 (默认 ~/.config/flashdeck/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 卡组文件路径，覆盖配置文件中的 storage.data_file
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    let store = JsonFileStore::new(cli.data_file.unwrap_or_else(|| config.data_file()));
    info!(path = %store.path().display(), "starting");

    // 加载卡组
    let mut app = App::new(store, config.keys.new_card);

    // 设置终端
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal()?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}

fn run_app<S: Store>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let event = crossterm::event::read()?;
        if ui::handle_event(app, event) {
            break;
        }
    }
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

/// panic 时先恢复终端，否则错误信息会被备用屏幕吞掉
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
