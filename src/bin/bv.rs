use std::io::{self, Write as _};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute, queue,
    terminal::{
        BeginSynchronizedUpdate, EndSynchronizedUpdate, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use bv::app::App;
use bv::cli::ViewArgs;
use bv::logging;
use bv::source::FileSource;

fn main() -> Result<()> {
    let args = ViewArgs::parse();
    logging::init_file(&args.log_dir())?;

    // ファイルを開けなければ端末に触れる前に終了
    let source = FileSource::open(&args.file)?;
    let path = args.file.display().to_string();
    let mut app = App::new(Arc::new(source), path.clone())?;
    info!(%path, "starting viewer");

    // ターミナルの初期化
    // マウスモードは無効（ターミナルでのテキスト選択・コピーを優先）
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(format!("bv - {}", path)))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // アプリケーションの実行
    let result = run_app(&mut terminal, &mut app);

    // ターミナルの後処理
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    app.start();

    // メインループ
    loop {
        // Synchronized Update: 描画のちらつきを防止
        queue!(terminal.backend_mut(), BeginSynchronizedUpdate)?;
        terminal.draw(|f| app.draw(f))?;
        queue!(terminal.backend_mut(), EndSynchronizedUpdate)?;
        terminal.backend_mut().flush()?;

        app.handle_event()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
