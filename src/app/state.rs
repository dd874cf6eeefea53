use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use tracing::{debug, info};

use super::{Action, KeyMod};
use crate::nav::{FetchRequest, FetchResponse, Navigator};
use crate::source::{ByteSource, Meta};
use crate::ui::{HelpPopup, HexView, InfoBar, StatusBar, help_area};

/// イベント待ちのタイムアウト（読み込み結果の反映間隔を兼ねる）
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// アプリケーション状態
pub struct App {
    /// ページ・カーソルの状態機械
    navigator: Navigator,
    /// 読み出し元
    source: Arc<dyn ByteSource>,
    /// 読み込みスレッドからの結果送信側
    fetch_tx: Sender<FetchResponse>,
    /// 読み込みスレッドからの結果受信側
    fetch_rx: Receiver<FetchResponse>,
    /// 終了フラグ
    should_quit: bool,
}

impl App {
    /// ソースを一度statしてアプリケーションを作成
    pub fn new(source: Arc<dyn ByteSource>, path: impl Into<String>) -> Result<Self> {
        let meta = Meta::probe(source.as_ref(), path)?;
        info!(path = %meta.path, size = meta.size, "opened source");

        let (fetch_tx, fetch_rx) = mpsc::channel();
        Ok(Self {
            navigator: Navigator::new(meta),
            source,
            fetch_tx,
            fetch_rx,
            should_quit: false,
        })
    }

    /// 最初のページを要求
    pub fn start(&mut self) {
        let request = self.navigator.start();
        self.process_fetch(request);
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// 終了すべきかどうか
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// アクションを実行
    pub fn execute(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        if let Some(request) = self.navigator.dispatch(action) {
            self.process_fetch(request);
        }
    }

    /// 読み込みを別スレッドで実行し、結果をチャネルで返す
    fn process_fetch(&self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.fetch_tx.clone();
        std::thread::spawn(move || {
            let result = source
                .read(request.offset, request.length)
                .map_err(|e| e.to_string());
            let _ = tx.send(FetchResponse::new(request, result));
        });
    }

    /// 届いている読み込み結果をすべて反映
    pub fn drain_fetches(&mut self) {
        while let Ok(response) = self.fetch_rx.try_recv() {
            self.navigator.page_loaded(response);
        }
    }

    /// 読み込み結果を待つ（テスト・非対話用）
    pub fn wait_fetch(&mut self, timeout: Duration) -> bool {
        match self.fetch_rx.recv_timeout(timeout) {
            Ok(response) => self.navigator.page_loaded(response),
            Err(_) => false,
        }
    }

    /// イベントを処理
    pub fn handle_event(&mut self) -> Result<()> {
        self.drain_fetches();

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }

                let mods = KeyMod {
                    ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
                    alt: key.modifiers.contains(KeyModifiers::ALT),
                };

                let action = Action::from_key(key.code, mods);
                if action != Action::None {
                    debug!(?action, "key");
                    self.execute(action);
                }
            }
        }
        Ok(())
    }

    /// UIを描画
    pub fn draw(&self, frame: &mut Frame) {
        let nav = &self.navigator;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // タイトル・パス・サイズ
                Constraint::Min(1),    // HEXビュー
                Constraint::Length(4), // オフセット・インスペクタ
            ])
            .split(frame.area());

        frame.render_widget(InfoBar::new(nav.meta()), layout[0]);

        // 空ファイルではハイライトしない
        let active = (nav.size() > 0).then_some(nav.active());
        let hex_view = HexView::new(&nav.page().data)
            .offset(nav.offset())
            .active(active);
        frame.render_widget(hex_view, layout[1]);

        let status = StatusBar::new(
            nav.position(),
            nav.jump_input(),
            nav.inspected_bytes(),
            &nav.page().state,
        );
        frame.render_widget(status, layout[2]);

        if nav.help().is_shown() {
            frame.render_widget(HelpPopup, help_area(layout[1]));
        }
    }
}
