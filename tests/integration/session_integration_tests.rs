// 编辑会话集成测试
//
// 使用记录帧的渲染器和假的进程执行器驱动完整的主循环

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use aoi::app::{Session, SAVED_MESSAGE};
use aoi::config::Config;
use aoi::core::{EditorState, Position};
use aoi::io::FileIO;
use aoi::process::{build_command, ProcessRunner, RunError, RunOutcome};
use aoi::render::{Renderer, ScreenSize};
use aoi::syntax::TokenKind;
use aoi::viewmodel::ViewModel;
use aoi::viewport::Viewport;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug)]
struct RecordingRenderer {
    size: ScreenSize,
    frames: Vec<ViewModel>,
    suspended: bool,
    suspend_count: usize,
}

impl RecordingRenderer {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            size: ScreenSize { rows, cols },
            frames: Vec::new(),
            suspended: false,
            suspend_count: 0,
        }
    }

    fn last_frame(&self) -> &ViewModel {
        self.frames.last().expect("no frame drawn")
    }
}

impl Renderer for RecordingRenderer {
    fn text_area(&self) -> io::Result<ScreenSize> {
        Ok(self.size)
    }

    fn draw(&mut self, view: &ViewModel) -> io::Result<()> {
        assert!(!self.suspended, "drawing while suspended");
        self.frames.push(view.clone());
        Ok(())
    }

    fn suspend(&mut self) -> io::Result<()> {
        self.suspended = true;
        self.suspend_count += 1;
        Ok(())
    }

    fn resume(&mut self) -> io::Result<()> {
        self.suspended = false;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct FakeRunner {
    commands: Vec<String>,
    outcome: Option<RunOutcome>,
    acks: usize,
}

impl ProcessRunner for FakeRunner {
    fn run(&mut self, command: &str) -> Result<RunOutcome, RunError> {
        self.commands.push(command.to_string());
        self.outcome.ok_or_else(|| RunError::Spawn {
            command: command.to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "sh"),
        })
    }

    fn wait_for_ack(&mut self, _outcome: &RunOutcome) -> io::Result<()> {
        self.acks += 1;
        Ok(())
    }
}

fn open_session(path: &Path, rows: usize, cols: usize, runner: FakeRunner) -> Session<RecordingRenderer, FakeRunner> {
    let document = FileIO::load_document(path);
    let state = EditorState::new(document, path, Viewport::new(rows, cols));
    let config = Config {
        build_command: "g++ {file} -o a.out && ./a.out".to_string(),
        ..Config::default()
    };
    Session::new(state, &config, RecordingRenderer::new(rows, cols), runner)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> impl Iterator<Item = Event> + '_ {
    text.chars().map(|c| key(KeyCode::Char(c)))
}

fn script(events: impl IntoIterator<Item = Event>) -> impl FnMut() -> io::Result<Event> {
    let mut queue: VecDeque<Event> = events.into_iter().collect();
    move || {
        queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[test]
fn test_type_save_and_quit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.cpp");
    let mut session = open_session(&path, 10, 40, FakeRunner::default());

    let mut events: Vec<Event> = typed("int main() {").collect();
    events.push(key(KeyCode::Enter));
    events.push(key(KeyCode::Char('}')));
    events.push(key(KeyCode::F(2)));
    events.push(key(KeyCode::F(10)));

    session.run_with(script(events)).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"int main() {\n}\n");
    assert!(!session.state().is_dirty());

    // 保存后的那一帧显示保存提示
    let frames = &session.renderer().frames;
    let saved = &frames[frames.len() - 1];
    assert_eq!(saved.status.message.as_deref(), Some(SAVED_MESSAGE));
    assert!(!saved.status.modified);
}

#[test]
fn test_frames_carry_highlighting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.cpp");
    fs::write(&path, "#include <cstdio>\nint x = 42; // answer\n").unwrap();

    let mut session = open_session(&path, 10, 80, FakeRunner::default());
    session.render().unwrap();

    let frame = session.renderer().last_frame();
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.lines[0].spans[0].kind, TokenKind::Preprocessor);

    let kinds: Vec<TokenKind> = frame.lines[1].spans.iter().map(|s| s.kind).collect();
    assert_eq!(kinds[0], TokenKind::Keyword);
    assert!(kinds.contains(&TokenKind::NumericLiteral));
    assert_eq!(kinds.last(), Some(&TokenKind::LineComment));
    assert_eq!(frame.cursor, (0, 0));
}

#[test]
fn test_quit_without_saving_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.cpp");
    fs::write(&path, "old\n").unwrap();

    let mut session = open_session(&path, 10, 40, FakeRunner::default());
    let mut events: Vec<Event> = typed("new ").collect();
    events.push(Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)));

    session.run_with(script(events)).unwrap();

    assert!(session.state().is_dirty());
    assert_eq!(fs::read(&path).unwrap(), b"old\n");
}

#[test]
fn test_save_failure_keeps_dirty_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("a.cpp");

    let mut session = open_session(&path, 10, 40, FakeRunner::default());
    for event in typed("x") {
        session.handle_event(event).unwrap();
    }
    session.handle_event(key(KeyCode::F(2))).unwrap();

    assert!(session.state().is_dirty());
    let message = session.state().message().unwrap();
    assert!(message.starts_with("Save failed:"), "{message}");
}

#[test]
fn test_build_and_run_saves_suspends_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sol.cpp");
    let runner = FakeRunner {
        outcome: Some(RunOutcome::Exited(1)),
        ..FakeRunner::default()
    };

    let mut session = open_session(&path, 10, 40, runner);
    for event in typed("int") {
        session.handle_event(event).unwrap();
    }
    let flow = session.handle_event(key(KeyCode::F(5))).unwrap();
    assert!(flow.is_continue());

    // 先保存再运行
    assert_eq!(fs::read(&path).unwrap(), b"int\n");
    let expected = build_command("g++ {file} -o a.out && ./a.out", &path);
    assert_eq!(session.runner().commands, vec![expected]);
    assert_eq!(session.runner().acks, 1);

    assert_eq!(session.renderer().suspend_count, 1);
    assert!(!session.renderer().suspended);
    assert_eq!(session.state().message(), Some("Run failed (exit status 1)"));

    // 失败的构建不影响继续编辑
    session.handle_event(key(KeyCode::Backspace)).unwrap();
    assert_eq!(session.state().cursor(), Position::new(0, 2));
}

#[test]
fn test_spawn_failure_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sol.cpp");

    let mut session = open_session(&path, 10, 40, FakeRunner::default());
    session.handle_event(key(KeyCode::F(5))).unwrap();

    assert!(session.state().message().unwrap().starts_with("Run failed:"));
    assert_eq!(session.runner().acks, 0);
    assert!(!session.renderer().suspended);
}

#[test]
fn test_successful_run_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sol.cpp");
    let runner = FakeRunner {
        outcome: Some(RunOutcome::Exited(0)),
        ..FakeRunner::default()
    };

    let mut session = open_session(&path, 10, 40, runner);
    session.handle_event(key(KeyCode::F(5))).unwrap();
    assert_eq!(session.state().message(), Some("Run finished (exit status 0)"));
}

#[test]
fn test_viewport_follows_cursor_in_frames() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.cpp");
    let content: String = (0..50).map(|i| format!("int v{i} = {i};\n")).collect();
    fs::write(&path, content).unwrap();

    let mut session = open_session(&path, 5, 8, FakeRunner::default());
    let mut events = vec![key(KeyCode::Down); 20];
    events.push(key(KeyCode::End));
    events.push(key(KeyCode::F(10)));

    session.run_with(script(events)).unwrap();

    let frame = session.renderer().last_frame();
    let viewport = session.state().viewport();
    assert_eq!(session.state().cursor(), Position::new(20, 13));
    assert_eq!(viewport.top_row(), 16);
    assert_eq!(viewport.left_col(), 6);
    assert_eq!(frame.cursor, (4, 7));
    assert_eq!(frame.lines.len(), 5);
    assert!(frame.lines.iter().all(|line| line.spans.iter().all(|s| s.columns.end <= 8)));
}

#[test]
fn test_unbound_keys_and_resize_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.cpp");

    let mut session = open_session(&path, 10, 40, FakeRunner::default());
    assert!(session.handle_event(key(KeyCode::Tab)).unwrap().is_continue());
    assert!(session.handle_event(Event::Resize(100, 40)).unwrap().is_continue());
    assert!(!session.state().is_dirty());
}
