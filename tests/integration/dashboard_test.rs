use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tempfile::TempDir;
use treetop::core::{FileRegistry, TailLimits};
use treetop::ui::monitor_tui::{DashboardApp, DashboardEvent, View, TITLE};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 12;

struct Fixture {
    _dir: TempDir,
    paths: Vec<PathBuf>,
    app: DashboardApp,
    terminal: Terminal<TestBackend>,
}

/// Files are listed in watch list order; the dashboard shows them reversed
fn fixture(files: &[(&str, &str)]) -> Fixture {
    let dir = TempDir::new().unwrap();
    let paths: Vec<PathBuf> = files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            let mut file = File::create(&path).unwrap();
            file.write_all(content.as_bytes()).unwrap();
            file.set_modified(UNIX_EPOCH + Duration::from_secs(1_000))
                .unwrap();
            path
        })
        .collect();

    let (registry, _) = FileRegistry::open_all(&paths, TailLimits::default());
    let app = DashboardApp::new(registry, Duration::from_secs(10));
    let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();

    Fixture {
        _dir: dir,
        paths,
        app,
        terminal,
    }
}

impl Fixture {
    fn refresh(&mut self) {
        self.app.refresh(&mut self.terminal).unwrap();
    }

    fn buffer(&self) -> Buffer {
        self.terminal.backend().buffer().clone()
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }
}

fn append(path: &PathBuf, text: &str, mtime_secs: u64) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.set_modified(UNIX_EPOCH + Duration::from_secs(mtime_secs))
        .unwrap();
}

#[test]
fn test_frame_has_centered_title() {
    let mut fx = fixture(&[("a.log", "x\n")]);
    fx.refresh();
    let top = fx.row(0);
    assert!(top.contains(TITLE));
    let start = top.find(TITLE).unwrap();
    let before = top[..start].chars().count();
    let after = top[start + TITLE.len()..].chars().count();
    assert!(before.abs_diff(after) <= 1, "title not centered: {:?}", top);
}

#[test]
fn test_rows_follow_registry_order() {
    let mut fx = fixture(&[("a.log", "line1\nline2\n"), ("b.log", "only b\n")]);
    fx.refresh();

    let first = fx.row(2);
    let second = fx.row(3);
    assert!(first.contains("b.log only b"), "{:?}", first);
    assert!(second.contains("a.log line2"), "{:?}", second);
    assert!(first[3..].starts_with("-->"), "{:?}", first);
}

#[test]
fn test_updated_marker_shows_once() {
    let mut fx = fixture(&[("a.log", "line1\nline2\n"), ("b.log", "b\n")]);

    // First poll always counts as an update
    fx.refresh();
    assert!(fx.row(2).contains("-->* b.log"), "{:?}", fx.row(2));
    assert!(fx.row(3).contains("   * a.log"), "{:?}", fx.row(3));

    fx.refresh();
    assert!(fx.row(2).contains("-->  b.log"), "{:?}", fx.row(2));
    assert!(fx.row(3).contains("     a.log"), "{:?}", fx.row(3));

    append(&fx.paths[0], "line3\n", 2_000);
    fx.refresh();
    assert!(fx.row(2).contains("-->  b.log"), "{:?}", fx.row(2));
    assert!(fx.row(3).contains("   * a.log line3"), "{:?}", fx.row(3));

    fx.refresh();
    assert!(fx.row(3).contains("     a.log line3"), "{:?}", fx.row(3));
}

#[test]
fn test_idle_refresh_changes_nothing() {
    let mut fx = fixture(&[("a.log", "a\n"), ("b.log", "b\n")]);
    fx.refresh();
    fx.refresh();
    let before = fx.buffer();

    assert_eq!(fx.app.registry.poll().unwrap(), 0);
    fx.refresh();
    assert_eq!(fx.buffer(), before);
}

#[test]
fn test_open_then_back_restores_list() {
    let mut fx = fixture(&[("a.log", "a1\na2\n"), ("b.log", "b1\nb2\n")]);
    fx.refresh();
    fx.refresh();
    let list_view = fx.buffer();

    fx.app.handle_event(DashboardEvent::Open);
    assert_eq!(fx.app.view, View::Detail(0));
    fx.refresh();
    assert!(fx.row(2).contains("[b.log]"), "{:?}", fx.row(2));
    assert!(fx.row(3).contains("b1"), "{:?}", fx.row(3));
    assert!(fx.row(4).contains("b2"), "{:?}", fx.row(4));
    assert_ne!(fx.buffer(), list_view);

    fx.app.handle_event(DashboardEvent::Back);
    fx.refresh();
    assert_eq!(fx.buffer(), list_view);
}

#[test]
fn test_detail_view_follows_appends() {
    let mut fx = fixture(&[("a.log", "first\n")]);
    fx.refresh();
    fx.app.handle_event(DashboardEvent::Open);
    fx.refresh();
    assert!(fx.row(3).contains("first"));

    append(&fx.paths[0], "second\n", 2_000);
    fx.refresh();
    assert!(fx.row(4).contains("second"), "{:?}", fx.row(4));
}

#[test]
fn test_detail_view_fits_inside_pane() {
    let long = "z".repeat(500);
    let mut fx = fixture(&[("a.log", &long)]);
    fx.refresh();
    fx.app.handle_event(DashboardEvent::Open);
    fx.refresh();

    // Pane spans rows 2..=10, text rows 3..=9, border columns 1 and 58
    for y in 3..HEIGHT - 2 {
        let row: Vec<char> = fx.row(y).chars().collect();
        assert_eq!(row[1], '│');
        assert_eq!(row[usize::from(WIDTH) - 2], '│');
    }
}

#[test]
fn test_vanished_file_stops_the_dashboard() {
    let mut fx = fixture(&[("gone.log", "bye\n")]);
    fx.refresh();

    fs::remove_file(&fx.paths[0]).unwrap();
    let err = fx.app.refresh(&mut fx.terminal).unwrap_err();
    assert!(format!("{:#}", err).contains("gone.log"));
}

#[test]
fn test_list_row_shows_tabs_and_escapes_like_detail_pane() {
    let mut fx = fixture(&[("a.log", "start\n\x1b[31mERR\x1b[0m\tdone\ttabs\n")]);
    fx.refresh();
    let row = fx.row(2);
    assert!(row.contains("a.log .[31mERR.[0m    done    tabs"), "{:?}", row);

    fx.app.handle_event(DashboardEvent::Open);
    fx.refresh();
    assert!(fx.row(4).contains(".[31mERR.[0m    done    tabs"), "{:?}", fx.row(4));
}
