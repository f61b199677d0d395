extern crate solar;

use solar::prelude::*;
use solar::window::backends::headless::HeadlessVisitor;

struct Noop;
impl Application for Noop {}

fn escape(pressed: bool) -> Event {
    let key = Key::Escape;
    if pressed {
        Event::InputDevice(InputEvent::KeyboardPressed { key })
    } else {
        Event::InputDevice(InputEvent::KeyboardReleased { key })
    }
}

fn headless(batches: Vec<Vec<Event>>) -> Engine {
    let settings = Settings::default();
    let mut visitor = HeadlessVisitor::new(settings.window.size);
    for v in batches {
        visitor.schedule(v);
    }

    let window = WindowSystem::from_visitor(Box::new(visitor));
    Engine::from_systems(settings, window, VideoSystem::headless()).unwrap()
}

#[test]
fn viewport_follows_framebuffer() {
    let sizes = [(0, 0), (1, 1), (800, 600), (1, 4096), (7680, 4320), (1024, 0)];
    let batches = sizes
        .iter()
        .map(|&(w, h)| vec![Event::Window(WindowEvent::Resized(w, h))])
        .collect();

    let mut engine = headless(batches);
    for &(w, h) in &sizes {
        engine.advance(&mut Noop).unwrap();

        let vp = engine.video.viewport();
        assert_eq!(vp.position, Vector2::new(0, 0));
        assert_eq!(vp.size, Vector2::new(w, h));
        assert_eq!(engine.window.framebuffer_dimensions(), Vector2::new(w, h));
    }
}

#[test]
fn escape_requests_close() {
    let mut engine = headless(vec![vec![escape(true)]]);
    assert!(!engine.window.should_close());

    // The press is polled at the end of the first frame...
    engine.advance(&mut Noop).unwrap();
    assert!(engine.input.is_key_down(Key::Escape));

    // ...and observed by the input processing of the next one.
    engine.advance(&mut Noop).unwrap();
    assert!(engine.window.should_close());
}

#[test]
fn other_keys_keep_running() {
    let other = Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Q });
    let mut engine = headless(vec![vec![other], vec![escape(true), escape(false)]]);

    for _ in 0..4 {
        engine.advance(&mut Noop).unwrap();
        assert!(!engine.window.should_close());
    }
}

#[test]
fn run_until_escape() {
    let mut engine = headless(vec![vec![], vec![], vec![escape(true)]]);
    engine.run(&mut Noop).unwrap();

    assert!(engine.window.should_close());
    assert_eq!(engine.frames(), 4);
}

#[test]
fn headless_settings() {
    let settings = Settings::from_json(r#"{ "headless": true }"#).unwrap();
    let mut engine = Engine::new(settings).unwrap();

    engine.window.set_should_close(true);
    engine.run(&mut Noop).unwrap();
    assert_eq!(engine.frames(), 0);
    assert_eq!(engine.video.viewport(), Viewport::fullscreen(Vector2::new(800, 600)));
}

#[test]
fn every_frame_clears_to_settings_color() {
    let mut engine = headless(vec![]);
    assert_eq!(engine.video.clear_color(), None);

    for _ in 0..2 {
        engine.advance(&mut Noop).unwrap();
        assert_eq!(
            engine.video.clear_color(),
            Some(Color::from([0.2, 0.3, 0.3, 1.0]))
        );
    }
}

#[test]
fn custom_clear_color() {
    let json = r#"{ "headless": true, "clear_color": { "r": 1.0, "g": 0.0, "b": 0.5, "a": 1.0 } }"#;
    let settings = Settings::from_json(json).unwrap();
    let mut engine = Engine::new(settings).unwrap();

    engine.advance(&mut Noop).unwrap();
    assert_eq!(
        engine.video.clear_color(),
        Some(Color::new(1.0, 0.0, 0.5, 1.0))
    );
}
