/// Integration test: the render pass as the game runs it each frame —
/// draw a HUD, pop a message, erase and redraw when the numbers change.

use gunpy::display::{Color, Display};
use gunpy::message::{Message, MessageKind};
use gunpy::settings::MESSAGE_ANIM_FRAMES;
use gunpy::TextRenderer;

fn lit_pixels(fb: &Display) -> usize {
    fb.buffer().iter().map(|b| b.count_ones() as usize).sum()
}

#[test]
fn hud_draws_and_updates_in_place() {
    let mut fb = Display::new();
    let mut text = TextRenderer::new(7);

    text.set_cursor(2, 0);
    text.print(&mut fb, "SCORE: 120");
    let before = lit_pixels(&fb);
    assert!(before > 0);

    // Score changed: erase the old line, paint the new one.
    text.set_text_color(Color::Black);
    text.set_cursor(2, 0);
    text.print(&mut fb, "SCORE: 120");
    assert_eq!(lit_pixels(&fb), 0);

    text.set_text_color(Color::White);
    text.set_cursor(2, 0);
    text.print(&mut fb, "SCORE: 450");
    assert!(lit_pixels(&fb) > 0);
}

#[test]
fn multi_line_help_screen_keeps_its_margin() {
    let mut fb = Display::new();
    let mut text = TextRenderer::new(8);

    text.set_cursor(10, 4);
    text.print(&mut fb, "MOVE: ARROWS\nFIRE: A\nPAUSE: B");

    // Three lines written, cursor back at the margin plus one line's text.
    let (x, y) = text.cursor();
    assert_eq!(y, 4 + 2 * 8);
    assert_eq!(x, 10 + 8 * 5);
}

#[test]
fn message_lifecycle_renders_while_live() {
    let mut fb = Display::new();
    let mut text = TextRenderer::new(7);

    let mut msg = Message::new(MessageKind::LevelUp, 0, 300);
    msg.is_live = true;
    assert_eq!(msg.anim, MESSAGE_ANIM_FRAMES);

    // A few frames of the countdown, drawing each time.
    for _ in 0..3 {
        assert!(msg.tick() > 0);
        text.set_cursor(30, 24);
        text.print(&mut fb, "LEVEL UP!");
    }
    assert!(lit_pixels(&fb) > 0);
    assert_eq!(msg.anim, MESSAGE_ANIM_FRAMES - 3);

    // Countdown expired: the game erases the caption.
    while msg.tick() > 0 {}
    msg.is_live = false;
    text.set_text_color(Color::Black);
    text.set_cursor(30, 24);
    text.print(&mut fb, "LEVEL UP!");
    assert_eq!(lit_pixels(&fb), 0);
}

#[test]
fn degenerate_input_never_disturbs_the_display() {
    let mut fb = Display::new();
    let mut text = TextRenderer::new(7);

    text.set_cursor(0, 0);
    text.print(&mut fb, " \t@~;#&*_{}|");
    assert_eq!(lit_pixels(&fb), 0);

    // Cursor still tracked the run, one advance per byte.
    assert_eq!(text.cursor(), (12 * 5, 0));
}
