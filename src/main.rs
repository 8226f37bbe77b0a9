//! Brick Breaker entry point
//!
//! Headless shell: boots a session from the on-disk config, plays one
//! scripted run to completion, prints the leaderboard and exits. A real
//! presentation layer would poll a window and keyboard instead; the core
//! contract is the same either way.

use std::path::Path;

use brick_breaker::screen::{FrameInput, GameSession, Screen, SessionEvent};
use brick_breaker::{SessionConfig, consts};

fn main() {
    env_logger::init();

    let config = SessionConfig::load_or_default(Path::new("brick-breaker.json"));
    log::info!(
        "starting session ({}x{}, save slot {})",
        config.viewport.width,
        config.viewport.height,
        config.save_path.display()
    );

    let mut session = GameSession::new(config);
    if let Some(notice) = session.take_notice() {
        eprintln!("notice: {notice}");
    }

    // New game from the selection screen
    session.frame(&FrameInput {
        new_game: true,
        ..Default::default()
    });

    // Track the ball until the run ends; a generous cap keeps a pathological
    // bounce loop from hanging the demo
    let mut frames: u64 = 0;
    while session.screen() == Screen::Play && frames < 1_000_000 {
        let state = session.state();
        let paddle_center = state.paddle.pos.x + consts::PADDLE_WIDTH / 2.0;
        let input = FrameInput {
            left: state.ball.pos.x < paddle_center,
            right: state.ball.pos.x > paddle_center,
            ..Default::default()
        };
        session.frame(&input);
        frames += 1;
    }

    let score = session.state().score;
    println!("run over after {frames} frames, score {score}");

    // Peek at the leaderboard the run was recorded on
    session.frame(&FrameInput {
        confirm: true,
        ..Default::default()
    });
    session.frame(&FrameInput {
        show_scores: true,
        ..Default::default()
    });
    println!("high scores:");
    for (rank, entry) in session.high_scores().entries().iter().enumerate() {
        println!("{:2}. {entry}", rank + 1);
    }
    if let Some(notice) = session.take_notice() {
        eprintln!("notice: {notice}");
    }

    // Back to selection, then quit from a fresh run, like a player would
    session.frame(&FrameInput {
        confirm: true,
        ..Default::default()
    });
    session.frame(&FrameInput {
        new_game: true,
        ..Default::default()
    });
    let event = session.frame(&FrameInput {
        quit: true,
        ..Default::default()
    });
    assert_eq!(event, Some(SessionEvent::Quit));
    log::info!("session quit");
}
