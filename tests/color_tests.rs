//! ANSI color output of the pretty renderer
//!
//! Every test in this binary forces colors on, so the global override never
//! races with tests that expect plain output.

use colored::Color;
use context_logger::prelude::*;
use context_logger::LevelPalette;
use tempfile::NamedTempFile;

fn render_with<F>(build: F, ctx: &Context, level: LogLevel, message: &str, fields: Fields) -> String
where
    F: FnOnce(LogWriter) -> PrettyHandler,
{
    colored::control::set_override(true);

    let file = NamedTempFile::new().expect("Failed to create temp file");
    let writer = LogWriter::new(file.reopen().expect("Failed to reopen temp file"));
    let logger = Logger::from_handler(ContextHandler::new(std::sync::Arc::new(build(writer))));

    logger.log(ctx, level, message, fields).expect("emission should succeed");
    std::fs::read_to_string(file.path()).expect("Failed to read log file")
}

#[test]
fn test_level_colors() {
    let cases = [
        (LogLevel::Debug, "\x1b[35mDEBUG\x1b[0m"),
        (LogLevel::Info, "\x1b[34mINFO\x1b[0m"),
        (LogLevel::Warn, "\x1b[33mWARN\x1b[0m"),
        (LogLevel::Error, "\x1b[31mERROR\x1b[0m"),
    ];

    for (level, expected) in cases {
        let output = render_with(
            |w| PrettyHandler::new(w, LogLevel::Debug),
            &Context::background(),
            level,
            "colored",
            Fields::new(),
        );
        assert!(output.contains(expected), "{:?}: {:?}", level, output);
    }
}

#[test]
fn test_error_scenario_markup() {
    let ctx = Context::background().with_request_id("abc-123");
    let output = render_with(
        |w| PrettyHandler::new(w, LogLevel::Debug),
        &ctx,
        LogLevel::Error,
        "disk full",
        fields! { "path" => "/tmp" },
    );

    let header = output.lines().next().unwrap();
    assert!(header.contains("\x1b[31mERROR\x1b[0m"));
    assert!(header.contains("\x1b[4;37mdisk full\x1b[0m"));

    let msg_pos = output.find("disk full").unwrap();
    assert!(output.find("/tmp").unwrap() > msg_pos);
    assert!(output.find("abc-123").unwrap() > msg_pos);
}

#[test]
fn test_missing_palette_entry_uses_fallback() {
    let output = render_with(
        |w| {
            PrettyHandler::new(w, LogLevel::Debug)
                .with_palette(LevelPalette::empty(Color::Green).with_color(LogLevel::Error, Color::Red))
        },
        &Context::background(),
        LogLevel::Debug,
        "fallback",
        Fields::new(),
    );

    assert!(output.contains("\x1b[32mDEBUG\x1b[0m"), "{:?}", output);
}

#[test]
fn test_colors_disabled_per_handler() {
    let output = render_with(
        |w| PrettyHandler::new(w, LogLevel::Debug).with_colors(false),
        &Context::background(),
        LogLevel::Warn,
        "plain",
        fields! { "k" => 1 },
    );

    assert!(!output.contains('\x1b'));
    assert!(output.contains("~[WARN]: plain"));
}
