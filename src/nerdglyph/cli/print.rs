use colored::Colorize;
use nerdglyph::api::{CmdMessage, GlyphMatch, MessageLevel};
use unicode_width::UnicodeWidthStr;

// Columns reserved for the glyph itself; zero-width glyphs get padded up to it.
const GLYPH_WIDTH: usize = 1;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    messages.iter().for_each(print_message);
}

pub(super) fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
    }
}

pub(super) fn print_matches(matches: &[GlyphMatch]) {
    if matches.is_empty() {
        println!("No glyphs found matching your search.");
        return;
    }

    println!("Found {} matching glyph(s):\n", matches.len());
    for m in matches {
        let padding = GLYPH_WIDTH.saturating_sub(m.glyph.width());
        println!("  {}{}  {}", m.glyph, " ".repeat(padding), m.name.bold());
        println!("     Code: {}", m.code_label().dimmed());
        println!();
    }
}
