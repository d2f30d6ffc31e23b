use owo_colors::OwoColorize;
use protoscope_engine::{RequestChunk, format_elapsed};

/// Print one line per chunk: index, elapsed time of the first member, and
/// the shared method with a count suffix for runs longer than one.
pub fn print_timeline(chunks: &[RequestChunk], enable_color: bool) {
    if chunks.is_empty() {
        let msg = "No requests to display";
        if enable_color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    for (index, chunk) in chunks.iter().enumerate() {
        let index_display = format!("{:>3}", index);
        let time_display = format!("[{:>5}]", format_elapsed(chunk.started_at));
        let label = if chunk.count > 1 {
            format!("{} ({})", chunk.method, chunk.count)
        } else {
            chunk.method.clone()
        };

        if enable_color {
            let label_colored = if chunk.errored {
                format!("{}", label.red())
            } else if chunk.pending {
                format!("{}", label.bright_black())
            } else {
                label
            };
            println!(
                "{} {} {}",
                index_display.bright_black(),
                time_display.bright_black(),
                label_colored
            );
        } else {
            println!("{} {} {}", index_display, time_display, label);
        }
    }
}
