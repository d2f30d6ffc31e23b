use owo_colors::OwoColorize;
use protoscope_engine::{SessionSummary, format_elapsed};
use protoscope_types::SessionMeta;

pub fn print_summary(meta: Option<&SessionMeta>, stats: &SessionSummary, enable_color: bool) {
    if enable_color {
        println!("{}", "---".bright_black());
        println!("{}", "Session Summary:".bright_white().bold());
    } else {
        println!("---");
        println!("Session Summary:");
    }

    if let Some(meta) = meta {
        if let Some(title) = &meta.title {
            println!("  Title: {}", title);
        }
        println!("  Captured: {}", meta.captured_at.to_rfc3339());
    }

    if enable_color {
        println!(
            "  {}: {}",
            "Requests".cyan(),
            stats.total_requests.to_string().bright_white()
        );
        println!(
            "    Pending: {}",
            stats.pending.to_string().bright_black()
        );
        println!("    Errored: {}", stats.errored.to_string().red());
        println!("    Methods: {}", stats.distinct_methods);
    } else {
        println!("  Requests: {}", stats.total_requests);
        println!("    Pending: {}", stats.pending);
        println!("    Errored: {}", stats.errored);
        println!("    Methods: {}", stats.distinct_methods);
    }

    if !stats.by_class.is_empty() {
        if enable_color {
            println!("  {}:", "By class".cyan());
        } else {
            println!("  By class:");
        }
        for (class, count) in &stats.by_class {
            println!("    {}: {}", class, count);
        }
    }

    if let Some(duration) = stats.duration_ms {
        if enable_color {
            println!("  {}: {}", "Duration".cyan(), format_elapsed(duration));
        } else {
            println!("  Duration: {}", format_elapsed(duration));
        }
    }
}
