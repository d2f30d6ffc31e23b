use anyhow::Result;
use owo_colors::OwoColorize;
use protoscope_engine::{DetailResolution, RequestChunk, RequestDetail, format_elapsed};

/// Print the resolved detail records for one selected chunk.
///
/// Missing-summary anomalies go to stderr; rendering continues for the
/// records that did resolve, so the detail panel never silently shrinks.
pub fn print_details(
    chunk: &RequestChunk,
    resolution: &DetailResolution,
    enable_color: bool,
) -> Result<()> {
    for id in &resolution.missing {
        eprintln!(
            "Warning: selected request {} is not in the session store",
            id
        );
    }

    let heading = format!(
        "{} ({} of {} requests) at {}",
        chunk.method,
        resolution.records.len(),
        chunk.count,
        format_elapsed(chunk.started_at)
    );
    if enable_color {
        println!("{}", heading.bright_white().bold());
    } else {
        println!("{}", heading);
    }
    println!();

    for record in &resolution.records {
        print_record(record, enable_color)?;
    }

    Ok(())
}

fn print_record(record: &RequestDetail, enable_color: bool) -> Result<()> {
    let status = if record.request.errored {
        "errored"
    } else if record.request.pending {
        "pending"
    } else {
        "resolved"
    };

    if enable_color {
        let status_colored = match status {
            "errored" => format!("{}", status.red()),
            "pending" => format!("{}", status.bright_black()),
            _ => format!("{}", status.green()),
        };
        println!(
            "{} {} [{}]",
            "Request".cyan(),
            record.request.id,
            status_colored
        );
    } else {
        println!("Request {} [{}]", record.request.id, status);
    }
    println!("{}", serde_json::to_string_pretty(&record.request)?);

    if let Some(response) = &record.response {
        if enable_color {
            println!("{}", "Response".green());
        } else {
            println!("Response");
        }
        println!("{}", serde_json::to_string_pretty(response)?);
    }

    if let Some(error) = &record.error {
        if enable_color {
            println!("{}", "Error".red());
        } else {
            println!("Error");
        }
        println!("{}", serde_json::to_string_pretty(error)?);
    }

    println!();
    Ok(())
}
