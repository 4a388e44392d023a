//! Terminal rendering of the view tree

use colored::*;

use super::view::{BoardView, JobView, StepView};

/// Renders the board as colored terminal text
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();

    match view {
        BoardView::Message(message) => {
            out.push_str(&format!("{}\n", message.yellow()));
        }
        BoardView::Jobs(jobs) => {
            for job in jobs {
                render_job(&mut out, job);
                out.push('\n');
            }
        }
    }

    out
}

fn render_job(out: &mut String, job: &JobView) {
    for (index, row) in job.rows.iter().enumerate() {
        let marker = if index == 0 {
            paint("▸", &job.style)
        } else {
            " ".normal()
        };

        let pairs: Vec<String> = row
            .iter()
            .map(|pair| {
                let value = match &pair.style {
                    Some(style) => paint(&pair.value, style).bold(),
                    None => pair.value.normal(),
                };
                format!("{} {}", format!("{}:", pair.label).dimmed(), value)
            })
            .collect();

        out.push_str(&format!("{} {}\n", marker, pairs.join("   ")));
    }

    for step in &job.steps {
        render_step(out, step);
    }
}

fn render_step(out: &mut String, step: &StepView) {
    out.push_str(&format!(
        "    {} {:>8} {} {:>8}  {}\n",
        step.glyph,
        step.started,
        "→".dimmed(),
        step.ended,
        paint(&step.label, &step.style)
    ));
}

/// Colorize text by state style class
fn paint(text: &str, style: &str) -> ColoredString {
    match style {
        "error" => text.red(),
        "finished" => text.green(),
        "pending" => text.yellow(),
        _ => text.dimmed(),
    }
}
