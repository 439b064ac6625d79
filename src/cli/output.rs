//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use coursescope::page::ListView;
use coursescope::tui::components::stars::{average_label, star_glyphs};
use coursescope::tui::components::{BreakdownComponent, BreakdownViewContext};
use coursescope::{CoursePage, ReviewApiError};

/// Writes a plain-text rendition of a loaded course page to stdout.
pub fn write_course_summary(page: &CoursePage) -> Result<(), ReviewApiError> {
    let mut stdout = io::stdout().lock();
    write_course_summary_to(&mut stdout, page)
}

/// Writes the course header, rating breakdown and loaded reviews to the
/// given writer.
pub fn write_course_summary_to<W: Write>(
    writer: &mut W,
    page: &CoursePage,
) -> Result<(), ReviewApiError> {
    write_header(writer, page)?;

    let reviews = page.reviews();
    let breakdown = BreakdownComponent::view(&BreakdownViewContext {
        breakdown: reviews.breakdown(),
        statistics: reviews.statistics(),
    });
    write!(writer, "{breakdown}").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    match reviews.view() {
        ListView::Loading => {}
        ListView::Empty => {
            writeln!(writer, "{}", coursescope::page::reviews::EMPTY_REVIEWS_MESSAGE)
                .map_err(|e| io_error(&e))?;
        }
        ListView::Failed(message) => {
            writeln!(writer, "{message}").map_err(|e| io_error(&e))?;
        }
        ListView::Reviews => {
            writeln!(writer, "Reviews (sorted by {}):", reviews.sort())
                .map_err(|e| io_error(&e))?;
            for review in reviews.reviews() {
                let rating = review
                    .rating
                    .map(|value| format!("  {} {value}/5", star_glyphs(value)))
                    .unwrap_or_default();
                let date = review
                    .created_date()
                    .map(|value| format!("  {value}"))
                    .unwrap_or_default();
                writeln!(writer, "  {}{rating}{date}", review.display_name())
                    .map_err(|e| io_error(&e))?;
                if let Some(text) = review.text() {
                    writeln!(writer, "    {text}").map_err(|e| io_error(&e))?;
                }
            }
        }
    }

    if reviews.can_load_more() {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "More reviews available.").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn write_header<W: Write>(writer: &mut W, page: &CoursePage) -> Result<(), ReviewApiError> {
    let Some(summary) = page.summary() else {
        return writeln!(writer, "Course {}", page.course_id()).map_err(|e| io_error(&e));
    };

    let title = summary.title.as_deref().unwrap_or("Untitled course");
    writeln!(writer, "{title}").map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "{} ({} reviews)",
        average_label(summary.average_rating),
        summary.total_reviews
    )
    .map_err(|e| io_error(&e))?;
    if let Some(instructor) = summary.instructor.as_deref() {
        writeln!(writer, "Instructor: {instructor}").map_err(|e| io_error(&e))?;
    }
    let images: Vec<&str> = page.gallery().images().iter().map(String::as_str).collect();
    writeln!(writer, "Images: {}", images.join(", ")).map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> ReviewApiError {
    ReviewApiError::Io {
        message: error.to_string(),
    }
}
