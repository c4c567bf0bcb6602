//! Renderer: turns a validated curriculum into display blocks and HTML.
//!
//! Rendering is a pure function of the curriculum. The caller replaces the
//! whole output region with the result; no block survives across renders.

use crate::curriculum::models::{Course, Curriculum, Semester};
use crate::curriculum::scalar::{text_or, verbatim_text, NOT_AVAILABLE};

const DEFAULT_TITLE: &str = "Curriculum";

// ────────────────────────────────────────────────────────────────────────────
// Display blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Metadata(MetadataBlock),
    Separator,
    Semester(SemesterBlock),
}

/// Title and summary fields, with fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBlock {
    pub title: String,
    pub level: String,
    pub industry_focus: String,
    pub total_semesters: String,
    pub weekly_hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterBlock {
    pub label: String,
    pub courses: Vec<CourseBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBlock {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub hours_per_week: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Block construction
// ────────────────────────────────────────────────────────────────────────────

/// Builds the metadata block followed by a separator and a semester block
/// for every semester entry, in input order.
pub fn render_blocks(curriculum: &Curriculum) -> Vec<DisplayBlock> {
    let mut blocks = Vec::with_capacity(1 + curriculum.semester_groups.len() * 2);
    blocks.push(DisplayBlock::Metadata(metadata_block(curriculum)));

    for semester in &curriculum.semester_groups {
        blocks.push(DisplayBlock::Separator);
        blocks.push(DisplayBlock::Semester(semester_block(semester)));
    }

    blocks
}

fn metadata_block(curriculum: &Curriculum) -> MetadataBlock {
    let semester_count = curriculum.semester_groups.len().to_string();

    MetadataBlock {
        title: text_or(curriculum.domain.as_ref(), DEFAULT_TITLE).to_uppercase(),
        level: text_or(curriculum.level.as_ref(), NOT_AVAILABLE),
        industry_focus: text_or(curriculum.industry_orientation.as_ref(), NOT_AVAILABLE),
        total_semesters: text_or(curriculum.semesters.as_ref(), &semester_count),
        weekly_hours: text_or(curriculum.weekly_hours.as_ref(), NOT_AVAILABLE),
    }
}

/// A semester whose `courses` is absent or not an array keeps its header
/// and gets no course blocks.
fn semester_block(semester: &Semester) -> SemesterBlock {
    SemesterBlock {
        label: verbatim_text(semester.semester.as_ref()),
        courses: semester
            .course_entries
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(course_block)
            .collect(),
    }
}

fn course_block(course: &Course) -> CourseBlock {
    CourseBlock {
        name: verbatim_text(course.name.as_ref()),
        kind: text_or(course.kind.as_ref(), NOT_AVAILABLE),
        description: text_or(course.description.as_ref(), NOT_AVAILABLE),
        hours_per_week: text_or(course.hours_per_week.as_ref(), NOT_AVAILABLE),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML
// ────────────────────────────────────────────────────────────────────────────

/// Serializes blocks into the markup of the output region.
pub fn blocks_to_html(blocks: &[DisplayBlock]) -> String {
    let mut html = String::new();

    for block in blocks {
        match block {
            DisplayBlock::Metadata(meta) => {
                html.push_str(&format!("<h2>{}</h2>\n", escape_html(&meta.title)));
                push_field(&mut html, "Level", &meta.level);
                push_field(&mut html, "Industry Focus", &meta.industry_focus);
                push_field(&mut html, "Total Semesters", &meta.total_semesters);
                push_field(&mut html, "Weekly Hours", &meta.weekly_hours);
            }
            DisplayBlock::Separator => html.push_str("<hr>\n"),
            DisplayBlock::Semester(semester) => {
                html.push_str(&format!(
                    "<div class=\"semester\"><h3>Semester {}</h3>\n",
                    escape_html(&semester.label)
                ));
                for course in &semester.courses {
                    html.push_str(&format!(
                        "<div class=\"course\"><strong>{}</strong>\
                         <p>Type: {}</p><p>Description: {}</p><p>Hours/Week: {}</p></div>\n",
                        escape_html(&course.name),
                        escape_html(&course.kind),
                        escape_html(&course.description),
                        escape_html(&course.hours_per_week),
                    ));
                }
                html.push_str("</div>\n");
            }
        }
    }

    html
}

/// Convenience for `blocks_to_html(&render_blocks(curriculum))`.
pub fn render_html(curriculum: &Curriculum) -> String {
    blocks_to_html(&render_blocks(curriculum))
}

fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<p><strong>{label}:</strong> {}</p>\n",
        escape_html(value)
    ));
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
