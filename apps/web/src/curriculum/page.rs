//! The form page that hosts the output region.

use crate::curriculum::models::GenerationRequest;
use crate::curriculum::renderer::escape_html;

/// Input controls, in display order: (id, label).
const FIELDS: [(&str, &str); 5] = [
    ("skill", "Skill Domain"),
    ("level", "Education Level"),
    ("semesters", "Total Semesters"),
    ("hours", "Weekly Hours"),
    ("focus", "Industry Focus"),
];

/// Builds the full page. `output` becomes the entire content of `#output`.
pub fn index_page(request: &GenerationRequest, output: &str) -> String {
    let mut inputs = String::new();
    for (id, label) in FIELDS {
        inputs.push_str(&format!(
            "<label for=\"{id}\">{label}</label>\n\
             <input id=\"{id}\" name=\"{id}\" value=\"{}\">\n",
            escape_html(field_value(request, id))
        ));
    }

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>CurricuForge</title></head>\n\
         <body>\n\
         <h1>CurricuForge</h1>\n\
         <form id=\"form\" method=\"post\" action=\"/\">\n\
         {inputs}\
         <button type=\"submit\">Generate</button>\n\
         </form>\n\
         <div id=\"output\">{output}</div>\n\
         </body>\n\
         </html>\n"
    )
}

fn field_value<'a>(request: &'a GenerationRequest, id: &str) -> &'a str {
    match id {
        "skill" => &request.skill,
        "level" => &request.level,
        "semesters" => &request.semesters,
        "hours" => &request.hours,
        "focus" => &request.focus,
        _ => "",
    }
}
