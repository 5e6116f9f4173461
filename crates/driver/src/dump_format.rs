use deadstrip_analysis::Analysis;
use deadstrip_graph::{Color, ObjectFile};

/// Renders the full dependency map: every inventoried section, its color,
/// and its out-edges by target full name.
pub fn map(analysis: &Analysis, object_files: &[ObjectFile]) -> String {
    let mut out = String::from("<MAP>\n");

    for object_file in object_files {
        out.push_str(&format!("<FILE name=\"{}\">\n", object_file.path()));

        for key in object_file.sections() {
            let Some(node) = analysis.index().get(key) else {
                continue;
            };

            out.push_str(&format!(
                "<SECTION name=\"{}\" color=\"{}\">\n",
                analysis.graph().name_of(node),
                color_label(analysis.graph().color_of(node)),
            ));
            out.push_str("<DEPENDS>\n");

            for edge in analysis.graph().edges_of(node) {
                out.push_str(analysis.graph().name_of(*edge));
                out.push('\n');
            }

            out.push_str("</DEPENDS>\n");
            out.push_str("</SECTION>\n");
        }

        out.push_str("</FILE>\n");
    }

    out.push_str("</MAP>\n");

    out
}

/// Renders the used-section report (`<USED>`).
pub fn used(analysis: &Analysis, object_files: &[ObjectFile]) -> String {
    section_list("USED", object_files, |object_file| analysis.used(object_file))
}

/// Renders the unused-section report (`<UNUSED>`).
pub fn unused(analysis: &Analysis, object_files: &[ObjectFile]) -> String {
    section_list("UNUSED", object_files, |object_file| analysis.unused(object_file))
}

fn section_list(tag: &str, object_files: &[ObjectFile], names: impl Fn(&ObjectFile) -> Vec<&str>) -> String {
    let mut out = format!("<{tag}>\n");

    for object_file in object_files {
        out.push_str(&format!("<FILE name=\"{}\">\n", object_file.path()));

        for name in names(object_file) {
            out.push_str(name);
            out.push('\n');
        }

        out.push_str("</FILE>\n");
    }

    out.push_str(&format!("</{tag}>\n"));

    out
}

fn color_label(color: Color) -> String {
    format!("{:#010x}", color.bits())
}
