/// Path+query assembly for cheat.sh.
///
/// The segment order is fixed by the service:
///
/// ```text
/// /topic [/subtopic] [/~kw~kw] [/:cmd] [?opts] [&style=name] [/search]
/// ```
///
/// Absent segments contribute nothing; the remaining ones keep their order.
use super::model::{QueryModel, Refinement};
use super::values::Choice;

/// One named piece of the assembled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment name: `topic`, `subtopic`, `keywords`, `command`, `options`,
    /// `style` or `search_options`.
    pub name: &'static str,
    /// Rendered text, empty when the segment is absent.
    pub text: String,
}

/// Render all seven segments in wire order.
#[must_use]
pub fn segments(model: &QueryModel) -> Vec<Segment> {
    let (subtopic, keywords, command) = match model.refinement() {
        Refinement::None => (String::new(), String::new(), String::new()),
        Refinement::Subtopic(words) => (format!("/{}", words.join("+")), String::new(), String::new()),
        Refinement::Keywords(tokens) => (String::new(), format!("/~{}", tokens.join("~")), String::new()),
        Refinement::Command(cmd) => (String::new(), String::new(), format!("/:{}", cmd.wire())),
    };

    let options = concat_prefixed('?', model.display_options().iter().map(|o| o.wire()));
    let style = model
        .style()
        .map(|s| format!("&style={s}"))
        .unwrap_or_default();
    let search_options = concat_prefixed('/', model.search_options().iter().map(|o| o.wire()));

    vec![
        Segment {
            name: "topic",
            text: format!("/{}", model.topic().join("+")),
        },
        Segment {
            name: "subtopic",
            text: subtopic,
        },
        Segment {
            name: "keywords",
            text: keywords,
        },
        Segment {
            name: "command",
            text: command,
        },
        Segment {
            name: "options",
            text: options,
        },
        Segment {
            name: "style",
            text: style,
        },
        Segment {
            name: "search_options",
            text: search_options,
        },
    ]
}

/// Build the path+query suffix to append to the service base URL.
#[must_use]
pub fn build(model: &QueryModel) -> String {
    segments(model).into_iter().map(|s| s.text).collect()
}

/// `prefix` followed by every flag, or empty when there are none.
fn concat_prefixed<'a>(prefix: char, flags: impl Iterator<Item = &'a str>) -> String {
    let mut out: String = flags.collect();
    if !out.is_empty() {
        out.insert(0, prefix);
    }
    out
}
