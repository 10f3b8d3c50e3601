/// Raw and validated query representations.
///
/// [`RawQuery`] is whatever the argument parser handed over, enumerated
/// fields still as text. [`validate`] turns it into a [`QueryModel`], the only
/// input [`build`](super::build) accepts.
use std::str::FromStr;

use super::errors::QueryError;
use super::values::{Choice, DisplayOption, SearchOption, SpecialCommand};

/// Unvalidated query fields, one per CLI argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub command: Option<String>,
    pub display_options: Option<Vec<String>>,
    pub style: Option<String>,
    pub search_options: Option<Vec<String>>,
}

/// The single refinement a query may carry on top of its topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Refinement {
    #[default]
    None,
    /// Whitespace-normalized words.
    Subtopic(Vec<String>),
    /// Keyword tokens, caller order.
    Keywords(Vec<String>),
    Command(SpecialCommand),
}

/// A validated query. Construct with [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryModel {
    /// Whitespace-normalized topic words, never empty.
    topic: Vec<String>,
    refinement: Refinement,
    display_options: Vec<DisplayOption>,
    style: Option<String>,
    search_options: Vec<SearchOption>,
}

impl QueryModel {
    #[must_use]
    pub fn topic(&self) -> &[String] {
        &self.topic
    }

    #[must_use]
    pub fn refinement(&self) -> &Refinement {
        &self.refinement
    }

    #[must_use]
    pub fn display_options(&self) -> &[DisplayOption] {
        &self.display_options
    }

    #[must_use]
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    #[must_use]
    pub fn search_options(&self) -> &[SearchOption] {
        &self.search_options
    }
}

/// Split on whitespace runs, dropping the empty tokens at either end.
fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Validate raw CLI input into a [`QueryModel`].
///
/// Checks run in a fixed order: topic, then refinement exclusivity, then the
/// closed value sets (`cmd`, `options`, `search_opts`). Every supplied
/// refinement counts toward exclusivity except an empty keyword list.
///
/// # Errors
///
/// - [`QueryError::MissingTopic`] when the topic is absent or blank.
/// - [`QueryError::MutualExclusivity`] when two or more of subtopic, keywords
///   and cmd are present.
/// - [`QueryError::InvalidEnumValue`] for the first field holding a value
///   outside its set.
pub fn validate(raw: RawQuery) -> Result<QueryModel, QueryError> {
    let topic = raw.topic.as_deref().map(words).unwrap_or_default();
    if topic.is_empty() {
        return Err(QueryError::MissingTopic);
    }

    let keywords = raw.keywords.filter(|k| !k.is_empty());

    let supplied: Vec<&'static str> = [
        ("subtopic", raw.subtopic.is_some()),
        ("keywords", keywords.is_some()),
        ("cmd", raw.command.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, present)| present.then_some(name))
    .collect();
    if supplied.len() > 1 {
        return Err(QueryError::MutualExclusivity {
            count: supplied.len(),
            fields: supplied,
        });
    }

    // A blank subtopic still counts above but renders nothing.
    let refinement = match (raw.subtopic, keywords, raw.command) {
        (Some(text), _, _) => {
            let words = words(&text);
            if words.is_empty() {
                Refinement::None
            } else {
                Refinement::Subtopic(words)
            }
        }
        (_, Some(tokens), _) => Refinement::Keywords(tokens),
        (_, _, Some(name)) => Refinement::Command(name.parse()?),
        _ => Refinement::None,
    };

    let display_options = parse_all::<DisplayOption>(raw.display_options)?;
    let search_options = parse_all::<SearchOption>(raw.search_options)?;
    let style = raw.style.filter(|s| !s.is_empty());

    Ok(QueryModel {
        topic,
        refinement,
        display_options,
        style,
        search_options,
    })
}

/// Parse every value of one enumerated field, keeping caller order and
/// duplicates. All rejected values are reported together.
fn parse_all<T: Choice + FromStr>(values: Option<Vec<String>>) -> Result<Vec<T>, QueryError> {
    let values = values.unwrap_or_default();
    let mut parsed = Vec::with_capacity(values.len());
    let mut rejected = Vec::new();

    for value in values {
        match value.parse::<T>() {
            Ok(v) => parsed.push(v),
            Err(_) => rejected.push(value),
        }
    }

    if rejected.is_empty() {
        Ok(parsed)
    } else {
        Err(QueryError::InvalidEnumValue {
            field: T::FIELD,
            rejected,
            legal: T::legal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(topic: &str) -> RawQuery {
        RawQuery {
            topic: Some(topic.to_owned()),
            ..RawQuery::default()
        }
    }

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|s| (*s).to_owned()).collect())
    }

    #[test]
    fn test_topic_only() {
        let model = validate(raw("python")).unwrap();
        assert_eq!(model.topic(), ["python"]);
        assert_eq!(model.refinement(), &Refinement::None);
        assert!(model.display_options().is_empty());
        assert!(model.search_options().is_empty());
        assert_eq!(model.style(), None);
    }

    #[test]
    fn test_topic_whitespace_normalized() {
        let model = validate(raw("  linux   kernel  ")).unwrap();
        assert_eq!(model.topic(), ["linux", "kernel"]);
    }

    #[test]
    fn test_missing_topic() {
        assert_eq!(validate(RawQuery::default()), Err(QueryError::MissingTopic));
        assert_eq!(validate(raw(" \t ")), Err(QueryError::MissingTopic));
    }

    #[test]
    fn test_missing_topic_reported_before_other_errors() {
        let q = RawQuery {
            subtopic: Some("x".to_owned()),
            keywords: strings(&["y"]),
            ..raw("")
        };
        assert_eq!(validate(q), Err(QueryError::MissingTopic));
    }

    #[test]
    fn test_subtopic_and_keywords_conflict() {
        let q = RawQuery {
            subtopic: Some("x".to_owned()),
            keywords: strings(&["y"]),
            ..raw("python")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::MutualExclusivity {
                fields: vec!["subtopic", "keywords"],
                count: 2,
            })
        );
    }

    #[test]
    fn test_all_three_refinements_conflict() {
        let q = RawQuery {
            subtopic: Some("x".to_owned()),
            keywords: strings(&["y"]),
            command: Some("list".to_owned()),
            ..raw("python")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::MutualExclusivity {
                fields: vec!["subtopic", "keywords", "cmd"],
                count: 3,
            })
        );
    }

    #[test]
    fn test_conflict_counts_even_with_invalid_command() {
        let q = RawQuery {
            keywords: strings(&["y"]),
            command: Some("nope".to_owned()),
            ..raw("python")
        };
        assert!(matches!(
            validate(q),
            Err(QueryError::MutualExclusivity { count: 2, .. })
        ));
    }

    #[test]
    fn test_empty_keyword_list_does_not_conflict() {
        let q = RawQuery {
            keywords: Some(vec![]),
            command: Some("random".to_owned()),
            ..raw("python")
        };
        let model = validate(q).unwrap();
        assert_eq!(
            model.refinement(),
            &Refinement::Command(SpecialCommand::Random)
        );
    }

    #[test]
    fn test_blank_subtopic_still_conflicts() {
        let q = RawQuery {
            subtopic: Some("  ".to_owned()),
            keywords: strings(&["y"]),
            ..raw("git")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::MutualExclusivity {
                fields: vec!["subtopic", "keywords"],
                count: 2,
            })
        );
    }

    #[test]
    fn test_blank_subtopic_alone_renders_nothing() {
        let q = RawQuery {
            subtopic: Some("  ".to_owned()),
            ..raw("git")
        };
        assert_eq!(validate(q).unwrap().refinement(), &Refinement::None);
    }

    #[test]
    fn test_subtopic_and_command_conflict() {
        let q = RawQuery {
            subtopic: Some("x".to_owned()),
            command: Some("list".to_owned()),
            ..raw("python")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::MutualExclusivity {
                fields: vec!["subtopic", "cmd"],
                count: 2,
            })
        );
    }

    #[test]
    fn test_empty_command_rejected() {
        let q = RawQuery {
            command: Some(String::new()),
            ..raw("git")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::InvalidEnumValue {
                field: "cmd",
                rejected: vec![String::new()],
                legal: SpecialCommand::legal(),
            })
        );
    }

    #[test]
    fn test_padded_command_rejected() {
        let q = RawQuery {
            command: Some(" list ".to_owned()),
            ..raw("git")
        };
        assert!(matches!(
            validate(q),
            Err(QueryError::InvalidEnumValue { field: "cmd", .. })
        ));
    }

    #[test]
    fn test_subtopic_words() {
        let q = RawQuery {
            subtopic: Some(" reverse  a list ".to_owned()),
            ..raw("python")
        };
        let model = validate(q).unwrap();
        assert_eq!(
            model.refinement(),
            &Refinement::Subtopic(vec![
                "reverse".to_owned(),
                "a".to_owned(),
                "list".to_owned()
            ])
        );
    }

    #[test]
    fn test_invalid_display_option() {
        let q = RawQuery {
            display_options: strings(&["Z"]),
            ..raw("python")
        };
        assert_eq!(
            validate(q),
            Err(QueryError::InvalidEnumValue {
                field: "options",
                rejected: vec!["Z".to_owned()],
                legal: vec!["q", "T", "Q"],
            })
        );
    }

    #[test]
    fn test_invalid_values_reported_together() {
        let q = RawQuery {
            search_options: strings(&["x", "i", "y"]),
            ..raw("python")
        };
        match validate(q) {
            Err(QueryError::InvalidEnumValue {
                field, rejected, ..
            }) => {
                assert_eq!(field, "search_opts");
                assert_eq!(rejected, ["x", "y"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_command() {
        let q = RawQuery {
            command: Some("delete".to_owned()),
            ..raw("git")
        };
        assert!(matches!(
            validate(q),
            Err(QueryError::InvalidEnumValue { field: "cmd", .. })
        ));
    }

    #[test]
    fn test_every_member_accepted() {
        for cmd in SpecialCommand::ALL {
            let q = RawQuery {
                command: Some(cmd.name().to_owned()),
                ..raw("git")
            };
            assert_eq!(
                validate(q).unwrap().refinement(),
                &Refinement::Command(*cmd)
            );
        }

        let q = RawQuery {
            display_options: strings(&["q", "T", "Q"]),
            search_options: strings(&["b", "i", "r"]),
            ..raw("git")
        };
        let model = validate(q).unwrap();
        assert_eq!(model.display_options(), DisplayOption::ALL);
        assert_eq!(model.search_options(), SearchOption::ALL);
    }

    #[test]
    fn test_option_order_and_duplicates_preserved() {
        let q = RawQuery {
            display_options: strings(&["Q", "q", "Q"]),
            ..raw("git")
        };
        let model = validate(q).unwrap();
        assert_eq!(
            model.display_options(),
            [
                DisplayOption::CodeOnly,
                DisplayOption::Quiet,
                DisplayOption::CodeOnly
            ]
        );
    }

    #[test]
    fn test_empty_style_is_absent() {
        let q = RawQuery {
            style: Some(String::new()),
            ..raw("git")
        };
        assert_eq!(validate(q).unwrap().style(), None);
    }
}
