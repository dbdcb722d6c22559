//! Line-grammar state machine for outline markup.
//!
//! Every line is routed through one of three states:
//!
//! - `Properties`: `@key value` lines set document-level properties. The
//!   first line that is neither blank nor a property switches to `Content`
//!   and is handled again under that state.
//! - `Content`: bulleted lines create nodes; `@key value` lines decorate
//!   the most recently created node.
//! - `Text`: raw lines accumulate into a multi-line property value until a
//!   line consisting of the delimiter alone, after which parsing resumes in
//!   `Properties`.

use crate::domain::{Applied, Link, PropertyKey, PropertySchema, Topic, TopicId, TreeNode};
use crate::wiki::content;
use crate::wiki::hierarchy::Hierarchy;
use crate::wiki::normalize::{DEFAULT_TAB_WIDTH, Line, split_lines};
use crate::wiki::{FormatError, MULTILINE_DELIMITER, PROPERTY_SIGIL, TITLE_TRUNCATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Properties,
    Content,
    Text,
}

/// Result of handling one line under one state.
enum Step {
    /// The line is consumed; continue with the next line in this state.
    Next(State),
    /// Handle the same line again under this state.
    Reprocess(State),
}

/// Which link a property line writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Document,
    CurrentNode,
}

/// A property whose value spans several lines.
#[derive(Debug)]
struct Pending {
    key: String,
    value: String,
    target: Target,
}

/// Parser for outline markup.
///
/// The parser itself holds only configuration; each call to
/// [`parse`](Self::parse) owns its own state, so one parser can be used
/// from several threads at once.
///
/// # Examples
///
/// ```
/// use notetree::domain::PropertySchema;
/// use notetree::wiki::WikiParser;
///
/// let parser = WikiParser::new(PropertySchema::standard());
/// let root = parser.parse("* foo\n   * bar\n   * quux\n").unwrap();
///
/// let foo = root.child(0).unwrap();
/// assert_eq!(foo.value().label(), Some("foo"));
/// assert_eq!(foo.child_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct WikiParser<'s> {
    schema: &'s PropertySchema,
    tab_width: usize,
}

impl<'s> WikiParser<'s> {
    pub fn new(schema: &'s PropertySchema) -> Self {
        Self {
            schema,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Sets how many spaces a tab expands to.
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Parses a whole document.
    ///
    /// Returns the document root: its link carries the document-level page
    /// and any `@title`/`@id` from the header, and its children are the
    /// top-level content lines.
    ///
    /// # Errors
    ///
    /// Returns the first `FormatError` encountered; nothing is returned for
    /// the lines parsed before it.
    pub fn parse(&self, input: &str) -> Result<TreeNode<Link>, FormatError> {
        self.parse_lines(split_lines(input))
    }

    /// Parses a document supplied one line at a time, without line
    /// terminators.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<TreeNode<Link>, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut run = Run::new(self.schema);
        for (index, raw) in lines.into_iter().enumerate() {
            let line = Line::new(index + 1, raw.as_ref(), self.tab_width);
            run.feed(&line)?;
        }
        Ok(run.finish())
    }
}

/// State of a single parse.
struct Run<'s> {
    schema: &'s PropertySchema,
    hierarchy: Hierarchy<Link>,
    state: State,
    pending: Option<Pending>,
    lines: usize,
    nodes: usize,
}

impl<'s> Run<'s> {
    fn new(schema: &'s PropertySchema) -> Self {
        Self {
            schema,
            hierarchy: Hierarchy::new(TreeNode::new(Link::root())),
            state: State::Properties,
            pending: None,
            lines: 0,
            nodes: 0,
        }
    }

    fn feed(&mut self, line: &Line) -> Result<(), FormatError> {
        self.lines = line.number();

        if line.text().ends_with(TITLE_TRUNCATOR) {
            return Err(FormatError::new(
                line.number(),
                format!(
                    "line ends with the reserved truncation sequence \"{}\"",
                    TITLE_TRUNCATOR
                ),
            ));
        }

        let mut state = self.state;
        loop {
            match self.step(state, line)? {
                Step::Next(next) => {
                    if next != self.state {
                        tracing::trace!(line = line.number(), from = ?self.state, to = ?next, "state change");
                    }
                    self.state = next;
                    return Ok(());
                }
                Step::Reprocess(next) => {
                    tracing::trace!(line = line.number(), from = ?state, to = ?next, "reprocessing line");
                    state = next;
                }
            }
        }
    }

    fn step(&mut self, state: State, line: &Line) -> Result<Step, FormatError> {
        match state {
            State::Properties => {
                if line.is_blank() {
                    Ok(Step::Next(State::Properties))
                } else if is_property(line) {
                    self.property_line(line, Target::Document)
                } else {
                    Ok(Step::Reprocess(State::Content))
                }
            }
            State::Content => {
                if line.is_blank() {
                    Ok(Step::Next(State::Content))
                } else if is_property(line) {
                    self.property_line(line, Target::CurrentNode)
                } else {
                    self.content_line(line)?;
                    Ok(Step::Next(State::Content))
                }
            }
            State::Text => {
                if line.trimmed() == MULTILINE_DELIMITER {
                    if let Some(pending) = self.pending.take() {
                        self.finish_property(line.number(), &pending.key, &pending.value, pending.target)?;
                    }
                    Ok(Step::Next(State::Properties))
                } else {
                    if let Some(pending) = self.pending.as_mut() {
                        if !pending.value.is_empty() {
                            pending.value.push('\n');
                        }
                        pending.value.push_str(line.text());
                    }
                    Ok(Step::Next(State::Text))
                }
            }
        }
    }

    /// Handles `@key`, `@key value` and the opening line of a text block.
    fn property_line(&mut self, line: &Line, target: Target) -> Result<Step, FormatError> {
        let stay = match target {
            Target::Document => State::Properties,
            Target::CurrentNode => State::Content,
        };
        let body = &line.trimmed()[PROPERTY_SIGIL.len_utf8()..];

        let (key, value) = match body.split_once(' ') {
            None => (body, ""),
            Some((key, value)) => (key.trim(), value.trim()),
        };
        if key.is_empty() {
            return Err(FormatError::new(line.number(), "empty property key"));
        }

        if value == MULTILINE_DELIMITER {
            self.pending = Some(Pending {
                key: key.to_string(),
                value: String::new(),
                target,
            });
            return Ok(Step::Next(State::Text));
        }

        self.finish_property(line.number(), key, value, target)?;
        Ok(Step::Next(stay))
    }

    fn finish_property(
        &mut self,
        number: usize,
        key: &str,
        value: &str,
        target: Target,
    ) -> Result<(), FormatError> {
        let value = value.trim_end();
        if value.is_empty() && !is_clearable(key) {
            return Err(FormatError::new(
                number,
                format!("empty value for property @{}", key),
            ));
        }
        let invalid = || FormatError::new(number, format!("invalid value for @{} property: {}", key, value));

        let link = match target {
            Target::Document => self.hierarchy.root_mut().value_mut(),
            Target::CurrentNode => self.hierarchy.current_mut().value_mut(),
        };

        match key {
            "id" => {
                let id = TopicId::new(value).map_err(|_| invalid())?;
                link.target_mut().set_id(id);
            }
            "title" => link.set_label(Some(value.to_string())),
            _ => match self.schema.apply(link.page_mut(), key, value) {
                Applied::Set(_) => {}
                Applied::Ignored => {
                    tracing::debug!(line = number, key, "ignoring unknown property");
                }
                Applied::Invalid { reason, .. } => {
                    tracing::debug!(line = number, key, %reason, "property value rejected");
                    return Err(invalid());
                }
            },
        }
        Ok(())
    }

    fn content_line(&mut self, line: &Line) -> Result<(), FormatError> {
        let decoded = content::decode(line.trimmed())
            .map_err(|e| FormatError::new(line.number(), e.to_string()))?;

        let target = decoded.id.map(Topic::existing).unwrap_or_default();
        let snapshot = self.hierarchy.root().value().page().clone();
        let link = Link::new(decoded.label, decoded.role, target, snapshot);

        let indent = line.indent().unwrap_or_default();
        self.hierarchy.push(indent, TreeNode::new(link));
        self.nodes += 1;
        Ok(())
    }

    fn finish(self) -> TreeNode<Link> {
        if let Some(pending) = &self.pending {
            tracing::warn!(
                key = %pending.key,
                "input ended inside a multi-line value; the value was discarded"
            );
        }
        tracing::debug!(lines = self.lines, nodes = self.nodes, "parsed outline");
        self.hierarchy.finish()
    }
}

fn is_property(line: &Line) -> bool {
    line.trimmed().starts_with(PROPERTY_SIGIL)
}

fn is_clearable(key: &str) -> bool {
    PropertyKey::ALL
        .iter()
        .any(|k| k.is_clearable() && k.name() == key)
}
