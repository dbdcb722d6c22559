//! Property schema: the table of known page properties and their coercions.
//!
//! Each known key pairs a string parser with an explicit getter and setter
//! on [`Page`]. The table is built once and only ever read afterwards, so a
//! single instance can be shared by any number of concurrent parses.

use crate::domain::Page;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static STANDARD: LazyLock<PropertySchema> = LazyLock::new(PropertySchema::new);

/// The closed set of properties a page can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Alias,
    Created,
    Priority,
    Shortcut,
    Source,
    Text,
    Weight,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 7] = [
        PropertyKey::Alias,
        PropertyKey::Created,
        PropertyKey::Priority,
        PropertyKey::Shortcut,
        PropertyKey::Source,
        PropertyKey::Text,
        PropertyKey::Weight,
    ];

    /// Returns the key as written after the `@` sigil.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyKey::Alias => "alias",
            PropertyKey::Created => "created",
            PropertyKey::Priority => "priority",
            PropertyKey::Shortcut => "shortcut",
            PropertyKey::Source => "source",
            PropertyKey::Text => "text",
            PropertyKey::Weight => "weight",
        }
    }

    /// Returns whether an empty value clears the property instead of
    /// being rejected.
    pub fn is_clearable(&self) -> bool {
        matches!(
            self,
            PropertyKey::Alias | PropertyKey::Shortcut | PropertyKey::Text
        )
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A typed property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f32),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Timestamp(t) => {
                f.write_str(&t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
            }
        }
    }
}

type ParseFn = fn(&str) -> Result<PropertyValue, String>;
type GetFn = fn(&Page) -> Option<PropertyValue>;
type SetFn = fn(&mut Page, Option<PropertyValue>);

/// Definition of one known property.
#[derive(Clone, Copy)]
pub struct PropertyDef {
    key: PropertyKey,
    parse: ParseFn,
    get: GetFn,
    set: SetFn,
}

impl PropertyDef {
    pub fn key(&self) -> PropertyKey {
        self.key
    }

    /// Coerces a raw value. An empty value on a clearable key yields `None`.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the value cannot be coerced,
    /// or if it is empty and the key is not clearable.
    pub fn parse(&self, raw: &str) -> Result<Option<PropertyValue>, String> {
        if raw.is_empty() {
            return if self.key.is_clearable() {
                Ok(None)
            } else {
                Err("value is required".to_string())
            };
        }
        (self.parse)(raw).map(Some)
    }

    pub fn get(&self, page: &Page) -> Option<PropertyValue> {
        (self.get)(page)
    }

    pub fn set(&self, page: &mut Page, value: Option<PropertyValue>) {
        (self.set)(page, value)
    }
}

impl fmt::Debug for PropertyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDef").field("key", &self.key).finish()
    }
}

/// Outcome of applying a raw property assignment to a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The property was set (or cleared, for an empty clearable value).
    Set(PropertyKey),
    /// The key is not in the schema; the page is untouched.
    Ignored,
    /// The value could not be coerced; the page is untouched.
    Invalid { key: PropertyKey, reason: String },
}

/// Immutable table of known properties, keyed by name.
///
/// # Examples
///
/// ```
/// use notetree::domain::{Applied, Page, PropertyKey, PropertySchema};
///
/// let schema = PropertySchema::standard();
/// let mut page = Page::new();
///
/// assert_eq!(schema.apply(&mut page, "weight", "0.75"), Applied::Set(PropertyKey::Weight));
/// assert_eq!(page.weight(), Some(0.75));
/// assert_eq!(schema.apply(&mut page, "bogus", "x"), Applied::Ignored);
/// ```
#[derive(Debug, Clone)]
pub struct PropertySchema {
    by_name: HashMap<&'static str, PropertyDef>,
}

impl PropertySchema {
    /// Builds the table of standard page properties.
    pub fn new() -> Self {
        let defs = [
            PropertyDef {
                key: PropertyKey::Alias,
                parse: parse_text,
                get: |p| p.alias().map(|s| PropertyValue::Text(s.to_string())),
                set: |p, v| p.set_alias(into_text(v)),
            },
            PropertyDef {
                key: PropertyKey::Created,
                parse: parse_timestamp,
                get: |p| p.created().map(PropertyValue::Timestamp),
                set: |p, v| p.set_created(into_timestamp(v)),
            },
            PropertyDef {
                key: PropertyKey::Priority,
                parse: parse_number,
                get: |p| p.priority().map(PropertyValue::Number),
                set: |p, v| p.set_priority(into_number(v)),
            },
            PropertyDef {
                key: PropertyKey::Shortcut,
                parse: parse_text,
                get: |p| p.shortcut().map(|s| PropertyValue::Text(s.to_string())),
                set: |p, v| p.set_shortcut(into_text(v)),
            },
            PropertyDef {
                key: PropertyKey::Source,
                parse: parse_text,
                get: |p| p.source().map(|s| PropertyValue::Text(s.to_string())),
                set: |p, v| p.set_source(into_text(v)),
            },
            PropertyDef {
                key: PropertyKey::Text,
                parse: parse_text,
                get: |p| p.text().map(|s| PropertyValue::Text(s.to_string())),
                set: |p, v| p.set_text(into_text(v)),
            },
            PropertyDef {
                key: PropertyKey::Weight,
                parse: parse_number,
                get: |p| p.weight().map(PropertyValue::Number),
                set: |p, v| p.set_weight(into_number(v)),
            },
        ];

        Self {
            by_name: defs.into_iter().map(|d| (d.key.name(), d)).collect(),
        }
    }

    /// Returns the shared standard schema.
    pub fn standard() -> &'static PropertySchema {
        &STANDARD
    }

    /// Looks up a property definition by its key name.
    pub fn lookup(&self, name: &str) -> Option<&PropertyDef> {
        self.by_name.get(name)
    }

    /// Iterates over all definitions in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDef> {
        PropertyKey::ALL
            .iter()
            .filter_map(|k| self.by_name.get(k.name()))
    }

    /// Coerces `raw` for the named property and writes it onto `page`.
    ///
    /// Unknown names are ignored.
    pub fn apply(&self, page: &mut Page, name: &str, raw: &str) -> Applied {
        let Some(def) = self.lookup(name) else {
            return Applied::Ignored;
        };
        match def.parse(raw) {
            Ok(value) => {
                def.set(page, value);
                Applied::Set(def.key)
            }
            Err(reason) => Applied::Invalid {
                key: def.key,
                reason,
            },
        }
    }

    /// Copies every known property from one page onto another.
    pub fn copy_properties(&self, from: &Page, to: &mut Page) {
        for def in self.iter() {
            def.set(to, def.get(from));
        }
    }
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_text(raw: &str) -> Result<PropertyValue, String> {
    Ok(PropertyValue::Text(raw.to_string()))
}

fn parse_number(raw: &str) -> Result<PropertyValue, String> {
    let value: f32 = raw.parse().map_err(|_| format!("'{}' is not a number", raw))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", raw));
    }
    Ok(PropertyValue::Number(value))
}

/// Accepts Unix milliseconds or an RFC 3339 timestamp.
fn parse_timestamp(raw: &str) -> Result<PropertyValue, String> {
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis)
            .map(PropertyValue::Timestamp)
            .ok_or_else(|| format!("timestamp {} is out of range", millis));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| PropertyValue::Timestamp(dt.with_timezone(&Utc)))
        .map_err(|e| e.to_string())
}

fn into_text(value: Option<PropertyValue>) -> Option<String> {
    match value {
        Some(PropertyValue::Text(s)) => Some(s),
        _ => None,
    }
}

fn into_number(value: Option<PropertyValue>) -> Option<f32> {
    match value {
        Some(PropertyValue::Number(n)) => Some(n),
        _ => None,
    }
}

fn into_timestamp(value: Option<PropertyValue>) -> Option<DateTime<Utc>> {
    match value {
        Some(PropertyValue::Timestamp(t)) => Some(t),
        _ => None,
    }
}
