//! Tree command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::cli::TreeArgs;
use crate::domain::{Link, Page, PropertySchema, PropertyValue, TreeNode};
use crate::infra::read_outline;
use crate::wiki::{MULTILINE_DELIMITER, PROPERTY_SIGIL, WikiParser};

const INDENT: &str = "    ";

pub fn handle_tree(args: &TreeArgs, parser: &WikiParser<'_>) -> Result<()> {
    let root = read_outline(&args.file, parser)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_tree(&root, args.properties, &mut out).context("failed to write outline")?;
    Ok(())
}

/// Writes `root` back out as outline markup.
///
/// The document header (identifier, title, page properties) is always
/// written. With `properties`, each node is followed by its page snapshot.
pub fn render_tree(root: &TreeNode<Link>, properties: bool, out: &mut impl Write) -> io::Result<()> {
    let doc = root.value();
    let mut header = false;
    if let Some(id) = doc.target().id() {
        writeln!(out, "{PROPERTY_SIGIL}id {id}")?;
        header = true;
    }
    if let Some(title) = doc.label() {
        writeln!(out, "{PROPERTY_SIGIL}title {title}")?;
        header = true;
    }
    header |= write_page(doc.page(), "", out)?;
    if header && root.child_count() > 0 {
        writeln!(out)?;
    }

    for (depth, node) in root.iter_with_depth().skip(1) {
        let indent = INDENT.repeat(depth - 1);
        writeln!(out, "{indent}{}", node.value())?;
        if properties {
            write_page(node.value().page(), &INDENT.repeat(depth), out)?;
        }
    }
    Ok(())
}

/// Writes each set property of `page`, returning whether any were written.
///
/// Multi-line values go last: closing a text block hands later `@` lines
/// back to the document, so nothing may follow one under a node.
fn write_page(page: &Page, indent: &str, out: &mut impl Write) -> io::Result<bool> {
    let mut any = false;
    let mut blocks = Vec::new();
    for def in PropertySchema::standard().iter() {
        let Some(value) = def.get(page) else { continue };
        let key = def.key();
        match value {
            PropertyValue::Text(text) if text.contains('\n') => blocks.push((key, text)),
            value => writeln!(out, "{indent}{PROPERTY_SIGIL}{key} {value}")?,
        }
        any = true;
    }
    for (key, text) in blocks {
        writeln!(out, "{indent}{PROPERTY_SIGIL}{key} {MULTILINE_DELIMITER}")?;
        writeln!(out, "{text}")?;
        writeln!(out, "{indent}{MULTILINE_DELIMITER}")?;
    }
    Ok(any)
}
