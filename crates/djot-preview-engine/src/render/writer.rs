use std::fmt;

use html_escape::encode_double_quoted_attribute;

use crate::tree::{Node, NodeKind};

use super::footnotes::Footnotes;

pub(crate) struct HtmlWriter<'a, W> {
    /// Writer to write to.
    writer: W,

    /// Whether or not the last write wrote a newline.
    end_newline: bool,

    notes: Footnotes<'a>,
}

impl<'a, W> HtmlWriter<'a, W>
where
    W: fmt::Write,
{
    pub(crate) fn new(writer: W, notes: Footnotes<'a>) -> Self {
        Self {
            writer,
            end_newline: true,
            notes,
        }
    }

    /// Writes a new line.
    #[inline]
    fn write_newline(&mut self) -> fmt::Result {
        self.end_newline = true;
        self.writer.write_str("\n")
    }

    /// Writes a buffer, and tracks whether or not a newline was written.
    #[inline]
    fn write(&mut self, s: &str) -> fmt::Result {
        self.writer.write_str(s)?;

        if !s.is_empty() {
            self.end_newline = s.ends_with('\n');
        }
        Ok(())
    }

    /// Writes text with `&`, `<`, `>` and `"` escaped.
    fn write_escaped(&mut self, s: &str) -> fmt::Result {
        self.write(&encode_double_quoted_attribute(s))
    }

    fn ensure_newline(&mut self) -> fmt::Result {
        if self.end_newline {
            Ok(())
        } else {
            self.write_newline()
        }
    }

    pub(crate) fn run(mut self, root: &'a Node) -> fmt::Result {
        match &root.kind {
            NodeKind::Document => self.blocks(&root.children, false)?,
            kind if kind.is_block() => self.block(root, false)?,
            _ => self.inline(root)?,
        }
        self.endnotes()
    }

    fn blocks(&mut self, nodes: &'a [Node], tight: bool) -> fmt::Result {
        for node in nodes {
            self.block(node, tight)?;
        }
        Ok(())
    }

    /// Writes one block element followed by a newline. `tight` drops the
    /// `<p>` around paragraphs directly inside a tight list item.
    fn block(&mut self, node: &'a Node, tight: bool) -> fmt::Result {
        self.ensure_newline()?;
        match &node.kind {
            NodeKind::Document => return self.blocks(&node.children, false),
            NodeKind::FootnoteDefinition { .. } => return Ok(()),
            NodeKind::Paragraph if tight => self.inlines(&node.children)?,
            NodeKind::Paragraph => {
                self.write("<p>")?;
                self.inlines(&node.children)?;
                self.write("</p>")?;
            }
            NodeKind::Heading { level } => {
                self.write(&format!("<h{level}>"))?;
                self.inlines(&node.children)?;
                self.write(&format!("</h{level}>"))?;
            }
            NodeKind::BulletList { tight } => {
                self.write("<ul")?;
                self.task_list_class(node)?;
                self.write(">\n")?;
                self.blocks(&node.children, *tight)?;
                self.write("</ul>")?;
            }
            NodeKind::OrderedList { start, tight } => {
                self.write("<ol")?;
                if *start != 1 {
                    self.write(&format!(" start=\"{start}\""))?;
                }
                self.task_list_class(node)?;
                self.write(">\n")?;
                self.blocks(&node.children, *tight)?;
                self.write("</ol>")?;
            }
            NodeKind::ListItem => {
                self.write("<li>\n")?;
                self.blocks(&node.children, tight)?;
                self.ensure_newline()?;
                self.write("</li>")?;
            }
            NodeKind::BlockQuote => {
                self.write("<blockquote>\n")?;
                self.blocks(&node.children, false)?;
                self.ensure_newline()?;
                self.write("</blockquote>")?;
            }
            NodeKind::CodeBlock { lang, text } => {
                self.write("<pre><code")?;
                if let Some(lang) = lang {
                    self.write(" class=\"language-")?;
                    self.write_escaped(lang)?;
                    self.write("\"")?;
                }
                self.write(">")?;
                self.write_escaped(text)?;
                self.write("</code></pre>")?;
            }
            NodeKind::ThematicBreak => self.write("<hr>")?,
            NodeKind::Table { .. } => {
                self.write("<table>\n")?;
                self.blocks(&node.children, false)?;
                self.write("</table>")?;
            }
            NodeKind::TableRow => {
                self.write("<tr>\n")?;
                self.blocks(&node.children, false)?;
                self.write("</tr>")?;
            }
            NodeKind::TableCell { header, align } => {
                let tag = if *header { "th" } else { "td" };
                self.write(&format!("<{tag}"))?;
                if let Some(css) = align.css() {
                    self.write(&format!(" style=\"text-align: {css};\""))?;
                }
                self.write(">")?;
                self.inlines(&node.children)?;
                self.write(&format!("</{tag}>"))?;
            }
            _ => self.inline(node)?,
        }
        self.write_newline()
    }

    fn task_list_class(&mut self, list: &Node) -> fmt::Result {
        let has_task = list.children.iter().any(|item| {
            item.children.first().is_some_and(|p| {
                p.kind == NodeKind::Paragraph
                    && p.children
                        .first()
                        .is_some_and(|m| matches!(m.kind, NodeKind::TaskMarker { .. }))
            })
        });
        if has_task {
            self.write(" class=\"task-list\"")?;
        }
        Ok(())
    }

    fn inlines(&mut self, nodes: &'a [Node]) -> fmt::Result {
        for node in nodes {
            self.inline(node)?;
        }
        Ok(())
    }

    fn inline(&mut self, node: &'a Node) -> fmt::Result {
        let tag = match &node.kind {
            NodeKind::Text(text) => return self.write_escaped(text),
            NodeKind::Code(text) => {
                self.write("<code>")?;
                self.write_escaped(text)?;
                return self.write("</code>");
            }
            NodeKind::LineBreak => return self.write("<br>\n"),
            NodeKind::TaskMarker { checked } => {
                return if *checked {
                    self.write("<input type=\"checkbox\" disabled=\"\" checked=\"\"/> ")
                } else {
                    self.write("<input type=\"checkbox\" disabled=\"\"/> ")
                };
            }
            NodeKind::FootnoteReference { label } => {
                let (n, first) = self.notes.reference(label);
                if first {
                    self.write(&format!("<a id=\"fnref{n}\" href=\"#fn{n}\""))?;
                } else {
                    self.write(&format!("<a href=\"#fn{n}\""))?;
                }
                return self.write(&format!(" role=\"doc-noteref\"><sup>{n}</sup></a>"));
            }
            NodeKind::Image { dest, alt, title } => {
                self.write("<img src=\"")?;
                self.write_escaped(dest)?;
                self.write("\" alt=\"")?;
                self.write_escaped(alt)?;
                self.write("\"")?;
                self.title(title.as_deref())?;
                return self.write(">");
            }
            NodeKind::Link { dest, title } => {
                self.write("<a href=\"")?;
                self.write_escaped(dest)?;
                self.write("\"")?;
                self.title(title.as_deref())?;
                self.write(">")?;
                self.inlines(&node.children)?;
                return self.write("</a>");
            }
            NodeKind::Emphasis => "em",
            NodeKind::Strong => "strong",
            NodeKind::Mark => "mark",
            NodeKind::Insert => "ins",
            NodeKind::Delete => "del",
            NodeKind::Superscript => "sup",
            NodeKind::Subscript => "sub",
            _ => return self.block(node, false),
        };
        self.write(&format!("<{tag}>"))?;
        self.inlines(&node.children)?;
        self.write(&format!("</{tag}>"))
    }

    fn title(&mut self, title: Option<&str>) -> fmt::Result {
        if let Some(title) = title {
            self.write(" title=\"")?;
            self.write_escaped(title)?;
            self.write("\"")?;
        }
        Ok(())
    }

    /// Writes the referenced notes. Writing a note may reference further
    /// notes, which are appended and written in turn.
    fn endnotes(&mut self) -> fmt::Result {
        if self.notes.is_empty() {
            return Ok(());
        }
        self.ensure_newline()?;
        self.write("<section role=\"doc-endnotes\">\n<hr>\n<ol>\n")?;
        let mut index = 0;
        while let Some(label) = self.notes.label_at(index) {
            index += 1;
            let children = self
                .notes
                .definition(label)
                .map_or(&[][..], |def| &def.children[..]);
            self.note(index, children)?;
        }
        self.write("</ol>\n</section>\n")
    }

    /// One `<li>`, with the back-link in the note's last paragraph.
    fn note(&mut self, n: usize, children: &'a [Node]) -> fmt::Result {
        self.write(&format!("<li id=\"fn{n}\">\n"))?;
        let (body, last) = match children.split_last() {
            Some((last, body)) if last.kind == NodeKind::Paragraph => (body, Some(last)),
            _ => (children, None),
        };
        self.blocks(body, false)?;
        self.ensure_newline()?;
        self.write("<p>")?;
        if let Some(last) = last {
            self.inlines(&last.children)?;
        }
        self.write(&format!("<a href=\"#fnref{n}\" role=\"doc-backlink\">\u{21a9}\u{fe0e}</a>"))?;
        self.write("</p>\n</li>\n")
    }
}
