//! Incremental SVG document writer

use std::io::{self, Write};

/// Writes SVG elements one line at a time, indenting by group depth.
///
/// Nothing is buffered: every call writes straight to the sink and returns its
/// error unchanged. Callers must pair every [`start_group`](Self::start_group)
/// with one [`end_group`](Self::end_group); the builder does not repair
/// unbalanced output.
pub struct SvgBuilder<W: Write> {
    writer: W,
    depth: usize,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder writing to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    /// Current group nesting depth (1 inside the root element)
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the underlying sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes the XML declaration and opens the root element
    pub fn write_header(&mut self, width: u32, height: u32) -> io::Result<()> {
        writeln!(self.writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            self.writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        self.depth = 1;
        Ok(())
    }

    /// Closes the root element
    pub fn write_footer(&mut self) -> io::Result<()> {
        debug_assert_eq!(self.depth, 1, "unbalanced groups at end of document");
        self.depth = 0;
        writeln!(self.writer, "</svg>")
    }

    /// Writes a `<style>` block. The CSS is trusted and written verbatim.
    pub fn write_style(&mut self, css: &str) -> io::Result<()> {
        let pad = indent(self.depth);
        writeln!(self.writer, "{pad}<style>\n{css}\n{pad}</style>")
    }

    /// Opens a `<g>` element
    pub fn start_group(&mut self, id: Option<&str>, class: Option<&str>) -> io::Result<()> {
        let mut attrs = String::new();
        push_escaped_attr(&mut attrs, "id", id);
        push_escaped_attr(&mut attrs, "class", class);
        writeln!(self.writer, "{}<g{}>", indent(self.depth), attrs)?;
        self.depth += 1;
        Ok(())
    }

    /// Closes the innermost `<g>` element
    pub fn end_group(&mut self) -> io::Result<()> {
        debug_assert!(self.depth > 0, "end_group without matching start_group");
        self.depth = self.depth.saturating_sub(1);
        writeln!(self.writer, "{}</g>", indent(self.depth))
    }

    /// Writes a `<rect>`, followed by a centered label when `caption` is non-empty
    #[allow(clippy::too_many_arguments)]
    pub fn write_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<&str>,
        stroke: Option<&str>,
        id: Option<&str>,
        class: Option<&str>,
        caption: Option<&str>,
    ) -> io::Result<()> {
        let mut attrs = format!(r#"x="{x:.2}" y="{y:.2}" width="{width:.2}" height="{height:.2}""#);
        push_attr(&mut attrs, "fill", fill);
        push_attr(&mut attrs, "stroke", stroke);
        push_escaped_attr(&mut attrs, "id", id);
        push_escaped_attr(&mut attrs, "class", class);
        writeln!(self.writer, "{}<rect {} />", indent(self.depth), attrs)?;

        match caption {
            Some(text) if !text.is_empty() => self.write_text(
                x + width / 2.0,
                y + height / 2.0,
                text,
                Some("middle"),
                None,
                Some("clip-label"),
            ),
            _ => Ok(()),
        }
    }

    /// Writes a `<path>`. Path data is generated internally and not escaped.
    pub fn write_path(
        &mut self,
        d: &str,
        fill: Option<&str>,
        stroke: Option<&str>,
        stroke_width: f64,
        class: Option<&str>,
    ) -> io::Result<()> {
        let mut attrs = format!(r#"d="{d}""#);
        push_attr(&mut attrs, "fill", fill);
        push_attr(&mut attrs, "stroke", stroke);
        push_stroke_width(&mut attrs, stroke_width);
        push_escaped_attr(&mut attrs, "class", class);
        writeln!(self.writer, "{}<path {} />", indent(self.depth), attrs)
    }

    /// Writes a `<line>` segment
    #[allow(clippy::too_many_arguments)]
    pub fn write_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Option<&str>,
        stroke_width: f64,
        class: Option<&str>,
    ) -> io::Result<()> {
        let mut attrs = format!(r#"x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#);
        push_attr(&mut attrs, "stroke", stroke);
        push_stroke_width(&mut attrs, stroke_width);
        push_escaped_attr(&mut attrs, "class", class);
        writeln!(self.writer, "{}<line {} />", indent(self.depth), attrs)
    }

    /// Writes a `<text>` element, vertically centered on `y`
    pub fn write_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        anchor: Option<&str>,
        id: Option<&str>,
        class: Option<&str>,
    ) -> io::Result<()> {
        let mut attrs = format!(r#"x="{x:.2}" y="{y:.2}""#);
        push_attr(&mut attrs, "text-anchor", anchor);
        push_escaped_attr(&mut attrs, "id", id);
        push_escaped_attr(&mut attrs, "class", class);
        attrs.push_str(r#" dominant-baseline="middle""#);
        writeln!(
            self.writer,
            "{}<text {}>{}</text>",
            indent(self.depth),
            attrs,
            escape_text(content)
        )
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn push_attr(attrs: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        attrs.push_str(&format!(r#" {name}="{value}""#));
    }
}

fn push_escaped_attr(attrs: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        attrs.push_str(&format!(r#" {name}="{}""#, escape_attr(value)));
    }
}

fn push_stroke_width(attrs: &mut String, stroke_width: f64) {
    if stroke_width > 0.0 {
        attrs.push_str(&format!(r#" stroke-width="{stroke_width:.2}""#));
    }
}

/// Escapes a string for use inside a double-quoted attribute
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a string for use as element text
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(builder: SvgBuilder<Vec<u8>>) -> String {
        String::from_utf8(builder.into_inner()).unwrap()
    }

    /// Accepts a fixed number of writes, then fails
    struct FailingWriter {
        writes_left: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes_left -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_attr(r#"a&b"<c>"#), "a&amp;b&quot;&lt;c&gt;");
        assert_eq!(escape_text(r#"a&b"<c>"#), "a&amp;b\"&lt;c&gt;");
    }

    #[test]
    fn test_header_and_footer() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder.write_header(800, 400).unwrap();
        assert_eq!(builder.depth(), 1);
        builder.write_footer().unwrap();
        assert_eq!(builder.depth(), 0);

        let svg = output(builder);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="800" height="400" viewBox="0 0 800 400""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_groups_track_depth_and_indent() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder.write_header(10, 10).unwrap();
        builder.start_group(Some("outer"), Some("track")).unwrap();
        builder.start_group(None, None).unwrap();
        assert_eq!(builder.depth(), 3);
        builder.end_group().unwrap();
        builder.end_group().unwrap();
        builder.write_footer().unwrap();

        let svg = output(builder);
        assert!(svg.contains("\n  <g id=\"outer\" class=\"track\">\n    <g>\n    </g>\n  </g>\n"));
    }

    #[test]
    fn test_group_attributes_are_escaped() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder.start_group(Some(r#"a"b"#), None).unwrap();
        assert_eq!(output(builder), "<g id=\"a&quot;b\">\n");
    }

    #[test]
    fn test_rect_without_caption() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder
            .write_rect(1.0, 2.0, 3.5, 4.0, Some("#fff"), None, None, Some("gap"), Some(""))
            .unwrap();
        assert_eq!(
            output(builder),
            "<rect x=\"1.00\" y=\"2.00\" width=\"3.50\" height=\"4.00\" fill=\"#fff\" class=\"gap\" />\n"
        );
    }

    #[test]
    fn test_rect_caption_is_centered_and_escaped() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder
            .write_rect(
                10.0,
                20.0,
                100.0,
                40.0,
                None,
                None,
                Some("clip-a"),
                Some("clip"),
                Some("Tom & Jerry"),
            )
            .unwrap();
        let svg = output(builder);
        assert!(svg.contains(
            r#"<text x="60.00" y="40.00" text-anchor="middle" class="clip-label" dominant-baseline="middle">Tom &amp; Jerry</text>"#
        ));
    }

    #[test]
    fn test_path_and_line_stroke_width() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder
            .write_path("M 0 1 L 2 3", Some("none"), Some("#FFB84D"), 3.0, Some("transition"))
            .unwrap();
        builder.write_line(0.0, 0.0, 0.0, 5.0, Some("#ccc"), 0.0, None).unwrap();
        let svg = output(builder);
        assert!(svg.contains(
            r##"<path d="M 0 1 L 2 3" fill="none" stroke="#FFB84D" stroke-width="3.00" class="transition" />"##
        ));
        assert!(svg.contains(
            r##"<line x1="0.00" y1="0.00" x2="0.00" y2="5.00" stroke="#ccc" />"##
        ));
    }

    #[test]
    fn test_style_is_verbatim() {
        let mut builder = SvgBuilder::new(Vec::new());
        builder.write_header(1, 1).unwrap();
        builder.write_style(".a > .b { fill: red; }").unwrap();
        assert!(output(builder).contains("  <style>\n.a > .b { fill: red; }\n  </style>\n"));
    }

    #[test]
    fn test_sink_error_is_returned() {
        let mut builder = SvgBuilder::new(FailingWriter { writes_left: 0 });
        let err = builder.write_header(10, 10).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
