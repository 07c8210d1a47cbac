//! LaTeX/TikZ serialization of laid-out pages
//!
//! The layout crate hands over pages of plain millimeter-space
//! primitives; this module owns every piece of markup syntax. Each
//! page becomes one tikzpicture spanning the text area, so primitive
//! coordinates map straight through. Cross-references stay
//! placeholders (`\pageref`) for the compiler to resolve; the
//! generator never needs forward page numbers.

use std::fmt::Write;

use journal_layout::{
    Anchor, Circle, Color, Document, FontSize, Geometry, Glyph, HAlign, JournalOptions, Line,
    PageKind, Primitive, RectOutline, Span, TextLabel,
};

/// Serialize a document into a complete LaTeX source string.
///
/// `source_listing` is the optional appendix text blob; it is only
/// rendered when the document reserved a start page for it.
pub fn render_document(
    document: &Document,
    options: &JournalOptions,
    geom: &Geometry,
    source_listing: Option<&str>,
) -> String {
    let mut out = String::new();
    preamble(&mut out, options, geom);

    for page in &document.pages {
        if page.kind == PageKind::Content {
            if let Some(number) = page.number {
                let _ = writeln!(out, r"\setcounter{{page}}{{{number}}}");
            }
        }
        for anchor in &page.block.anchors {
            let _ = writeln!(out, r"\label{{{anchor}}}");
        }

        let _ = writeln!(out, r"\noindent\begin{{tikzpicture}}[x=1mm, y=1mm]");
        let _ = writeln!(
            out,
            r"\path[use as bounding box] (0,0) rectangle ({}, {});",
            mm(page.block.width_mm),
            mm(page.block.height_mm)
        );
        for prim in &page.block.primitives {
            primitive(&mut out, prim);
        }
        let _ = writeln!(out, r"\end{{tikzpicture}}");
        let _ = writeln!(out, r"\newpage");
    }

    if let (Some(start), Some(listing)) = (document.source_start, source_listing) {
        source_appendix(&mut out, options, start, listing);
    }

    out.push_str("\\end{document}\n");
    out
}

fn preamble(out: &mut String, options: &JournalOptions, geom: &Geometry) {
    let margins = options.margins;
    out.push_str("\\documentclass[10pt,twoside]{article}\n");
    // footskip=1mm pulls the folio up inside the bottom margin
    let _ = writeln!(
        out,
        "\\usepackage[paperwidth={}mm, paperheight={}mm, inner={}mm, outer={}mm, \
         top={}mm, bottom={}mm, footskip=1mm]{{geometry}}",
        mm(geom.page_width_mm),
        mm(geom.page_height_mm),
        mm(margins.inner_mm),
        mm(margins.outer_mm),
        mm(margins.top_mm),
        mm(margins.bottom_mm)
    );

    out.push_str(concat!(
        "\\usepackage{helvet}\n",
        "\\renewcommand{\\familydefault}{\\sfdefault}\n",
        "\\usepackage{xcolor}\n",
        "\\usepackage{tikz}\n",
        "\\usepackage{fancyhdr}\n",
    ));
    if options.include_source {
        out.push_str(concat!(
            "\\usepackage{listings}\n",
            "\\usepackage{pdflscape}\n",
            "\\usepackage{multicol}\n",
        ));
    }
    if options.whimsy {
        out.push_str("\\usepackage{fontawesome5}\n");
    }

    out.push_str(concat!(
        "\\pagestyle{fancy}\n",
        "\\fancyhf{}\n",
        "\\renewcommand{\\headrulewidth}{0pt}\n",
        "\\fancyfoot[C]{\\itshape \\small \\thepage}\n",
        "\\setlength{\\parindent}{0pt}\n",
        "\\setlength{\\parskip}{0pt}\n",
        "\\raggedbottom\n",
    ));

    // Table-of-contents rows for sections that may not exist render
    // as nothing until their label resolves
    out.push_str(concat!(
        "\\makeatletter\n",
        "\\newcommand{\\tocrowifdef}[2]{%\n",
        "  \\@ifundefined{r@#2}{}{#1: \\pageref{#2}}%\n",
        "}\n",
        "\\makeatother\n",
    ));

    out.push_str(concat!(
        "\\definecolor{guidegray}{gray}{0.6}\n",
        "\\definecolor{bordergray}{gray}{0.3}\n",
        "\\definecolor{textgray}{gray}{0.4}\n",
        "\\definecolor{sundayred}{rgb}{0.8, 0.3, 0.3}\n",
    ));

    out.push_str("\\begin{document}\n");
}

fn primitive(out: &mut String, prim: &Primitive) {
    match prim {
        Primitive::Line(line) => draw_line(out, line),
        Primitive::Rect(rect) => draw_rect(out, rect),
        Primitive::Circle(circle) => draw_circle(out, circle),
        Primitive::Text(label) => draw_text(out, label),
    }
}

fn draw_line(out: &mut String, line: &Line) {
    let dash = if line.dashed {
        ", dash pattern=on 0.5pt off 1pt"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        r"\draw[{}{dash}] ({}, {}) -- ({}, {});",
        color_name(line.color),
        mm(line.from.x),
        mm(line.from.y),
        mm(line.to.x),
        mm(line.to.y)
    );
}

fn draw_rect(out: &mut String, rect: &RectOutline) {
    let _ = writeln!(
        out,
        r"\draw[{}] ({}, {}) rectangle ({}, {});",
        color_name(rect.color),
        mm(rect.origin.x),
        mm(rect.origin.y),
        mm(rect.origin.x + rect.width_mm),
        mm(rect.origin.y + rect.height_mm)
    );
}

fn draw_circle(out: &mut String, circle: &Circle) {
    let _ = writeln!(
        out,
        r"\draw[{}] ({}, {}) circle ({});",
        color_name(circle.color),
        mm(circle.center.x),
        mm(circle.center.y),
        mm(circle.radius_mm)
    );
}

fn draw_text(out: &mut String, label: &TextLabel) {
    let mut node_opts = format!("anchor={}, inner sep=0pt", anchor_name(label.anchor));
    if let Some(width) = label.width_mm {
        let _ = write!(
            node_opts,
            ", text width={}mm, align={}",
            mm(width),
            halign_name(label.halign)
        );
    }
    if label.y_shift_mm != 0.0 {
        let _ = write!(node_opts, ", yshift={}mm", mm(label.y_shift_mm));
    }

    let mut content = String::new();
    content.push_str(size_command(label.size));
    if label.bold {
        content.push_str("\\bfseries ");
    }
    if label.italic {
        content.push_str("\\itshape ");
    }
    if label.mono {
        content.push_str("\\ttfamily ");
    }
    if label.color != Color::Black {
        let _ = write!(content, "\\color{{{}}} ", color_name(label.color));
    }
    for span in &label.spans {
        span_text(&mut content, span);
    }

    let _ = writeln!(
        out,
        r"\node[{node_opts}] at ({}, {}) {{{content}}};",
        mm(label.pos.x),
        mm(label.pos.y)
    );
}

fn span_text(out: &mut String, span: &Span) {
    match span {
        Span::Text(text) => out.push_str(&escape_latex(text)),
        Span::Styled { text, color, icon } => {
            let _ = write!(out, "\\textcolor{{{}}}{{", color_name(*color));
            if let Some(icon) = icon {
                let _ = write!(out, "\\{icon}~");
            }
            out.push_str(&escape_latex(text));
            out.push('}');
        }
        Span::PageRef(target) => {
            let _ = write!(out, "\\pageref{{{target}}}");
        }
        Span::OptionalTocRow { title, target } => {
            let _ = write!(out, "\\tocrowifdef{{{}}}{{{target}}}", escape_latex(title));
        }
        Span::Glyph(Glyph::ContinuationArrow) => out.push_str("$\\vec{p}$"),
        Span::Linebreak => out.push_str("\\\\ "),
    }
}

fn source_appendix(out: &mut String, options: &JournalOptions, start: u32, listing: &str) {
    let _ = writeln!(out, r"\setcounter{{page}}{{{start}}}");
    // Widen the text block for code; the inner margin keeps its
    // hole-punch clearance
    let _ = writeln!(
        out,
        r"\newgeometry{{top=10mm, bottom=10mm, inner={}mm, outer=10mm}}",
        mm(options.margins.inner_mm)
    );
    out.push_str(concat!(
        "\\begin{landscape}\n",
        "\\section*{Source Code}\n",
        "\\label{sec:source}\n",
        "\\lstset{\n",
        "  basicstyle=\\tiny\\ttfamily,\n",
        "  breaklines=true,\n",
        "  showstringspaces=false,\n",
        "  numbers=none,\n",
        "  frame=single,\n",
        "  rulecolor=\\color{lightgray}\n",
        "}\n",
        "\\begin{multicols}{3}\n",
        "\\begin{lstlisting}\n",
    ));
    // A literal end tag inside the listing would terminate it early
    let safe = listing.replace("\\end{lstlisting}", "\\end{lstlisting }");
    out.push_str(&safe);
    if !safe.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(concat!(
        "\\end{lstlisting}\n",
        "\\end{multicols}\n",
        "\\end{landscape}\n",
    ));
}

/// Escape text for LaTeX body context
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a millimeter coordinate without trailing zeros
fn mm(value: f32) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::BorderGray => "bordergray",
        Color::GuideGray => "guidegray",
        Color::TextGray => "textgray",
        Color::SundayRed => "sundayred",
        Color::Named(name) => name,
    }
}

fn anchor_name(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::NorthWest => "north west",
        Anchor::North => "north",
        Anchor::NorthEast => "north east",
        Anchor::West => "west",
        Anchor::Center => "center",
        Anchor::East => "east",
        Anchor::SouthWest => "south west",
        Anchor::South => "south",
        Anchor::SouthEast => "south east",
        Anchor::BaseEast => "base east",
    }
}

fn halign_name(halign: HAlign) -> &'static str {
    match halign {
        HAlign::Left => "left",
        HAlign::Center => "center",
        HAlign::Right => "right",
    }
}

fn size_command(size: FontSize) -> &'static str {
    match size {
        FontSize::Tiny => "\\tiny ",
        FontSize::Script => "\\scriptsize ",
        FontSize::Footnote => "\\footnotesize ",
        FontSize::Small => "\\small ",
        FontSize::Normal => "",
        FontSize::Large => "\\Large ",
        FontSize::Huge => "\\Huge ",
    }
}
