//! HTML serialization of a preview `Layout`.
//!
//! Produces a self-contained fragment with inline styles so the preview can be
//! dropped into any page or opened directly. Output is byte-stable for a given
//! layout.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::render::preview::{
    CertificationItem, ContactKind, EducationItem, ExperienceItem, HeaderBlock, Layout, LinkKind,
    ProjectItem, SectionBlock, SkillGroup,
};
use crate::render::template::{HeaderFill, TemplateStyle};

const ACCENT: &str = "#2563eb";

pub fn to_html(layout: &Layout) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<article class=\"resume\" style=\"max-width:56rem;margin:0 auto;font-family:sans-serif\">\n");
    write_header(&mut out, &layout.header, &layout.style);

    out.push_str("<main style=\"padding:2rem\">\n");
    for section in &layout.sections {
        write_section(&mut out, section);
    }
    out.push_str("</main>\n");

    let _ = writeln!(
        out,
        "<footer style=\"padding:1rem;text-align:center;font-size:0.875rem;color:#6b7280\">{}</footer>",
        escape(layout.footer)
    );
    out.push_str("</article>\n");
    out
}

fn header_css(style: &TemplateStyle) -> String {
    let background = match style.header {
        HeaderFill::Solid { color } => color.to_string(),
        HeaderFill::Gradient { from, to } => {
            format!("linear-gradient(135deg,{from},{to})")
        }
    };
    let mut css = format!("padding:2rem;background:{background};color:{}", style.foreground);
    if let Some(border) = style.border_bottom {
        let _ = write!(css, ";border-bottom:1px solid {border}");
    }
    css
}

fn write_header(out: &mut String, header: &HeaderBlock, style: &TemplateStyle) {
    let _ = writeln!(out, "<header style=\"{}\">", header_css(style));
    if let Some(photo) = &header.photo {
        let _ = writeln!(
            out,
            "<img src=\"{}\" alt=\"Profile\" style=\"width:6rem;height:6rem;border-radius:50%;object-fit:cover\">",
            escape(photo.as_str())
        );
    }
    let _ = writeln!(out, "<h1>{}</h1>", escape(header.name.as_str()));
    if !header.contacts.is_empty() {
        out.push_str("<ul class=\"contacts\">\n");
        for row in &header.contacts {
            let _ = writeln!(
                out,
                "<li class=\"{}\">{}</li>",
                contact_class(row.kind),
                escape(row.value.as_str())
            );
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</header>\n");
}

fn contact_class(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "email",
        ContactKind::Phone => "phone",
        ContactKind::LinkedIn => "linkedin",
        ContactKind::GitHub => "github",
        ContactKind::Portfolio => "portfolio",
    }
}

fn write_section(out: &mut String, section: &SectionBlock) {
    out.push_str("<section>\n");
    let _ = writeln!(
        out,
        "<h2 style=\"color:{ACCENT}\">{}</h2>",
        escape(section.heading())
    );
    match section {
        SectionBlock::Objective(summary) => {
            let _ = writeln!(out, "<p>{}</p>", escape(summary.as_str()));
        }
        SectionBlock::Experience(items) => items.iter().for_each(|i| write_experience(out, i)),
        SectionBlock::Projects(items) => items.iter().for_each(|i| write_project(out, i)),
        SectionBlock::Education(items) => items.iter().for_each(|i| write_education(out, i)),
        SectionBlock::Skills(groups) => groups.iter().for_each(|g| write_skill_group(out, g)),
        SectionBlock::Certifications(items) => {
            items.iter().for_each(|i| write_certification(out, i))
        }
    }
    out.push_str("</section>\n");
}

fn write_entry_open(out: &mut String, title: &str, subtitle: Option<&str>) {
    let _ = writeln!(
        out,
        "<div class=\"entry\" style=\"border-left:4px solid {ACCENT};padding-left:1rem\">"
    );
    let _ = writeln!(out, "<h3>{}</h3>", escape(title));
    if let Some(subtitle) = subtitle {
        let _ = writeln!(out, "<p class=\"subtitle\">{}</p>", escape(subtitle));
    }
}

fn write_meta(out: &mut String, parts: &[String]) {
    let _ = writeln!(out, "<p class=\"meta\">{}</p>", escape(parts.join(" · ").as_str()));
}

fn write_experience(out: &mut String, item: &ExperienceItem) {
    write_entry_open(out, &item.job_title, Some(&item.company));
    let mut meta = Vec::new();
    if let Some(location) = &item.location {
        meta.push(location.clone());
    }
    meta.push(item.date_range.clone());
    write_meta(out, &meta);
    out.push_str("<ul>\n");
    for resp in &item.responsibilities {
        let _ = writeln!(out, "<li>{}</li>", escape(resp.as_str()));
    }
    out.push_str("</ul>\n</div>\n");
}

fn write_project(out: &mut String, item: &ProjectItem) {
    write_entry_open(out, &item.title, item.role.as_deref());
    for link in &item.links {
        let label = match link.kind {
            LinkKind::GitHub => "GitHub",
            LinkKind::Live => "Live",
        };
        let _ = writeln!(
            out,
            "<a href=\"{}\">{label}</a>",
            escape(link.url.as_str())
        );
    }
    write_meta(out, std::slice::from_ref(&item.date_range));
    let _ = writeln!(out, "<p>{}</p>", escape(item.description.as_str()));
    out.push_str("<ul class=\"tags\">\n");
    for tech in &item.technologies {
        let _ = writeln!(out, "<li>{}</li>", escape(tech.as_str()));
    }
    out.push_str("</ul>\n</div>\n");
}

fn write_education(out: &mut String, item: &EducationItem) {
    write_entry_open(out, &item.degree, Some(&item.institution));
    let mut meta = Vec::new();
    if let Some(location) = &item.location {
        meta.push(location.clone());
    }
    meta.push(item.date_range.clone());
    if let Some(grade) = &item.grade {
        meta.push(format!("Grade: {grade}"));
    }
    write_meta(out, &meta);
    out.push_str("</div>\n");
}

fn write_skill_group(out: &mut String, group: &SkillGroup) {
    let _ = writeln!(out, "<h3>{}</h3>", escape(group.category.as_str()));
    out.push_str("<ul class=\"badges\">\n");
    for badge in &group.skills {
        let colors = badge.tier.colors();
        let _ = writeln!(
            out,
            "<li style=\"background:{};color:{}\">{}</li>",
            colors.background,
            colors.foreground,
            escape(badge.label.as_str())
        );
    }
    out.push_str("</ul>\n");
}

fn write_certification(out: &mut String, item: &CertificationItem) {
    write_entry_open(out, &item.title, Some(&item.organization));
    let mut meta = vec![format!("Obtained: {}", item.obtained)];
    if let Some(expires) = &item.expires {
        meta.push(format!("Expires: {expires}"));
    }
    if let Some(id) = &item.credential_id {
        meta.push(format!("ID: {id}"));
    }
    write_meta(out, &meta);
    out.push_str("</div>\n");
}
