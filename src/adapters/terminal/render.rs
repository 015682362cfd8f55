//! Plain-text rendering of the shell for the terminal front end.

use crate::domain::form::{InputForm, SubmitControl};
use crate::domain::recommendation::Benefit;
use crate::domain::results::{
    CardBody, CategoryCard, PrimaryList, ResultsView, Tooltip, ALTERNATIVES_HEADING,
    DEPLOYMENT_HEADING, EMPTY_CATEGORY, NOTES_HEADING, PLATFORMS_HEADING, RESET_LABEL, VIEW_TITLE,
};
use crate::domain::select::{Dropdown, SearchableSelect, NO_MATCHES};
use crate::domain::shell::{AppShell, ErrorBanner, ShellView};
use crate::domain::catalog::FormField;

const BOLD: u8 = 1;
const DIM: u8 = 2;
const RED: u8 = 31;
const INDIGO: u8 = 35;

pub const FORM_TITLE: &str = "Describe Your Vision";
pub const PRIORITIES_HEADING: &str = "Key Priorities (Select all that apply)";

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn shell(&self, shell: &AppShell) -> String {
        match shell.view() {
            ShellView::Form {
                banner,
                form,
                submit,
            } => {
                let mut out = String::new();
                if let Some(banner) = banner {
                    out.push_str(&self.banner(&banner));
                    out.push('\n');
                }
                out.push_str(&self.form(form, submit));
                out
            }
            ShellView::Results(view) => self.results(&view),
        }
    }

    pub fn banner(&self, banner: &ErrorBanner<'_>) -> String {
        [
            self.paint(RED, &format!("! {}", banner.title)),
            self.paint(RED, &format!("  {}", banner.message)),
        ]
        .join("\n")
            + "\n"
    }

    pub fn form(&self, form: &InputForm, submit: SubmitControl) -> String {
        let mut lines = vec![self.paint(BOLD, FORM_TITLE), String::new()];

        for (index, field) in FormField::ALL.iter().enumerate() {
            let select = form.select(*field);
            let shown = if select.search_text().is_empty() {
                self.paint(DIM, select.placeholder())
            } else {
                select.search_text().to_string()
            };
            lines.push(format!("  {}. {:<15} {}", index + 1, field.label(), shown));
            if let Some(dropdown) = self.dropdown(select) {
                lines.push(dropdown);
            }
        }

        lines.push(String::new());
        lines.push(self.paint(BOLD, PRIORITIES_HEADING));
        for (index, entry) in form.priority_entries().iter().enumerate() {
            let mark = if entry.checked { "[x]" } else { "[ ]" };
            lines.push(format!("  {} {:>2}. {}", mark, index + 1, entry.label));
        }

        lines.push(String::new());
        let button = format!("[ {} ]", submit.label);
        lines.push(if submit.disabled {
            self.paint(DIM, &button)
        } else {
            self.paint(INDIGO, &button)
        });
        lines.join("\n") + "\n"
    }

    /// Rendered dropdown of an open select, or `None` when closed.
    pub fn dropdown(&self, select: &SearchableSelect) -> Option<String> {
        match select.dropdown() {
            Dropdown::Closed => None,
            Dropdown::NoMatches => Some(format!("       {}", self.paint(DIM, NO_MATCHES))),
            Dropdown::Options(entries) => Some(
                entries
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let line = format!("       {:>2}) {}", i + 1, entry.label);
                        if entry.is_selected {
                            self.paint(INDIGO, &format!("{} ✓", line))
                        } else {
                            line
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }

    pub fn results(&self, view: &ResultsView) -> String {
        let mut lines = vec![
            self.paint(BOLD, VIEW_TITLE),
            format!("Optimized for {}", self.paint(BOLD, &view.project_name)),
            self.paint(DIM, &format!("({}: type `reset`)", RESET_LABEL)),
            String::new(),
        ];

        if let Some(deployment) = &view.deployment {
            lines.push(self.paint(INDIGO, DEPLOYMENT_HEADING));
            lines.push(format!("  {}", self.paint(BOLD, &deployment.title)));
            lines.push(format!("  {}", deployment.description));
            let tags: Vec<String> = deployment
                .platforms
                .iter()
                .map(|p| format!("[{}]", p))
                .collect();
            lines.push(format!("  {}: {}", PLATFORMS_HEADING, tags.join(" ")));
            lines.push(String::new());
        }

        for (index, card) in view.cards.iter().enumerate() {
            lines.push(self.card(index, card));
        }
        lines.join("\n") + "\n"
    }

    pub fn card(&self, index: usize, card: &CategoryCard) -> String {
        let bar = format!("━━ {}. {} ━━", index + 1, card.category.to_uppercase());
        let mut lines = vec![self.paint(card.accent.ansi(), &bar)];

        match &card.body {
            CardBody::Empty => lines.push(format!("  {}", self.paint(DIM, EMPTY_CATEGORY))),
            CardBody::TopPick(panel) => {
                lines.push(format!("  {}", self.paint(BOLD, &panel.name)));
                if !panel.description.is_empty() {
                    lines.push(format!("  {}", panel.description));
                }
                if let Some(primary) = &panel.primary {
                    lines.push(format!("  {}", self.paint(INDIGO, &primary.heading().to_uppercase())));
                    match primary {
                        PrimaryList::Advantages(benefits) => {
                            for benefit in benefits {
                                lines.push(format!("    ✓ {}", self.benefit(benefit)));
                            }
                        }
                        PrimaryList::Why(reasons) => {
                            for reason in reasons {
                                lines.push(format!("    • {}", reason));
                            }
                        }
                    }
                }
                if let Some(notes) = &panel.analysis_notes {
                    lines.push(format!("  {}", self.paint(DIM, &NOTES_HEADING.to_uppercase())));
                    for note in notes {
                        lines.push(format!("    • {}", self.paint(DIM, note)));
                    }
                }
                if !panel.alternatives.is_empty() {
                    let tags: Vec<String> = panel
                        .alternatives
                        .iter()
                        .map(|alt| format!("[{}]", alt.name))
                        .collect();
                    lines.push(format!(
                        "  {}: {}  {}",
                        ALTERNATIVES_HEADING,
                        tags.join(" "),
                        self.paint(DIM, &format!("(hover {} <n> to compare)", index + 1))
                    ));
                }
            }
        }
        lines.join("\n") + "\n"
    }

    pub fn benefit(&self, benefit: &Benefit) -> String {
        match &benefit.detail {
            Some(detail) => format!("{}{}", benefit.label, self.paint(BOLD, detail)),
            None => benefit.label.clone(),
        }
    }

    pub fn tooltip(&self, tooltip: &Tooltip) -> String {
        let mut lines = vec![self.paint(BOLD, &tooltip.name)];
        for reason in &tooltip.reasons {
            lines.push(format!("  ✓ {}", reason));
        }
        lines.push(self.paint(DIM, &format!("  Score: {}", tooltip.score)));
        lines.join("\n") + "\n"
    }
}
