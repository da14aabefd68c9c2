//! Console output formatter for quiz, gacha and blend results

use beanquiz_application::QuestionView;
use beanquiz_domain::{
    Bean, BlendBreakdown, FlavorAxis, MAX_SCORE, PurchaseContext, PurchaseLink, Recommendation,
    ScoreVector, share_text,
};
use colored::Colorize;
use serde::Serialize;

const PROGRESS_WIDTH: usize = 20;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question with numbered choices; `focus` marks the
    /// keyboard-selected choice
    pub fn format_question(view: &QuestionView, focus: Option<usize>) -> String {
        let mut output = String::new();

        let filled = (view.progress_percent() / 100.0 * PROGRESS_WIDTH as f64).round() as usize;
        let filled = filled.min(PROGRESS_WIDTH);
        output.push_str(&format!(
            "\n{} [{}{}] {}\n\n",
            format!("Q{}", view.index + 1).cyan().bold(),
            "█".repeat(filled).cyan(),
            "░".repeat(PROGRESS_WIDTH - filled).dimmed(),
            view.progress_label().dimmed()
        ));

        output.push_str(&format!("{}\n\n", view.text.bold()));

        for (i, choice) in view.choices.iter().enumerate() {
            if focus == Some(i) {
                output.push_str(&format!("{} {}. {}\n", "›".yellow().bold(), i + 1, choice.bold()));
            } else {
                output.push_str(&format!("  {}. {}\n", i + 1, choice));
            }
        }

        output
    }

    /// Format the diagnosis result card
    pub fn format_diagnosis(result: &Recommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("あなたのコーヒータイプ"));
        output.push('\n');
        output.push_str(&Self::format_card(result));

        output.push_str(&Self::section_header("おすすめの一杯"));
        output.push_str(&Self::format_bean(&result.primary, PurchaseContext::Main));

        if let Some(alternate) = &result.alternate {
            output.push_str(&Self::section_header("こちらもおすすめ"));
            output.push_str(&format!("{}\n", alternate.blurb().italic()));
            output.push_str(&format!(
                "{}\n{}\n",
                alternate.bean.name.yellow().bold(),
                Self::format_purchase(&PurchaseLink::for_bean(
                    &alternate.bean,
                    PurchaseContext::Alternate
                ))
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Share:".dimmed(),
            share_text(&result.card.name)
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the omakase result card
    pub fn format_omakase(result: &Recommendation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("おまかせ"));
        output.push('\n');
        output.push_str(&Self::format_card(result));
        output.push_str(&Self::section_header("本日の一杯"));
        output.push_str(&Self::format_bean(&result.primary, PurchaseContext::Main));
        output.push_str(&Self::footer());

        output
    }

    /// Format a gacha pull
    pub fn format_gacha(bean: &Bean) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("🎰 ガチャ結果"));
        output.push_str(&format!("\n\n{}\n", bean.name.yellow().bold()));
        output.push_str(&format!("{}\n", bean.roast_line().dimmed()));
        output.push_str(&format!("{}\n\n", bean.comment()));
        output.push_str(&Self::format_profile(&bean.scores));
        output.push_str(&format!(
            "\n{}\n",
            Self::format_purchase(&PurchaseLink::for_bean(bean, PurchaseContext::Main))
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format a blend broken down into its components
    pub fn format_blend(breakdown: &BlendBreakdown) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&breakdown.title()));
        output.push('\n');
        if !breakdown.concept.is_empty() {
            output.push_str(&format!("\n{}\n", breakdown.concept.italic()));
        }

        for component in &breakdown.components {
            output.push_str(&Self::section_header(&format!(
                "{}  {}",
                component.role, component.bean.name
            )));
            output.push_str(&format!("{}\n\n", component.caption().dimmed()));
            output.push_str(&Self::format_profile(&component.bean.scores));
            output.push_str(&format!(
                "\n{}\n",
                Self::format_purchase(&PurchaseLink::for_bean(
                    &component.bean,
                    PurchaseContext::BlendComponent
                ))
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the bean catalog as a list
    pub fn format_bean_list(beans: &[Bean]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Beans"));
        output.push('\n');

        let width = beans.iter().map(|b| b.id.as_str().len()).max().unwrap_or(0);
        for bean in beans {
            let mut tags = Vec::new();
            if bean.featured {
                tags.push("★".yellow().to_string());
            }
            if bean.is_blend() {
                tags.push("blend".cyan().to_string());
            }
            output.push_str(&format!(
                "  {:<width$}  {}  {} {}\n",
                bean.id.as_str(),
                bean.name.bold(),
                bean.roast_label.dimmed(),
                tags.join(" "),
                width = width
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Text rendition of the five-axis profile
    pub fn format_profile(scores: &ScoreVector) -> String {
        let mut output = String::new();
        for axis in FlavorAxis::ALL {
            let value = scores.clamped(axis);
            let filled = value.round() as usize;
            let empty = (MAX_SCORE as usize).saturating_sub(filled);
            output.push_str(&format!(
                "  {} {}{} {:.1}\n",
                axis.label(),
                "■".repeat(filled).cyan(),
                "□".repeat(empty).dimmed(),
                value
            ));
        }
        output
    }

    /// Purchase button as a line of text
    pub fn format_purchase(link: &PurchaseLink) -> String {
        match &link.href {
            Some(href) => format!("{} {}", link.label.green().bold(), href.underline()),
            None => link.label.dimmed().to_string(),
        }
    }

    /// Transient notice
    pub fn format_notice(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message)
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_card(result: &Recommendation) -> String {
        let card = &result.card;
        let mut output = format!("\n{}  {}\n", card.emoji, card.name.bold());
        if !card.description.is_empty() {
            output.push_str(&format!("{}\n", card.description));
        }
        if !card.personality.is_empty() {
            output.push_str(&format!("{}\n", card.personality.dimmed()));
        }
        output
    }

    fn format_bean(bean: &Bean, context: PurchaseContext) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n{}\n", bean.name.yellow().bold()));
        output.push_str(&format!("{}\n", bean.roast_line().dimmed()));
        if !bean.description.is_empty() {
            output.push_str(&format!("{}\n", bean.description));
        }
        if !bean.flavor_notes.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Notes:".dimmed(),
                bean.flavor_notes.join(" / ")
            ));
        }
        output.push('\n');
        output.push_str(&Self::format_profile(&bean.scores));
        output.push_str(&format!(
            "\n{}\n",
            Self::format_purchase(&PurchaseLink::for_bean(bean, context))
        ));
        if bean.is_blend() {
            output.push_str(&format!("{}\n", "b: ブレンドの中身を見る".dimmed()));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(32))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(48).cyan())
    }
}
