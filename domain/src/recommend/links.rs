//! Purchase links and share text

use crate::catalog::bean::Bean;

/// Where a purchase link appears; each spot has its own call to action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseContext {
    Main,
    Alternate,
    BlendComponent,
}

impl PurchaseContext {
    fn call_to_action(&self) -> &'static str {
        match self {
            PurchaseContext::Main => "BASEで購入する →",
            PurchaseContext::Alternate => "こちらも見る →",
            PurchaseContext::BlendComponent => "ストレートで試す →",
        }
    }
}

const NOT_READY: &str = "準備中 🫖";

/// Purchase button state for a bean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseLink {
    /// Shop URL; `None` renders a disabled button
    pub href: Option<String>,
    pub label: &'static str,
}

impl PurchaseLink {
    pub fn for_bean(bean: &Bean, context: PurchaseContext) -> Self {
        match bean.purchase_url() {
            Some(url) => Self {
                href: Some(url.to_string()),
                label: context.call_to_action(),
            },
            None => Self {
                href: None,
                label: NOT_READY,
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.href.is_some()
    }
}

/// Text shared after a diagnosis
pub fn share_text(type_name: &str) -> String {
    format!(
        "私のコーヒータイプは「{}」でした！あなたもモモンガコーヒーで診断してみよう ☕🐿️",
        type_name
    )
}
