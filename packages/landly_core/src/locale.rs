use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale '{0}' (expected 'ru' or 'en')")]
pub struct UnknownLocale(pub String);

/// Language of the default copy inserted by normalization and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub fn phrases(self) -> &'static Phrases {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Locale::Ru),
            "en" => Ok(Locale::En),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_lang())
    }
}

/// Icon/title/description triple used to pad short feature lists
#[derive(Debug, Clone, Copy)]
pub struct FeatureTemplate {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Default copy for one locale
#[derive(Debug)]
pub struct Phrases {
    pub contact_button: &'static str,
    pub default_page_title: &'static str,
    pub feature_templates: [FeatureTemplate; 3],
    pub brand: &'static str,
    pub hero_headline: &'static str,
    pub hero_secondary_cta: &'static str,
    pub hero_eyebrow: &'static str,
    pub nav_action: &'static str,
    pub nav_items: [&'static str; 4],
    pub features_title: &'static str,
    pub features_empty: &'static str,
    pub pricing_title: &'static str,
    pub pricing_button: &'static str,
    pub pricing_empty: &'static str,
    pub testimonials_title: &'static str,
    pub testimonials_empty: &'static str,
    pub faq_title: &'static str,
    pub faq_empty: &'static str,
    pub cta_title: &'static str,
    pub empty_page: &'static str,
    unsupported_block: &'static str,
}

impl Phrases {
    /// Placeholder text for a block type the renderer has no template for
    pub fn unsupported_block(&self, block_type: &str) -> String {
        self.unsupported_block.replace("{type}", block_type)
    }
}

static RU: Phrases = Phrases {
    contact_button: "Связаться",
    default_page_title: "Лендинг",
    feature_templates: [
        FeatureTemplate {
            icon: "⚡",
            title: "Быстрый запуск",
            description: "Лендинг готов за минуты",
        },
        FeatureTemplate {
            icon: "🎯",
            title: "Убедительные тексты",
            description: "AI подстраивается под вашу нишу",
        },
        FeatureTemplate {
            icon: "🚀",
            title: "Рост конверсии",
            description: "Современный дизайн и CTA",
        },
    ],
    brand: "Landly",
    hero_headline: "Заголовок лендинга",
    hero_secondary_cta: "Подробнее",
    hero_eyebrow: "Инновационная платформа",
    nav_action: "Войти",
    nav_items: ["Возможности", "Цены", "Отзывы", "Контакты"],
    features_title: "Наши преимущества",
    features_empty: "Добавьте преимущества, чтобы показать их здесь",
    pricing_title: "Тарифы",
    pricing_button: "Выбрать тариф",
    pricing_empty: "Добавьте тарифы в описании проекта",
    testimonials_title: "Отзывы клиентов",
    testimonials_empty: "Добавьте отзывы, чтобы повысить доверие",
    faq_title: "Частые вопросы",
    faq_empty: "Добавьте вопросы и ответы, которые волнуют клиентов",
    cta_title: "Готовы начать?",
    empty_page: "Контент появится после первой генерации",
    unsupported_block: "Блок {type} пока не поддерживается",
};

static EN: Phrases = Phrases {
    contact_button: "Contact",
    default_page_title: "Landing page",
    feature_templates: [
        FeatureTemplate {
            icon: "⚡",
            title: "Fast launch",
            description: "Your landing page is ready in minutes",
        },
        FeatureTemplate {
            icon: "🎯",
            title: "Persuasive copy",
            description: "AI adapts the text to your niche",
        },
        FeatureTemplate {
            icon: "🚀",
            title: "Higher conversion",
            description: "Modern design and clear calls to action",
        },
    ],
    brand: "Landly",
    hero_headline: "Your landing page headline",
    hero_secondary_cta: "Learn more",
    hero_eyebrow: "Innovative platform",
    nav_action: "Sign in",
    nav_items: ["Features", "Pricing", "Reviews", "Contacts"],
    features_title: "Why choose us",
    features_empty: "Add features to show them here",
    pricing_title: "Pricing",
    pricing_button: "Choose plan",
    pricing_empty: "Add plans to the project description",
    testimonials_title: "What customers say",
    testimonials_empty: "Add testimonials to build trust",
    faq_title: "Frequently asked questions",
    faq_empty: "Add the questions your customers ask",
    cta_title: "Ready to start?",
    empty_page: "Content will appear after the first generation",
    unsupported_block: "Block {type} is not supported yet",
};
