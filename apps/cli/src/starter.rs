//! Starter schemas: the source of a first draft before any editing.

use anyhow::{Context, Result};
use serde_json::{json, Value};

const TITLE_MAX_CHARS: usize = 50;

/// Produces a landing-page schema from a free-form prompt.
///
/// Implementations may call out to a model; the output is raw JSON that still
/// goes through [`landly_core::Validator`] before rendering.
pub trait SchemaSource {
    fn generate_landing_schema(&self, prompt: &str, payment_url: &str) -> Result<String>;
}

/// Deterministic source that fills a complete example landing around the prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct StarterSchema;

impl SchemaSource for StarterSchema {
    fn generate_landing_schema(&self, prompt: &str, payment_url: &str) -> Result<String> {
        let title = title_from_prompt(prompt);
        let mut schema = json!({
            "version": "1.0",
            "pages": [{
                "path": "/",
                "title": title,
                "description": "Сгенерированный лендинг с помощью AI",
                "blocks": [
                    {
                        "type": "hero",
                        "order": 0,
                        "props": {
                            "headline": title,
                            "subheadline": "Превратите свою идею в реальность",
                            "ctaText": "Начать сейчас",
                            "image": "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=1200"
                        }
                    },
                    {
                        "type": "features",
                        "order": 1,
                        "props": {
                            "title": "Наши преимущества",
                            "items": [
                                { "icon": "⚡", "title": "Быстро", "description": "Запустите ваш проект за считанные минуты" },
                                { "icon": "🎯", "title": "Эффективно", "description": "Проверенные решения для вашего бизнеса" },
                                { "icon": "💡", "title": "Инновационно", "description": "Современные технологии и подходы" }
                            ]
                        }
                    },
                    {
                        "type": "pricing",
                        "order": 2,
                        "props": {
                            "title": "Тарифы",
                            "plans": [
                                plan("Базовый", "9990", false, &["Все базовые функции", "Email поддержка", "1 пользователь"]),
                                plan("Премиум", "19990", true, &["Все функции Базового", "Приоритетная поддержка", "До 10 пользователей", "Аналитика"]),
                                plan("Бизнес", "49990", false, &["Все функции Премиум", "Персональный менеджер", "Безлимитные пользователи", "API доступ"])
                            ]
                        }
                    },
                    {
                        "type": "testimonials",
                        "order": 3,
                        "props": {
                            "title": "Отзывы клиентов",
                            "items": [
                                { "author": "Иван Петров", "role": "CEO, Startup Inc", "text": "Отличный сервис! Помог нам быстро запустить MVP.", "rating": 5 },
                                { "author": "Мария Сидорова", "role": "Маркетолог", "text": "Интуитивно понятный интерфейс и быстрая поддержка.", "rating": 5 }
                            ]
                        }
                    },
                    {
                        "type": "faq",
                        "order": 4,
                        "props": {
                            "title": "Частые вопросы",
                            "items": [
                                { "question": "Как быстро я могу начать?", "answer": "Регистрация занимает меньше минуты, и вы сразу получаете доступ ко всем функциям." },
                                { "question": "Можно ли отменить подписку?", "answer": "Да, вы можете отменить подписку в любой момент без дополнительных комиссий." },
                                { "question": "Какая поддержка доступна?", "answer": "Мы предлагаем email поддержку на всех тарифах и приоритетную поддержку на премиум-тарифах." }
                            ]
                        }
                    },
                    {
                        "type": "cta",
                        "order": 5,
                        "props": {
                            "title": "Готовы начать?",
                            "description": "Присоединяйтесь к тысячам довольных клиентов",
                            "buttonText": "Попробовать бесплатно"
                        }
                    }
                ]
            }],
            "theme": {
                "palette": {
                    "primary": "#3B82F6",
                    "secondary": "#8B5CF6",
                    "accent": "#F59E0B",
                    "background": "#FFFFFF",
                    "text": "#1F2937"
                },
                "font": "inter",
                "borderRadius": "lg"
            }
        });

        let payment_url = payment_url.trim();
        if !payment_url.is_empty() {
            schema["payment"] = json!({ "url": payment_url, "buttonText": "Оплатить" });
        }

        serde_json::to_string_pretty(&schema).context("failed to encode starter schema")
    }
}

fn plan(name: &str, price: &str, featured: bool, features: &[&str]) -> Value {
    let mut plan = json!({
        "name": name,
        "price": price,
        "currency": "₽",
        "period": "месяц",
        "features": features,
    });
    if featured {
        plan["featured"] = Value::Bool(true);
    }
    plan
}

/// Single-line title from the prompt, cut to 50 characters with an ellipsis
fn title_from_prompt(prompt: &str) -> String {
    let title = prompt.replace(['\n', '\r'], " ");
    let title = title.trim();
    if title.is_empty() {
        return "Ваш новый проект".to_string();
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        let cut: String = title.chars().take(TITLE_MAX_CHARS).collect();
        return format!("{}...", cut);
    }
    title.to_string()
}
