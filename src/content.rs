//! Static copy for the landing page.

pub const BRAND: &str = "AI Creator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Stages,
    Benefits,
    Testimonials,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Stages => "stages",
            Section::Benefits => "benefits",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "О проекте",
            Section::Stages => "Этапы",
            Section::Benefits => "Преимущества",
            Section::Testimonials => "Отзывы",
            Section::Contact => "Контакты",
        }
    }
}

/// Links in the header, in order.
pub const NAV_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Stages,
    Section::Benefits,
    Section::Testimonials,
];

/// Links in the footer, in order.
pub const FOOTER_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Stages,
    Section::Benefits,
    Section::Contact,
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Выпускников" },
    Stat { value: "$2M+", label: "Выручка студентов" },
    Stat { value: "50+", label: "Запущенных продуктов" },
    Stat { value: "4.9", label: "Рейтинг курса" },
];

pub const ABOUT_HIGHLIGHTS: [&str; 3] = ["Без сложного кода", "Готовые шаблоны", "Поддержка 24/7"];

pub struct Stage {
    pub icon: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient stops for the icon tile.
    pub colors: (&'static str, &'static str),
}

pub const STAGES: [Stage; 4] = [
    Stage {
        icon: "🎯",
        number: "01",
        title: "Идея и исследование",
        description: "Анализ рынка, поиск ниши и валидация концепции AI-продукта. Определяем целевую аудиторию и проблемы, которые решит продукт.",
        colors: ("#3b82f6", "#06b6d4"),
    },
    Stage {
        icon: "🧠",
        number: "02",
        title: "Проектирование",
        description: "Создание архитектуры, выбор технологий и моделей ИИ. Разработка прототипа и тестирование гипотез на реальных данных.",
        colors: ("#a855f7", "#ec4899"),
    },
    Stage {
        icon: "💻",
        number: "03",
        title: "Разработка MVP",
        description: "Быстрая разработка минимально жизнеспособного продукта. Интеграция API ИИ, настройка промптов и базовый функционал.",
        colors: ("#ec4899", "#f43f5e"),
    },
    Stage {
        icon: "🚀",
        number: "04",
        title: "Запуск и масштаб",
        description: "Вывод продукта на рынок, сбор обратной связи, итерации и масштабирование. Оптимизация моделей и рост пользовательской базы.",
        colors: ("#f97316", "#f59e0b"),
    },
];

pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "⚡",
        title: "Быстрый старт",
        description: "Начните создавать AI-продукты уже через неделю, даже без глубоких технических знаний",
    },
    Benefit {
        icon: "🧱",
        title: "Проверенные методы",
        description: "Работаем только с реальными кейсами и актуальными инструментами 2024 года",
    },
    Benefit {
        icon: "🪜",
        title: "Пошаговые инструкции",
        description: "Четкий план от идеи до первых пользователей без воды и теории ради теории",
    },
    Benefit {
        icon: "🌍",
        title: "Глобальный рынок",
        description: "Создавайте продукты для мирового рынка и масштабируйте безгранично",
    },
    Benefit {
        icon: "👥",
        title: "Сообщество",
        description: "Доступ к закрытому комьюнити создателей AI-продуктов и нетворкинг",
    },
    Benefit {
        icon: "🛠",
        title: "Техническая поддержка",
        description: "Помощь с интеграцией API, выбором моделей и оптимизацией затрат",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Александр Петров",
        role: "Основатель AI Startup",
        content: "За 3 месяца запустил свой первый AI-продукт. Материал структурирован отлично, все по делу без воды. Уже 500+ пользователей!",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Мария Соколова",
        role: "Product Manager",
        content: "Наконец-то поняла, как работают LLM под капотом. Смогла самостоятельно прототипировать AI-фичи для своего продукта.",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop&crop=face",
    },
    Testimonial {
        name: "Дмитрий Волков",
        role: "Indie Developer",
        content: "Создал AI-ассистента для маркетологов. Доход $3K/мес на подписках. Лучшее вложение времени за последний год.",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        let all = [
            Section::About,
            Section::Stages,
            Section::Benefits,
            Section::Testimonials,
            Section::Contact,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn stages_are_numbered_in_order() {
        for (i, stage) in STAGES.iter().enumerate() {
            assert_eq!(stage.number, format!("{:02}", i + 1));
        }
    }
}
