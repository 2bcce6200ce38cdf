//! Sample catalogue and progress data shown by the screens.
//!
//! Everything here is fixed; there is no content backend.

/// Entry of the course catalogue (Cursos tab).
#[derive(Debug)]
pub struct Course {
    pub title: &'static str,
    pub category: &'static str,
    pub duration: &'static str,
    pub students: u32,
    pub rating: f32,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static CATALOG: [Course; 6] = [
    Course {
        title: "Mindfulness e Meditação",
        category: "Saúde Mental",
        duration: "8h",
        students: 1543,
        rating: 4.9,
        description: "Técnicas de mindfulness para reduzir estresse e ansiedade",
        icon: "🧘",
    },
    Course {
        title: "Gestão de Estresse Profissional",
        category: "Saúde Mental",
        duration: "6h",
        students: 2832,
        rating: 4.8,
        description: "Estratégias para gerenciar pressão no ambiente de trabalho",
        icon: "💆",
    },
    Course {
        title: "Inteligência Emocional",
        category: "Soft Skills",
        duration: "10h",
        students: 3241,
        rating: 4.7,
        description: "Desenvolva sua inteligência emocional para melhores relações",
        icon: "❤️",
    },
    Course {
        title: "IA Generativa Aplicada",
        category: "IA e Tecnologia",
        duration: "12h",
        students: 4123,
        rating: 4.9,
        description: "Aprenda a usar IA generativa no seu trabalho",
        icon: "🤖",
    },
    Course {
        title: "Liderança Consciente",
        category: "Gestão",
        duration: "8h",
        students: 1654,
        rating: 4.8,
        description: "Liderança com foco em bem-estar da equipe",
        icon: "👔",
    },
    Course {
        title: "Prevenção ao Burnout",
        category: "Saúde Mental",
        duration: "5h",
        students: 3876,
        rating: 4.9,
        description: "Identifique e previna a síndrome de burnout",
        icon: "🔥",
    },
];

/// Catalogue filters; index 0 shows everything.
pub const COURSE_FILTERS: [&str; 5] = [
    "Todos",
    "Saúde Mental",
    "IA e Tecnologia",
    "Gestão",
    "Soft Skills",
];

/// Courses visible under filter `filter` (an index into [`COURSE_FILTERS`]).
/// Unknown indices behave like "Todos".
pub fn filter_courses(filter: usize) -> impl Iterator<Item = &'static Course> {
    let category = COURSE_FILTERS.get(filter).copied().filter(|&c| c != COURSE_FILTERS[0]);
    CATALOG
        .iter()
        .filter(move |course| category.map_or(true, |c| course.category == c))
}

/// A course the user has started (Início tab).
#[derive(Debug)]
pub struct CourseProgress {
    pub title: &'static str,
    pub progress: u16,
    pub hours: &'static str,
    pub level: &'static str,
    pub category: &'static str,
}

pub static IN_PROGRESS: [CourseProgress; 4] = [
    CourseProgress {
        title: "Mindfulness no Trabalho",
        progress: 65,
        hours: "12h",
        level: "Intermediário",
        category: "Saúde Mental",
    },
    CourseProgress {
        title: "Gestão de Estresse Profissional",
        progress: 40,
        hours: "8h",
        level: "Básico",
        category: "Saúde Mental",
    },
    CourseProgress {
        title: "Prevenção de Burnout",
        progress: 80,
        hours: "6h",
        level: "Básico",
        category: "Saúde Mental",
    },
    CourseProgress {
        title: "IA Generativa Aplicada",
        progress: 20,
        hours: "10h",
        level: "Intermediário",
        category: "IA e Tecnologia",
    },
];

pub const INTEREST_AREAS: [&str; 5] = [
    "Saúde Mental",
    "IA e Tecnologia",
    "Gestão de Pessoas",
    "Sustentabilidade",
    "Comunicação",
];

pub struct LearningStats {
    pub courses_completed: u32,
    pub hours_learned: u32,
    pub skills_acquired: u32,
    pub week_streak: u32,
}

pub const STATS: LearningStats = LearningStats {
    courses_completed: 8,
    hours_learned: 42,
    skills_acquired: 12,
    week_streak: 7,
};

/// Hours studied and mood for one weekday (Progresso chart).
pub struct DayEntry {
    pub day: &'static str,
    pub hours: f32,
    pub mood: &'static str,
}

pub static WEEK: [DayEntry; 7] = [
    DayEntry { day: "Seg", hours: 2.5, mood: "😊" },
    DayEntry { day: "Ter", hours: 3.0, mood: "😄" },
    DayEntry { day: "Qua", hours: 1.5, mood: "😌" },
    DayEntry { day: "Qui", hours: 4.0, mood: "😊" },
    DayEntry { day: "Sex", hours: 2.0, mood: "😴" },
    DayEntry { day: "Sáb", hours: 3.5, mood: "😄" },
    DayEntry { day: "Dom", hours: 1.0, mood: "😌" },
];

pub fn max_week_hours() -> f32 {
    WEEK.iter().map(|d| d.hours).fold(0.0, f32::max)
}

/// Bar length for a day, scaled so the busiest day fills `max_len`.
pub fn bar_len(hours: f32, max_len: u16) -> u16 {
    let max = max_week_hours();
    if max <= 0.0 {
        return 0;
    }
    ((hours / max) * max_len as f32).round() as u16
}

pub struct Skill {
    pub name: &'static str,
    pub level: u16,
    pub category: &'static str,
}

pub static SKILLS: [Skill; 5] = [
    Skill { name: "Gestão de Estresse", level: 85, category: "Bem-estar" },
    Skill { name: "Mindfulness", level: 75, category: "Bem-estar" },
    Skill { name: "Inteligência Artificial", level: 65, category: "Tecnologia" },
    Skill { name: "Liderança Empática", level: 70, category: "Gestão" },
    Skill { name: "Comunicação Efetiva", level: 80, category: "Soft Skills" },
];

pub struct Achievement {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { icon: "🎯", title: "Mindful Week", description: "7 dias de práticas de mindfulness" },
    Achievement { icon: "🏆", title: "Equilíbrio Total", description: "Completou 5 cursos de bem-estar" },
    Achievement { icon: "⚡", title: "Foco Máximo", description: "20h de estudo em uma semana" },
    Achievement { icon: "🌟", title: "Bem-estar Contínuo", description: "30 dias sequenciais de prática" },
];

/// Profile header numbers.
pub struct ProfileStats {
    pub courses: u32,
    pub hours: u32,
    pub certificates: u32,
}

pub const PROFILE_STATS: ProfileStats = ProfileStats {
    courses: 24,
    hours: 156,
    certificates: 12,
};

pub const SETTINGS: [&str; 3] = [
    "Editar Perfil",
    "Preferências de Notificação",
    "Privacidade e Dados",
];

/// Thousands grouped with '.', as pt-BR writes them ("3.876 alunos").
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Rating with a decimal comma ("4,9").
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}").replace('.', ",")
}

/// "2.5" → "2,5h", "3.0" → "3h".
pub fn format_hours(hours: f32) -> String {
    if hours.fract() == 0.0 {
        format!("{}h", hours as u32)
    } else {
        format!("{hours:.1}h").replace('.', ",")
    }
}
