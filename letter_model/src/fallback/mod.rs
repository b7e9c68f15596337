//! Static fallback content - the fixed dataset served when the external
//! store is unreachable, disabled, or missing a node.
//!
//! The table covers the root node in every supported language, plus the
//! first tier of branches, so the graph stays navigable offline.

use std::collections::HashMap;

use crate::content::{Choice, ContentNode, NodeKey, SecondaryPrompt};
use crate::language::Language;

/// Fixed, process-embedded table of content nodes. Read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct StaticFallbackTable {
    nodes: HashMap<NodeKey, ContentNode>,
}

impl StaticFallbackTable {
    /// Build the embedded dataset.
    pub fn new() -> Self {
        let nodes = build_nodes()
            .into_iter()
            .map(|node| (node.key(), node))
            .collect();
        Self { nodes }
    }

    /// Look up one node variant.
    pub fn get(&self, id: &str, language: Language) -> Option<&ContentNode> {
        self.nodes.get(&NodeKey::new(id, language))
    }

    /// Whether a variant exists.
    pub fn contains(&self, id: &str, language: Language) -> bool {
        self.nodes.contains_key(&NodeKey::new(id, language))
    }

    /// All node ids in the table, sorted and deduplicated.
    pub fn node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(|key| key.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Number of `(id, language)` variants in the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for StaticFallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

fn services_prompt(prompt: &str, labels: [&str; 3]) -> SecondaryPrompt {
    SecondaryPrompt::new(
        prompt,
        vec![
            Choice::new("web", labels[0], "web-details"),
            Choice::new("mobile", labels[1], "mobile-details"),
            Choice::new("cloud", labels[2], "cloud-details"),
        ],
    )
}

fn products_prompt(prompt: &str, labels: [&str; 2]) -> SecondaryPrompt {
    SecondaryPrompt::new(
        prompt,
        vec![
            Choice::new("software", labels[0], "software-details"),
            Choice::new("hardware", labels[1], "hardware-details"),
        ],
    )
}

fn build_nodes() -> Vec<ContentNode> {
    vec![
        // home
        ContentNode::new("home", Language::En)
            .with_title("Welcome to Our Interactive Experience")
            .with_body("What would you like to explore today?")
            .with_choice(Choice::new("option1", "Learn About Our Services", "services"))
            .with_choice(Choice::new("option2", "Discover Our Products", "products"))
            .with_choice(Choice::new("option3", "Contact Information", "contact")),
        ContentNode::new("home", Language::Ar)
            .with_title("مرحباً بك في تجربتنا التفاعلية")
            .with_body("ماذا تود أن تستكشف اليوم؟")
            .with_choice(Choice::new("option1", "تعرف على خدماتنا", "services"))
            .with_choice(Choice::new("option2", "اكتشف منتجاتنا", "products"))
            .with_choice(Choice::new("option3", "معلومات الاتصال", "contact")),
        ContentNode::new("home", Language::Fa)
            .with_title("به تجربه تعاملی ما خوش آمدید")
            .with_body("امروز چه چیزی را می‌خواهید کشف کنید؟")
            .with_choice(Choice::new("option1", "درباره خدمات ما بیاموزید", "services"))
            .with_choice(Choice::new("option2", "محصولات ما را کشف کنید", "products"))
            .with_choice(Choice::new("option3", "اطلاعات تماس", "contact")),
        // services
        ContentNode::new("services", Language::En)
            .with_title("Our Services")
            .with_body(
                "We provide comprehensive digital solutions including web development, \
                 mobile applications, and cloud services.",
            )
            .with_supplement(
                "Thank you for your interest in our services. We would love to discuss \
                 how we can help your business grow.",
            )
            .with_secondary(services_prompt(
                "Which service interests you most?",
                ["Web Development", "Mobile Apps", "Cloud Services"],
            )),
        ContentNode::new("services", Language::Ar)
            .with_title("خدماتنا")
            .with_body("نحن نقدم حلول رقمية شاملة تشمل تطوير المواقع والتطبيقات المحمولة وخدمات السحابة.")
            .with_supplement("شكراً لاهتمامك بخدماتنا. نود مناقشة كيف يمكننا مساعدة عملك على النمو.")
            .with_secondary(services_prompt(
                "أي خدمة تهمك أكثر؟",
                ["تطوير المواقع", "تطبيقات الجوال", "خدمات السحابة"],
            )),
        ContentNode::new("services", Language::Fa)
            .with_title("خدمات ما")
            .with_body("ما راه‌حل‌های دیجیتال جامعی ارائه می‌دهیم شامل توسعه وب، اپلیکیشن‌های موبایل و خدمات ابری.")
            .with_supplement("از علاقه شما به خدمات ما متشکریم. دوست داریم در مورد چگونگی کمک به رشد کسب‌وکار شما صحبت کنیم.")
            .with_secondary(services_prompt(
                "کدام خدمت بیشتر مورد علاقه شماست؟",
                ["توسعه وب", "اپلیکیشن موبایل", "خدمات ابری"],
            )),
        // products
        ContentNode::new("products", Language::En)
            .with_title("Our Products")
            .with_body(
                "Discover our innovative product line designed to streamline your \
                 workflow and boost productivity.",
            )
            .with_secondary(products_prompt(
                "What type of product are you looking for?",
                ["Software Solutions", "Hardware Products"],
            )),
        ContentNode::new("products", Language::Ar)
            .with_title("منتجاتنا")
            .with_body("اكتشف خط منتجاتنا المبتكر المصمم لتبسيط سير عملك وزيادة الإنتاجية.")
            .with_secondary(products_prompt(
                "ما نوع المنتج الذي تبحث عنه؟",
                ["حلول البرمجيات", "منتجات الأجهزة"],
            )),
        ContentNode::new("products", Language::Fa)
            .with_title("محصولات ما")
            .with_body("محصولات نوآورانه ما را کشف کنید که برای ساده‌سازی جریان کار و افزایش بهره‌وری طراحی شده‌اند.")
            .with_secondary(products_prompt(
                "به دنبال چه نوع محصولی هستید؟",
                ["راه‌حل‌های نرم‌افزاری", "محصولات سخت‌افزاری"],
            )),
        // contact
        ContentNode::new("contact", Language::En)
            .with_title("Contact Us")
            .with_body(
                "Get in touch with our team. We are here to help and answer any \
                 questions you may have.",
            )
            .with_supplement(
                "We look forward to hearing from you and discussing how we can work together.",
            ),
        ContentNode::new("contact", Language::Ar)
            .with_title("اتصل بنا")
            .with_body("تواصل مع فريقنا. نحن هنا للمساعدة والإجابة على أي أسئلة قد تكون لديك.")
            .with_supplement("نتطلع إلى سماع رأيك ومناقشة كيف يمكننا العمل معاً."),
        ContentNode::new("contact", Language::Fa)
            .with_title("تماس با ما")
            .with_body("با تیم ما در تماس باشید. ما اینجا هستیم تا کمک کنیم و به سوالات شما پاسخ دهیم.")
            .with_supplement("مشتاقانه منتظر شنیدن نظر شما و بحث در مورد چگونگی همکاری هستیم."),
    ]
}
